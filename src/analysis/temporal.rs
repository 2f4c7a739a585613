//! Time-of-day, weekday and per-day histograms.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike};

use crate::Message;

/// Message counts binned by hour, weekday and calendar day.
///
/// Weekdays are numbered from Monday (0) to Sunday (6). Only bins that
/// received at least one message are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporalProfile {
    pub hourly: BTreeMap<u32, usize>,
    pub weekday: BTreeMap<u32, usize>,
    pub per_day: BTreeMap<NaiveDate, usize>,
}

impl TemporalProfile {
    /// Bins every message it is given; callers pass participant messages.
    pub fn from_messages<'a, I>(messages: I) -> Self
    where
        I: IntoIterator<Item = &'a Message>,
    {
        let mut profile = Self::default();
        for message in messages {
            let timestamp = message.timestamp();
            *profile.hourly.entry(timestamp.hour()).or_insert(0) += 1;
            *profile
                .weekday
                .entry(timestamp.weekday().num_days_from_monday())
                .or_insert(0) += 1;
            *profile.per_day.entry(timestamp.date()).or_insert(0) += 1;
        }
        profile
    }

    /// Number of distinct days with at least one message.
    pub fn active_days(&self) -> usize {
        self.per_day.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_bins() {
        // 2023-03-12 is a Sunday, 2023-03-13 a Monday.
        let messages = vec![
            Message::participant(at("2023-03-12 09:05"), "Alice", "oi"),
            Message::participant(at("2023-03-12 09:40"), "Bob", "oi"),
            Message::participant(at("2023-03-13 22:00"), "Alice", "boa noite"),
        ];
        let profile = TemporalProfile::from_messages(&messages);

        assert_eq!(profile.hourly, BTreeMap::from([(9, 2), (22, 1)]));
        assert_eq!(profile.weekday, BTreeMap::from([(0, 1), (6, 2)]));
        assert_eq!(profile.active_days(), 2);
        assert_eq!(
            profile.per_day.get(&NaiveDate::from_ymd_opt(2023, 3, 12).unwrap()),
            Some(&2)
        );
    }

    #[test]
    fn test_empty() {
        let profile = TemporalProfile::from_messages(&Vec::<Message>::new());
        assert!(profile.hourly.is_empty());
        assert_eq!(profile.active_days(), 0);
    }
}
