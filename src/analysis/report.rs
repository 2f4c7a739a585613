//! The statistics report.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;

use super::score::RelationshipScore;
use super::sentiment::SentimentScore;

/// Everything derived from one conversation.
///
/// Only messages with non-empty content are counted, system notices
/// included in the totals. Per-participant maps follow the order in which
/// participants first spoke; histograms are sorted by key.
///
/// The [`Default`] value is the report of an empty conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub total_messages: usize,
    pub system_messages: usize,
    pub participant_messages: usize,
    /// Every participant of the conversation, sorted.
    pub participants: Vec<String>,
    pub messages_per_participant: IndexMap<String, usize>,
    /// Percentage of `total_messages`.
    pub participant_share: IndexMap<String, f64>,
    pub average_chars_per_message: IndexMap<String, f64>,
    pub average_words_per_message: IndexMap<String, f64>,
    pub top_words_per_participant: IndexMap<String, Vec<(String, usize)>>,
    /// Most used emoji, highest count first.
    pub emoji_counts: Vec<(String, usize)>,
    /// Hour of day (0-23) to message count.
    pub hourly_distribution: BTreeMap<u32, usize>,
    /// Weekday (0 = Monday) to message count.
    pub weekday_distribution: BTreeMap<u32, usize>,
    pub messages_per_day: BTreeMap<NaiveDate, usize>,
    pub first_message_at: Option<NaiveDateTime>,
    pub last_message_at: Option<NaiveDateTime>,
    pub duration_days: i64,
    pub active_days_with_messages: usize,
    pub average_messages_per_active_day: f64,
    pub positive_emoji_ratio: f64,
    /// Average reply latency in minutes, per sender.
    pub average_response_time_minutes: IndexMap<String, f64>,
    pub overall_average_response_time_minutes: Option<f64>,
    pub sentiment_per_participant: IndexMap<String, SentimentScore>,
    pub overall_sentiment_score: Option<f64>,
    pub relationship_score: RelationshipScore,
}

impl StatisticsReport {
    /// Whether any content-bearing message was counted.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Busiest weekday (0 = Monday). Ties go to the earlier day.
    pub fn busiest_weekday(&self) -> Option<(u32, usize)> {
        busiest(&self.weekday_distribution)
    }

    /// The `n` busiest hours, highest count first. Ties go to the earlier hour.
    pub fn busiest_hours(&self, n: usize) -> Vec<(u32, usize)> {
        let mut hours: Vec<(u32, usize)> = self
            .hourly_distribution
            .iter()
            .map(|(hour, count)| (*hour, *count))
            .collect();
        hours.sort_by(|a, b| b.1.cmp(&a.1));
        hours.truncate(n);
        hours
    }

    /// Participants by share, largest first. Ties keep first-appearance order.
    pub fn shares_descending(&self) -> Vec<(&str, f64)> {
        let mut shares: Vec<(&str, f64)> = self
            .participant_share
            .iter()
            .map(|(name, share)| (name.as_str(), *share))
            .collect();
        shares.sort_by(|a, b| b.1.total_cmp(&a.1));
        shares
    }
}

fn busiest(distribution: &BTreeMap<u32, usize>) -> Option<(u32, usize)> {
    distribution
        .iter()
        .fold(None, |best, (key, count)| match best {
            Some((_, best_count)) if best_count >= *count => best,
            _ => Some((*key, *count)),
        })
}

/// English weekday name for a Monday-based index.
pub fn weekday_name(index: u32) -> &'static str {
    match index {
        0 => "Monday",
        1 => "Tuesday",
        2 => "Wednesday",
        3 => "Thursday",
        4 => "Friday",
        5 => "Saturday",
        6 => "Sunday",
        _ => "unknown day",
    }
}
