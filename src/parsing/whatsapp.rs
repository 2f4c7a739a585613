//! WhatsApp line grammar.
//!
//! Android-style exports put one header per message:
//!
//! ```text
//! 12/3/2023, 09:05 - Alice: hello
//! 12/3/2023, 09:06 - Bob added Carol
//! ```
//!
//! The header is `<date> <sep> <time> - <rest>`, where the date is `D/M/YY` or
//! `D/M/YYYY`, the time is `HH:MM`, and the separator is any run of commas and
//! spaces. `<rest>` is either `<sender>: <text>` or a system notification.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<date>[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4})[ ,]+(?P<time>[0-9]{2}:[0-9]{2}) - (?P<rest>.+)$")
        .expect("header pattern is valid")
});

// `[^:]+` stops at the first colon, so "Alice: note: x" yields sender "Alice".
static SENDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<sender>[^:]+): (?P<message>.*)$").expect("sender pattern is valid")
});

// `\r\n` first so it counts as one break.
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

/// Splits text into lines at every line boundary an export may contain.
///
/// Besides `\n` and `\r\n` this breaks on a lone `\r`, vertical tab, form
/// feed, the information separators `\x1c`-`\x1e`, NEL and the Unicode line
/// and paragraph separators. Terminators are not part of the lines, and a
/// final terminator does not produce a trailing empty line.
///
/// ```
/// use chatpulse::parsing::whatsapp::split_lines;
///
/// let lines: Vec<&str> = split_lines("one\rtwo\r\nthree\u{2028}\n").collect();
/// assert_eq!(lines, vec!["one", "two", "three", ""]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut pieces = LINE_BREAK_REGEX.split(text).peekable();
    std::iter::from_fn(move || {
        let piece = pieces.next()?;
        if piece.is_empty() && pieces.peek().is_none() {
            None
        } else {
            Some(piece)
        }
    })
}

/// Date format variants a header may use, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Day first with a 4-digit year.
    /// Example: 12/3/2023, 09:05
    FourDigitYear,
    /// Day first with a 2-digit year (00-68 → 20xx, 69-99 → 19xx).
    /// Example: 12/3/23, 09:05
    TwoDigitYear,
}

impl DateFormat {
    /// Returns the chrono format string for `"<date> <time>"`.
    pub fn chrono_format(self) -> &'static str {
        match self {
            DateFormat::FourDigitYear => "%d/%m/%Y %H:%M",
            DateFormat::TwoDigitYear => "%d/%m/%y %H:%M",
        }
    }

    /// Width of the year field this format accepts.
    ///
    /// chrono's `%Y` happily reads `23` as year 23, so the width is checked
    /// before handing the text over.
    pub fn year_digits(self) -> usize {
        match self {
            DateFormat::FourDigitYear => 4,
            DateFormat::TwoDigitYear => 2,
        }
    }

    /// Returns all format variants, 4-digit year first.
    pub fn all() -> &'static [DateFormat] {
        &[DateFormat::FourDigitYear, DateFormat::TwoDigitYear]
    }
}

/// The pieces of a matched header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// Raw date text, e.g. `12/3/2023`
    pub date: &'a str,
    /// Raw time text, e.g. `09:05`
    pub time: &'a str,
    /// Everything after `" - "`, trimmed
    pub rest: &'a str,
}

/// Matches a header line, returning its date, time and trailing text.
pub fn match_header(line: &str) -> Option<HeaderLine<'_>> {
    let caps = HEADER_REGEX.captures(line)?;
    Some(HeaderLine {
        date: caps.name("date")?.as_str(),
        time: caps.name("time")?.as_str(),
        rest: caps.name("rest")?.as_str().trim(),
    })
}

/// Splits `<sender>: <text>` at the first colon.
///
/// Returns `None` when `rest` is a system notification. Both parts are trimmed.
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    let caps = SENDER_REGEX.captures(rest)?;
    Some((
        caps.name("sender")?.as_str().trim(),
        caps.name("message")?.as_str().trim(),
    ))
}

/// Parse timestamp from date and time strings.
///
/// Tries each [`DateFormat`] in order and returns the first that parses
/// both the date and the time.
pub fn parse_whatsapp_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date_str} {time_str}");
    let year_width = date_str.rsplit('/').next().map_or(0, |y| y.chars().count());

    DateFormat::all()
        .iter()
        .filter(|format| format.year_digits() == year_width)
        .find_map(|format| NaiveDateTime::parse_from_str(&datetime_str, format.chrono_format()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_split_lines_terminators() {
        let text = "a\nb\r\nc\rd\x0be\x0cf\x1cg\x1dh\x1ei\u{85}j\u{2028}k\u{2029}l";
        let lines: Vec<&str> = split_lines(text).collect();
        assert_eq!(
            lines,
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l"]
        );
    }

    #[test]
    fn test_split_lines_blank_and_trailing() {
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("a\r\r\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(split_lines("a\n\nb").collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(split_lines("no break").collect::<Vec<_>>(), vec!["no break"]);
    }

    #[test]
    fn test_match_header_comma_separator() {
        let header = match_header("12/3/2023, 09:05 - Alice: hello").unwrap();
        assert_eq!(header.date, "12/3/2023");
        assert_eq!(header.time, "09:05");
        assert_eq!(header.rest, "Alice: hello");
    }

    #[test]
    fn test_match_header_space_separator() {
        let header = match_header("1/2/23 10:00 - A: x").unwrap();
        assert_eq!(header.date, "1/2/23");
        assert_eq!(header.rest, "A: x");
    }

    #[test]
    fn test_match_header_rejects_other_layouts() {
        assert!(match_header("[1/15/24, 10:30:45 AM] Alice: Hello").is_none());
        assert!(match_header("15.01.2024, 10:30 - Alice: Hello").is_none());
        assert!(match_header("12/3/2023, 9:05 - Alice: hello").is_none());
        assert!(match_header("just some text").is_none());
        assert!(match_header("12/3/2023, 09:05 - ").is_none());
    }

    #[test]
    fn test_match_header_ascii_digits_only() {
        // Arabic-Indic digits: not a header, so never a date error.
        assert!(match_header("١٢/٣/٢٠٢٣, ٠٩:٠٥ - Alice: hello").is_none());
        assert!(match_header("１２/3/2023, 09:05 - Alice: hello").is_none());
    }

    #[test]
    fn test_split_sender_first_colon_wins() {
        assert_eq!(split_sender("Alice: hello"), Some(("Alice", "hello")));
        assert_eq!(
            split_sender("Alice: Bob: are you there"),
            Some(("Alice", "Bob: are you there"))
        );
        assert_eq!(split_sender("Alice joined"), None);
        // The first colon is not followed by a space, so this is not a sender.
        assert_eq!(split_sender("Meeting at 10:30: bring snacks"), None);
    }

    #[test]
    fn test_parse_timestamp_four_digit_year() {
        let ts = parse_whatsapp_timestamp("1/2/2023", "10:00").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 2, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (10, 0, 0));
    }

    #[test]
    fn test_parse_timestamp_two_digit_year() {
        let ts = parse_whatsapp_timestamp("25/12/23", "23:59").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 12, 25));

        let ts = parse_whatsapp_timestamp("25/12/99", "00:00").unwrap();
        assert_eq!(ts.year(), 1999);
    }

    #[test]
    fn test_parse_timestamp_rejects_invalid() {
        assert!(parse_whatsapp_timestamp("31/02/2023", "10:00").is_none());
        assert!(parse_whatsapp_timestamp("1/13/2023", "10:00").is_none());
        assert!(parse_whatsapp_timestamp("1/1/2023", "24:30").is_none());
        assert!(parse_whatsapp_timestamp("1/1/202", "10:00").is_none());
    }
}
