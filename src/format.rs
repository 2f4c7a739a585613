//! Rendering of statistics reports.
//!
//! The library never prints; [`render`] returns the text and
//! [`write_to_format`] puts it in a file.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::format::{OutputFormat, render};
//! use chatpulse::{compute_statistics, parse_exported_text};
//!
//! let conversation = parse_exported_text("12/3/2023, 09:00 - Ana: oi")?;
//! let report = compute_statistics(&conversation);
//!
//! let text = render(&report, OutputFormat::Text)?;
//! assert!(text.starts_with("=== Conversation summary ==="));
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analysis::StatisticsReport;
use crate::error::{ChatpulseError, Result};
use crate::insights::{build_insights, build_suggestions, summarize_relationship_score};

/// Output format for statistics reports.
///
/// # Example
///
/// ```rust
/// use chatpulse::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("json").unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.extension(), "json");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Human-readable summary, insights and suggestions (default)
    #[default]
    Text,

    /// The full report as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders a report in the given format.
pub fn render(report: &StatisticsReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        #[allow(unreachable_patterns)]
        _ => Err(ChatpulseError::invalid_config(format!(
            "output format {format} requires the 'json-output' feature to be enabled"
        ))),
    }
}

/// Renders a report and writes it to `path`.
pub fn write_to_format(
    report: &StatisticsReport,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let mut rendered = render(report, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    fs::write(path, rendered)?;
    Ok(())
}

fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_string(), |ts| ts.format("%d/%m/%Y %H:%M").to_string())
}

/// Builds the text report: summary, score, insights and suggestions.
pub fn render_text(report: &StatisticsReport) -> String {
    let mut out = String::new();

    out.push_str("=== Conversation summary ===\n");
    let _ = writeln!(out, "Total messages: {}", report.total_messages);
    let _ = writeln!(out, "Participant messages: {}", report.participant_messages);
    let _ = writeln!(out, "System messages: {}", report.system_messages);
    let _ = writeln!(out, "Start: {}", format_timestamp(report.first_message_at));
    let _ = writeln!(out, "End: {}", format_timestamp(report.last_message_at));
    let _ = writeln!(out, "Duration (days): {}", report.duration_days);

    out.push_str("\nMessages per participant:\n");
    let mut counts: Vec<(&String, &usize)> = report.messages_per_participant.iter().collect();
    counts.sort_by(|a, b| b.1.cmp(a.1));
    for (sender, count) in counts {
        let share = report.participant_share.get(sender).copied().unwrap_or(0.0);
        let _ = writeln!(out, "- {sender}: {count} messages ({share:.1}% of total)");
    }

    out.push_str("\nTop emoji:\n");
    if report.emoji_counts.is_empty() {
        out.push_str("No emoji found.\n");
    } else {
        for (emoji, count) in report.emoji_counts.iter().take(5) {
            let _ = writeln!(out, "- {emoji}: {count}");
        }
    }

    let overall_response = report.overall_average_response_time_minutes;
    if overall_response.is_some() || !report.average_response_time_minutes.is_empty() {
        out.push_str("\nAverage response time (min):\n");
        if let Some(minutes) = overall_response {
            let _ = writeln!(out, "- Overall: {minutes:.1}");
        }
        let mut entries: Vec<_> = report.average_response_time_minutes.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (sender, minutes) in entries {
            let _ = writeln!(out, "- {sender}: {minutes:.1}");
        }
    }

    let overall_sentiment = report.overall_sentiment_score;
    if overall_sentiment.is_some() || !report.sentiment_per_participant.is_empty() {
        out.push_str("\nSentiment (words, scale -1 to 1):\n");
        if let Some(sentiment) = overall_sentiment {
            let _ = writeln!(out, "- Overall: {sentiment:+.2}");
        }
        let mut entries: Vec<_> = report.sentiment_per_participant.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (sender, score) in entries {
            let _ = writeln!(out, "- {sender}: {:+.2}", score.sentiment_score);
        }
    }

    out.push_str("\nHourly distribution:\n");
    if report.hourly_distribution.is_empty() {
        out.push_str("Not enough data.\n");
    } else {
        for (hour, count) in &report.hourly_distribution {
            let _ = writeln!(out, "- {hour:02}h: {count}");
        }
    }

    out.push_str("\n=== Relationship score ===\n");
    out.push_str(&summarize_relationship_score(&report.relationship_score));
    out.push('\n');

    out.push_str("\n=== Insights ===\n");
    out.push_str(&build_insights(report));
    out.push('\n');

    let suggestions = build_suggestions(report);
    if !suggestions.is_empty() {
        out.push_str("\n=== Suggestions ===\n");
        for suggestion in suggestions {
            let _ = writeln!(out, "- {suggestion}");
        }
    }

    out
}
