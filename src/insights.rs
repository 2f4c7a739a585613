//! Plain-text summaries of a [`StatisticsReport`].
//!
//! These are presentation helpers: they read a finished report and never
//! recompute anything.

use std::fmt::Write as _;

use crate::analysis::report::weekday_name;
use crate::analysis::{RelationshipScore, StatisticsReport};

/// Text returned by [`build_insights`] when no section applies.
pub const NO_INSIGHTS: &str = "No notable insights could be drawn from this conversation.";

/// Builds a multi-paragraph summary of the most telling figures.
///
/// Paragraphs are separated by a blank line and appear in a fixed order:
/// volume, response times, sentiment, participation, busiest hours, busiest
/// weekday, frequent words and favourite emoji.
pub fn build_insights(report: &StatisticsReport) -> String {
    let mut parts: Vec<String> = Vec::new();

    if report.total_messages > 0 && report.duration_days != 0 {
        let per_day = report.total_messages as f64 / report.duration_days.max(1) as f64;
        parts.push(format!(
            "Total volume: {} messages over {} days (average of {:.1}/day).",
            report.total_messages, report.duration_days, per_day
        ));
    }

    if let Some(average) = report.overall_average_response_time_minutes {
        parts.push(format!(
            "Average response time: {average:.1} min between participant messages."
        ));
        if !report.average_response_time_minutes.is_empty() {
            parts.push(format!(
                "Individual response times:\n{}",
                format_response_times(report)
            ));
        }
    }

    if let Some(overall) = report.overall_sentiment_score {
        parts.push(format!(
            "Sentiment index (positive vs negative words): {overall:+.2}."
        ));
        if !report.sentiment_per_participant.is_empty() {
            parts.push(format!(
                "Sentiment per participant:\n{}",
                format_sentiment(report)
            ));
        }
    }

    if !report.participant_share.is_empty() {
        let lines: Vec<String> = report
            .shares_descending()
            .into_iter()
            .map(|(sender, share)| format!("- {sender} sent {share:.1}% of the messages"))
            .collect();
        parts.push(format!("Participation per person:\n{}", lines.join("\n")));
    }

    let hours = report.busiest_hours(3);
    if !hours.is_empty() {
        let formatted: Vec<String> = hours
            .iter()
            .map(|(hour, count)| format!("{hour:02}h ({count} messages)"))
            .collect();
        parts.push(format!("Most active hours: {}", formatted.join(", ")));
    }

    if let Some((weekday, count)) = report.busiest_weekday() {
        parts.push(format!(
            "Busiest day: {} ({count} messages)",
            weekday_name(weekday)
        ));
    }

    let words = format_top_words(report);
    if !words.is_empty() {
        parts.push(format!("Most frequent words:\n{words}"));
    }

    if !report.emoji_counts.is_empty() {
        let top: Vec<String> = report
            .emoji_counts
            .iter()
            .take(5)
            .map(|(emoji, count)| format!("{emoji} ({count})"))
            .collect();
        parts.push(format!("Favourite emoji: {}", top.join(", ")));
    }

    if parts.is_empty() {
        return NO_INSIGHTS.to_string();
    }
    parts.join("\n\n")
}

fn format_response_times(report: &StatisticsReport) -> String {
    let mut entries: Vec<(&String, &f64)> = report.average_response_time_minutes.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(sender, minutes)| format!("- {sender}: {minutes:.1} min"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_sentiment(report: &StatisticsReport) -> String {
    let mut entries: Vec<_> = report.sentiment_per_participant.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(sender, score)| {
            format!(
                "- {sender}: score {:+.2} (words +{}/-{})",
                score.sentiment_score, score.positive, score.negative
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_top_words(report: &StatisticsReport) -> String {
    report
        .top_words_per_participant
        .iter()
        .filter(|(_, words)| !words.is_empty())
        .map(|(sender, words)| {
            let top: Vec<String> = words
                .iter()
                .take(5)
                .map(|(word, count)| format!("{word} ({count})"))
                .collect();
            format!("- {sender}: {}", top.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the score, its components and the headline inputs, one per line.
pub fn summarize_relationship_score(score: &RelationshipScore) -> String {
    let mut out = format!("Relationship score: {:.1}/100.", score.score);

    if let Some(components) = &score.components {
        let formatted: Vec<String> = components
            .iter()
            .map(|(name, value)| format!("{} {value:.0}/100", component_label(name)))
            .collect();
        let _ = write!(out, "\nComponents: {}.", formatted.join(", "));
    }

    if let Some(inputs) = &score.inputs {
        let _ = write!(
            out,
            "\nAverage messages per active day: {:.2}.",
            inputs.average_messages_per_active_day
        );
        let _ = write!(
            out,
            "\nPositive emoji ratio: {:.1}%.",
            inputs.positive_emoji_ratio * 100.0
        );
        if let Some(minutes) = inputs.average_response_time_minutes {
            let _ = write!(out, "\nAverage response time (min): {minutes:.1}.");
        }
        if let Some(sentiment) = inputs.overall_sentiment_score {
            let _ = write!(
                out,
                "\nOverall sentiment (words): {sentiment:+.2} (scale -1 to 1)."
            );
        }
    }

    out
}

fn component_label(name: &str) -> &str {
    match name {
        "positive_emoji" => "positive emoji",
        "responsiveness" => "response time",
        other => other,
    }
}

/// Product suggestions derived from the report, without duplicates.
pub fn build_suggestions(report: &StatisticsReport) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    let score = report.relationship_score.score;
    suggestions.push(if score >= 80.0 {
        "Launch a premium plan for highly engaged couples with weekly reports and personalised challenges to keep the current level."
    } else if score >= 60.0 {
        "Offer an insights bundle with early warnings (such as drops in engagement) and light reconnection tasks for couples on the rise."
    } else {
        "Offer guided follow-up services (coaching or partner therapists) for couples who need support to improve their communication."
    });

    suggestions.push(if report.average_messages_per_active_day >= 25.0 {
        "Monetise through a subscription with daily history and contextual reminders, building on the high average message volume."
    } else {
        "Add a freemium tier with monthly reports and an upsell to detailed analysis once engagement grows."
    });

    match report.overall_average_response_time_minutes {
        Some(minutes) if minutes > 45.0 => suggestions.push(
            "Build smart nudges that flag slow replies and offer ready-made prompts to re-engage.",
        ),
        Some(minutes) if minutes < 10.0 => suggestions.push(
            "Try light gamification with fast-reply goals and digital rewards for highly responsive couples.",
        ),
        _ => {}
    }

    if report.participants.len() == 2 && report.positive_emoji_ratio >= 0.1 {
        suggestions.push(
            "Explore partnerships with wellness and couple-experience brands (gift cards, discounts) triggered by positive engagement.",
        );
    } else if report.duration_days >= 180 {
        suggestions.push(
            "Sell corporate bundles to therapists or coaches with progress dashboards for long-term follow-up.",
        );
    }

    match report.overall_sentiment_score {
        Some(sentiment) if sentiment < -0.1 => suggestions.push(
            "Add a mood alert that points to mediation content or partner professionals when the tone turns negative.",
        ),
        Some(sentiment) if sentiment > 0.2 => suggestions.push(
            "Run marketing campaigns featuring positive stories (with consent), positioning the product as a reinforcer of good habits.",
        ),
        _ => {}
    }

    let mut unique: Vec<&'static str> = Vec::with_capacity(suggestions.len());
    for suggestion in suggestions {
        if !unique.contains(&suggestion) {
            unique.push(suggestion);
        }
    }
    unique
}
