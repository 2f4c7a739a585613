//! The statistics engine.
//!
//! [`compute_statistics`] turns a [`Conversation`] into a
//! [`StatisticsReport`]. It is a pure function: all lexicons are read-only
//! statics and every accumulator is local to the call, so conversations can
//! be analysed concurrently.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::{compute_statistics, parse_exported_text};
//!
//! let conversation = parse_exported_text(
//!     "12/3/2023, 09:00 - Ana: bom dia, amor 😍\n\
//!      12/3/2023, 09:04 - Bia: bom dia! 😊",
//! )?;
//! let report = compute_statistics(&conversation);
//!
//! assert_eq!(report.participant_messages, 2);
//! assert_eq!(report.overall_average_response_time_minutes, Some(4.0));
//! assert_eq!(report.relationship_score.scale, "0-100");
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

pub mod counter;
pub mod lexicon;
pub mod report;
pub mod response;
pub mod score;
pub mod sentiment;
pub mod temporal;
pub mod text;

pub use counter::FrequencyCounter;
pub use report::StatisticsReport;
pub use response::ResponseTimes;
pub use score::{RelationshipScore, ScoreComponents, ScoreInputs};
pub use sentiment::SentimentScore;
pub use temporal::TemporalProfile;

use indexmap::IndexMap;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::{Conversation, Message};

/// Fractional digits that print any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds to `places` decimal places, ties to even.
///
/// The decision is taken on the exact decimal expansion of `value`, not on
/// `value * 10^places`: `0.025` is stored slightly above the tie and rounds
/// to `0.03`.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return value;
    };

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(places))
        .collect();
    let next = fraction.as_bytes().get(places).copied().unwrap_or(b'0');
    let rest_nonzero = fraction.bytes().skip(places + 1).any(|d| d != b'0');
    let last_odd = digits.last().is_some_and(|d| (d - b'0') % 2 == 1);

    if next > b'5' || (next == b'5' && (rest_nonzero || last_odd)) {
        increment_decimal(&mut digits);
    }

    let point = digits.len() - places;
    let mut text: String = digits.iter().map(|&d| char::from(d)).collect();
    if places > 0 {
        text.insert(point, '.');
    }

    let rounded: f64 = text.parse().unwrap_or(value.abs());
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// Adds one unit in the last place of an ASCII digit string.
fn increment_decimal(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Computes statistics with the default [`AnalysisConfig`].
pub fn compute_statistics(conversation: &Conversation) -> StatisticsReport {
    build_report(conversation, &AnalysisConfig::default())
}

/// Computes statistics with an explicit configuration.
///
/// # Errors
///
/// Returns [`ChatpulseError::InvalidConfig`](crate::ChatpulseError::InvalidConfig)
/// if `config` fails [`AnalysisConfig::validate`].
pub fn compute_statistics_with(
    conversation: &Conversation,
    config: &AnalysisConfig,
) -> Result<StatisticsReport> {
    config.validate()?;
    Ok(build_report(conversation, config))
}

fn build_report(conversation: &Conversation, config: &AnalysisConfig) -> StatisticsReport {
    let messages: Vec<&Message> = conversation
        .messages
        .iter()
        .filter(|message| message.has_content())
        .collect();
    let participant_messages: Vec<&Message> = messages
        .iter()
        .copied()
        .filter(|message| !message.is_system())
        .collect();

    let total_messages = messages.len();
    let system_messages = total_messages - participant_messages.len();

    let mut by_sender: IndexMap<&str, Vec<&Message>> = IndexMap::new();
    for &message in &participant_messages {
        if let Some(sender) = message.sender() {
            by_sender.entry(sender).or_default().push(message);
        }
    }

    let messages_per_participant: IndexMap<String, usize> = by_sender
        .iter()
        .map(|(sender, own)| ((*sender).to_string(), own.len()))
        .collect();

    let participant_share = per_sender(&by_sender, |own| {
        if total_messages == 0 {
            0.0
        } else {
            own.len() as f64 / total_messages as f64 * 100.0
        }
    });
    let average_chars_per_message = per_sender(&by_sender, |own| {
        own.iter().map(|m| m.char_count()).sum::<usize>() as f64 / own.len().max(1) as f64
    });
    let average_words_per_message = per_sender(&by_sender, |own| {
        own.iter().map(|m| m.word_count()).sum::<usize>() as f64 / own.len().max(1) as f64
    });

    let top_words_per_participant: IndexMap<String, Vec<(String, usize)>> = by_sender
        .iter()
        .map(|(sender, own)| {
            let words = count_words(own.iter().copied());
            ((*sender).to_string(), words.most_common(config.top_words))
        })
        .collect();

    let mut emoji_counts = FrequencyCounter::new();
    for message in &participant_messages {
        emoji_counts.extend(text::emojis(message.content()));
    }

    let temporal = TemporalProfile::from_messages(participant_messages.iter().copied());
    let active_days = temporal.active_days();
    let average_messages_per_active_day = if active_days == 0 {
        participant_messages.len() as f64
    } else {
        participant_messages.len() as f64 / active_days as f64
    };

    let first_message_at = messages.first().map(|m| m.timestamp());
    let last_message_at = messages.last().map(|m| m.timestamp());
    let duration_days = match (first_message_at, last_message_at) {
        (Some(first), Some(last)) => (last - first).num_seconds().div_euclid(86_400) + 1,
        _ => 0,
    };

    let response_times = response::response_times(participant_messages.iter().copied());

    let sentiment_per_participant: IndexMap<String, SentimentScore> = by_sender
        .iter()
        .map(|(sender, own)| {
            (
                (*sender).to_string(),
                SentimentScore::from_messages(own.iter().copied()),
            )
        })
        .collect();
    let overall_sentiment_score = sentiment::overall_sentiment(&sentiment_per_participant);

    let relationship_score = score::relationship_score(
        &score::ScoreSignals {
            participant_messages: participant_messages.len(),
            active_days,
            participant_share: &participant_share,
            emoji_counts: &emoji_counts,
            response_times: &response_times,
            sentiment_per_participant: &sentiment_per_participant,
            overall_sentiment: overall_sentiment_score,
        },
        &config.scoring,
    );
    let positive_emoji_ratio = relationship_score
        .inputs
        .as_ref()
        .map_or(0.0, |inputs| inputs.positive_emoji_ratio);

    let mut participants = conversation.participants.clone();
    participants.sort();

    info!(
        total_messages,
        participant_messages = participant_messages.len(),
        active_days,
        score = relationship_score.score,
        "computed conversation statistics"
    );

    StatisticsReport {
        total_messages,
        system_messages,
        participant_messages: participant_messages.len(),
        participants,
        messages_per_participant,
        participant_share,
        average_chars_per_message,
        average_words_per_message,
        top_words_per_participant,
        emoji_counts: emoji_counts.most_common(config.top_emojis),
        hourly_distribution: temporal.hourly,
        weekday_distribution: temporal.weekday,
        messages_per_day: temporal.per_day,
        first_message_at,
        last_message_at,
        duration_days,
        active_days_with_messages: active_days,
        average_messages_per_active_day: round_to(average_messages_per_active_day, 2),
        positive_emoji_ratio,
        average_response_time_minutes: response_times.per_sender,
        overall_average_response_time_minutes: response_times.overall,
        sentiment_per_participant,
        overall_sentiment_score,
        relationship_score,
    }
}

fn per_sender<F>(by_sender: &IndexMap<&str, Vec<&Message>>, f: F) -> IndexMap<String, f64>
where
    F: Fn(&[&Message]) -> f64,
{
    by_sender
        .iter()
        .map(|(sender, own)| ((*sender).to_string(), f(own.as_slice())))
        .collect()
}

/// Counts meaningful words, skipping media placeholders and stop words.
pub fn count_words<'a, I>(messages: I) -> FrequencyCounter
where
    I: IntoIterator<Item = &'a Message>,
{
    let mut counts = FrequencyCounter::new();
    for message in messages {
        if text::is_media_placeholder(message.content()) {
            continue;
        }
        for token in text::normalized_tokens(message.content()) {
            if text::is_countable_word(&token) {
                counts.add(&token);
            }
        }
    }
    counts
}
