//! The composite relationship score.
//!
//! Five components, each in `[0, 1]`, are weighted and scaled to 0-100:
//!
//! | component      | measures                                  |
//! |----------------|-------------------------------------------|
//! | balance        | evenness of message shares                |
//! | engagement     | messages per active day                   |
//! | positive_emoji | share of affectionate emoji               |
//! | responsiveness | overall average reply latency             |
//! | sentiment      | overall lexicon sentiment                 |

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::counter::FrequencyCounter;
use super::lexicon::POSITIVE_EMOJIS;
use super::response::ResponseTimes;
use super::round_to;
use super::sentiment::SentimentScore;
use crate::config::ScoringConfig;

/// Scale label reported with every score.
pub const SCORE_SCALE: &str = "0-100";

/// Relationship score with the components and inputs behind it.
///
/// `components` and `inputs` are `None` for conversations without
/// participant messages; both serialize as `{}` then.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipScore {
    pub score: f64,
    pub scale: &'static str,
    #[serde(serialize_with = "object_or_empty")]
    pub components: Option<ScoreComponents>,
    #[serde(serialize_with = "object_or_empty")]
    pub inputs: Option<ScoreInputs>,
}

impl Default for RelationshipScore {
    fn default() -> Self {
        Self {
            score: 0.0,
            scale: SCORE_SCALE,
            components: None,
            inputs: None,
        }
    }
}

/// Component values on the 0-100 scale, rounded to 1 place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreComponents {
    pub balance: f64,
    pub engagement: f64,
    pub positive_emoji: f64,
    pub responsiveness: f64,
    pub sentiment: f64,
}

impl ScoreComponents {
    /// Components in display order, with their names.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("balance", self.balance),
            ("engagement", self.engagement),
            ("positive_emoji", self.positive_emoji),
            ("responsiveness", self.responsiveness),
            ("sentiment", self.sentiment),
        ]
        .into_iter()
    }
}

/// Raw figures the components were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreInputs {
    pub participant_share: IndexMap<String, f64>,
    pub average_messages_per_active_day: f64,
    pub positive_emoji_ratio: f64,
    pub average_response_time_minutes: Option<f64>,
    pub average_response_time_per_participant: IndexMap<String, f64>,
    pub overall_sentiment_score: Option<f64>,
    pub sentiment_per_participant: IndexMap<String, SentimentScore>,
    pub total_emojis: usize,
}

/// Everything the score is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ScoreSignals<'a> {
    pub participant_messages: usize,
    pub active_days: usize,
    pub participant_share: &'a IndexMap<String, f64>,
    pub emoji_counts: &'a FrequencyCounter,
    pub response_times: &'a ResponseTimes,
    pub sentiment_per_participant: &'a IndexMap<String, SentimentScore>,
    pub overall_sentiment: Option<f64>,
}

/// `1 - (max_share - min_share) / 100`, floored at 0. Shares are percentages.
/// Without any shares the result is the neutral 0.5.
pub fn balance_component<'a, I>(shares: I) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for &share in shares {
        bounds = Some(match bounds {
            Some((low, high)) => (low.min(share), high.max(share)),
            None => (share, share),
        });
    }

    match bounds {
        Some((low, high)) => (1.0 - (high - low) / 100.0).max(0.0),
        None => 0.5,
    }
}

/// Messages per active day relative to the saturation point, capped at 1.
pub fn engagement_component(messages_per_day: f64, saturation: f64) -> f64 {
    (messages_per_day / saturation).min(1.0)
}

/// Positive-emoji share relative to the saturation share, capped at 1.
pub fn positive_emoji_component(ratio: f64, saturation: f64) -> f64 {
    (ratio / saturation).min(1.0)
}

/// Full marks up to `fast` minutes, zero from `slow` minutes, linear in
/// between. Unknown latency scores 0.5.
pub fn responsiveness_component(average_minutes: Option<f64>, fast: f64, slow: f64) -> f64 {
    match average_minutes {
        None => 0.5,
        Some(minutes) if minutes <= fast => 1.0,
        Some(minutes) if minutes >= slow => 0.0,
        Some(minutes) => (1.0 - (minutes - fast) / (slow - fast)).max(0.0),
    }
}

/// Maps a sentiment in `[-1, 1]` onto `[0, 1]`. Unknown sentiment scores 0.5.
pub fn sentiment_component(overall: Option<f64>) -> f64 {
    match overall {
        None => 0.5,
        Some(value) => (value.clamp(-1.0, 1.0) + 1.0) / 2.0,
    }
}

/// Share of emoji occurrences that are in the positive set.
fn positive_emoji_ratio(emoji_counts: &FrequencyCounter) -> (f64, usize) {
    let total = emoji_counts.total();
    if total == 0 {
        return (0.0, 0);
    }
    let positive: usize = emoji_counts
        .iter()
        .filter(|(emoji, _)| POSITIVE_EMOJIS.contains(*emoji))
        .map(|(_, count)| count)
        .sum();
    (positive as f64 / total as f64, total)
}

/// Computes the relationship score.
pub fn relationship_score(signals: &ScoreSignals<'_>, config: &ScoringConfig) -> RelationshipScore {
    if signals.participant_messages == 0 {
        return RelationshipScore::default();
    }

    let per_day = signals.participant_messages as f64 / signals.active_days.max(1) as f64;
    let (emoji_ratio, total_emojis) = positive_emoji_ratio(signals.emoji_counts);

    let balance = balance_component(signals.participant_share.values());
    let engagement = engagement_component(per_day, config.engagement_saturation);
    let positive_emoji = positive_emoji_component(emoji_ratio, config.positive_emoji_saturation);
    let responsiveness = responsiveness_component(
        signals.response_times.overall,
        config.fast_response_minutes,
        config.slow_response_minutes,
    );
    let sentiment = sentiment_component(signals.overall_sentiment);

    let weights = &config.weights;
    let weighted = balance * weights.balance
        + engagement * weights.engagement
        + positive_emoji * weights.positive_emoji
        + responsiveness * weights.responsiveness
        + sentiment * weights.sentiment;

    let scaled = |component: f64| round_to(component * 100.0, 1);

    RelationshipScore {
        score: round_to(weighted * 100.0, 1),
        scale: SCORE_SCALE,
        components: Some(ScoreComponents {
            balance: scaled(balance),
            engagement: scaled(engagement),
            positive_emoji: scaled(positive_emoji),
            responsiveness: scaled(responsiveness),
            sentiment: scaled(sentiment),
        }),
        inputs: Some(ScoreInputs {
            participant_share: signals.participant_share.clone(),
            average_messages_per_active_day: round_to(per_day, 2),
            positive_emoji_ratio: round_to(emoji_ratio, 3),
            average_response_time_minutes: signals.response_times.overall,
            average_response_time_per_participant: signals.response_times.per_sender.clone(),
            overall_sentiment_score: signals.overall_sentiment,
            sentiment_per_participant: signals.sentiment_per_participant.clone(),
            total_emojis,
        }),
    }
}

fn object_or_empty<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
