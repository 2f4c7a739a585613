//! Configuration types for parsing and analysis.
//!
//! All types here are plain data with builder methods, and deserialize from
//! partial JSON: missing fields fall back to their defaults.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::{AnalysisConfig, ScoringConfig};
//!
//! let config = AnalysisConfig::new()
//!     .with_top_words(5)
//!     .with_scoring(ScoringConfig::new().with_engagement_saturation(60.0));
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatpulseError, Result};

/// Configuration for WhatsApp export parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppConfig {
    /// Buffer size for reading files line by line (default: 64KB)
    pub buffer_size: usize,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl WhatsAppConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}

/// Weights of the five relationship-score components.
///
/// The defaults sum to 1.0, which keeps the final score on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub balance: f64,
    pub engagement: f64,
    pub positive_emoji: f64,
    pub responsiveness: f64,
    pub sentiment: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            balance: 0.30,
            engagement: 0.25,
            positive_emoji: 0.20,
            responsiveness: 0.15,
            sentiment: 0.10,
        }
    }
}

impl ScoreWeights {
    fn as_array(&self) -> [(&'static str, f64); 5] {
        [
            ("balance", self.balance),
            ("engagement", self.engagement),
            ("positive_emoji", self.positive_emoji),
            ("responsiveness", self.responsiveness),
            ("sentiment", self.sentiment),
        ]
    }
}

/// Parameters of the relationship score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Component weights.
    pub weights: ScoreWeights,

    /// Messages per active day at which engagement saturates (default: 40)
    pub engagement_saturation: f64,

    /// Positive share of all emoji at which that component saturates (default: 0.25)
    pub positive_emoji_saturation: f64,

    /// Average response time scoring full marks, in minutes (default: 5)
    pub fast_response_minutes: f64,

    /// Average response time scoring zero, in minutes (default: 60)
    pub slow_response_minutes: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            engagement_saturation: 40.0,
            positive_emoji_saturation: 0.25,
            fast_response_minutes: 5.0,
            slow_response_minutes: 60.0,
        }
    }
}

impl ScoringConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the component weights.
    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the engagement saturation point (messages per active day).
    #[must_use]
    pub fn with_engagement_saturation(mut self, per_day: f64) -> Self {
        self.engagement_saturation = per_day;
        self
    }

    /// Sets the positive-emoji saturation share.
    #[must_use]
    pub fn with_positive_emoji_saturation(mut self, share: f64) -> Self {
        self.positive_emoji_saturation = share;
        self
    }

    /// Sets the response-time window, in minutes.
    #[must_use]
    pub fn with_response_window(mut self, fast: f64, slow: f64) -> Self {
        self.fast_response_minutes = fast;
        self.slow_response_minutes = slow;
        self
    }
}

/// Configuration of the statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Words reported per participant (default: 10)
    pub top_words: usize,

    /// Emoji reported overall (default: 15)
    pub top_emojis: usize,

    /// Relationship score parameters
    pub scoring: ScoringConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 10,
            top_emojis: 15,
            scoring: ScoringConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many words are reported per participant.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets how many emoji are reported.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Replaces the scoring parameters.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Checks that the scoring parameters describe a usable score.
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;

        for (name, weight) in scoring.weights.as_array() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ChatpulseError::invalid_config(format!(
                    "weight '{name}' must be a non-negative number, got {weight}"
                )));
            }
        }

        if !is_positive(scoring.engagement_saturation) {
            return Err(ChatpulseError::invalid_config(
                "engagement_saturation must be positive",
            ));
        }
        if !is_positive(scoring.positive_emoji_saturation) {
            return Err(ChatpulseError::invalid_config(
                "positive_emoji_saturation must be positive",
            ));
        }
        if scoring.fast_response_minutes.is_nan()
            || scoring.slow_response_minutes.is_nan()
            || scoring.fast_response_minutes >= scoring.slow_response_minutes
        {
            return Err(ChatpulseError::invalid_config(format!(
                "fast_response_minutes ({}) must be below slow_response_minutes ({})",
                scoring.fast_response_minutes, scoring.slow_response_minutes
            )));
        }

        Ok(())
    }

    /// Loads a configuration from JSON, applying defaults for missing fields.
    #[cfg(feature = "json-output")]
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_words, 10);
        assert_eq!(config.top_emojis, 15);

        let weights = config.scoring.weights;
        let sum = weights.balance
            + weights.engagement
            + weights.positive_emoji
            + weights.responsiveness
            + weights.sentiment;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_whatsapp_config_builder() {
        let config = WhatsAppConfig::new().with_buffer_size(1024);
        assert_eq!(config.buffer_size, 1024);
        assert_eq!(WhatsAppConfig::default().buffer_size, 64 * 1024);
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let weights = ScoreWeights {
            sentiment: -0.1,
            ..ScoreWeights::default()
        };
        let config = AnalysisConfig::new().with_scoring(ScoringConfig::new().with_weights(weights));
        let err = config.validate().unwrap_err();
        assert!(err.is_invalid_config());
        assert!(err.to_string().contains("sentiment"));
    }

    #[test]
    fn test_validate_rejects_inverted_response_window() {
        let config =
            AnalysisConfig::new().with_scoring(ScoringConfig::new().with_response_window(60.0, 5.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_saturation() {
        let config = AnalysisConfig::new()
            .with_scoring(ScoringConfig::new().with_engagement_saturation(0.0));
        assert!(config.validate().is_err());

        let config = AnalysisConfig::new()
            .with_scoring(ScoringConfig::new().with_positive_emoji_saturation(f64::NAN));
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_partial_json() {
        let config =
            AnalysisConfig::from_json(r#"{"top_words": 3, "scoring": {"engagement_saturation": 20}}"#)
                .unwrap();
        assert_eq!(config.top_words, 3);
        assert_eq!(config.top_emojis, 15);
        assert!((config.scoring.engagement_saturation - 20.0).abs() < f64::EPSILON);
        assert!((config.scoring.weights.balance - 0.30).abs() < f64::EPSILON);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_validates() {
        let err = AnalysisConfig::from_json(r#"{"scoring": {"fast_response_minutes": 90}}"#)
            .unwrap_err();
        assert!(err.is_invalid_config());
    }
}
