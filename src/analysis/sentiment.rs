//! Lexicon-based sentiment.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::lexicon::{NEGATIVE_WORDS, POSITIVE_WORDS};
use super::round_to;
use super::text::{is_media_placeholder, normalized_tokens};
use crate::Message;

/// Positive and negative word hits for one participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
    /// `(positive - negative) / (positive + negative)`, rounded to 3 places;
    /// `0.0` when no lexicon word was found.
    pub sentiment_score: f64,
}

impl SentimentScore {
    /// Tallies lexicon hits over a participant's messages.
    pub fn from_messages<'a, I>(messages: I) -> Self
    where
        I: IntoIterator<Item = &'a Message>,
    {
        let mut positive = 0;
        let mut negative = 0;

        for message in messages {
            if is_media_placeholder(message.content()) {
                continue;
            }
            for token in normalized_tokens(message.content()) {
                if POSITIVE_WORDS.contains(token.as_str()) {
                    positive += 1;
                } else if NEGATIVE_WORDS.contains(token.as_str()) {
                    negative += 1;
                }
            }
        }

        let total = positive + negative;
        let sentiment_score = if total == 0 {
            0.0
        } else {
            round_to((positive as f64 - negative as f64) / total as f64, 3)
        };

        Self {
            positive,
            negative,
            sentiment_score,
        }
    }

    /// Whether any lexicon word was found.
    pub fn has_signal(&self) -> bool {
        self.positive + self.negative > 0
    }
}

/// Mean score over participants with at least one lexicon hit, rounded to
/// 3 places. `None` when nobody used a lexicon word.
pub fn overall_sentiment(scores: &IndexMap<String, SentimentScore>) -> Option<f64> {
    let signals: Vec<f64> = scores
        .values()
        .filter(|score| score.has_signal())
        .map(|score| score.sentiment_score)
        .collect();

    if signals.is_empty() {
        return None;
    }
    Some(round_to(signals.iter().sum::<f64>() / signals.len() as f64, 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn msg(content: &str) -> Message {
        let ts = NaiveDateTime::parse_from_str("2023-03-12 09:00", "%Y-%m-%d %H:%M").unwrap();
        Message::participant(ts, "A", content)
    }

    #[test]
    fn test_counts_and_score() {
        let messages = vec![msg("Te amo, meu AMOR!"), msg("fiquei triste hoje")];
        let score = SentimentScore::from_messages(&messages);
        assert_eq!(score.positive, 2);
        assert_eq!(score.negative, 1);
        assert_eq!(score.sentiment_score, 0.333);
    }

    #[test]
    fn test_score_rounds_from_exact_value() {
        // (3 - 157) / 160 = -0.9625, stored just beyond the tie.
        let content = format!("{}{}", "amor ".repeat(3), "triste ".repeat(157));
        let score = SentimentScore::from_messages(&[msg(&content)]);
        assert_eq!((score.positive, score.negative), (3, 157));
        assert_eq!(score.sentiment_score, -0.963);
    }

    #[test]
    fn test_accents_are_folded() {
        let score = SentimentScore::from_messages(&[msg("Ótimo, obrigado!")]);
        assert_eq!(score.positive, 2);
        assert_eq!(score.sentiment_score, 1.0);
    }

    #[test]
    fn test_no_signal_is_neutral() {
        let score = SentimentScore::from_messages(&[msg("vamos sair amanha")]);
        assert_eq!(score, SentimentScore::default());
        assert!(!score.has_signal());
    }

    #[test]
    fn test_balanced_is_neutral() {
        let score = SentimentScore::from_messages(&[msg("amor e raiva")]);
        assert_eq!(score.sentiment_score, 0.0);
        assert!(score.has_signal());
    }

    #[test]
    fn test_placeholders_skipped() {
        let score = SentimentScore::from_messages(&[msg("<imagem omitida>")]);
        assert!(!score.has_signal());
    }

    #[test]
    fn test_overall_ignores_participants_without_signal() {
        let mut scores = IndexMap::new();
        scores.insert(
            "A".to_string(),
            SentimentScore {
                positive: 1,
                negative: 0,
                sentiment_score: 1.0,
            },
        );
        scores.insert("B".to_string(), SentimentScore::default());
        scores.insert(
            "C".to_string(),
            SentimentScore {
                positive: 1,
                negative: 1,
                sentiment_score: 0.0,
            },
        );
        assert_eq!(overall_sentiment(&scores), Some(0.5));
    }

    #[test]
    fn test_overall_none_without_signal() {
        let mut scores = IndexMap::new();
        scores.insert("A".to_string(), SentimentScore::default());
        assert_eq!(overall_sentiment(&scores), None);
        assert_eq!(overall_sentiment(&IndexMap::new()), None);
    }
}
