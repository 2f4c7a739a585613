//! A single chat turn.
//!
//! [`Message`] is what the parser emits for every header line it finds:
//! either a participant message (with a sender) or a system notification
//! (group membership changes, encryption notices) without one.
//!
//! # Examples
//!
//! ```
//! use chatpulse::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 3, 12)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//!
//! let msg = Message::participant(ts, "Alice", "hello there");
//! assert_eq!(msg.sender(), Some("Alice"));
//! assert_eq!(msg.word_count(), 2);
//!
//! let notice = Message::system(ts, "Alice joined");
//! assert!(notice.is_system());
//! assert!(notice.sender().is_none());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One message of an exported conversation.
///
/// Exports carry wall-clock times without a zone, so the timestamp is a
/// [`NaiveDateTime`] with second precision.
///
/// A system message never has a sender; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Author of the message. `None` for system messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sender: Option<String>,

    /// Body text, continuation lines joined by `\n`, trimmed. May be empty.
    pub content: String,

    /// `true` for notifications that have no human sender.
    #[serde(default)]
    pub is_system: bool,
}

impl Message {
    /// Creates a message written by `sender`.
    pub fn participant(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: Some(sender.into()),
            content: content.into(),
            is_system: false,
        }
    }

    /// Creates a system notification.
    pub fn system(timestamp: NaiveDateTime, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender: None,
            content: content.into(),
            is_system: true,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name, if any.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` for system notifications.
    pub fn is_system(&self) -> bool {
        self.is_system
    }

    // =========================================================================
    // Derived values
    // =========================================================================

    /// Number of whitespace-separated tokens in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Number of characters (Unicode scalar values) in the content.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Returns `true` if the content is non-empty.
    ///
    /// Only these messages take part in the statistics.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_participant_message() {
        let msg = Message::participant(ts(), "Alice", "Hello");
        assert_eq!(msg.sender(), Some("Alice"));
        assert_eq!(msg.content(), "Hello");
        assert!(!msg.is_system());
        assert_eq!(msg.timestamp(), ts());
    }

    #[test]
    fn test_system_message_has_no_sender() {
        let msg = Message::system(ts(), "Bob left");
        assert!(msg.is_system());
        assert!(msg.sender().is_none());
    }

    #[test]
    fn test_word_and_char_counts() {
        let msg = Message::participant(ts(), "Alice", "olá  mundo\nbom dia");
        assert_eq!(msg.word_count(), 4);
        assert_eq!(msg.char_count(), 18);
    }

    #[test]
    fn test_has_content() {
        assert!(!Message::participant(ts(), "Alice", "").has_content());
        assert!(Message::participant(ts(), "Alice", "x").has_content());
    }

    #[test]
    fn test_serialization_omits_missing_sender() {
        let json = serde_json::to_string(&Message::system(ts(), "created group")).unwrap();
        assert!(!json.contains("sender"));
        assert!(json.contains(r#""is_system":true"#));
        assert!(json.contains("2024-06-15T12:00:00"));

        let msg: Message = serde_json::from_str(&json).unwrap();
        assert!(msg.is_system());
    }
}
