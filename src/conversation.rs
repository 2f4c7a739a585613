//! The parsed conversation.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Message;

/// Participants and messages of one export.
///
/// `participants` is sorted lexicographically; `messages` keeps the order of
/// the source file and is never re-sorted, even when timestamps go backwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Distinct senders, sorted.
    pub participants: Vec<String>,

    /// Messages in source order.
    pub messages: Vec<Message>,

    /// Free-form metadata (e.g. the source file).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Conversation {
    /// Creates a conversation from its parts.
    pub fn new(participants: Vec<String>, messages: Vec<Message>) -> Self {
        Self {
            participants,
            messages,
            metadata: BTreeMap::new(),
        }
    }

    /// Builder method to attach a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Number of messages, system messages included.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the conversation has no messages at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages per sender, empty ones included.
    ///
    /// Every participant is present (possibly with zero), in participant order;
    /// a sender missing from `participants` is appended after them.
    pub fn participant_message_counts(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> =
            self.participants.iter().map(|p| (p.clone(), 0)).collect();

        for sender in self.messages.iter().filter_map(Message::sender) {
            *counts.entry(sender.to_string()).or_insert(0) += 1;
        }

        counts
    }
}
