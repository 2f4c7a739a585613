//! Chat export parsers.
//!
//! [`parse_exported_text`] is the one-call entry point; [`WhatsAppParser`]
//! adds file reading and streaming.

pub mod whatsapp;

pub use whatsapp::{
    MessageAssembler, MessageStream, ReaderLines, WhatsAppParser, collect_conversation,
};

use crate::Conversation;
use crate::error::Result;

/// Converts the raw text of a WhatsApp export into a [`Conversation`].
///
/// Never fails on noise: orphan lines are dropped. The only error is a header
/// whose date/time matches neither supported format.
///
/// # Example
///
/// ```rust
/// let conversation = chatpulse::parse_exported_text(
///     "12/3/2023, 09:05 - Alice: hello\n12/3/2023, 09:05 - Alice joined",
/// )?;
///
/// assert_eq!(conversation.messages.len(), 2);
/// assert!(conversation.messages[1].is_system());
/// # Ok::<(), chatpulse::ChatpulseError>(())
/// ```
pub fn parse_exported_text(raw_text: &str) -> Result<Conversation> {
    WhatsAppParser::new().parse_str(raw_text)
}
