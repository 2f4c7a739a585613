//! # Chatpulse
//!
//! A Rust library for parsing WhatsApp text exports and deriving statistics
//! about how a conversation's participants behave: volume, timing,
//! vocabulary, sentiment, emoji use and a composite 0-100 relationship score.
//!
//! ## Overview
//!
//! The pipeline has two stages:
//! - **Parsing** turns the raw export (`"12/3/2023, 09:05 - Alice: hi"` lines,
//!   with multi-line bodies and system notices) into a [`Conversation`].
//! - **Analysis** turns a [`Conversation`] into a
//!   [`StatisticsReport`](analysis::StatisticsReport).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let conversation = parse_exported_text(
//!         "12/3/2023, 09:00 - Ana: bom dia, amor 😍\n\
//!          12/3/2023, 09:04 - Bia: bom dia! saudade\n\
//!          12/3/2023, 09:05 - Bia joined using this group's invite link",
//!     )?;
//!
//!     let report = compute_statistics(&conversation);
//!     assert_eq!(report.total_messages, 3);
//!     assert_eq!(report.system_messages, 1);
//!     println!("{}", summarize_relationship_score(&report.relationship_score));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Reading Exports
//!
//! WhatsApp exports a `.zip` with the transcript and media. [`loader::load_chat`]
//! reads either the archive (feature `archive`) or a bare `.txt`:
//!
//! ```rust,no_run
//! use chatpulse::loader::load_chat;
//! use chatpulse::parsers::WhatsAppParser;
//!
//! let text = load_chat("WhatsApp Chat with Ana.zip".as_ref(), None)?;
//! let conversation = WhatsAppParser::new().parse_str(&text)?;
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```
//!
//! Large transcripts can be streamed one message at a time with
//! [`WhatsAppParser::stream`](parsers::WhatsAppParser::stream).
//!
//! ## Module Structure
//!
//! - [`parsers`] - [`parse_exported_text`], [`WhatsAppParser`](parsers::WhatsAppParser), streaming
//! - [`parsing`] - header and sender grammar, timestamp formats
//! - [`analysis`] - [`compute_statistics`] and its building blocks
//! - [`insights`] - plain-text summaries and suggestions
//! - [`format`] - text and JSON rendering
//! - [`loader`] - archive and text-file loading
//! - [`config`] - parser and analysis configuration
//! - [`error`] - [`ChatpulseError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod format;
pub mod insights;
pub mod loader;
pub mod message;
pub mod parsers;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use analysis::{compute_statistics, compute_statistics_with};
pub use conversation::Conversation;
pub use error::{ChatpulseError, Result};
pub use message::Message;
pub use parsers::parse_exported_text;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    // Model
    pub use crate::{Conversation, Message};

    // Error types
    pub use crate::error::{ChatpulseError, Result};

    // Parsing
    pub use crate::parsers::{MessageStream, WhatsAppParser, parse_exported_text};

    // Configs
    pub use crate::config::{AnalysisConfig, ScoreWeights, ScoringConfig, WhatsAppConfig};

    // Analysis
    pub use crate::analysis::{
        RelationshipScore, SentimentScore, StatisticsReport, compute_statistics,
        compute_statistics_with,
    };

    // Presentation
    pub use crate::format::{OutputFormat, render, write_to_format};
    pub use crate::insights::{build_insights, build_suggestions, summarize_relationship_score};

    // Loading
    pub use crate::loader::load_chat;
}
