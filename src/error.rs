//! Unified error types for chatpulse.
//!
//! This module provides a single [`ChatpulseError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! Only a broken date header is fatal while parsing: orphan lines and noise are
//! absorbed silently, and degenerate conversations (no messages, no sentiment
//! signal) produce neutral values rather than errors. Everything else here
//! comes from the I/O edges of the crate (files, archives, config, JSON).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::Conversation;
///
/// fn my_function() -> Result<Conversation> {
///     chatpulse::parse_exported_text("")
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the input file doesn't exist, cannot be
    /// read, or the output file cannot be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the input export.
    ///
    /// Raised when a header line carries a date/time that neither supported
    /// format accepts, which means the input is not the expected export.
    #[error("Failed to parse {format} export{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The archive does not contain a usable chat text file.
    #[error("No chat file found in {archive}: {message}")]
    ChatFileNotFound {
        /// The archive that was searched
        archive: PathBuf,
        /// What was missing
        message: String,
    },

    /// Reading the zip archive failed.
    #[cfg(feature = "archive")]
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// JSON parsing/serialization error.
    ///
    /// This can occur when rendering the report or loading a config file.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// A header line whose date/time matches no supported format.
    #[error("line {line}: could not interpret date '{text}'")]
    Timestamp {
        /// 1-based line number in the input
        line: usize,
        /// The offending `"<date> <time>"` text
        text: String,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates the fatal timestamp error for a WhatsApp header line.
    pub fn timestamp_parse(line: usize, text: impl Into<String>) -> Self {
        ChatpulseError::Parse {
            format: "WhatsApp TXT",
            source: ParseErrorKind::Timestamp {
                line,
                text: text.into(),
            },
            path: None,
        }
    }

    /// Attaches a file path to a parse error; other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            ChatpulseError::Parse {
                format,
                source,
                path: None,
            } => ChatpulseError::Parse {
                format,
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Creates a missing-chat-file error.
    pub fn chat_file_not_found(archive: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ChatpulseError::ChatFileNotFound {
            archive: archive.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatpulseError::InvalidConfig(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatpulseError::Parse { .. })
    }

    /// Returns `true` if the archive had no usable chat file.
    pub fn is_chat_file_not_found(&self) -> bool {
        matches!(self, ChatpulseError::ChatFileNotFound { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatpulseError::InvalidConfig(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
