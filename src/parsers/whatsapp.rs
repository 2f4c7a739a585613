//! `WhatsApp` TXT export parser.
//!
//! The parser makes one forward pass over the lines of an export, keeping a
//! single pending message. A header line flushes the pending message and
//! starts a new one; any other line is a continuation of the pending message,
//! or noise when nothing is pending.
//!
//! Supported header layout: `12/3/2023, 09:05 - Sender: Message`, with a
//! 2- or 4-digit year and a comma and/or spaces between date and time.

use std::collections::{BTreeSet, VecDeque};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::config::WhatsAppConfig;
use crate::error::{ChatpulseError, Result};
use crate::loader::decode_text;
use crate::parsing::whatsapp::{match_header, parse_whatsapp_timestamp, split_lines, split_sender};
use crate::{Conversation, Message};

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatpulse::parsers::WhatsAppParser;
///
/// let parser = WhatsAppParser::new();
/// let conversation = parser.parse_str("12/3/2023, 09:05 - Alice: hello\n12/3/2023, 09:06 - Bob: hi")?;
///
/// assert_eq!(conversation.participants, vec!["Alice", "Bob"]);
/// assert_eq!(conversation.messages.len(), 2);
/// # Ok::<(), chatpulse::ChatpulseError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: WhatsAppConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: WhatsAppConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &WhatsAppConfig {
        &self.config
    }

    /// Parses the full text of an export.
    pub fn parse_str(&self, content: &str) -> Result<Conversation> {
        collect_conversation(MessageStream::new(
            split_lines(content).map(Ok::<&str, ChatpulseError>),
        ))
    }

    /// Parses an export file.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, and the path is
    /// recorded under the `source` metadata key.
    pub fn parse(&self, path: &Path) -> Result<Conversation> {
        let bytes = fs::read(path)?;
        let text = decode_text(&bytes);
        let conversation = self.parse_str(&text).map_err(|e| e.with_path(path))?;
        Ok(conversation.with_metadata("source", path.display().to_string()))
    }

    /// Streams messages out of a reader, one line at a time.
    ///
    /// Lines break where [`parse_str`](Self::parse_str) breaks them, and
    /// invalid UTF-8 is replaced as in [`parse`](Self::parse).
    pub fn stream<R: BufRead>(&self, reader: R) -> MessageStream<ReaderLines<R>> {
        MessageStream::new(ReaderLines::new(reader))
    }

    /// Opens a file and streams its messages using the configured buffer size.
    pub fn stream_file(&self, path: &Path) -> Result<MessageStream<ReaderLines<BufReader<File>>>> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        Ok(self.stream(reader))
    }
}

/// Lines of a reader, split like [`split_lines`].
///
/// The reader is consumed one `\n`-terminated chunk at a time; every other
/// line break is found inside a chunk, since `\n` ends all of them that span
/// more than one character.
pub struct ReaderLines<R> {
    reader: R,
    chunk: Vec<u8>,
    ready: VecDeque<String>,
    done: bool,
}

impl<R: BufRead> ReaderLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: Vec::new(),
            ready: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for ReaderLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            self.chunk.clear();
            match self.reader.read_until(b'\n', &mut self.chunk) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    let text = decode_text(&self.chunk);
                    self.ready.extend(split_lines(&text).map(str::to_string));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(ChatpulseError::from(e)));
                }
            }
        }
    }
}

/// Collects a message stream into a [`Conversation`] with sorted participants.
pub fn collect_conversation<I>(messages: I) -> Result<Conversation>
where
    I: Iterator<Item = Result<Message>>,
{
    let mut participants = BTreeSet::new();
    let mut collected = Vec::new();

    for message in messages {
        let message = message?;
        if let Some(sender) = message.sender() {
            if !participants.contains(sender) {
                participants.insert(sender.to_string());
            }
        }
        collected.push(message);
    }

    let system_messages = collected.iter().filter(|m| m.is_system()).count();
    info!(
        messages = collected.len(),
        participants = participants.len(),
        system_messages,
        "parsed WhatsApp export"
    );

    Ok(Conversation::new(participants.into_iter().collect(), collected))
}

/// A message whose header has been seen but whose body may still grow.
#[derive(Debug)]
struct PendingMessage {
    timestamp: NaiveDateTime,
    sender: Option<String>,
    lines: Vec<String>,
}

impl PendingMessage {
    fn into_message(self) -> Message {
        let joined = self
            .lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        let content = joined.trim();

        match self.sender {
            Some(sender) => Message::participant(self.timestamp, sender, content),
            None => Message::system(self.timestamp, content),
        }
    }
}

/// Line-by-line state machine behind both parsing modes.
///
/// Feed it physical lines in order; it hands back a finished [`Message`]
/// whenever a header line closes the previous one. Call
/// [`finish`](Self::finish) at end of input to flush the last message.
#[derive(Debug, Default)]
pub struct MessageAssembler {
    pending: Option<PendingMessage>,
    line_number: usize,
}

impl MessageAssembler {
    /// Creates an assembler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one physical line.
    ///
    /// Fails only when a header line carries a date neither supported format
    /// accepts.
    pub fn feed(&mut self, raw_line: &str) -> Result<Option<Message>> {
        self.line_number += 1;
        let line = raw_line.trim_start_matches('\u{feff}');

        if line.is_empty() {
            // Blank lines inside a body are kept.
            if let Some(pending) = self.pending.as_mut() {
                pending.lines.push(String::new());
            }
            return Ok(None);
        }

        if let Some(header) = match_header(line) {
            let flushed = self.pending.take().map(PendingMessage::into_message);

            let timestamp =
                parse_whatsapp_timestamp(header.date, header.time).ok_or_else(|| {
                    ChatpulseError::timestamp_parse(
                        self.line_number,
                        format!("{} {}", header.date, header.time),
                    )
                })?;

            self.pending = Some(match split_sender(header.rest) {
                Some((sender, text)) => PendingMessage {
                    timestamp,
                    sender: Some(sender.to_string()),
                    lines: vec![text.to_string()],
                },
                None => PendingMessage {
                    timestamp,
                    sender: None,
                    lines: vec![header.rest.to_string()],
                },
            });

            return Ok(flushed);
        }

        match self.pending.as_mut() {
            Some(pending) => pending.lines.push(line.to_string()),
            None => debug!(line = self.line_number, "dropping line outside any message"),
        }

        Ok(None)
    }

    /// Flushes the pending message at end of input.
    pub fn finish(&mut self) -> Option<Message> {
        self.pending.take().map(PendingMessage::into_message)
    }

    /// Number of lines consumed so far.
    pub fn lines_seen(&self) -> usize {
        self.line_number
    }
}

/// Iterator over the messages of an export.
///
/// Yields messages in source order. After the first error it yields nothing
/// more.
pub struct MessageStream<I> {
    lines: I,
    assembler: MessageAssembler,
    finished: bool,
}

impl<I> MessageStream<I> {
    /// Wraps an iterator of lines.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            assembler: MessageAssembler::new(),
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_seen(&self) -> usize {
        self.assembler.lines_seen()
    }
}

impl<I, S> Iterator for MessageStream<I>
where
    I: Iterator<Item = Result<S>>,
    S: AsRef<str>,
{
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.lines.next() {
                Some(Ok(line)) => match self.assembler.feed(line.as_ref()) {
                    Ok(Some(message)) => return Some(Ok(message)),
                    Ok(None) => {}
                    Err(e) => {
                        self.finished = true;
                        return Some(Err(e));
                    }
                },
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return self.assembler.finish().map(Ok);
                }
            }
        }
    }
}
