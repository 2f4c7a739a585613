//! Locating and decoding the chat text of an export.
//!
//! WhatsApp's "Export chat" produces a `.zip` holding a `.txt` transcript plus
//! any media. [`load_chat`] accepts either that archive or the bare text file.

use std::fs;
use std::path::Path;

#[cfg(feature = "archive")]
use std::io::Read;

#[cfg(feature = "archive")]
use tracing::{info, warn};

use crate::error::Result;

#[cfg(feature = "archive")]
use crate::error::ChatpulseError;

/// Decodes export bytes as UTF-8, replacing invalid sequences and dropping a
/// leading byte-order mark.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text.into_owned(),
    }
}

/// Loads the chat text from a `.zip` export or a plain text file.
///
/// `chat_file` names the archive entry to use; it is ignored for plain files.
pub fn load_chat(path: &Path, chat_file: Option<&str>) -> Result<String> {
    let is_zip = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_zip {
        return read_zip(path, chat_file);
    }

    Ok(decode_text(&fs::read(path)?))
}

#[cfg(feature = "archive")]
fn read_zip(path: &Path, chat_file: Option<&str>) -> Result<String> {
    read_chat_from_zip(path, chat_file)
}

#[cfg(not(feature = "archive"))]
fn read_zip(_path: &Path, _chat_file: Option<&str>) -> Result<String> {
    Err(crate::error::ChatpulseError::invalid_config(
        "reading .zip exports requires the `archive` feature",
    ))
}

/// Picks the chat transcript among archive entry names.
///
/// The named entry wins when given. Otherwise the only `.txt` entry, or the
/// first `.txt` whose name mentions "whatsapp", or the first `.txt`.
pub fn select_chat_entry<'a>(names: &[&'a str], chat_file: Option<&str>) -> Option<&'a str> {
    if let Some(wanted) = chat_file {
        return names.iter().copied().find(|name| *name == wanted);
    }

    let txt_files: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().ends_with(".txt"))
        .collect();

    txt_files
        .iter()
        .copied()
        .find(|name| txt_files.len() > 1 && name.to_lowercase().contains("whatsapp"))
        .or_else(|| txt_files.first().copied())
}

/// Reads the chat transcript out of a `.zip` export.
#[cfg(feature = "archive")]
pub fn read_chat_from_zip(path: &Path, chat_file: Option<&str>) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let txt_count = name_refs
        .iter()
        .filter(|name| name.to_lowercase().ends_with(".txt"))
        .count();
    if chat_file.is_none() && txt_count > 1 {
        warn!(candidates = txt_count, archive = %path.display(), "several .txt entries in archive");
    }

    let entry = select_chat_entry(&name_refs, chat_file).ok_or_else(|| match chat_file {
        Some(wanted) => ChatpulseError::chat_file_not_found(
            path,
            format!("entry '{wanted}' does not exist in the archive"),
        ),
        None => ChatpulseError::chat_file_not_found(path, "no .txt entry in the archive"),
    })?;

    info!(entry, archive = %path.display(), "reading chat from archive");

    let mut bytes = Vec::new();
    archive.by_name(entry)?.read_to_end(&mut bytes)?;
    Ok(decode_text(&bytes))
}
