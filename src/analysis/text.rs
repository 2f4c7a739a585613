//! Text normalization and tokenization.
//!
//! Comparisons are case- and diacritic-insensitive: "Você", "voce" and
//! "VOCÊ" all normalize to `voce`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::canonical_combining_class;

use super::lexicon::{IGNORED_MESSAGES, STOPWORDS};

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w']+\b").expect("word pattern is valid"));

static EMOJI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F700}-\x{1F77F}",
        r"\x{1F780}-\x{1F7FF}",
        r"\x{1F800}-\x{1F8FF}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1FA00}-\x{1FA6F}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{2700}-\x{27BF}",
        "]"
    ))
    .expect("emoji pattern is valid")
});

/// Lower-cases `text`, decomposes it and drops combining marks.
///
/// ```
/// use chatpulse::analysis::text::normalize_text;
///
/// assert_eq!(normalize_text("Mídia OCULTA"), "midia oculta");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Folds a token to ASCII and strips surrounding apostrophes.
///
/// Anything without an ASCII decomposition disappears, so tokens in
/// non-Latin scripts come out empty.
pub fn normalize_word(word: &str) -> String {
    let folded: String = word.nfkd().filter(char::is_ascii).collect();
    folded.trim_matches('\'').to_string()
}

/// Returns `true` for media placeholders such as `<imagem omitida>`.
pub fn is_media_placeholder(content: &str) -> bool {
    IGNORED_MESSAGES.contains(normalize_text(content).trim())
}

/// Splits content into normalized tokens, in order.
///
/// Tokens may be empty (non-Latin words) and may be stop words; callers
/// decide what to keep.
pub fn normalized_tokens(content: &str) -> Vec<String> {
    let lowered = content.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| normalize_word(m.as_str()))
        .collect()
}

/// Returns `true` if a normalized token should be counted as a word.
pub fn is_countable_word(token: &str) -> bool {
    !token.is_empty() && !STOPWORDS.contains(token)
}

/// Iterates over the emoji code points in `content`.
///
/// Each match is a single code point; variation selectors and joiners are
/// not part of the match.
pub fn emojis(content: &str) -> impl Iterator<Item = &str> {
    EMOJI_REGEX.find_iter(content).map(|m| m.as_str())
}
