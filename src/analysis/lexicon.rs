//! Fixed word and emoji lists.
//!
//! The lists target Brazilian Portuguese chats. Words are stored in their
//! normalized form (lower-case, no diacritics), which is what tokens are
//! compared against. All sets are built once and only read afterwards.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Words that carry no meaning on their own and are left out of word counts.
pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "ao", "aos", "arquivo", "as", "ate", "audio", "com", "da", "das", "de", "do", "dos",
        "e", "em", "entao", "essa", "esse", "estao", "esta", "ficar", "foi", "imagem", "isso",
        "ja", "la", "mas", "midia", "na", "nas", "nao", "nos", "num", "numa", "oculta", "oculto",
        "omitida", "omitido", "o", "os", "para", "por", "pra", "pro", "que", "quem", "se", "sem",
        "sim", "sou", "sua", "suas", "ta", "tava", "tem", "tudo", "um", "uma", "vou",
    ]
    .into_iter()
    .collect()
});

/// Whole-message placeholders the client writes in place of media.
///
/// They count as messages but are skipped for word and sentiment counting.
pub static IGNORED_MESSAGES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "arquivo de midia oculta",
        "<arquivo de midia oculta>",
        "imagem omitida",
        "<imagem omitida>",
        "audio omitido",
        "<audio omitido>",
    ]
    .into_iter()
    .collect()
});

/// Emoji counted as affectionate for the positive-emoji ratio.
pub static POSITIVE_EMOJIS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "😍", "❤", "❤️", "🥰", "😘", "😊", "😁", "💕", "💞", "💖", "💗", "💓", "💘", "☺", "😄",
        "😃", "😆", "🤗",
    ]
    .into_iter()
    .collect()
});

/// Positive sentiment lexicon.
pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "amor", "amo", "amada", "amado", "amiga", "amigo", "beijo", "carinho", "caro",
        "carinhosa", "carinhoso", "feliz", "fofa", "fofo", "gostei", "grata", "grato", "linda",
        "lindo", "obrigada", "obrigado", "otimo", "perfeito", "querida", "querido", "saudade",
        "sucesso",
    ]
    .into_iter()
    .collect()
});

/// Negative sentiment lexicon.
pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "briga", "cansada", "cansado", "chateada", "chateado", "erro", "irritada", "irritado",
        "magoada", "magoado", "medo", "problema", "raiva", "sozinha", "sozinho", "stress",
        "triste",
    ]
    .into_iter()
    .collect()
});
