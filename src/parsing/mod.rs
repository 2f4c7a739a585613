//! Line grammar shared by the in-memory and streaming parsers.

pub mod whatsapp;

pub use whatsapp::{
    DateFormat as WhatsAppDateFormat, HeaderLine, match_header, parse_whatsapp_timestamp,
    split_sender,
};
