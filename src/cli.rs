//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::format::OutputFormat;

/// Analyse a WhatsApp chat export: volume, timing, vocabulary, sentiment,
/// emoji use and a 0-100 relationship score.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse \"WhatsApp Chat with Ana.zip\"
    chatpulse export.zip --chat-file \"WhatsApp Chat with Ana.txt\"
    chatpulse chat.txt -f json -o report.json
    chatpulse chat.txt --config scoring.json -vv")]
pub struct Args {
    /// Path to the exported .zip archive or .txt transcript
    pub input: PathBuf,

    /// Exact name of the .txt entry inside the archive
    #[arg(long, value_name = "NAME")]
    pub chat_file: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// JSON file overriding analysis settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
