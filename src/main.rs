//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::fs;
use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatpulse::cli::Args;
use chatpulse::config::AnalysisConfig;
use chatpulse::format::{render, write_to_format};
use chatpulse::loader::load_chat;
use chatpulse::parsers::WhatsAppParser;
use chatpulse::{ChatpulseError, compute_statistics_with};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatpulseError> {
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_json(&fs::read_to_string(path)?)?,
        None => AnalysisConfig::default(),
    };

    let raw_text = load_chat(&args.input, args.chat_file.as_deref())?;
    let conversation = WhatsAppParser::new()
        .parse_str(&raw_text)
        .map_err(|e| e.with_path(&args.input))?;
    let report = compute_statistics_with(&conversation, &config)?;

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, args.format)?;
            info!(path = %path.display(), format = %args.format, "report written");
        }
        None => {
            let rendered = render(&report, args.format)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered.trim_end())?;
        }
    }

    Ok(())
}
