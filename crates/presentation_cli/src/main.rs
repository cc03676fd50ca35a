//! Voice translator CLI
//!
//! Runs the English/Russian voice translation pipeline on local files.

#![allow(clippy::print_stdout)]

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use domain::Direction;
use infrastructure::{AppConfig, LogFormat, build_service, init_tracing};

/// Voice translator CLI
#[derive(Parser)]
#[command(name = "voice-translator")]
#[command(author, version, about = "English/Russian voice translation", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "VOICE_TRANSLATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recognize speech in an audio file
    Transcribe {
        /// Recording to transcribe (format taken from the extension)
        input: PathBuf,

        /// Translation direction; the source language is listened for
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
    },

    /// Translate a piece of text
    Translate {
        /// Text to translate
        text: String,

        /// Translation direction
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
    },

    /// Speak text in the direction's target language
    Speak {
        /// Text to speak
        text: String,

        /// Where to write the MP3 audio
        #[arg(short, long, default_value = "speech.mp3")]
        output: PathBuf,

        /// Translation direction; the target language is spoken
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,

        /// Accent for English speech (e.g. "co.uk"); ignored for Russian
        #[arg(long, default_value = "default")]
        voice: String,
    },

    /// Recognize, translate and speak a recording
    Run {
        /// Recording to translate (format taken from the extension)
        input: PathBuf,

        /// Where to write the MP3 audio
        #[arg(short, long, default_value = "translation.mp3")]
        output: PathBuf,

        /// Translation direction
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,

        /// Accent for English speech (e.g. "co.uk"); ignored for Russian
        #[arg(long, default_value = "default")]
        voice: String,
    },

    /// Check the recognizer, the language model and the synthesizer
    Status,

    /// List the English accents offered for speech
    Accents,
}

/// Determine log filter level from verbosity count
///
/// Without `-v` the configured filter applies.
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if cli.json_logs {
        config.logging.format = LogFormat::Json;
    }

    init_tracing(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    let service = build_service(&config)?;

    match cli.command {
        Commands::Transcribe { input, direction } => {
            commands::transcribe(&service, &input, direction).await?;
        },
        Commands::Translate { text, direction } => {
            commands::translate(&service, &text, direction).await?;
        },
        Commands::Speak {
            text,
            output,
            direction,
            voice,
        } => {
            commands::speak(&service, &text, &voice, direction, &output).await?;
        },
        Commands::Run {
            input,
            output,
            direction,
            voice,
        } => {
            commands::run(&service, &input, &voice, direction, &output).await?;
        },
        Commands::Status => {
            if !commands::status(&service).await {
                std::process::exit(1);
            }
        },
        Commands::Accents => commands::accents(&service),
    }

    Ok(())
}
