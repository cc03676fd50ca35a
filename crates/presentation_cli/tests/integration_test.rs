//! Integration tests for CLI
//!
//! These tests verify CLI functionality without running actual commands,
//! but instead test the command parsing and structure.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use domain::Direction;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "voice-translator")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Transcribe {
        input: PathBuf,
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
    },
    Translate {
        text: String,
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
    },
    Speak {
        text: String,
        #[arg(short, long, default_value = "speech.mp3")]
        output: PathBuf,
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
        #[arg(long, default_value = "default")]
        voice: String,
    },
    Run {
        input: PathBuf,
        #[arg(short, long, default_value = "translation.mp3")]
        output: PathBuf,
        #[arg(short, long, default_value = "en-ru")]
        direction: Direction,
        #[arg(long, default_value = "default")]
        voice: String,
    },
    Status,
    Accents,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_status_command() {
    let cli = parse_args(&["voice-translator", "status"]).unwrap();
    assert!(matches!(cli.command, Commands::Status));
}

#[test]
fn cli_parses_accents_command() {
    let cli = parse_args(&["voice-translator", "accents"]).unwrap();
    assert!(matches!(cli.command, Commands::Accents));
}

#[test]
fn cli_parses_translate_with_direction() {
    let cli = parse_args(&["voice-translator", "translate", "Привет, мир", "-d", "ru-en"]).unwrap();
    if let Commands::Translate { text, direction } = cli.command {
        assert_eq!(text, "Привет, мир");
        assert_eq!(direction, Direction::RuEn);
    } else {
        panic!("Expected Translate command");
    }
}

#[test]
fn cli_direction_is_case_insensitive() {
    let cli = parse_args(&["voice-translator", "translate", "Hi", "--direction", "RU-EN"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Translate {
            direction: Direction::RuEn,
            ..
        }
    ));
}

#[test]
fn cli_rejects_unknown_direction() {
    let result = parse_args(&["voice-translator", "translate", "Hi", "-d", "en-de"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_transcribe_command() {
    let cli = parse_args(&["voice-translator", "transcribe", "clip.ogg"]).unwrap();
    if let Commands::Transcribe { input, direction } = cli.command {
        assert_eq!(input, PathBuf::from("clip.ogg"));
        assert_eq!(direction, Direction::EnRu);
    } else {
        panic!("Expected Transcribe command");
    }
}

#[test]
fn cli_parses_speak_defaults() {
    let cli = parse_args(&["voice-translator", "speak", "Hello"]).unwrap();
    if let Commands::Speak {
        text,
        output,
        direction,
        voice,
    } = cli.command
    {
        assert_eq!(text, "Hello");
        assert_eq!(output, PathBuf::from("speech.mp3"));
        assert_eq!(direction, Direction::EnRu);
        assert_eq!(voice, "default");
    } else {
        panic!("Expected Speak command");
    }
}

#[test]
fn cli_parses_run_with_all_options() {
    let cli = parse_args(&[
        "voice-translator",
        "run",
        "question.wav",
        "-o",
        "answer.mp3",
        "-d",
        "ru-en",
        "--voice",
        "co.uk",
    ])
    .unwrap();

    if let Commands::Run {
        input,
        output,
        direction,
        voice,
    } = cli.command
    {
        assert_eq!(input, PathBuf::from("question.wav"));
        assert_eq!(output, PathBuf::from("answer.mp3"));
        assert_eq!(direction, Direction::RuEn);
        assert_eq!(voice, "co.uk");
    } else {
        panic!("Expected Run command");
    }
}

#[test]
fn cli_parses_global_options() {
    let cli = parse_args(&[
        "voice-translator",
        "-vv",
        "--config",
        "/etc/voice-translator.toml",
        "--json-logs",
        "status",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some(PathBuf::from("/etc/voice-translator.toml")));
    assert!(cli.json_logs);
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["voice-translator"]).is_err());
}

#[test]
fn cli_run_requires_input() {
    assert!(parse_args(&["voice-translator", "run"]).is_err());
}
