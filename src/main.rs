//! Command-line keypad.
//!
//! Tokens come from the arguments, or from stdin (whitespace separated)
//! when no arguments are given. Every handled token prints one line.

use anyhow::{Context, Result};
use clap::Parser;
use keypad::engine::{DisplaySink, Session};
use keypad::{logging, EngineBuilder, EngineConfig};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "keypad", version, about = "Four-function calculator driven by key tokens")]
struct Cli {
    /// Tokens to press: 0-9, '.', '+', '-', '*', '/', '=', 'clear'
    #[arg(allow_hyphen_values = true)]
    tokens: Vec<String>,

    /// TOML file with engine settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the display width
    #[arg(short, long)]
    width: Option<usize>,

    /// Print one JSON object per token instead of the bare display
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = logging::DEFAULT_LEVEL)]
    log_level: String,
}

/// Prints the display on stdout; in JSON mode the frames are printed instead.
struct Terminal {
    json: bool,
}

impl DisplaySink for Terminal {
    fn show(&mut self, text: &str) {
        if !self.json {
            println!("{text}");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut builder = EngineBuilder::new().config(config);
    if let Some(width) = cli.width {
        builder = builder.max_display_width(width);
    }
    let engine = builder.build()?;

    let mut session = Session::new(engine, Terminal { json: cli.json });
    let mut press = |input: &str| -> Result<()> {
        let frame = session
            .press_str(input)
            .with_context(|| format!("bad token '{input}'"))?;
        if cli.json {
            println!("{}", serde_json::to_string(&frame)?);
        }
        Ok(())
    };

    if cli.tokens.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            for input in line.split_whitespace() {
                press(input)?;
            }
        }
    } else {
        for input in &cli.tokens {
            press(input)?;
        }
    }

    Ok(())
}
