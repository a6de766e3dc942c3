//! Label pattern diagnostics
//!
//! Helps track down why stars go missing from an extraction by checking chart
//! labels against alternative label shapes. Not used by the extractor itself.

use clap::{Parser, Subcommand};
use regex::Regex;
use starmap::label::{ALTERNATIVE_LABEL_PATTERNS, LABEL_NAME_PATTERN, LABEL_PREFIX_SHAPES};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "label_probe", about = "Test star label patterns against a chart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Count matches of each alternative pattern across a chart file
    File {
        /// Chart to scan
        #[arg(long, default_value = "data/stars.svg")]
        input: PathBuf,

        /// Keep going after the first pattern with matches
        #[arg(long)]
        all: bool,
    },

    /// Check a single label value, e.g. "path1024 Ori- Betelgeuse"
    Label {
        /// Label text
        text: String,
    },
}

fn probe_file(input: &Path, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(input)?;

    for (i, pattern) in ALTERNATIVE_LABEL_PATTERNS.iter().enumerate() {
        let re = Regex::new(pattern)?;
        let matches: Vec<&str> = re
            .captures_iter(&content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect();

        println!("Pattern {i}: {} matches", matches.len());
        if !matches.is_empty() {
            let sample: Vec<_> = matches.iter().take(5).collect();
            println!("  Sample: {sample:?}");
            if !all {
                break;
            }
        }
    }
    Ok(())
}

fn probe_label(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    for (pattern, desc) in LABEL_PREFIX_SHAPES {
        let matched = Regex::new(pattern)?.is_match(text);
        println!("{desc}: {}", if matched { "MATCH" } else { "NO MATCH" });
    }

    let name = Regex::new(LABEL_NAME_PATTERN)?
        .captures(text)
        .and_then(|caps| caps.get(1).map(|m| m.as_str().to_string()));
    println!();
    println!("Name extraction: {}", name.as_deref().unwrap_or("NO MATCH"));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::File { input, all } => probe_file(&input, all),
        Commands::Label { text } => probe_label(&text),
    }
}
