//! Defancy CLI - fold decorative Unicode letters to plain ASCII.
//!
//! Normalizes the given text, or standard input line by line when no text
//! argument is supplied.

use clap::Parser;
use defancy::{Block, Normalizer, NormalizerConfig, Result};
use log::error;
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "defancy")]
#[command(version)]
#[command(about = "Fold decorative Unicode letters to plain ASCII", long_about = None)]
struct Cli {
    /// Text to normalize; reads stdin line by line when omitted
    text: Option<String>,

    /// Comma-separated styled blocks to fold (default: all),
    /// e.g. "math-bold,fullwidth,small-caps"
    #[arg(short, long, value_delimiter = ',')]
    blocks: Vec<Block>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let normalizer = if cli.blocks.is_empty() {
        Normalizer::default_config()
    } else {
        Normalizer::new(NormalizerConfig { blocks: cli.blocks })
    };

    match cli.text {
        Some(text) => println!("{}", normalizer.normalize(&text)),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                println!("{}", normalizer.normalize(&line));
            }
        }
    }

    Ok(())
}
