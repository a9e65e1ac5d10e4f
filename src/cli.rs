use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dictfix::{filter, recovery};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dictfix", about = "Word dictionary recovery tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover a malformed dictionary file into valid JSON
    Fix {
        /// Path to the broken dictionary file
        #[arg(short, long, default_value = recovery::DEFAULT_INPUT)]
        input: PathBuf,

        /// Path for the recovered JSON output
        #[arg(short, long, default_value = recovery::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
    /// Keep only words whose letters are all distinct
    Filter {
        /// Path to a valid dictionary JSON file
        #[arg(short, long, default_value = filter::DEFAULT_INPUT)]
        input: PathBuf,

        /// Path for the filtered JSON output
        #[arg(short, long, default_value = filter::DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

impl Default for Commands {
    /// Running with no subcommand reproduces the original hardcoded
    /// `en.json` -> `fixed.json` behavior.
    fn default() -> Self {
        Self::Fix {
            input: PathBuf::from(recovery::DEFAULT_INPUT),
            output: PathBuf::from(recovery::DEFAULT_OUTPUT),
        }
    }
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Fix { input, output } => {
            let report = recovery::recover_file(&input, &output).context("Error fixing JSON")?;

            for line in &report.skipped {
                println!("Skipping malformed line: {line}");
            }
            println!(
                "JSON file fixed successfully! Processed {} words.",
                report.entries
            );
        }
        Commands::Filter { input, output } => {
            let report =
                filter::filter_file(&input, &output).context("Error processing JSON file")?;

            println!(
                "JSON file processed successfully! Kept {} words, dropped {}.",
                report.kept, report.dropped
            );
        }
    }
    Ok(())
}
