use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "trisum", version, about = "Summarize text as a tweet, a LinkedIn post and an email")]
pub struct Cli {
    /// Base URL of the trisum API server
    #[arg(long, env = "TRISUM_SERVER_URL", default_value = "http://localhost:3000", global = true)]
    pub server_url: String,

    /// Where the local usage record is kept
    #[arg(long, env = "TRISUM_USAGE_FILE", global = true)]
    pub usage_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the three summaries
    Summarize {
        /// Text to summarize; read from stdin when neither TEXT nor --file is given
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Show how many summaries were used in the current window
    Usage,
}

/// Resolve the input text from the argument, a file, or stdin
pub fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
