//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - Record export format options
//!
//! `ExportFormat` is usable outside the CLI context:
//!
//! ```rust
//! use chatlens::cli::ExportFormat;
//!
//! let format = ExportFormat::Jsonl;
//! assert_eq!(format.extension(), "jsonl");
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze WhatsApp chat exports: message counts, streaks,
/// response times, emoji and word frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --top-words 30 --hours
    chatlens chat.txt --export records.csv
    chatlens chat.txt --export records.jsonl --format jsonl")]
pub struct Args {
    /// Path to the WhatsApp TXT export
    pub input: String,

    /// Participant to analyze (default: the whole chat)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Number of top words to display
    #[arg(long, default_value_t = 20, value_name = "N")]
    pub top_words: usize,

    /// Show the hourly activity histogram
    #[arg(long)]
    pub hours: bool,

    /// Export the normalized records to this file
    #[arg(short = 'o', long, value_name = "FILE")]
    pub export: Option<String>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Record export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::Jsonl => "application/x-ndjson",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}
