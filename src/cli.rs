//! Command-line interface definition using clap.
//!
//! - [`Args`]: CLI argument structure
//! - [`OutputFormat`]: `--format` values, converted to [`crate::format::OutputFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::models::OutputConfig;

/// Default output file name; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_export.json";

/// Turn a WhatsApp folder export (chat log + media) into structured records.
#[derive(Parser, Debug, Clone)]
#[command(name = "wachat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wachat \"WhatsApp Chat - Familia\"
    wachat ./export -o familia.csv -f csv
    wachat ./export -f jsonl --strip-markers -a
    wachat ./export --skip-system -t
    RUST_LOG=wachat=trace wachat ./export")]
pub struct Args {
    /// Folder containing the chat log and its media files
    pub input: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Write content without the <attached: ...> marker
    #[arg(long)]
    pub strip_markers: bool,

    /// Include resolved attachment URIs in output
    #[arg(short = 'a', long)]
    pub attachments: bool,

    /// Include ISO 8601 timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Drop system notices from the export
    #[arg(long)]
    pub skip_system: bool,

    /// Parser configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Output path, with the extension adjusted when the default name is kept.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        format!("chat_export.{}", self.format.extension())
    }

    /// Builds the writer configuration from the flags.
    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.strip_markers {
            config = config.with_stripped_markers();
        }
        if self.attachments {
            config = config.with_attachments();
        }
        if self.timestamps {
            config = config.with_timestamps();
        }
        config
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// One JSON document with title and messages
    #[default]
    Json,

    /// JSON Lines, one message per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// CSV with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(self) -> &'static str {
        crate::format::OutputFormat::from(self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
