//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, colored listing for terminals
    Human,
    /// Pretty-printed JSON array, one entry per file
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Files, directories or glob patterns to inspect
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Skip files matching this glob pattern
    /// Can be specified multiple times: --ignore "**/*.d.ts" --ignore "**/legacy/**"
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Report format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Human,
        env = "DEFAULT_METHODS_FORMAT"
    )]
    pub format: OutputFormat,

    /// Parse every file with JSX enabled (default: only .tsx/.jsx files)
    #[arg(long)]
    pub tsx: bool,

    /// Reject decorator syntax
    #[arg(long)]
    pub no_decorators: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
