pub mod check_session;
pub mod export;
pub mod questions;
pub mod search;

use crate::modules::format::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::filter::{
    normalize_difficulty, normalize_status, QuestionFilter, DEFAULT_LIMIT,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Question filtering flags shared by `show-questions` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Filter by status (solved, attempted, todo; case insensitive)
    #[arg(long)]
    pub status: Option<String>,
    /// Filter by difficulty (easy, medium, hard; case insensitive)
    #[arg(long)]
    pub difficulty: Option<String>,
    /// Search questions by keyword
    #[arg(long)]
    pub search: Option<String>,
    /// Maximum number of questions to fetch
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,
    /// Number of questions to skip (for pagination)
    #[arg(long, default_value_t = 0)]
    pub skip: u32,
    /// Include paid-only questions (the default)
    #[arg(long, conflicts_with = "exclude_paid")]
    pub include_paid: bool,
    /// Exclude paid-only questions
    #[arg(long)]
    pub exclude_paid: bool,
}

impl FilterArgs {
    /// Normalize raw flag values into a validated filter. Runs before any
    /// session or network I/O so bad input never gets that far.
    pub fn to_filter(&self) -> leetcode_cli_libs::Result<QuestionFilter> {
        Ok(QuestionFilter {
            status: normalize_status(self.status.as_deref())?,
            difficulty: normalize_difficulty(self.difficulty.as_deref())?,
            search_keyword: self.search.clone(),
            limit: self.limit,
            skip: self.skip,
            include_paid: !self.exclude_paid,
        })
    }
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
    /// Output file path (default: stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Print to stdout, or write the exact same content to a file when an output
/// path was given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write output file '{}'", path.display()))?;
            tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
            println!("Questions exported to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
