use crate::cmd::{write_output, OutputArgs};
use crate::modules::format;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::filter::DEFAULT_LIMIT;
use leetcode_cli_libs::{LeetCodeClient, Session};
use std::path::Path;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search keyword
    pub keyword: String,
    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn run(session_file: &Path, args: SearchArgs) -> Result<()> {
    let session = Session::load(session_file)?;
    let client = LeetCodeClient::with_session(session)?;

    let questions = client
        .search_questions(&args.keyword, args.limit)
        .await
        .context("search failed")?;

    if questions.is_empty() {
        println!("No questions found for keyword: '{}'", args.keyword);
        return Ok(());
    }

    let rendered = format::render(args.output.format, &questions)?;
    write_output(args.output.output.as_deref(), &rendered)?;

    Ok(())
}
