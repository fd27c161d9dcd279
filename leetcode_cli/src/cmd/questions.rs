use crate::cmd::{write_output, FilterArgs, OutputArgs};
use crate::modules::format;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::{LeetCodeClient, Session};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ShowQuestionsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[command(flatten)]
    pub output: OutputArgs,
    /// Show statistics for the fetched questions
    #[arg(long)]
    pub stats: bool,
}

pub async fn run(session_file: &Path, args: ShowQuestionsArgs) -> Result<()> {
    // Filter validation comes first: a bad --status or --difficulty must fail
    // before the session file is even touched.
    let filter = args.filter.to_filter()?;

    let session = Session::load(session_file)?;
    let client = LeetCodeClient::with_session(session)?;

    let questions = client
        .fetch_questions(&filter)
        .await
        .context("failed to fetch questions")?;

    if questions.is_empty() {
        println!("No questions found matching the criteria.");
        return Ok(());
    }

    let rendered = format::render(args.output.format, &questions)?;
    write_output(args.output.output.as_deref(), &rendered)?;

    if args.stats {
        println!("\n{}", format::format_statistics(&questions));
    }

    Ok(())
}
