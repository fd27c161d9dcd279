use crate::cmd::{write_output, FilterArgs, OutputArgs};
use crate::modules::format;
use anyhow::{Context, Result};
use clap::Args;
use leetcode_cli_libs::{LeetCodeClient, Session};
use std::path::Path;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
    #[command(flatten)]
    pub output: OutputArgs,
}

pub async fn run(session_file: &Path, args: ExportArgs) -> Result<()> {
    let filter = args.filter.to_filter()?;

    let session = Session::load(session_file)?;
    let client = LeetCodeClient::with_session(session)?;

    let questions = client
        .fetch_questions(&filter)
        .await
        .context("export failed")?;

    if questions.is_empty() {
        println!("No questions found to export.");
        return Ok(());
    }

    let rendered = format::render(args.output.format, &questions)?;
    write_output(args.output.output.as_deref(), &rendered)?;

    Ok(())
}
