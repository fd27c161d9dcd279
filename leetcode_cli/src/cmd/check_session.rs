use crate::modules::format;
use anyhow::{Context, Result};
use leetcode_cli_libs::{LeetCodeClient, Session};
use std::path::Path;

pub async fn run(session_file: &Path) -> Result<()> {
    let session = Session::load(session_file)?;
    let client = LeetCodeClient::with_session(session)?;

    let user = client
        .check_session()
        .await
        .context("session check failed")?;

    println!("{}", format::format_user_info(&user));
    Ok(())
}
