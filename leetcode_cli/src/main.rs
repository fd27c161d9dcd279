mod cmd;
mod modules;

use crate::cmd::{
    export::ExportArgs, questions::ShowQuestionsArgs, search::SearchArgs,
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use tokio::runtime::Builder;
use tokio::signal;
use tracing_subscriber::filter::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leetcode_cli")]
#[command(version, about = "LeetCode CLI Tool - a command-line interface for the LeetCode platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to the session file
    #[arg(long, global = true, default_value = "./leetcode_cli.session")]
    session_file: PathBuf,
    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check session validity and show the user's solved counts
    CheckSession,
    /// Fetch and display questions matching the given filters
    ShowQuestions(ShowQuestionsArgs),
    /// Search questions by keyword
    Search(SearchArgs),
    /// Export questions to a file or stdout
    Export(ExportArgs),
}

fn init_tracing(verbose: bool) {
    // Events go to stderr so formatted results on stdout stay clean. Without
    // --verbose only warnings show, matching the quiet default of the tool.
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime");

    if let Err(e) = runtime.block_on(execute(cli)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    tokio::select! {
        result = dispatch(cli) => result,
        _ = signal::ctrl_c() => {
            eprintln!("\nOperation cancelled by user.");
            std::process::exit(1);
        }
    }
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        session_file,
        verbose: _,
    } = cli;

    match command {
        Commands::CheckSession => cmd::check_session::run(&session_file).await,
        Commands::ShowQuestions(args) => cmd::questions::run(&session_file, args).await,
        Commands::Search(args) => cmd::search::run(&session_file, args).await,
        Commands::Export(args) => cmd::export::run(&session_file, args).await,
    }
}
