mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cmd::commit::{self as commit_cmd, CommitCommandArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::issue::{self as issue_cmd, IssueArgs};
use crate::cmd::seed::{self as seed_cmd, SeedCommandArgs};
use crate::cmd::{check, issue_types, report};
use crate::config::JiraConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::jira::JiraClient;
use crate::workflow::connection;

#[derive(Parser)]
#[command(name = "jirakit", author, version, about = "Jira automation for git workflows")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the Jira connection and list a few project issues.
    Check,
    /// List the most recently created project issues.
    Issues(IssuesArgs),
    /// Print a progress report for the project as JSON.
    Report,
    /// List every issue type in the Jira instance.
    IssueTypes,
    /// List the issue types that can be created in the project.
    ProjectTypes,
    /// Create the development roadmap epics, stories, and tasks.
    Seed(SeedArgs),
    /// Comment on (and optionally transition) the tickets a commit references.
    UpdateFromCommit(UpdateFromCommitArgs),
    /// Work with a single issue.
    Issue(IssueArgs),
    /// Inspect configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct IssuesArgs {
    /// Maximum number of issues to list.
    #[arg(short, long, default_value_t = 5)]
    max: u32,
}

#[derive(Args)]
struct SeedArgs {
    /// Skip the issue type confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

#[derive(Args)]
struct UpdateFromCommitArgs {
    /// Commit to process; defaults to HEAD.
    commit: Option<String>,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    if let Commands::Config(args) = cli.command {
        return config_cmd::run(args.command);
    }

    let ctx = connect().await?;

    match cli.command {
        Commands::Check => check::run(&ctx).await,
        Commands::Issues(args) => report::run_issues(&ctx, args.max).await,
        Commands::Report => report::run_report(&ctx).await,
        Commands::IssueTypes => issue_types::run_global(&ctx).await,
        Commands::ProjectTypes => issue_types::run_project(&ctx).await,
        Commands::Seed(args) => {
            seed_cmd::run(&ctx, SeedCommandArgs { assume_yes: args.yes }).await?;
            Ok(())
        }
        Commands::UpdateFromCommit(args) => {
            commit_cmd::run(&ctx, CommitCommandArgs { revision: args.commit }).await?;
            Ok(())
        }
        Commands::Issue(args) => issue_cmd::run(&ctx, args.command).await,
        Commands::Config(_) => Ok(()),
    }
}

/// Loads configuration and verifies the credentials before any command runs.
async fn connect() -> AppResult<AppContext> {
    let config = JiraConfig::from_env()?;
    let cwd = std::env::current_dir()?;

    let git = Arc::new(GitCli::new(cwd));
    let issue_tracker = Arc::new(JiraClient::new(&config));
    let ctx = AppContext::new(config, git, issue_tracker);

    info!("Testing connection to Jira...");
    connection::probe(&ctx).await?;
    Ok(ctx)
}
