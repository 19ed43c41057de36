use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::{EMAIL_VAR, ENV_TEMPLATE, PROJECT_VAR, TOKEN_VAR, URL_VAR, mask_secret};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the Jira settings found in the environment (token masked).
    Show,
    /// Print a `.env` template, or write it to a file.
    Template {
        /// Write the template here instead of printing it.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => run_show(),
        ConfigCommand::Template { output } => run_template(output),
    }
}

fn run_show() -> AppResult<()> {
    dotenv::dotenv().ok();

    println!("{EMAIL_VAR}: {}", display_value(env::var(EMAIL_VAR).ok()));
    println!(
        "{TOKEN_VAR}: {}",
        mask_secret(&env::var(TOKEN_VAR).unwrap_or_default())
    );
    println!("{URL_VAR}: {}", display_value(env::var(URL_VAR).ok()));
    println!("{PROJECT_VAR}: {}", display_value(env::var(PROJECT_VAR).ok()));
    Ok(())
}

fn run_template(output: Option<PathBuf>) -> AppResult<()> {
    match output {
        Some(path) => {
            fs::write(&path, ENV_TEMPLATE)?;
            println!("Created {}", path.display());
            println!("Create a copy named .env and fill in your actual credentials.");
        }
        None => print!("{ENV_TEMPLATE}"),
    }
    Ok(())
}

fn display_value(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "<not set>".to_string())
}
