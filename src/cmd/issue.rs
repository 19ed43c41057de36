use clap::{Args, Subcommand};

use crate::context::AppContext;
use crate::domain::issue_type::IssueTypeRef;
use crate::domain::ticket::{IssueDraft, IssueUpdate};
use crate::error::{AppError, AppResult};
use crate::workflow::issue::{comment_on_issue, create_issue, update_issue};
use crate::workflow::transition::{TransitionOutcome, transition_by_name};

#[derive(Args, Debug, Clone)]
pub struct IssueArgs {
    #[command(subcommand)]
    pub command: IssueCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum IssueCommand {
    /// Create an issue in the configured project.
    Create {
        #[arg(long)]
        summary: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Issue type id (digits) or name.
        #[arg(long = "type")]
        issue_type: Option<String>,
        /// Parent issue key, for sub-tasks.
        #[arg(long)]
        parent: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// Assignee account id.
        #[arg(long)]
        assignee: Option<String>,
    },
    /// Change the summary and/or description of an issue.
    Update {
        key: String,
        #[arg(long)]
        summary: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a comment to an issue.
    Comment { key: String, text: String },
    /// Move an issue through the transition with this name.
    Transition { key: String, name: String },
}

pub async fn run(ctx: &AppContext, command: IssueCommand) -> AppResult<()> {
    match command {
        IssueCommand::Create {
            summary,
            description,
            issue_type,
            parent,
            priority,
            assignee,
        } => {
            let draft = IssueDraft {
                summary,
                description,
                issue_type: issue_type.as_deref().map(IssueTypeRef::parse),
                parent_key: parent,
                priority,
                assignee,
            };
            let ticket = create_issue(ctx, draft).await?;
            println!("Ticket {} created.", ticket.key);
            if let Some(url) = &ticket.url {
                println!("View ticket: {url}");
            }
            Ok(())
        }
        IssueCommand::Update {
            key,
            summary,
            description,
        } => update_issue(ctx, &key, IssueUpdate { summary, description }).await,
        IssueCommand::Comment { key, text } => comment_on_issue(ctx, &key, &text).await,
        IssueCommand::Transition { key, name } => match transition_by_name(ctx, &key, &name).await {
            TransitionOutcome::Applied { .. } => Ok(()),
            TransitionOutcome::Unavailable { name, available } => Err(AppError::Transition(
                format!(
                    "transition '{name}' not available for {key}; available: {}",
                    available.join(", ")
                ),
            )),
            TransitionOutcome::Failed { reason, .. } => Err(AppError::Transition(reason)),
        },
    }
}
