use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::domain::reference::extract_references;
use crate::error::AppResult;
use crate::workflow::transition::{TransitionOutcome, transition_by_name};

#[derive(Debug)]
pub struct TicketUpdate {
    pub ticket_id: String,
    pub commented: bool,
    pub transition: Option<TransitionOutcome>,
}

#[derive(Debug)]
pub struct CommitUpdateOutcome {
    pub tickets: Vec<TicketUpdate>,
}

/// Posts the commit onto every ticket its message references and applies
/// any `#directive` transitions. One ticket failing never stops the next.
pub async fn update_from_commit(
    ctx: &AppContext,
    revision: Option<&str>,
) -> AppResult<CommitUpdateOutcome> {
    let commit = ctx.version_control.commit_info(revision).await?;
    info!("Processing commit: {} - {}", commit.short_hash, commit.subject);

    let references = extract_references(&commit.message);
    if references.is_empty() {
        info!("No Jira ticket IDs found in the commit message. Nothing to update.");
        return Ok(CommitUpdateOutcome {
            tickets: Vec::new(),
        });
    }

    let comment = commit.to_comment();
    let mut tickets = Vec::with_capacity(references.len());

    for reference in references {
        let ticket_id = reference.ticket_id;
        info!("Processing Jira ticket: {ticket_id}");

        let commented = match ctx.issue_tracker.add_comment(&ticket_id, &comment).await {
            Ok(()) => {
                info!("Added commit information as a comment to {ticket_id}");
                true
            }
            Err(err) => {
                error!(ticket = %ticket_id, error = %err, "Failed to add comment to {ticket_id}");
                false
            }
        };

        let transition = match (&reference.transition_name, &reference.transition_command) {
            (Some(name), _) => Some(transition_by_name(ctx, &ticket_id, name).await),
            (None, Some(command)) => {
                warn!(ticket = %ticket_id, "Unknown transition command '#{command}' ignored");
                None
            }
            (None, None) => None,
        };

        tickets.push(TicketUpdate {
            ticket_id,
            commented,
            transition,
        });
    }

    Ok(CommitUpdateOutcome { tickets })
}
