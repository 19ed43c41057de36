use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit::{CommitUpdateOutcome, update_from_commit};
use crate::workflow::transition::TransitionOutcome;

#[derive(Debug, Clone)]
pub struct CommitCommandArgs {
    pub revision: Option<String>,
}

pub async fn run(ctx: &AppContext, args: CommitCommandArgs) -> AppResult<CommitUpdateOutcome> {
    let outcome = update_from_commit(ctx, args.revision.as_deref()).await?;

    for ticket in &outcome.tickets {
        let comment = if ticket.commented { "commented" } else { "comment failed" };
        let transition = match &ticket.transition {
            None => String::new(),
            Some(TransitionOutcome::Applied { name }) => format!(", moved to '{name}'"),
            Some(TransitionOutcome::Unavailable { name, .. }) => {
                format!(", '{name}' unavailable")
            }
            Some(TransitionOutcome::Failed { name, .. }) => format!(", move to '{name}' failed"),
        };
        println!("{}: {comment}{transition}", ticket.ticket_id);
    }
    Ok(outcome)
}
