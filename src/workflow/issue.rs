use tracing::info;

use crate::context::AppContext;
use crate::domain::ticket::{IssueDraft, IssueUpdate, Ticket};
use crate::error::{AppError, AppResult};

pub async fn create_issue(ctx: &AppContext, draft: IssueDraft) -> AppResult<Ticket> {
    if draft.summary.trim().is_empty() {
        return Err(AppError::Validation("summary must not be empty".to_string()));
    }
    let ticket = ctx
        .issue_tracker
        .create_issue(ctx.project_key(), &draft)
        .await?;
    info!("Successfully created issue: {}", ticket.key);
    Ok(ticket)
}

pub async fn update_issue(ctx: &AppContext, key: &str, update: IssueUpdate) -> AppResult<()> {
    if update.is_empty() {
        return Err(AppError::Validation(
            "nothing to update; pass --summary and/or --description".to_string(),
        ));
    }
    ctx.issue_tracker.update_issue(key, &update).await?;
    info!("Successfully updated issue: {key}");
    Ok(())
}

pub async fn comment_on_issue(ctx: &AppContext, key: &str, text: &str) -> AppResult<()> {
    ctx.issue_tracker.add_comment(key, text).await?;
    info!("Successfully added comment to issue: {key}");
    Ok(())
}
