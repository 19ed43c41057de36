use tracing::info;

use crate::context::AppContext;
use crate::error::AppResult;

/// Calls the current-user endpoint; any failure is fatal for the caller.
pub async fn probe(ctx: &AppContext) -> AppResult<String> {
    let user = ctx.issue_tracker.current_user().await?;
    let name = user
        .display_name
        .unwrap_or_else(|| "Unknown User".to_string());
    info!("Successfully connected to Jira as {name}");
    Ok(name)
}
