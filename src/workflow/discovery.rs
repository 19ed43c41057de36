use tracing::{info, warn};

use crate::context::AppContext;
use crate::domain::issue_type::{IssueTypeInfo, IssueTypeRoles, resolve_roles};
use crate::error::{AppError, AppResult};

/// Issue types the configured project accepts.
pub async fn project_issue_types(ctx: &AppContext) -> AppResult<Vec<IssueTypeInfo>> {
    let project_key = ctx.project_key();
    ctx.issue_tracker
        .project_issue_types(project_key)
        .await?
        .ok_or_else(|| AppError::Configuration(format!("no project found with key: {project_key}")))
}

/// Finds the epic/story/task issue types for the configured project.
///
/// Roles with no matching type name are filled with a stand-in type and a
/// warning; the caller prints the mapping for confirmation.
pub async fn discover_roles(ctx: &AppContext) -> AppResult<IssueTypeRoles> {
    info!("Fetching valid issue types for your project...");
    let types = project_issue_types(ctx).await?;
    info!("Found {} issue types available for this project:", types.len());
    for issue_type in &types {
        let kind = if issue_type.subtask { "Sub-task" } else { "Standard task" };
        info!("- {} (ID: {}, {kind})", issue_type.name, issue_type.id);
    }

    let roles = resolve_roles(&types);
    for fallback in &roles.fallbacks {
        warn!(
            role = fallback.role.as_str(),
            "{} type not found. Using {} as fallback; check this before continuing.",
            fallback.role.as_str(),
            fallback.used
        );
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::issue_type::{IssueTypeRef, Role};
    use crate::workflow::fakes::{FakeTracker, context, issue_type};

    #[tokio::test]
    async fn resolves_project_roles() {
        let tracker = FakeTracker {
            project_types: Some(vec![
                issue_type("1", "Epic", false),
                issue_type("2", "Story", false),
                issue_type("3", "Task", false),
                issue_type("4", "Subtask", true),
            ]),
            ..FakeTracker::default()
        };
        let ctx = context(Arc::new(tracker), None);

        let roles = discover_roles(&ctx).await.unwrap();

        assert!(matches!(
            roles.get(Role::Task),
            Some(IssueTypeRef::Resolved { id, subtask: false, .. }) if id == "3"
        ));
        assert!(roles.fallbacks.is_empty());
    }

    #[tokio::test]
    async fn records_fallbacks() {
        let tracker = FakeTracker {
            project_types: Some(vec![issue_type("9", "Bug", false)]),
            ..FakeTracker::default()
        };
        let ctx = context(Arc::new(tracker), None);

        let roles = discover_roles(&ctx).await.unwrap();

        assert_eq!(roles.fallbacks.len(), 3);
        assert!(roles.is_complete());
    }

    #[tokio::test]
    async fn unknown_project_is_an_error() {
        let ctx = context(Arc::new(FakeTracker::default()), None);
        assert!(matches!(
            discover_roles(&ctx).await,
            Err(AppError::Configuration(_))
        ));
    }
}
