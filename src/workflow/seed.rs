use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::domain::issue_type::{IssueTypeRoles, Role};
use crate::domain::roadmap::{RoadmapEpic, RoadmapItem};
use crate::domain::ticket::{IssueDraft, Ticket};

/// A story recorded as belonging to an epic. No link request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicLink {
    pub story: String,
    pub epic: String,
}

#[derive(Debug, Default)]
pub struct SeedOutcome {
    pub created: Vec<Ticket>,
    pub failed: Vec<String>,
    pub epic_links: Vec<EpicLink>,
}

/// Creates the roadmap: every epic first, then each story followed by its
/// tasks. A failed creation is logged and skipped.
pub async fn seed_roadmap(
    ctx: &AppContext,
    roadmap: &[RoadmapEpic],
    roles: &IssueTypeRoles,
) -> SeedOutcome {
    let mut outcome = SeedOutcome::default();
    let task_is_subtask = roles.get(Role::Task).is_some_and(|t| t.is_subtask());

    let mut epic_keys = Vec::with_capacity(roadmap.len());
    for epic in roadmap {
        info!("Creating epic '{}'...", epic.item.summary);
        epic_keys.push(create(ctx, &mut outcome, &epic.item, roles, Role::Epic, None).await);
    }

    for (epic, epic_key) in roadmap.iter().zip(epic_keys) {
        info!("Creating items for '{}'...", epic.item.summary);
        if epic_key.is_none() {
            warn!(
                "Epic key for '{}' is missing. Stories will not be linked to an Epic.",
                epic.item.summary
            );
        }

        for story in epic.stories {
            let story_key = create(ctx, &mut outcome, &story.item, roles, Role::Story, None).await;
            let Some(story_key) = story_key else {
                continue;
            };

            if let Some(epic_key) = &epic_key {
                info!("Linked Story {story_key} to Epic {epic_key}");
                outcome.epic_links.push(EpicLink {
                    story: story_key.clone(),
                    epic: epic_key.clone(),
                });
            }

            let parent = task_is_subtask.then(|| story_key.clone());
            info!(
                "Creating tasks for '{}' (Parent: {})",
                story.item.summary,
                parent.as_deref().unwrap_or("None")
            );
            for task in story.tasks {
                create(ctx, &mut outcome, task, roles, Role::Task, parent.clone()).await;
            }
        }
    }

    outcome
}

async fn create(
    ctx: &AppContext,
    outcome: &mut SeedOutcome,
    item: &RoadmapItem,
    roles: &IssueTypeRoles,
    role: Role,
    parent_key: Option<String>,
) -> Option<String> {
    let draft = IssueDraft::new(item.summary, item.description, roles.get(role).cloned())
        .with_parent(parent_key);

    match ctx.issue_tracker.create_issue(ctx.project_key(), &draft).await {
        Ok(ticket) => {
            info!("Successfully created issue: {}", ticket.key);
            let key = ticket.key.clone();
            outcome.created.push(ticket);
            Some(key)
        }
        Err(err) => {
            error!(
                role = role.as_str(),
                summary = item.summary,
                error = %err,
                "Error creating issue"
            );
            outcome.failed.push(item.summary.to_string());
            None
        }
    }
}
