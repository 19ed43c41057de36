use tracing::{error, info, warn};

use crate::context::AppContext;
use crate::domain::ticket::find_transition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied { name: String },
    Unavailable { name: String, available: Vec<String> },
    Failed { name: String, reason: String },
}

/// Moves `key` through the transition called `name` (case-insensitive).
///
/// A transition listing that fails is treated as an empty one.
pub async fn transition_by_name(ctx: &AppContext, key: &str, name: &str) -> TransitionOutcome {
    info!("Attempting to transition {key} to '{name}'");

    let transitions = match ctx.issue_tracker.transitions(key).await {
        Ok(transitions) => transitions,
        Err(err) => {
            error!(ticket = key, error = %err, "could not list transitions");
            Vec::new()
        }
    };

    let Some(transition) = find_transition(&transitions, name) else {
        let available: Vec<String> = transitions.into_iter().map(|t| t.name).collect();
        warn!(
            ticket = key,
            "Transition '{name}' not available for {key}. Available transitions: {}",
            available.join(", ")
        );
        return TransitionOutcome::Unavailable {
            name: name.to_string(),
            available,
        };
    };

    match ctx.issue_tracker.apply_transition(key, &transition.id).await {
        Ok(()) => {
            info!("Successfully transitioned {key} to '{}'", transition.name);
            TransitionOutcome::Applied {
                name: transition.name.clone(),
            }
        }
        Err(err) => {
            error!(ticket = key, error = %err, "Failed to transition {key}");
            TransitionOutcome::Failed {
                name: name.to_string(),
                reason: err.to_string(),
            }
        }
    }
}
