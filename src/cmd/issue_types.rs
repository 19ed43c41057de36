use crate::context::AppContext;
use crate::domain::issue_type::{IssueTypeInfo, find_exact};
use crate::error::AppResult;
use crate::workflow::discovery::project_issue_types;

const RULE_WIDTH: usize = 80;

pub async fn run_global(ctx: &AppContext) -> AppResult<()> {
    let types = ctx.issue_tracker.issue_types().await?;

    println!("\n==== Available Issue Types in Jira ====");
    println!("Found {} issue types:", types.len());
    for issue_type in &types {
        println!(
            "ID: {} | Name: {} | Description: {}",
            issue_type.id,
            issue_type.name,
            description(issue_type)
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }
    Ok(())
}

pub async fn run_project(ctx: &AppContext) -> AppResult<()> {
    let project_key = ctx.project_key();
    let types = project_issue_types(ctx).await?;

    println!("\n==== Available Issue Types for Project {project_key} ====");
    println!(
        "Found {} issue types that can be created in this project:",
        types.len()
    );
    for issue_type in &types {
        println!("ID: {} | Name: {}", issue_type.id, issue_type.name);
        println!("Description: {}", description(issue_type));
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    println!("\nRecommended issue types for `jirakit seed`:");
    for name in ["Epic", "Story", "Task"] {
        match find_exact(&types, name) {
            Some(found) => println!("{name}: ID {} ({})", found.id, found.name),
            None => println!("{name} issue type not found!"),
        }
    }
    Ok(())
}

fn description(issue_type: &IssueTypeInfo) -> &str {
    issue_type
        .description
        .as_deref()
        .unwrap_or("No description")
}
