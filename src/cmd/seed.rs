use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::context::AppContext;
use crate::domain::issue_type::{IssueTypeRoles, Role};
use crate::domain::roadmap::{ROADMAP, item_count};
use crate::error::{AppError, AppResult};
use crate::workflow::discovery::discover_roles;
use crate::workflow::seed::{SeedOutcome, seed_roadmap};

#[derive(Debug, Clone)]
pub struct SeedCommandArgs {
    pub assume_yes: bool,
}

pub async fn run(ctx: &AppContext, args: SeedCommandArgs) -> AppResult<SeedOutcome> {
    let roles = discover_roles(ctx).await?;
    if roles.epic.is_none() && roles.story.is_none() && roles.task.is_none() {
        return Err(AppError::Configuration(
            "could not determine valid issue types; aborting setup".to_string(),
        ));
    }

    if !roles.is_complete() {
        warn!(
            "Some issue type roles could not be resolved; their items will be created without a type."
        );
    }
    print_roles(&roles);
    println!(
        "\n{} items will be created in project {}.",
        item_count(ROADMAP),
        ctx.project_key()
    );

    if !args.assume_yes && !confirm(&mut io::stdin().lock(), "Proceed with these issue types?")? {
        println!("Setup cancelled; nothing was created.");
        return Ok(SeedOutcome::default());
    }

    let outcome = seed_roadmap(ctx, ROADMAP, &roles).await;
    for link in &outcome.epic_links {
        println!("Story {} belongs to Epic {}", link.story, link.epic);
    }
    if outcome.failed.is_empty() {
        println!("Successfully created all Jira items based on the Development Roadmap.");
    } else {
        println!(
            "Created {} items; {} failed:",
            outcome.created.len(),
            outcome.failed.len()
        );
        for summary in &outcome.failed {
            println!("- {summary}");
        }
    }
    Ok(outcome)
}

fn print_roles(roles: &IssueTypeRoles) {
    println!("Using issue types:");
    for role in [Role::Epic, Role::Story, Role::Task] {
        match roles.get(role) {
            Some(issue_type) => println!("  {}: {issue_type}", role.as_str()),
            None => println!("  {}: <none>", role.as_str()),
        }
    }
}

fn confirm<R: BufRead>(input: &mut R, question: &str) -> AppResult<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{question} [y/N]: ")?;
    stdout.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
