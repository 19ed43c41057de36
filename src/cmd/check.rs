use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::report::recent_issues;

const SAMPLE_SIZE: u32 = 5;

/// Connection is probed before any command runs; this lists a few issues to
/// confirm the project is readable too.
pub async fn run(ctx: &AppContext) -> AppResult<()> {
    println!("\nFetching {SAMPLE_SIZE} recent issues to verify project access:");
    let issues = recent_issues(ctx, SAMPLE_SIZE).await;
    if issues.is_empty() {
        println!("No issues found in the project.");
    }
    for issue in issues {
        println!("- {}: {}", issue.key, issue.summary);
    }
    Ok(())
}
