use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::workflow::report::{progress_report, recent_issues};

pub async fn run_issues(ctx: &AppContext, max_results: u32) -> AppResult<()> {
    println!("\n==== Recent Issues ====");
    for issue in recent_issues(ctx, max_results).await {
        println!(
            "{}: {} - {}",
            issue.key,
            issue.summary,
            issue.status.as_deref().unwrap_or("Unknown")
        );
    }
    Ok(())
}

pub async fn run_report(ctx: &AppContext) -> AppResult<()> {
    println!("\n==== Project Progress Report ====");
    let report = progress_report(ctx).await;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| AppError::Parse(format!("failed to render report: {err}")))?;
    println!("{json}");
    Ok(())
}
