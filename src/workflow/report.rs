use chrono::Local;
use tracing::error;

use crate::context::AppContext;
use crate::domain::report::ProgressReport;
use crate::domain::ticket::IssueSummary;

pub const REPORT_MAX_RESULTS: u32 = 1000;

/// Most recently created issues of the configured project. Failures are
/// logged and reported as an empty list.
pub async fn recent_issues(ctx: &AppContext, max_results: u32) -> Vec<IssueSummary> {
    match ctx
        .issue_tracker
        .search_project(ctx.project_key(), max_results)
        .await
    {
        Ok(issues) => issues,
        Err(err) => {
            error!(error = %err, "Error fetching issues");
            Vec::new()
        }
    }
}

pub async fn progress_report(ctx: &AppContext) -> ProgressReport {
    let issues = recent_issues(ctx, REPORT_MAX_RESULTS).await;
    ProgressReport::build(ctx.project_key(), &issues, Local::now())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::workflow::fakes::{FakeTracker, context};

    fn issue(key: &str, status: &str) -> IssueSummary {
        IssueSummary {
            key: key.to_string(),
            summary: "work".to_string(),
            status: Some(status.to_string()),
            issue_type: Some("Task".to_string()),
        }
    }

    #[tokio::test]
    async fn limits_recent_issues() {
        let tracker = FakeTracker {
            issues: vec![
                issue("BWYD-3", "Done"),
                issue("BWYD-2", "To Do"),
                issue("BWYD-1", "Done"),
            ],
            ..FakeTracker::default()
        };
        let ctx = context(Arc::new(tracker), None);

        let issues = recent_issues(&ctx, 2).await;
        let keys: Vec<_> = issues.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["BWYD-3", "BWYD-2"]);
    }

    #[tokio::test]
    async fn reports_on_the_configured_project() {
        let tracker = FakeTracker {
            issues: vec![issue("BWYD-2", "To Do"), issue("BWYD-1", "Done")],
            ..FakeTracker::default()
        };
        let ctx = context(Arc::new(tracker), None);

        let report = progress_report(&ctx).await;
        assert_eq!(report.project_key, "BWYD");
        assert_eq!(report.total_issues, 2);
        assert!((report.completion_percentage - 50.0).abs() < f64::EPSILON);
    }
}
