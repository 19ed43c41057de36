use std::collections::BTreeMap;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::ticket::IssueSummary;

const DONE_STATUS: &str = "Done";

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub timestamp: DateTime<Local>,
    pub project_key: String,
    pub total_issues: usize,
    pub status_breakdown: BTreeMap<String, usize>,
    pub issue_type_breakdown: BTreeMap<String, usize>,
    pub completion_percentage: f64,
}

impl ProgressReport {
    pub fn build(project_key: &str, issues: &[IssueSummary], timestamp: DateTime<Local>) -> Self {
        let mut status_breakdown = BTreeMap::new();
        let mut issue_type_breakdown = BTreeMap::new();

        for issue in issues {
            if let Some(status) = &issue.status {
                *status_breakdown.entry(status.clone()).or_insert(0) += 1;
            }
            if let Some(issue_type) = &issue.issue_type {
                *issue_type_breakdown.entry(issue_type.clone()).or_insert(0) += 1;
            }
        }

        let total_issues = issues.len();
        let completion_percentage = match status_breakdown.get(DONE_STATUS) {
            Some(done) if total_issues > 0 => *done as f64 / total_issues as f64 * 100.0,
            _ => 0.0,
        };

        Self {
            timestamp,
            project_key: project_key.to_string(),
            total_issues,
            status_breakdown,
            issue_type_breakdown,
            completion_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(key: &str, status: &str, issue_type: &str) -> IssueSummary {
        IssueSummary {
            key: key.to_string(),
            summary: format!("{key} summary"),
            status: Some(status.to_string()),
            issue_type: Some(issue_type.to_string()),
        }
    }

    #[test]
    fn counts_statuses_and_types() {
        let issues = vec![
            issue("BWYD-1", "Done", "Task"),
            issue("BWYD-2", "To Do", "Task"),
            issue("BWYD-3", "Done", "Story"),
            issue("BWYD-4", "In Progress", "Epic"),
        ];
        let report = ProgressReport::build("BWYD", &issues, Local::now());

        assert_eq!(report.total_issues, 4);
        assert_eq!(report.status_breakdown["Done"], 2);
        assert_eq!(report.status_breakdown["To Do"], 1);
        assert_eq!(report.issue_type_breakdown["Task"], 2);
        assert_eq!(report.issue_type_breakdown["Epic"], 1);
        assert!((report.completion_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_project_has_zero_completion() {
        let report = ProgressReport::build("BWYD", &[], Local::now());
        assert_eq!(report.total_issues, 0);
        assert_eq!(report.completion_percentage, 0.0);
    }

    #[test]
    fn no_done_status_has_zero_completion() {
        let issues = vec![issue("BWYD-1", "To Do", "Task")];
        let report = ProgressReport::build("BWYD", &issues, Local::now());
        assert_eq!(report.completion_percentage, 0.0);
    }

    #[test]
    fn serializes_to_json() {
        let issues = vec![issue("BWYD-1", "Done", "Task")];
        let report = ProgressReport::build("BWYD", &issues, Local::now());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["project_key"], "BWYD");
        assert_eq!(value["total_issues"], 1);
        assert_eq!(value["status_breakdown"]["Done"], 1);
        assert!(value["timestamp"].is_string());
    }
}
