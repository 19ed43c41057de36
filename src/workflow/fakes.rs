use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::JiraConfig;
use crate::context::AppContext;
use crate::domain::commit::CommitInfo;
use crate::domain::issue_type::{IssueTypeInfo, IssueTypeRef};
use crate::domain::ticket::{CurrentUser, IssueDraft, IssueSummary, IssueUpdate, Ticket, Transition};
use crate::error::{AppError, AppResult};
use crate::services::{IssueTrackerService, VersionControlService};

#[derive(Debug, Clone)]
pub struct CreatedIssue {
    pub key: String,
    pub summary: String,
    pub issue_type: Option<IssueTypeRef>,
    pub parent_key: Option<String>,
}

#[derive(Default)]
pub struct FakeTracker {
    pub reject_user: bool,
    pub fail_summaries: HashSet<String>,
    pub fail_comments: HashSet<String>,
    pub fail_transition_listing: HashSet<String>,
    pub transitions: HashMap<String, Vec<Transition>>,
    pub issue_types: Vec<IssueTypeInfo>,
    pub project_types: Option<Vec<IssueTypeInfo>>,
    pub issues: Vec<IssueSummary>,
    pub created: Mutex<Vec<CreatedIssue>>,
    pub comments: Mutex<Vec<(String, String)>>,
    pub listed: Mutex<Vec<String>>,
    pub applied: Mutex<Vec<(String, String)>>,
    pub updates: Mutex<Vec<(String, IssueUpdate)>>,
    pub next_key: AtomicUsize,
}

fn rejected(operation: &'static str) -> AppError {
    AppError::Tracker {
        operation,
        status: StatusCode::BAD_REQUEST,
        body: "{\"errorMessages\":[\"rejected\"]}".to_string(),
    }
}

impl FakeTracker {
    pub fn with_transitions(mut self, key: &str, names: &[&str]) -> Self {
        let transitions = names
            .iter()
            .enumerate()
            .map(|(index, name)| Transition {
                id: format!("{}", (index + 1) * 10),
                name: name.to_string(),
            })
            .collect();
        self.transitions.insert(key.to_string(), transitions);
        self
    }

    pub fn created(&self) -> Vec<CreatedIssue> {
        self.created.lock().unwrap().clone()
    }

    pub fn comments(&self) -> Vec<(String, String)> {
        self.comments.lock().unwrap().clone()
    }

    pub fn applied(&self) -> Vec<(String, String)> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssueTrackerService for FakeTracker {
    async fn current_user(&self) -> AppResult<CurrentUser> {
        if self.reject_user {
            return Err(AppError::Connectivity {
                status: StatusCode::UNAUTHORIZED,
                body: "unauthorized".to_string(),
            });
        }
        Ok(CurrentUser {
            display_name: Some("Test User".to_string()),
        })
    }

    async fn search_project(
        &self,
        _project_key: &str,
        max_results: u32,
    ) -> AppResult<Vec<IssueSummary>> {
        Ok(self
            .issues
            .iter()
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn create_issue(&self, project_key: &str, draft: &IssueDraft) -> AppResult<Ticket> {
        if self.fail_summaries.contains(&draft.summary) {
            return Err(rejected("issue creation"));
        }
        let number = self.next_key.fetch_add(1, Ordering::SeqCst) + 1;
        let key = format!("{project_key}-{number}");
        self.created.lock().unwrap().push(CreatedIssue {
            key: key.clone(),
            summary: draft.summary.clone(),
            issue_type: draft.issue_type.clone(),
            parent_key: draft.parent_key.clone(),
        });
        Ok(Ticket { key, url: None })
    }

    async fn update_issue(&self, key: &str, update: &IssueUpdate) -> AppResult<()> {
        self.updates
            .lock()
            .unwrap()
            .push((key.to_string(), update.clone()));
        Ok(())
    }

    async fn add_comment(&self, key: &str, text: &str) -> AppResult<()> {
        if self.fail_comments.contains(key) {
            return Err(rejected("comment creation"));
        }
        self.comments
            .lock()
            .unwrap()
            .push((key.to_string(), text.to_string()));
        Ok(())
    }

    async fn issue_types(&self) -> AppResult<Vec<IssueTypeInfo>> {
        Ok(self.issue_types.clone())
    }

    async fn project_issue_types(
        &self,
        _project_key: &str,
    ) -> AppResult<Option<Vec<IssueTypeInfo>>> {
        Ok(self.project_types.clone())
    }

    async fn transitions(&self, key: &str) -> AppResult<Vec<Transition>> {
        self.listed.lock().unwrap().push(key.to_string());
        if self.fail_transition_listing.contains(key) {
            return Err(AppError::Parse("transition listing: missing field `id`".to_string()));
        }
        Ok(self.transitions.get(key).cloned().unwrap_or_default())
    }

    async fn apply_transition(&self, key: &str, transition_id: &str) -> AppResult<()> {
        self.applied
            .lock()
            .unwrap()
            .push((key.to_string(), transition_id.to_string()));
        Ok(())
    }
}

pub struct FakeGit {
    pub commit: Option<CommitInfo>,
}

#[async_trait]
impl VersionControlService for FakeGit {
    async fn commit_info(&self, revision: Option<&str>) -> AppResult<CommitInfo> {
        self.commit.clone().ok_or_else(|| {
            AppError::VersionControl(format!("unknown revision {}", revision.unwrap_or("HEAD")))
        })
    }
}

pub fn commit(message: &str) -> CommitInfo {
    CommitInfo {
        hash: "0123456789abcdef0123456789abcdef01234567".to_string(),
        short_hash: "0123456".to_string(),
        author_name: "Ada Lovelace".to_string(),
        author_email: "ada@example.com".to_string(),
        date: "Tue Apr 15 10:00:00 2025 +0200".to_string(),
        subject: message.lines().next().unwrap_or_default().to_string(),
        message: message.to_string(),
    }
}

pub fn issue_type(id: &str, name: &str, subtask: bool) -> IssueTypeInfo {
    IssueTypeInfo {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        subtask,
    }
}

pub fn context(tracker: Arc<FakeTracker>, commit: Option<CommitInfo>) -> AppContext {
    let config = JiraConfig {
        email: "dev@example.com".to_string(),
        api_token: "token".to_string(),
        base_url: "https://example.atlassian.net".to_string(),
        project_key: "BWYD".to_string(),
    };
    AppContext::new(config, Arc::new(FakeGit { commit }), tracker)
}
