use async_trait::async_trait;

use crate::domain::issue_type::IssueTypeInfo;
use crate::domain::ticket::{CurrentUser, IssueDraft, IssueSummary, IssueUpdate, Ticket, Transition};
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn current_user(&self) -> AppResult<CurrentUser>;
    async fn search_project(
        &self,
        project_key: &str,
        max_results: u32,
    ) -> AppResult<Vec<IssueSummary>>;
    async fn create_issue(&self, project_key: &str, draft: &IssueDraft) -> AppResult<Ticket>;
    async fn update_issue(&self, key: &str, update: &IssueUpdate) -> AppResult<()>;
    async fn add_comment(&self, key: &str, text: &str) -> AppResult<()>;
    async fn issue_types(&self) -> AppResult<Vec<IssueTypeInfo>>;
    /// Issue types creatable in `project_key`; `None` when the project is unknown.
    async fn project_issue_types(&self, project_key: &str) -> AppResult<Option<Vec<IssueTypeInfo>>>;
    async fn transitions(&self, key: &str) -> AppResult<Vec<Transition>>;
    async fn apply_transition(&self, key: &str, transition_id: &str) -> AppResult<()>;
}
