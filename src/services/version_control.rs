use async_trait::async_trait;

use crate::domain::commit::CommitInfo;
use crate::error::AppResult;

pub const DEFAULT_REVISION: &str = "HEAD";

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Reads one commit; `None` means the most recent one.
    async fn commit_info(&self, revision: Option<&str>) -> AppResult<CommitInfo>;
}
