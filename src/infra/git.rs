use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::commit::CommitInfo;
use crate::error::{AppError, AppResult};
use crate::services::{DEFAULT_REVISION, VersionControlService};

const FIELD_SEPARATOR: char = '\u{1f}';
// hash, short hash, author name, author email, date, subject, full body
const LOG_FORMAT: &str = "--format=%H%x1f%h%x1f%an%x1f%ae%x1f%ad%x1f%s%x1f%B";

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn commit_info(&self, revision: Option<&str>) -> AppResult<CommitInfo> {
        let revision = revision.unwrap_or(DEFAULT_REVISION);
        debug!(revision, root = %self.workspace_root.display(), "reading commit");

        let output = Command::new("git")
            .args(log_args(revision))
            .current_dir(&self.workspace_root)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git log {revision} failed: {}",
                stderr.trim()
            )));
        }

        parse_log_output(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Arguments for reading one commit; `revision` is never taken as an option.
fn log_args(revision: &str) -> [&str; 6] {
    ["log", LOG_FORMAT, "-n", "1", "--end-of-options", revision]
}

fn parse_log_output(stdout: &str) -> AppResult<CommitInfo> {
    let fields: Vec<&str> = stdout.splitn(7, FIELD_SEPARATOR).collect();
    let [hash, short_hash, author_name, author_email, date, subject, message] = fields[..] else {
        return Err(AppError::VersionControl(format!(
            "unexpected git log output: {stdout:?}"
        )));
    };

    Ok(CommitInfo {
        hash: hash.trim().to_string(),
        short_hash: short_hash.to_string(),
        author_name: author_name.to_string(),
        author_email: author_email.to_string(),
        date: date.to_string(),
        subject: subject.to_string(),
        message: message.trim().to_string(),
    })
}
