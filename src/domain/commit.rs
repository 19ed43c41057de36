#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub short_hash: String,
    pub author_name: String,
    pub author_email: String,
    pub date: String,
    pub subject: String,
    pub message: String,
}

impl CommitInfo {
    /// Comment body posted on every ticket the commit references.
    pub fn to_comment(&self) -> String {
        format!(
            "\nGit commit referencing this issue:\n\n\
             *Commit:* {hash}\n\
             *Author:* {name} <{email}>\n\
             *Date:* {date}\n\n\
             *Message:*\n{message}\n\n\
             This comment was automatically added by the jirakit Git-Jira integration.\n",
            hash = self.hash,
            name = self.author_name,
            email = self.author_email,
            date = self.date,
            message = self.message,
        )
    }
}
