use std::env;

use crate::error::{AppError, AppResult};

pub const EMAIL_VAR: &str = "JIRA_EMAIL";
pub const TOKEN_VAR: &str = "JIRA_API_TOKEN";
pub const URL_VAR: &str = "JIRA_URL";
pub const PROJECT_VAR: &str = "JIRA_PROJECT_KEY";

pub const ENV_TEMPLATE: &str = "# Jira API Configuration
JIRA_EMAIL=your-email@example.com
JIRA_API_TOKEN=your-api-token
JIRA_URL=https://your-domain.atlassian.net
JIRA_PROJECT_KEY=BWYD

# Generate an API token from your Atlassian account:
# https://id.atlassian.com/manage-profile/security/api-tokens
";

/// Connection settings shared by every command.
#[derive(Debug, Clone)]
pub struct JiraConfig {
    pub email: String,
    pub api_token: String,
    pub base_url: String,
    pub project_key: String,
}

impl JiraConfig {
    /// Loads `.env` from the working directory (if any) and reads the
    /// required variables from the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            let value = lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let email = read(EMAIL_VAR);
        let api_token = read(TOKEN_VAR);
        let base_url = read(URL_VAR);
        let project_key = read(PROJECT_VAR);

        if !missing.is_empty() {
            return Err(AppError::Configuration(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            email,
            api_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_key,
        })
    }
}

pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    match chars.len() {
        0 => "<not set>".to_string(),
        len if len > 6 => {
            let head: String = chars[..3].iter().collect();
            let tail: String = chars[len - 3..].iter().collect();
            format!("{head}***{tail}")
        }
        _ => "***".to_string(),
    }
}
