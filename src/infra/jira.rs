use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, RequestBuilder, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::JiraConfig;
use crate::domain::issue_type::{IssueTypeInfo, IssueTypeRef};
use crate::domain::ticket::{CurrentUser, IssueDraft, IssueSummary, IssueUpdate, Ticket, Transition};
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

const SEARCH_FIELDS: &[&str] = &[
    "summary",
    "description",
    "status",
    "assignee",
    "priority",
    "issuetype",
    "created",
    "updated",
];

pub struct JiraClient {
    http: Client,
    base_url: String,
    auth_header: String,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header: Self::auth_header(&config.email, &config.api_token),
        }
    }

    fn auth_header(email: &str, token: &str) -> String {
        let credentials = format!("{email}:{token}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/rest/api/3/{}", self.base_url, path)
    }

    fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.base_url, key)
    }

    async fn send(&self, request: RequestBuilder, operation: &'static str) -> AppResult<Response> {
        let response = request
            .header(AUTHORIZATION, &self.auth_header)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|err| AppError::Http(format!("{operation}: {err}")))?;

        let status = response.status();
        debug!(operation, %status, "Jira responded");
        if !status.is_success() {
            let body = read_body(response).await;
            return Err(AppError::Tracker {
                operation,
                status,
                body,
            });
        }
        Ok(response)
    }
}

async fn read_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<unable to read response>".to_string())
}

async fn decode<T: DeserializeOwned>(response: Response, operation: &'static str) -> AppResult<T> {
    let body = response
        .text()
        .await
        .map_err(|err| AppError::Http(format!("{operation}: {err}")))?;
    serde_json::from_str(&body).map_err(|err| AppError::Parse(format!("{operation}: {err}")))
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn current_user(&self) -> AppResult<CurrentUser> {
        let request = self.http.get(self.endpoint("myself"));
        let response = match self.send(request, "connection check").await {
            Ok(response) => response,
            Err(AppError::Tracker { status, body, .. }) => {
                return Err(AppError::Connectivity { status, body });
            }
            Err(err) => return Err(err),
        };
        let user: MyselfResponse = decode(response, "connection check").await?;
        Ok(CurrentUser {
            display_name: user.display_name,
        })
    }

    async fn search_project(
        &self,
        project_key: &str,
        max_results: u32,
    ) -> AppResult<Vec<IssueSummary>> {
        let jql = format!("project = {project_key} ORDER BY created DESC");
        let body = SearchRequest {
            jql: &jql,
            max_results,
            fields: SEARCH_FIELDS,
        };
        let request = self.http.post(self.endpoint("search")).json(&body);
        let response = self.send(request, "issue search").await?;
        let payload: SearchResponse = decode(response, "issue search").await?;
        Ok(payload.issues.into_iter().map(IssueSummary::from).collect())
    }

    async fn create_issue(&self, project_key: &str, draft: &IssueDraft) -> AppResult<Ticket> {
        let body = CreateIssueRequest {
            fields: CreateIssueFields::new(project_key, draft)?,
        };
        let request = self.http.post(self.endpoint("issue")).json(&body);
        let response = self.send(request, "issue creation").await?;
        let payload: CreateIssueResponse = decode(response, "issue creation").await?;
        let url = self.browse_url(&payload.key);
        Ok(Ticket {
            key: payload.key,
            url: Some(url),
        })
    }

    async fn update_issue(&self, key: &str, update: &IssueUpdate) -> AppResult<()> {
        let body = UpdateIssueRequest {
            fields: UpdateIssueFields {
                summary: update.summary.as_deref(),
                description: update.description.as_deref().map(AdfDocument::text),
            },
        };
        let request = self
            .http
            .put(self.endpoint(&format!("issue/{key}")))
            .json(&body);
        self.send(request, "issue update").await?;
        Ok(())
    }

    async fn add_comment(&self, key: &str, text: &str) -> AppResult<()> {
        let body = CommentRequest {
            body: AdfDocument::text(text),
        };
        let request = self
            .http
            .post(self.endpoint(&format!("issue/{key}/comment")))
            .json(&body);
        self.send(request, "comment creation").await?;
        Ok(())
    }

    async fn issue_types(&self) -> AppResult<Vec<IssueTypeInfo>> {
        let request = self.http.get(self.endpoint("issuetype"));
        let response = self.send(request, "issue type listing").await?;
        let payload: Vec<IssueTypePayload> = decode(response, "issue type listing").await?;
        Ok(payload.into_iter().map(IssueTypeInfo::from).collect())
    }

    async fn project_issue_types(
        &self,
        project_key: &str,
    ) -> AppResult<Option<Vec<IssueTypeInfo>>> {
        let request = self
            .http
            .get(self.endpoint("issue/createmeta"))
            .query(&[("projectKeys", project_key), ("expand", "projects.issuetypes")]);
        let response = self.send(request, "project metadata").await?;
        let payload: CreateMetaResponse = decode(response, "project metadata").await?;
        Ok(payload.projects.into_iter().next().map(|project| {
            project
                .issuetypes
                .into_iter()
                .map(IssueTypeInfo::from)
                .collect()
        }))
    }

    async fn transitions(&self, key: &str) -> AppResult<Vec<Transition>> {
        let request = self
            .http
            .get(self.endpoint(&format!("issue/{key}/transitions")));
        let response = self.send(request, "transition listing").await?;
        let payload: TransitionsResponse = decode(response, "transition listing").await?;
        Ok(payload
            .transitions
            .into_iter()
            .map(|t| Transition {
                id: t.id,
                name: t.name,
            })
            .collect())
    }

    async fn apply_transition(&self, key: &str, transition_id: &str) -> AppResult<()> {
        let body = TransitionRequest {
            transition: IdField { id: transition_id },
        };
        let request = self
            .http
            .post(self.endpoint(&format!("issue/{key}/transitions")))
            .json(&body);
        self.send(request, "transition").await?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchRequest<'a> {
    jql: &'a str,
    max_results: u32,
    fields: &'a [&'a str],
}

#[derive(Serialize)]
struct CreateIssueRequest<'a> {
    fields: CreateIssueFields<'a>,
}

#[derive(Serialize)]
struct CreateIssueFields<'a> {
    project: KeyField<'a>,
    summary: &'a str,
    description: AdfDocument<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issuetype: Option<IssueTypeField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<KeyField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<NameField<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    assignee: Option<IdField<'a>>,
}

impl<'a> CreateIssueFields<'a> {
    fn new(project_key: &'a str, draft: &'a IssueDraft) -> AppResult<Self> {
        let parent_key = draft.parent_key.as_deref();
        let (issuetype, parent) = match &draft.issue_type {
            Some(IssueTypeRef::Resolved { id, name, subtask }) => {
                let parent = match (*subtask, parent_key) {
                    (true, Some(key)) => Some(KeyField { key }),
                    (true, None) => {
                        return Err(AppError::Validation(format!(
                            "issue type {name} is a sub-task type and needs a parent issue"
                        )));
                    }
                    (false, _) => None,
                };
                (Some(IssueTypeField::Id { id }), parent)
            }
            Some(IssueTypeRef::ById(id)) => (
                Some(IssueTypeField::Id { id }),
                parent_key.map(|key| KeyField { key }),
            ),
            Some(IssueTypeRef::ByName(name)) => (
                Some(IssueTypeField::Name { name }),
                parent_key.map(|key| KeyField { key }),
            ),
            None => (None, None),
        };

        Ok(Self {
            project: KeyField { key: project_key },
            summary: &draft.summary,
            description: AdfDocument::text(&draft.description),
            issuetype,
            parent,
            priority: draft.priority.as_deref().map(|name| NameField { name }),
            assignee: draft.assignee.as_deref().map(|id| IdField { id }),
        })
    }
}

#[derive(Serialize)]
struct UpdateIssueRequest<'a> {
    fields: UpdateIssueFields<'a>,
}

#[derive(Serialize)]
struct UpdateIssueFields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<AdfDocument<'a>>,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    body: AdfDocument<'a>,
}

#[derive(Serialize)]
struct TransitionRequest<'a> {
    transition: IdField<'a>,
}

#[derive(Serialize)]
struct KeyField<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct IdField<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct NameField<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(untagged)]
enum IssueTypeField<'a> {
    Id { id: &'a str },
    Name { name: &'a str },
}

/// Atlassian document holding a single paragraph of plain text.
#[derive(Serialize)]
struct AdfDocument<'a> {
    #[serde(rename = "type")]
    doc_type: &'static str,
    version: u8,
    content: [AdfParagraph<'a>; 1],
}

impl<'a> AdfDocument<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            doc_type: "doc",
            version: 1,
            content: [AdfParagraph {
                node_type: "paragraph",
                content: [AdfText {
                    text_type: "text",
                    text,
                }],
            }],
        }
    }
}

#[derive(Serialize)]
struct AdfParagraph<'a> {
    #[serde(rename = "type")]
    node_type: &'static str,
    content: [AdfText<'a>; 1],
}

#[derive(Serialize)]
struct AdfText<'a> {
    #[serde(rename = "type")]
    text_type: &'static str,
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyselfResponse {
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct CreateIssueResponse {
    key: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<SearchIssue>,
}

#[derive(Deserialize)]
struct SearchIssue {
    key: String,
    #[serde(default)]
    fields: SearchFields,
}

#[derive(Deserialize, Default)]
struct SearchFields {
    #[serde(default)]
    summary: String,
    status: Option<NamedPayload>,
    issuetype: Option<NamedPayload>,
}

#[derive(Deserialize)]
struct NamedPayload {
    name: String,
}

impl From<SearchIssue> for IssueSummary {
    fn from(issue: SearchIssue) -> Self {
        Self {
            key: issue.key,
            summary: issue.fields.summary,
            status: issue.fields.status.map(|s| s.name),
            issue_type: issue.fields.issuetype.map(|t| t.name),
        }
    }
}

#[derive(Deserialize)]
struct IssueTypePayload {
    id: String,
    #[serde(default)]
    name: String,
    description: Option<String>,
    #[serde(default)]
    subtask: bool,
}

impl From<IssueTypePayload> for IssueTypeInfo {
    fn from(payload: IssueTypePayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            description: payload.description.filter(|d| !d.is_empty()),
            subtask: payload.subtask,
        }
    }
}

#[derive(Deserialize)]
struct CreateMetaResponse {
    #[serde(default)]
    projects: Vec<CreateMetaProject>,
}

#[derive(Deserialize)]
struct CreateMetaProject {
    #[serde(default)]
    issuetypes: Vec<IssueTypePayload>,
}

#[derive(Deserialize)]
struct TransitionsResponse {
    #[serde(default)]
    transitions: Vec<TransitionPayload>,
}

#[derive(Deserialize)]
struct TransitionPayload {
    id: String,
    name: String,
}
