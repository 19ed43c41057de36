use crate::domain::issue_type::IssueTypeRef;

#[derive(Debug, Clone, Default)]
pub struct IssueDraft {
    pub summary: String,
    pub description: String,
    pub issue_type: Option<IssueTypeRef>,
    pub parent_key: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
}

impl IssueDraft {
    pub fn new(summary: &str, description: &str, issue_type: Option<IssueTypeRef>) -> Self {
        Self {
            summary: summary.to_string(),
            description: description.to_string(),
            issue_type,
            ..Self::default()
        }
    }

    pub fn with_parent(mut self, parent_key: Option<String>) -> Self {
        self.parent_key = parent_key;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub key: String,
    pub url: Option<String>,
}

/// One row of a project search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub key: String,
    pub summary: String,
    pub status: Option<String>,
    pub issue_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub id: String,
    pub name: String,
}

/// Finds the transition whose name equals `name`, ignoring case.
pub fn find_transition<'a>(transitions: &'a [Transition], name: &str) -> Option<&'a Transition> {
    let wanted = name.to_lowercase();
    transitions.iter().find(|t| t.name.to_lowercase() == wanted)
}

/// Fields that `issue update` may change.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub summary: Option<String>,
    pub description: Option<String>,
}

impl IssueUpdate {
    pub fn is_empty(&self) -> bool {
        self.summary.is_none() && self.description.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_transition_names_case_insensitively() {
        let transitions = vec![
            Transition {
                id: "11".to_string(),
                name: "In Progress".to_string(),
            },
            Transition {
                id: "31".to_string(),
                name: "DONE".to_string(),
            },
        ];
        assert_eq!(find_transition(&transitions, "Done").map(|t| t.id.as_str()), Some("31"));
        assert!(find_transition(&transitions, "In Review").is_none());
    }
}
