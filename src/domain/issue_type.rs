use std::fmt;

/// How an issue type is named in a create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueTypeRef {
    ById(String),
    ByName(String),
    Resolved {
        id: String,
        name: String,
        subtask: bool,
    },
}

impl IssueTypeRef {
    /// Classifies user input: all digits is an id, anything else a name.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            IssueTypeRef::ById(value.to_string())
        } else {
            IssueTypeRef::ByName(value.to_string())
        }
    }

    pub fn is_subtask(&self) -> bool {
        matches!(self, IssueTypeRef::Resolved { subtask: true, .. })
    }
}

impl fmt::Display for IssueTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueTypeRef::ById(id) => write!(f, "ID {id}"),
            IssueTypeRef::ByName(name) => write!(f, "{name}"),
            IssueTypeRef::Resolved { id, name, subtask } => {
                let kind = if *subtask { "Sub-task" } else { "Standard task" };
                write!(f, "{name} (ID: {id}, {kind})")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueTypeInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub subtask: bool,
}

impl IssueTypeInfo {
    fn resolved(&self) -> IssueTypeRef {
        IssueTypeRef::Resolved {
            id: self.id.clone(),
            name: self.name.clone(),
            subtask: self.subtask,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Epic,
    Story,
    Task,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Epic => "Epic",
            Role::Story => "Story",
            Role::Task => "Task",
        }
    }
}

/// A role that had no matching type name and was filled by a stand-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleFallback {
    pub role: Role,
    pub used: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueTypeRoles {
    pub epic: Option<IssueTypeRef>,
    pub story: Option<IssueTypeRef>,
    pub task: Option<IssueTypeRef>,
    pub fallbacks: Vec<RoleFallback>,
}

impl IssueTypeRoles {
    pub fn get(&self, role: Role) -> Option<&IssueTypeRef> {
        match role {
            Role::Epic => self.epic.as_ref(),
            Role::Story => self.story.as_ref(),
            Role::Task => self.task.as_ref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.epic.is_some() && self.story.is_some() && self.task.is_some()
    }
}

/// Assigns epic/story/task roles by case-insensitive substring match on the
/// type names, falling back to whatever standard (or, for tasks, sub-task)
/// type is available first. Fallbacks are recorded on the result.
pub fn resolve_roles(types: &[IssueTypeInfo]) -> IssueTypeRoles {
    let (subtasks, standard): (Vec<&IssueTypeInfo>, Vec<&IssueTypeInfo>) =
        types.iter().partition(|t| t.subtask);

    let mut roles = IssueTypeRoles::default();

    for issue_type in &standard {
        let name = issue_type.name.to_lowercase();
        if name.contains("epic") {
            roles.epic = Some(issue_type.resolved());
        } else if name.contains("story") {
            roles.story = Some(issue_type.resolved());
        } else if name.contains("task") && !name.contains("sub") {
            roles.task = Some(issue_type.resolved());
        }
    }

    if roles.task.is_none() {
        roles.task = subtasks
            .iter()
            .find(|t| {
                let name = t.name.to_lowercase();
                name.contains("task") || name.contains("sub")
            })
            .map(|t| t.resolved());
    }

    let first_standard = standard.first();

    if roles.epic.is_none() {
        if let Some(fallback) = first_standard {
            roles.epic = Some(fallback.resolved());
            roles.fallbacks.push(RoleFallback {
                role: Role::Epic,
                used: fallback.name.clone(),
            });
        }
    }

    if roles.story.is_none() {
        let standard_task = roles.task.clone().filter(|task| !task.is_subtask());
        let fallback = standard_task.or_else(|| first_standard.map(|t| t.resolved()));
        if let Some(fallback) = fallback {
            roles.fallbacks.push(RoleFallback {
                role: Role::Story,
                used: type_name(&fallback).to_string(),
            });
            roles.story = Some(fallback);
        }
    }

    if roles.task.is_none() {
        if let Some(fallback) = first_standard.or(subtasks.first()) {
            roles.task = Some(fallback.resolved());
            roles.fallbacks.push(RoleFallback {
                role: Role::Task,
                used: fallback.name.clone(),
            });
        }
    }

    roles
}

fn type_name(issue_type: &IssueTypeRef) -> &str {
    match issue_type {
        IssueTypeRef::ById(id) => id,
        IssueTypeRef::ByName(name) | IssueTypeRef::Resolved { name, .. } => name,
    }
}

/// Exact (case-insensitive) name match, used for the recommended ids printed
/// by the project metadata diagnostic.
pub fn find_exact<'a>(types: &'a [IssueTypeInfo], name: &str) -> Option<&'a IssueTypeInfo> {
    types.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn issue_type(id: &str, name: &str, subtask: bool) -> IssueTypeInfo {
        IssueTypeInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            subtask,
        }
    }

    fn resolved(id: &str, name: &str, subtask: bool) -> Option<IssueTypeRef> {
        Some(IssueTypeRef::Resolved {
            id: id.to_string(),
            name: name.to_string(),
            subtask,
        })
    }

    #[test]
    fn maps_standard_scrum_types() {
        let types = vec![
            issue_type("1", "Epic", false),
            issue_type("2", "Story", false),
            issue_type("3", "Task", false),
            issue_type("4", "Subtask", true),
        ];
        let roles = resolve_roles(&types);

        assert_eq!(roles.epic, resolved("1", "Epic", false));
        assert_eq!(roles.story, resolved("2", "Story", false));
        assert_eq!(roles.task, resolved("3", "Task", false));
        assert!(roles.fallbacks.is_empty());
        assert!(roles.is_complete());
    }

    #[test]
    fn uses_subtask_type_when_no_standard_task() {
        let types = vec![
            issue_type("1", "Epic", false),
            issue_type("2", "Story", false),
            issue_type("5", "Sub-task", true),
        ];
        let roles = resolve_roles(&types);

        assert_eq!(roles.task, resolved("5", "Sub-task", true));
        assert!(roles.task.as_ref().unwrap().is_subtask());
        assert!(roles.fallbacks.is_empty());
    }

    #[test]
    fn falls_back_to_first_standard_type() {
        let types = vec![issue_type("10", "Bug", false), issue_type("11", "Improvement", false)];
        let roles = resolve_roles(&types);

        assert_eq!(roles.epic, resolved("10", "Bug", false));
        assert_eq!(roles.story, resolved("10", "Bug", false));
        assert_eq!(roles.task, resolved("10", "Bug", false));
        let fallback_roles: Vec<_> = roles.fallbacks.iter().map(|f| f.role).collect();
        assert_eq!(fallback_roles, vec![Role::Epic, Role::Story, Role::Task]);
    }

    #[test]
    fn story_falls_back_to_standard_task() {
        let types = vec![issue_type("1", "Epic", false), issue_type("3", "Task", false)];
        let roles = resolve_roles(&types);

        assert_eq!(roles.story, resolved("3", "Task", false));
        assert_eq!(
            roles.fallbacks,
            vec![RoleFallback {
                role: Role::Story,
                used: "Task".to_string()
            }]
        );
    }

    #[test]
    fn only_subtasks_leaves_epic_and_story_empty() {
        let types = vec![issue_type("7", "Checklist item", true)];
        let roles = resolve_roles(&types);

        assert_eq!(roles.epic, None);
        assert_eq!(roles.story, None);
        assert_eq!(roles.task, resolved("7", "Checklist item", true));
        assert!(!roles.is_complete());
    }

    #[test]
    fn empty_type_list_resolves_nothing() {
        assert_eq!(resolve_roles(&[]), IssueTypeRoles::default());
    }

    #[rstest]
    #[case("10001", IssueTypeRef::ById("10001".to_string()))]
    #[case("Task", IssueTypeRef::ByName("Task".to_string()))]
    #[case(" 42 ", IssueTypeRef::ById("42".to_string()))]
    #[case("v2", IssueTypeRef::ByName("v2".to_string()))]
    fn parses_user_issue_type(#[case] input: &str, #[case] expected: IssueTypeRef) {
        assert_eq!(IssueTypeRef::parse(input), expected);
    }

    #[test]
    fn finds_exact_names_ignoring_case() {
        let types = vec![issue_type("1", "Epic", false), issue_type("3", "Tasks", false)];
        assert_eq!(find_exact(&types, "epic").map(|t| t.id.as_str()), Some("1"));
        assert!(find_exact(&types, "task").is_none());
    }
}
