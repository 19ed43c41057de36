use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TICKET_ID: Regex = Regex::new(r"[A-Z]+-\d+").unwrap();
    static ref DIRECTIVE: Regex = Regex::new(r"#(\w+)").unwrap();
}

/// Directive words and the workflow transition each one requests.
const TRANSITION_MAPPING: &[(&str, &str)] = &[
    ("inprogress", "In Progress"),
    ("review", "In Review"),
    ("done", "Done"),
    ("resolved", "Done"),
    ("fixed", "Done"),
    ("complete", "Done"),
    ("completed", "Done"),
    ("close", "Done"),
    ("closed", "Done"),
];

pub fn lookup_transition(command: &str) -> Option<&'static str> {
    TRANSITION_MAPPING
        .iter()
        .find(|(word, _)| *word == command)
        .map(|(_, name)| *name)
}

/// Line boundaries, including lone carriage returns and the Unicode separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A ticket id found in a commit message, with the `#directive` from its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReference {
    pub ticket_id: String,
    pub transition_command: Option<String>,
    pub transition_name: Option<String>,
}

/// Extracts every ticket reference from `message`, in order of appearance.
///
/// Repeated ids produce repeated references. The directive for an id comes
/// from the first line containing that id; directives on lines without an id
/// are never looked at.
pub fn extract_references(message: &str) -> Vec<CommitReference> {
    TICKET_ID
        .find_iter(message)
        .map(|found| {
            let ticket_id = found.as_str();
            let line = message
                .split(is_line_break)
                .find(|line| line.contains(ticket_id))
                .unwrap_or_default();

            let transition_command = DIRECTIVE
                .captures(line)
                .map(|captures| captures[1].to_lowercase());
            let transition_name = transition_command
                .as_deref()
                .and_then(lookup_transition)
                .map(str::to_string);

            CommitReference {
                ticket_id: ticket_id.to_string(),
                transition_command,
                transition_name,
            }
        })
        .collect()
}
