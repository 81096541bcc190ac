//! Index data types for task nodes.

use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;
use crate::markdown_ast::Checkbox;

/// Separator between breadcrumb segments in [`TaskNode::context`].
pub const CONTEXT_SEPARATOR: &str = " > ";

/// Kind of an indexed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Synthetic root node, one per indexed file.
    File,
    /// A markdown heading.
    Heading,
    /// A checkbox list item.
    Checklist,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Heading => "heading",
            Self::Checklist => "checklist",
        }
    }
}

/// Completion state. Only checklist nodes are ever `Open` or `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Open,
    Closed,
    #[default]
    Unknown,
}

impl TaskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }
}

impl From<Checkbox> for TaskState {
    fn from(checkbox: Checkbox) -> Self {
        match checkbox {
            Checkbox::Checked => Self::Closed,
            Checkbox::Unchecked => Self::Open,
        }
    }
}

/// A node in the task index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskNode {
    /// Content-derived id, see [`crate::ids::build_node_id`].
    pub id: String,
    pub kind: NodeKind,
    /// File title, heading text, or checklist item text.
    pub title: String,
    pub state: TaskState,
    /// Source path relative to the indexed root, `/`-separated.
    pub path: String,
    /// 1-based source line; 0 for the file node.
    pub line: usize,
    /// Innermost enclosing heading, or the file node. `None` only for file nodes.
    pub parent_id: Option<String>,
    /// Breadcrumb: file title, ancestor headings, then the item itself.
    pub context: String,
    /// Ranking input, always `build_search_text(context, frontmatter)`.
    pub search_text: String,
    pub frontmatter: Frontmatter,
}

/// The persisted index document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFile {
    #[serde(default)]
    pub nodes: Vec<TaskNode>,
}

impl IndexFile {
    pub fn new(nodes: Vec<TaskNode>) -> Self {
        Self { nodes }
    }
}

/// Render the `key:value` pairs that front matter contributes to search text.
pub fn frontmatter_search_terms(frontmatter: &Frontmatter) -> String {
    frontmatter
        .iter()
        .map(|(key, value)| format!("{key}:{value}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the search text for a node from its context and front matter.
pub fn build_search_text(context: &str, frontmatter: &Frontmatter) -> String {
    join_search_text(context, &frontmatter_search_terms(frontmatter))
}

/// Join a context with pre-rendered front-matter terms.
pub(crate) fn join_search_text(context: &str, terms: &str) -> String {
    if terms.is_empty() {
        context.trim().to_string()
    } else {
        format!("{context} {terms}").trim().to_string()
    }
}
