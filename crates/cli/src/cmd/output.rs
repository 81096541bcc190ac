//! Shared output formatting for query commands.

use serde::Serialize;
use taskgraph_core::index::{SearchHit, TaskNode, TaskState};

/// Ranked hit for JSON output: the node's own fields plus its score.
#[derive(Debug, Serialize)]
pub struct HitOutput<'a> {
    pub score: usize,
    #[serde(flatten)]
    pub node: &'a TaskNode,
}

impl<'a> From<&SearchHit<'a>> for HitOutput<'a> {
    fn from(hit: &SearchHit<'a>) -> Self {
        Self { score: hit.score, node: hit.node }
    }
}

/// `[state] context (path:line)`
pub fn format_hit(node: &TaskNode) -> String {
    format!("[{}] {} ({}:{})", node.state.as_str(), node.context, node.path, node.line)
}

/// `- [ ] title (path:line)`, with `[x]` for closed items.
pub fn format_checklist(node: &TaskNode) -> String {
    let mark = if node.state == TaskState::Closed { 'x' } else { ' ' };
    format!("- [{}] {} ({}:{})", mark, node.title, node.path, node.line)
}

pub fn print_hits_json(hits: &[SearchHit<'_>]) -> serde_json::Result<()> {
    let output: Vec<HitOutput<'_>> = hits.iter().map(HitOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
