//! Ranked free-text search over task nodes.
//!
//! Scoring is deliberately coarse: each query token contributes the number of
//! non-overlapping times it occurs in a node's lower-cased search text.

use super::types::{NodeKind, TaskNode, TaskState};

/// Result limit used when none is given.
pub const DEFAULT_LIMIT: usize = 10;

/// Split a query into lower-cased, non-empty whitespace tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Score `text` against `query`.
///
/// # Examples
/// ```
/// use taskgraph_core::index::score_match;
///
/// assert_eq!(score_match("Alpha beta BETA", "beta"), 2);
/// assert_eq!(score_match("alpha", "gamma"), 0);
/// ```
pub fn score_match(text: &str, query: &str) -> usize {
    score_tokens(&text.to_lowercase(), &tokenize(query))
}

fn score_tokens(haystack: &str, tokens: &[String]) -> usize {
    tokens.iter().map(|token| haystack.matches(token.as_str()).count()).sum()
}

/// A node that matched a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub node: &'a TaskNode,
    pub score: usize,
}

/// Search engine over an already-loaded node collection.
///
/// Search texts are lower-cased once on construction so that repeated
/// queries (one per keystroke in interactive mode) only scan.
pub struct SearchEngine<'a> {
    nodes: &'a [TaskNode],
    haystacks: Vec<String>,
}

impl<'a> SearchEngine<'a> {
    /// Create a new search engine.
    pub fn new(nodes: &'a [TaskNode]) -> Self {
        let haystacks = nodes.iter().map(|n| n.search_text.to_lowercase()).collect();
        Self { nodes, haystacks }
    }

    /// Rank nodes against `query`, best first, keeping at most `limit`.
    ///
    /// Only nodes with a positive score are returned. Equal scores keep the
    /// order of the underlying collection.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'a>> = self
            .nodes
            .iter()
            .zip(&self.haystacks)
            .filter_map(|(node, haystack)| {
                let score = score_tokens(haystack, &tokens);
                (score > 0).then_some(SearchHit { node, score })
            })
            .collect();

        // Stable: ties keep collection order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(limit);
        hits
    }
}

/// Checklist nodes in collection order; closed ones only when `include_closed`.
pub fn checklist_items(
    nodes: &[TaskNode],
    include_closed: bool,
) -> impl Iterator<Item = &TaskNode> {
    nodes.iter().filter(move |n| {
        n.kind == NodeKind::Checklist && (include_closed || n.state == TaskState::Open)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::index_markdown;
    use rstest::rstest;

    fn node(search_text: &str) -> TaskNode {
        TaskNode {
            id: search_text.to_string(),
            kind: NodeKind::Checklist,
            title: search_text.to_string(),
            state: TaskState::Open,
            path: "doc.md".to_string(),
            line: 1,
            parent_id: None,
            context: search_text.to_string(),
            search_text: search_text.to_string(),
            frontmatter: Default::default(),
        }
    }

    fn ids<'a>(hits: &[SearchHit<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.node.id.as_str()).collect()
    }

    #[test]
    fn repeated_tokens_score_higher() {
        assert!(score_match("alpha beta beta", "beta") > score_match("alpha beta", "alpha"));
    }

    #[rstest]
    #[case("alpha beta", "alpha", 1)]
    #[case("alpha beta beta", "beta", 2)]
    #[case("Alpha BETA", "alpha beta", 2)]
    #[case("alpha", "ALPHA alpha", 2)]
    #[case("aaaa", "aa", 2)]
    #[case("alpha", "   ", 0)]
    #[case("alpha", "", 0)]
    #[case("alpha", "gamma", 0)]
    fn score_cases(#[case] text: &str, #[case] query: &str, #[case] expected: usize) {
        assert_eq!(score_match(text, query), expected);
    }

    #[test]
    fn tokenize_discards_empty_tokens() {
        assert_eq!(tokenize("  Build\t\nDEPLOY  "), vec!["build", "deploy"]);
        assert!(tokenize(" \t ").is_empty());
    }

    #[test]
    fn non_matching_nodes_are_excluded() {
        let nodes = vec![node("alpha"), node("beta"), node("gamma")];
        let engine = SearchEngine::new(&nodes);
        assert_eq!(ids(&engine.search("beta", DEFAULT_LIMIT)), vec!["beta"]);
        assert!(engine.search("delta", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn results_sorted_by_descending_score() {
        let nodes = vec![node("deploy"), node("deploy deploy deploy"), node("deploy deploy")];
        let engine = SearchEngine::new(&nodes);
        let hits = engine.search("deploy", DEFAULT_LIMIT);
        assert_eq!(
            ids(&hits),
            vec!["deploy deploy deploy", "deploy deploy", "deploy"]
        );
        assert_eq!(hits.iter().map(|h| h.score).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let nodes = vec![node("b ship"), node("a ship"), node("c ship ship"), node("d ship")];
        let engine = SearchEngine::new(&nodes);
        assert_eq!(
            ids(&engine.search("ship", DEFAULT_LIMIT)),
            vec!["c ship ship", "b ship", "a ship", "d ship"]
        );
    }

    #[test]
    fn limit_truncates() {
        let nodes: Vec<_> = (0..20).map(|i| node(&format!("task {i}"))).collect();
        let engine = SearchEngine::new(&nodes);
        assert_eq!(engine.search("task", DEFAULT_LIMIT).len(), 10);
        assert_eq!(engine.search("task", 3).len(), 3);
        assert!(engine.search("task", 0).is_empty());
    }

    #[test]
    fn empty_query_returns_nothing() {
        let nodes = vec![node("alpha")];
        let engine = SearchEngine::new(&nodes);
        assert!(engine.search("", DEFAULT_LIMIT).is_empty());
        assert!(engine.search("   ", DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn frontmatter_values_are_searchable() {
        let nodes = index_markdown("---\nowner: dana\n---\n- [ ] write docs\n", "docs.md");
        let engine = SearchEngine::new(&nodes);
        let hits = engine.search("dana", DEFAULT_LIMIT);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node.kind, NodeKind::File);
    }

    #[test]
    fn checklist_items_filters_closed() {
        let nodes =
            index_markdown("# H\n- [ ] open one\n- [x] done one\n- [ ] open two\n", "d.md");
        let open: Vec<_> = checklist_items(&nodes, false).map(|n| n.title.as_str()).collect();
        assert_eq!(open, vec!["open one", "open two"]);
        assert_eq!(checklist_items(&nodes, true).count(), 3);
    }
}
