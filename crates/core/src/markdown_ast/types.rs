/// Checkbox mark on a task-list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkbox {
    /// `- [ ] item`
    Unchecked,
    /// `- [x] item`
    Checked,
}

/// Closed set of block and inline kinds the indexer cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Root of a parsed body.
    Document,
    /// ATX or setext heading with its level (1-6).
    Heading { level: u8 },
    /// List item; `checkbox` is `None` for plain (non-task) items.
    ListItem { checkbox: Option<Checkbox> },
    Paragraph,
    /// A literal text span.
    Text(String),
    /// Anything else; traversed for nested content only.
    Other,
}

/// A node of the parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocNode {
    pub block: Block,
    /// 1-based line where the node starts, relative to the parsed text.
    pub line: usize,
    pub children: Vec<DocNode>,
}

impl DocNode {
    pub fn new(block: Block, line: usize) -> Self {
        Self { block, line, children: Vec::new() }
    }

    pub fn with_children(mut self, children: Vec<DocNode>) -> Self {
        self.children = children;
        self
    }

    /// Concatenation of every text span beneath this node, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Block::Text(ref t) = self.block {
            out.push_str(t);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_concatenates_in_document_order() {
        let node = DocNode::new(Block::Paragraph, 1).with_children(vec![
            DocNode::new(Block::Text("Ship ".into()), 1),
            DocNode::new(Block::Other, 1)
                .with_children(vec![DocNode::new(Block::Text("the".into()), 1)]),
            DocNode::new(Block::Text(" build".into()), 1),
        ]);
        assert_eq!(node.text(), "Ship the build");
    }

    #[test]
    fn text_of_leafless_node_is_empty() {
        assert_eq!(DocNode::new(Block::Document, 1).text(), "");
    }
}
