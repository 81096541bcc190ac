use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, Options, parse_document};

use crate::markdown_ast::types::{Block, Checkbox, DocNode};

/// Parse a markdown body into the closed [`DocNode`] tree.
///
/// Line numbers are relative to `input`.
pub fn parse_body(input: &str) -> DocNode {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, input, &options);
    convert(root)
}

fn convert<'a>(node: &'a AstNode<'a>) -> DocNode {
    let (block, line) = {
        let data = node.data.borrow();
        (classify(&data.value), data.sourcepos.start.line)
    };
    let children = node.children().map(convert).collect();
    DocNode { block, line, children }
}

fn classify(value: &NodeValue) -> Block {
    match value {
        NodeValue::Document => Block::Document,
        NodeValue::Heading(heading) => Block::Heading { level: heading.level },
        NodeValue::Item(_) => Block::ListItem { checkbox: None },
        NodeValue::TaskItem(symbol) => {
            let checkbox =
                if symbol.is_some() { Checkbox::Checked } else { Checkbox::Unchecked };
            Block::ListItem { checkbox: Some(checkbox) }
        }
        NodeValue::Paragraph => Block::Paragraph,
        NodeValue::Text(t) => Block::Text(t.to_string()),
        NodeValue::Code(code) => Block::Text(code.literal.clone()),
        NodeValue::SoftBreak | NodeValue::LineBreak => Block::Text(" ".to_string()),
        _ => Block::Other,
    }
}

// --- Internal helpers ---

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // Enable GFM extensions for compatibility
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;

    // Parse options
    options.parse.smart = false; // Don't convert quotes/dashes

    options
}
