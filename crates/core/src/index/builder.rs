//! Index building: turning markdown documents into task nodes.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{
    CONTEXT_SEPARATOR, NodeKind, TaskNode, TaskState, frontmatter_search_terms,
    join_search_text,
};
use crate::frontmatter::{self, Frontmatter};
use crate::ids::build_node_id;
use crate::markdown_ast::{Block, Checkbox, DocNode, parse_body};
use crate::vault::{VaultWalker, VaultWalkerError, WalkedFile};

#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Vault walker error: {0}")]
    Walker(#[from] VaultWalkerError),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Statistics from an indexing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of files discovered.
    pub files_found: usize,
    /// Number of files turned into nodes.
    pub files_indexed: usize,
    /// Number of files skipped because they could not be read.
    pub files_skipped: usize,
    /// Number of heading nodes emitted.
    pub headings: usize,
    /// Number of checklist nodes emitted.
    pub checklist_items: usize,
    /// Indexing duration in milliseconds.
    pub duration_ms: u64,
}

/// Options controlling an indexing run.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Skip files that cannot be read instead of aborting the run.
    pub skip_unreadable: bool,
    /// Folders (relative to the root) to leave out.
    pub excluded_folders: Vec<PathBuf>,
}

/// Outcome of a full indexing run.
#[derive(Debug, Clone)]
pub struct IndexRun {
    pub nodes: Vec<TaskNode>,
    pub stats: IndexStats,
}

/// Progress callback for indexing operations.
/// Parameters: (current, total, current_path)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str)>;

/// Builder for producing the node collection of a directory.
pub struct IndexBuilder<'a> {
    root: &'a Path,
    options: IndexOptions,
}

impl<'a> IndexBuilder<'a> {
    /// Create a new index builder with default options.
    pub fn new(root: &'a Path) -> Self {
        Self::with_options(root, IndexOptions::default())
    }

    pub fn with_options(root: &'a Path, options: IndexOptions) -> Self {
        Self { root, options }
    }

    /// Index every markdown file under the root from scratch.
    ///
    /// Files are processed in sorted path order, so identical trees always
    /// yield identical node sequences.
    pub fn full_reindex(
        &self,
        progress: Option<ProgressCallback>,
    ) -> Result<IndexRun, BuilderError> {
        let start = std::time::Instant::now();
        let mut stats = IndexStats::default();

        let walker =
            VaultWalker::with_exclusions(self.root, self.options.excluded_folders.clone())?;
        let files = walker.walk()?;
        stats.files_found = files.len();

        let mut nodes = Vec::new();
        for (i, file) in files.iter().enumerate() {
            let rel = relative_key(&file.relative_path);
            if let Some(ref cb) = progress {
                cb(i + 1, files.len(), &rel);
            }

            let content = match read_file(file) {
                Ok(content) => content,
                Err(e) if self.options.skip_unreadable => {
                    tracing::warn!("Skipping {}: {}", rel, e);
                    stats.files_skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };

            let file_nodes = index_markdown(&content, &rel);
            tracing::debug!(path = %rel, nodes = file_nodes.len(), "indexed file");
            stats.files_indexed += 1;
            nodes.extend(file_nodes);
        }

        for node in &nodes {
            match node.kind {
                NodeKind::Heading => stats.headings += 1,
                NodeKind::Checklist => stats.checklist_items += 1,
                NodeKind::File => {}
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            files = stats.files_indexed,
            skipped = stats.files_skipped,
            nodes = nodes.len(),
            duration_ms = stats.duration_ms,
            "index run complete"
        );
        Ok(IndexRun { nodes, stats })
    }
}

fn read_file(file: &WalkedFile) -> Result<String, BuilderError> {
    std::fs::read_to_string(&file.absolute_path).map_err(|e| BuilderError::FileRead {
        path: file.absolute_path.display().to_string(),
        source: e,
    })
}

/// `/`-separated form of a relative path, independent of the host platform.
fn relative_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Display title for a file: its stem with dashes turned into spaces.
pub fn file_title(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stem = match name.len().checked_sub(3) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".md") => {
            &name[..cut]
        }
        _ => name,
    };
    stem.replace('-', " ")
}

/// Heading ancestry live at the current point of the traversal.
///
/// `heading_titles[i]` and `heading_ids[i]` always describe the same heading.
#[derive(Debug, Default)]
struct TraversalContext {
    heading_titles: Vec<String>,
    heading_ids: Vec<String>,
}

impl TraversalContext {
    fn new() -> Self {
        Self::default()
    }

    /// Close every open heading at `level` or deeper.
    fn close_to(&mut self, level: usize) {
        while self.heading_titles.len() >= level {
            self.heading_titles.pop();
            self.heading_ids.pop();
        }
    }

    fn open(&mut self, title: String, id: String) {
        self.heading_titles.push(title);
        self.heading_ids.push(id);
    }

    fn parent_id<'s>(&'s self, file_id: &'s str) -> &'s str {
        self.heading_ids.last().map_or(file_id, String::as_str)
    }

    fn ancestry_with<'s>(&'s self, title: &'s str) -> Vec<&'s str> {
        self.heading_titles.iter().map(String::as_str).chain(std::iter::once(title)).collect()
    }
}

/// Per-file values shared by every node emitted for that file.
struct FileScope<'a> {
    path: &'a str,
    title: String,
    id: String,
    frontmatter: &'a Frontmatter,
    search_terms: String,
    line_offset: usize,
}

impl FileScope<'_> {
    /// Build a node whose ancestry (innermost last) is `ancestry`.
    fn node(
        &self,
        kind: NodeKind,
        title: String,
        state: TaskState,
        line: usize,
        parent_id: Option<String>,
        ancestry: &[&str],
    ) -> TaskNode {
        let context = std::iter::once(self.title.as_str())
            .chain(ancestry.iter().copied())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);
        let search_text = join_search_text(&context, &self.search_terms);
        TaskNode {
            id: build_node_id(self.path, ancestry, line),
            kind,
            title,
            state,
            path: self.path.to_string(),
            line,
            parent_id,
            context,
            search_text,
            frontmatter: self.frontmatter.clone(),
        }
    }
}

/// Index a single markdown document located at `path` (relative to the root).
///
/// The first node is always the file node; headings and checkbox items
/// follow in document order.
pub fn index_markdown(content: &str, path: &str) -> Vec<TaskNode> {
    let parsed = frontmatter::parse(content);
    let scope = FileScope {
        path,
        title: file_title(path),
        // Same tuple the file node itself is hashed from.
        id: build_node_id(path, &[], 0),
        frontmatter: &parsed.frontmatter,
        search_terms: frontmatter_search_terms(&parsed.frontmatter),
        line_offset: parsed.body_line_offset,
    };

    let mut nodes =
        vec![scope.node(NodeKind::File, scope.title.clone(), TaskState::Unknown, 0, None, &[])];

    let tree = parse_body(&parsed.body);
    let mut ctx = TraversalContext::new();
    visit(&tree, &scope, &mut ctx, &mut nodes);
    nodes
}

fn visit(
    node: &DocNode,
    scope: &FileScope<'_>,
    ctx: &mut TraversalContext,
    out: &mut Vec<TaskNode>,
) {
    match node.block {
        Block::Heading { level } => {
            emit_heading(node, usize::from(level), scope, ctx, out);
            // Headings hold inline content only.
            return;
        }
        Block::ListItem { checkbox: Some(checkbox) } => {
            emit_checklist(node, checkbox, scope, ctx, out);
        }
        _ => {}
    }

    for child in &node.children {
        visit(child, scope, ctx, out);
    }
}

fn emit_heading(
    node: &DocNode,
    level: usize,
    scope: &FileScope<'_>,
    ctx: &mut TraversalContext,
    out: &mut Vec<TaskNode>,
) {
    let title = node.text().trim().to_string();
    let line = node.line + scope.line_offset;

    ctx.close_to(level);
    let parent_id = ctx.parent_id(&scope.id).to_string();
    let ancestry = ctx.ancestry_with(&title);
    let heading = scope.node(
        NodeKind::Heading,
        title.clone(),
        TaskState::Unknown,
        line,
        Some(parent_id),
        &ancestry,
    );

    let id = heading.id.clone();
    out.push(heading);
    ctx.open(title, id);
}

fn emit_checklist(
    node: &DocNode,
    checkbox: Checkbox,
    scope: &FileScope<'_>,
    ctx: &TraversalContext,
    out: &mut Vec<TaskNode>,
) {
    let title = node.text().trim().to_string();
    let line = node.line + scope.line_offset;
    let ancestry = ctx.ancestry_with(&title);
    let parent_id = ctx.parent_id(&scope.id).to_string();

    out.push(scope.node(
        NodeKind::Checklist,
        title.clone(),
        TaskState::from(checkbox),
        line,
        Some(parent_id),
        &ancestry,
    ));
}
