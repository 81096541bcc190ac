//! Index command implementation.

use taskgraph_core::config::ResolvedConfig;
use taskgraph_core::index::{IndexBuilder, IndexFile, IndexOptions, IndexStore};

use crate::IndexArgs;

pub fn run(rc: &ResolvedConfig, args: IndexArgs) -> i32 {
    let out = args.out.unwrap_or_else(|| rc.index_path.clone());
    let options = IndexOptions {
        skip_unreadable: rc.skip_unreadable,
        excluded_folders: rc.excluded_folders.clone(),
    };

    let progress: taskgraph_core::index::ProgressCallback =
        Box::new(|current, total, path| {
            tracing::debug!("[{}/{}] {}", current, total, path);
        });

    let run = match IndexBuilder::with_options(&args.dir, options).full_reindex(Some(progress)) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Error during indexing: {e}");
            return 1;
        }
    };

    if run.stats.files_skipped > 0 {
        eprintln!("Skipped {} unreadable file(s)", run.stats.files_skipped);
    }

    let count = run.nodes.len();
    if let Err(e) = IndexStore::save(&out, &IndexFile::new(run.nodes)) {
        eprintln!("Error writing index: {e}");
        return 1;
    }

    tracing::info!(
        files = run.stats.files_indexed,
        headings = run.stats.headings,
        checklist_items = run.stats.checklist_items,
        duration_ms = run.stats.duration_ms,
        "index written to {}",
        out.display()
    );
    println!("Indexed {} nodes to {}", count, out.display());
    0
}
