//! List command implementation.

use taskgraph_core::config::ResolvedConfig;
use taskgraph_core::index::checklist_items;

use super::load_index;
use super::output::format_checklist;
use crate::ListArgs;

pub fn run(rc: &ResolvedConfig, args: ListArgs) -> i32 {
    let index_path = args.index.unwrap_or_else(|| rc.index_path.clone());
    let Some(index) = load_index(&index_path) else {
        return 1;
    };

    for node in checklist_items(&index.nodes, args.all) {
        println!("{}", format_checklist(node));
    }
    0
}
