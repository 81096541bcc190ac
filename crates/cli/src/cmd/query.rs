//! Query command implementation.

use taskgraph_core::config::ResolvedConfig;
use taskgraph_core::index::SearchEngine;

use super::load_index;
use super::output::{format_hit, print_hits_json};
use crate::tui::{self, Outcome};
use crate::QueryArgs;

pub fn run(rc: &ResolvedConfig, args: QueryArgs) -> i32 {
    let index_path = args.index.unwrap_or_else(|| rc.index_path.clone());
    let limit = args.limit.unwrap_or(rc.query_limit);

    // Loaded once; interactive mode re-ranks against this copy.
    let Some(index) = load_index(&index_path) else {
        return 1;
    };

    let text = match args.text {
        Some(text) if !args.interactive => text,
        seed => {
            return match tui::run(&index.nodes, limit, seed.unwrap_or_default()) {
                Ok(Outcome::Success) => 0,
                Ok(Outcome::Interrupted) => 1,
                Err(e) => {
                    eprintln!("{e:?}");
                    1
                }
            };
        }
    };

    let engine = SearchEngine::new(&index.nodes);
    let hits = engine.search(&text, limit);
    tracing::debug!(query = %text, hits = hits.len(), "query ranked");

    if args.json {
        if let Err(e) = print_hits_json(&hits) {
            eprintln!("Error serializing results: {e}");
            return 1;
        }
    } else {
        for hit in &hits {
            println!("{}", format_hit(hit.node));
        }
    }
    0
}
