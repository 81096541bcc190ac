//! Core library for taskgraph.
//!
//! Turns a directory of markdown documents into a flat, hierarchically linked
//! list of task nodes, persists it as JSON, and ranks nodes against free-text
//! queries.

#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod frontmatter;
pub mod ids;
pub mod index;
pub mod markdown_ast;
pub mod vault;
