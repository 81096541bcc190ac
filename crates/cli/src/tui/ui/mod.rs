//! UI rendering modules.

mod layout;
mod results;
mod status;

pub use layout::draw;
