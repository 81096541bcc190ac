pub mod comrak;
pub mod types;

// Re-export primary API
pub use self::comrak::parse_body;
pub use types::{Block, Checkbox, DocNode};
