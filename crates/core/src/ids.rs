//! Content-derived identifiers for task nodes.
//!
//! A node id is the hex SHA-256 of its source path, the titles of its
//! ancestry (innermost last) and its source line. Each part is length
//! prefixed before hashing so that no two distinct tuples share an input.

use sha2::{Digest, Sha256};

/// Build a node id from `(path, ancestry, line)`.
///
/// # Examples
/// ```
/// use taskgraph_core::ids::build_node_id;
///
/// let a = build_node_id("notes/alpha.md", &["Alpha", "Build"], 7);
/// let b = build_node_id("notes/alpha.md", &["Alpha", "Build"], 7);
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn build_node_id(path: &str, ancestry: &[&str], line: usize) -> String {
    let mut hasher = Sha256::new();
    update_part(&mut hasher, path);
    for title in ancestry {
        update_part(&mut hasher, title);
    }
    update_part(&mut hasher, &line.to_string());
    hex::encode(hasher.finalize())
}

fn update_part(hasher: &mut Sha256, part: &str) {
    hasher.update((part.len() as u64).to_le_bytes());
    hasher.update(part.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_stable() {
        let id1 = build_node_id("fixtures/a.md", &["Section"], 12);
        let id2 = build_node_id("fixtures/a.md", &["Section"], 12);
        assert_eq!(id1, id2);
    }

    #[test]
    fn id_is_lowercase_hex() {
        let id = build_node_id("a.md", &[], 0);
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn id_depends_on_every_part() {
        let base = build_node_id("a.md", &["A", "B"], 3);
        assert_ne!(base, build_node_id("b.md", &["A", "B"], 3));
        assert_ne!(base, build_node_id("a.md", &["A", "C"], 3));
        assert_ne!(base, build_node_id("a.md", &["A"], 3));
        assert_ne!(base, build_node_id("a.md", &["A", "B"], 4));
    }

    #[test]
    fn id_separates_parts_unambiguously() {
        assert_ne!(build_node_id("a::b", &[], 1), build_node_id("a", &["b"], 1));
        assert_ne!(build_node_id("a.md", &["AB"], 1), build_node_id("a.md", &["A", "B"], 1));
        assert_ne!(build_node_id("a.md", &["x1"], 2), build_node_id("a.md", &["x"], 12));
    }
}
