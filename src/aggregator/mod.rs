//! Aggregation of method references into a namespace tree.
//!
//! This module transforms parsed method references into:
//! - A trie of namespace segments with per-namespace method counts
//! - A compacted tree with boilerplate namespace levels merged away
//! - Aggregated totals per namespace

pub mod compactor;
pub mod counts;
pub mod node;
pub mod tree_builder;

// Re-export main types and functions
pub use compactor::{flatten, is_low_signal, Compactor};
pub use counts::{aggregate_counts, counts_consistent, TreeStats};
pub use node::Node;
pub use tree_builder::{build_from_refs, build_namespace_tree};

use crate::parser::MethodRef;
use log::debug;

/// Build, compact and aggregate in one go
///
/// **Public** - main entry point for tree building
///
/// The returned root's `total_count` equals `refs.len()`.
pub fn build_methods_tree(refs: &[MethodRef], compactor: &Compactor) -> Node {
    let mut root = build_from_refs(refs);
    compactor.compact(&mut root);
    aggregate_counts(&mut root);

    debug!("Aggregated tree: {}", TreeStats::from_root(&root).summary());

    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_methods_tree_total() {
        let refs: Vec<MethodRef> = ["com.example.Foo", "com.example.Bar", "android.app.Activity"]
            .into_iter()
            .map(|c| MethodRef::new(c, "m"))
            .collect();

        let root = build_methods_tree(&refs, &Compactor::default());

        assert_eq!(root.total_count, 3);
        assert_eq!(root.child("com.example").unwrap().total_count, 2);
        assert_eq!(root.child("android.app").unwrap().total_count, 1);
        assert!(counts_consistent(&root));
    }
}
