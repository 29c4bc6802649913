//! Bottom-up count aggregation and tree statistics.

use super::node::Node;

/// Set every `total_count` to its own direct count plus all children's totals
///
/// Post-order: children are finished before their parent. Returns the
/// total of `node`.
pub fn aggregate_counts(node: &mut Node) -> u64 {
    let children_total: u64 = node.children.values_mut().map(aggregate_counts).sum();
    node.total_count = node.direct_count + children_total;
    node.total_count
}

/// Check `total == direct + Σ child totals` for the whole subtree
pub fn counts_consistent(node: &Node) -> bool {
    let children_total: u64 = node.children.values().map(|c| c.total_count).sum();
    node.total_count == node.direct_count + children_total
        && node.children.values().all(counts_consistent)
}

/// Shape statistics of an aggregated tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Method references counted
    pub total_methods: u64,

    /// Number of top-level namespaces
    pub top_level_packages: usize,

    /// Nodes below the root
    pub namespace_count: usize,

    /// Deepest indentation level in the rendered tree
    pub max_depth: usize,
}

impl TreeStats {
    pub fn from_root(root: &Node) -> Self {
        Self {
            total_methods: root.total_count,
            top_level_packages: root.children.len(),
            namespace_count: root.node_count() - 1,
            max_depth: root.depth().saturating_sub(1),
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Methods: {} | Top level: {} | Namespaces: {} | Max depth: {}",
            self.total_methods, self.top_level_packages, self.namespace_count, self.max_depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tree_builder::build_namespace_tree;

    #[test]
    fn test_aggregate_counts() {
        let mut root = build_namespace_tree(["a.b.Foo", "a.b.Bar", "a.c.Baz", "a.Qux"]);
        let total = aggregate_counts(&mut root);

        assert_eq!(total, 4);
        let a = root.child("a").unwrap();
        assert_eq!(a.direct_count, 1);
        assert_eq!(a.total_count, 4);
        assert_eq!(a.child("b").unwrap().total_count, 2);
        assert!(counts_consistent(&root));
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let mut root = build_namespace_tree(["a.b.Foo", "x.Y"]);
        aggregate_counts(&mut root);
        let first = root.clone();
        aggregate_counts(&mut root);
        assert_eq!(root, first);
    }

    #[test]
    fn test_inconsistent_detected() {
        let mut root = build_namespace_tree(["a.b.Foo"]);
        assert!(!counts_consistent(&root));
        aggregate_counts(&mut root);
        assert!(counts_consistent(&root));
    }

    #[test]
    fn test_tree_stats() {
        let mut root = build_namespace_tree(["a.b.Foo", "a.b.Bar", "c.Baz"]);
        aggregate_counts(&mut root);
        let stats = TreeStats::from_root(&root);

        assert_eq!(stats.total_methods, 3);
        assert_eq!(stats.top_level_packages, 2);
        assert_eq!(stats.namespace_count, 3);
        assert_eq!(stats.max_depth, 1);
        assert!(stats.summary().contains("Methods: 3"));
    }

    #[test]
    fn test_tree_stats_empty() {
        let root = Node::root();
        assert_eq!(TreeStats::from_root(&root), TreeStats::default());
    }
}
