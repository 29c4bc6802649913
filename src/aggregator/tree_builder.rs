//! Build the namespace trie from method references.
//!
//! Example: `a.b.Foo`, `a.b.Bar`, `a.c.Baz` become
//! `a -> { b (2 methods), c (1 method) }`.
//! The simple class name is discarded; only the package segments form the path.

use super::node::Node;
use crate::parser::{package_name_only, MethodRef};
use crate::utils::config::DEFAULT_PACKAGE_NAME;
use log::debug;

/// Build a trie from declaring-class names, one entry per method
///
/// Counts are direct only; `total_count` mirrors `direct_count` until
/// [`aggregate_counts`](super::aggregate_counts) runs.
pub fn build_namespace_tree<'a, I>(class_names: I) -> Node
where
    I: IntoIterator<Item = &'a str>,
{
    let mut root = Node::root();
    let mut methods = 0usize;

    for class_name in class_names {
        insert_class(&mut root, class_name);
        methods += 1;
    }

    debug!(
        "Built namespace tree: {} methods, {} nodes",
        methods,
        root.node_count() - 1
    );

    root
}

/// Build a trie straight from parsed method references
pub fn build_from_refs(refs: &[MethodRef]) -> Node {
    build_namespace_tree(refs.iter().map(|r| r.declaring_class.as_str()))
}

fn insert_class(root: &mut Node, class_name: &str) {
    let package = package_name_only(class_name);

    let node = if package.is_empty() {
        root.child_entry(DEFAULT_PACKAGE_NAME)
    } else {
        package
            .split('.')
            .fold(root, |node, segment| node.child_entry(segment))
    };

    node.add_method();
}
