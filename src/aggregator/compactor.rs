//! Tree compaction.
//!
//! Two passes rewrite the trie for readability:
//! 1. Well-known organizational roots (`com`, `org.apache`, ...) are merged
//!    into the segment below them: `com` + `google` -> `com.google`.
//! 2. Namespaces with no methods of their own are merged into their children
//!    when they have a single child, or when none of their children has
//!    methods either.
//!
//! Both passes use the same rewrite, [`flatten`], with a different predicate.

use super::node::Node;
use crate::utils::config::default_prefixes;
use log::debug;
use std::collections::BTreeSet;

/// Runs both compaction passes with a configurable prefix set
#[derive(Debug, Clone)]
pub struct Compactor {
    common_prefixes: BTreeSet<String>,
}

impl Default for Compactor {
    fn default() -> Self {
        Self::new(default_prefixes())
    }
}

impl Compactor {
    pub fn new(common_prefixes: BTreeSet<String>) -> Self {
        Self { common_prefixes }
    }

    /// Compactor that only runs the low-signal pass in effect
    pub fn without_prefixes() -> Self {
        Self::new(BTreeSet::new())
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.common_prefixes.insert(prefix.into());
        self
    }

    pub fn common_prefixes(&self) -> &BTreeSet<String> {
        &self.common_prefixes
    }

    pub fn is_common_prefix(&self, node: &Node) -> bool {
        self.common_prefixes.contains(&node.name)
    }

    /// Run the prefix pass, then the low-signal pass
    ///
    /// Must run before aggregation; totals are not maintained.
    pub fn compact(&self, root: &mut Node) {
        let before = root.node_count();

        flatten(root, &|node: &Node| self.is_common_prefix(node));
        let after_prefixes = root.node_count();

        flatten(root, &is_low_signal);
        let after_low_signal = root.node_count();

        debug!(
            "Compacted tree: {} -> {} (prefixes) -> {} (low signal) nodes",
            before, after_prefixes, after_low_signal
        );
    }
}

/// No methods here, and either a single child or no child with methods
pub fn is_low_signal(node: &Node) -> bool {
    node.direct_count == 0
        && (node.children.len() == 1
            || node.children.values().all(|child| child.direct_count == 0))
}

/// Rewrite the subtree below `node`, collapsing every descendant that
/// matches `predicate` into its parent.
///
/// A collapsed node's children are renamed `<node>.<child>` and tested
/// again, so chains of matching nodes merge into a single name. A node that
/// does not match is kept and its own children are processed the same way.
/// The root itself is never collapsed.
pub fn flatten<P>(node: &mut Node, predicate: &P)
where
    P: Fn(&Node) -> bool,
{
    let children = std::mem::take(&mut node.children);
    for (_, child) in children {
        lift_into(child, predicate, node);
    }
}

fn lift_into<P>(mut node: Node, predicate: &P, parent: &mut Node)
where
    P: Fn(&Node) -> bool,
{
    if !predicate(&node) {
        flatten(&mut node, predicate);
        parent.adopt(node);
        return;
    }

    let Node {
        name,
        direct_count,
        children,
        ..
    } = node;

    // A matching prefix may still own methods (`com.Foo`); keep them as a leaf.
    if direct_count > 0 {
        parent.adopt(Node::with_count(name.clone(), direct_count));
    }

    for (_, mut child) in children {
        child.name = format!("{}.{}", name, child.name);
        lift_into(child, predicate, parent);
    }
}
