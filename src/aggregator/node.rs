//! Namespace tree node.
//!
//! Each node exclusively owns its children, keyed by display name, so
//! iteration order is always the sorted order used for output.

use crate::utils::config::ROOT_NAME;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One namespace segment, or a dot-joined run of segments after compaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Display label
    pub name: String,

    /// Methods whose namespace resolves exactly to this node
    #[serde(rename = "direct")]
    pub direct_count: u64,

    /// `direct_count` plus all descendant totals (valid after aggregation)
    #[serde(rename = "total")]
    pub total_count: u64,

    /// Children keyed by name
    #[serde(
        serialize_with = "serialize_children",
        deserialize_with = "deserialize_children"
    )]
    pub children: BTreeMap<String, Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_count(name, 0)
    }

    pub fn with_count(name: impl Into<String>, direct_count: u64) -> Self {
        Self {
            name: name.into(),
            direct_count,
            total_count: direct_count,
            children: BTreeMap::new(),
        }
    }

    /// Sentinel root; never carries methods of its own
    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    /// Child with the given name, created on first access
    pub fn child_entry(&mut self, name: &str) -> &mut Node {
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Children in ascending name order
    pub fn sorted_children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Count one method at this node
    pub fn add_method(&mut self) {
        self.direct_count += 1;
        self.total_count += 1;
    }

    /// Attach `child`, merging into an existing sibling of the same name
    pub fn adopt(&mut self, child: Node) {
        match self.children.get_mut(&child.name) {
            Some(existing) => existing.merge(child),
            None => {
                self.children.insert(child.name.clone(), child);
            }
        }
    }

    fn merge(&mut self, other: Node) {
        self.direct_count += other.direct_count;
        self.total_count += other.total_count;
        for (_, grandchild) in other.children {
            self.adopt(grandchild);
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Node::node_count).sum::<usize>()
    }

    /// Longest path below this node, in edges
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

fn serialize_children<S>(children: &BTreeMap<String, Node>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(children.values())
}

fn deserialize_children<'de, D>(deserializer: D) -> Result<BTreeMap<String, Node>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let list: Vec<Node> = Vec::deserialize(deserializer)?;
    Ok(list
        .into_iter()
        .map(|node| (node.name.clone(), node))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_entry_creates_once() {
        let mut root = Node::root();
        root.child_entry("a").add_method();
        root.child_entry("a").add_method();

        assert_eq!(root.children.len(), 1);
        assert_eq!(root.child("a").unwrap().direct_count, 2);
        assert_eq!(root.direct_count, 0);
    }

    #[test]
    fn test_adopt_merges_same_name() {
        let mut parent = Node::new("p");

        let mut first = Node::with_count("x", 1);
        first.adopt(Node::with_count("y", 2));
        let mut second = Node::with_count("x", 3);
        second.adopt(Node::with_count("y", 4));
        second.adopt(Node::with_count("z", 5));

        parent.adopt(first);
        parent.adopt(second);

        let x = parent.child("x").unwrap();
        assert_eq!(x.direct_count, 4);
        assert_eq!(x.child("y").unwrap().direct_count, 6);
        assert_eq!(x.child("z").unwrap().direct_count, 5);
    }

    #[test]
    fn test_sorted_children_order() {
        let mut root = Node::root();
        for name in ["okio", "android", "kotlin"] {
            root.child_entry(name);
        }
        let names: Vec<&str> = root.sorted_children().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["android", "kotlin", "okio"]);
    }

    #[test]
    fn test_depth_and_node_count() {
        let mut root = Node::root();
        root.child_entry("a").child_entry("b").child_entry("c");
        root.child_entry("d");

        assert_eq!(root.depth(), 3);
        assert_eq!(root.node_count(), 5);
    }
}
