use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::fraction::Fraction;
use crate::domain::signature::Step;

/// Data payload for tree nodes: one mediant of the expansion.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// The mediant, carrying its ancestor matrix and signature
    pub fraction: Fraction,
    /// 1-based level; the first mediant sits on level 1
    pub level: usize,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction)
    }
}

/// Tree node in the arena-based binary structure.
#[derive(Debug)]
pub struct TreeNode {
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Either empty or `[left, right]`
    pub children: Vec<Index>,
}

impl TreeNode {
    pub fn left_child(&self) -> Option<Index> {
        self.children.first().copied()
    }

    pub fn right_child(&self) -> Option<Index> {
        self.children.get(1).copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-based storage for the expanded nodes of a tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
#[derive(Debug)]
pub struct TreeArena {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Children are appended in insertion order, so insert the left child first.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Pre-order, left before right.
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    /// In-order, i.e. ascending value for a Stern-Brocot expansion.
    pub fn iter_inorder(&self) -> InOrderIterator {
        InOrderIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Follows `steps` from the root. Identity steps stay put.
    pub fn walk(&self, steps: &[Step]) -> Option<&TreeNode> {
        let mut node = self.get_node(self.root?)?;
        for step in steps {
            let next = match step {
                Step::Left => node.left_child()?,
                Step::Right => node.right_child()?,
                Step::Identity => continue,
            };
            node = self.get_node(next)?;
        }
        Some(node)
    }
}

pub struct TreeIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}

pub struct InOrderIterator<'a> {
    arena: &'a TreeArena,
    stack: Vec<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(arena: &'a TreeArena) -> Self {
        let mut iter = Self {
            arena,
            stack: Vec::new(),
        };
        iter.push_left_spine(arena.root());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(idx) = current {
            self.stack.push(idx);
            current = self.arena.get_node(idx).and_then(TreeNode::left_child);
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        self.push_left_spine(node.right_child());
        Some((current_idx, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature::parse_signature;
    use rstest::rstest;

    fn node(n: i64, d: i64, level: usize) -> NodeData {
        NodeData {
            fraction: Fraction::new(n, d),
            level,
        }
    }

    //      1/1
    //     /   \
    //   1/2   2/1
    fn small_arena() -> TreeArena {
        let mut arena = TreeArena::new();
        let root = arena.insert_node(node(1, 1, 1), None);
        arena.insert_node(node(1, 2, 2), Some(root));
        arena.insert_node(node(2, 1, 2), Some(root));
        arena
    }

    #[rstest]
    fn test_empty_arena() {
        let arena = TreeArena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.depth(), 0);
        assert_eq!(arena.iter().count(), 0);
        assert_eq!(arena.iter_inorder().count(), 0);
        assert!(arena.walk(&[]).is_none());
    }

    #[rstest]
    fn test_preorder_and_inorder() {
        let arena = small_arena();
        let pre: Vec<String> = arena.iter().map(|(_, n)| n.data.to_string()).collect();
        let ino: Vec<String> = arena
            .iter_inorder()
            .map(|(_, n)| n.data.to_string())
            .collect();
        assert_eq!(pre, vec!["1/1", "1/2", "2/1"]);
        assert_eq!(ino, vec!["1/2", "1/1", "2/1"]);
        assert_eq!(arena.depth(), 2);
        assert_eq!(arena.len(), 3);
    }

    #[rstest]
    #[case("", "1/1")]
    #[case("L", "1/2")]
    #[case("R", "2/1")]
    #[case("1", "2/1")]
    #[case("IRI", "2/1")]
    fn test_walk(#[case] signature: &str, #[case] expected: &str) {
        let arena = small_arena();
        let steps = parse_signature(signature).unwrap();
        let found = arena.walk(&steps).unwrap();
        assert_eq!(found.data.to_string(), expected);
    }

    #[rstest]
    fn test_walk_off_the_tree() {
        assert!(small_arena().walk(&[Step::Left, Step::Left]).is_none());
    }
}
