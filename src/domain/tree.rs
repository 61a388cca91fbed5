//! The Stern-Brocot tree between two boundary fractions, expanded to a fixed depth.

use tracing::{info, instrument};

use crate::domain::arena::{TreeArena, TreeNode};
use crate::domain::builder::TreeBuilder;
use crate::domain::error::{SbResult, SternBrocotError};
use crate::domain::fraction::Fraction;
use crate::domain::signature::parse_signature;

/// Deepest tree whose node count `2^depth - 1` still fits in a `usize`.
pub const MAX_TREE_DEPTH: i64 = usize::BITS as i64 - 1;

/// A tree expanded once at construction and immutable afterwards.
#[derive(Debug)]
pub struct Tree {
    left: Fraction,
    right: Fraction,
    depth: usize,
    levels: Vec<Vec<Fraction>>,
    arena: TreeArena,
}

impl Tree {
    /// Expands `depth` levels of mediants between `left` and `right`.
    ///
    /// # Errors
    ///
    /// `InvalidDepth` if `depth` is negative or above [`MAX_TREE_DEPTH`].
    #[instrument(level = "debug", skip(left, right), fields(left = %left, right = %right))]
    pub fn new(left: Fraction, right: Fraction, depth: i64) -> SbResult<Self> {
        let depth = usize::try_from(depth)
            .ok()
            .filter(|_| depth <= MAX_TREE_DEPTH)
            .ok_or(SternBrocotError::InvalidDepth(depth))?;
        let expansion = TreeBuilder::new(left.clone(), right.clone()).build(depth);
        info!(depth, nodes = expansion.arena.len(), "tree expanded");
        Ok(Self {
            left,
            right,
            depth,
            levels: expansion.levels,
            arena: expansion.arena,
        })
    }

    /// Tree between the canonical boundaries `0/1` and `1/0`.
    pub fn with_depth(depth: i64) -> SbResult<Self> {
        Self::new(Fraction::zero(), Fraction::infinity(), depth)
    }

    pub fn left(&self) -> &Fraction {
        &self.left
    }

    pub fn right(&self) -> &Fraction {
        &self.right
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// One entry per level; entry `i` holds level `i + 1` from left to right.
    pub fn levels(&self) -> &[Vec<Fraction>] {
        &self.levels
    }

    /// Fractions on level `n` (1-based). Level 0 or past the depth is `None`.
    pub fn level(&self, n: usize) -> Option<&[Fraction]> {
        n.checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .map(Vec::as_slice)
    }

    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }

    /// Number of expanded nodes, `2^depth - 1`.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// The boundaries while nothing is expanded, else the deepest level.
    pub fn leaves(&self) -> Vec<Fraction> {
        match self.levels.last() {
            Some(deepest) => deepest.clone(),
            None => vec![self.left.clone(), self.right.clone()],
        }
    }

    /// Left boundary, every node in ascending order, right boundary.
    pub fn in_order(&self) -> Vec<Fraction> {
        let mut sequence = Vec::with_capacity(self.node_count() + 2);
        sequence.push(self.left.clone());
        sequence.extend(
            self.arena
                .iter_inorder()
                .map(|(_, node)| node.data.fraction.clone()),
        );
        sequence.push(self.right.clone());
        sequence
    }

    /// Node reached by `signature` from the first mediant, if it lies within the depth.
    pub fn find(&self, signature: &str) -> SbResult<Option<&TreeNode>> {
        let steps = parse_signature(signature)?;
        Ok(self.arena.walk(&steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_depth_zero_has_only_boundaries() {
        let tree = Tree::with_depth(0).unwrap();
        assert_eq!(tree.leaves(), vec![Fraction::new(0, 1), Fraction::new(1, 0)]);
        assert_eq!(tree.node_count(), 0);
        assert!(tree.levels().is_empty());
        assert_eq!(tree.in_order().len(), 2);
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    #[case(MAX_TREE_DEPTH + 1)]
    #[case(i64::MAX)]
    fn test_out_of_range_depth_is_rejected(#[case] depth: i64) {
        assert_eq!(
            Tree::with_depth(depth).unwrap_err(),
            SternBrocotError::InvalidDepth(depth)
        );
    }

    #[rstest]
    fn test_level_accessor() {
        let tree = Tree::with_depth(2).unwrap();
        assert!(tree.level(0).is_none());
        assert_eq!(tree.level(1).unwrap(), &[Fraction::new(1, 1)]);
        assert_eq!(tree.level(2).unwrap().len(), 2);
        assert!(tree.level(3).is_none());
    }

    #[rstest]
    fn test_find() {
        let tree = Tree::with_depth(4).unwrap();
        let node = tree.find("LRR").unwrap().unwrap();
        assert_eq!(node.data.fraction, Fraction::new(3, 4));
        assert_eq!(node.data.level, 4);
        assert!(tree.find("LRRL").unwrap().is_none());
        assert!(tree.find("LQ").is_err());
    }
}
