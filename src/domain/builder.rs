//! Tree builder: expands the interval between two boundaries into mediant levels.

use std::collections::VecDeque;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::fraction::Fraction;
use crate::domain::matrix::Matrix;
use crate::domain::signature::Step;

/// An open interval awaiting subdivision, with the path that led to it.
#[derive(Debug, Clone)]
pub(crate) struct Interval {
    pub left: Fraction,
    pub right: Fraction,
    pub path: String,
    pub level: usize,
}

impl Interval {
    pub fn root(left: Fraction, right: Fraction) -> Self {
        Self {
            left,
            right,
            path: String::new(),
            level: 1,
        }
    }

    /// The interval's mediant with provenance, followed by the two halves it creates.
    pub fn split(self) -> (Fraction, Interval, Interval) {
        let ancestors = Matrix::from_columns(&self.left.to_vector(), &self.right.to_vector());
        let mediant = self
            .left
            .mediant(&self.right)
            .with_provenance(ancestors, Some(self.path.clone()));

        let lower = Interval {
            left: self.left,
            right: mediant.clone(),
            path: format!("{}{}", self.path, Step::Left),
            level: self.level + 1,
        };
        let upper = Interval {
            left: mediant.clone(),
            right: self.right,
            path: format!("{}{}", self.path, Step::Right),
            level: self.level + 1,
        };
        (mediant, lower, upper)
    }
}

/// Expanded tree structure: the arena plus every level from left to right.
#[derive(Debug, Default)]
pub struct Expansion {
    pub arena: TreeArena,
    pub levels: Vec<Vec<Fraction>>,
}

/// Constructs Stern-Brocot expansions between two boundaries.
pub struct TreeBuilder {
    left: Fraction,
    right: Fraction,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new(Fraction::zero(), Fraction::infinity())
    }
}

impl TreeBuilder {
    pub fn new(left: Fraction, right: Fraction) -> Self {
        Self { left, right }
    }

    /// Breadth-first expansion to `depth` levels.
    ///
    /// Every node with remaining budget gets the mediant of its interval;
    /// `(left, mediant)` and `(mediant, right)` become its children with one
    /// level less. Depth 0 computes nothing.
    #[instrument(level = "debug", skip(self), fields(left = %self.left, right = %self.right))]
    pub fn build(&self, depth: usize) -> Expansion {
        let mut expansion = Expansion {
            arena: TreeArena::new(),
            levels: Vec::new(),
        };
        if depth == 0 {
            debug!("depth 0: boundaries only");
            return expansion;
        }

        let mut queue: VecDeque<(Interval, Option<Index>)> = VecDeque::new();
        queue.push_back((Interval::root(self.left.clone(), self.right.clone()), None));

        while let Some((interval, parent_idx)) = queue.pop_front() {
            let level = interval.level;
            let (mediant, lower, upper) = interval.split();
            trace!(%mediant, level, "expanding");

            if expansion.levels.len() < level {
                expansion.levels.push(Vec::new());
            }
            expansion.levels[level - 1].push(mediant.clone());
            let current_idx = expansion.arena.insert_node(
                NodeData {
                    fraction: mediant,
                    level,
                },
                parent_idx,
            );

            if level < depth {
                queue.push_back((lower, Some(current_idx)));
                queue.push_back((upper, Some(current_idx)));
            }
        }

        debug!(nodes = expansion.arena.len(), "expansion complete");
        expansion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rendered(level: &[Fraction]) -> Vec<String> {
        level.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    fn test_depth_zero_builds_nothing() {
        let expansion = TreeBuilder::default().build(0);
        assert!(expansion.arena.is_empty());
        assert!(expansion.levels.is_empty());
    }

    #[rstest]
    fn test_three_levels() {
        let expansion = TreeBuilder::default().build(3);
        assert_eq!(rendered(&expansion.levels[0]), vec!["1/1"]);
        assert_eq!(rendered(&expansion.levels[1]), vec!["1/2", "2/1"]);
        assert_eq!(
            rendered(&expansion.levels[2]),
            vec!["1/3", "2/3", "3/2", "3/1"]
        );
        assert_eq!(expansion.arena.len(), 7);
        assert_eq!(expansion.arena.depth(), 3);
    }

    #[rstest]
    fn test_split_records_provenance() {
        let (mediant, lower, upper) =
            Interval::root(Fraction::zero(), Fraction::infinity()).split();
        assert_eq!(mediant, Fraction::new(1, 1));
        assert_eq!(mediant.ancestors(), Some(&Matrix::identity()));
        assert_eq!(mediant.signature(), Some(""));
        assert_eq!(lower.path, "L");
        assert_eq!(lower.right, mediant);
        assert_eq!(upper.path, "R");
        assert_eq!(upper.left, mediant);
        assert_eq!(upper.level, 2);
    }

    #[rstest]
    fn test_custom_boundaries() {
        let expansion = TreeBuilder::new(Fraction::new(1, 2), Fraction::new(1, 1)).build(2);
        assert_eq!(rendered(&expansion.levels[0]), vec!["2/3"]);
        assert_eq!(rendered(&expansion.levels[1]), vec!["3/5", "3/4"]);
    }
}
