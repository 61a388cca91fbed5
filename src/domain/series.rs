//! Lazy, restartable sequences of Stern-Brocot fractions in level order.

use std::collections::VecDeque;

use crate::domain::builder::Interval;
use crate::domain::fraction::Fraction;

/// The infinite level-order enumeration between two boundaries.
///
/// Holds only the boundaries; every call to [`Series::iter`] starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    left: Fraction,
    right: Fraction,
}

impl Default for Series {
    fn default() -> Self {
        Self::new(Fraction::zero(), Fraction::infinity())
    }
}

impl Series {
    pub fn new(left: Fraction, right: Fraction) -> Self {
        Self { left, right }
    }

    pub fn iter(&self) -> SeriesIter {
        let mut pending = VecDeque::new();
        pending.push_back(Interval::root(self.left.clone(), self.right.clone()));
        SeriesIter { pending }
    }

    /// Fractions of level `n` (1-based), left to right. Level 0 is empty.
    ///
    /// `None` when the level holds more fractions than `usize` can count.
    pub fn level(&self, n: usize) -> Option<Vec<Fraction>> {
        if n == 0 {
            return Some(Vec::new());
        }
        let width = u32::try_from(n - 1)
            .ok()
            .and_then(|shift| 1usize.checked_shl(shift))?;
        Some(self.iter().skip(width - 1).take(width).collect())
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = Fraction;
    type IntoIter = SeriesIter;

    fn into_iter(self) -> SeriesIter {
        self.iter()
    }
}

/// Breadth-first walk over the intervals still to be split.
#[derive(Debug, Clone)]
pub struct SeriesIter {
    pending: VecDeque<Interval>,
}

impl Iterator for SeriesIter {
    type Item = Fraction;

    fn next(&mut self) -> Option<Fraction> {
        let (mediant, lower, upper) = self.pending.pop_front()?.split();
        self.pending.push_back(lower);
        self.pending.push_back(upper);
        Some(mediant)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
