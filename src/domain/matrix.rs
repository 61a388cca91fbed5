//! 2x2 integer matrices and 2-vectors used to encode Stern-Brocot paths.
//!
//! Vectors are stored in `(denominator, numerator)` order so that the columns
//! of a path matrix read directly as the left and right ancestor fractions.

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Column vector `(denominator, numerator)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vector([BigInt; 2]);

impl Vector {
    pub fn new(denominator: impl Into<BigInt>, numerator: impl Into<BigInt>) -> Self {
        Self([denominator.into(), numerator.into()])
    }

    pub fn denominator(&self) -> &BigInt {
        &self.0[0]
    }

    pub fn numerator(&self) -> &BigInt {
        &self.0[1]
    }

    /// Entries in storage order.
    pub fn entries(&self) -> &[BigInt; 2] {
        &self.0
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector([&self.0[0] + &rhs.0[0], &self.0[1] + &rhs.0[1]])
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

/// Immutable 2x2 integer matrix, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix([[BigInt; 2]; 2]);

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub fn new(rows: [[i64; 2]; 2]) -> Self {
        Self(rows.map(|row| row.map(BigInt::from)))
    }

    /// Builds the matrix whose columns are `left` and `right`.
    pub fn from_columns(left: &Vector, right: &Vector) -> Self {
        let [l0, l1] = left.entries().clone();
        let [r0, r1] = right.entries().clone();
        Self([[l0, r0], [l1, r1]])
    }

    /// `[[1,0],[0,1]]`
    pub fn identity() -> Self {
        Self([
            [BigInt::one(), BigInt::zero()],
            [BigInt::zero(), BigInt::one()],
        ])
    }

    /// `[[1,1],[0,1]]`, one step towards zero.
    pub fn left() -> Self {
        Self([
            [BigInt::one(), BigInt::one()],
            [BigInt::zero(), BigInt::one()],
        ])
    }

    /// `[[1,0],[1,1]]`, one step towards infinity.
    pub fn right() -> Self {
        Self([
            [BigInt::one(), BigInt::zero()],
            [BigInt::one(), BigInt::one()],
        ])
    }

    pub fn get(&self, row: usize, col: usize) -> &BigInt {
        &self.0[row][col]
    }

    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        let a = &self.0;
        let b = &rhs.0;
        Matrix([
            [
                &a[0][0] * &b[0][0] + &a[0][1] * &b[1][0],
                &a[0][0] * &b[0][1] + &a[0][1] * &b[1][1],
            ],
            [
                &a[1][0] * &b[0][0] + &a[1][1] * &b[1][0],
                &a[1][0] * &b[0][1] + &a[1][1] * &b[1][1],
            ],
        ])
    }

    pub fn determinant(&self) -> BigInt {
        &self.0[0][0] * &self.0[1][1] - &self.0[0][1] * &self.0[1][0]
    }

    /// First column.
    pub fn left_ancestor(&self) -> Vector {
        Vector([self.0[0][0].clone(), self.0[1][0].clone()])
    }

    /// Second column.
    pub fn right_ancestor(&self) -> Vector {
        Vector([self.0[0][1].clone(), self.0[1][1].clone()])
    }

    /// Element-wise sum of the two columns, never reduced.
    pub fn mediant(&self) -> Vector {
        &self.left_ancestor() + &self.right_ancestor()
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[[{}, {}], [{}, {}]]",
            self.0[0][0], self.0[0][1], self.0[1][0], self.0[1][1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_is_neutral() {
        let m = Matrix::new([[3, 4], [2, 3]]);
        assert_eq!(&m * &Matrix::identity(), m);
        assert_eq!(&Matrix::identity() * &m, m);
    }

    #[rstest]
    fn test_multiply_is_not_commutative() {
        let lr = &Matrix::left() * &Matrix::right();
        let rl = &Matrix::right() * &Matrix::left();
        assert_eq!(lr, Matrix::new([[2, 1], [1, 1]]));
        assert_eq!(rl, Matrix::new([[1, 1], [1, 2]]));
        assert_ne!(lr, rl);
    }

    #[rstest]
    #[case(Matrix::identity())]
    #[case(Matrix::left())]
    #[case(Matrix::right())]
    fn test_step_matrices_are_unimodular(#[case] m: Matrix) {
        assert_eq!(m.determinant(), BigInt::one());
    }

    #[rstest]
    fn test_columns_and_mediant() {
        let m = Matrix::new([[3, 4], [2, 3]]);
        assert_eq!(m.left_ancestor(), Vector::new(3, 2));
        assert_eq!(m.right_ancestor(), Vector::new(4, 3));
        assert_eq!(m.mediant(), Vector::new(7, 5));
        assert_eq!(m.get(1, 0), &BigInt::from(2));
    }

    #[rstest]
    fn test_from_columns_inverts_ancestors() {
        let m = Matrix::new([[5, 2], [3, 1]]);
        assert_eq!(
            Matrix::from_columns(&m.left_ancestor(), &m.right_ancestor()),
            m
        );
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Matrix::left().to_string(), "[[1, 1], [0, 1]]");
        assert_eq!(Vector::new(7, 5).to_string(), "(7, 5)");
    }
}
