//! Stern-Brocot fractions.
//!
//! A Stern-Brocot fraction is an ordered pair rather than a rational number:
//! 1. The divisor `/` is a symbol, not an operator.
//! 2. `1/0` is not exceptional.
//! 3. Summation is the mediant, so `0/1 + 1/0 == 1/1`. Fractions add like
//!    1x2 matrices.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::instrument;

use crate::domain::error::{SbResult, SternBrocotError};
use crate::domain::matrix::{Matrix, Vector};
use crate::domain::signature::map_signature;

/// A fraction with optional provenance.
///
/// Equality and hashing look only at the `(numerator, denominator)` pair; the
/// ancestor matrix and signature describe where a value came from, not what it is.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
    ancestors: Option<Matrix>,
    signature: Option<String>,
}

impl Default for Fraction {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl Fraction {
    /// Stores the pair verbatim, no reduction.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
            ancestors: None,
            signature: None,
        }
    }

    /// Canonical left boundary `0/1`.
    pub fn zero() -> Self {
        Self::new(0, 1)
    }

    /// Canonical right boundary `1/0`.
    pub fn infinity() -> Self {
        Self::new(1, 0)
    }

    /// Fraction at the mediant of `ancestors`, remembering the matrix and the
    /// signature that produced it.
    pub fn from_matrix(ancestors: Matrix, signature: Option<String>) -> Self {
        let mediant = ancestors.mediant();
        Self {
            numerator: mediant.numerator().clone(),
            denominator: mediant.denominator().clone(),
            ancestors: Some(ancestors),
            signature,
        }
    }

    #[instrument(level = "trace")]
    pub fn from_signature(signature: &str) -> SbResult<Self> {
        let ancestors = map_signature(signature)?;
        Ok(Self::from_matrix(ancestors, Some(signature.to_string())))
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn ancestors(&self) -> Option<&Matrix> {
        self.ancestors.as_ref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Component-wise sum: `(n1 + n2) / (d1 + d2)`. The result carries no provenance.
    pub fn mediant(&self, other: &Fraction) -> Fraction {
        Fraction::new(
            &self.numerator + &other.numerator,
            &self.denominator + &other.denominator,
        )
    }

    pub fn left_ancestor(&self) -> SbResult<Vector> {
        self.ancestors
            .as_ref()
            .map(Matrix::left_ancestor)
            .ok_or_else(|| SternBrocotError::MissingProvenance(self.to_string()))
    }

    pub fn right_ancestor(&self) -> SbResult<Vector> {
        self.ancestors
            .as_ref()
            .map(Matrix::right_ancestor)
            .ok_or_else(|| SternBrocotError::MissingProvenance(self.to_string()))
    }

    /// The pair as a `(denominator, numerator)` column vector.
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn to_pair(&self) -> (BigInt, BigInt) {
        (self.numerator.clone(), self.denominator.clone())
    }

    /// Reduced rational value. `n/0` has none.
    pub fn to_normalized_rational(&self) -> SbResult<BigRational> {
        if self.denominator.is_zero() {
            return Err(SternBrocotError::DivisionByZero(self.to_string()));
        }
        Ok(BigRational::new(
            self.numerator.clone(),
            self.denominator.clone(),
        ))
    }

    /// Orders by value via cross-multiplication, so `1/0` sorts above every
    /// finite fraction. Only meaningful for non-negative components.
    pub fn cmp_value(&self, other: &Fraction) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }

    /// Same fraction with the given provenance attached.
    pub(crate) fn with_provenance(mut self, ancestors: Matrix, signature: Option<String>) -> Self {
        self.ancestors = Some(ancestors);
        self.signature = signature;
        self
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl From<Vector> for Fraction {
    fn from(v: Vector) -> Self {
        let [denominator, numerator] = v.entries().clone();
        Fraction::new(numerator, denominator)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Fraction::new(numerator, denominator)
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        self.mediant(&rhs)
    }
}

impl<'a> Add<&'a Fraction> for &'a Fraction {
    type Output = Fraction;

    fn add(self, rhs: &'a Fraction) -> Fraction {
        self.mediant(rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses `"n/d"` (or a bare `"n"` as `n/1`). The slash separates the pair
/// and is never evaluated.
impl FromStr for Fraction {
    type Err = SternBrocotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SternBrocotError::InvalidFraction(s.to_string());
        let (numerator, denominator) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s.trim(), "1"),
        };
        let numerator: BigInt = numerator.parse().map_err(|_| invalid())?;
        let denominator: BigInt = denominator.parse().map_err(|_| invalid())?;
        Ok(Fraction::new(numerator, denominator))
    }
}
