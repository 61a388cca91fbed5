//! Signatures: paths through the tree spelled over `{L, R, I, 0, 1}`.

use std::cmp::Ordering;
use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed};
use tracing::{instrument, trace};

use crate::domain::error::{SbResult, SternBrocotError};
use crate::domain::fraction::Fraction;
use crate::domain::matrix::Matrix;

/// One symbol of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Left,
    Right,
    Identity,
}

impl Step {
    pub fn matrix(self) -> Matrix {
        match self {
            Step::Left => Matrix::left(),
            Step::Right => Matrix::right(),
            Step::Identity => Matrix::identity(),
        }
    }

    /// Canonical letter for this step.
    pub fn symbol(self) -> char {
        match self {
            Step::Left => 'L',
            Step::Right => 'R',
            Step::Identity => 'I',
        }
    }
}

impl TryFrom<char> for Step {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'L' | '0' => Ok(Step::Left),
            'R' | '1' => Ok(Step::Right),
            'I' => Ok(Step::Identity),
            other => Err(other),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Validates the whole signature up front; nothing is multiplied if any symbol is unknown.
pub fn parse_signature(signature: &str) -> SbResult<Vec<Step>> {
    signature
        .chars()
        .enumerate()
        .map(|(position, c)| {
            Step::try_from(c).map_err(|symbol| SternBrocotError::UnrecognizedSymbol {
                symbol,
                position,
                signature: signature.to_string(),
            })
        })
        .collect()
}

/// Product of the step matrices in reading order: `I * s[0] * s[1] * ...`.
///
/// The empty signature maps to the identity.
#[instrument(level = "trace")]
pub fn map_signature(signature: &str) -> SbResult<Matrix> {
    let steps = parse_signature(signature)?;
    let product = steps
        .into_iter()
        .fold(Matrix::identity(), |acc, step| &acc * &step.matrix());
    trace!(%product, "mapped signature");
    Ok(product)
}

/// Finds the L/R path from `1/1` to `numerator/denominator`.
///
/// Only positive fractions in lowest terms are nodes of the tree.
#[instrument(level = "debug")]
pub fn locate(numerator: &BigInt, denominator: &BigInt) -> SbResult<String> {
    let target = Fraction::new(numerator.clone(), denominator.clone());
    if !numerator.is_positive()
        || !denominator.is_positive()
        || !numerator.gcd(denominator).is_one()
    {
        return Err(SternBrocotError::NotInTree(target.to_string()));
    }

    let mut left = Fraction::zero();
    let mut right = Fraction::infinity();
    let mut path = String::new();
    loop {
        let mediant = left.mediant(&right);
        match target.cmp_value(&mediant) {
            Ordering::Equal => break,
            Ordering::Less => {
                path.push(Step::Left.symbol());
                right = mediant;
            }
            Ordering::Greater => {
                path.push(Step::Right.symbol());
                left = mediant;
            }
        }
    }
    trace!(%target, %path, "located");
    Ok(path)
}
