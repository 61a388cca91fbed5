//! Tests for Fraction values: mediant, rendering, rational conversion

use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use rstest::rstest;

use sternbrocot::domain::{Fraction, SternBrocotError};

#[rstest]
fn given_boundaries_when_adding_then_returns_one_over_one() {
    assert_eq!(Fraction::new(0, 1) + Fraction::new(1, 0), Fraction::new(1, 1));
}

#[rstest]
fn given_any_pairs_when_taking_mediant_then_sums_components_without_reduction() {
    for a in -3..=3 {
        for b in -3..=3 {
            for (c, d) in [(0, 1), (1, 0), (2, 4), (-5, 3)] {
                let m = Fraction::new(a, b).mediant(&Fraction::new(c, d));
                assert_eq!(m.to_pair(), (BigInt::from(a + c), BigInt::from(b + d)));
            }
        }
    }
}

#[rstest]
fn given_mediant_chain_when_adding_then_matches_operator_and_method() {
    let a = Fraction::new(1, 3);
    let b = Fraction::new(1, 2);
    let c = Fraction::new(2, 3);
    assert_eq!(&(&a + &b) + &c, a.mediant(&b).mediant(&c));
    assert_eq!((&a + &b + c.clone()).to_string(), "4/8");
}

#[rstest]
fn given_fraction_when_rendering_then_uses_slash_symbol() {
    assert_eq!(Fraction::new(3, 4).to_string(), "3/4");
    assert_eq!(
        Fraction::new(3, 4).to_pair(),
        (BigInt::from(3), BigInt::from(4))
    );
}

#[rstest]
#[case(2, 4, 1, 2)]
#[case(6, 3, 2, 1)]
#[case(0, 5, 0, 1)]
#[case(3, -6, -1, 2)]
fn given_finite_fraction_when_normalizing_then_reduces(
    #[case] n: i64,
    #[case] d: i64,
    #[case] rn: i64,
    #[case] rd: i64,
) {
    let r = Fraction::new(n, d).to_normalized_rational().unwrap();
    assert_eq!(r, BigRational::new(BigInt::from(rn), BigInt::from(rd)));
    assert_eq!(r.numer(), &BigInt::from(rn));
    assert_eq!(r.denom(), &BigInt::from(rd));
}

#[rstest]
#[case(1, 0)]
#[case(0, 0)]
#[case(-7, 0)]
fn given_zero_denominator_when_normalizing_then_division_by_zero(#[case] n: i64, #[case] d: i64) {
    let f = Fraction::new(n, d);
    assert!(matches!(
        f.to_normalized_rational(),
        Err(SternBrocotError::DivisionByZero(_))
    ));
    // still a perfectly good value everywhere else
    assert_eq!(f.to_string(), format!("{n}/0"));
    assert_eq!(f.mediant(&Fraction::new(0, 1)), Fraction::new(n, 1));
}

#[rstest]
fn given_plain_fraction_when_asking_for_ancestors_then_missing_provenance() {
    let f: Fraction = "3/4".parse().unwrap();
    assert!(matches!(
        f.left_ancestor(),
        Err(SternBrocotError::MissingProvenance(ref s)) if s == "3/4"
    ));
}

#[rstest]
fn given_same_pair_with_and_without_provenance_when_hashing_then_equal() {
    let mut set = HashSet::new();
    set.insert(Fraction::from_signature("LRRL").unwrap());
    set.insert(Fraction::new(5, 7));
    assert_eq!(set.len(), 1);
}

#[rstest]
fn given_rendered_fraction_when_parsing_then_same_pair() {
    for f in [Fraction::new(5, 7), Fraction::infinity(), Fraction::new(2, 4)] {
        let parsed: Fraction = f.to_string().parse().unwrap();
        assert_eq!(parsed, f);
    }
}
