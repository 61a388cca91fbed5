//! Stern-Brocot fractions, signature matrices, trees and series.
//!
//! ```
//! use sternbrocot::domain::{Fraction, Tree};
//!
//! let f3 = Fraction::new(0, 1) + Fraction::new(1, 0);
//! assert_eq!(f3.to_string(), "1/1");
//!
//! let f = Fraction::from_signature("LRRL").unwrap();
//! assert_eq!(f, Fraction::new(5, 7));
//!
//! let tree = Tree::with_depth(3).unwrap();
//! assert_eq!(tree.level(3).unwrap().len(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    locate, map_signature, Fraction, Matrix, SbResult, Series, SternBrocotError, Tree, Vector,
};
