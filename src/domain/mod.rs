//! Domain layer: fractions, matrices, signatures, trees
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod fraction;
pub mod matrix;
pub mod series;
pub mod signature;
pub mod tree;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::{Expansion, TreeBuilder};
pub use error::{SbResult, SternBrocotError};
pub use fraction::Fraction;
pub use matrix::{Matrix, Vector};
pub use series::{Series, SeriesIter};
pub use signature::{locate, map_signature, parse_signature, Step};
pub use tree::{Tree, MAX_TREE_DEPTH};
