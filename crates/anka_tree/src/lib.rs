//! Symbolic tree derived from a birth date.
//!
//! Ten sephiroth each take a value from their own day/month/year formula.
//! Twenty-two fixed paths join them, valued from their endpoints. The nodes
//! fall into three pillars whose reduced sums give the pillar balance.

pub mod error;
pub mod path;
pub mod pillar;
pub mod sephirah;
pub mod tree;

pub use error::TreeError;
pub use path::{FIRST_PATH, PATH_COUNT, PATHS, PathDef, TreePath, compute_paths, significant_paths};
pub use pillar::{ALL_PILLARS, Pillar, PillarBalance, pillar_balance};
pub use sephirah::{ALL_SEPHIROTH, Sephirah, SephirothValues};
pub use tree::TreeOfLife;
