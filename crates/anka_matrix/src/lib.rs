//! Destiny-matrix engine.
//!
//! The matrix is a set of named slots, each holding a value in 1..=22,
//! filled from a birth date by a declarative rule table. Rules name their
//! dependencies; the evaluator derives the order.

pub mod destiny;
pub mod engine;
pub mod error;
pub mod slot;
pub mod table;
pub mod wiring;

pub use destiny::{
    ALL_CHAKRAS, BaseNumbers, Chakra, ChakraKind, ChakraTotals, Domains, ExternalRelations,
    HeartLine, Line, Lineage, MatrixDestiny, Pair,
};
pub use engine::{Resolved, evaluate};
pub use error::MatrixError;
pub use slot::{ALL_SLOTS, SLOT_COUNT, Slot};
pub use table::{MANIPURA_MODULUS, WIRING};
pub use wiring::{Formula, Input, Rule, Term};
