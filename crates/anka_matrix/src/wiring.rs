//! Declarative wiring of the destiny matrix.
//!
//! Each [`Rule`] names the slot it fills and the [`Formula`] over other
//! slots and raw date components that produces it. The rules carry their
//! dependencies as data; evaluation order is derived from them, never from
//! the order of the table.

use anka_math::{Arcana, digit_sum, reduce_matrix};

use crate::slot::Slot;

/// A raw, unreduced date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Day,
    Month,
    Year,
}

/// Operand of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// The value of another slot; creates a dependency edge.
    Node(Slot),
    /// A raw date component.
    Raw(Input),
}

/// How a slot's value is produced. Every result passes through
/// [`reduce_matrix`], so all slot values are in 1..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Sum of the terms.
    Sum(&'static [Term]),
    /// Sum of the terms modulo the given modulus (0 becomes 22).
    ModSum(&'static [Term], u32),
    /// `2x` when `x <= 9`, otherwise `x + digit_sum(x)`.
    DoubleOrDigitSum(Term),
    /// The value of a single term, unchanged apart from bounding.
    Alias(Term),
}

impl Formula {
    /// Terms read by this formula.
    pub fn terms(&self) -> &[Term] {
        match self {
            Self::Sum(terms) | Self::ModSum(terms, _) => *terms,
            Self::DoubleOrDigitSum(term) | Self::Alias(term) => std::slice::from_ref(term),
        }
    }

    /// Slots this formula depends on.
    pub fn dependencies(&self) -> impl Iterator<Item = Slot> + '_ {
        self.terms().iter().filter_map(|t| match t {
            Term::Node(slot) => Some(*slot),
            Term::Raw(_) => None,
        })
    }

    /// Apply the formula once every term has a value.
    ///
    /// `resolve` returns `None` for a term whose slot is not filled yet, in
    /// which case the formula is not applied.
    pub fn apply(&self, mut resolve: impl FnMut(Term) -> Option<u32>) -> Option<Arcana> {
        let value = match self {
            Self::Sum(terms) => sum_terms(terms, &mut resolve)?,
            Self::ModSum(terms, modulus) => sum_terms(terms, &mut resolve)? % modulus,
            Self::DoubleOrDigitSum(term) => {
                let x = resolve(*term)?;
                if x <= 9 { 2 * x } else { x + digit_sum(x) }
            }
            Self::Alias(term) => resolve(*term)?,
        };
        Some(reduce_matrix(value))
    }
}

fn sum_terms(terms: &[Term], resolve: &mut impl FnMut(Term) -> Option<u32>) -> Option<u32> {
    terms.iter().try_fold(0u32, |acc, t| Some(acc + resolve(*t)?))
}

/// One slot and the formula that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    pub slot: Slot,
    pub formula: Formula,
}
