//! Arithmetic primitives for numerology derivations.
//!
//! This crate provides:
//! - Digit reduction to 1..=9 (optionally keeping master numbers) and the
//!   separate 1..=22 reduction used by the destiny matrix
//! - The Pythagorean letter table, the heart-number table and the karmic
//!   cycle position function
//! - Boundary parsing of birth dates and person names
//!
//! Everything here is pure: no I/O, no clock, no shared state.

pub mod date;
pub mod error;
pub mod letters;
pub mod name;
pub mod reduce;

pub use date::{BirthDate, MAX_YEAR, MIN_YEAR};
pub use error::InputError;
pub use letters::{
    HEART_TABLE, VOWELS, heart_value, is_vowel, karmic_cycle_value, letter_value,
};
pub use name::{PersonName, normalize_letters};
pub use reduce::{
    Arcana, MASTER_NUMBERS, MATRIX_MAX, Reduction, ReductionMode, SpecialPolicy, digit_sum,
    is_master, reduce_digit, reduce_matrix, reduction_chain,
};

/// Calendar date type used for reference ("today") dates.
pub use chrono::NaiveDate;
