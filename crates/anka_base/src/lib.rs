//! Numerology attributes derived from a birth date and a name.
//!
//! This crate provides:
//! - Core attributes: Life Path, Expression, Soul, Personality, Birthday,
//!   Heart and Maturity
//! - Date cycles: challenges, life cycles, realization periods and the
//!   personal year/month/day chain
//! - Karmic lessons (missing digits) and karmic debt (raw sums)
//! - Life Path compatibility with an approximate keyword score
//! - A read-only content lookup seam for interpretive text
//!
//! All calculations are pure. "Today" is always an explicit argument.

pub mod attributes;
pub mod compatibility;
pub mod content;
pub mod cycles;
pub mod error;
pub mod karmic;
pub mod profile;

pub use attributes::{
    ALL_ATTRIBUTES, Attribute, birthday, expression, heart, life_path, maturity, personality,
    soul,
};
pub use compatibility::{
    ALL_RELATIONSHIPS, CompatibilityResult, PairKey, RelationshipType, ScoreBreakdown,
    compatibility, heuristic_score, pair_key,
};
pub use content::{
    ALL_TOPICS, ContentRecord, ContentStore, EmptyContentStore, MemoryContentStore, Topic,
    lookup_number,
};
pub use cycles::{
    AgeSpan, Challenges, LifeCycles, PersonalCycles, RealizationPeriods, age_on, challenges,
    first_transition_age, life_cycles, personal_cycles, personal_year, realization_periods,
};
pub use error::{ContentError, NumerologyError};
pub use karmic::{
    DebtFinding, DigitSet, KARMIC_DEBT_NUMBERS, KarmicDebt, KarmicLessons, date_lessons,
    detect_debts, karmic_debts, name_lessons, raw_attribute_sums,
};
pub use profile::{CoreNumbers, NumerologyProfile, compare_profiles};

// Re-export input types so callers don't need to depend on anka_math directly.
pub use anka_math::{BirthDate, InputError, NaiveDate, PersonName, ReductionMode};
