//! Karmic analysis: missing-digit lessons and karmic debt.
//!
//! Lessons are the digits 1..=9 absent from a date or a name. Debt is
//! detected on raw, pre-reduction attribute sums only; a reduced value can
//! never equal 13, 14, 16 or 19.

use anka_math::{BirthDate, PersonName, ReductionMode, karmic_cycle_value};

use crate::attributes::{Attribute, birthday, expression, life_path, personality, soul};
use crate::content::{ContentRecord, ContentStore, Topic, lookup_number};
use crate::error::NumerologyError;

/// A subset of the digits 1..=9, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// Bits 1..=9 set.
    const FULL: u16 = 0b11_1111_1110;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a digit; 0 and values above 9 are ignored.
    pub fn insert(&mut self, digit: u32) {
        if (1..=9).contains(&digit) {
            self.0 |= 1 << digit;
        }
    }

    pub const fn contains(&self, digit: u32) -> bool {
        digit >= 1 && digit <= 9 && self.0 & (1 << digit) != 0
    }

    /// Digits 1..=9 not in this set.
    pub const fn complement(&self) -> Self {
        Self(!self.0 & Self::FULL)
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=9).filter(|&d| self.contains(d))
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}

impl FromIterator<u32> for DigitSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// Present and missing digits. The two always partition 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KarmicLessons {
    pub present: DigitSet,
    pub missing: DigitSet,
}

impl KarmicLessons {
    fn from_present(present: DigitSet) -> Self {
        Self {
            present,
            missing: present.complement(),
        }
    }

    /// Each missing digit with its interpretive record, if the store has one.
    pub fn with_records<'a, S: ContentStore + ?Sized>(
        &self,
        store: &'a S,
    ) -> Vec<(u32, Option<&'a ContentRecord>)> {
        self.missing
            .iter()
            .map(|d| (d, lookup_number(store, Topic::KarmicLesson, d)))
            .collect()
    }
}

/// Lessons from the digits of the canonical date string.
pub fn date_lessons(date: &BirthDate) -> KarmicLessons {
    KarmicLessons::from_present(date.digits().into_iter().collect())
}

/// Lessons from the karmic cycle positions of the name's letters.
pub fn name_lessons(name: &PersonName) -> KarmicLessons {
    KarmicLessons::from_present(name.letters().chars().map(karmic_cycle_value).collect())
}

// ---------------------------------------------------------------------------
// Karmic debt
// ---------------------------------------------------------------------------

/// The raw sums that mark a karmic debt.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// A karmic debt type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KarmicDebt {
    Thirteen,
    Fourteen,
    Sixteen,
    Nineteen,
}

impl KarmicDebt {
    /// Debt marked by a raw value, if any.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            13 => Some(Self::Thirteen),
            14 => Some(Self::Fourteen),
            16 => Some(Self::Sixteen),
            19 => Some(Self::Nineteen),
            _ => None,
        }
    }

    pub const fn number(self) -> u32 {
        match self {
            Self::Thirteen => 13,
            Self::Fourteen => 14,
            Self::Sixteen => 16,
            Self::Nineteen => 19,
        }
    }

    /// Conventional short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thirteen => "Diligence",
            Self::Fourteen => "Moderation",
            Self::Sixteen => "Humility",
            Self::Nineteen => "Independence",
        }
    }

    /// Interpretive record for this debt, if present.
    pub fn record<S: ContentStore + ?Sized>(self, store: &S) -> Option<&ContentRecord> {
        lookup_number(store, Topic::KarmicDebt, self.number())
    }
}

/// One attribute whose raw sum carries a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebtFinding {
    pub attribute: Attribute,
    pub raw: u32,
    pub debt: KarmicDebt,
}

/// Flag debts among `(attribute, value)` pairs.
///
/// Callers must pass raw sums; reduced values never match.
pub fn detect_debts(values: &[(Attribute, u32)]) -> Vec<DebtFinding> {
    values
        .iter()
        .filter_map(|&(attribute, raw)| {
            KarmicDebt::from_raw(raw).map(|debt| DebtFinding {
                attribute,
                raw,
                debt,
            })
        })
        .collect()
}

/// Raw sums of the five debt-bearing attributes.
pub fn raw_attribute_sums(
    date: &BirthDate,
    name: &PersonName,
) -> Result<[(Attribute, u32); 5], NumerologyError> {
    Ok([
        (Attribute::LifePath, life_path(date, ReductionMode::Raw)),
        (Attribute::Expression, expression(name, ReductionMode::Raw)),
        (Attribute::Soul, soul(name, ReductionMode::Raw)?),
        (Attribute::Personality, personality(name, ReductionMode::Raw)?),
        (Attribute::Birthday, birthday(date, ReductionMode::Raw)),
    ])
}

/// Karmic debts for a person, computed on unreduced sums.
pub fn karmic_debts(
    date: &BirthDate,
    name: &PersonName,
) -> Result<Vec<DebtFinding>, NumerologyError> {
    Ok(detect_debts(&raw_attribute_sums(date, name)?))
}
