//! Per-person aggregate of every core, cycle and karmic result.

use anka_math::{BirthDate, NaiveDate, PersonName, ReductionMode};

use crate::attributes::{
    Attribute, birthday, expression, heart, life_path, maturity, personality, soul,
};
use crate::compatibility::{CompatibilityResult, RelationshipType, compatibility};
use crate::content::{ContentRecord, ContentStore, lookup_number};
use crate::cycles::{
    Challenges, LifeCycles, PersonalCycles, RealizationPeriods, challenges, life_cycles,
    personal_cycles, realization_periods,
};
use crate::error::NumerologyError;
use crate::karmic::{DebtFinding, KarmicLessons, date_lessons, karmic_debts, name_lessons};

/// Reduced core attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub expression: u32,
    pub soul: u32,
    pub personality: u32,
    pub birthday: u32,
    pub heart: u32,
    pub maturity: u32,
}

impl CoreNumbers {
    /// Compute every core attribute. Fails on the first missing subset.
    pub fn compute(date: &BirthDate, name: &PersonName) -> Result<Self, NumerologyError> {
        Ok(Self {
            life_path: life_path(date, ReductionMode::Reduced),
            expression: expression(name, ReductionMode::Reduced),
            soul: soul(name, ReductionMode::Reduced)?,
            personality: personality(name, ReductionMode::Reduced)?,
            birthday: birthday(date, ReductionMode::Reduced),
            heart: heart(name, ReductionMode::Reduced)?,
            maturity: maturity(date, name),
        })
    }

    /// `(attribute, value)` pairs in display order.
    pub fn entries(&self) -> [(Attribute, u32); 7] {
        [
            (Attribute::LifePath, self.life_path),
            (Attribute::Expression, self.expression),
            (Attribute::Soul, self.soul),
            (Attribute::Personality, self.personality),
            (Attribute::Birthday, self.birthday),
            (Attribute::Heart, self.heart),
            (Attribute::Maturity, self.maturity),
        ]
    }
}

/// Everything derived for one person. Immutable; recompute instead of editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerologyProfile {
    pub date: BirthDate,
    pub name: PersonName,
    pub core: CoreNumbers,
    pub challenges: Challenges,
    pub life_cycles: LifeCycles,
    pub realization_periods: RealizationPeriods,
    pub personal: PersonalCycles,
    pub date_lessons: KarmicLessons,
    pub name_lessons: KarmicLessons,
    pub debts: Vec<DebtFinding>,
}

impl NumerologyProfile {
    /// Build a profile; `today` drives the personal cycles.
    pub fn compute(
        date: BirthDate,
        name: PersonName,
        today: NaiveDate,
    ) -> Result<Self, NumerologyError> {
        let core = CoreNumbers::compute(&date, &name)?;
        let debts = karmic_debts(&date, &name)?;
        Ok(Self {
            challenges: challenges(&date),
            life_cycles: life_cycles(&date),
            realization_periods: realization_periods(&date),
            personal: personal_cycles(&date, today),
            date_lessons: date_lessons(&date),
            name_lessons: name_lessons(&name),
            core,
            debts,
            date,
            name,
        })
    }

    /// Parse raw boundary strings, then [`NumerologyProfile::compute`].
    pub fn from_raw(date: &str, name: &str, today: NaiveDate) -> Result<Self, NumerologyError> {
        let date = BirthDate::parse(date)?;
        let name = PersonName::parse(name)?;
        Self::compute(date, name, today)
    }

    /// Interpretive record for each core attribute, where the store has one.
    pub fn interpret<'a, S: ContentStore + ?Sized>(
        &self,
        store: &'a S,
    ) -> Vec<(Attribute, u32, Option<&'a ContentRecord>)> {
        self.core
            .entries()
            .into_iter()
            .map(|(attr, value)| (attr, value, lookup_number(store, attr.topic(), value)))
            .collect()
    }
}

/// Compatibility between two profiles, keyed on their Life Path numbers.
pub fn compare_profiles<S: ContentStore + ?Sized>(
    a: &NumerologyProfile,
    b: &NumerologyProfile,
    relationship: RelationshipType,
    store: &S,
) -> CompatibilityResult {
    compatibility(a.core.life_path, b.core.life_path, relationship, store)
}
