//! Core attribute calculators.
//!
//! Each calculator sums a date's digits or a name's letter values and
//! either returns the raw sum or reduces it keeping master numbers,
//! as chosen by [`ReductionMode`]. Birthday is the exception: the day
//! alone is never allowed to produce a master number.

use anka_math::{
    BirthDate, PersonName, ReductionMode, SpecialPolicy, heart_value, letter_value, reduce_digit,
};

use crate::content::Topic;
use crate::error::NumerologyError;

/// The named numerology attributes of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    LifePath,
    Expression,
    Soul,
    Personality,
    Birthday,
    Heart,
    Maturity,
}

/// All attributes in display order.
pub const ALL_ATTRIBUTES: [Attribute; 7] = [
    Attribute::LifePath,
    Attribute::Expression,
    Attribute::Soul,
    Attribute::Personality,
    Attribute::Birthday,
    Attribute::Heart,
    Attribute::Maturity,
];

impl Attribute {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LifePath => "Life Path",
            Self::Expression => "Expression",
            Self::Soul => "Soul",
            Self::Personality => "Personality",
            Self::Birthday => "Birthday",
            Self::Heart => "Heart",
            Self::Maturity => "Maturity",
        }
    }

    /// Content topic holding the interpretation of this attribute.
    pub const fn topic(self) -> Topic {
        match self {
            Self::LifePath => Topic::LifePath,
            Self::Expression => Topic::Expression,
            Self::Soul => Topic::Soul,
            Self::Heart => Topic::Heart,
            Self::Personality => Topic::Personality,
            Self::Birthday => Topic::Birthday,
            Self::Maturity => Topic::Maturity,
        }
    }
}

fn finish(sum: u32, mode: ReductionMode) -> u32 {
    match mode {
        ReductionMode::Reduced => reduce_digit(sum, SpecialPolicy::Preserve),
        ReductionMode::Raw => sum,
    }
}

/// Life Path: every digit of the canonical `YYYY-MM-DD` form, summed.
pub fn life_path(date: &BirthDate, mode: ReductionMode) -> u32 {
    finish(date.digits().iter().sum(), mode)
}

/// Expression: Pythagorean values of every letter of the name.
pub fn expression(name: &PersonName, mode: ReductionMode) -> u32 {
    finish(name.letters().chars().map(letter_value).sum(), mode)
}

/// Soul: Pythagorean values of the vowels only.
pub fn soul(name: &PersonName, mode: ReductionMode) -> Result<u32, NumerologyError> {
    let mut seen = false;
    let sum: u32 = name
        .vowels()
        .inspect(|_| seen = true)
        .map(letter_value)
        .sum();
    if !seen {
        return Err(NumerologyError::NoVowels(name.letters().to_string()));
    }
    Ok(finish(sum, mode))
}

/// Personality: Pythagorean values of the consonants only.
pub fn personality(name: &PersonName, mode: ReductionMode) -> Result<u32, NumerologyError> {
    let mut seen = false;
    let sum: u32 = name
        .consonants()
        .inspect(|_| seen = true)
        .map(letter_value)
        .sum();
    if !seen {
        return Err(NumerologyError::NoConsonants(name.letters().to_string()));
    }
    Ok(finish(sum, mode))
}

/// Birthday: the day of month, reduced without keeping master numbers.
///
/// Day 29 gives 2, not 11.
pub fn birthday(date: &BirthDate, mode: ReductionMode) -> u32 {
    match mode {
        ReductionMode::Reduced => reduce_digit(date.day(), SpecialPolicy::Collapse),
        ReductionMode::Raw => date.day(),
    }
}

/// Heart number: the separate heart table (A=1 E=5 I=9 O=6 U=3 Y=7).
///
/// Fails when no letter of the name appears in the table.
pub fn heart(name: &PersonName, mode: ReductionMode) -> Result<u32, NumerologyError> {
    let sum: u32 = name.letters().chars().map(heart_value).sum();
    if sum == 0 {
        return Err(NumerologyError::NoVowels(name.letters().to_string()));
    }
    Ok(finish(sum, mode))
}

/// Maturity: reduced Life Path plus reduced Expression, reduced again.
pub fn maturity(date: &BirthDate, name: &PersonName) -> u32 {
    let lp = life_path(date, ReductionMode::Reduced);
    let ex = expression(name, ReductionMode::Reduced);
    reduce_digit(lp + ex, SpecialPolicy::Preserve)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> BirthDate {
        BirthDate::parse(s).unwrap()
    }

    fn name(s: &str) -> PersonName {
        PersonName::parse(s).unwrap()
    }

    #[test]
    fn life_path_1990_03_15() {
        let d = date("1990-03-15");
        assert_eq!(life_path(&d, ReductionMode::Raw), 28);
        assert_eq!(life_path(&d, ReductionMode::Reduced), 1);
    }

    #[test]
    fn life_path_keeps_master() {
        // 1+9+8+5+0+9+1+7 = 40 -> 4
        assert_eq!(life_path(&date("1985-09-17"), ReductionMode::Reduced), 4);
        // 2000-02-09 -> 2+0+0+0+0+2+0+9 = 13 -> 4
        assert_eq!(life_path(&date("2000-02-09"), ReductionMode::Reduced), 4);
        // 1992-09-09 -> 1+9+9+2+0+9+0+9 = 39 -> 12 -> 3
        assert_eq!(life_path(&date("1992-09-09"), ReductionMode::Reduced), 3);
        // 1991-09-09 -> 38 -> 11
        assert_eq!(life_path(&date("1991-09-09"), ReductionMode::Reduced), 11);
    }

    #[test]
    fn expression_ab() {
        assert_eq!(expression(&name("AB"), ReductionMode::Reduced), 3);
        assert_eq!(expression(&name("ab"), ReductionMode::Raw), 3);
    }

    #[test]
    fn expression_ignores_accents_and_spaces() {
        let plain = expression(&name("Jose Maria"), ReductionMode::Raw);
        let accented = expression(&name("José  María"), ReductionMode::Raw);
        assert_eq!(plain, accented);
    }

    #[test]
    fn soul_and_personality_partition_expression() {
        let n = name("Alexandra Smith");
        let total = expression(&n, ReductionMode::Raw);
        let s = soul(&n, ReductionMode::Raw).unwrap();
        let p = personality(&n, ReductionMode::Raw).unwrap();
        assert_eq!(s + p, total);
    }

    #[test]
    fn soul_without_vowels_fails() {
        assert_eq!(
            soul(&name("Lynn"), ReductionMode::Reduced),
            Err(NumerologyError::NoVowels("LYNN".into()))
        );
    }

    #[test]
    fn personality_without_consonants_fails() {
        assert_eq!(
            personality(&name("Aio"), ReductionMode::Reduced),
            Err(NumerologyError::NoConsonants("AIO".into()))
        );
    }

    #[test]
    fn birthday_29_is_2_not_11() {
        let d = date("2001-04-29");
        assert_eq!(birthday(&d, ReductionMode::Reduced), 2);
        assert_eq!(birthday(&d, ReductionMode::Raw), 29);
    }

    #[test]
    fn birthday_22_collapses() {
        assert_eq!(birthday(&date("2001-04-22"), ReductionMode::Reduced), 4);
    }

    #[test]
    fn heart_uses_own_table() {
        // Y=7 in the heart table, consonant for soul.
        assert_eq!(heart(&name("Lynn"), ReductionMode::Raw), Ok(7));
        // Y7 + O6 + O6 = 19 -> 1
        assert_eq!(heart(&name("Yoko"), ReductionMode::Raw), Ok(19));
        assert_eq!(heart(&name("Yoko"), ReductionMode::Reduced), Ok(1));
    }

    #[test]
    fn heart_without_table_letters_fails() {
        assert!(matches!(
            heart(&name("Brr"), ReductionMode::Reduced),
            Err(NumerologyError::NoVowels(_))
        ));
    }

    #[test]
    fn maturity_combines() {
        // LP 1 (1990-03-15), expression AB = 3 -> 4
        assert_eq!(maturity(&date("1990-03-15"), &name("AB")), 4);
    }

    #[test]
    fn attribute_names_unique() {
        for (i, a) in ALL_ATTRIBUTES.iter().enumerate() {
            for b in &ALL_ATTRIBUTES[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
