//! Date-cycle calculators: challenges, life cycles, realization periods
//! and the rolling personal year/month/day.
//!
//! Every reduction here collapses master numbers.

use anka_math::{BirthDate, NaiveDate, ReductionMode, SpecialPolicy, digit_sum, reduce_digit};
use chrono::Datelike;

use crate::attributes::life_path;

/// Ages measured from a base of 36, per the traditional cycle tables.
pub const CYCLE_BASE_AGE: u32 = 36;

/// Length of the middle life cycle, in years.
pub const MIDDLE_CYCLE_YEARS: u32 = 27;

/// Length of the second and third realization periods, in years.
pub const PERIOD_YEARS: u32 = 9;

fn collapse(n: u32) -> u32 {
    reduce_digit(n, SpecialPolicy::Collapse)
}

/// Day, month and year reduced without master numbers.
fn collapsed_components(date: &BirthDate) -> (u32, u32, u32) {
    (
        collapse(date.day()),
        collapse(date.month()),
        collapse(digit_sum(date.year())),
    )
}

/// Age at which the first cycle and first period end: `36 - lp`.
pub fn first_transition_age(date: &BirthDate) -> u32 {
    let lp = collapse(life_path(date, ReductionMode::Raw));
    CYCLE_BASE_AGE - lp
}

// ---------------------------------------------------------------------------
// Challenges
// ---------------------------------------------------------------------------

/// The four challenge numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenges {
    /// `|day - month|`
    pub youth: u32,
    /// `|day - year|`
    pub maturity: u32,
    /// `|month - year|`
    pub wisdom: u32,
    /// `|youth - maturity|`
    pub primary: u32,
}

impl Challenges {
    /// Values in youth, maturity, wisdom, primary order.
    pub const fn as_array(&self) -> [u32; 4] {
        [self.youth, self.maturity, self.wisdom, self.primary]
    }
}

/// A zero difference is read as 9.
fn challenge_value(a: u32, b: u32) -> u32 {
    match a.abs_diff(b) {
        0 => 9,
        d => collapse(d),
    }
}

/// Challenge numbers for a birth date.
///
/// The primary challenge is taken between the first two finished values,
/// so a zero remapped to 9 feeds into it as 9.
pub fn challenges(date: &BirthDate) -> Challenges {
    let (d, m, y) = collapsed_components(date);
    let youth = challenge_value(d, m);
    let maturity = challenge_value(d, y);
    let wisdom = challenge_value(m, y);
    let primary = challenge_value(youth, maturity);
    Challenges {
        youth,
        maturity,
        wisdom,
        primary,
    }
}

// ---------------------------------------------------------------------------
// Life cycles and realization periods
// ---------------------------------------------------------------------------

/// A value active over an age span. `end_age` is `None` for the final span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeSpan {
    pub value: u32,
    pub start_age: u32,
    pub end_age: Option<u32>,
}

impl AgeSpan {
    /// True when `age` falls inside `[start_age, end_age)`.
    pub fn contains(&self, age: u32) -> bool {
        age >= self.start_age && self.end_age.is_none_or(|end| age < end)
    }
}

/// The three life cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeCycles {
    /// Ruled by the month.
    pub formative: AgeSpan,
    /// Ruled by the day.
    pub productive: AgeSpan,
    /// Ruled by the digit-summed year.
    pub harvest: AgeSpan,
}

impl LifeCycles {
    pub const fn as_array(&self) -> [AgeSpan; 3] {
        [self.formative, self.productive, self.harvest]
    }
}

/// Life cycles for a birth date.
pub fn life_cycles(date: &BirthDate) -> LifeCycles {
    let (d, m, y) = collapsed_components(date);
    let first_end = first_transition_age(date);
    let second_end = first_end + MIDDLE_CYCLE_YEARS;
    LifeCycles {
        formative: AgeSpan {
            value: m,
            start_age: 0,
            end_age: Some(first_end),
        },
        productive: AgeSpan {
            value: d,
            start_age: first_end,
            end_age: Some(second_end),
        },
        harvest: AgeSpan {
            value: y,
            start_age: second_end,
            end_age: None,
        },
    }
}

/// The four realization periods (pinnacles).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealizationPeriods {
    pub first: AgeSpan,
    pub second: AgeSpan,
    pub third: AgeSpan,
    pub fourth: AgeSpan,
}

impl RealizationPeriods {
    pub const fn as_array(&self) -> [AgeSpan; 4] {
        [self.first, self.second, self.third, self.fourth]
    }
}

/// Realization periods for a birth date.
///
/// The third and fourth are chained from the two periods before them:
/// `p3 = p1 + p2`, `p4 = p2 + p3`.
pub fn realization_periods(date: &BirthDate) -> RealizationPeriods {
    let (d, m, y) = collapsed_components(date);
    let p1 = collapse(m + d);
    let p2 = collapse(d + y);
    let p3 = collapse(p1 + p2);
    let p4 = collapse(p2 + p3);

    let end1 = first_transition_age(date);
    let end2 = end1 + PERIOD_YEARS;
    let end3 = end2 + PERIOD_YEARS;
    RealizationPeriods {
        first: AgeSpan {
            value: p1,
            start_age: 0,
            end_age: Some(end1),
        },
        second: AgeSpan {
            value: p2,
            start_age: end1,
            end_age: Some(end2),
        },
        third: AgeSpan {
            value: p3,
            start_age: end2,
            end_age: Some(end3),
        },
        fourth: AgeSpan {
            value: p4,
            start_age: end3,
            end_age: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Personal year / month / day
// ---------------------------------------------------------------------------

/// Personal cycle numbers as of a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalCycles {
    /// The "today" the cycle was computed for.
    pub reference: NaiveDate,
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Personal year for an arbitrary calendar year.
pub fn personal_year(date: &BirthDate, calendar_year: i32) -> u32 {
    collapse(date.day() + date.month() + collapse(calendar_year.unsigned_abs()))
}

/// Personal year, month and day for `reference`, which the caller supplies.
///
/// Each stage feeds the next: year -> month -> day.
pub fn personal_cycles(date: &BirthDate, reference: NaiveDate) -> PersonalCycles {
    let year = personal_year(date, reference.year());
    let month = collapse(year + reference.month());
    let day = collapse(month + reference.day());
    PersonalCycles {
        reference,
        year,
        month,
        day,
    }
}

/// Whole years between `date` and `reference` (0 if reference is earlier).
pub fn age_on(date: &BirthDate, reference: NaiveDate) -> u32 {
    let ry = reference.year();
    let by = date.year() as i32;
    let mut age = ry - by;
    if (reference.month(), reference.day()) < (date.month(), date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> BirthDate {
        BirthDate::parse(s).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn challenges_1990_03_15() {
        let c = challenges(&date("1990-03-15"));
        assert_eq!(c.as_array(), [3, 5, 2, 2]);
    }

    #[test]
    fn challenge_zero_becomes_9() {
        // day 12 -> 3, month 3 -> 3: |3-3| = 0 -> 9
        let c = challenges(&date("1990-03-12"));
        assert_eq!(c.youth, 9);
    }

    #[test]
    fn challenges_never_zero() {
        for s in ["2000-01-01", "1999-09-09", "1911-11-11", "2022-02-22"] {
            for v in challenges(&date(s)).as_array() {
                assert!((1..=9).contains(&v), "{s}: {v}");
            }
        }
    }

    #[test]
    fn life_cycles_1990_03_15() {
        // lp 1 -> first cycle ends at 35
        let lc = life_cycles(&date("1990-03-15"));
        assert_eq!(lc.formative.value, 3);
        assert_eq!(lc.productive.value, 6);
        assert_eq!(lc.harvest.value, 1);
        assert_eq!(lc.formative.end_age, Some(35));
        assert_eq!(lc.productive.start_age, 35);
        assert_eq!(lc.productive.end_age, Some(62));
        assert_eq!(lc.harvest.end_age, None);
    }

    #[test]
    fn life_cycle_master_month_collapses() {
        // November: 11 -> 2
        let lc = life_cycles(&date("1990-11-15"));
        assert_eq!(lc.formative.value, 2);
    }

    #[test]
    fn realization_chain() {
        // d 6, m 3, y 1: p1 = 9, p2 = 7, p3 = 16 -> 7, p4 = 14 -> 5
        let rp = realization_periods(&date("1990-03-15"));
        let values: Vec<u32> = rp.as_array().iter().map(|s| s.value).collect();
        assert_eq!(values, vec![9, 7, 7, 5]);
        assert_eq!(rp.first.end_age, Some(35));
        assert_eq!(rp.second.end_age, Some(44));
        assert_eq!(rp.third.end_age, Some(53));
        assert_eq!(rp.fourth.start_age, 53);
    }

    #[test]
    fn age_span_contains() {
        let s = AgeSpan {
            value: 1,
            start_age: 10,
            end_age: Some(20),
        };
        assert!(!s.contains(9));
        assert!(s.contains(10));
        assert!(s.contains(19));
        assert!(!s.contains(20));
        let open = AgeSpan {
            value: 1,
            start_age: 50,
            end_age: None,
        };
        assert!(open.contains(120));
    }

    #[test]
    fn personal_cycles_chain() {
        // 15 + 3 + reduce(2024 = 8) = 26 -> 8; month 8 + 10 = 18 -> 9; day 9 + 18 = 27 -> 9
        let pc = personal_cycles(&date("1990-03-15"), ymd(2024, 10, 18));
        assert_eq!(pc.year, 8);
        assert_eq!(pc.month, 9);
        assert_eq!(pc.day, 9);
        assert_eq!(pc.reference, ymd(2024, 10, 18));
    }

    #[test]
    fn personal_cycles_depend_only_on_arguments() {
        let d = date("1985-07-04");
        let r = ymd(2030, 1, 1);
        assert_eq!(personal_cycles(&d, r), personal_cycles(&d, r));
    }

    #[test]
    fn personal_year_no_master() {
        // 29 + 11 + reduce(2020 = 4) = 44 -> 8
        assert_eq!(personal_year(&date("1990-11-29"), 2020), 8);
        // 9 + 2 + reduce(2000 = 2) = 13 -> 4
        assert_eq!(personal_year(&date("1990-02-09"), 2000), 4);
    }

    #[test]
    fn age_on_birthday_boundary() {
        let d = date("1990-03-15");
        assert_eq!(age_on(&d, ymd(2020, 3, 14)), 29);
        assert_eq!(age_on(&d, ymd(2020, 3, 15)), 30);
        assert_eq!(age_on(&d, ymd(1980, 1, 1)), 0);
    }
}
