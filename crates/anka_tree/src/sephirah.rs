//! The ten sephiroth and their date-derived values.
//!
//! Each node has its own formula over the raw day `D`, month `M` and year
//! `Y`. Some keep master numbers, some collapse them; the choice is per node:
//!
//! | Node      | Sum              | Masters  |
//! |-----------|------------------|----------|
//! | Kether    | `D + M + ds(Y)`  | kept     |
//! | Chokmah   | `D`              | kept     |
//! | Binah     | `M`              | kept     |
//! | Chesed    | `ds(Y)`          | kept     |
//! | Geburah   | `D + M`          | collapsed|
//! | Tiphareth | `D + M + Y`      | kept     |
//! | Netzach   | `D + Y`          | collapsed|
//! | Hod       | `M + Y`          | collapsed|
//! | Yesod     | `D * M`          | collapsed|
//! | Malkuth   | `Y`              | collapsed|
//!
//! `ds` is a single digit sum.

use anka_math::{BirthDate, SpecialPolicy, digit_sum, reduce_digit};

/// One of the ten nodes of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sephirah {
    Kether,
    Chokmah,
    Binah,
    Chesed,
    Geburah,
    Tiphareth,
    Netzach,
    Hod,
    Yesod,
    Malkuth,
}

/// All sephiroth, top to bottom.
pub const ALL_SEPHIROTH: [Sephirah; 10] = [
    Sephirah::Kether,
    Sephirah::Chokmah,
    Sephirah::Binah,
    Sephirah::Chesed,
    Sephirah::Geburah,
    Sephirah::Tiphareth,
    Sephirah::Netzach,
    Sephirah::Hod,
    Sephirah::Yesod,
    Sephirah::Malkuth,
];

impl Sephirah {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kether => "Kether",
            Self::Chokmah => "Chokmah",
            Self::Binah => "Binah",
            Self::Chesed => "Chesed",
            Self::Geburah => "Geburah",
            Self::Tiphareth => "Tiphareth",
            Self::Netzach => "Netzach",
            Self::Hod => "Hod",
            Self::Yesod => "Yesod",
            Self::Malkuth => "Malkuth",
        }
    }

    /// Traditional English gloss.
    pub const fn meaning(self) -> &'static str {
        match self {
            Self::Kether => "Crown",
            Self::Chokmah => "Wisdom",
            Self::Binah => "Understanding",
            Self::Chesed => "Mercy",
            Self::Geburah => "Severity",
            Self::Tiphareth => "Beauty",
            Self::Netzach => "Victory",
            Self::Hod => "Splendour",
            Self::Yesod => "Foundation",
            Self::Malkuth => "Kingdom",
        }
    }

    /// 0-based index (Kether = 0, Malkuth = 9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based traditional number.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Compute this node's value for `date`.
    pub fn compute(self, date: &BirthDate) -> u32 {
        let (d, m, y) = (date.day(), date.month(), date.year());
        let (sum, policy) = match self {
            Self::Kether => (d + m + digit_sum(y), SpecialPolicy::Preserve),
            Self::Chokmah => (d, SpecialPolicy::Preserve),
            Self::Binah => (m, SpecialPolicy::Preserve),
            Self::Chesed => (digit_sum(y), SpecialPolicy::Preserve),
            Self::Geburah => (d + m, SpecialPolicy::Collapse),
            Self::Tiphareth => (d + m + y, SpecialPolicy::Preserve),
            Self::Netzach => (d + y, SpecialPolicy::Collapse),
            Self::Hod => (m + y, SpecialPolicy::Collapse),
            Self::Yesod => (d * m, SpecialPolicy::Collapse),
            Self::Malkuth => (y, SpecialPolicy::Collapse),
        };
        reduce_digit(sum, policy)
    }
}

impl std::fmt::Display for Sephirah {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Values of all ten nodes for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SephirothValues {
    values: [u32; 10],
}

impl SephirothValues {
    pub fn compute(date: &BirthDate) -> Self {
        Self {
            values: ALL_SEPHIROTH.map(|s| s.compute(date)),
        }
    }

    pub const fn get(&self, sephirah: Sephirah) -> u32 {
        self.values[sephirah.index() as usize]
    }

    /// `(node, value)` pairs, Kether first.
    pub fn iter(&self) -> impl Iterator<Item = (Sephirah, u32)> + '_ {
        ALL_SEPHIROTH.into_iter().map(move |s| (s, self.get(s)))
    }
}
