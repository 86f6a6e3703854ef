//! The three pillars and their balance.

use anka_math::{SpecialPolicy, reduce_digit};

use crate::sephirah::Sephirah::{self, *};
use crate::sephirah::SephirothValues;

/// A vertical column of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pillar {
    /// Left column.
    Severity,
    /// Right column.
    Mercy,
    /// Center column.
    Equilibrium,
}

pub const ALL_PILLARS: [Pillar; 3] = [Pillar::Severity, Pillar::Mercy, Pillar::Equilibrium];

impl Pillar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Severity => "Severity",
            Self::Mercy => "Mercy",
            Self::Equilibrium => "Equilibrium",
        }
    }

    pub const fn members(self) -> &'static [Sephirah] {
        match self {
            Self::Severity => &[Binah, Geburah, Hod],
            Self::Mercy => &[Chokmah, Chesed, Netzach],
            Self::Equilibrium => &[Kether, Tiphareth, Yesod, Malkuth],
        }
    }

    /// Reduced sum of the member values, masters collapsed.
    pub fn value(self, nodes: &SephirothValues) -> u32 {
        let sum = self.members().iter().map(|&s| nodes.get(s)).sum();
        reduce_digit(sum, SpecialPolicy::Collapse)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Reduced pillar sums and the dominant pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarBalance {
    pub severity: u32,
    pub mercy: u32,
    pub equilibrium: u32,
    /// The unique largest pillar; Equilibrium when the maximum is shared.
    pub dominant: Pillar,
}

impl PillarBalance {
    pub const fn get(&self, pillar: Pillar) -> u32 {
        match pillar {
            Pillar::Severity => self.severity,
            Pillar::Mercy => self.mercy,
            Pillar::Equilibrium => self.equilibrium,
        }
    }
}

pub fn pillar_balance(nodes: &SephirothValues) -> PillarBalance {
    let severity = Pillar::Severity.value(nodes);
    let mercy = Pillar::Mercy.value(nodes);
    let equilibrium = Pillar::Equilibrium.value(nodes);

    let dominant = if severity > mercy && severity > equilibrium {
        Pillar::Severity
    } else if mercy > severity && mercy > equilibrium {
        Pillar::Mercy
    } else {
        Pillar::Equilibrium
    };

    PillarBalance {
        severity,
        mercy,
        equilibrium,
        dominant,
    }
}
