//! Named view over an evaluated destiny matrix.

use anka_math::{Arcana, BirthDate};

use crate::engine::{Resolved, evaluate};
use crate::error::MatrixError;
use crate::slot::Slot;
use crate::table::WIRING;
use crate::wiring::Rule;

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// The four base values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseNumbers {
    pub day: Arcana,
    pub month: Arcana,
    pub year: Arcana,
    pub life_mission: Arcana,
}

/// A diagonal line crossing the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Arcana,
    pub mission: Arcana,
    pub end: Arcana,
}

/// An inner value and its outer echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub primary: Arcana,
    pub secondary: Arcana,
}

/// The heart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartLine {
    pub physique: Arcana,
    pub energy: Arcana,
    pub emotions: Arcana,
}

/// The seven chakras, crown to root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChakraKind {
    Sahasrara,
    Ajna,
    Vishuddha,
    Anahata,
    Manipura,
    Svadhisthana,
    Muladhara,
}

/// All chakras, crown to root.
pub const ALL_CHAKRAS: [ChakraKind; 7] = [
    ChakraKind::Sahasrara,
    ChakraKind::Ajna,
    ChakraKind::Vishuddha,
    ChakraKind::Anahata,
    ChakraKind::Manipura,
    ChakraKind::Svadhisthana,
    ChakraKind::Muladhara,
];

impl ChakraKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sahasrara => "Sahasrara",
            Self::Ajna => "Ajna",
            Self::Vishuddha => "Vishuddha",
            Self::Anahata => "Anahata",
            Self::Manipura => "Manipura",
            Self::Svadhisthana => "Svadhisthana",
            Self::Muladhara => "Muladhara",
        }
    }

    /// Physical, energetic and emotional slots.
    pub const fn slots(self) -> [Slot; 3] {
        match self {
            Self::Sahasrara => [
                Slot::SahasraraPhysical,
                Slot::SahasraraEnergetic,
                Slot::SahasraraEmotional,
            ],
            Self::Ajna => [Slot::AjnaPhysical, Slot::AjnaEnergetic, Slot::AjnaEmotional],
            Self::Vishuddha => [
                Slot::VishuddhaPhysical,
                Slot::VishuddhaEnergetic,
                Slot::VishuddhaEmotional,
            ],
            Self::Anahata => [
                Slot::AnahataPhysical,
                Slot::AnahataEnergetic,
                Slot::AnahataEmotional,
            ],
            Self::Manipura => [
                Slot::ManipuraPhysical,
                Slot::ManipuraEnergetic,
                Slot::ManipuraEmotional,
            ],
            Self::Svadhisthana => [
                Slot::SvadhisthanaPhysical,
                Slot::SvadhisthanaEnergetic,
                Slot::SvadhisthanaEmotional,
            ],
            Self::Muladhara => [
                Slot::MuladharaPhysical,
                Slot::MuladharaEnergetic,
                Slot::MuladharaEmotional,
            ],
        }
    }
}

/// One row of the chakra map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chakra {
    pub kind: ChakraKind,
    pub physical: Arcana,
    pub energetic: Arcana,
    pub emotional: Arcana,
}

/// Column totals of the chakra map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChakraTotals {
    pub physical: Arcana,
    pub energetic: Arcana,
    pub emotional: Arcana,
}

/// Four generational values along one ancestral line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lineage(pub [Arcana; 4]);

/// Purpose domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domains {
    pub sky: Arcana,
    pub earth: Arcana,
    pub personal: Arcana,
    pub spiritual: Arcana,
}

/// Relations with the outside world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalRelations {
    pub primary: Arcana,
    pub secondary: Arcana,
}

// ---------------------------------------------------------------------------
// Matrix
// ---------------------------------------------------------------------------

/// A fully evaluated destiny matrix for one birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixDestiny {
    date: BirthDate,
    resolved: Resolved,
}

impl MatrixDestiny {
    /// Evaluate the standard wiring.
    pub fn compute(date: &BirthDate) -> Result<Self, MatrixError> {
        Self::compute_with_wiring(date, WIRING)
    }

    /// Evaluate a custom rule set.
    pub fn compute_with_wiring(date: &BirthDate, rules: &[Rule]) -> Result<Self, MatrixError> {
        let resolved = evaluate(date, rules)?;
        Ok(Self {
            date: *date,
            resolved,
        })
    }

    /// Parse a `YYYY-MM-DD` date and evaluate the standard wiring.
    pub fn from_raw(date: &str) -> Result<Self, MatrixError> {
        let date = BirthDate::parse(date)?;
        Self::compute(&date)
    }

    pub fn date(&self) -> &BirthDate {
        &self.date
    }

    pub fn value(&self, slot: Slot) -> Arcana {
        self.resolved.get(slot)
    }

    /// `(slot, value)` pairs in slot order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Arcana)> + '_ {
        self.resolved.iter()
    }

    pub fn base(&self) -> BaseNumbers {
        BaseNumbers {
            day: self.value(Slot::Day),
            month: self.value(Slot::Month),
            year: self.value(Slot::Year),
            life_mission: self.value(Slot::LifeMission),
        }
    }

    pub fn center(&self) -> Arcana {
        self.value(Slot::Center)
    }

    pub fn male_line(&self) -> Line {
        Line {
            start: self.value(Slot::MaleStart),
            mission: self.value(Slot::Center),
            end: self.value(Slot::MaleEnd),
        }
    }

    pub fn female_line(&self) -> Line {
        Line {
            start: self.value(Slot::FemaleStart),
            mission: self.value(Slot::Center),
            end: self.value(Slot::FemaleEnd),
        }
    }

    fn pair(&self, primary: Slot, secondary: Slot) -> Pair {
        Pair {
            primary: self.value(primary),
            secondary: self.value(secondary),
        }
    }

    pub fn father(&self) -> Pair {
        self.pair(Slot::Father, Slot::Father2)
    }

    pub fn mother(&self) -> Pair {
        self.pair(Slot::Mother, Slot::Mother2)
    }

    pub fn talent(&self) -> Pair {
        self.pair(Slot::Talent, Slot::Talent2)
    }

    pub fn tail(&self) -> Pair {
        self.pair(Slot::Tail, Slot::Tail2)
    }

    pub fn heart(&self) -> HeartLine {
        HeartLine {
            physique: self.value(Slot::HeartPhysique),
            energy: self.value(Slot::HeartEnergy),
            emotions: self.value(Slot::HeartEmotions),
        }
    }

    pub fn chakra(&self, kind: ChakraKind) -> Chakra {
        let [p, en, em] = kind.slots();
        Chakra {
            kind,
            physical: self.value(p),
            energetic: self.value(en),
            emotional: self.value(em),
        }
    }

    /// Chakra rows, crown to root.
    pub fn chakras(&self) -> [Chakra; 7] {
        ALL_CHAKRAS.map(|k| self.chakra(k))
    }

    pub fn chakra_totals(&self) -> ChakraTotals {
        ChakraTotals {
            physical: self.value(Slot::TotalPhysical),
            energetic: self.value(Slot::TotalEnergetic),
            emotional: self.value(Slot::TotalEmotional),
        }
    }

    pub fn paternal(&self) -> Lineage {
        Lineage([
            self.value(Slot::Paternal1),
            self.value(Slot::Paternal2),
            self.value(Slot::Paternal3),
            self.value(Slot::Paternal4),
        ])
    }

    pub fn maternal(&self) -> Lineage {
        Lineage([
            self.value(Slot::Maternal1),
            self.value(Slot::Maternal2),
            self.value(Slot::Maternal3),
            self.value(Slot::Maternal4),
        ])
    }

    pub fn domains(&self) -> Domains {
        Domains {
            sky: self.value(Slot::Sky),
            earth: self.value(Slot::Earth),
            personal: self.value(Slot::PersonalPurpose),
            spiritual: self.value(Slot::SpiritualPurpose),
        }
    }

    pub fn external(&self) -> ExternalRelations {
        ExternalRelations {
            primary: self.value(Slot::External),
            secondary: self.value(Slot::External2),
        }
    }
}
