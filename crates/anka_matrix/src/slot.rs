//! Named value slots of the destiny matrix.
//!
//! Every derived value has a slot. Slots are filled by the evaluator in
//! dependency order; a slot never holds a value before its inputs do.

/// Every named value of the destiny matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Slot {
    // Base
    Day,
    Month,
    Year,
    LifeMission,
    // Center
    Center,
    // Lines
    MaleStart,
    MaleEnd,
    FemaleStart,
    FemaleEnd,
    // Pairs
    Father,
    Father2,
    Mother,
    Mother2,
    Talent,
    Talent2,
    Tail,
    Tail2,
    // Heart line
    HeartPhysique,
    HeartEnergy,
    HeartEmotions,
    // Chakras
    SahasraraPhysical,
    SahasraraEnergetic,
    SahasraraEmotional,
    AjnaPhysical,
    AjnaEnergetic,
    AjnaEmotional,
    VishuddhaPhysical,
    VishuddhaEnergetic,
    VishuddhaEmotional,
    AnahataPhysical,
    AnahataEnergetic,
    AnahataEmotional,
    ManipuraPhysical,
    ManipuraEnergetic,
    ManipuraEmotional,
    SvadhisthanaPhysical,
    SvadhisthanaEnergetic,
    SvadhisthanaEmotional,
    MuladharaPhysical,
    MuladharaEnergetic,
    MuladharaEmotional,
    // Chakra totals
    TotalPhysical,
    TotalEnergetic,
    TotalEmotional,
    // Lineage
    Paternal1,
    Paternal2,
    Paternal3,
    Paternal4,
    Maternal1,
    Maternal2,
    Maternal3,
    Maternal4,
    // Domains
    Sky,
    Earth,
    PersonalPurpose,
    SpiritualPurpose,
    // External relations
    External,
    External2,
}

/// Number of slots.
pub const SLOT_COUNT: usize = 58;

/// All slots in declaration order (index 0 = Day).
pub const ALL_SLOTS: [Slot; SLOT_COUNT] = [
    Slot::Day,
    Slot::Month,
    Slot::Year,
    Slot::LifeMission,
    Slot::Center,
    Slot::MaleStart,
    Slot::MaleEnd,
    Slot::FemaleStart,
    Slot::FemaleEnd,
    Slot::Father,
    Slot::Father2,
    Slot::Mother,
    Slot::Mother2,
    Slot::Talent,
    Slot::Talent2,
    Slot::Tail,
    Slot::Tail2,
    Slot::HeartPhysique,
    Slot::HeartEnergy,
    Slot::HeartEmotions,
    Slot::SahasraraPhysical,
    Slot::SahasraraEnergetic,
    Slot::SahasraraEmotional,
    Slot::AjnaPhysical,
    Slot::AjnaEnergetic,
    Slot::AjnaEmotional,
    Slot::VishuddhaPhysical,
    Slot::VishuddhaEnergetic,
    Slot::VishuddhaEmotional,
    Slot::AnahataPhysical,
    Slot::AnahataEnergetic,
    Slot::AnahataEmotional,
    Slot::ManipuraPhysical,
    Slot::ManipuraEnergetic,
    Slot::ManipuraEmotional,
    Slot::SvadhisthanaPhysical,
    Slot::SvadhisthanaEnergetic,
    Slot::SvadhisthanaEmotional,
    Slot::MuladharaPhysical,
    Slot::MuladharaEnergetic,
    Slot::MuladharaEmotional,
    Slot::TotalPhysical,
    Slot::TotalEnergetic,
    Slot::TotalEmotional,
    Slot::Paternal1,
    Slot::Paternal2,
    Slot::Paternal3,
    Slot::Paternal4,
    Slot::Maternal1,
    Slot::Maternal2,
    Slot::Maternal3,
    Slot::Maternal4,
    Slot::Sky,
    Slot::Earth,
    Slot::PersonalPurpose,
    Slot::SpiritualPurpose,
    Slot::External,
    Slot::External2,
];

impl Slot {
    /// 0-based index, matching [`ALL_SLOTS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
            Self::LifeMission => "life mission",
            Self::Center => "center",
            Self::MaleStart => "male line start",
            Self::MaleEnd => "male line end",
            Self::FemaleStart => "female line start",
            Self::FemaleEnd => "female line end",
            Self::Father => "father",
            Self::Father2 => "father (secondary)",
            Self::Mother => "mother",
            Self::Mother2 => "mother (secondary)",
            Self::Talent => "talent",
            Self::Talent2 => "talent (secondary)",
            Self::Tail => "karmic tail",
            Self::Tail2 => "karmic tail (secondary)",
            Self::HeartPhysique => "heart physique",
            Self::HeartEnergy => "heart energy",
            Self::HeartEmotions => "heart emotions",
            Self::SahasraraPhysical => "sahasrara physical",
            Self::SahasraraEnergetic => "sahasrara energetic",
            Self::SahasraraEmotional => "sahasrara emotional",
            Self::AjnaPhysical => "ajna physical",
            Self::AjnaEnergetic => "ajna energetic",
            Self::AjnaEmotional => "ajna emotional",
            Self::VishuddhaPhysical => "vishuddha physical",
            Self::VishuddhaEnergetic => "vishuddha energetic",
            Self::VishuddhaEmotional => "vishuddha emotional",
            Self::AnahataPhysical => "anahata physical",
            Self::AnahataEnergetic => "anahata energetic",
            Self::AnahataEmotional => "anahata emotional",
            Self::ManipuraPhysical => "manipura physical",
            Self::ManipuraEnergetic => "manipura energetic",
            Self::ManipuraEmotional => "manipura emotional",
            Self::SvadhisthanaPhysical => "svadhisthana physical",
            Self::SvadhisthanaEnergetic => "svadhisthana energetic",
            Self::SvadhisthanaEmotional => "svadhisthana emotional",
            Self::MuladharaPhysical => "muladhara physical",
            Self::MuladharaEnergetic => "muladhara energetic",
            Self::MuladharaEmotional => "muladhara emotional",
            Self::TotalPhysical => "total physical",
            Self::TotalEnergetic => "total energetic",
            Self::TotalEmotional => "total emotional",
            Self::Paternal1 => "paternal lineage 1",
            Self::Paternal2 => "paternal lineage 2",
            Self::Paternal3 => "paternal lineage 3",
            Self::Paternal4 => "paternal lineage 4",
            Self::Maternal1 => "maternal lineage 1",
            Self::Maternal2 => "maternal lineage 2",
            Self::Maternal3 => "maternal lineage 3",
            Self::Maternal4 => "maternal lineage 4",
            Self::Sky => "sky",
            Self::Earth => "earth",
            Self::PersonalPurpose => "personal purpose",
            Self::SpiritualPurpose => "spiritual purpose",
            Self::External => "external relations",
            Self::External2 => "external relations (secondary)",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SLOTS.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }

    #[test]
    fn names_unique() {
        for (i, a) in ALL_SLOTS.iter().enumerate() {
            for b in &ALL_SLOTS[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Slot::LifeMission.to_string(), "life mission");
    }
}
