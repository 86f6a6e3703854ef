//! The destiny-matrix rule table.
//!
//! Rules are listed grouped by region for readability. Their order carries
//! no meaning: the evaluator orders them by dependency.

use crate::slot::Slot::*;
use crate::wiring::Formula::{Alias, DoubleOrDigitSum, ModSum, Sum};
use crate::wiring::Input;
use crate::wiring::Rule;
use crate::wiring::Term::{Node as N, Raw as R};

/// Modulus of the solar-plexus energetic value.
pub const MANIPURA_MODULUS: u32 = 22;

/// The standard destiny-matrix wiring.
#[rustfmt::skip]
pub const WIRING: &[Rule] = &[
    // Base
    Rule { slot: Day, formula: Alias(R(Input::Day)) },
    Rule { slot: Month, formula: Alias(R(Input::Month)) },
    Rule { slot: Year, formula: Alias(R(Input::Year)) },
    Rule { slot: LifeMission, formula: Sum(&[N(Day), N(Month), N(Year)]) },
    Rule { slot: Center, formula: Sum(&[N(Day), N(Month), N(Year), N(LifeMission)]) },
    // Diagonal lines
    Rule { slot: MaleStart, formula: Sum(&[N(Day), N(Month)]) },
    Rule { slot: MaleEnd, formula: Sum(&[N(Year), N(LifeMission)]) },
    Rule { slot: FemaleStart, formula: Sum(&[N(Month), N(Year)]) },
    Rule { slot: FemaleEnd, formula: Sum(&[N(LifeMission), N(Day)]) },
    // Inner pairs
    Rule { slot: Father, formula: Sum(&[N(Center), N(Day)]) },
    Rule { slot: Father2, formula: Sum(&[N(Father), N(Day)]) },
    Rule { slot: Mother, formula: Sum(&[N(Center), N(Month)]) },
    Rule { slot: Mother2, formula: Sum(&[N(Mother), N(Month)]) },
    Rule { slot: Talent, formula: Sum(&[N(Center), N(Year)]) },
    Rule { slot: Talent2, formula: Sum(&[N(Talent), N(Year)]) },
    Rule { slot: Tail, formula: Sum(&[N(Center), N(LifeMission)]) },
    Rule { slot: Tail2, formula: Sum(&[N(Tail), N(LifeMission)]) },
    // Heart line
    Rule { slot: HeartPhysique, formula: Sum(&[N(Father), N(Mother)]) },
    Rule { slot: HeartEnergy, formula: Sum(&[N(Talent), N(Tail)]) },
    Rule { slot: HeartEmotions, formula: Sum(&[N(HeartPhysique), N(HeartEnergy)]) },
    // Chakras
    Rule { slot: SahasraraPhysical, formula: Alias(N(Day)) },
    Rule { slot: SahasraraEnergetic, formula: Alias(N(Month)) },
    Rule { slot: SahasraraEmotional, formula: Sum(&[N(SahasraraPhysical), N(SahasraraEnergetic)]) },
    Rule { slot: AjnaPhysical, formula: Alias(N(Father2)) },
    Rule { slot: AjnaEnergetic, formula: Alias(N(Mother2)) },
    Rule { slot: AjnaEmotional, formula: Sum(&[N(AjnaPhysical), N(AjnaEnergetic)]) },
    Rule { slot: VishuddhaPhysical, formula: Alias(N(Father)) },
    Rule { slot: VishuddhaEnergetic, formula: Alias(N(Mother)) },
    Rule { slot: VishuddhaEmotional, formula: Sum(&[N(VishuddhaPhysical), N(VishuddhaEnergetic)]) },
    Rule { slot: AnahataPhysical, formula: Alias(N(HeartPhysique)) },
    Rule { slot: AnahataEnergetic, formula: Alias(N(HeartEnergy)) },
    Rule { slot: AnahataEmotional, formula: Sum(&[N(AnahataPhysical), N(AnahataEnergetic)]) },
    Rule { slot: ManipuraPhysical, formula: Alias(N(Center)) },
    Rule {
        slot: ManipuraEnergetic,
        formula: ModSum(&[R(Input::Day), R(Input::Month), R(Input::Year)], MANIPURA_MODULUS),
    },
    Rule { slot: ManipuraEmotional, formula: Sum(&[N(ManipuraPhysical), N(ManipuraEnergetic)]) },
    Rule { slot: SvadhisthanaPhysical, formula: Alias(N(Talent2)) },
    Rule { slot: SvadhisthanaEnergetic, formula: Alias(N(Tail2)) },
    Rule {
        slot: SvadhisthanaEmotional,
        formula: Sum(&[N(SvadhisthanaPhysical), N(SvadhisthanaEnergetic)]),
    },
    Rule { slot: MuladharaPhysical, formula: Alias(N(Year)) },
    Rule { slot: MuladharaEnergetic, formula: Alias(N(LifeMission)) },
    Rule { slot: MuladharaEmotional, formula: Sum(&[N(MuladharaPhysical), N(MuladharaEnergetic)]) },
    // Chakra totals
    Rule {
        slot: TotalPhysical,
        formula: Sum(&[
            N(SahasraraPhysical),
            N(AjnaPhysical),
            N(VishuddhaPhysical),
            N(AnahataPhysical),
            N(ManipuraPhysical),
            N(SvadhisthanaPhysical),
            N(MuladharaPhysical),
        ]),
    },
    Rule {
        slot: TotalEnergetic,
        formula: Sum(&[
            N(SahasraraEnergetic),
            N(AjnaEnergetic),
            N(VishuddhaEnergetic),
            N(AnahataEnergetic),
            N(ManipuraEnergetic),
            N(SvadhisthanaEnergetic),
            N(MuladharaEnergetic),
        ]),
    },
    Rule {
        slot: TotalEmotional,
        formula: Sum(&[
            N(SahasraraEmotional),
            N(AjnaEmotional),
            N(VishuddhaEmotional),
            N(AnahataEmotional),
            N(ManipuraEmotional),
            N(SvadhisthanaEmotional),
            N(MuladharaEmotional),
        ]),
    },
    // Paternal lineage
    Rule { slot: Paternal1, formula: Sum(&[N(MaleStart), N(Father)]) },
    Rule { slot: Paternal2, formula: Sum(&[N(Paternal1), N(Mother)]) },
    Rule { slot: Paternal3, formula: Sum(&[N(Paternal2), N(Talent)]) },
    Rule { slot: Paternal4, formula: Sum(&[N(Paternal3), N(MaleEnd)]) },
    // Maternal lineage
    Rule { slot: Maternal1, formula: Sum(&[N(FemaleStart), N(Mother)]) },
    Rule { slot: Maternal2, formula: Sum(&[N(Maternal1), N(Father)]) },
    Rule { slot: Maternal3, formula: Sum(&[N(Maternal2), N(Tail)]) },
    Rule { slot: Maternal4, formula: Sum(&[N(Maternal3), N(FemaleEnd)]) },
    // Purpose domains
    Rule { slot: Sky, formula: Sum(&[N(Month), N(LifeMission)]) },
    Rule { slot: Earth, formula: Sum(&[N(Day), N(Year)]) },
    Rule { slot: PersonalPurpose, formula: Sum(&[N(Sky), N(Earth)]) },
    Rule { slot: SpiritualPurpose, formula: Sum(&[N(PersonalPurpose), N(Center)]) },
    // External relations
    Rule { slot: External, formula: DoubleOrDigitSum(N(Center)) },
    Rule { slot: External2, formula: Sum(&[N(External), N(Center)]) },
];
