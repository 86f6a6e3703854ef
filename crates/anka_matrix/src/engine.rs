//! Dependency-ordered evaluation of a rule set.
//!
//! Values live in a fixed arena indexed by [`Slot::index`]. Each pass fills
//! every pending rule whose dependencies are already present; a pass that
//! fills nothing means the remaining rules depend on each other or on slots
//! no rule produces.

use anka_math::{Arcana, BirthDate};
use tracing::{debug, trace};

use crate::error::MatrixError;
use crate::slot::{ALL_SLOTS, SLOT_COUNT, Slot};
use crate::wiring::{Input, Rule, Term};

/// Fully evaluated slot values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    values: Box<[Arcana]>,
}

impl Resolved {
    /// Value held by a slot.
    pub fn get(&self, slot: Slot) -> Arcana {
        self.values[slot.index()]
    }

    /// `(slot, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Arcana)> + '_ {
        ALL_SLOTS.into_iter().map(move |s| (s, self.get(s)))
    }
}

fn raw_input(date: &BirthDate, input: Input) -> u32 {
    match input {
        Input::Day => date.day(),
        Input::Month => date.month(),
        Input::Year => date.year(),
    }
}

/// Evaluate `rules` for `date`.
///
/// The result does not depend on the order of `rules`. Every slot must be
/// produced by exactly one rule.
pub fn evaluate(date: &BirthDate, rules: &[Rule]) -> Result<Resolved, MatrixError> {
    let mut claimed = [false; SLOT_COUNT];
    for rule in rules {
        let seen = &mut claimed[rule.slot.index()];
        if *seen {
            return Err(MatrixError::DuplicateRule(rule.slot));
        }
        *seen = true;
    }

    let mut arena: [Option<Arcana>; SLOT_COUNT] = [None; SLOT_COUNT];
    let mut pending: Vec<&Rule> = rules.iter().collect();
    let mut pass = 0u32;

    while !pending.is_empty() {
        pass += 1;
        let before = pending.len();
        pending.retain(|rule| {
            let resolve = |term: Term| match term {
                Term::Node(slot) => arena[slot.index()].map(Arcana::get),
                Term::Raw(input) => Some(raw_input(date, input)),
            };
            match rule.formula.apply(resolve) {
                Some(value) => {
                    trace!(slot = %rule.slot, value = value.get(), pass, "slot filled");
                    arena[rule.slot.index()] = Some(value);
                    false
                }
                None => true,
            }
        });
        debug!(pass, filled = before - pending.len(), remaining = pending.len(), "matrix pass");

        if pending.len() == before {
            let mut stuck: Vec<Slot> = pending.iter().map(|r| r.slot).collect();
            stuck.sort();
            return Err(MatrixError::UnresolvedSlots(stuck));
        }
    }

    let mut values = Vec::with_capacity(SLOT_COUNT);
    let mut missing = Vec::new();
    for slot in ALL_SLOTS {
        match arena[slot.index()] {
            Some(v) => values.push(v),
            None => missing.push(slot),
        }
    }
    if !missing.is_empty() {
        return Err(MatrixError::UnresolvedSlots(missing));
    }

    Ok(Resolved {
        values: values.into_boxed_slice(),
    })
}

#[cfg(test)]
mod tests {
    use crate::table::WIRING;
    use crate::wiring::Formula;
    use super::*;

    fn date() -> BirthDate {
        BirthDate::new(15, 3, 1990).unwrap()
    }

    #[test]
    fn standard_wiring_resolves() {
        let r = evaluate(&date(), WIRING).unwrap();
        assert_eq!(r.get(Slot::Center).get(), 11);
        assert_eq!(r.iter().count(), SLOT_COUNT);
    }

    #[test]
    fn duplicate_rule_rejected() {
        let mut rules = WIRING.to_vec();
        rules.push(rules[0]);
        assert_eq!(
            evaluate(&date(), &rules),
            Err(MatrixError::DuplicateRule(rules[0].slot))
        );
    }

    #[test]
    fn cycle_reported() {
        let mut rules: Vec<Rule> = WIRING
            .iter()
            .copied()
            .filter(|r| r.slot != Slot::Father && r.slot != Slot::Mother)
            .collect();
        rules.push(Rule {
            slot: Slot::Father,
            formula: Formula::Alias(Term::Node(Slot::Mother)),
        });
        rules.push(Rule {
            slot: Slot::Mother,
            formula: Formula::Alias(Term::Node(Slot::Father)),
        });
        let Err(MatrixError::UnresolvedSlots(stuck)) = evaluate(&date(), &rules) else {
            panic!("expected unresolved slots");
        };
        assert!(stuck.contains(&Slot::Father));
        assert!(stuck.contains(&Slot::Mother));
        // Everything downstream is stuck too.
        assert!(stuck.contains(&Slot::HeartPhysique));
        assert!(!stuck.contains(&Slot::Center));
    }

    #[test]
    fn missing_rule_reported() {
        let rules: Vec<Rule> = WIRING
            .iter()
            .copied()
            .filter(|r| r.slot != Slot::External2)
            .collect();
        assert_eq!(
            evaluate(&date(), &rules),
            Err(MatrixError::UnresolvedSlots(vec![Slot::External2]))
        );
    }
}
