//! IV inference over known or unknown natures

use std::collections::{BTreeMap, BTreeSet};

use ivfind_interval::Interval;

use crate::error::{InferenceError, NatureRejection, RejectionReason};
use crate::formula::{IV_RANGE, StatInputs, infer_iv_candidates, infer_iv_interval};
use crate::types::{Characteristic, Multiplier, Nature, StatSlot, StatTable};

use super::filter::apply_characteristic;
use super::observation::{CreatureObservation, InferenceOptions, StatObservation};
use super::{IvSet, IvSets, NatureIvSets};

/// Validated inputs for one slot
#[derive(Debug, Clone, Copy)]
struct SlotContext {
    inputs: StatInputs,
    observation: StatObservation,
}

impl SlotContext {
    /// IV interval under one multiplier, narrowed to a known IV if any
    fn interval(&self, multiplier: Multiplier) -> Result<Interval<i64>, InferenceError> {
        let mut ivs = infer_iv_interval(&self.inputs, self.observation.value, multiplier)?;
        if let Some(known) = self.observation.known_iv {
            ivs.clamp(&Interval::exact(known as i64))
                .map_err(|reason| InferenceError::ImpossibleStat {
                    slot: self.inputs.slot,
                    reason,
                })?;
        }
        Ok(ivs)
    }

    fn iv_set(&self, multiplier: Multiplier) -> Result<IvSet, InferenceError> {
        self.interval(multiplier).map(to_set)
    }
}

fn to_set(interval: Interval<i64>) -> IvSet {
    interval.iter().filter_map(|iv| u8::try_from(iv).ok()).collect()
}

fn prepare(observation: &CreatureObservation) -> Result<StatTable<SlotContext>, InferenceError> {
    let level = observation.level.ok_or(InferenceError::MissingLevel)?;
    StatTable::try_from_fn(|slot| {
        let observed = observation.stats[slot].ok_or(InferenceError::MissingObservation(slot))?;
        if let Some(known) = observed.known_iv {
            InferenceError::check_range("known iv", known as i64, IV_RANGE.min(), IV_RANGE.max())?;
        }
        let inputs = StatInputs::new(slot, observation.base_stats[slot], level, observed.effort)?;
        Ok(SlotContext {
            inputs,
            observation: observed,
        })
    })
}

/// Infer IV sets with default options
///
/// With a known nature the result has exactly one entry. Without one, every
/// nature consistent with the observations is reported; see
/// [`InferenceOptions`] for how neutral natures are grouped.
pub fn infer_ivs(observation: &CreatureObservation) -> Result<IvSets, InferenceError> {
    infer_ivs_with(observation, &InferenceOptions::default())
}

pub fn infer_ivs_with(
    observation: &CreatureObservation,
    options: &InferenceOptions,
) -> Result<IvSets, InferenceError> {
    let slots = prepare(observation)?;
    match observation.nature {
        Some(nature) => infer_known_nature(&slots, nature, observation.characteristic.as_ref()),
        None => infer_unknown_nature(&slots, observation.characteristic.as_ref(), options),
    }
}

fn infer_known_nature(
    slots: &StatTable<SlotContext>,
    nature: Nature,
    characteristic: Option<&Characteristic>,
) -> Result<IvSets, InferenceError> {
    let sets = StatTable::try_from_fn(|slot| {
        let multiplier = nature.multiplier_for(slot).unwrap_or(Multiplier::Neutral);
        slots[slot].iv_set(multiplier)
    })?;

    let sets = match characteristic {
        Some(c) => apply_characteristic(sets, c)
            .map_err(|slot| InferenceError::CharacteristicConflict { nature, slot })?,
        None => sets,
    };
    Ok(BTreeMap::from([(nature, sets)]))
}

/// IV sets of one non-HP slot for every multiplier that is possible
///
/// Fails if no multiplier is, including when the known IV rules out all of
/// them.
fn slot_candidates(slot: &SlotContext) -> Result<BTreeMap<Multiplier, IvSet>, InferenceError> {
    let intervals = infer_iv_candidates(&slot.inputs, slot.observation.value)?;
    let Some(known) = slot.observation.known_iv else {
        return Ok(intervals.into_iter().map(|(m, ivs)| (m, to_set(ivs))).collect());
    };

    let known = Interval::exact(known as i64);
    let mut candidates = BTreeMap::new();
    let mut last_error = None;
    for (multiplier, ivs) in intervals {
        match ivs.clamped(&known) {
            Ok(ivs) => {
                candidates.insert(multiplier, to_set(ivs));
            }
            Err(reason) => {
                tracing::trace!(
                    slot = %slot.inputs.slot,
                    multiplier = %multiplier,
                    "known iv excludes multiplier"
                );
                last_error = Some(reason);
            }
        }
    }
    match last_error {
        Some(reason) if candidates.is_empty() => Err(InferenceError::ImpossibleStat {
            slot: slot.inputs.slot,
            reason,
        }),
        _ => Ok(candidates),
    }
}

fn assemble(
    nature: Nature,
    hp: &IvSet,
    candidates: &StatTable<BTreeMap<Multiplier, IvSet>>,
    characteristic: Option<&Characteristic>,
) -> Result<NatureIvSets, RejectionReason> {
    let sets = StatTable::try_from_fn(|slot| match nature.multiplier_for(slot) {
        None => Ok(hp.clone()),
        Some(multiplier) => candidates[slot]
            .get(&multiplier)
            .cloned()
            .ok_or(RejectionReason::MultiplierImpossible { slot, multiplier }),
    })?;

    match characteristic {
        Some(c) => apply_characteristic(sets, c)
            .map_err(|slot| RejectionReason::CharacteristicConflict { slot }),
        None => Ok(sets),
    }
}

fn infer_unknown_nature(
    slots: &StatTable<SlotContext>,
    characteristic: Option<&Characteristic>,
    options: &InferenceOptions,
) -> Result<IvSets, InferenceError> {
    let hp = slots[StatSlot::Hp].iv_set(Multiplier::Neutral)?;
    let mut candidates: StatTable<BTreeMap<Multiplier, IvSet>> = StatTable::default();
    for slot in StatSlot::NON_HP {
        candidates[slot] = slot_candidates(&slots[slot])?;
    }

    // Neutral natures only differ in identity, which matters to a characteristic.
    let collapse = options.collapse_neutral_natures && characteristic.is_none();

    let mut results = IvSets::new();
    let mut rejections = Vec::new();
    for nature in Nature::ALL {
        if collapse && nature.is_neutral() && nature != Nature::NEUTRAL_REPRESENTATIVE {
            continue;
        }
        match assemble(nature, &hp, &candidates, characteristic) {
            Ok(sets) => {
                results.insert(nature, sets);
            }
            Err(reason) => {
                let rejection = NatureRejection { nature, reason };
                tracing::debug!(rejection = %rejection, "nature rejected");
                rejections.push(rejection);
            }
        }
    }

    tracing::debug!(
        feasible = results.len(),
        rejected = rejections.len(),
        collapsed = collapse,
        "nature enumeration finished"
    );

    if results.is_empty() {
        return Err(InferenceError::NoFeasibleNature { rejections });
    }
    Ok(results)
}

/// Union of every IV still possible for `slot` across all natures
pub fn possible_ivs(sets: &IvSets, slot: StatSlot) -> IvSet {
    sets.values()
        .flat_map(|nature_sets| nature_sets[slot].iter().copied())
        .collect::<BTreeSet<u8>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magikarp() -> CreatureObservation {
        CreatureObservation::new(StatTable::new([20, 10, 55, 15, 20, 80]))
            .at_level(25)
            .observe_all([51, 17, 39, 15, 18, 51])
    }

    fn range(lo: u8, hi: u8) -> IvSet {
        (lo..=hi).collect()
    }

    #[test]
    fn test_known_nature_single_entry() {
        let sets = infer_ivs(&magikarp().with_nature(Nature::Adamant)).unwrap();
        assert_eq!(sets.len(), 1);
        let adamant = &sets[&Nature::Adamant];
        assert_eq!(adamant[StatSlot::Hp], range(24, 27));
        assert_eq!(adamant[StatSlot::Atk], range(24, 27));
        assert_eq!(adamant[StatSlot::Def], range(26, 29));
        assert_eq!(adamant[StatSlot::SpAtk], range(18, 21));
        assert_eq!(adamant[StatSlot::SpDef], range(12, 15));
        assert_eq!(adamant[StatSlot::Speed], range(24, 27));
    }

    #[test]
    fn test_known_nature_with_characteristic() {
        let c = Characteristic::from_phrase("Likes to thrash about").unwrap();
        let sets = infer_ivs(&magikarp().with_nature(Nature::Adamant).with_characteristic(c)).unwrap();
        let adamant = &sets[&Nature::Adamant];
        assert_eq!(adamant[StatSlot::Atk], BTreeSet::from([26]));
        assert_eq!(adamant[StatSlot::Hp], range(24, 26));
        assert_eq!(adamant[StatSlot::Def], BTreeSet::from([26]));
        assert_eq!(adamant[StatSlot::Speed], range(24, 26));
    }

    #[test]
    fn test_known_nature_impossible_stat_aborts() {
        // Atk can not be lowered for this creature.
        let err = infer_ivs(&magikarp().with_nature(Nature::Modest)).unwrap_err();
        assert!(matches!(err, InferenceError::ImpossibleStat { slot: StatSlot::Atk, .. }));
    }

    #[test]
    fn test_unknown_nature_enumerates_feasible() {
        let sets = infer_ivs(&magikarp()).unwrap();
        // Only SpAtk and SpDef can be lowered; neutral natures collapse to one.
        assert_eq!(sets.len(), 9);
        for nature in sets.keys() {
            if nature.is_neutral() {
                assert_eq!(*nature, Nature::NEUTRAL_REPRESENTATIVE);
            } else {
                assert!(matches!(nature.decreased(), StatSlot::SpAtk | StatSlot::SpDef));
            }
        }
        assert_eq!(sets[&Nature::Adamant], infer_ivs(&magikarp().with_nature(Nature::Adamant)).unwrap()[&Nature::Adamant]);
    }

    #[test]
    fn test_unknown_nature_without_collapse() {
        let options = InferenceOptions {
            collapse_neutral_natures: false,
        };
        let sets = infer_ivs_with(&magikarp(), &options).unwrap();
        assert_eq!(sets.len(), 13);
        assert!(sets.contains_key(&Nature::Quirky));
    }

    #[test]
    fn test_missing_level() {
        let mut obs = magikarp();
        obs.level = None;
        assert_eq!(infer_ivs(&obs), Err(InferenceError::MissingLevel));
    }

    #[test]
    fn test_missing_observation() {
        let mut obs = magikarp();
        obs.stats[StatSlot::SpDef] = None;
        assert_eq!(
            infer_ivs(&obs),
            Err(InferenceError::MissingObservation(StatSlot::SpDef))
        );
    }

    #[test]
    fn test_known_iv_narrows() {
        let obs = magikarp()
            .with_nature(Nature::Adamant)
            .observe_with(StatSlot::Def, StatObservation::new(39).with_known_iv(28));
        let sets = infer_ivs(&obs).unwrap();
        assert_eq!(sets[&Nature::Adamant][StatSlot::Def], BTreeSet::from([28]));
    }

    #[test]
    fn test_known_iv_conflict() {
        let obs = magikarp()
            .with_nature(Nature::Adamant)
            .observe_with(StatSlot::Def, StatObservation::new(39).with_known_iv(3));
        assert!(matches!(
            infer_ivs(&obs),
            Err(InferenceError::ImpossibleStat { slot: StatSlot::Def, .. })
        ));

        let obs = magikarp().observe_with(StatSlot::Def, StatObservation::new(39).with_known_iv(40));
        assert!(matches!(
            infer_ivs(&obs),
            Err(InferenceError::OutOfRange { field: "known iv", .. })
        ));
    }

    #[test]
    fn test_known_iv_selects_multiplier() {
        // Def 39 means IV 26-29 unboosted or 14-17 boosted; IV 15 forces a boost.
        let obs = magikarp().observe_with(StatSlot::Def, StatObservation::new(39).with_known_iv(15));
        let sets = infer_ivs(&obs).unwrap();
        assert!(!sets.is_empty());
        assert!(sets.keys().all(|n| n.increased() == StatSlot::Def && !n.is_neutral()));
    }

    #[test]
    fn test_possible_ivs_union() {
        let sets = infer_ivs(&magikarp()).unwrap();
        let def = possible_ivs(&sets, StatSlot::Def);
        assert_eq!(def, range(14, 17).union(&range(26, 29)).copied().collect());
    }
}
