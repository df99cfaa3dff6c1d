//! Characteristic filter

use crate::types::{Characteristic, StatSlot};

use super::NatureIvSets;

/// Narrow per-slot IV sets with a characteristic
///
/// Keeps only residue-matching IVs for the highest stat, then caps every
/// other slot at the largest IV the highest stat can still take. Returns the
/// first slot left empty as the error. Applying the filter to its own output
/// changes nothing.
pub fn apply_characteristic(
    mut sets: NatureIvSets,
    characteristic: &Characteristic,
) -> Result<NatureIvSets, StatSlot> {
    let highest = characteristic.highest_stat();
    sets[highest].retain(|iv| characteristic.matches_residue(*iv));
    let Some(&cap) = sets[highest].last() else {
        return Err(highest);
    };

    for slot in StatSlot::ALL {
        if slot == highest {
            continue;
        }
        // Ties are kept: equal IVs are not resolved without a personality value.
        sets[slot].retain(|iv| *iv <= cap);
        if sets[slot].is_empty() {
            return Err(slot);
        }
    }
    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StatTable;
    use std::collections::BTreeSet;

    fn sets(ranges: [(u8, u8); 6]) -> NatureIvSets {
        StatTable::new(ranges).map(|_, (lo, hi)| (lo..=hi).collect::<BTreeSet<u8>>())
    }

    #[test]
    fn test_residue_and_cap() {
        let input = sets([(24, 27), (24, 27), (26, 29), (18, 21), (12, 15), (24, 27)]);
        let c = Characteristic::new(StatSlot::Atk, 1).unwrap();
        let out = apply_characteristic(input, &c).unwrap();

        assert_eq!(out[StatSlot::Atk], BTreeSet::from([26]));
        assert_eq!(out[StatSlot::Hp], BTreeSet::from([24, 25, 26]));
        assert_eq!(out[StatSlot::Def], BTreeSet::from([26]));
        assert_eq!(out[StatSlot::SpAtk], (18..=21).collect());
        assert_eq!(out[StatSlot::SpDef], (12..=15).collect());
        assert_eq!(out[StatSlot::Speed], BTreeSet::from([24, 25, 26]));
    }

    #[test]
    fn test_empty_residue_names_highest_stat() {
        let input = sets([(0, 31), (14, 15), (0, 31), (0, 31), (0, 31), (0, 31)]);
        let c = Characteristic::new(StatSlot::Atk, 2).unwrap();
        assert_eq!(apply_characteristic(input, &c), Err(StatSlot::Atk));
    }

    #[test]
    fn test_cap_empties_other_slot() {
        let input = sets([(0, 31), (10, 10), (0, 31), (0, 31), (20, 25), (0, 31)]);
        let c = Characteristic::new(StatSlot::Atk, 0).unwrap();
        assert_eq!(apply_characteristic(input, &c), Err(StatSlot::SpDef));
    }

    #[test]
    fn test_idempotent() {
        let input = sets([(3, 30), (0, 31), (5, 9), (10, 31), (0, 0), (17, 22)]);
        for slot in StatSlot::ALL {
            for remainder in 0..Characteristic::MODULUS {
                let c = Characteristic::new(slot, remainder).unwrap();
                let Ok(once) = apply_characteristic(input.clone(), &c) else {
                    continue;
                };
                let twice = apply_characteristic(once.clone(), &c).unwrap();
                assert_eq!(once, twice, "{c}");
            }
        }
    }
}
