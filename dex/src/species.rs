//! Species data

use std::fmt;

use ivfind_stats::{CreatureObservation, StatTable};

/// Static data for one species (or form)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Species {
    pub name: &'static str,

    /// Base stats in `StatSlot::ALL` order
    pub base_stats: StatTable<u16>,

    /// Catch rate (1-255), higher is easier
    pub catch_rate: u8,
}

#[rustfmt::skip]
pub static SPECIES: [Species; 5] = [
    //                                                  HP   Atk  Def  SpA  SpD  Spe
    Species { name: "Magikarp",      base_stats: StatTable::new([ 20,  10,  55,  15,  20,  80]), catch_rate: 255 },
    Species { name: "Rayquaza",      base_stats: StatTable::new([105, 150,  90, 150,  90,  95]), catch_rate: 45 },
    Species { name: "Mega Rayquaza", base_stats: StatTable::new([105, 180, 100, 180, 100, 115]), catch_rate: 45 },
    Species { name: "Totodile",      base_stats: StatTable::new([ 50,  65,  64,  44,  48,  43]), catch_rate: 45 },
    Species { name: "Aggron",        base_stats: StatTable::new([ 70, 110, 180,  60,  60,  50]), catch_rate: 45 },
];

impl Species {
    pub fn all() -> &'static [Species] {
        &SPECIES
    }

    /// Look up a species by name, ignoring case and surrounding whitespace
    pub fn find(name: &str) -> Option<&'static Species> {
        let name = name.trim();
        SPECIES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Start an observation of this species at `level`
    pub fn observe(&self, level: u8) -> CreatureObservation {
        CreatureObservation::new(self.base_stats).at_level(level)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ivfind_stats::StatSlot;

    #[test]
    fn test_find_ignores_case() {
        let karp = Species::find("magikarp").unwrap();
        assert_eq!(karp.catch_rate, 255);
        assert_eq!(karp.base_stats[StatSlot::Speed], 80);

        assert_eq!(Species::find("  MEGA RAYQUAZA ").map(|s| s.name), Some("Mega Rayquaza"));
        assert!(Species::find("Missingno").is_none());
    }

    #[test]
    fn test_observe_sets_base_and_level() {
        let aggron = Species::find("Aggron").unwrap();
        let obs = aggron.observe(50);
        assert_eq!(obs.level, Some(50));
        assert_eq!(obs.base_stats[StatSlot::Def], 180);
        assert!(obs.nature.is_none());
    }

    #[test]
    fn test_names_unique() {
        for (i, a) in Species::all().iter().enumerate() {
            for b in &Species::all()[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
