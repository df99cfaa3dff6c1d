//! Stat slots and per-slot tables

use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the six stats every creature has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StatSlot {
    Hp = 0,
    Atk = 1,
    Def = 2,
    SpAtk = 3,
    SpDef = 4,
    Speed = 5,
}

impl StatSlot {
    /// All six slots in table order
    pub const ALL: [StatSlot; 6] = [
        StatSlot::Hp,
        StatSlot::Atk,
        StatSlot::Def,
        StatSlot::SpAtk,
        StatSlot::SpDef,
        StatSlot::Speed,
    ];

    /// Slots a nature can raise or lower
    pub const NON_HP: [StatSlot; 5] = [
        StatSlot::Atk,
        StatSlot::Def,
        StatSlot::SpAtk,
        StatSlot::SpDef,
        StatSlot::Speed,
    ];

    pub fn is_hp(&self) -> bool {
        *self == StatSlot::Hp
    }

    /// Parse a slot name (case-insensitive, short or long form)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '-', '_', '.'], "").as_str() {
            "hp" => Some(StatSlot::Hp),
            "atk" | "attack" => Some(StatSlot::Atk),
            "def" | "defense" | "defence" => Some(StatSlot::Def),
            "spa" | "spatk" | "specialattack" => Some(StatSlot::SpAtk),
            "spd" | "spdef" | "specialdefense" | "specialdefence" => Some(StatSlot::SpDef),
            "spe" | "speed" => Some(StatSlot::Speed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatSlot::Hp => "HP",
            StatSlot::Atk => "Atk",
            StatSlot::Def => "Def",
            StatSlot::SpAtk => "SpAtk",
            StatSlot::SpDef => "SpDef",
            StatSlot::Speed => "Speed",
        }
    }
}

impl fmt::Display for StatSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value for each of the six stat slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatTable<T>([T; 6]);

impl<T> StatTable<T> {
    /// Build from values in [`StatSlot::ALL`] order
    pub const fn new(values: [T; 6]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(StatSlot) -> T) -> Self {
        Self(StatSlot::ALL.map(&mut f))
    }

    /// Build from a fallible per-slot function, stopping at the first error
    pub fn try_from_fn<E>(mut f: impl FnMut(StatSlot) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self([
            f(StatSlot::Hp)?,
            f(StatSlot::Atk)?,
            f(StatSlot::Def)?,
            f(StatSlot::SpAtk)?,
            f(StatSlot::SpDef)?,
            f(StatSlot::Speed)?,
        ]))
    }

    pub fn get(&self, slot: StatSlot) -> &T {
        &self.0[slot as usize]
    }

    pub fn set(&mut self, slot: StatSlot, value: T) {
        self.0[slot as usize] = value;
    }

    pub fn map<U>(self, mut f: impl FnMut(StatSlot, T) -> U) -> StatTable<U> {
        let [hp, atk, def, sp_atk, sp_def, speed] = self.0;
        StatTable([
            f(StatSlot::Hp, hp),
            f(StatSlot::Atk, atk),
            f(StatSlot::Def, def),
            f(StatSlot::SpAtk, sp_atk),
            f(StatSlot::SpDef, sp_def),
            f(StatSlot::Speed, speed),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatSlot, &T)> {
        StatSlot::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> &[T; 6] {
        &self.0
    }
}

impl<T> Index<StatSlot> for StatTable<T> {
    type Output = T;

    fn index(&self, slot: StatSlot) -> &T {
        &self.0[slot as usize]
    }
}

impl<T> IndexMut<StatSlot> for StatTable<T> {
    fn index_mut(&mut self, slot: StatSlot) -> &mut T {
        &mut self.0[slot as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot_names() {
        assert_eq!(StatSlot::parse("HP"), Some(StatSlot::Hp));
        assert_eq!(StatSlot::parse("atk"), Some(StatSlot::Atk));
        assert_eq!(StatSlot::parse("Sp. Atk"), Some(StatSlot::SpAtk));
        assert_eq!(StatSlot::parse("special-defense"), Some(StatSlot::SpDef));
        assert_eq!(StatSlot::parse("spe"), Some(StatSlot::Speed));
        assert_eq!(StatSlot::parse("accuracy"), None);
    }

    #[test]
    fn test_non_hp_excludes_hp() {
        assert!(!StatSlot::NON_HP.contains(&StatSlot::Hp));
        assert_eq!(StatSlot::NON_HP.len() + 1, StatSlot::ALL.len());
        assert!(StatSlot::Hp.is_hp());
    }

    #[test]
    fn test_table_indexing() {
        let mut table = StatTable::new([20, 10, 55, 15, 20, 80]);
        assert_eq!(table[StatSlot::Def], 55);
        table[StatSlot::Def] = 56;
        assert_eq!(*table.get(StatSlot::Def), 56);
        table.set(StatSlot::Speed, 81);
        assert_eq!(table[StatSlot::Speed], 81);
    }

    #[test]
    fn test_table_map_passes_matching_slot() {
        let table = StatTable::from_fn(|slot| slot as u8);
        let mapped = table.map(|slot, value| (slot, value * 2));
        for (slot, (seen, doubled)) in mapped.iter() {
            assert_eq!(slot, *seen);
            assert_eq!(*doubled, slot as u8 * 2);
        }
    }
}
