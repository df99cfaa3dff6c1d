//! Natures and the stat multipliers they apply

use std::fmt;

use ivfind_interval::{Interval, Ratio};

use super::stat_slot::StatSlot;

/// Multiplier a nature applies to one non-HP stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Multiplier {
    /// 1
    Neutral,
    /// 11/10
    Increased,
    /// 9/10
    Decreased,
}

const INCREASED_RATIO: Ratio = Ratio::new_raw(11, 10);
const DECREASED_RATIO: Ratio = Ratio::new_raw(9, 10);

impl Multiplier {
    pub const ALL: [Multiplier; 3] = [
        Multiplier::Neutral,
        Multiplier::Increased,
        Multiplier::Decreased,
    ];

    /// Exact value of the multiplier
    pub fn ratio(&self) -> Ratio {
        match self {
            Multiplier::Neutral => Ratio::from_integer(1),
            Multiplier::Increased => INCREASED_RATIO,
            Multiplier::Decreased => DECREASED_RATIO,
        }
    }

    /// Every value a multiplier can take, `[9/10, 11/10]`
    pub fn range() -> Interval<Ratio> {
        Interval::spanning(DECREASED_RATIO, INCREASED_RATIO)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ratio())
    }
}

/// The 25 natures, in catalog order
///
/// Each nature raises one non-HP stat and lowers another. The five natures
/// that raise and lower the same stat are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Nature {
    Hardy = 0,
    Lonely = 1,
    Brave = 2,
    Adamant = 3,
    Naughty = 4,
    Bold = 5,
    Docile = 6,
    Relaxed = 7,
    Impish = 8,
    Lax = 9,
    Timid = 10,
    Hasty = 11,
    Serious = 12,
    Jolly = 13,
    Naive = 14,
    Modest = 15,
    Mild = 16,
    Quiet = 17,
    Bashful = 18,
    Rash = 19,
    Calm = 20,
    Gentle = 21,
    Sassy = 22,
    Careful = 23,
    Quirky = 24,
}

/// (increased, decreased) per nature, indexed by discriminant
///
/// Rows and columns of the 5x5 catalog both run Atk, Def, Speed, SpAtk,
/// SpDef, so the diagonal holds the neutral natures.
#[rustfmt::skip]
static NATURE_TABLE: [(StatSlot, StatSlot); 25] = {
    use StatSlot::*;
    [
        (Atk, Atk),     (Atk, Def),     (Atk, Speed),     (Atk, SpAtk),     (Atk, SpDef),
        (Def, Atk),     (Def, Def),     (Def, Speed),     (Def, SpAtk),     (Def, SpDef),
        (Speed, Atk),   (Speed, Def),   (Speed, Speed),   (Speed, SpAtk),   (Speed, SpDef),
        (SpAtk, Atk),   (SpAtk, Def),   (SpAtk, Speed),   (SpAtk, SpAtk),   (SpAtk, SpDef),
        (SpDef, Atk),   (SpDef, Def),   (SpDef, Speed),   (SpDef, SpAtk),   (SpDef, SpDef),
    ]
};

impl Nature {
    /// All 25 natures in catalog order
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    /// Neutral nature that stands in for all five when they are equivalent
    pub const NEUTRAL_REPRESENTATIVE: Nature = Nature::Hardy;

    pub fn increased(&self) -> StatSlot {
        NATURE_TABLE[*self as usize].0
    }

    pub fn decreased(&self) -> StatSlot {
        NATURE_TABLE[*self as usize].1
    }

    pub fn is_neutral(&self) -> bool {
        self.increased() == self.decreased()
    }

    /// Look up the nature raising `increased` and lowering `decreased`
    ///
    /// Returns `None` if either slot is HP.
    pub fn from_modifiers(increased: StatSlot, decreased: StatSlot) -> Option<Self> {
        Nature::ALL
            .into_iter()
            .find(|n| n.increased() == increased && n.decreased() == decreased)
    }

    /// Multiplier this nature applies to `slot`, `None` for HP
    pub fn multiplier_for(&self, slot: StatSlot) -> Option<Multiplier> {
        if slot.is_hp() {
            None
        } else if self.is_neutral() {
            Some(Multiplier::Neutral)
        } else if slot == self.increased() {
            Some(Multiplier::Increased)
        } else if slot == self.decreased() {
            Some(Multiplier::Decreased)
        } else {
            Some(Multiplier::Neutral)
        }
    }

    /// Parse from a nature name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Nature::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
