//! Characteristics: "highest IV" hints with a residue

use std::fmt;

use crate::error::InferenceError;

use super::stat_slot::StatSlot;

/// Names `highest_stat` as the maximum IV, with `IV % 5 == remainder`
///
/// Ties between equal IVs are broken in-game by the personality value,
/// which this crate does not model: a slot whose IV equals the highest
/// stat's IV is never excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristic {
    highest_stat: StatSlot,
    remainder: u8,
}

/// In-game phrase for each characteristic, by remainder then slot
#[rustfmt::skip]
static PHRASES: [[&str; 6]; 5] = [
    ["Loves to eat", "Proud of its power", "Sturdy body", "Highly curious", "Strong willed", "Likes to run"],
    ["Takes plenty of siestas", "Likes to thrash about", "Capable of taking hits", "Mischievous", "Somewhat vain", "Alert to sounds"],
    ["Nods off a lot", "A little quick tempered", "Highly persistent", "Thoroughly cunning", "Strongly defiant", "Impetuous and silly"],
    ["Scatters things often", "Likes to fight", "Good endurance", "Often lost in thought", "Hates to lose", "Somewhat of a clown"],
    ["Likes to relax", "Quick tempered", "Good perseverance", "Very finicky", "Somewhat stubborn", "Quick to flee"],
];

/// Older phrasings that mean the same thing
static LEGACY_PHRASES: [(&str, StatSlot, u8); 2] = [
    ("Often dozes off", StatSlot::Hp, 1),
    ("Often scatters things", StatSlot::Hp, 2),
];

fn normalize(phrase: &str) -> String {
    phrase
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Characteristic {
    pub const MODULUS: u8 = 5;

    pub fn new(highest_stat: StatSlot, remainder: u8) -> Result<Self, InferenceError> {
        InferenceError::check_range(
            "characteristic remainder",
            remainder as i64,
            0,
            Self::MODULUS as i64 - 1,
        )?;
        Ok(Self {
            highest_stat,
            remainder,
        })
    }

    pub fn highest_stat(&self) -> StatSlot {
        self.highest_stat
    }

    pub fn remainder(&self) -> u8 {
        self.remainder
    }

    /// Whether `iv` has this characteristic's residue
    pub fn matches_residue(&self, iv: u8) -> bool {
        iv % Self::MODULUS == self.remainder
    }

    /// Look up a characteristic by its in-game phrase (case and punctuation
    /// insensitive)
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let wanted = normalize(phrase);
        for (remainder, row) in PHRASES.iter().enumerate() {
            for (slot, candidate) in StatSlot::ALL.iter().zip(row.iter()) {
                if normalize(candidate) == wanted {
                    return Some(Self {
                        highest_stat: *slot,
                        remainder: remainder as u8,
                    });
                }
            }
        }
        LEGACY_PHRASES
            .iter()
            .find(|(candidate, _, _)| normalize(candidate) == wanted)
            .map(|(_, slot, remainder)| Self {
                highest_stat: *slot,
                remainder: *remainder,
            })
    }

    pub fn phrase(&self) -> &'static str {
        PHRASES[self.remainder as usize][self.highest_stat as usize]
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} % {} == {})",
            self.phrase(),
            self.highest_stat,
            Self::MODULUS,
            self.remainder
        )
    }
}
