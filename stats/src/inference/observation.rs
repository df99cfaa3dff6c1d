//! Inputs to IV inference

use crate::types::{Characteristic, Nature, StatSlot, StatTable};

/// What is known about one stat of the creature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatObservation {
    /// Visible stat value
    pub value: u16,

    /// Effort value (0-252), contributes `effort / 4`
    pub effort: u8,

    /// IV already known from elsewhere
    pub known_iv: Option<u8>,
}

impl StatObservation {
    pub fn new(value: u16) -> Self {
        Self {
            value,
            effort: 0,
            known_iv: None,
        }
    }

    pub fn with_effort(mut self, effort: u8) -> Self {
        self.effort = effort;
        self
    }

    pub fn with_known_iv(mut self, iv: u8) -> Self {
        self.known_iv = Some(iv);
        self
    }
}

impl From<u16> for StatObservation {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}

/// Everything observed about one creature
///
/// Built up with the `with_*`/`observe*` methods and passed to
/// [`infer_ivs`](super::infer_ivs).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureObservation {
    /// Species base stats (0-256 each)
    pub base_stats: StatTable<u16>,

    /// Level (1-100), required for inference
    pub level: Option<u8>,

    /// Per-slot observations, all required for inference
    pub stats: StatTable<Option<StatObservation>>,

    /// Nature, if known
    pub nature: Option<Nature>,

    /// Characteristic, if known
    pub characteristic: Option<Characteristic>,
}

impl CreatureObservation {
    pub fn new(base_stats: StatTable<u16>) -> Self {
        Self {
            base_stats,
            level: None,
            stats: StatTable::default(),
            nature: None,
            characteristic: None,
        }
    }

    pub fn at_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    /// Record the visible value of one stat, with no effort
    pub fn observe(self, slot: StatSlot, value: u16) -> Self {
        self.observe_with(slot, StatObservation::new(value))
    }

    pub fn observe_with(mut self, slot: StatSlot, observation: StatObservation) -> Self {
        self.stats[slot] = Some(observation);
        self
    }

    /// Record all six visible values in [`StatSlot::ALL`] order
    pub fn observe_all(mut self, values: [u16; 6]) -> Self {
        for (slot, value) in StatSlot::ALL.into_iter().zip(values) {
            self.stats[slot] = Some(StatObservation::new(value));
        }
        self
    }

    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    pub fn with_characteristic(mut self, characteristic: Characteristic) -> Self {
        self.characteristic = Some(characteristic);
        self
    }
}

/// Tuning for [`infer_ivs_with`](super::infer_ivs_with)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InferenceOptions {
    /// Report the five neutral natures as one entry when the nature is
    /// unknown and no characteristic is given
    pub collapse_neutral_natures: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            collapse_neutral_natures: true,
        }
    }
}
