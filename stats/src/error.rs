use ivfind_interval::IntervalError;
use thiserror::Error;

use crate::types::{Multiplier, Nature, StatSlot};

/// Why one nature hypothesis was dropped during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectionReason {
    /// The nature needs `multiplier` on `slot`, which no IV can satisfy
    MultiplierImpossible { slot: StatSlot, multiplier: Multiplier },

    /// The characteristic filter left `slot` without candidates
    CharacteristicConflict { slot: StatSlot },
}

/// One rejected nature and the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NatureRejection {
    pub nature: Nature,
    pub reason: RejectionReason,
}

impl std::fmt::Display for NatureRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            RejectionReason::MultiplierImpossible { slot, multiplier } => {
                write!(f, "{}: {} impossible with multiplier {}", self.nature, slot, multiplier)
            }
            RejectionReason::CharacteristicConflict { slot } => {
                write!(f, "{}: characteristic empties {}", self.nature, slot)
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InferenceError {
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("level must be specified")]
    MissingLevel,

    #[error("no observation for {0}")]
    MissingObservation(StatSlot),

    #[error("HP can not have a nature multiplier")]
    MultiplierOnHp,

    #[error("calculated {slot} IVs are impossible: {reason}")]
    ImpossibleStat {
        slot: StatSlot,
        #[source]
        reason: IntervalError,
    },

    #[error("characteristic leaves no {slot} IVs for nature {nature}")]
    CharacteristicConflict { nature: Nature, slot: StatSlot },

    #[error("interval arithmetic failed: {0}")]
    Arithmetic(#[from] IntervalError),

    #[error("no nature is consistent with the observed stats ({} rejected)", .rejections.len())]
    NoFeasibleNature { rejections: Vec<NatureRejection> },
}

impl InferenceError {
    pub(crate) fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<(), Self> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(InferenceError::OutOfRange {
                field,
                value,
                min,
                max,
            })
        }
    }
}
