//! IV inference from observed stats
//!
//! Each slot's observed value is inverted to an IV interval per nature
//! multiplier, optionally narrowed by a known IV and a characteristic. When
//! the nature is unknown every nature is tried and the consistent ones are
//! reported side by side.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Nature, StatTable};

mod engine;
mod filter;
mod observation;

pub use engine::{infer_ivs, infer_ivs_with, possible_ivs};
pub use filter::apply_characteristic;
pub use observation::{CreatureObservation, InferenceOptions, StatObservation};

/// IVs still possible for one slot
pub type IvSet = BTreeSet<u8>;

/// IVs still possible for every slot under one nature
pub type NatureIvSets = StatTable<IvSet>;

/// Feasible natures and their IV sets, in catalog order
pub type IvSets = BTreeMap<Nature, NatureIvSets>;
