//! Stat formulas and IV inference for the main-series games.
//!
//! Given a creature's species base stats, level and visible stat values, this
//! crate works out which individual values (IVs) could have produced them.
//!
//! # Overview
//!
//! ```text
//! ivfind-interval (exact interval arithmetic)
//!        │
//!        ▼
//! ivfind-stats (formulas + inference) ← THIS CRATE
//!        │
//!        └─> ivfind-dex (species data, catch odds)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`StatSlot`], [`StatTable`] - the six stats and a value per stat
//! - [`Nature`], [`Multiplier`] - the 25 natures and their stat modifiers
//! - [`Characteristic`] - highest-IV hint shown on the summary screen
//!
//! ## Inference
//! - [`CreatureObservation`] - everything observed about one creature
//! - [`infer_ivs`] - IV sets per feasible nature
//! - [`InferenceError`] - why no answer exists
//!
//! # Example Usage
//!
//! ```
//! use ivfind_stats::{CreatureObservation, Nature, StatSlot, StatTable, infer_ivs};
//!
//! let magikarp = CreatureObservation::new(StatTable::new([20, 10, 55, 15, 20, 80]))
//!     .at_level(25)
//!     .observe_all([51, 17, 39, 15, 18, 51])
//!     .with_nature(Nature::Adamant);
//!
//! let sets = infer_ivs(&magikarp).unwrap();
//! let atk = &sets[&Nature::Adamant][StatSlot::Atk];
//! assert_eq!(atk.iter().copied().collect::<Vec<_>>(), vec![24, 25, 26, 27]);
//! ```

pub mod error;
pub mod formula;
pub mod inference;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::{InferenceError, NatureRejection, RejectionReason};
pub use formula::{StatInputs, infer_iv_candidates, infer_iv_interval, stat_value, stat_value_range};
pub use inference::{
    CreatureObservation, InferenceOptions, IvSet, IvSets, NatureIvSets, StatObservation,
    apply_characteristic, infer_ivs, infer_ivs_with, possible_ivs,
};
pub use types::{Characteristic, Multiplier, Nature, StatSlot, StatTable};

pub use ivfind_interval::{Interval, IntervalError, Ratio};
