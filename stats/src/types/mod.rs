//! Domain types for stat inference

mod characteristic;
mod nature;
mod stat_slot;

pub use characteristic::Characteristic;
pub use nature::{Multiplier, Nature};
pub use stat_slot::{StatSlot, StatTable};
