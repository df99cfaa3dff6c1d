//! Species data and catch odds on top of `ivfind-stats`.
//!
//! - [`Species`] - base stats and catch rate for the bundled species
//! - [`capture_probability`] - chance one throw captures the target
//!
//! ```
//! use ivfind_dex::Species;
//! use ivfind_stats::{Nature, StatSlot, infer_ivs};
//!
//! let obs = Species::find("Magikarp")
//!     .unwrap()
//!     .observe(25)
//!     .observe_all([51, 17, 39, 15, 18, 51])
//!     .with_nature(Nature::Adamant);
//! let sets = infer_ivs(&obs).unwrap();
//! assert_eq!(sets[&Nature::Adamant][StatSlot::SpAtk].len(), 4);
//! ```

pub mod catch;
pub mod species;

pub use catch::{CatchError, CatchParams, capture_probability};
pub use species::{SPECIES, Species};
