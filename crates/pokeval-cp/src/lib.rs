//! CP curve utilities: the game's level multiplier table and the formulas built on it.
//!
//! # Modules
//!
//! - [`level`]: level ↔ CP multiplier conversions and level caps
//! - [`cp`]: combat power from effective stats, max CP for a trainer level
//! - [`power_up`]: CP after a power-up and the candy/stardust cost of the next one
//!
//! All functions are pure. Effective stats passed to the CP formulas are
//! `base stat + individual roll`; callers combine them.
//!
//! # Example
//!
//! ```
//! use pokeval_cp::{cp, level};
//!
//! let multiplier = level::cp_multiplier_for_level(20.0).unwrap();
//! let now = cp::cp(100, 91, 95, multiplier);
//! let best = cp::max_cp(100, 91, 95);
//! assert!(now < best);
//! ```

pub mod cp;
pub mod level;
pub mod power_up;
