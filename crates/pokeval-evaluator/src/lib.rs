//! Creature evaluation for an inventory-managing bot.
//!
//! Given a creature from the game inventory, this crate answers three kinds of
//! questions:
//!
//! 1. **Quality** ([`creature`]) - individual-value score and percentage, health
//!    and incubation state, what the next power-up gives and costs.
//!
//! 2. **Potential** ([`potential`], [`evolution`]) - max CP at a trainer level,
//!    after evolving, and after evolving and powering up fully.
//!
//! 3. **Transfer** ([`transfer`]) - whether to release the creature, given the
//!    configured [`settings`], a per-species seen-count and the candy pool.
//!
//! # Architecture
//!
//! ```text
//! TransferEvaluator (release or keep?)
//!     ↓ uses
//! CreatureRecord (IV %, CP, potential)
//!     ↓ uses
//! pokeval-cp (CP curve)  +  SpeciesRegistry (base stats, families)
//! ```
//!
//! Species metadata is passed in as any [`SpeciesRegistry`](pokeval_meta::SpeciesRegistry)
//! rather than held globally, so tests and callers choose the data set.
//!
//! # Supporting Modules
//!
//! - [`egg`] - egg hatching progress read from a [`GameInventory`]
//!
//! # Example: Evaluating a Creature
//!
//! ```
//! use pokeval_evaluator::CreatureRecord;
//! use pokeval_meta::{SpeciesId, SpeciesTable};
//!
//! let registry = SpeciesTable::from_json_str(
//!     r#"[
//!         { "id": 16, "name": "PIDGEY", "base_attack": 85, "base_defense": 76,
//!           "base_stamina": 80, "candy_to_evolve": 12, "family": 16 },
//!         { "id": 17, "name": "PIDGEOTTO", "base_attack": 117, "base_defense": 108,
//!           "base_stamina": 126, "candy_to_evolve": 50, "family": 16, "parent": 16 },
//!         { "id": 18, "name": "PIDGEOT", "base_attack": 166, "base_defense": 157,
//!           "base_stamina": 166, "family": 16, "parent": 17 }
//!     ]"#,
//! )?;
//!
//! let pidgey = CreatureRecord {
//!     species: SpeciesId(16),
//!     individual_attack: 15,
//!     individual_defense: 15,
//!     individual_stamina: 15,
//!     stamina: 40,
//!     stamina_max: 40,
//!     cp: 300,
//!     cp_multiplier: 0.597_400_01,
//!     additional_cp_multiplier: 0.0,
//!     num_upgrades: 0,
//!     egg_incubator_id: String::new(),
//!     egg_km_walked_target: 0.0,
//! };
//!
//! assert_eq!(pidgey.iv_percentage(), 100);
//! assert_eq!(pidgey.fully_evolved_species(&registry)?, SpeciesId(18));
//! assert!(pidgey.cp_after_full_evolution(&registry)? > pidgey.cp);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{creature::*, egg::*, settings::*, transfer::*};

pub mod creature;
pub mod egg;
pub mod evolution;
pub mod potential;
pub mod settings;
pub mod transfer;

#[cfg(test)]
mod testing;
