//! Egg hatch progress, read against the game client's live inventory.

use serde::{Deserialize, Serialize};

use crate::creature::CreatureRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EggIncubator {
    pub id: String,
    /// Player walked distance at which the egg inside hatches, in km.
    pub target_km_walked: f64,
}

/// The parts of the game client's inventory egg progress depends on.
pub trait GameInventory {
    fn egg_incubators(&self) -> &[EggIncubator];

    /// Total distance the player has walked, in km.
    fn player_km_walked(&self) -> f64;
}

/// Inventory captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub egg_incubators: Vec<EggIncubator>,
    pub player_km_walked: f64,
}

impl GameInventory for InventorySnapshot {
    fn egg_incubators(&self) -> &[EggIncubator] {
        &self.egg_incubators
    }

    fn player_km_walked(&self) -> f64 {
        self.player_km_walked
    }
}

impl CreatureRecord {
    /// Distance already walked towards hatching this egg, in km.
    ///
    /// Returns 0 when the record is not incubating, and also when its incubator
    /// is missing from `inventory`.
    ///
    /// The incubator's hatch target and the player's walked distance are two
    /// separate snapshots; the result is
    /// `egg target - (incubator target - player walked)`, evaluated as written.
    #[must_use]
    pub fn egg_progress_km<I>(&self, inventory: &I) -> f64
    where
        I: GameInventory + ?Sized,
    {
        if !self.is_incubating() {
            return 0.0;
        }
        let Some(incubator) = inventory
            .egg_incubators()
            .iter()
            .find(|i| i.id == self.egg_incubator_id)
        else {
            log::trace!(
                "incubator {} not in inventory, reporting no progress",
                self.egg_incubator_id
            );
            return 0.0;
        };
        self.egg_km_walked_target - (incubator.target_km_walked - inventory.player_km_walked())
    }
}
