//! The creature record and the metrics computed from it alone.
//!
//! Metrics that need species data live next to the code that resolves it:
//! see [`potential`](crate::potential) and [`evolution`](crate::evolution).

use pokeval_cp::power_up;
use pokeval_meta::{SpeciesId, SpeciesMeta};
use serde::{Deserialize, Serialize};

/// Highest possible [`CreatureRecord::iv_score`].
pub const MAX_IV_SCORE: u32 = 3 * pokeval_cp::cp::MAX_INDIVIDUAL_VALUE;

/// Snapshot of a single creature as reported by the game client.
///
/// The evaluator only reads records; it never changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub species: SpeciesId,
    pub individual_attack: u32,
    pub individual_defense: u32,
    pub individual_stamina: u32,
    /// Current hit points.
    pub stamina: u32,
    pub stamina_max: u32,
    pub cp: u32,
    pub cp_multiplier: f64,
    /// Multiplier gained from power-ups on top of [`cp_multiplier`](Self::cp_multiplier).
    #[serde(default)]
    pub additional_cp_multiplier: f64,
    /// Number of power-ups applied so far.
    #[serde(default)]
    pub num_upgrades: u32,
    /// Incubator holding this egg; empty when the record is not an incubating egg.
    #[serde(default)]
    pub egg_incubator_id: String,
    /// Distance walked when the egg hatches, in km.
    #[serde(default)]
    pub egg_km_walked_target: f64,
}

impl CreatureRecord {
    /// Sum of the three individual rolls, in `0..=45`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pokeval_evaluator::CreatureRecord;
    /// # use pokeval_meta::SpeciesId;
    /// let creature = CreatureRecord {
    ///     species: SpeciesId(16),
    ///     individual_attack: 7,
    ///     individual_defense: 8,
    ///     individual_stamina: 7,
    ///     stamina: 30,
    ///     stamina_max: 30,
    ///     cp: 210,
    ///     cp_multiplier: 0.597_400_01,
    ///     additional_cp_multiplier: 0.0,
    ///     num_upgrades: 0,
    ///     egg_incubator_id: String::new(),
    ///     egg_km_walked_target: 0.0,
    /// };
    /// assert_eq!(creature.iv_score(), 22);
    /// assert_eq!(creature.iv_percentage(), 48);
    /// ```
    #[must_use]
    pub fn iv_score(&self) -> u32 {
        self.individual_attack + self.individual_defense + self.individual_stamina
    }

    /// IV score as a percentage of [`MAX_IV_SCORE`], truncated.
    #[must_use]
    pub fn iv_percentage(&self) -> u32 {
        self.iv_score() * 100 / MAX_IV_SCORE
    }

    /// One-line summary of the individual rolls for display.
    #[must_use]
    pub fn stats_summary(&self) -> String {
        format!(
            "Stamina: {} | Attack: {} | Defense: {} | IV: {} ({}%)",
            self.individual_stamina,
            self.individual_attack,
            self.individual_defense,
            self.iv_score(),
            self.iv_percentage(),
        )
    }

    #[must_use]
    pub fn is_fainted(&self) -> bool {
        self.stamina == 0
    }

    #[must_use]
    pub fn is_injured(&self) -> bool {
        !self.is_fainted() && self.stamina < self.stamina_max
    }

    /// Whether this record is an egg sitting in an incubator.
    #[must_use]
    pub fn is_incubating(&self) -> bool {
        !self.egg_incubator_id.trim().is_empty()
    }

    /// Base plus additional CP multiplier.
    #[must_use]
    pub fn combined_cp_multiplier(&self) -> f64 {
        self.cp_multiplier + self.additional_cp_multiplier
    }

    /// Estimated CP after one more power-up.
    #[must_use]
    pub fn cp_after_power_up(&self) -> u32 {
        power_up::cp_after_power_up(self.cp, self.combined_cp_multiplier())
    }

    #[must_use]
    pub fn candy_cost_for_next_power_up(&self) -> u32 {
        power_up::candy_cost_for_power_up(self.combined_cp_multiplier(), self.num_upgrades)
    }

    #[must_use]
    pub fn stardust_cost_for_next_power_up(&self) -> u32 {
        power_up::stardust_cost_for_power_up(self.combined_cp_multiplier(), self.num_upgrades)
    }

    /// CP this creature would have as `species`, at its current multiplier.
    pub(crate) fn cp_as(&self, species: &SpeciesMeta) -> u32 {
        let (attack, defense, stamina) = self.effective_stats_as(species);
        pokeval_cp::cp::cp(attack, defense, stamina, self.combined_cp_multiplier())
    }

    /// Max CP this creature could reach as `species` for a trainer of `player_level`.
    pub(crate) fn max_cp_as(&self, species: &SpeciesMeta, player_level: u32) -> u32 {
        let (attack, defense, stamina) = self.effective_stats_as(species);
        pokeval_cp::cp::max_cp_for_player(attack, defense, stamina, player_level)
    }

    fn effective_stats_as(&self, species: &SpeciesMeta) -> (u32, u32, u32) {
        species.effective_stats(
            self.individual_attack,
            self.individual_defense,
            self.individual_stamina,
        )
    }
}
