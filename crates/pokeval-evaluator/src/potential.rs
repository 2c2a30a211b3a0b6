//! How strong a creature can get without evolving.

use pokeval_cp::{cp::MAX_INDIVIDUAL_VALUE, level::MAX_PLAYER_LEVEL};
use pokeval_meta::{MetaLookupError, SpeciesRegistry};

use crate::creature::CreatureRecord;

impl CreatureRecord {
    /// Max CP this creature can reach for a trainer of `player_level`.
    pub fn max_cp_at_level<R>(&self, registry: &R, player_level: u32) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        let meta = registry.meta(self.species)?;
        Ok(self.max_cp_as(meta, player_level))
    }

    /// Max CP this creature can reach at the highest trainer level.
    pub fn max_cp<R>(&self, registry: &R) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        self.max_cp_at_level(registry, MAX_PLAYER_LEVEL)
    }

    /// Max CP for the current trainer level.
    ///
    /// Not implemented: the trainer level is not an input to the evaluator yet,
    /// so this is always 0 and [`cp_percent_of_cap`](Self::cp_percent_of_cap)
    /// is always `None`.
    #[must_use]
    pub fn max_cp_current_level(&self) -> u32 {
        0
    }

    /// Current CP as a truncated percentage of [`max_cp_current_level`](Self::max_cp_current_level).
    ///
    /// `None` when the cap is 0.
    #[must_use]
    pub fn cp_percent_of_cap(&self) -> Option<u32> {
        let cap = self.max_cp_current_level();
        if cap == 0 {
            return None;
        }
        let percent = f64::from(self.cp) / f64::from(cap) * 100.0;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = percent as u32;
        Some(percent)
    }

    /// Max CP of this creature's species with perfect rolls at the highest level.
    pub fn absolute_max_cp<R>(&self, registry: &R) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        let meta = registry.meta(self.species)?;
        let (attack, defense, stamina) = meta.effective_stats(
            MAX_INDIVIDUAL_VALUE,
            MAX_INDIVIDUAL_VALUE,
            MAX_INDIVIDUAL_VALUE,
        );
        Ok(pokeval_cp::cp::max_cp(attack, defense, stamina))
    }
}
