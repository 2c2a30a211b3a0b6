//! CP estimates for evolving a creature.
//!
//! Evolution keeps the individual rolls and the CP multiplier and swaps in the
//! base stats of the evolved species, so every estimate here is "the CP formula
//! with another species' base stats".
//!
//! # Eevee
//!
//! Eevee's family branches into three final forms. For max-CP purposes Eevee is
//! treated as evolving into Flareon, and each of the three final forms counts as
//! fully evolved. The evolve-CP estimates short-circuit on the final forms but
//! resolve Eevee itself through the registry like any other species.
//!
//! # One-step estimate
//!
//! [`CreatureRecord::cp_after_one_evolution_step`] looks at the final form `F`
//! of the family and its parent `P`:
//!
//! - a creature at `P` is estimated with `F`'s base stats;
//! - any other non-final creature is estimated with `P`'s base stats.
//!
//! For a three-stage family this means the middle stage looks ahead to the final
//! form while the first stage only looks ahead to the middle stage.

use pokeval_cp::level::MAX_PLAYER_LEVEL;
use pokeval_meta::{MetaLookupError, SpeciesId, SpeciesMeta, SpeciesRegistry};

use crate::creature::CreatureRecord;

/// Final forms of Eevee, each treated as fully evolved.
pub const EEVEE_FINAL_FORMS: [SpeciesId; 3] =
    [SpeciesId::VAPOREON, SpeciesId::JOLTEON, SpeciesId::FLAREON];

impl CreatureRecord {
    /// The species this creature ends up as when evolved as far as possible.
    pub fn fully_evolved_species<R>(&self, registry: &R) -> Result<SpeciesId, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        if EEVEE_FINAL_FORMS.contains(&self.species) {
            return Ok(self.species);
        }
        if self.species == SpeciesId::EEVEE {
            return Ok(SpeciesId::FLAREON);
        }
        let family = registry.meta(self.species)?.family;
        registry.highest_for_family(family)
    }

    /// Max CP for a trainer of `player_level` after evolving fully.
    pub fn max_cp_fully_evolved_at_level<R>(
        &self,
        registry: &R,
        player_level: u32,
    ) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        let target = registry.meta(self.fully_evolved_species(registry)?)?;
        Ok(self.max_cp_as(target, player_level))
    }

    /// Max CP after evolving fully and powering up to the highest level.
    pub fn cp_fully_evolved_and_max_power_up<R>(&self, registry: &R) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        self.max_cp_fully_evolved_at_level(registry, MAX_PLAYER_LEVEL)
    }

    /// Estimated CP right after the next evolution, at the current level.
    ///
    /// Returns the current CP for final forms. See the [module docs](self)
    /// for which base stats are used.
    pub fn cp_after_one_evolution_step<R>(&self, registry: &R) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        let Some(final_form) = self.evolvable_final_form(registry)? else {
            return Ok(self.cp);
        };
        let second_highest = registry.parent_of(final_form.id)?;
        if self.species == second_highest {
            return Ok(self.cp_as(final_form));
        }
        Ok(self.cp_as(registry.meta(second_highest)?))
    }

    /// Estimated CP after evolving into the final form, at the current level.
    ///
    /// Returns the current CP for final forms.
    pub fn cp_after_full_evolution<R>(&self, registry: &R) -> Result<u32, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        let Some(final_form) = self.evolvable_final_form(registry)? else {
            return Ok(self.cp);
        };
        Ok(self.cp_as(final_form))
    }

    /// Final form of this creature's family, or `None` if it is already there.
    fn evolvable_final_form<'r, R>(
        &self,
        registry: &'r R,
    ) -> Result<Option<&'r SpeciesMeta>, MetaLookupError>
    where
        R: SpeciesRegistry + ?Sized,
    {
        if EEVEE_FINAL_FORMS.contains(&self.species) {
            return Ok(None);
        }
        let family = registry.meta(self.species)?.family;
        let highest = registry.highest_for_family(family)?;
        if highest == self.species {
            return Ok(None);
        }
        registry.meta(highest).map(Some)
    }
}
