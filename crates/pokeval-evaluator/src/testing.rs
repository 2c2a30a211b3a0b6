//! Shared fixtures for unit tests.

use pokeval_meta::{SpeciesId, SpeciesRegistry as _, SpeciesTable};

use crate::creature::CreatureRecord;

const SPECIES_JSON: &str = include_str!("fixtures/species.json");

/// Level 20 multiplier used by fixture creatures.
pub(crate) const LEVEL_20_MULTIPLIER: f64 = 0.597_400_01;

pub(crate) fn registry() -> SpeciesTable {
    SpeciesTable::from_json_str(SPECIES_JSON).unwrap()
}

/// A healthy level 20 creature whose CP matches its species and rolls.
pub(crate) fn creature(species: u16, (attack, defense, stamina): (u32, u32, u32)) -> CreatureRecord {
    let mut creature = CreatureRecord {
        species: SpeciesId(species),
        individual_attack: attack,
        individual_defense: defense,
        individual_stamina: stamina,
        stamina: 50,
        stamina_max: 50,
        cp: 0,
        cp_multiplier: LEVEL_20_MULTIPLIER,
        additional_cp_multiplier: 0.0,
        num_upgrades: 0,
        egg_incubator_id: String::new(),
        egg_km_walked_target: 0.0,
    };
    if let Ok(meta) = registry().meta(creature.species) {
        creature.cp = creature.cp_as(meta);
    }
    creature
}
