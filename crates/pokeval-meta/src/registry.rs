//! Species lookups.
//!
//! [`SpeciesRegistry`] is the seam the evaluator reads species data through.
//! [`SpeciesTable`] is the in-memory implementation, built from a list of
//! [`SpeciesMeta`] records (typically parsed from JSON).
//!
//! # Example
//!
//! ```
//! use pokeval_meta::{FamilyId, SpeciesId, SpeciesRegistry, SpeciesTable};
//!
//! let table = SpeciesTable::from_json_str(
//!     r#"[
//!         { "id": 19, "name": "RATTATA", "base_attack": 103, "base_defense": 70,
//!           "base_stamina": 60, "candy_to_evolve": 25, "family": 19 },
//!         { "id": 20, "name": "RATICATE", "base_attack": 161, "base_defense": 144,
//!           "base_stamina": 110, "family": 19, "parent": 19 }
//!     ]"#,
//! )?;
//!
//! assert_eq!(table.highest_for_family(FamilyId(19))?, SpeciesId(20));
//! assert_eq!(table.meta(SpeciesId(19))?.candy_to_evolve, 25);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    io::Read,
};

use serde::{Deserialize, Serialize};

use crate::species::{FamilyId, SpeciesId, SpeciesMeta};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MetaLookupError {
    #[display("no metadata for species {species}")]
    UnknownSpecies { species: SpeciesId },
    #[display("no species registered for {family}")]
    UnknownFamily { family: FamilyId },
    #[display("species {species} has no parent in its family")]
    NoParent { species: SpeciesId },
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum SpeciesTableError {
    #[display("failed to parse species table")]
    Parse(serde_json::Error),
    #[display("species {species} is listed more than once")]
    DuplicateSpecies { species: SpeciesId },
    #[display("parent {parent} of species {species} is not a member of {family}")]
    ParentOutsideFamily {
        species: SpeciesId,
        parent: SpeciesId,
        family: FamilyId,
    },
}

/// Read-only species metadata lookups.
pub trait SpeciesRegistry: fmt::Debug + Send + Sync {
    /// Metadata for a species.
    fn meta(&self, species: SpeciesId) -> Result<&SpeciesMeta, MetaLookupError>;

    /// The most evolved member of a family.
    fn highest_for_family(&self, family: FamilyId) -> Result<SpeciesId, MetaLookupError>;

    /// Looks a species up by its registered name (case-insensitive).
    fn species_by_name(&self, name: &str) -> Option<SpeciesId>;

    /// Immediate predecessor of a species within its family.
    fn parent_of(&self, species: SpeciesId) -> Result<SpeciesId, MetaLookupError> {
        self.meta(species)?
            .parent
            .ok_or(MetaLookupError::NoParent { species })
    }
}

/// In-memory species registry.
///
/// The highest member of each family is resolved once at construction: among
/// the members no other member evolves from, the one with the greatest dex
/// number. Branching families (several final forms) thus resolve to their
/// last-numbered final form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SpeciesMeta>", into = "Vec<SpeciesMeta>")]
pub struct SpeciesTable {
    species: BTreeMap<SpeciesId, SpeciesMeta>,
    highest: BTreeMap<FamilyId, SpeciesId>,
}

impl SpeciesTable {
    /// Builds a table, validating ids and family links.
    pub fn new<I>(species: I) -> Result<Self, SpeciesTableError>
    where
        I: IntoIterator<Item = SpeciesMeta>,
    {
        let mut table = BTreeMap::new();
        for meta in species {
            let id = meta.id;
            if table.insert(id, meta).is_some() {
                return Err(SpeciesTableError::DuplicateSpecies { species: id });
            }
        }

        let mut parents = BTreeSet::new();
        for meta in table.values() {
            let Some(parent) = meta.parent else {
                continue;
            };
            if table.get(&parent).is_none_or(|p| p.family != meta.family) {
                return Err(SpeciesTableError::ParentOutsideFamily {
                    species: meta.id,
                    parent,
                    family: meta.family,
                });
            }
            parents.insert(parent);
        }

        // Ascending iteration: later (higher) final forms overwrite earlier ones.
        let mut highest = BTreeMap::new();
        for meta in table.values().filter(|m| !parents.contains(&m.id)) {
            highest.insert(meta.family, meta.id);
        }

        Ok(Self {
            species: table,
            highest,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, SpeciesTableError> {
        serde_json::from_str(json).map_err(SpeciesTableError::Parse)
    }

    pub fn from_reader<R>(reader: R) -> Result<Self, SpeciesTableError>
    where
        R: Read,
    {
        serde_json::from_reader(reader).map_err(SpeciesTableError::Parse)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl TryFrom<Vec<SpeciesMeta>> for SpeciesTable {
    type Error = SpeciesTableError;

    fn try_from(species: Vec<SpeciesMeta>) -> Result<Self, Self::Error> {
        Self::new(species)
    }
}

impl From<SpeciesTable> for Vec<SpeciesMeta> {
    fn from(table: SpeciesTable) -> Self {
        table.species.into_values().collect()
    }
}

impl SpeciesRegistry for SpeciesTable {
    fn meta(&self, species: SpeciesId) -> Result<&SpeciesMeta, MetaLookupError> {
        self.species
            .get(&species)
            .ok_or(MetaLookupError::UnknownSpecies { species })
    }

    fn highest_for_family(&self, family: FamilyId) -> Result<SpeciesId, MetaLookupError> {
        self.highest
            .get(&family)
            .copied()
            .ok_or(MetaLookupError::UnknownFamily { family })
    }

    fn species_by_name(&self, name: &str) -> Option<SpeciesId> {
        self.species
            .values()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .map(|m| m.id)
    }
}
