use serde::{Deserialize, Serialize};

/// National dex number of a species.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("#{_0:03}")]
pub struct SpeciesId(pub u16);

impl SpeciesId {
    pub const EEVEE: Self = Self(133);
    pub const VAPOREON: Self = Self(134);
    pub const JOLTEON: Self = Self(135);
    pub const FLAREON: Self = Self(136);
}

/// Evolution family, identified by the dex number of its base species.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("family #{_0:03}")]
pub struct FamilyId(pub u16);

/// Static per-species data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesMeta {
    pub id: SpeciesId,
    pub name: String,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_stamina: u32,
    /// Candy needed to evolve into the next family member; 0 for final forms.
    #[serde(default)]
    pub candy_to_evolve: u32,
    pub family: FamilyId,
    /// Immediate predecessor in the family, `None` for the base species.
    #[serde(default)]
    pub parent: Option<SpeciesId>,
}

impl SpeciesMeta {
    /// Effective stats for the given individual rolls, as `(attack, defense, stamina)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pokeval_meta::{FamilyId, SpeciesId, SpeciesMeta};
    ///
    /// let pidgey = SpeciesMeta {
    ///     id: SpeciesId(16),
    ///     name: "PIDGEY".to_owned(),
    ///     base_attack: 85,
    ///     base_defense: 76,
    ///     base_stamina: 80,
    ///     candy_to_evolve: 12,
    ///     family: FamilyId(16),
    ///     parent: None,
    /// };
    /// assert_eq!(pidgey.effective_stats(15, 15, 15), (100, 91, 95));
    /// ```
    #[must_use]
    pub fn effective_stats(&self, attack: u32, defense: u32, stamina: u32) -> (u32, u32, u32) {
        (
            self.base_attack + attack,
            self.base_defense + defense,
            self.base_stamina + stamina,
        )
    }
}
