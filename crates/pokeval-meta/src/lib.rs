//! Species metadata: base stats, evolution costs and family links.
//!
//! - [`species`]: identifiers and the per-species record
//! - [`registry`]: the [`SpeciesRegistry`] lookup trait and the in-memory [`SpeciesTable`]
//!
//! Lookups never fall back to defaults: a species or family missing from the
//! registry is a [`MetaLookupError`], since CP math on absent base stats is
//! meaningless.

pub use self::{registry::*, species::*};

pub mod registry;
pub mod species;
