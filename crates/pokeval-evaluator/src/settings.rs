//! Transfer rule configuration.
//!
//! Settings deserialize from the bot's configuration format, where every
//! numeric threshold uses `-1` to mean "disabled":
//!
//! ```
//! use pokeval_evaluator::settings::{Threshold, TransferSettings};
//! use pokeval_meta::SpeciesId;
//!
//! let settings: TransferSettings = serde_json::from_str(
//!     r#"{
//!         "obligatory_transfer": [13, 16],
//!         "min_iv_percentage": 60,
//!         "min_cp": -1,
//!         "max_per_species": 3
//!     }"#,
//! )?;
//!
//! assert!(settings.obligatory_transfer.contains(&SpeciesId(16)));
//! assert_eq!(settings.min_iv_percentage, Threshold::Value(60));
//! assert_eq!(settings.min_cp, Threshold::Disabled);
//! assert_eq!(settings.min_cp_percentage, Threshold::Disabled);
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::collections::BTreeSet;

use pokeval_meta::SpeciesId;
use serde::{Deserialize, Serialize};

/// Wire value of [`Threshold::Disabled`].
pub const DISABLED: i64 = -1;

/// A numeric threshold that can be switched off.
///
/// Displays as the configured number, or `-1` when disabled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum Threshold {
    #[default]
    #[display("-1")]
    Disabled,
    #[display("{_0}")]
    Value(u32),
}

impl Threshold {
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self == Self::Disabled
    }

    #[must_use]
    pub fn value(self) -> Option<u32> {
        match self {
            Self::Disabled => None,
            Self::Value(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("threshold must be -1 (disabled) or a non-negative 32-bit value, got {value}")]
pub struct InvalidThresholdError {
    pub value: i64,
}

impl TryFrom<i64> for Threshold {
    type Error = InvalidThresholdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value == DISABLED {
            return Ok(Self::Disabled);
        }
        u32::try_from(value)
            .map(Self::Value)
            .map_err(|_| InvalidThresholdError { value })
    }
}

impl From<Threshold> for i64 {
    fn from(threshold: Threshold) -> Self {
        threshold.value().map_or(DISABLED, i64::from)
    }
}

/// Rules deciding which creatures get transferred.
///
/// Missing fields take the [`Default`] values: keep creatures of at least
/// 80% IV or 400 CP, with every other rule off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferSettings {
    /// Species released whenever they are seen, unless ignored.
    pub obligatory_transfer: BTreeSet<SpeciesId>,
    /// Species never released.
    pub ignored_species: BTreeSet<SpeciesId>,
    pub min_iv_percentage: Threshold,
    pub min_cp: Threshold,
    /// Highest percentage of the trainer-level CP cap still considered low.
    pub min_cp_percentage: Threshold,
    /// How many of one species to keep before releasing extras.
    pub max_per_species: Threshold,
    /// Species whose releases are held back while there is candy to evolve them.
    pub evolve_before_transfer: BTreeSet<SpeciesId>,
    /// Candy reservation for `evolve_before_transfer` is active when above 0.
    pub evolve_stack_limit: u32,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            obligatory_transfer: BTreeSet::new(),
            ignored_species: BTreeSet::new(),
            min_iv_percentage: Threshold::Value(80),
            min_cp: Threshold::Value(400),
            min_cp_percentage: Threshold::Disabled,
            max_per_species: Threshold::Disabled,
            evolve_before_transfer: BTreeSet::new(),
            evolve_stack_limit: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_wire_values() {
        assert_eq!(Threshold::try_from(-1), Ok(Threshold::Disabled));
        assert_eq!(Threshold::try_from(0), Ok(Threshold::Value(0)));
        assert_eq!(Threshold::try_from(90), Ok(Threshold::Value(90)));
        assert_eq!(
            Threshold::try_from(-2),
            Err(InvalidThresholdError { value: -2 })
        );
        assert_eq!(i64::from(Threshold::Disabled), -1);
        assert_eq!(i64::from(Threshold::Value(12)), 12);
    }

    #[test]
    fn test_threshold_display_keeps_sentinel() {
        assert_eq!(Threshold::Disabled.to_string(), "-1");
        assert_eq!(Threshold::Value(400).to_string(), "400");
    }

    #[test]
    fn test_settings_reject_bad_threshold() {
        let err = serde_json::from_str::<TransferSettings>(r#"{ "min_cp": -5 }"#).unwrap_err();
        assert!(
            err.to_string().contains("got -5"),
            "unexpected error message: {err}",
        );
    }

    #[test]
    fn test_settings_defaults_and_round_trip() {
        let settings: TransferSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, TransferSettings::default());

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["min_cp_percentage"], -1);
        assert_eq!(json["min_iv_percentage"], 80);
    }
}
