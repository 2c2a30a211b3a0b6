//! Transfer decision: should the bot release a creature?
//!
//! # Rules
//!
//! Evaluated in order for each creature:
//!
//! 1. **Obligatory** - species in [`obligatory_transfer`] are released.
//! 2. **Ignored** - species in [`ignored_species`] are never released and are
//!    not counted. Nothing below runs for them.
//! 3. **Thresholds** - for species not obligatory:
//!
//!    ```text
//!    iv_too_low = iv% < min_iv_percentage  or  min_iv_percentage disabled
//!    cp_too_low = cp  < min_cp             or  min_cp disabled
//!    in_range   = min_cp_percentage enabled and min_cp_percentage >= cp% of cap
//!    release    = iv_too_low and cp_too_low and (in_range or min_cp_percentage disabled)
//!    ```
//!
//!    A *disabled* IV or CP threshold counts as "too low", so disabling both
//!    releases everything that reaches this rule.
//! 4. **Count** - the species' seen-count is incremented.
//! 5. **Too many** - if still kept and the count exceeds [`max_per_species`],
//!    release.
//! 6. **Evolve stacking** - a release of a species in [`evolve_before_transfer`]
//!    (with [`evolve_stack_limit`] above 0) is cancelled while the shared candy
//!    pool can still evolve every creature of that species seen so far.
//!
//! The candy pool is only read here; whoever performs an evolution decrements it.
//!
//! [`obligatory_transfer`]: TransferSettings::obligatory_transfer
//! [`ignored_species`]: TransferSettings::ignored_species
//! [`max_per_species`]: TransferSettings::max_per_species
//! [`evolve_before_transfer`]: TransferSettings::evolve_before_transfer
//! [`evolve_stack_limit`]: TransferSettings::evolve_stack_limit
//!
//! # Example
//!
//! ```
//! use std::{collections::BTreeMap, sync::atomic::AtomicU32};
//!
//! use pokeval_evaluator::{CreatureRecord, TransferEvaluator, TransferSettings};
//! use pokeval_meta::{SpeciesId, SpeciesTable};
//!
//! let registry = SpeciesTable::default();
//! let mut settings = TransferSettings::default();
//! settings.obligatory_transfer.insert(SpeciesId(16));
//! let evaluator = TransferEvaluator::new(&registry, &settings);
//!
//! let pidgey = CreatureRecord {
//!     species: SpeciesId(16),
//!     individual_attack: 15,
//!     individual_defense: 15,
//!     individual_stamina: 15,
//!     stamina: 40,
//!     stamina_max: 40,
//!     cp: 400,
//!     cp_multiplier: 0.597_400_01,
//!     additional_cp_multiplier: 0.0,
//!     num_upgrades: 0,
//!     egg_incubator_id: String::new(),
//!     egg_km_walked_target: 0.0,
//! };
//!
//! let mut counts = BTreeMap::new();
//! let decision = evaluator.should_transfer(&pidgey, &mut counts, &AtomicU32::new(0))?;
//! assert!(decision.release);
//! assert_eq!(decision.reason.to_string(), "Obligatory transfer");
//! assert_eq!(counts[&SpeciesId(16)], 1);
//! # Ok::<(), pokeval_meta::MetaLookupError>(())
//! ```

use std::{
    collections::BTreeMap,
    fmt,
    sync::atomic::{AtomicU32, Ordering},
};

use pokeval_meta::{MetaLookupError, SpeciesId, SpeciesRegistry};

use crate::{
    creature::CreatureRecord,
    settings::{Threshold, TransferSettings},
};

/// Outcome of [`TransferEvaluator::should_transfer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDecision {
    pub release: bool,
    /// Last rule that set the decision's explanation.
    ///
    /// Cancelled releases and ignored species keep the reason from before the
    /// cancellation (for ignored species, the default [`TransferReason::Obligatory`]).
    pub reason: TransferReason,
}

/// Why a creature was (or would have been) released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferReason {
    Obligatory,
    BelowThresholds {
        min_cp: Threshold,
        min_iv_percentage: Threshold,
        cap: Option<CapShortfall>,
    },
    TooMany,
    NotEnoughCandy {
        candies: u32,
        candy_to_evolve: u32,
        max_to_maintain: u32,
    },
}

/// Detail added to [`TransferReason::BelowThresholds`] when the CP cap rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapShortfall {
    pub max_cp: u32,
    pub achieved_percentage: u32,
    pub min_cp_percentage: u32,
}

impl fmt::Display for TransferReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obligatory => f.write_str("Obligatory transfer"),
            Self::BelowThresholds {
                min_cp,
                min_iv_percentage,
                cap,
            } => {
                write!(f, "CP < {min_cp} and IV < {min_iv_percentage}%")?;
                if let Some(cap) = cap {
                    write!(
                        f,
                        " and CP max {}: achieved {}% <= {}%",
                        cap.max_cp, cap.achieved_percentage, cap.min_cp_percentage
                    )?;
                }
                Ok(())
            }
            Self::TooMany => f.write_str("Too many"),
            Self::NotEnoughCandy {
                candies,
                candy_to_evolve,
                max_to_maintain,
            } => write!(
                f,
                "Not enough candy {candies}/{candy_to_evolve}: max {max_to_maintain}"
            ),
        }
    }
}

/// Applies [`TransferSettings`] to creatures one at a time.
///
/// Running counters are owned by the caller and passed to each call: the
/// per-species seen-count (mutated) and the shared candy pool (read).
#[derive(Debug)]
pub struct TransferEvaluator<'a, R>
where
    R: ?Sized,
{
    registry: &'a R,
    settings: &'a TransferSettings,
}

impl<'a, R> TransferEvaluator<'a, R>
where
    R: SpeciesRegistry + ?Sized,
{
    #[must_use]
    pub fn new(registry: &'a R, settings: &'a TransferSettings) -> Self {
        Self { registry, settings }
    }

    #[must_use]
    pub fn settings(&self) -> &TransferSettings {
        self.settings
    }

    /// Decides whether `creature` should be released.
    ///
    /// Increments `species_counts` for the creature's species unless the
    /// species is ignored. Reads `candies` at most once.
    ///
    /// Fails only when species metadata is needed for the evolve-stacking rule
    /// and the registry does not know the species.
    pub fn should_transfer(
        &self,
        creature: &CreatureRecord,
        species_counts: &mut BTreeMap<SpeciesId, u32>,
        candies: &AtomicU32,
    ) -> Result<TransferDecision, MetaLookupError> {
        let settings = self.settings;
        let species = creature.species;

        let mut release = settings.obligatory_transfer.contains(&species);
        let mut reason = TransferReason::Obligatory;

        if settings.ignored_species.contains(&species) {
            log::debug!("{species}: ignored species, keeping");
            return Ok(TransferDecision {
                release: false,
                reason,
            });
        }

        if !release {
            (release, reason) = Self::check_thresholds(creature, settings);
        }

        let count = species_counts.entry(species).or_insert(0);
        *count += 1;
        let count = *count;

        if !release && settings.max_per_species.value().is_some_and(|max| count > max) {
            release = true;
            reason = TransferReason::TooMany;
        }

        if release
            && settings.evolve_before_transfer.contains(&species)
            && settings.evolve_stack_limit > 0
        {
            let candy_to_evolve = self.registry.meta(species)?.candy_to_evolve;
            let candies = candies.load(Ordering::Relaxed);
            let max_to_maintain = candies.checked_div(candy_to_evolve).unwrap_or(0);
            if candy_to_evolve > 0 && count > max_to_maintain {
                reason = TransferReason::NotEnoughCandy {
                    candies,
                    candy_to_evolve,
                    max_to_maintain,
                };
            } else {
                log::trace!(
                    "{species}: holding #{count} for evolution ({candies} candy, {candy_to_evolve} per evolution)"
                );
                release = false;
            }
        }

        log::debug!("{species}: release={release} ({reason})");
        Ok(TransferDecision { release, reason })
    }

    fn check_thresholds(
        creature: &CreatureRecord,
        settings: &TransferSettings,
    ) -> (bool, TransferReason) {
        let iv_percentage = creature.iv_percentage();
        let iv_too_low = match settings.min_iv_percentage {
            Threshold::Disabled => true,
            Threshold::Value(min) => iv_percentage < min,
        };
        let cp_too_low = match settings.min_cp {
            Threshold::Disabled => true,
            Threshold::Value(min) => creature.cp < min,
        };

        // An undefined percentage (no CP cap known) is never in range.
        let cap = settings.min_cp_percentage.value().and_then(|min| {
            let achieved = creature.cp_percent_of_cap()?;
            (min >= achieved).then(|| CapShortfall {
                max_cp: creature.max_cp_current_level(),
                achieved_percentage: achieved,
                min_cp_percentage: min,
            })
        });
        let cap_rule_passes = cap.is_some() || settings.min_cp_percentage.is_disabled();

        log::trace!(
            "{}: iv {iv_percentage}% too low: {iv_too_low}, cp {} too low: {cp_too_low}, cap rule: {cap_rule_passes}",
            creature.species,
            creature.cp,
        );

        let release = iv_too_low && cp_too_low && cap_rule_passes;
        let reason = TransferReason::BelowThresholds {
            min_cp: settings.min_cp,
            min_iv_percentage: settings.min_iv_percentage,
            cap,
        };
        (release, reason)
    }
}

#[cfg(test)]
mod tests {
    use pokeval_meta::SpeciesTable;

    use super::*;
    use crate::testing::{creature, registry};

    const PIDGEY: u16 = 16;

    struct Harness {
        registry: SpeciesTable,
        settings: TransferSettings,
        counts: BTreeMap<SpeciesId, u32>,
        candies: AtomicU32,
    }

    impl Harness {
        fn new(settings: TransferSettings) -> Self {
            Self {
                registry: registry(),
                settings,
                counts: BTreeMap::new(),
                candies: AtomicU32::new(0),
            }
        }

        fn evaluate(&mut self, creature: &CreatureRecord) -> TransferDecision {
            TransferEvaluator::new(&self.registry, &self.settings)
                .should_transfer(creature, &mut self.counts, &self.candies)
                .unwrap()
        }

        fn count(&self, species: u16) -> Option<u32> {
            self.counts.get(&SpeciesId(species)).copied()
        }
    }

    /// Settings under which the threshold rule never releases.
    fn keep_everything() -> TransferSettings {
        TransferSettings {
            min_iv_percentage: Threshold::Value(0),
            min_cp: Threshold::Value(0),
            ..TransferSettings::default()
        }
    }

    #[test]
    fn test_ignored_species_is_never_released() {
        let mut settings = TransferSettings {
            min_iv_percentage: Threshold::Disabled,
            min_cp: Threshold::Disabled,
            max_per_species: Threshold::Value(0),
            ..TransferSettings::default()
        };
        settings.ignored_species.insert(SpeciesId(PIDGEY));
        settings.obligatory_transfer.insert(SpeciesId(PIDGEY));
        let mut harness = Harness::new(settings);

        for _ in 0..3 {
            let decision = harness.evaluate(&creature(PIDGEY, (0, 0, 0)));
            assert_eq!(
                decision,
                TransferDecision {
                    release: false,
                    reason: TransferReason::Obligatory,
                }
            );
        }
        assert_eq!(harness.count(PIDGEY), None, "ignored species are not counted");
    }

    #[test]
    fn test_obligatory_transfer() {
        let mut settings = keep_everything();
        settings.obligatory_transfer.insert(SpeciesId(PIDGEY));
        let mut harness = Harness::new(settings);

        let decision = harness.evaluate(&creature(PIDGEY, (15, 15, 15)));
        assert!(decision.release);
        assert_eq!(decision.reason.to_string(), "Obligatory transfer");
        assert_eq!(harness.count(PIDGEY), Some(1));
    }

    #[test]
    fn test_disabled_thresholds_release_everything() {
        let mut harness = Harness::new(TransferSettings {
            min_iv_percentage: Threshold::Disabled,
            min_cp: Threshold::Disabled,
            min_cp_percentage: Threshold::Disabled,
            ..TransferSettings::default()
        });

        let decision = harness.evaluate(&creature(PIDGEY, (15, 15, 15)));
        assert!(decision.release);
        assert_eq!(decision.reason.to_string(), "CP < -1 and IV < -1%");
    }

    #[test]
    fn test_threshold_release_needs_both_iv_and_cp_low() {
        let settings = TransferSettings {
            min_iv_percentage: Threshold::Value(50),
            min_cp: Threshold::Value(400),
            ..TransferSettings::default()
        };
        let mut harness = Harness::new(settings);

        // 22/45 = 48%, level 20 Pidgey CP well under 400
        let weak = creature(PIDGEY, (7, 8, 7));
        assert!(weak.cp < 400);
        let decision = harness.evaluate(&weak);
        assert!(decision.release);
        assert_eq!(decision.reason.to_string(), "CP < 400 and IV < 50%");

        // Good IV keeps it
        assert!(!harness.evaluate(&creature(PIDGEY, (15, 15, 15))).release);

        // High CP keeps it
        let mut strong = creature(PIDGEY, (7, 8, 7));
        strong.cp = 400;
        assert!(!harness.evaluate(&strong).release);

        assert_eq!(harness.count(PIDGEY), Some(3));
    }

    #[test]
    fn test_cp_cap_rule_never_matches_without_cap() {
        let mut harness = Harness::new(TransferSettings {
            min_iv_percentage: Threshold::Disabled,
            min_cp: Threshold::Disabled,
            min_cp_percentage: Threshold::Value(100),
            ..TransferSettings::default()
        });

        let decision = harness.evaluate(&creature(PIDGEY, (0, 0, 0)));
        assert!(!decision.release);
        assert_eq!(decision.reason.to_string(), "CP < -1 and IV < -1%");
    }

    #[test]
    fn test_too_many_of_one_species() {
        let mut harness = Harness::new(TransferSettings {
            max_per_species: Threshold::Value(2),
            ..keep_everything()
        });

        let releases: Vec<bool> = (0..3)
            .map(|_| harness.evaluate(&creature(PIDGEY, (10, 10, 10))).release)
            .collect();
        assert_eq!(releases, [false, false, true]);
        assert_eq!(harness.count(PIDGEY), Some(3));

        let decision = harness.evaluate(&creature(PIDGEY, (10, 10, 10)));
        assert_eq!(decision.reason, TransferReason::TooMany);
        assert_eq!(decision.reason.to_string(), "Too many");

        // Other species are counted separately
        assert!(!harness.evaluate(&creature(19, (10, 10, 10))).release);
        assert_eq!(harness.count(19), Some(1));
    }

    #[test]
    fn test_evolve_stacking_holds_back_releases() {
        let mut settings = keep_everything();
        settings.obligatory_transfer.insert(SpeciesId(PIDGEY));
        settings.evolve_before_transfer.insert(SpeciesId(PIDGEY));
        settings.evolve_stack_limit = 3;
        let mut harness = Harness::new(settings);
        harness.candies = AtomicU32::new(30);

        // 30 candy / 12 per evolution = 2 Pidgeys worth keeping
        for seen in 1..=2 {
            let decision = harness.evaluate(&creature(PIDGEY, (0, 0, 0)));
            assert!(!decision.release, "Pidgey #{seen} should be held for evolution");
            assert_eq!(decision.reason, TransferReason::Obligatory);
        }

        let decision = harness.evaluate(&creature(PIDGEY, (0, 0, 0)));
        assert!(decision.release);
        assert_eq!(
            decision.reason,
            TransferReason::NotEnoughCandy {
                candies: 30,
                candy_to_evolve: 12,
                max_to_maintain: 2,
            }
        );
        assert_eq!(decision.reason.to_string(), "Not enough candy 30/12: max 2");
        assert_eq!(harness.candies.load(Ordering::Relaxed), 30, "candy is only read");
    }

    #[test]
    fn test_evolve_stacking_needs_positive_stack_limit() {
        let mut settings = keep_everything();
        settings.obligatory_transfer.insert(SpeciesId(PIDGEY));
        settings.evolve_before_transfer.insert(SpeciesId(PIDGEY));
        settings.evolve_stack_limit = 0;
        let mut harness = Harness::new(settings);
        harness.candies = AtomicU32::new(300);

        assert!(harness.evaluate(&creature(PIDGEY, (0, 0, 0))).release);
    }

    #[test]
    fn test_evolve_stacking_cancels_for_final_forms() {
        // Pidgeot cannot evolve (0 candy), so a stacked release is always cancelled
        let mut settings = keep_everything();
        settings.obligatory_transfer.insert(SpeciesId(18));
        settings.evolve_before_transfer.insert(SpeciesId(18));
        settings.evolve_stack_limit = 1;
        let mut harness = Harness::new(settings);

        let decision = harness.evaluate(&creature(18, (0, 0, 0)));
        assert!(!decision.release);
    }

    #[test]
    fn test_evolve_stacking_unknown_species_is_an_error() {
        let mut settings = keep_everything();
        settings.obligatory_transfer.insert(SpeciesId(150));
        settings.evolve_before_transfer.insert(SpeciesId(150));
        settings.evolve_stack_limit = 1;
        let registry = registry();
        let evaluator = TransferEvaluator::new(&registry, &settings);

        let result = evaluator.should_transfer(
            &creature(150, (0, 0, 0)),
            &mut BTreeMap::new(),
            &AtomicU32::new(10),
        );
        assert_eq!(
            result,
            Err(MetaLookupError::UnknownSpecies {
                species: SpeciesId(150)
            })
        );
    }

    #[test]
    fn test_works_through_dyn_registry() {
        let registry = registry();
        let registry: &dyn SpeciesRegistry = &registry;
        let settings = keep_everything();
        let evaluator = TransferEvaluator::new(registry, &settings);

        let decision = evaluator
            .should_transfer(
                &creature(PIDGEY, (1, 1, 1)),
                &mut BTreeMap::new(),
                &AtomicU32::new(0),
            )
            .unwrap();
        assert!(!decision.release);
    }

    #[test]
    fn test_cap_shortfall_reason_text() {
        let reason = TransferReason::BelowThresholds {
            min_cp: Threshold::Value(300),
            min_iv_percentage: Threshold::Value(70),
            cap: Some(CapShortfall {
                max_cp: 1200,
                achieved_percentage: 40,
                min_cp_percentage: 50,
            }),
        };
        assert_eq!(
            reason.to_string(),
            "CP < 300 and IV < 70% and CP max 1200: achieved 40% <= 50%"
        );
    }
}
