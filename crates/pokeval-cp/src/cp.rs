//! Combat power formulas.
//!
//! CP is computed from *effective* stats (species base stat + individual roll)
//! and the creature's combined CP multiplier:
//!
//! ```text
//! cp = max(10, floor(attack * sqrt(defense) * sqrt(stamina) * multiplier² / 10))
//! ```

use crate::level::{self, MAX_PLAYER_LEVEL};

/// Lowest CP the game ever reports.
pub const MIN_CP: u32 = 10;

/// Highest individual roll for each of attack, defense and stamina.
pub const MAX_INDIVIDUAL_VALUE: u32 = 15;

/// Computes CP from effective stats and a combined CP multiplier.
///
/// # Examples
///
/// ```
/// use pokeval_cp::cp::cp;
///
/// // Perfect Pidgey at level 40
/// assert_eq!(cp(100, 91, 95, 0.790_300_01), 580);
/// // Never below the floor
/// assert_eq!(cp(1, 1, 1, 0.094), 10);
/// ```
#[must_use]
pub fn cp(attack: u32, defense: u32, stamina: u32, combined_multiplier: f64) -> u32 {
    let raw = f64::from(attack)
        * f64::from(defense).sqrt()
        * f64::from(stamina).sqrt()
        * combined_multiplier.powi(2)
        / 10.0;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cp = raw.floor() as u32;
    cp.max(MIN_CP)
}

/// Max CP reachable by a trainer of `player_level` for the given effective stats.
///
/// The creature is assumed to be powered up to the highest level the trainer
/// allows (see [`level::max_pokemon_level_for_player`]).
#[must_use]
pub fn max_cp_for_player(attack: u32, defense: u32, stamina: u32, player_level: u32) -> u32 {
    let level = level::max_pokemon_level_for_player(player_level);
    let multiplier = level::cp_multiplier_for_level(level)
        .unwrap_or(level::LEVEL_CP_MULTIPLIER[level::LEVEL_CP_MULTIPLIER.len() - 1]);
    cp(attack, defense, stamina, multiplier)
}

/// Max CP at the highest trainer level.
#[must_use]
pub fn max_cp(attack: u32, defense: u32, stamina: u32) -> u32 {
    max_cp_for_player(attack, defense, stamina, MAX_PLAYER_LEVEL)
}
