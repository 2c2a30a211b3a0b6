//! Power-up outcome and cost estimates.
//!
//! Each power-up raises a creature by half a level. The candy and stardust costs
//! of the *next* power-up depend on the level the creature is at now:
//!
//! | level     | candy | | level     | stardust |
//! |-----------|-------| |-----------|----------|
//! | 1 - 10.5  | 1     | | 1 - 2.5   | 200      |
//! | 11 - 20.5 | 2     | | 3 - 4.5   | 400      |
//! | 21 - 25.5 | 3     | | ...       | ...      |
//! | 26 - 30.5 | 4     | | 37 - 38.5 | 9000     |
//! | 31 - 32.5 | 6     | | 39 - 40   | 10000    |
//! | ...       | ...   | |           |          |
//! | 39 - 40   | 15    | |           |          |

use crate::level::{self, MAX_POKEMON_LEVEL};

/// Stardust cost per two-level band, starting at level 1.
const STARDUST_BY_BAND: [u32; 20] = [
    200, 400, 600, 800, 1000, 1300, 1600, 1900, 2200, 2500, 3000, 3500, 4000, 4500, 5000, 6000,
    7000, 8000, 9000, 10000,
];

/// Candy cost keyed by the highest whole level of each band.
const CANDY_BY_LEVEL: [(u32, u32); 9] = [
    (10, 1),
    (20, 2),
    (25, 3),
    (30, 4),
    (32, 6),
    (34, 8),
    (36, 10),
    (38, 12),
    (40, 15),
];

/// Estimated CP after one more power-up.
///
/// The CP gain per half level is roughly proportional to `cp / multiplier²`,
/// with a coefficient that changes at levels 10, 20 and 30.
///
/// # Examples
///
/// ```
/// use pokeval_cp::power_up::cp_after_power_up;
///
/// assert_eq!(cp_after_power_up(500, 0.597_400_01), 512);
/// ```
#[must_use]
pub fn cp_after_power_up(cp: u32, combined_multiplier: f64) -> u32 {
    let level = level::level_from_cp_multiplier(combined_multiplier);
    let coefficient = if level <= 10.0 {
        0.009_426_125_469
    } else if level <= 20.0 {
        0.008_919_025_675
    } else if level <= 30.0 {
        0.008_924_905_903
    } else {
        0.004_459_460_79
    };
    let gain = f64::from(cp) * coefficient / combined_multiplier.powi(2);
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let gain = gain as u32;
    cp + gain
}

/// Candy needed for the next power-up.
///
/// # Examples
///
/// ```
/// use pokeval_cp::power_up::candy_cost_for_power_up;
///
/// assert_eq!(candy_cost_for_power_up(0.094, 0), 1);
/// assert_eq!(candy_cost_for_power_up(0.790_300_01, 78), 15);
/// ```
#[must_use]
pub fn candy_cost_for_power_up(combined_multiplier: f64, power_ups: u32) -> u32 {
    let level = current_whole_level(combined_multiplier, power_ups);
    CANDY_BY_LEVEL
        .iter()
        .find(|(max_level, _)| level <= *max_level)
        .map_or(CANDY_BY_LEVEL[CANDY_BY_LEVEL.len() - 1].1, |(_, candy)| {
            *candy
        })
}

/// Stardust needed for the next power-up.
///
/// # Examples
///
/// ```
/// use pokeval_cp::power_up::stardust_cost_for_power_up;
///
/// assert_eq!(stardust_cost_for_power_up(0.094, 0), 200);
/// assert_eq!(stardust_cost_for_power_up(0.597_400_01, 0), 2500);
/// ```
#[must_use]
pub fn stardust_cost_for_power_up(combined_multiplier: f64, power_ups: u32) -> u32 {
    let level = current_whole_level(combined_multiplier, power_ups);
    let band = ((level - 1) / 2) as usize;
    STARDUST_BY_BAND[band.min(STARDUST_BY_BAND.len() - 1)]
}

/// Whole level the creature is at, in `1..=40`.
///
/// Every power-up adds half a level on top of level 1, so the power-up count
/// bounds the level from below when the multiplier looks too small.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn current_whole_level(combined_multiplier: f64, power_ups: u32) -> u32 {
    let from_multiplier = level::level_from_cp_multiplier(combined_multiplier);
    let from_power_ups = 1.0 + f64::from(power_ups) / 2.0;
    from_multiplier
        .max(from_power_ups)
        .clamp(1.0, MAX_POKEMON_LEVEL)
        .floor() as u32
}
