//! Creature level and CP multiplier conversions.
//!
//! Creatures advance in half-level steps from level 1.0 to [`MAX_POKEMON_LEVEL`].
//! Each half level has a fixed CP multiplier published by the game. A creature's
//! *combined* multiplier (base + additional multiplier granted by power-ups) lands
//! on one of these table entries, up to float noise.

/// Highest level a creature can reach.
pub const MAX_POKEMON_LEVEL: f64 = 40.0;

/// Highest trainer level.
pub const MAX_PLAYER_LEVEL: u32 = 40;

/// Creatures can be powered up to this many levels above the trainer level.
pub const POKEMON_LEVEL_ABOVE_PLAYER: f64 = 1.5;

/// CP multiplier for every half level from 1.0 to 40.0.
///
/// Index `i` holds the multiplier for level `1.0 + i * 0.5`.
pub const LEVEL_CP_MULTIPLIER: [f64; 79] = [
    0.094,       // 1.0
    0.135_137_43, // 1.5
    0.166_397_87, // 2.0
    0.192_650_92, // 2.5
    0.215_732_47, // 3.0
    0.236_572_66, // 3.5
    0.255_720_05, // 4.0
    0.273_530_38, // 4.5
    0.290_249_88, // 5.0
    0.306_057_38, // 5.5
    0.321_087_6,  // 6.0
    0.335_445_04, // 6.5
    0.349_212_68, // 7.0
    0.362_457_75, // 7.5
    0.375_235_59, // 8.0
    0.387_592_41, // 8.5
    0.399_567_28, // 9.0
    0.411_193_55, // 9.5
    0.422_500_01, // 10.0
    0.432_926_42, // 10.5
    0.443_107_55, // 11.0
    0.453_059_96, // 11.5
    0.462_798_39, // 12.0
    0.472_336_08, // 12.5
    0.481_684_95, // 13.0
    0.490_855_8,  // 13.5
    0.499_858_44, // 14.0
    0.508_701_77, // 14.5
    0.517_393_95, // 15.0
    0.525_942_51, // 15.5
    0.534_354_33, // 16.0
    0.542_635_77, // 16.5
    0.550_792_69, // 17.0
    0.558_830_58, // 17.5
    0.566_754_52, // 18.0
    0.574_569_15, // 18.5
    0.582_278_91, // 19.0
    0.589_887_92, // 19.5
    0.597_400_01, // 20.0
    0.604_818_81, // 20.5
    0.612_157_29, // 21.0
    0.619_399_37, // 21.5
    0.626_567_13, // 22.0
    0.633_644_53, // 22.5
    0.640_652_95, // 23.0
    0.647_576_43, // 23.5
    0.654_435_63, // 24.0
    0.661_214_81, // 24.5
    0.667_934,    // 25.0
    0.674_577_54, // 25.5
    0.681_164_92, // 26.0
    0.687_680_65, // 26.5
    0.694_143_65, // 27.0
    0.700_538_67, // 27.5
    0.706_884_21, // 28.0
    0.713_165,    // 28.5
    0.719_399_09, // 29.0
    0.725_571_55, // 29.5
    0.731_7,      // 30.0
    0.734_741_01, // 30.5
    0.737_769_48, // 31.0
    0.740_785_57, // 31.5
    0.743_789_43, // 32.0
    0.746_781_21, // 32.5
    0.749_761_04, // 33.0
    0.752_729_09, // 33.5
    0.755_685_51, // 34.0
    0.758_630_38, // 34.5
    0.761_563_84, // 35.0
    0.764_486_07, // 35.5
    0.767_397_17, // 36.0
    0.770_297_27, // 36.5
    0.773_186_5,  // 37.0
    0.776_064_96, // 37.5
    0.778_932_75, // 38.0
    0.781_790_06, // 38.5
    0.784_636_97, // 39.0
    0.787_473_58, // 39.5
    0.790_300_01, // 40.0
];

/// Returns the CP multiplier for a level on the half-level grid.
///
/// Returns `None` for levels below 1.0, above [`MAX_POKEMON_LEVEL`], or not a
/// multiple of 0.5.
///
/// # Examples
///
/// ```
/// use pokeval_cp::level::cp_multiplier_for_level;
///
/// assert_eq!(cp_multiplier_for_level(1.0), Some(0.094));
/// assert_eq!(cp_multiplier_for_level(40.5), None);
/// assert_eq!(cp_multiplier_for_level(2.25), None);
/// ```
#[must_use]
pub fn cp_multiplier_for_level(level: f64) -> Option<f64> {
    let steps = (level - 1.0) * 2.0;
    if steps.fract() != 0.0 || steps < 0.0 {
        return None;
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = steps as usize;
    LEVEL_CP_MULTIPLIER.get(index).copied()
}

/// Highest level a creature can be powered up to for the given trainer level.
///
/// The trainer level is clamped to `1..=MAX_PLAYER_LEVEL`.
#[must_use]
pub fn max_pokemon_level_for_player(player_level: u32) -> f64 {
    let player_level = f64::from(player_level.clamp(1, MAX_PLAYER_LEVEL));
    (player_level + POKEMON_LEVEL_ABOVE_PLAYER).min(MAX_POKEMON_LEVEL)
}

/// Estimates a creature level from its combined CP multiplier.
///
/// Uses a quadratic fit below a multiplier of 0.734 (level 30) and a linear fit
/// above it, then rounds to the nearest half level.
///
/// # Examples
///
/// ```
/// use pokeval_cp::level::level_from_cp_multiplier;
///
/// assert_eq!(level_from_cp_multiplier(0.094), 1.0);
/// assert_eq!(level_from_cp_multiplier(0.790_300_01), 40.0);
/// ```
#[must_use]
pub fn level_from_cp_multiplier(combined_multiplier: f64) -> f64 {
    let m = combined_multiplier;
    let level = if m < 0.734 {
        58.351_785_27 * m * m - 2.838_007_664 * m + 0.853_920_990_6
    } else {
        171.011_268_8 * m - 95.204_252_43
    };
    (level * 2.0).round() / 2.0
}
