//! Explicit engine configuration.
//!
//! Every entry point takes a config value rather than reading ambient
//! globals, so difficulty presets can be tested in isolation. `Default`
//! carries the shipped tuning from `constants`.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::rarity::NUM_RARITY_TIERS;

/// Number of depth bands in the rarity weight table.
pub const NUM_DEPTH_BANDS: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Per-band tier weights; bands cover depths <=5, <=10, <=20, >20.
    /// Tiers locked by `min_depth` get no mass regardless of the table.
    pub rarity_weights: [[f64; NUM_RARITY_TIERS]; NUM_DEPTH_BANDS],
    /// Weapon, Armor, Helmet, Boots, Amulet, Ring.
    pub slot_weights: [f64; 6],
    pub set_chance: f64,
    pub set_min_depth: u32,
    pub unique_chance: f64,
    pub unique_quality_chance: f64,
    pub material_retry_limit: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rarity_weights: [
                // Shallow runs: almost everything is low-tier.
                [
                    40.0, 25.0, 15.0, 8.0, 5.0, 3.0, 1.5, 1.0, 0.5, 0.3, //
                    0.15, 0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
                ],
                [
                    22.0, 18.0, 14.0, 11.0, 9.0, 7.0, 5.0, 4.0, 3.0, 2.2, //
                    1.6, 1.1, 0.7, 0.4, 0.2, 0.1, 0.0, 0.0, 0.0, 0.0,
                ],
                [
                    10.0, 9.0, 9.0, 8.0, 8.0, 7.0, 7.0, 6.0, 6.0, 5.0, //
                    5.0, 4.0, 4.0, 3.0, 3.0, 2.5, 2.0, 1.5, 1.0, 0.5,
                ],
                // Past depth 20 the mass sits on the upper half.
                [
                    3.0, 3.0, 4.0, 4.0, 5.0, 5.0, 6.0, 6.0, 7.0, 7.0, //
                    7.0, 7.0, 6.5, 6.5, 6.0, 6.0, 5.5, 5.0, 4.5, 4.0,
                ],
            ],
            slot_weights: [24.0, 20.0, 16.0, 16.0, 12.0, 12.0],
            set_chance: SET_ITEM_CHANCE,
            set_min_depth: SET_MIN_DEPTH,
            unique_chance: UNIQUE_ITEM_CHANCE,
            unique_quality_chance: UNIQUE_QUALITY_CHANCE,
            material_retry_limit: MATERIAL_RETRY_LIMIT,
        }
    }
}

impl GenerationConfig {
    /// Index of the weight band covering `depth`.
    pub fn band_for_depth(&self, depth: u32) -> usize {
        match depth {
            0..=5 => 0,
            6..=10 => 1,
            11..=20 => 2,
            _ => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatTuning {
    pub damage_scale_normal: f64,
    pub damage_scale_boss: f64,
    pub damage_scale_zone_boss: f64,
    pub damage_scale_true: f64,
    pub dodge_per_speed: f64,
    pub dodge_cap: f64,
    pub crit_per_depth: f64,
    pub crit_per_luck: f64,
    pub crit_min: f64,
    pub crit_max: f64,
    pub crit_multiplier: f64,
    pub defense_softcap: f64,
    pub mitigation_cap: f64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            damage_scale_normal: DAMAGE_SCALE_NORMAL,
            damage_scale_boss: DAMAGE_SCALE_BOSS,
            damage_scale_zone_boss: DAMAGE_SCALE_ZONE_BOSS,
            damage_scale_true: DAMAGE_SCALE_TRUE,
            dodge_per_speed: DODGE_CHANCE_PER_SPEED,
            dodge_cap: DODGE_CHANCE_CAP,
            crit_per_depth: CRIT_CHANCE_PER_DEPTH,
            crit_per_luck: CRIT_CHANCE_PER_LUCK,
            crit_min: CRIT_CHANCE_MIN,
            crit_max: CRIT_CHANCE_MAX,
            crit_multiplier: CRIT_MULTIPLIER,
            defense_softcap: DEFENSE_SOFTCAP,
            mitigation_cap: MITIGATION_CAP,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTuning {
    pub max_level: u32,
    pub xp_level_step: u64,
    pub mentor_fraction: f64,
    /// Level-ups restore the character to full HP.
    pub heal_on_level_up: bool,
    pub reward_scale: f64,
    pub revive_hp_fraction: f64,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            xp_level_step: XP_PER_LEVEL_STEP,
            mentor_fraction: MENTOR_FRACTION,
            heal_on_level_up: true,
            reward_scale: REWARD_SCALE,
            revive_hp_fraction: REVIVE_HP_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub generation: GenerationConfig,
    pub combat: CombatTuning,
    pub progression: ProgressionTuning,
}
