// Depth scaling factors for damage, per encounter kind
pub const DAMAGE_SCALE_NORMAL: f64 = 0.15;
pub const DAMAGE_SCALE_BOSS: f64 = 0.25;
pub const DAMAGE_SCALE_ZONE_BOSS: f64 = 0.35;
pub const DAMAGE_SCALE_TRUE: f64 = 0.10;

// Depth scaling for rewards and requirement gates (one shared curve)
pub const REWARD_SCALE: f64 = 0.12;

// Dodge and crit rolls
pub const DODGE_CHANCE_PER_SPEED: f64 = 0.001;
pub const DODGE_CHANCE_CAP: f64 = 0.50;
pub const CRIT_CHANCE_PER_DEPTH: f64 = 0.001;
pub const CRIT_CHANCE_PER_LUCK: f64 = 0.001;
pub const CRIT_CHANCE_MIN: f64 = 0.01;
pub const CRIT_CHANCE_MAX: f64 = 0.30;
pub const CRIT_MULTIPLIER: f64 = 2.0;

// Defense mitigation curve: reduction = defense / (defense + softcap), capped
pub const DEFENSE_SOFTCAP: f64 = 150.0;
pub const MITIGATION_CAP: f64 = 0.80;

// Progression
pub const MAX_LEVEL: u32 = 50;
pub const XP_PER_LEVEL_STEP: u64 = 100;
pub const MENTOR_FRACTION: f64 = 0.5;
pub const REVIVE_HP_FRACTION: f64 = 0.5;

// Item generation
pub const SET_ITEM_CHANCE: f64 = 0.08;
pub const SET_MIN_DEPTH: u32 = 8;
pub const UNIQUE_ITEM_CHANCE: f64 = 0.05;
pub const UNIQUE_QUALITY_CHANCE: f64 = 0.15;
pub const UNIQUE_BOOST: f64 = 0.30;
pub const MATERIAL_RETRY_LIMIT: u32 = 10;
pub const MATERIAL_WINDOW: usize = 3;

// Scrap fallback pricing
pub const SCRAP_BASE_VALUE: u32 = 5;
