//! Depth-aware item generation.
//!
//! Rarity is drawn from depth-banded weight tables, slot from a weighted
//! roll, then independent rolls may divert to a set piece or a unique before
//! the procedural material/base resolution. Generation is total: when no
//! compatible material/base pair exists after bounded retries it emits a
//! stat-less scrap item rather than failing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bases;
use crate::compose;
use crate::config::GenerationConfig;
use crate::constants::SCRAP_BASE_VALUE;
use crate::items::{Item, SlotKind};
use crate::materials;
use crate::rarity::{self, RarityTier, NUM_RARITY_TIERS, RARITY_TIERS};
use crate::uniques;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemModifier {
    /// Procedural output only; skip the set and unique rolls.
    NoSpecials,
    /// Force the set roll to succeed when a slot-compatible set exists.
    GuaranteedSet,
    /// Force the unique roll when a slot+rarity-compatible unique exists.
    GuaranteedUnique,
}

/// Parameters for one generation call. Everything except `depth` is
/// optional; rarity ids refer to the registry.
#[derive(Debug, Clone, Default)]
pub struct ItemRequest<'a> {
    pub depth: u32,
    pub slot: Option<SlotKind>,
    pub min_rarity: Option<&'a str>,
    pub max_rarity: Option<&'a str>,
    pub rarity_boost: u32,
    pub material: Option<&'a str>,
    pub base: Option<&'a str>,
    pub modifiers: &'a [ItemModifier],
}

impl ItemRequest<'_> {
    pub fn at_depth(depth: u32) -> ItemRequest<'static> {
        ItemRequest {
            depth,
            ..Default::default()
        }
    }
}

/// Generates one item. Never fails for any depth/slot combination.
pub fn generate(rng: &mut impl Rng, config: &GenerationConfig, req: &ItemRequest) -> Item {
    let adjusted_depth = req.depth + req.rarity_boost;
    let rarity = roll_rarity(rng, config, adjusted_depth, req.min_rarity, req.max_rarity);
    let slot = match req.base {
        Some(id) => bases::base(id).slot,
        None => req.slot.unwrap_or_else(|| roll_slot(rng, config)),
    };

    // Forced material/base requests want a specific procedural item.
    let no_specials =
        req.modifiers.contains(&ItemModifier::NoSpecials) || req.material.is_some() || req.base.is_some();

    if !no_specials {
        if adjusted_depth >= config.set_min_depth
            && (req.modifiers.contains(&ItemModifier::GuaranteedSet)
                || rng.gen_bool(config.set_chance))
        {
            let candidates = uniques::sets_for_slot(slot);
            if !candidates.is_empty() {
                let template = candidates[rng.gen_range(0..candidates.len())];
                let unique_quality = rng.gen_bool(config.unique_quality_chance);
                debug!(template = template.id, unique_quality, "set piece drop");
                return compose::compose_set(template, unique_quality);
            }
        }

        if req.modifiers.contains(&ItemModifier::GuaranteedUnique)
            || rng.gen_bool(config.unique_chance)
        {
            let candidates = uniques::uniques_for(slot, rarity.id);
            if !candidates.is_empty() {
                let template = candidates[rng.gen_range(0..candidates.len())];
                debug!(template = template.id, "unique drop");
                return compose::compose_unique(template);
            }
        }
    }

    roll_procedural(rng, config, req, slot, rarity)
}

/// Depth-banded weighted rarity selection, gated by each tier's unlock
/// depth. Bounds clamp the candidate range; a bounded range with no
/// weighted mass falls back to a uniform pick over it.
fn roll_rarity(
    rng: &mut impl Rng,
    config: &GenerationConfig,
    adjusted_depth: u32,
    min_rarity: Option<&str>,
    max_rarity: Option<&str>,
) -> &'static RarityTier {
    let lo = min_rarity.map(rarity::tier_order).unwrap_or(0);
    let hi = max_rarity
        .map(rarity::tier_order)
        .unwrap_or(NUM_RARITY_TIERS - 1);
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };

    let band = &config.rarity_weights[config.band_for_depth(adjusted_depth)];
    let weights: Vec<f64> = (lo..=hi)
        .map(|i| {
            if RARITY_TIERS[i].min_depth <= adjusted_depth {
                band[i]
            } else {
                0.0
            }
        })
        .collect();

    if let Some(offset) = weighted_index(rng, &weights) {
        return &RARITY_TIERS[lo + offset];
    }

    // Uniform fallback over the requested range, preferring unlocked tiers.
    let unlocked: Vec<usize> = (lo..=hi)
        .filter(|&i| RARITY_TIERS[i].min_depth <= adjusted_depth)
        .collect();
    if unlocked.is_empty() {
        &RARITY_TIERS[rng.gen_range(lo..=hi)]
    } else {
        &RARITY_TIERS[unlocked[rng.gen_range(0..unlocked.len())]]
    }
}

fn roll_slot(rng: &mut impl Rng, config: &GenerationConfig) -> SlotKind {
    match weighted_index(rng, &config.slot_weights) {
        Some(i) => SlotKind::ALL[i],
        None => SlotKind::Weapon,
    }
}

fn weighted_index(rng: &mut impl Rng, weights: &[f64]) -> Option<usize> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let mut roll = rng.gen::<f64>() * total;
    for (i, w) in weights.iter().enumerate() {
        if roll < *w {
            return Some(i);
        }
        roll -= w;
    }
    Some(weights.len() - 1)
}

fn roll_procedural(
    rng: &mut impl Rng,
    config: &GenerationConfig,
    req: &ItemRequest,
    slot: SlotKind,
    rarity: &'static RarityTier,
) -> Item {
    let rarity_rank = rarity::tier_order(rarity.id);
    let forced_material = req.material.map(materials::material);
    let forced_base = req.base.map(bases::base);

    for _ in 0..config.material_retry_limit {
        let material = match forced_material {
            Some(m) => m,
            None => {
                let pool = materials::materials_for(slot, rarity_rank);
                pool[rng.gen_range(0..pool.len())]
            }
        };
        let base = match forced_base {
            Some(b) => b,
            None => {
                let pool: Vec<_> = bases::bases_for_slot(slot)
                    .filter(|b| b.accepts(material))
                    .collect();
                if pool.is_empty() {
                    continue;
                }
                pool[rng.gen_range(0..pool.len())]
            }
        };
        if base.accepts(material) {
            let variant = rng.gen_range(0..base.variants.len());
            return compose::compose(base, material, rarity, variant);
        }
    }

    warn!(
        slot = slot.name(),
        rarity = rarity.id,
        "no compatible material/base pair, emitting scrap"
    );
    scrap(req.depth)
}

/// The stat-less, positive-value fallback item.
pub fn scrap(depth: u32) -> Item {
    Item::Scrap {
        name: "Strange Residue".to_string(),
        value: SCRAP_BASE_VALUE + depth * 2,
    }
}
