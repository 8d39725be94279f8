//! Two-dimensional item upgrade ladders.
//!
//! A procedural item can climb the material ladder or the rarity ladder, one
//! rung per upgrade. Blacklisted materials exist only through direct
//! generation; the material ladder steps over them. Upgrades return a new
//! item value; callers replace the equipped reference themselves.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bases;
use crate::character::Character;
use crate::items::{Item, SlotKind};
use crate::materials::{self, Material};
use crate::rarity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeMode {
    Material,
    Rarity,
    /// Material first, rarity as the fallback.
    Auto,
    /// Uniform pick between the legal ladders.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpgradeError {
    #[error("{0} items cannot be upgraded")]
    NotUpgradable(&'static str),
    #[error("material {0:?} is not on the upgrade ladder")]
    UnresolvableMaterial(String),
    #[error("material is already at the top of the ladder")]
    MaterialAtMax,
    #[error("rarity is already at the highest tier")]
    RarityAtMax,
    #[error("item is fully upgraded")]
    AtMax,
}

fn upgrade_kind(item: &Item) -> Option<&'static str> {
    match item {
        Item::Procedural { .. } => None,
        Item::Unique { .. } => Some("unique"),
        Item::Set { .. } => Some("set"),
        Item::Scrap { .. } => Some("scrap"),
    }
}

pub fn can_upgrade_material(item: &Item) -> bool {
    match item {
        Item::Procedural { material_id, .. } => materials::try_material(material_id)
            .and_then(|m| materials::next_upgrade_material(m.id))
            .is_some(),
        _ => false,
    }
}

pub fn can_upgrade_rarity(item: &Item) -> bool {
    match item {
        Item::Procedural { rarity_id, .. } => rarity::next_tier(rarity_id).is_some(),
        _ => false,
    }
}

pub fn can_upgrade(item: &Item, mode: UpgradeMode) -> bool {
    match mode {
        UpgradeMode::Material => can_upgrade_material(item),
        UpgradeMode::Rarity => can_upgrade_rarity(item),
        UpgradeMode::Auto | UpgradeMode::Random => {
            can_upgrade_material(item) || can_upgrade_rarity(item)
        }
    }
}

/// Steps the item to the next non-blacklisted material, rescaling stats and
/// value by the multiplier ratio and regenerating the display name from the
/// base-template reference (never reparsed from the old name).
pub fn upgrade_material(item: &Item) -> Result<Item, UpgradeError> {
    let Item::Procedural {
        base_id,
        material_id,
        rarity_id,
        variant,
        stats,
        value,
        ..
    } = item
    else {
        return Err(UpgradeError::NotUpgradable(
            upgrade_kind(item).unwrap_or("this"),
        ));
    };

    let current: &Material = materials::try_material(material_id)
        .ok_or_else(|| UpgradeError::UnresolvableMaterial(material_id.clone()))?;
    let next = materials::next_upgrade_material(current.id).ok_or(UpgradeError::MaterialAtMax)?;

    let stat_ratio = next.stat_multiplier / current.stat_multiplier;
    let value_ratio = next.value_multiplier / current.value_multiplier;
    let base = bases::base(base_id);

    Ok(Item::Procedural {
        base_id: base_id.clone(),
        material_id: next.id.to_string(),
        rarity_id: rarity_id.clone(),
        variant: *variant,
        name: format!("{} {}", next.prefix, base.variants[*variant].name),
        stats: stats.scaled(stat_ratio),
        value: (*value as f64 * value_ratio) as u32,
    })
}

/// Steps the rarity tier up by `1 + rarity_boost` rungs (clamped to the top
/// of the registry), rescaling stats and value by the tier-multiplier ratio.
pub fn upgrade_rarity(item: &Item, rarity_boost: u32) -> Result<Item, UpgradeError> {
    let Item::Procedural {
        base_id,
        material_id,
        rarity_id,
        variant,
        name,
        stats,
        value,
    } = item
    else {
        return Err(UpgradeError::NotUpgradable(
            upgrade_kind(item).unwrap_or("this"),
        ));
    };

    let current = rarity::tier(rarity_id);
    if rarity::next_tier(rarity_id).is_none() {
        return Err(UpgradeError::RarityAtMax);
    }
    let order = rarity::tier_order(rarity_id);
    let target_order =
        (order + 1 + rarity_boost as usize).min(rarity::NUM_RARITY_TIERS - 1);
    let target = &rarity::RARITY_TIERS[target_order];

    let ratio = target.stat_multiplier / current.stat_multiplier;
    Ok(Item::Procedural {
        base_id: base_id.clone(),
        material_id: material_id.clone(),
        rarity_id: target.id.to_string(),
        variant: *variant,
        name: name.clone(),
        stats: stats.scaled(ratio),
        value: (*value as f64 * ratio) as u32,
    })
}

/// Material upgrade when possible, rarity otherwise.
pub fn upgrade_auto(item: &Item) -> Result<Item, UpgradeError> {
    if can_upgrade_material(item) {
        upgrade_material(item)
    } else if can_upgrade_rarity(item) {
        upgrade_rarity(item, 0)
    } else if item.is_upgradable() {
        Err(UpgradeError::AtMax)
    } else {
        Err(UpgradeError::NotUpgradable(
            upgrade_kind(item).unwrap_or("this"),
        ))
    }
}

/// Uniform pick between the two ladders when both are legal.
pub fn upgrade_random(rng: &mut impl Rng, item: &Item) -> Result<Item, UpgradeError> {
    match (can_upgrade_material(item), can_upgrade_rarity(item)) {
        (true, true) => {
            if rng.gen_bool(0.5) {
                upgrade_material(item)
            } else {
                upgrade_rarity(item, 0)
            }
        }
        (true, false) => upgrade_material(item),
        (false, true) => upgrade_rarity(item, 0),
        (false, false) => {
            if item.is_upgradable() {
                Err(UpgradeError::AtMax)
            } else {
                Err(UpgradeError::NotUpgradable(
                    upgrade_kind(item).unwrap_or("this"),
                ))
            }
        }
    }
}

pub fn upgrade(
    rng: &mut impl Rng,
    item: &Item,
    mode: UpgradeMode,
    rarity_boost: u32,
) -> Result<Item, UpgradeError> {
    match mode {
        UpgradeMode::Material => upgrade_material(item),
        UpgradeMode::Rarity => upgrade_rarity(item, rarity_boost),
        UpgradeMode::Auto => upgrade_auto(item),
        UpgradeMode::Random => upgrade_random(rng, item),
    }
}

/// The upgrade candidate for "upgrade an equipped item" effects: the
/// lowest-rarity procedural item equipped across alive members. Unique, set,
/// and scrap items never qualify.
pub fn find_lowest_rarity_equipped(party: &[Character]) -> Option<(usize, SlotKind)> {
    let mut best: Option<(usize, SlotKind, usize)> = None;
    for (i, member) in party.iter().enumerate() {
        if !member.is_alive() {
            continue;
        }
        for (slot, item) in member.equipment.iter_slots() {
            if !item.is_upgradable() {
                continue;
            }
            let order = item.rarity_order();
            if best.map_or(true, |(_, _, b)| order < b) {
                best = Some((i, slot, order));
            }
        }
    }
    best.map(|(i, slot, _)| (i, slot))
}
