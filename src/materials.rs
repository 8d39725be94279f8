//! Material catalog and upgrade ladder.
//!
//! Table order IS the upgrade ladder. Blacklisted entries can drop from
//! direct generation but are skipped over when upgrading.

use crate::constants::MATERIAL_WINDOW;
use crate::items::SlotKind;
use crate::rarity::NUM_RARITY_TIERS;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub id: &'static str,
    /// Display prefix, e.g. "Iron" in "Iron Longsword".
    pub prefix: &'static str,
    pub stat_multiplier: f64,
    pub value_multiplier: f64,
    /// Slots this material can form. Empty = every slot.
    pub slots: &'static [SlotKind],
    /// Reachable only via direct generation, never as an upgrade target.
    pub upgrade_blacklisted: bool,
}

impl Material {
    pub fn allows(&self, slot: SlotKind) -> bool {
        self.slots.is_empty() || self.slots.contains(&slot)
    }
}

const ARMOR_LIKE: &[SlotKind] = &[SlotKind::Armor, SlotKind::Helmet, SlotKind::Boots];
const WEAPON_AND_JEWELRY: &[SlotKind] = &[SlotKind::Weapon, SlotKind::Amulet, SlotKind::Ring];

pub const MATERIALS: &[Material] = &[
    Material { id: "cloth", prefix: "Cloth", stat_multiplier: 0.5, value_multiplier: 0.4, slots: ARMOR_LIKE, upgrade_blacklisted: false },
    Material { id: "wood", prefix: "Wooden", stat_multiplier: 0.6, value_multiplier: 0.5, slots: WEAPON_AND_JEWELRY, upgrade_blacklisted: false },
    Material { id: "leather", prefix: "Leather", stat_multiplier: 0.7, value_multiplier: 0.6, slots: ARMOR_LIKE, upgrade_blacklisted: false },
    Material { id: "bone", prefix: "Bone", stat_multiplier: 0.8, value_multiplier: 0.7, slots: WEAPON_AND_JEWELRY, upgrade_blacklisted: false },
    Material { id: "copper", prefix: "Copper", stat_multiplier: 0.9, value_multiplier: 0.85, slots: &[], upgrade_blacklisted: false },
    Material { id: "iron", prefix: "Iron", stat_multiplier: 1.0, value_multiplier: 1.0, slots: &[], upgrade_blacklisted: false },
    Material { id: "steel", prefix: "Steel", stat_multiplier: 1.2, value_multiplier: 1.25, slots: &[], upgrade_blacklisted: false },
    Material { id: "silver", prefix: "Silver", stat_multiplier: 1.35, value_multiplier: 1.6, slots: &[], upgrade_blacklisted: false },
    Material { id: "gold", prefix: "Golden", stat_multiplier: 1.5, value_multiplier: 2.2, slots: &[], upgrade_blacklisted: false },
    Material { id: "platinum", prefix: "Platinum", stat_multiplier: 1.7, value_multiplier: 2.8, slots: &[], upgrade_blacklisted: false },
    Material { id: "obsidian", prefix: "Obsidian", stat_multiplier: 1.9, value_multiplier: 3.2, slots: &[], upgrade_blacklisted: false },
    Material { id: "mithril", prefix: "Mithril", stat_multiplier: 2.15, value_multiplier: 3.8, slots: &[], upgrade_blacklisted: false },
    Material { id: "adamant", prefix: "Adamant", stat_multiplier: 2.4, value_multiplier: 4.5, slots: &[], upgrade_blacklisted: false },
    Material { id: "runesteel", prefix: "Runesteel", stat_multiplier: 2.7, value_multiplier: 5.3, slots: &[], upgrade_blacklisted: false },
    Material { id: "dragonbone", prefix: "Dragonbone", stat_multiplier: 3.0, value_multiplier: 6.2, slots: &[], upgrade_blacklisted: false },
    Material { id: "voidglass", prefix: "Voidglass", stat_multiplier: 3.4, value_multiplier: 7.2, slots: &[], upgrade_blacklisted: false },
    Material { id: "starmetal", prefix: "Starmetal", stat_multiplier: 3.8, value_multiplier: 8.4, slots: &[], upgrade_blacklisted: false },
    Material { id: "demonsteel", prefix: "Demonsteel", stat_multiplier: 4.25, value_multiplier: 9.8, slots: &[], upgrade_blacklisted: true },
    Material { id: "soulforged", prefix: "Soulforged", stat_multiplier: 4.7, value_multiplier: 11.4, slots: &[], upgrade_blacklisted: false },
    Material { id: "celestine", prefix: "Celestine", stat_multiplier: 5.2, value_multiplier: 13.2, slots: &[], upgrade_blacklisted: true },
    Material { id: "aetherium", prefix: "Aetherium", stat_multiplier: 5.8, value_multiplier: 15.4, slots: &[], upgrade_blacklisted: false },
    Material { id: "primal", prefix: "Primal", stat_multiplier: 6.5, value_multiplier: 18.0, slots: &[], upgrade_blacklisted: false },
];

pub const NUM_MATERIALS: usize = MATERIALS.len();

/// Looks up a material by id. Panics on unknown ids (authoring bug).
pub fn material(id: &str) -> &'static Material {
    try_material(id).unwrap_or_else(|| panic!("unknown material id: {id:?}"))
}

pub fn try_material(id: &str) -> Option<&'static Material> {
    MATERIALS.iter().find(|m| m.id == id)
}

pub fn ordered_materials() -> &'static [Material] {
    MATERIALS
}

pub fn material_order(id: &str) -> usize {
    MATERIALS
        .iter()
        .position(|m| m.id == id)
        .unwrap_or_else(|| panic!("unknown material id: {id:?}"))
}

/// The next upgrade target above `id`: the first non-blacklisted successor.
pub fn next_upgrade_material(id: &str) -> Option<&'static Material> {
    MATERIALS[material_order(id) + 1..]
        .iter()
        .find(|m| !m.upgrade_blacklisted)
}

/// Slot-compatible materials in the band matching a rarity rank.
///
/// The rarity ladder position is projected onto the material ladder and a
/// window of `MATERIAL_WINDOW` either side is taken, so deep rare drops come
/// out in deep materials. Falls back to every compatible material when the
/// window has none (heavily slot-restricted early bands).
pub fn materials_for(slot: SlotKind, rarity_order: usize) -> Vec<&'static Material> {
    let target = rarity_order * (NUM_MATERIALS - 1) / (NUM_RARITY_TIERS - 1);
    let lo = target.saturating_sub(MATERIAL_WINDOW);
    let hi = (target + MATERIAL_WINDOW).min(NUM_MATERIALS - 1);

    let windowed: Vec<&'static Material> = MATERIALS[lo..=hi]
        .iter()
        .filter(|m| m.allows(slot))
        .collect();
    if !windowed.is_empty() {
        return windowed;
    }
    MATERIALS.iter().filter(|m| m.allows(slot)).collect()
}
