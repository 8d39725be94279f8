use serde::{Deserialize, Serialize};

use crate::bases;
use crate::rarity::{self, RARITY_TIERS};
use crate::stats::StatBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Amulet,
    Ring,
}

impl SlotKind {
    pub const ALL: [SlotKind; 6] = [
        SlotKind::Weapon,
        SlotKind::Armor,
        SlotKind::Helmet,
        SlotKind::Boots,
        SlotKind::Amulet,
        SlotKind::Ring,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SlotKind::Weapon => "Weapon",
            SlotKind::Armor => "Armor",
            SlotKind::Helmet => "Helmet",
            SlotKind::Boots => "Boots",
            SlotKind::Amulet => "Amulet",
            SlotKind::Ring => "Ring",
        }
    }

    /// Amulet and ring form the accessory family.
    pub fn is_accessory(&self) -> bool {
        matches!(self, SlotKind::Amulet | SlotKind::Ring)
    }
}

/// A concrete item instance.
///
/// Identity is carried by explicit ids (template/material/rarity/variant);
/// the stat block and value are derivable from those fields and are never
/// the sole source of truth. Serialization layers must preserve the ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Item {
    /// Composed from base template x material x rarity.
    Procedural {
        base_id: String,
        material_id: String,
        rarity_id: String,
        variant: usize,
        name: String,
        stats: StatBlock,
        value: u32,
    },
    /// Pre-authored, fixed-identity item with a quality boost over its
    /// listed rarity. Never upgradable.
    Unique {
        template_id: String,
        name: String,
        slot: SlotKind,
        rarity_id: String,
        stats: StatBlock,
        value: u32,
    },
    /// Pre-authored piece of a named set; may roll unique-quality.
    Set {
        template_id: String,
        set_id: String,
        name: String,
        slot: SlotKind,
        rarity_id: String,
        stats: StatBlock,
        value: u32,
        unique_quality: bool,
    },
    /// Stat-less fallback when no compatible material/base pair exists.
    Scrap { name: String, value: u32 },
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Procedural { name, .. }
            | Item::Unique { name, .. }
            | Item::Set { name, .. }
            | Item::Scrap { name, .. } => name,
        }
    }

    /// Slot the item occupies. `None` for scrap (it is not equippable) and
    /// for procedural items whose base template cannot be resolved.
    pub fn slot(&self) -> Option<SlotKind> {
        match self {
            Item::Procedural { base_id, .. } => bases::try_base(base_id).map(|b| b.slot),
            Item::Unique { slot, .. } | Item::Set { slot, .. } => Some(*slot),
            Item::Scrap { .. } => None,
        }
    }

    /// Scrap reports the lowest tier so ordering scans never special-case it.
    pub fn rarity_id(&self) -> &str {
        match self {
            Item::Procedural { rarity_id, .. }
            | Item::Unique { rarity_id, .. }
            | Item::Set { rarity_id, .. } => rarity_id,
            Item::Scrap { .. } => RARITY_TIERS[0].id,
        }
    }

    pub fn rarity_order(&self) -> usize {
        rarity::tier_order(self.rarity_id())
    }

    pub fn stats(&self) -> StatBlock {
        match self {
            Item::Procedural { stats, .. }
            | Item::Unique { stats, .. }
            | Item::Set { stats, .. } => *stats,
            Item::Scrap { .. } => StatBlock::ZERO,
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Item::Procedural { value, .. }
            | Item::Unique { value, .. }
            | Item::Set { value, .. }
            | Item::Scrap { value, .. } => *value,
        }
    }

    /// Only procedural items ride the upgrade ladders.
    pub fn is_upgradable(&self) -> bool {
        matches!(self, Item::Procedural { .. })
    }
}
