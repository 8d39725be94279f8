//! Pre-authored unique items and set pieces.

use crate::items::SlotKind;
use crate::stats::StatBlock;

/// Unique whose holder is flagged for revival instead of a clean death.
pub const REVIVAL_TRINKET_ID: &str = "phoenix-charm";

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: SlotKind,
    /// Listed rarity; composed stats get the unique boost on top of it.
    pub rarity_id: &'static str,
    pub stats: StatBlock,
    pub base_value: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub set_id: &'static str,
    pub set_name: &'static str,
    pub slot: SlotKind,
    pub rarity_id: &'static str,
    pub stats: StatBlock,
    pub base_value: u32,
}

const fn stats(attack: u32, defense: u32, health: u32, speed: u32, luck: u32) -> StatBlock {
    StatBlock { attack, defense, health, speed, luck }
}

pub const UNIQUE_ITEMS: &[UniqueTemplate] = &[
    UniqueTemplate {
        id: "grief",
        name: "Grief",
        slot: SlotKind::Weapon,
        rarity_id: "rare",
        stats: stats(22, 0, 0, 4, 0),
        base_value: 180,
    },
    UniqueTemplate {
        id: "bulwark-of-the-deep",
        name: "Bulwark of the Deep",
        slot: SlotKind::Armor,
        rarity_id: "rare",
        stats: stats(0, 20, 35, 0, 0),
        base_value: 200,
    },
    UniqueTemplate {
        id: "crown-of-whispers",
        name: "Crown of Whispers",
        slot: SlotKind::Helmet,
        rarity_id: "epic",
        stats: stats(0, 10, 12, 3, 9),
        base_value: 260,
    },
    UniqueTemplate {
        id: "seven-league-boots",
        name: "Seven-League Boots",
        slot: SlotKind::Boots,
        rarity_id: "epic",
        stats: stats(0, 4, 6, 18, 2),
        base_value: 240,
    },
    UniqueTemplate {
        id: "phoenix-charm",
        name: "Phoenix Charm",
        slot: SlotKind::Amulet,
        rarity_id: "fabled",
        stats: stats(0, 0, 30, 0, 8),
        base_value: 420,
    },
    UniqueTemplate {
        id: "gamblers-signet",
        name: "Gambler's Signet",
        slot: SlotKind::Ring,
        rarity_id: "fabled",
        stats: stats(5, 0, 0, 0, 16),
        base_value: 380,
    },
    UniqueTemplate {
        id: "worldsplitter",
        name: "Worldsplitter",
        slot: SlotKind::Weapon,
        rarity_id: "legendary",
        stats: stats(40, 0, 0, 6, 0),
        base_value: 900,
    },
    UniqueTemplate {
        id: "aegis-of-dawn",
        name: "Aegis of Dawn",
        slot: SlotKind::Armor,
        rarity_id: "legendary",
        stats: stats(0, 34, 60, 0, 4),
        base_value: 950,
    },
];

pub const SET_ITEMS: &[SetTemplate] = &[
    SetTemplate {
        id: "gravewatch-blade",
        name: "Gravewatch Blade",
        set_id: "gravewatch",
        set_name: "Gravewatch Vigil",
        slot: SlotKind::Weapon,
        rarity_id: "exquisite",
        stats: stats(18, 0, 0, 3, 2),
        base_value: 220,
    },
    SetTemplate {
        id: "gravewatch-plate",
        name: "Gravewatch Plate",
        set_id: "gravewatch",
        set_name: "Gravewatch Vigil",
        slot: SlotKind::Armor,
        rarity_id: "exquisite",
        stats: stats(0, 16, 28, 0, 2),
        base_value: 230,
    },
    SetTemplate {
        id: "gravewatch-visage",
        name: "Gravewatch Visage",
        set_id: "gravewatch",
        set_name: "Gravewatch Vigil",
        slot: SlotKind::Helmet,
        rarity_id: "exquisite",
        stats: stats(0, 9, 14, 2, 3),
        base_value: 190,
    },
    SetTemplate {
        id: "gravewatch-march",
        name: "Gravewatch March",
        set_id: "gravewatch",
        set_name: "Gravewatch Vigil",
        slot: SlotKind::Boots,
        rarity_id: "exquisite",
        stats: stats(0, 5, 8, 9, 1),
        base_value: 180,
    },
    SetTemplate {
        id: "tidecaller-locket",
        name: "Tidecaller Locket",
        set_id: "tidecaller",
        set_name: "Tidecaller's Bargain",
        slot: SlotKind::Amulet,
        rarity_id: "mythic",
        stats: stats(0, 0, 26, 4, 7),
        base_value: 360,
    },
    SetTemplate {
        id: "tidecaller-coil",
        name: "Tidecaller Coil",
        set_id: "tidecaller",
        set_name: "Tidecaller's Bargain",
        slot: SlotKind::Ring,
        rarity_id: "mythic",
        stats: stats(6, 0, 0, 6, 9),
        base_value: 340,
    },
];

pub fn unique(id: &str) -> &'static UniqueTemplate {
    try_unique(id).unwrap_or_else(|| panic!("unknown unique template id: {id:?}"))
}

pub fn try_unique(id: &str) -> Option<&'static UniqueTemplate> {
    UNIQUE_ITEMS.iter().find(|u| u.id == id)
}

/// Uniques matching both slot and listed rarity, for the generator's
/// per-tier unique roll.
pub fn uniques_for(slot: SlotKind, rarity_id: &str) -> Vec<&'static UniqueTemplate> {
    UNIQUE_ITEMS
        .iter()
        .filter(|u| u.slot == slot && u.rarity_id == rarity_id)
        .collect()
}

pub fn set_template(id: &str) -> &'static SetTemplate {
    try_set_template(id).unwrap_or_else(|| panic!("unknown set template id: {id:?}"))
}

pub fn try_set_template(id: &str) -> Option<&'static SetTemplate> {
    SET_ITEMS.iter().find(|s| s.id == id)
}

pub fn sets_for_slot(slot: SlotKind) -> Vec<&'static SetTemplate> {
    SET_ITEMS.iter().filter(|s| s.slot == slot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::try_tier;

    #[test]
    fn test_templates_reference_known_rarities() {
        for u in UNIQUE_ITEMS {
            assert!(try_tier(u.rarity_id).is_some(), "{} bad rarity", u.id);
        }
        for s in SET_ITEMS {
            assert!(try_tier(s.rarity_id).is_some(), "{} bad rarity", s.id);
        }
    }

    #[test]
    fn test_revival_trinket_exists() {
        let trinket = unique(REVIVAL_TRINKET_ID);
        assert_eq!(trinket.slot, SlotKind::Amulet);
    }

    #[test]
    fn test_uniques_for_filters_slot_and_rarity() {
        let found = uniques_for(SlotKind::Weapon, "legendary");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "worldsplitter");
        assert!(uniques_for(SlotKind::Ring, "common").is_empty());
    }

    #[test]
    fn test_gravewatch_set_spans_four_slots() {
        let pieces: Vec<_> = SET_ITEMS.iter().filter(|s| s.set_id == "gravewatch").collect();
        assert_eq!(pieces.len(), 4);
        let mut slots: Vec<_> = pieces.iter().map(|p| p.slot).collect();
        slots.dedup();
        assert_eq!(slots.len(), 4, "set pieces must occupy distinct slots");
    }
}
