//! Base template catalog: the "shape" half of a procedural item.

use crate::items::SlotKind;
use crate::materials::Material;
use crate::stats::StatBlock;

#[derive(Debug, Clone, PartialEq)]
pub struct NameVariant {
    pub name: &'static str,
    /// Presentation-layer icon override; `None` uses the slot default.
    pub icon: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseTemplate {
    pub id: &'static str,
    pub slot: SlotKind,
    pub stats: StatBlock,
    pub base_value: u32,
    pub variants: &'static [NameVariant],
    /// Explicit material restriction. Empty = any slot-compatible material.
    pub materials: &'static [&'static str],
}

impl BaseTemplate {
    pub fn accepts(&self, material: &Material) -> bool {
        material.allows(self.slot)
            && (self.materials.is_empty() || self.materials.contains(&material.id))
    }
}

const fn stats(attack: u32, defense: u32, health: u32, speed: u32, luck: u32) -> StatBlock {
    StatBlock { attack, defense, health, speed, luck }
}

pub const BASE_TEMPLATES: &[BaseTemplate] = &[
    // Weapons
    BaseTemplate {
        id: "longsword",
        slot: SlotKind::Weapon,
        stats: stats(12, 0, 0, 2, 0),
        base_value: 25,
        variants: &[
            NameVariant { name: "Longsword", icon: None },
            NameVariant { name: "Broadsword", icon: None },
            NameVariant { name: "Greatsword", icon: Some("greatsword") },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "battleaxe",
        slot: SlotKind::Weapon,
        stats: stats(15, 0, 0, 0, 0),
        base_value: 28,
        variants: &[
            NameVariant { name: "Battleaxe", icon: None },
            NameVariant { name: "War Axe", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "spear",
        slot: SlotKind::Weapon,
        stats: stats(10, 2, 0, 3, 0),
        base_value: 22,
        variants: &[
            NameVariant { name: "Spear", icon: None },
            NameVariant { name: "Glaive", icon: None },
            NameVariant { name: "Halberd", icon: Some("halberd") },
        ],
        materials: &[],
    },
    // Armor
    BaseTemplate {
        id: "cuirass",
        slot: SlotKind::Armor,
        stats: stats(0, 12, 20, 0, 0),
        base_value: 30,
        variants: &[
            NameVariant { name: "Cuirass", icon: None },
            NameVariant { name: "Breastplate", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "hauberk",
        slot: SlotKind::Armor,
        stats: stats(0, 9, 15, 3, 0),
        base_value: 26,
        variants: &[
            NameVariant { name: "Hauberk", icon: None },
            NameVariant { name: "Scale Mail", icon: None },
        ],
        materials: &[],
    },
    // The robe only comes in cloth: the classic incompatible pick.
    BaseTemplate {
        id: "robe",
        slot: SlotKind::Armor,
        stats: stats(0, 4, 10, 2, 4),
        base_value: 18,
        variants: &[
            NameVariant { name: "Robe", icon: None },
            NameVariant { name: "Vestment", icon: None },
        ],
        materials: &["cloth"],
    },
    // Helmets
    BaseTemplate {
        id: "greathelm",
        slot: SlotKind::Helmet,
        stats: stats(0, 8, 10, 0, 0),
        base_value: 20,
        variants: &[
            NameVariant { name: "Greathelm", icon: None },
            NameVariant { name: "Barbute", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "circlet",
        slot: SlotKind::Helmet,
        stats: stats(0, 3, 5, 2, 5),
        base_value: 24,
        variants: &[
            NameVariant { name: "Circlet", icon: None },
            NameVariant { name: "Diadem", icon: Some("diadem") },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "hood",
        slot: SlotKind::Helmet,
        stats: stats(0, 4, 6, 4, 2),
        base_value: 16,
        variants: &[
            NameVariant { name: "Hood", icon: None },
            NameVariant { name: "Cowl", icon: None },
        ],
        materials: &["cloth", "leather"],
    },
    // Boots
    BaseTemplate {
        id: "greaves",
        slot: SlotKind::Boots,
        stats: stats(0, 6, 8, 2, 0),
        base_value: 18,
        variants: &[
            NameVariant { name: "Greaves", icon: None },
            NameVariant { name: "Sabatons", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "striders",
        slot: SlotKind::Boots,
        stats: stats(0, 3, 4, 8, 0),
        base_value: 20,
        variants: &[
            NameVariant { name: "Striders", icon: None },
            NameVariant { name: "Treads", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "sandals",
        slot: SlotKind::Boots,
        stats: stats(0, 1, 2, 10, 2),
        base_value: 14,
        variants: &[
            NameVariant { name: "Sandals", icon: None },
            NameVariant { name: "Slippers", icon: None },
        ],
        materials: &["cloth", "leather"],
    },
    // Amulets
    BaseTemplate {
        id: "pendant",
        slot: SlotKind::Amulet,
        stats: stats(0, 0, 15, 0, 4),
        base_value: 26,
        variants: &[
            NameVariant { name: "Pendant", icon: None },
            NameVariant { name: "Necklace", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "talisman",
        slot: SlotKind::Amulet,
        stats: stats(3, 0, 8, 0, 6),
        base_value: 28,
        variants: &[
            NameVariant { name: "Talisman", icon: None },
            NameVariant { name: "Phylactery", icon: Some("phylactery") },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "locket",
        slot: SlotKind::Amulet,
        stats: stats(0, 2, 10, 2, 3),
        base_value: 22,
        variants: &[
            NameVariant { name: "Locket", icon: None },
            NameVariant { name: "Charm", icon: None },
        ],
        materials: &[],
    },
    // Rings
    BaseTemplate {
        id: "signet",
        slot: SlotKind::Ring,
        stats: stats(4, 0, 0, 0, 5),
        base_value: 24,
        variants: &[
            NameVariant { name: "Signet", icon: None },
            NameVariant { name: "Seal", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "band",
        slot: SlotKind::Ring,
        stats: stats(0, 3, 6, 0, 3),
        base_value: 20,
        variants: &[
            NameVariant { name: "Band", icon: None },
            NameVariant { name: "Ring", icon: None },
        ],
        materials: &[],
    },
    BaseTemplate {
        id: "loop",
        slot: SlotKind::Ring,
        stats: stats(2, 0, 0, 5, 4),
        base_value: 18,
        variants: &[
            NameVariant { name: "Loop", icon: None },
            NameVariant { name: "Coil", icon: None },
        ],
        materials: &[],
    },
];

/// Looks up a base template by id. Panics on unknown ids (authoring bug).
pub fn base(id: &str) -> &'static BaseTemplate {
    try_base(id).unwrap_or_else(|| panic!("unknown base template id: {id:?}"))
}

pub fn try_base(id: &str) -> Option<&'static BaseTemplate> {
    BASE_TEMPLATES.iter().find(|b| b.id == id)
}

pub fn bases_for_slot(slot: SlotKind) -> impl Iterator<Item = &'static BaseTemplate> {
    BASE_TEMPLATES.iter().filter(move |b| b.slot == slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::material;

    #[test]
    fn test_every_slot_has_three_bases() {
        for slot in SlotKind::ALL {
            assert_eq!(bases_for_slot(slot).count(), 3, "{slot:?}");
        }
    }

    #[test]
    fn test_every_base_has_variants() {
        for b in BASE_TEMPLATES {
            assert!(!b.variants.is_empty(), "{} has no name variants", b.id);
            assert!(b.base_value > 0, "{} has zero value", b.id);
        }
    }

    #[test]
    fn test_robe_only_accepts_cloth() {
        let robe = base("robe");
        assert!(robe.accepts(material("cloth")));
        assert!(!robe.accepts(material("iron")));
        assert!(!robe.accepts(material("leather")));
    }

    #[test]
    fn test_unrestricted_base_accepts_slot_compatible_materials() {
        let sword = base("longsword");
        assert!(sword.accepts(material("iron")));
        assert!(sword.accepts(material("wood")));
        // cloth cannot form weapons regardless of the base being unrestricted
        assert!(!sword.accepts(material("cloth")));
    }

    #[test]
    #[should_panic(expected = "unknown base template id")]
    fn test_unknown_base_panics() {
        base("chainsaw");
    }
}
