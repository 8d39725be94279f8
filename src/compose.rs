//! Item composer: turns identifying fields into a concrete item.
//!
//! Everything here is deterministic; the generator owns all randomness.
//! `compose` is the single derivation path for procedural stats, so an item
//! can always be rebuilt from its (base, material, rarity, variant) tuple.

use crate::bases::BaseTemplate;
use crate::constants::UNIQUE_BOOST;
use crate::items::Item;
use crate::materials::Material;
use crate::rarity::{tier, RarityTier};
use crate::uniques::{SetTemplate, UniqueTemplate};

/// Composes a procedural item. `variant` indexes the base's name-variant
/// list; an out-of-range index is an authoring bug and panics.
pub fn compose(
    base: &'static BaseTemplate,
    material: &'static Material,
    rarity: &'static RarityTier,
    variant: usize,
) -> Item {
    let variant_name = base.variants[variant].name;
    let factor = material.stat_multiplier * rarity.stat_multiplier;
    Item::Procedural {
        base_id: base.id.to_string(),
        material_id: material.id.to_string(),
        rarity_id: rarity.id.to_string(),
        variant,
        name: format!("{} {}", material.prefix, variant_name),
        stats: base.stats.scaled(factor),
        value: (base.base_value as f64 * material.value_multiplier * rarity.stat_multiplier)
            as u32,
    }
}

/// Composes a unique. The +30% quality boost is applied once, on top of the
/// listed rarity's scaling.
pub fn compose_unique(template: &'static UniqueTemplate) -> Item {
    let rarity = tier(template.rarity_id);
    let factor = rarity.stat_multiplier * (1.0 + UNIQUE_BOOST);
    Item::Unique {
        template_id: template.id.to_string(),
        name: template.name.to_string(),
        slot: template.slot,
        rarity_id: template.rarity_id.to_string(),
        stats: template.stats.scaled(factor),
        value: (template.base_value as f64 * (1.0 + UNIQUE_BOOST)) as u32,
    }
}

/// Composes a set piece. A unique-quality roll adds the same +30% factor a
/// unique gets; the two boosts never stack on one item.
pub fn compose_set(template: &'static SetTemplate, unique_quality: bool) -> Item {
    let rarity = tier(template.rarity_id);
    let boost = if unique_quality { 1.0 + UNIQUE_BOOST } else { 1.0 };
    Item::Set {
        template_id: template.id.to_string(),
        set_id: template.set_id.to_string(),
        name: template.name.to_string(),
        slot: template.slot,
        rarity_id: template.rarity_id.to_string(),
        stats: template.stats.scaled(rarity.stat_multiplier * boost),
        value: (template.base_value as f64 * boost) as u32,
        unique_quality,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bases::base;
    use crate::items::SlotKind;
    use crate::materials::material;
    use crate::uniques::{set_template, unique};

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose(base("longsword"), material("iron"), tier("common"), 0);
        let b = compose(base("longsword"), material("iron"), tier("common"), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_floors_stats() {
        // longsword attack 12, iron 1.0, common 1.0 -> 12
        let item = compose(base("longsword"), material("iron"), tier("common"), 0);
        assert_eq!(item.stats().attack, 12);
        assert_eq!(item.name(), "Iron Longsword");

        // steel 1.2 -> floor(12 * 1.2) = 14
        let item = compose(base("longsword"), material("steel"), tier("common"), 0);
        assert_eq!(item.stats().attack, 14);
        assert_eq!(item.name(), "Steel Longsword");
    }

    #[test]
    fn test_compose_multipliers_stack() {
        // spear attack 10, steel 1.2, fine 1.2 -> floor(10 * 1.44) = 14
        let item = compose(base("spear"), material("steel"), tier("fine"), 0);
        assert_eq!(item.stats().attack, 14);
    }

    #[test]
    fn test_variant_selects_display_name() {
        let item = compose(base("longsword"), material("iron"), tier("common"), 2);
        assert_eq!(item.name(), "Iron Greatsword");
        match item {
            Item::Procedural { variant, .. } => assert_eq!(variant, 2),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_value_uses_value_multiplier() {
        // longsword 25, gold value mult 2.2, common 1.0 -> 55
        let item = compose(base("longsword"), material("gold"), tier("common"), 0);
        assert_eq!(item.value(), 55);
    }

    #[test]
    fn test_unique_gets_single_boost() {
        // worldsplitter attack 40, legendary 3.0, boost 1.3 -> floor(40 * 3.9) = 156
        let item = compose_unique(unique("worldsplitter"));
        assert_eq!(item.stats().attack, 156);
        assert_eq!(item.slot(), Some(SlotKind::Weapon));
        assert!(!item.is_upgradable());
    }

    #[test]
    fn test_set_unique_quality_boost() {
        let plain = compose_set(set_template("gravewatch-blade"), false);
        let boosted = compose_set(set_template("gravewatch-blade"), true);
        // exquisite 1.9: plain floor(18*1.9)=34, boosted floor(18*2.47)=44
        assert_eq!(plain.stats().attack, 34);
        assert_eq!(boosted.stats().attack, 44);
        assert!(boosted.value() > plain.value());
    }
}
