//! Rarity tier registry.
//!
//! A fixed, ordered table of tiers. Order is by `min_depth`; stat multipliers
//! are non-decreasing along the table. Lookups by unknown id are authoring
//! bugs and panic rather than degrade.

#[derive(Debug, Clone, PartialEq)]
pub struct RarityTier {
    pub id: &'static str,
    pub name: &'static str,
    pub stat_multiplier: f64,
    /// Shallowest dungeon depth at which this tier can drop.
    pub min_depth: u32,
}

pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier { id: "common", name: "Common", stat_multiplier: 1.0, min_depth: 0 },
    RarityTier { id: "uncommon", name: "Uncommon", stat_multiplier: 1.1, min_depth: 1 },
    RarityTier { id: "fine", name: "Fine", stat_multiplier: 1.2, min_depth: 2 },
    RarityTier { id: "superior", name: "Superior", stat_multiplier: 1.35, min_depth: 4 },
    RarityTier { id: "exceptional", name: "Exceptional", stat_multiplier: 1.5, min_depth: 6 },
    RarityTier { id: "rare", name: "Rare", stat_multiplier: 1.7, min_depth: 8 },
    RarityTier { id: "exquisite", name: "Exquisite", stat_multiplier: 1.9, min_depth: 10 },
    RarityTier { id: "epic", name: "Epic", stat_multiplier: 2.15, min_depth: 12 },
    RarityTier { id: "fabled", name: "Fabled", stat_multiplier: 2.4, min_depth: 14 },
    RarityTier { id: "mythic", name: "Mythic", stat_multiplier: 2.7, min_depth: 16 },
    RarityTier { id: "legendary", name: "Legendary", stat_multiplier: 3.0, min_depth: 18 },
    RarityTier { id: "artifact", name: "Artifact", stat_multiplier: 3.4, min_depth: 20 },
    RarityTier { id: "relic", name: "Relic", stat_multiplier: 3.8, min_depth: 22 },
    RarityTier { id: "ancient", name: "Ancient", stat_multiplier: 4.25, min_depth: 24 },
    RarityTier { id: "primordial", name: "Primordial", stat_multiplier: 4.75, min_depth: 26 },
    RarityTier { id: "astral", name: "Astral", stat_multiplier: 5.3, min_depth: 28 },
    RarityTier { id: "ethereal", name: "Ethereal", stat_multiplier: 5.9, min_depth: 30 },
    RarityTier { id: "celestial", name: "Celestial", stat_multiplier: 6.6, min_depth: 32 },
    RarityTier { id: "divine", name: "Divine", stat_multiplier: 7.4, min_depth: 34 },
    RarityTier { id: "transcendent", name: "Transcendent", stat_multiplier: 8.25, min_depth: 36 },
];

pub const NUM_RARITY_TIERS: usize = RARITY_TIERS.len();

/// Looks up a tier by id. Panics on unknown ids: the registry is static and
/// a miss is a data-authoring bug, not a runtime condition.
pub fn tier(id: &str) -> &'static RarityTier {
    try_tier(id).unwrap_or_else(|| panic!("unknown rarity tier id: {id:?}"))
}

pub fn try_tier(id: &str) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|t| t.id == id)
}

pub fn ordered_tiers() -> &'static [RarityTier] {
    RARITY_TIERS
}

/// Position of the tier in the ladder, 0-based.
pub fn tier_order(id: &str) -> usize {
    RARITY_TIERS
        .iter()
        .position(|t| t.id == id)
        .unwrap_or_else(|| panic!("unknown rarity tier id: {id:?}"))
}

pub fn tiers_unlocked_at(depth: u32) -> impl Iterator<Item = &'static RarityTier> {
    RARITY_TIERS.iter().filter(move |t| t.min_depth <= depth)
}

/// The tier one rung above, if any.
pub fn next_tier(id: &str) -> Option<&'static RarityTier> {
    RARITY_TIERS.get(tier_order(id) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_depth_strictly_increasing() {
        for pair in RARITY_TIERS.windows(2) {
            assert!(
                pair[0].min_depth < pair[1].min_depth,
                "{} and {} break the depth ordering",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_multiplier_non_decreasing() {
        for pair in RARITY_TIERS.windows(2) {
            assert!(
                pair[0].stat_multiplier <= pair[1].stat_multiplier,
                "{} -> {} decreases the stat multiplier",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_tier_lookup() {
        assert_eq!(tier("common").name, "Common");
        assert_eq!(tier("transcendent").stat_multiplier, 8.25);
        assert_eq!(tier_order("common"), 0);
        assert_eq!(tier_order("transcendent"), NUM_RARITY_TIERS - 1);
    }

    #[test]
    #[should_panic(expected = "unknown rarity tier id")]
    fn test_unknown_tier_panics() {
        tier("plastic");
    }

    #[test]
    fn test_tiers_unlocked_at_depth_zero() {
        let unlocked: Vec<_> = tiers_unlocked_at(0).collect();
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "common");
    }

    #[test]
    fn test_tiers_unlocked_at_deep() {
        let unlocked: Vec<_> = tiers_unlocked_at(36).collect();
        assert_eq!(unlocked.len(), NUM_RARITY_TIERS);
    }

    #[test]
    fn test_next_tier_chain_terminates() {
        let mut current = &RARITY_TIERS[0];
        let mut steps = 0;
        while let Some(next) = next_tier(current.id) {
            current = next;
            steps += 1;
        }
        assert_eq!(steps, NUM_RARITY_TIERS - 1);
        assert_eq!(current.id, "transcendent");
    }
}
