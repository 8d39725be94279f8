//! Load-time validation of the static catalogs.
//!
//! The engine panics on unknown-id lookups, so a malformed catalog must be
//! caught before play. Callers run this once at startup; the test suite runs
//! it on every build.

use thiserror::Error;

use crate::bases::BASE_TEMPLATES;
use crate::materials::{try_material, MATERIALS};
use crate::rarity::{try_tier, RARITY_TIERS};
use crate::uniques::{try_unique, REVIVAL_TRINKET_ID, SET_ITEMS, UNIQUE_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate catalog id {0:?}")]
    DuplicateId(&'static str),
    #[error("rarity min_depth not strictly increasing at {0:?}")]
    RarityOrdering(&'static str),
    #[error("rarity stat multiplier decreases at {0:?}")]
    RarityMultiplier(&'static str),
    #[error("material stat multiplier decreases at {0:?}")]
    MaterialMultiplier(&'static str),
    #[error("the first material on the ladder must not be blacklisted")]
    BlacklistedLadderStart,
    #[error("base {base:?} references unknown material {material:?}")]
    UnknownBaseMaterial {
        base: &'static str,
        material: &'static str,
    },
    #[error("base {0:?} has no compatible material")]
    NoCompatibleMaterial(&'static str),
    #[error("base {0:?} has no name variants")]
    NoNameVariants(&'static str),
    #[error("template {template:?} references unknown rarity {rarity:?}")]
    UnknownTemplateRarity {
        template: &'static str,
        rarity: &'static str,
    },
    #[error("revival trinket {0:?} is missing from the unique catalog")]
    MissingRevivalTrinket(&'static str),
}

pub fn validate_catalogs() -> Result<(), CatalogError> {
    check_unique_ids()?;
    check_rarity_table()?;
    check_material_ladder()?;
    check_base_templates()?;
    check_authored_templates()?;
    Ok(())
}

fn check_unique_ids() -> Result<(), CatalogError> {
    let mut seen = std::collections::HashSet::new();
    let all_ids = RARITY_TIERS
        .iter()
        .map(|t| t.id)
        .chain(MATERIALS.iter().map(|m| m.id))
        .chain(BASE_TEMPLATES.iter().map(|b| b.id))
        .chain(UNIQUE_ITEMS.iter().map(|u| u.id))
        .chain(SET_ITEMS.iter().map(|s| s.id));
    for id in all_ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId(id));
        }
    }
    Ok(())
}

fn check_rarity_table() -> Result<(), CatalogError> {
    for pair in RARITY_TIERS.windows(2) {
        if pair[0].min_depth >= pair[1].min_depth {
            return Err(CatalogError::RarityOrdering(pair[1].id));
        }
        if pair[0].stat_multiplier > pair[1].stat_multiplier {
            return Err(CatalogError::RarityMultiplier(pair[1].id));
        }
    }
    Ok(())
}

fn check_material_ladder() -> Result<(), CatalogError> {
    if MATERIALS.first().is_some_and(|m| m.upgrade_blacklisted) {
        return Err(CatalogError::BlacklistedLadderStart);
    }
    for pair in MATERIALS.windows(2) {
        if pair[0].stat_multiplier > pair[1].stat_multiplier {
            return Err(CatalogError::MaterialMultiplier(pair[1].id));
        }
    }
    Ok(())
}

fn check_base_templates() -> Result<(), CatalogError> {
    for base in BASE_TEMPLATES {
        if base.variants.is_empty() {
            return Err(CatalogError::NoNameVariants(base.id));
        }
        for material_id in base.materials {
            if try_material(material_id).is_none() {
                return Err(CatalogError::UnknownBaseMaterial {
                    base: base.id,
                    material: material_id,
                });
            }
        }
        if !MATERIALS.iter().any(|m| base.accepts(m)) {
            return Err(CatalogError::NoCompatibleMaterial(base.id));
        }
    }
    Ok(())
}

fn check_authored_templates() -> Result<(), CatalogError> {
    for unique in UNIQUE_ITEMS {
        if try_tier(unique.rarity_id).is_none() {
            return Err(CatalogError::UnknownTemplateRarity {
                template: unique.id,
                rarity: unique.rarity_id,
            });
        }
    }
    for piece in SET_ITEMS {
        if try_tier(piece.rarity_id).is_none() {
            return Err(CatalogError::UnknownTemplateRarity {
                template: piece.id,
                rarity: piece.rarity_id,
            });
        }
    }
    if try_unique(REVIVAL_TRINKET_ID).is_none() {
        return Err(CatalogError::MissingRevivalTrinket(REVIVAL_TRINKET_ID));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_catalogs_validate() {
        assert_eq!(validate_catalogs(), Ok(()));
    }
}
