use serde::{Deserialize, Serialize};

use crate::items::{Item, SlotKind};
use crate::stats::StatBlock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub helmet: Option<Item>,
    pub boots: Option<Item>,
    pub amulet: Option<Item>,
    pub ring: Option<Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            weapon: None,
            armor: None,
            helmet: None,
            boots: None,
            amulet: None,
            ring: None,
        }
    }

    pub fn get(&self, slot: SlotKind) -> &Option<Item> {
        match slot {
            SlotKind::Weapon => &self.weapon,
            SlotKind::Armor => &self.armor,
            SlotKind::Helmet => &self.helmet,
            SlotKind::Boots => &self.boots,
            SlotKind::Amulet => &self.amulet,
            SlotKind::Ring => &self.ring,
        }
    }

    pub fn set(&mut self, slot: SlotKind, item: Option<Item>) {
        match slot {
            SlotKind::Weapon => self.weapon = item,
            SlotKind::Armor => self.armor = item,
            SlotKind::Helmet => self.helmet = item,
            SlotKind::Boots => self.boots = item,
            SlotKind::Amulet => self.amulet = item,
            SlotKind::Ring => self.ring = item,
        }
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = &Item> {
        self.iter_slots().map(|(_, item)| item)
    }

    pub fn iter_slots(&self) -> impl Iterator<Item = (SlotKind, &Item)> {
        SlotKind::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).as_ref().map(|item| (slot, item)))
    }

    /// Combined stat contribution of everything equipped.
    pub fn stat_total(&self) -> StatBlock {
        self.iter_equipped()
            .fold(StatBlock::ZERO, |acc, item| acc.plus(&item.stats()))
    }
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}
