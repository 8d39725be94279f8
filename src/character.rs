use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::equipment::Equipment;
use crate::items::Item;
use crate::stats::{StatBlock, StatKind};
use crate::uniques::REVIVAL_TRINKET_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Class {
    Warrior,
    Ranger,
    Mage,
    Cleric,
}

impl Class {
    pub fn all() -> [Class; 4] {
        [Class::Warrior, Class::Ranger, Class::Mage, Class::Cleric]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Ranger => "Ranger",
            Class::Mage => "Mage",
            Class::Cleric => "Cleric",
        }
    }

    pub fn starting_stats(&self) -> StatBlock {
        match self {
            Class::Warrior => StatBlock { attack: 12, defense: 10, health: 120, speed: 8, luck: 5 },
            Class::Ranger => StatBlock { attack: 10, defense: 6, health: 95, speed: 14, luck: 9 },
            Class::Mage => StatBlock { attack: 14, defense: 4, health: 80, speed: 10, luck: 10 },
            Class::Cleric => StatBlock { attack: 8, defense: 8, health: 105, speed: 9, luck: 12 },
        }
    }

    /// Stat gains applied on every level-up.
    pub fn level_gains(&self) -> StatBlock {
        match self {
            Class::Warrior => StatBlock { attack: 3, defense: 2, health: 12, speed: 1, luck: 0 },
            Class::Ranger => StatBlock { attack: 2, defense: 1, health: 8, speed: 3, luck: 2 },
            Class::Mage => StatBlock { attack: 3, defense: 0, health: 6, speed: 2, luck: 2 },
            Class::Cleric => StatBlock { attack: 1, defense: 2, health: 10, speed: 1, luck: 3 },
        }
    }
}

/// Narrative status markers; inert within the engine, consumed by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Blessed,
    Cursed,
    Weakened,
}

impl Status {
    pub fn name(&self) -> &'static str {
        match self {
            Status::Blessed => "Blessed",
            Status::Cursed => "Cursed",
            Status::Weakened => "Weakened",
        }
    }
}

/// A party member. Created at party assembly; mutated only by the encounter
/// resolver; dead members persist as inactive until revived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub class: Class,
    pub level: u32,
    pub xp: u64,
    pub base_stats: StatBlock,
    pub current_hp: u32,
    pub alive: bool,
    /// Set when a revival-trinket holder hits zero HP; the depth-advance
    /// tick (outside this crate) performs the actual revival.
    pub pending_revival: bool,
    pub statuses: Vec<Status>,
    pub equipment: Equipment,
}

impl Character {
    pub fn new(name: impl Into<String>, class: Class) -> Self {
        let base_stats = class.starting_stats();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            class,
            level: 1,
            xp: 0,
            base_stats,
            current_hp: base_stats.health,
            alive: true,
            pending_revival: false,
            statuses: Vec::new(),
            equipment: Equipment::new(),
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.base_stats.health + self.equipment.stat_total().health
    }

    /// Base stats plus everything equipped.
    pub fn effective_stats(&self) -> StatBlock {
        self.base_stats.plus(&self.equipment.stat_total())
    }

    pub fn effective(&self, kind: StatKind) -> u32 {
        self.effective_stats().get(kind)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.max_hp());
        self.current_hp - before
    }

    pub fn heal_to_full(&mut self) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.max_hp();
        self.current_hp - before
    }

    pub fn has_revival_trinket(&self) -> bool {
        self.equipment.iter_equipped().any(|item| {
            matches!(item, Item::Unique { template_id, .. } if template_id == REVIVAL_TRINKET_ID)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_unique;
    use crate::items::SlotKind;
    use crate::uniques::unique;

    #[test]
    fn test_new_character_is_alive_at_full_hp() {
        let c = Character::new("Brannis", Class::Warrior);
        assert!(c.is_alive());
        assert_eq!(c.level, 1);
        assert_eq!(c.current_hp, c.max_hp());
        assert!(!c.pending_revival);
        assert!(!c.id.is_empty());
    }

    #[test]
    fn test_equipment_raises_effective_stats() {
        let mut c = Character::new("Sera", Class::Ranger);
        let base_attack = c.effective(StatKind::Attack);
        let blade = compose_unique(unique("grief"));
        c.equipment.set(SlotKind::Weapon, Some(blade));
        assert!(c.effective(StatKind::Attack) > base_attack);
    }

    #[test]
    fn test_max_hp_includes_equipment() {
        let mut c = Character::new("Sera", Class::Ranger);
        let bare = c.max_hp();
        let armor = compose_unique(unique("bulwark-of-the-deep"));
        c.equipment.set(SlotKind::Armor, Some(armor));
        assert!(c.max_hp() > bare);
    }

    #[test]
    fn test_heal_clamps_at_max() {
        let mut c = Character::new("Odo", Class::Cleric);
        c.current_hp = 10;
        let healed = c.heal(10_000);
        assert_eq!(c.current_hp, c.max_hp());
        assert_eq!(healed, c.max_hp() - 10);
    }

    #[test]
    fn test_revival_trinket_detection() {
        let mut c = Character::new("Odo", Class::Cleric);
        assert!(!c.has_revival_trinket());
        let charm = compose_unique(unique(REVIVAL_TRINKET_ID));
        c.equipment.set(SlotKind::Amulet, Some(charm));
        assert!(c.has_revival_trinket());
    }

    #[test]
    fn test_class_gains_are_nonzero() {
        for class in Class::all() {
            assert!(class.level_gains().total() > 0, "{}", class.name());
            assert!(class.starting_stats().health > 0);
        }
    }
}
