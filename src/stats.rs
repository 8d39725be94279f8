use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
    Health,
    Speed,
    Luck,
}

impl StatKind {
    pub fn all() -> [StatKind; 5] {
        [
            StatKind::Attack,
            StatKind::Defense,
            StatKind::Health,
            StatKind::Speed,
            StatKind::Luck,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Health => "Health",
            StatKind::Speed => "Speed",
            StatKind::Luck => "Luck",
        }
    }
}

/// Per-stat integer block shared by items, base templates, and characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
    pub speed: u32,
    pub luck: u32,
}

impl StatBlock {
    pub const ZERO: StatBlock = StatBlock {
        attack: 0,
        defense: 0,
        health: 0,
        speed: 0,
        luck: 0,
    };

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Health => self.health,
            StatKind::Speed => self.speed,
            StatKind::Luck => self.luck,
        }
    }

    /// Scales every stat by `factor`, flooring each result.
    pub fn scaled(&self, factor: f64) -> StatBlock {
        let scale = |v: u32| (v as f64 * factor) as u32;
        StatBlock {
            attack: scale(self.attack),
            defense: scale(self.defense),
            health: scale(self.health),
            speed: scale(self.speed),
            luck: scale(self.luck),
        }
    }

    pub fn plus(&self, other: &StatBlock) -> StatBlock {
        StatBlock {
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            health: self.health + other.health,
            speed: self.speed + other.speed,
            luck: self.luck + other.luck,
        }
    }

    pub fn total(&self) -> u32 {
        self.attack + self.defense + self.health + self.speed + self.luck
    }
}
