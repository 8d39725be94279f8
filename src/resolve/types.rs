use serde::{Deserialize, Serialize};

use crate::character::{Character, Status};
use crate::generation::ItemModifier;
use crate::items::{Item, SlotKind};
use crate::progression::XpAward;
use crate::upgrade::UpgradeMode;

/// What kind of encounter the outcome came from; drives damage scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Normal,
    Boss,
    ZoneBoss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRule {
    All,
    Random,
    /// Alive member with the lowest current HP.
    Weakest,
    /// Alive member with the highest current HP.
    Strongest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealAmount {
    Full,
    Scaled(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviveScope {
    All,
    OneRandom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviveHp {
    Scaled(u32),
    /// Configured default fraction of max HP.
    DefaultFraction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consumable {
    HealingDraught,
    Elixir,
    Torch,
}

impl Consumable {
    pub fn name(&self) -> &'static str {
        match self {
            Consumable::HealingDraught => "Healing Draught",
            Consumable::Elixir => "Elixir",
            Consumable::Torch => "Torch",
        }
    }
}

/// Where a granted item comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemSource {
    Generated {
        slot: Option<SlotKind>,
        min_rarity: Option<String>,
        max_rarity: Option<String>,
        rarity_boost: u32,
        modifiers: Vec<ItemModifier>,
    },
    Unique(String),
    SetPiece(String),
}

/// One declarative effect inside an encounter outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Damage {
        base: u32,
        targets: TargetRule,
        /// Bypasses defense mitigation entirely.
        true_damage: bool,
    },
    Heal {
        targets: TargetRule,
        amount: HealAmount,
    },
    GrantXp {
        base: u32,
        targets: TargetRule,
    },
    /// Negative base values are costs, tracked for later refunds.
    GrantGold {
        base: i64,
    },
    GrantItem {
        source: ItemSource,
    },
    GrantConsumable {
        kind: Consumable,
        count: u32,
    },
    ApplyStatus {
        status: Status,
        targets: TargetRule,
    },
    Revive {
        scope: ReviveScope,
        hp: ReviveHp,
    },
    UpgradeEquipped {
        mode: UpgradeMode,
    },
    KillRandomMember,
}

/// A declarative outcome, applied atomically to a party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncounterOutcome {
    pub title: String,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolveContext {
    pub depth: u32,
    pub event_kind: EventKind,
}

/// How a single damage instance landed on a single target: exactly one of
/// the three, never a dodge and a crit together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    Dodged,
    Critical(u32),
    Hit(u32),
}

impl DamageOutcome {
    pub fn amount(&self) -> u32 {
        match self {
            DamageOutcome::Dodged => 0,
            DamageOutcome::Critical(n) | DamageOutcome::Hit(n) => *n,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDamage {
    pub name: String,
    pub outcome: DamageOutcome,
    pub died: bool,
    pub pending_revival: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealedMember {
    pub name: String,
    pub amount: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevivedMember {
    pub name: String,
    pub hp: u32,
}

/// Per-effect numeric breakdown for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectDetail {
    Damage {
        hits: Vec<TargetDamage>,
    },
    Heal {
        healed: Vec<HealedMember>,
    },
    Xp {
        awards: Vec<XpAward>,
        mentor_awards: Vec<XpAward>,
        mentored: u64,
        banked: u64,
    },
    Gold {
        delta: i64,
    },
    ItemFound {
        item: Item,
    },
    ConsumableFound {
        kind: Consumable,
        count: u32,
    },
    StatusApplied {
        status: Status,
        members: Vec<String>,
    },
    Revived {
        members: Vec<RevivedMember>,
    },
    Upgraded {
        member: String,
        slot: SlotKind,
        item: Item,
    },
    UpgradeFailed {
        reason: String,
        refunded: i64,
    },
    Death {
        member: String,
    },
    /// Effect had no valid target; nothing happened.
    Noop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEffect {
    pub description: String,
    pub detail: EffectDetail,
}

/// Narration plus resolved effects; the UI and statistics layers consume
/// this without knowing resolution internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOutcome {
    pub text: String,
    pub effects: Vec<ResolvedEffect>,
    /// Items produced by this outcome; the caller owns inventory placement.
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub party: Vec<Character>,
    pub gold_delta: i64,
    pub mentored_xp: u64,
    pub meta_xp_overflow: u64,
    pub outcome: ResolvedOutcome,
}
