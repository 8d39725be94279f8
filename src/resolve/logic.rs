//! The encounter outcome resolver.
//!
//! Applies a declarative effect list to a party, producing the mutated copy
//! plus a narrated, per-target breakdown. The caller's party is never
//! touched; gold charged by earlier effects of the same outcome is refunded
//! when a later upgrade effect turns out to be illegal.

use rand::Rng;
use tracing::debug;

use crate::character::{Character, Status};
use crate::compose;
use crate::config::EngineConfig;
use crate::generation::{self, ItemRequest};
use crate::items::Item;
use crate::progression;
use crate::scaling::{depth_scaled, depth_scaled_i64};
use crate::stats::StatKind;
use crate::uniques;
use crate::upgrade::{self, UpgradeMode};

use super::types::*;

/// Resolves one outcome against a party.
pub fn resolve(
    rng: &mut impl Rng,
    config: &EngineConfig,
    outcome: &EncounterOutcome,
    party: &[Character],
    ctx: &ResolveContext,
) -> ResolutionResult {
    // Defensive copy: all mutation happens on our own party value.
    let mut party = party.to_vec();
    let mut gold_delta: i64 = 0;
    // Costs paid inside this outcome; refunded if a later upgrade is illegal.
    let mut charged: i64 = 0;
    let mut mentored_xp: u64 = 0;
    let mut meta_xp_overflow: u64 = 0;
    let mut effects: Vec<ResolvedEffect> = Vec::new();
    let mut items: Vec<Item> = Vec::new();

    for effect in &outcome.effects {
        let resolved = match effect {
            Effect::Damage {
                base,
                targets,
                true_damage,
            } => resolve_damage(rng, config, &mut party, *base, *targets, *true_damage, ctx),
            Effect::Heal { targets, amount } => {
                resolve_heal(rng, config, &mut party, *targets, *amount, ctx)
            }
            Effect::GrantXp { base, targets } => {
                let resolved = resolve_xp(rng, config, &mut party, *base, *targets, ctx);
                if let EffectDetail::Xp {
                    mentored, banked, ..
                } = &resolved.detail
                {
                    mentored_xp += mentored;
                    meta_xp_overflow += banked;
                }
                resolved
            }
            Effect::GrantGold { base } => {
                let scaled = depth_scaled_i64(*base, ctx.depth, config.progression.reward_scale);
                gold_delta += scaled;
                if scaled < 0 {
                    charged += -scaled;
                }
                let description = if scaled < 0 {
                    format!("The party pays {} gold.", -scaled)
                } else {
                    format!("The party gains {scaled} gold.")
                };
                ResolvedEffect {
                    description,
                    detail: EffectDetail::Gold { delta: scaled },
                }
            }
            Effect::GrantItem { source } => {
                let item = resolve_item_source(rng, config, source, ctx);
                items.push(item.clone());
                ResolvedEffect {
                    description: format!("The party finds {}.", item.name()),
                    detail: EffectDetail::ItemFound { item },
                }
            }
            Effect::GrantConsumable { kind, count } => ResolvedEffect {
                description: format!("The party receives {count}x {}.", kind.name()),
                detail: EffectDetail::ConsumableFound {
                    kind: *kind,
                    count: *count,
                },
            },
            Effect::ApplyStatus { status, targets } => {
                resolve_status(rng, &mut party, *status, *targets)
            }
            Effect::Revive { scope, hp } => {
                resolve_revive(rng, config, &mut party, *scope, *hp, ctx)
            }
            Effect::UpgradeEquipped { mode } => {
                let (resolved, refund) = resolve_upgrade(rng, &mut party, *mode, charged);
                if refund && charged > 0 {
                    debug!(refunded = charged, "illegal upgrade, refunding charges");
                    gold_delta += charged;
                    charged = 0;
                }
                resolved
            }
            Effect::KillRandomMember => resolve_kill(rng, &mut party),
        };
        effects.push(resolved);
    }

    let text = effects
        .iter()
        .map(|e| e.description.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    ResolutionResult {
        party,
        gold_delta,
        mentored_xp,
        meta_xp_overflow,
        outcome: ResolvedOutcome {
            text,
            effects,
            items,
        },
    }
}

/// Alive-member indices matching a rule. An empty alive subset yields an
/// empty list: the effect becomes a no-op, never an error.
pub fn select_targets(rng: &mut impl Rng, party: &[Character], rule: TargetRule) -> Vec<usize> {
    let alive: Vec<usize> = party
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| i)
        .collect();
    if alive.is_empty() {
        return alive;
    }
    match rule {
        TargetRule::All => alive,
        TargetRule::Random => vec![alive[rng.gen_range(0..alive.len())]],
        TargetRule::Weakest => {
            let mut best = alive[0];
            for &i in &alive[1..] {
                if party[i].current_hp < party[best].current_hp {
                    best = i;
                }
            }
            vec![best]
        }
        TargetRule::Strongest => {
            let mut best = alive[0];
            for &i in &alive[1..] {
                if party[i].current_hp > party[best].current_hp {
                    best = i;
                }
            }
            vec![best]
        }
    }
}

fn noop(text: &str) -> ResolvedEffect {
    ResolvedEffect {
        description: text.to_string(),
        detail: EffectDetail::Noop,
    }
}

#[allow(clippy::too_many_arguments)]
fn resolve_damage(
    rng: &mut impl Rng,
    config: &EngineConfig,
    party: &mut [Character],
    base: u32,
    rule: TargetRule,
    true_damage: bool,
    ctx: &ResolveContext,
) -> ResolvedEffect {
    let targets = select_targets(rng, party, rule);
    if targets.is_empty() {
        return noop("The blow finds no one standing.");
    }

    let tuning = &config.combat;
    let factor = if true_damage {
        tuning.damage_scale_true
    } else {
        match ctx.event_kind {
            EventKind::Normal => tuning.damage_scale_normal,
            EventKind::Boss => tuning.damage_scale_boss,
            EventKind::ZoneBoss => tuning.damage_scale_zone_boss,
        }
    };
    let scaled = depth_scaled(base, ctx.depth, factor);

    let mut hits = Vec::new();
    let mut lines = Vec::new();
    for i in targets {
        let member = &mut party[i];

        // Phase 1: dodge. A dodged instance deals nothing and cannot crit.
        let speed = member.effective(StatKind::Speed);
        let dodge_chance = (speed as f64 * tuning.dodge_per_speed).min(tuning.dodge_cap);
        let outcome = if rng.gen_bool(dodge_chance) {
            DamageOutcome::Dodged
        } else {
            // Phase 2: mitigation, skipped entirely for true damage.
            let mitigated = if true_damage {
                scaled
            } else {
                let defense = member.effective(StatKind::Defense) as f64;
                let reduction =
                    (defense / (defense + tuning.defense_softcap)).min(tuning.mitigation_cap);
                (scaled as f64 * (1.0 - reduction)) as u32
            };
            // Phase 3: the attacker's crit roll doubles post-mitigation damage.
            let crit_chance = (ctx.depth as f64 * tuning.crit_per_depth
                - member.effective(StatKind::Luck) as f64 * tuning.crit_per_luck)
                .clamp(tuning.crit_min, tuning.crit_max);
            if rng.gen_bool(crit_chance) {
                DamageOutcome::Critical((mitigated as f64 * tuning.crit_multiplier) as u32)
            } else {
                DamageOutcome::Hit(mitigated)
            }
        };

        let amount = outcome.amount();
        member.current_hp = member.current_hp.saturating_sub(amount);
        let mut died = false;
        let mut pending_revival = false;
        if amount > 0 && member.current_hp == 0 {
            member.alive = false;
            died = true;
            if member.has_revival_trinket() {
                member.pending_revival = true;
                pending_revival = true;
            }
        }

        lines.push(match outcome {
            DamageOutcome::Dodged => format!("{} dodges the blow.", member.name),
            DamageOutcome::Critical(n) if pending_revival => format!(
                "{} is crushed for {n} (critical!) but the Phoenix Charm glows.",
                member.name
            ),
            DamageOutcome::Critical(n) if died => {
                format!("{} is crushed for {n} (critical!) and falls.", member.name)
            }
            DamageOutcome::Critical(n) => {
                format!("{} is crushed for {n} (critical!).", member.name)
            }
            DamageOutcome::Hit(n) if pending_revival => format!(
                "{} takes {n} damage but the Phoenix Charm glows.",
                member.name
            ),
            DamageOutcome::Hit(n) if died => {
                format!("{} takes {n} damage and falls.", member.name)
            }
            DamageOutcome::Hit(n) => format!("{} takes {n} damage.", member.name),
        });
        hits.push(TargetDamage {
            name: member.name.clone(),
            outcome,
            died,
            pending_revival,
        });
    }

    ResolvedEffect {
        description: lines.join(" "),
        detail: EffectDetail::Damage { hits },
    }
}

fn resolve_heal(
    rng: &mut impl Rng,
    config: &EngineConfig,
    party: &mut [Character],
    rule: TargetRule,
    amount: HealAmount,
    ctx: &ResolveContext,
) -> ResolvedEffect {
    let targets = select_targets(rng, party, rule);
    if targets.is_empty() {
        return noop("There is no one left to heal.");
    }

    let mut healed = Vec::new();
    let mut lines = Vec::new();
    for i in targets {
        let member = &mut party[i];
        let restored = match amount {
            HealAmount::Full => member.heal_to_full(),
            HealAmount::Scaled(base) => {
                member.heal(depth_scaled(base, ctx.depth, config.progression.reward_scale))
            }
        };
        lines.push(format!("{} recovers {restored} HP.", member.name));
        healed.push(HealedMember {
            name: member.name.clone(),
            amount: restored,
        });
    }
    ResolvedEffect {
        description: lines.join(" "),
        detail: EffectDetail::Heal { healed },
    }
}

fn resolve_xp(
    rng: &mut impl Rng,
    config: &EngineConfig,
    party: &mut [Character],
    base: u32,
    rule: TargetRule,
    ctx: &ResolveContext,
) -> ResolvedEffect {
    let targets = select_targets(rng, party, rule);
    if targets.is_empty() {
        return noop("The lesson is lost on the fallen.");
    }

    let amount = depth_scaled(base, ctx.depth, config.progression.reward_scale) as u64;
    let report = progression::grant_xp(party, &targets, amount, &config.progression);

    let mut lines = vec![format!("The party gains {amount} XP.")];
    for award in report.awards.iter().chain(report.mentor_awards.iter()) {
        if award.levels_gained > 0 {
            lines.push(format!(
                "{} reaches level {}!",
                award.name, party[award.member].level
            ));
        }
    }
    if report.mentored_xp > 0 {
        lines.push(format!(
            "{} overflow XP is passed down to the others.",
            report.mentored_xp
        ));
    }

    ResolvedEffect {
        description: lines.join(" "),
        detail: EffectDetail::Xp {
            awards: report.awards,
            mentor_awards: report.mentor_awards,
            mentored: report.mentored_xp,
            banked: report.meta_overflow,
        },
    }
}

fn resolve_item_source(
    rng: &mut impl Rng,
    config: &EngineConfig,
    source: &ItemSource,
    ctx: &ResolveContext,
) -> Item {
    match source {
        ItemSource::Generated {
            slot,
            min_rarity,
            max_rarity,
            rarity_boost,
            modifiers,
        } => {
            let request = ItemRequest {
                depth: ctx.depth,
                slot: *slot,
                min_rarity: min_rarity.as_deref(),
                max_rarity: max_rarity.as_deref(),
                rarity_boost: *rarity_boost,
                material: None,
                base: None,
                modifiers: modifiers.as_slice(),
            };
            generation::generate(rng, &config.generation, &request)
        }
        ItemSource::Unique(id) => compose::compose_unique(uniques::unique(id)),
        ItemSource::SetPiece(id) => compose::compose_set(
            uniques::set_template(id),
            rng.gen_bool(config.generation.unique_quality_chance),
        ),
    }
}

fn resolve_status(
    rng: &mut impl Rng,
    party: &mut [Character],
    status: Status,
    rule: TargetRule,
) -> ResolvedEffect {
    let targets = select_targets(rng, party, rule);
    if targets.is_empty() {
        return noop("The spell dissipates harmlessly.");
    }

    let mut members = Vec::new();
    let mut lines = Vec::new();
    for i in targets {
        let member = &mut party[i];
        if !member.statuses.contains(&status) {
            member.statuses.push(status);
        }
        lines.push(format!("{} is {}.", member.name, status.name()));
        members.push(member.name.clone());
    }
    ResolvedEffect {
        description: lines.join(" "),
        detail: EffectDetail::StatusApplied { status, members },
    }
}

fn resolve_revive(
    rng: &mut impl Rng,
    config: &EngineConfig,
    party: &mut [Character],
    scope: ReviveScope,
    hp: ReviveHp,
    ctx: &ResolveContext,
) -> ResolvedEffect {
    let dead: Vec<usize> = party
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_alive())
        .map(|(i, _)| i)
        .collect();
    if dead.is_empty() {
        return noop("No one needs reviving.");
    }

    let chosen = match scope {
        ReviveScope::All => dead,
        ReviveScope::OneRandom => vec![dead[rng.gen_range(0..dead.len())]],
    };

    let mut members = Vec::new();
    let mut lines = Vec::new();
    for i in chosen {
        let member = &mut party[i];
        let max_hp = member.max_hp();
        let restored = match hp {
            ReviveHp::Scaled(base) => depth_scaled(base, ctx.depth, config.progression.reward_scale)
                .min(max_hp)
                .max(1),
            ReviveHp::DefaultFraction => {
                ((max_hp as f64 * config.progression.revive_hp_fraction) as u32).max(1)
            }
        };
        member.alive = true;
        member.pending_revival = false;
        member.current_hp = restored;
        lines.push(format!(
            "{} returns to life with {restored} HP.",
            member.name
        ));
        members.push(RevivedMember {
            name: member.name.clone(),
            hp: restored,
        });
    }
    ResolvedEffect {
        description: lines.join(" "),
        detail: EffectDetail::Revived { members },
    }
}

/// Returns the resolved effect and whether the outcome's charges must be
/// refunded. Legality is checked before anything is touched.
fn resolve_upgrade(
    rng: &mut impl Rng,
    party: &mut [Character],
    mode: UpgradeMode,
    charged: i64,
) -> (ResolvedEffect, bool) {
    let failed = |reason: String| {
        let description = if charged > 0 {
            format!("{reason}; {charged} gold is refunded.")
        } else {
            format!("{reason}.")
        };
        (
            ResolvedEffect {
                description,
                detail: EffectDetail::UpgradeFailed {
                    reason,
                    refunded: charged,
                },
            },
            true,
        )
    };

    let Some((idx, slot)) = upgrade::find_lowest_rarity_equipped(party) else {
        return failed("No equipment can be upgraded".to_string());
    };
    let Some(item) = party[idx].equipment.get(slot).clone() else {
        return failed("No equipment can be upgraded".to_string());
    };

    match upgrade::upgrade(rng, &item, mode, 0) {
        Ok(new_item) => {
            let description = format!(
                "{}'s {} is reforged into {}.",
                party[idx].name,
                item.name(),
                new_item.name()
            );
            party[idx].equipment.set(slot, Some(new_item.clone()));
            (
                ResolvedEffect {
                    description,
                    detail: EffectDetail::Upgraded {
                        member: party[idx].name.clone(),
                        slot,
                        item: new_item,
                    },
                },
                false,
            )
        }
        Err(err) => failed(format!("Cannot upgrade {}: {err}", item.name())),
    }
}

fn resolve_kill(rng: &mut impl Rng, party: &mut [Character]) -> ResolvedEffect {
    let alive: Vec<usize> = party
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive())
        .map(|(i, _)| i)
        .collect();
    if alive.is_empty() {
        return noop("The curse finds no one left to claim.");
    }

    let i = alive[rng.gen_range(0..alive.len())];
    let member = &mut party[i];
    member.current_hp = 0;
    member.alive = false;
    ResolvedEffect {
        description: format!("{} is struck down by the curse!", member.name),
        detail: EffectDetail::Death {
            member: member.name.clone(),
        },
    }
}
