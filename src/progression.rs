//! Experience, level-ups, and mentoring overflow.
//!
//! XP beyond what a max-level character can hold is pooled; half of the pool
//! (the mentor fraction) is split evenly across alive sub-max members, who
//! run the same level-up loop and may overflow again. Whatever survives
//! mentoring is banked as account-level currency. Nothing is ever lost:
//! granted == applied + mentored + banked.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::config::ProgressionTuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpAward {
    pub member: usize,
    pub name: String,
    /// XP actually absorbed by this character.
    pub applied: u64,
    pub levels_gained: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct XpReport {
    pub awards: Vec<XpAward>,
    pub mentor_awards: Vec<XpAward>,
    pub mentored_xp: u64,
    pub meta_overflow: u64,
}

/// XP needed to go from `level` to `level + 1`.
pub fn xp_to_next(level: u32, config: &ProgressionTuning) -> u64 {
    level as u64 * config.xp_level_step
}

/// Grants `amount` XP to each target, then runs the mentoring pass over the
/// resulting overflow. Targets must be alive member indices.
pub fn grant_xp(
    party: &mut [Character],
    targets: &[usize],
    amount: u64,
    config: &ProgressionTuning,
) -> XpReport {
    let mut report = XpReport::default();
    let mut total_overflow = 0u64;

    for &i in targets {
        let (applied, levels_gained, overflow) = apply_xp(&mut party[i], amount, config);
        total_overflow += overflow;
        report.awards.push(XpAward {
            member: i,
            name: party[i].name.clone(),
            applied,
            levels_gained,
        });
    }

    if total_overflow == 0 {
        return report;
    }

    let pool = (total_overflow as f64 * config.mentor_fraction) as u64;
    let mut banked = total_overflow - pool;

    let mentees: Vec<usize> = party
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_alive() && c.level < config.max_level)
        .map(|(i, _)| i)
        .collect();

    if mentees.is_empty() {
        banked = total_overflow;
    } else {
        let share = pool / mentees.len() as u64;
        banked += pool - share * mentees.len() as u64;
        if share > 0 {
            for i in mentees {
                let (applied, levels_gained, overflow) = apply_xp(&mut party[i], share, config);
                report.mentored_xp += applied;
                banked += overflow;
                report.mentor_awards.push(XpAward {
                    member: i,
                    name: party[i].name.clone(),
                    applied,
                    levels_gained,
                });
            }
        }
    }

    report.meta_overflow = banked;
    report
}

/// Applies XP to one character, levelling up while the threshold is met.
/// Returns (applied, levels gained, overflow).
fn apply_xp(c: &mut Character, amount: u64, config: &ProgressionTuning) -> (u64, u32, u64) {
    if c.level >= config.max_level {
        return (0, 0, amount);
    }

    c.xp += amount;
    let mut levels_gained = 0;
    while c.level < config.max_level && c.xp >= xp_to_next(c.level, config) {
        c.xp -= xp_to_next(c.level, config);
        c.level += 1;
        levels_gained += 1;
        c.base_stats = c.base_stats.plus(&c.class.level_gains());
        if config.heal_on_level_up {
            c.heal_to_full();
        }
    }

    let mut overflow = 0;
    if c.level >= config.max_level {
        // At max level the counter is clamped to the (unreachable) next
        // threshold; anything beyond it overflows.
        let cap = xp_to_next(c.level, config);
        if c.xp > cap {
            overflow = c.xp - cap;
            c.xp = cap;
        }
    }
    (amount - overflow, levels_gained, overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Class;

    fn config() -> ProgressionTuning {
        ProgressionTuning::default()
    }

    fn maxed(name: &str, config: &ProgressionTuning) -> Character {
        let mut c = Character::new(name, Class::Warrior);
        c.level = config.max_level;
        c.xp = xp_to_next(config.max_level, config);
        c
    }

    #[test]
    fn test_xp_to_next_is_linear_in_level() {
        let config = config();
        assert_eq!(xp_to_next(1, &config), 100);
        assert_eq!(xp_to_next(7, &config), 700);
    }

    #[test]
    fn test_grant_without_levelup() {
        let config = config();
        let mut party = vec![Character::new("A", Class::Warrior)];
        let report = grant_xp(&mut party, &[0], 50, &config);
        assert_eq!(party[0].level, 1);
        assert_eq!(party[0].xp, 50);
        assert_eq!(report.awards[0].applied, 50);
        assert_eq!(report.meta_overflow, 0);
        assert_eq!(report.mentored_xp, 0);
    }

    #[test]
    fn test_single_levelup_applies_class_gains() {
        let config = config();
        let mut party = vec![Character::new("A", Class::Warrior)];
        let before = party[0].base_stats;
        let report = grant_xp(&mut party, &[0], 100, &config);
        assert_eq!(party[0].level, 2);
        assert_eq!(party[0].xp, 0);
        assert_eq!(report.awards[0].levels_gained, 1);
        let gains = Class::Warrior.level_gains();
        assert_eq!(party[0].base_stats.attack, before.attack + gains.attack);
        assert_eq!(party[0].base_stats.health, before.health + gains.health);
    }

    #[test]
    fn test_levelup_heals_to_full() {
        let config = config();
        let mut party = vec![Character::new("A", Class::Warrior)];
        party[0].current_hp = 1;
        grant_xp(&mut party, &[0], 100, &config);
        assert_eq!(party[0].current_hp, party[0].max_hp());
    }

    #[test]
    fn test_multi_levelup_loop() {
        let config = config();
        let mut party = vec![Character::new("A", Class::Ranger)];
        // 100 + 200 + 300 = 600 consumed, 50 left over at level 4.
        let report = grant_xp(&mut party, &[0], 650, &config);
        assert_eq!(party[0].level, 4);
        assert_eq!(party[0].xp, 50);
        assert_eq!(report.awards[0].levels_gained, 3);
        assert_eq!(report.awards[0].applied, 650);
    }

    #[test]
    fn test_max_level_grant_overflows_entirely() {
        let config = config();
        let mut party = vec![maxed("Vet", &config)];
        let report = grant_xp(&mut party, &[0], 100, &config);
        assert_eq!(report.awards[0].applied, 0);
        assert_eq!(party[0].level, config.max_level);
        // Nobody to mentor: everything is banked.
        assert_eq!(report.mentored_xp, 0);
        assert_eq!(report.meta_overflow, 100);
    }

    #[test]
    fn test_mentoring_splits_half_the_overflow() {
        let config = config();
        let mut party = vec![maxed("Vet", &config), Character::new("Kid", Class::Mage)];
        let report = grant_xp(&mut party, &[0], 100, &config);
        // Overflow 100: pool = 50 to the one mentee, 50 banked.
        assert_eq!(report.mentored_xp, 50);
        assert_eq!(report.meta_overflow, 50);
        assert_eq!(party[1].xp, 50);
        assert_eq!(report.mentor_awards.len(), 1);
        assert_eq!(report.mentor_awards[0].applied, 50);
    }

    #[test]
    fn test_mentoring_splits_evenly_and_banks_remainder() {
        let config = config();
        let mut party = vec![
            maxed("Vet", &config),
            Character::new("Kid1", Class::Mage),
            Character::new("Kid2", Class::Cleric),
        ];
        // Overflow 101: pool = 50, share = 25 each, 1 remainder + 51 banked.
        let report = grant_xp(&mut party, &[0], 101, &config);
        assert_eq!(party[1].xp, 25);
        assert_eq!(party[2].xp, 25);
        assert_eq!(report.mentored_xp, 50);
        assert_eq!(report.meta_overflow, 51);
    }

    #[test]
    fn test_dead_members_are_not_mentored() {
        let config = config();
        let mut party = vec![maxed("Vet", &config), Character::new("Kid", Class::Mage)];
        party[1].alive = false;
        let report = grant_xp(&mut party, &[0], 100, &config);
        assert_eq!(report.mentored_xp, 0);
        assert_eq!(report.meta_overflow, 100);
        assert_eq!(party[1].xp, 0);
    }

    #[test]
    fn test_mentee_overflow_is_banked() {
        let mut config = config();
        config.max_level = 3;
        let mut party = vec![maxed("Vet", &config), Character::new("Kid", Class::Mage)];
        // Overflow 10_000 -> pool 5_000 to Kid. Kid needs 100 + 200 = 300 to
        // hit max level 3, holding cap 300; the rest re-overflows to bank.
        let report = grant_xp(&mut party, &[0], 10_000, &config);
        assert_eq!(party[1].level, 3);
        let absorbed = 300 + party[1].xp; // consumed thresholds + clamped counter
        assert_eq!(report.mentored_xp, absorbed);
        assert_eq!(report.meta_overflow, 10_000 - absorbed);
    }

    #[test]
    fn test_conservation_across_party() {
        let config = config();
        let mut party = vec![
            maxed("Vet", &config),
            maxed("Vet2", &config),
            Character::new("Kid", Class::Ranger),
        ];
        let granted = 2 * 777; // two targets
        let report = grant_xp(&mut party, &[0, 1], 777, &config);
        let applied: u64 = report.awards.iter().map(|a| a.applied).sum();
        assert_eq!(
            granted as u64,
            applied + report.mentored_xp + report.meta_overflow,
            "xp must never be silently lost"
        );
    }
}
