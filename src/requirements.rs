//! Requirement checks for the caller's choice layer.
//!
//! Thresholds scale through the same curve as reward magnitudes, so the
//! gate difficulty tracks the payout difficulty at every depth.

use serde::{Deserialize, Serialize};

use crate::character::{Character, Class};
use crate::config::ProgressionTuning;
use crate::scaling::{depth_scaled, depth_scaled_i64};
use crate::stats::StatKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Requirement {
    /// An alive member of the given class is in the party.
    ClassPresent(Class),
    /// Some alive member reaches the depth-scaled stat threshold.
    MinStat { stat: StatKind, base: u32 },
    /// Party gold reaches the depth-scaled amount.
    MinGold(i64),
    DeadMemberPresent,
    NoDeadMembers,
}

pub fn check_requirements(
    requirements: &[Requirement],
    party: &[Character],
    gold: i64,
    depth: u32,
    config: &ProgressionTuning,
) -> bool {
    requirements
        .iter()
        .all(|req| check_requirement(req, party, gold, depth, config))
}

fn check_requirement(
    requirement: &Requirement,
    party: &[Character],
    gold: i64,
    depth: u32,
    config: &ProgressionTuning,
) -> bool {
    match requirement {
        Requirement::ClassPresent(class) => party
            .iter()
            .any(|c| c.is_alive() && c.class == *class),
        Requirement::MinStat { stat, base } => {
            let threshold = depth_scaled(*base, depth, config.reward_scale);
            party
                .iter()
                .filter(|c| c.is_alive())
                .any(|c| c.effective(*stat) >= threshold)
        }
        Requirement::MinGold(base) => gold >= depth_scaled_i64(*base, depth, config.reward_scale),
        Requirement::DeadMemberPresent => party.iter().any(|c| !c.is_alive()),
        Requirement::NoDeadMembers => party.iter().all(|c| c.is_alive()),
    }
}
