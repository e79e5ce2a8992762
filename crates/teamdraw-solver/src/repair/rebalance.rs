//! Quota rebalancing after repair.
//!
//! Rebalancing never moves a locked person, so rules resolved before it stay
//! resolved.

use std::cmp::Reverse;

use teamdraw_core::{Category, GroupQuota};
use tracing::debug;

use super::swap::RosterSwap;
use crate::workspace::{AllocationWorkspace, Seat};

/// Counters for the rebalancing passes of one repair run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RebalanceStats {
    /// "Other" swaps between surplus and deficit teams.
    pub other_swaps: usize,
    /// Pool-and-rebuild passes.
    pub rebuilds: usize,
    /// Veterans and rookies pulled and dealt again, summed over rebuilds.
    pub redealt: usize,
}

pub(super) fn rebalance(
    ws: &mut AllocationWorkspace,
    max_steps: usize,
    stats: &mut RebalanceStats,
) {
    stats.other_swaps += balance_others(ws, max_steps);
    let targets = veteran_targets(ws);
    stats.redealt += rebuild(ws, &targets);
    stats.rebuilds += 1;
}

/// Moves surplus "other" members to deficit teams in exchange for a veteran
/// or rookie. Stops at `max_steps` swaps or after a pass without progress.
fn balance_others(ws: &mut AllocationWorkspace, max_steps: usize) -> usize {
    let team_count = ws.team_count();
    let mut steps = 0;
    while steps < max_steps {
        let mut progressed = false;
        for donor in 0..team_count {
            for receiver in 0..team_count {
                if steps >= max_steps || other_gap(ws, donor) <= 0 {
                    break;
                }
                if donor == receiver || other_gap(ws, receiver) >= 0 {
                    continue;
                }
                let give = unlocked_seat(ws, donor, |c| c == Category::Other);
                let take = unlocked_seat(ws, receiver, |c| {
                    c == Category::Veteran || c == Category::Rookie
                });
                if let (Some(give), Some(take)) = (give, take) {
                    RosterSwap::new(give, take).do_move(ws);
                    steps += 1;
                    progressed = true;
                }
            }
        }
        if !progressed {
            break;
        }
    }
    if steps > 0 {
        debug!(event = "others_rebalanced", swaps = steps);
    }
    steps
}

/// Current "other" count minus the planned one.
fn other_gap(ws: &AllocationWorkspace, team: usize) -> i64 {
    ws.team(team).count(Category::Other) as i64 - ws.plan().team(team).other as i64
}

fn unlocked_seat(
    ws: &AllocationWorkspace,
    team: usize,
    accept: impl Fn(Category) -> bool,
) -> Option<Seat> {
    ws.team(team)
        .roster
        .iter()
        .position(|p| accept(p.category) && !ws.is_locked(&p.name))
        .map(|position| Seat::new(team, position))
}

/// Per-team veteran and rookie targets.
///
/// A team's veteran+rookie slots start at its planned size minus the "other"
/// members it holds now, so the team returns to its planned size. Slots are
/// raised to fit locked members, then nudged one unit at a time (smallest
/// team grows first, largest shrinks first) until they add up to the
/// veterans and rookies placed. Veteran targets start at the plan, are
/// clamped so locked people fit, and are nudged the same way.
pub(super) fn veteran_targets(ws: &AllocationWorkspace) -> Vec<GroupQuota> {
    let team_count = ws.team_count();
    let mut slots = Vec::with_capacity(team_count);
    let mut others = Vec::with_capacity(team_count);
    let mut locked_veterans = Vec::with_capacity(team_count);
    let mut locked_rookies = Vec::with_capacity(team_count);
    let mut veterans = 0;
    let mut members = 0;

    for team in ws.teams() {
        let composition = team.composition();
        let locked = |category: Category| {
            team.roster
                .iter()
                .filter(|p| p.category == category && ws.is_locked(&p.name))
                .count()
        };
        let lv = locked(Category::Veteran);
        let lr = locked(Category::Rookie);
        let planned = ws.plan().team(team.index).total();
        slots.push(planned.saturating_sub(composition.other).max(lv + lr));
        others.push(composition.other);
        locked_veterans.push(lv);
        locked_rookies.push(lr);
        veterans += composition.veteran;
        members += composition.veteran + composition.rookie;
    }

    let mut sum: usize = slots.iter().sum();
    while sum < members {
        let Some(team) = (0..team_count).min_by_key(|&t| slots[t] + others[t]) else {
            break;
        };
        slots[team] += 1;
        sum += 1;
    }
    while sum > members {
        let Some(team) = (0..team_count)
            .filter(|&t| slots[t] > locked_veterans[t] + locked_rookies[t])
            .min_by_key(|&t| Reverse(slots[t] + others[t]))
        else {
            break;
        };
        slots[team] -= 1;
        sum -= 1;
    }

    let low = locked_veterans;
    let high: Vec<usize> = (0..team_count)
        .map(|t| slots[t] - locked_rookies[t])
        .collect();
    let mut targets: Vec<usize> = (0..team_count)
        .map(|t| ws.plan().team(t).veteran.clamp(low[t], high[t]))
        .collect();

    let mut sum: usize = targets.iter().sum();
    while sum < veterans {
        let Some(team) = (0..team_count)
            .filter(|&t| targets[t] < high[t])
            .min_by_key(|&t| targets[t])
        else {
            break;
        };
        targets[team] += 1;
        sum += 1;
    }
    while sum > veterans {
        let Some(team) = (0..team_count)
            .filter(|&t| targets[t] > low[t])
            .min_by_key(|&t| Reverse(targets[t]))
        else {
            break;
        };
        targets[team] -= 1;
        sum -= 1;
    }

    (0..team_count)
        .map(|t| GroupQuota::new(targets[t], slots[t] - targets[t], others[t]))
        .collect()
}

/// Pulls every unlocked veteran and rookie, shuffles both pools and deals
/// them back to reach `targets`. Returns how many people were dealt.
fn rebuild(ws: &mut AllocationWorkspace, targets: &[GroupQuota]) -> usize {
    let mut veterans = ws.pull_unlocked(Category::Veteran);
    let mut rookies = ws.pull_unlocked(Category::Rookie);
    let redealt = veterans.len() + rookies.len();
    ws.rng().shuffle(&mut veterans);
    ws.rng().shuffle(&mut rookies);

    let mut veterans = veterans.into_iter();
    let mut rookies = rookies.into_iter();
    for (team, target) in ws.teams_mut().iter_mut().zip(targets) {
        let need = target.veteran.saturating_sub(team.count(Category::Veteran));
        team.roster.extend(veterans.by_ref().take(need));
        let need = target.rookie.saturating_sub(team.count(Category::Rookie));
        team.roster.extend(rookies.by_ref().take(need));
    }

    // Targets always sum to the pool sizes; anything left joins the
    // smallest team so nobody is dropped.
    for person in veterans.chain(rookies) {
        if let Some(team) = ws.teams_mut().iter_mut().min_by_key(|t| t.roster.len()) {
            team.roster.push(person);
        }
    }

    debug!(event = "rebuild", redealt = redealt);
    redealt
}
