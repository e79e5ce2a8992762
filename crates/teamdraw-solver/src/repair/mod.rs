//! Constraint repair and quota rebalancing.
//!
//! The engine runs after distribution:
//!
//! 1. Resolve active exclusion rules, then inclusion rules, by roster swaps
//! 2. Lock every non-captain participant of an active rule
//! 3. Rebalance the "other" group, then pool and rebuild veterans and rookies
//! 4. Re-check the rules; on a violation repeat steps 1-3 once
//!
//! Rules whose names are not both present in the draw are skipped. Rules
//! left unsatisfied are reported, never raised.

mod exclusion;
mod inclusion;
mod rebalance;
mod swap;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use teamdraw_config::DEFAULT_MAX_REBALANCE_STEPS;
use teamdraw_core::{DrawError, DrawScore, Result, Rule, RuleBook, RuleKind};
use tracing::{debug, warn};

use crate::workspace::{AllocationWorkspace, Location};

pub use rebalance::RebalanceStats;
pub use swap::{RosterSwap, RosterTransfer};

/// Outcome of a repair run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    /// Active rules still violated after repair, in table order.
    pub violations: Vec<Rule>,
    /// Swaps and transfers applied by repair and rebalancing.
    pub swaps: u64,
    pub rebalance: RebalanceStats,
    /// Hard part counts violations, soft part counts quota deviation.
    pub score: DrawScore,
}

impl RepairReport {
    pub fn is_satisfied(&self) -> bool {
        self.violations.is_empty()
    }

    /// Turns the first remaining violation into an error.
    ///
    /// # Errors
    ///
    /// [`DrawError::ConstraintUnsatisfiable`] if any rule is still violated.
    pub fn ensure_satisfied(&self) -> Result<()> {
        match self.violations.first() {
            None => Ok(()),
            Some(rule) => Err(DrawError::ConstraintUnsatisfiable {
                rule: rule.to_string(),
                names: rule.names.clone(),
            }),
        }
    }
}

/// Applies a [`RuleBook`] to a distributed workspace.
#[derive(Debug, Clone)]
pub struct RepairEngine {
    rules: RuleBook,
    max_rebalance_steps: usize,
}

impl RepairEngine {
    pub fn new(rules: RuleBook) -> Self {
        Self {
            rules,
            max_rebalance_steps: DEFAULT_MAX_REBALANCE_STEPS,
        }
    }

    pub fn with_max_rebalance_steps(mut self, steps: usize) -> Self {
        self.max_rebalance_steps = steps;
        self
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    /// Repairs `ws` in place and reports what is left unsatisfied.
    pub fn repair(&self, ws: &mut AllocationWorkspace) -> RepairReport {
        let swaps_before = ws.swap_count();
        let active = ActiveRules::collect(&self.rules, ws);
        let mut rebalance = RebalanceStats::default();

        resolve_all(ws, &active);
        active.lock_participants(ws);
        if ws.deviation() > 0 {
            rebalance::rebalance(ws, self.max_rebalance_steps, &mut rebalance);
        }

        if !active.violations(ws).is_empty() {
            debug!(event = "repair_retry");
            resolve_all(ws, &active);
            active.lock_participants(ws);
            rebalance::rebalance(ws, self.max_rebalance_steps, &mut rebalance);
        }

        let violations: Vec<Rule> = active.violations(ws).into_iter().cloned().collect();
        for rule in &violations {
            warn!(event = "rule_unsatisfied", rule = %rule);
        }

        RepairReport {
            score: DrawScore::penalty(violations.len(), ws.deviation()),
            violations,
            swaps: ws.swap_count() - swaps_before,
            rebalance,
        }
    }
}

fn resolve_all(ws: &mut AllocationWorkspace, active: &ActiveRules<'_>) {
    for kind in [RuleKind::Exclude, RuleKind::Include] {
        for rule in active.of_kind(kind) {
            let resolved = match kind {
                RuleKind::Exclude => exclusion::resolve(ws, rule, active),
                RuleKind::Include => inclusion::resolve(ws, rule, active),
            };
            if !resolved {
                debug!(event = "rule_unresolved", rule = %rule);
            }
        }
    }
}

/// Rules that apply to this draw: condition holds for the seed and both
/// names are present.
struct ActiveRules<'a> {
    rules: Vec<&'a Rule>,
    participants: HashSet<&'a str>,
}

impl<'a> ActiveRules<'a> {
    fn collect(book: &'a RuleBook, ws: &AllocationWorkspace) -> Self {
        let seed = ws.seed();
        let mut rules = Vec::new();
        for rule in book.active(seed) {
            if rule.names.iter().all(|name| ws.locate(name).is_some()) {
                rules.push(rule);
            } else {
                debug!(event = "rule_skipped", rule = %rule);
            }
        }
        let participants = rules
            .iter()
            .copied()
            .flat_map(|rule: &'a Rule| rule.names.iter().map(String::as_str))
            .collect();
        Self {
            rules,
            participants,
        }
    }

    fn of_kind(&self, kind: RuleKind) -> impl Iterator<Item = &'a Rule> + '_ {
        self.rules.iter().copied().filter(move |r| r.kind == kind)
    }

    fn is_participant(&self, name: &str) -> bool {
        self.participants.contains(name)
    }

    fn exclusion_partners(&self, name: &str) -> Vec<&'a str> {
        self.of_kind(RuleKind::Exclude)
            .filter_map(|rule| rule.partner_of(name))
            .collect()
    }

    fn inclusion_partners(&self, name: &str) -> Vec<&'a str> {
        self.of_kind(RuleKind::Include)
            .filter_map(|rule| rule.partner_of(name))
            .collect()
    }

    fn bound_by_inclusion(&self, name: &str) -> bool {
        self.of_kind(RuleKind::Include).any(|rule| rule.involves(name))
    }

    fn lock_participants(&self, ws: &mut AllocationWorkspace) {
        for &name in &self.participants {
            if let Some(Location::Member(_)) = ws.locate(name) {
                ws.lock(name);
            }
        }
    }

    fn violations(&self, ws: &AllocationWorkspace) -> Vec<&'a Rule> {
        self.rules
            .iter()
            .copied()
            .filter(|rule| !is_satisfied(ws, rule))
            .collect()
    }
}

/// Whether `rule` holds on the current teams. Absent names satisfy any rule.
fn is_satisfied(ws: &AllocationWorkspace, rule: &Rule) -> bool {
    let (Some(a), Some(b)) = (ws.locate(&rule.names[0]), ws.locate(&rule.names[1])) else {
        return true;
    };
    match rule.kind {
        RuleKind::Exclude => a.team() != b.team(),
        RuleKind::Include => a.team() == b.team(),
    }
}
