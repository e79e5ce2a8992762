//! Tests for constraint repair and rebalancing.

use teamdraw_core::{Category, GroupQuota, QuotaPlan, Team};
use teamdraw_test::{captain_teams, member};

use super::rebalance::veteran_targets;
use super::*;
use crate::rng::DrawRng;

/// Teams with the given rosters; the plan matches the current composition.
fn workspace(rosters: &[&[(&str, Category)]], seed: u64) -> AllocationWorkspace {
    let teams = build_teams(rosters);
    let plan = QuotaPlan::new(teams.iter().map(Team::composition).collect());
    AllocationWorkspace::new(teams, plan, DrawRng::new(seed))
}

fn build_teams(rosters: &[&[(&str, Category)]]) -> Vec<Team> {
    let mut teams = captain_teams();
    for (team, roster) in teams.iter_mut().zip(rosters) {
        for &(name, category) in roster.iter() {
            team.roster.push(member(name, category));
        }
    }
    teams
}

fn team_of(ws: &AllocationWorkspace, name: &str) -> usize {
    ws.locate(name).map(|l| l.team()).unwrap()
}

fn veterans(names: &[&'static str]) -> Vec<(&'static str, Category)> {
    names.iter().map(|&n| (n, Category::Veteran)).collect()
}

#[test]
fn test_exclusion_swaps_same_category() {
    let t0 = veterans(&["V1", "V2"]);
    let singles: Vec<Vec<_>> = ["V3", "V4", "V5", "V6", "V7", "V8", "V9"]
        .iter()
        .map(|&name| vec![(name, Category::Veteran)])
        .collect();
    let mut rosters: Vec<&[(&str, Category)]> = vec![t0.as_slice()];
    rosters.extend(singles.iter().map(Vec::as_slice));
    let mut ws = workspace(&rosters, 1);

    let engine = RepairEngine::new(RuleBook::new().with_rule(Rule::exclude("V1", "V2")));
    let report = engine.repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(report.swaps, 1);
    assert_eq!(team_of(&ws, "V1"), 0);
    assert_eq!(team_of(&ws, "V2"), 1);
    assert_eq!(team_of(&ws, "V3"), 0);
    assert_eq!(report.rebalance.rebuilds, 0);
    assert_eq!(report.score, DrawScore::ZERO);
}

#[test]
fn test_exclusion_moves_member_not_captain() {
    let t0 = [("G1", Category::Other)];
    let t1 = [("G2", Category::Other)];
    let mut ws = workspace(&[&t0, &t1], 2);

    let engine = RepairEngine::new(RuleBook::new().with_rule(Rule::exclude("C1", "G1")));
    let report = engine.repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "C1"), 0);
    assert_eq!(team_of(&ws, "G1"), 1);
    assert_eq!(team_of(&ws, "G2"), 0);
}

#[test]
fn test_exclusion_keeps_inclusion_bound_member() {
    let t0 = veterans(&["V1", "V2"]);
    let t1 = veterans(&["V3"]);
    let mut ws = workspace(&[&t0, &t1], 5);

    let rules = RuleBook::new()
        .with_rule(Rule::exclude("V1", "V2"))
        .with_rule(Rule::include("C1", "V2"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "V2"), 0);
    assert_eq!(team_of(&ws, "V1"), 1);
}

#[test]
fn test_exclusion_avoids_mover_partners() {
    // V2 must leave team 0 but also stay away from V4 on team 1.
    let t0 = veterans(&["V1", "V2"]);
    let t1 = veterans(&["V3", "V4"]);
    let t2 = veterans(&["V5"]);
    let mut ws = workspace(&[&t0, &t1, &t2], 5);

    let rules = RuleBook::new()
        .with_rule(Rule::exclude("V1", "V2"))
        .with_rule(Rule::exclude("V2", "V4"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "V2"), 2);
    assert_eq!(team_of(&ws, "V5"), 0);
}

#[test]
fn test_conditional_inclusion_follows_seed() {
    let t0 = veterans(&["V1", "V3"]);
    let t1 = veterans(&["V2"]);
    let rule = Rule::include("V1", "V2").when_seed_divisible_by(3);

    let mut ws = workspace(&[&t0, &t1], 3);
    let report = RepairEngine::new(RuleBook::new().with_rule(rule.clone())).repair(&mut ws);
    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "V2"), 0);
    assert_eq!(team_of(&ws, "V3"), 1);

    let mut ws = workspace(&[&t0, &t1], 4);
    let report = RepairEngine::new(RuleBook::new().with_rule(rule)).repair(&mut ws);
    assert!(report.is_satisfied());
    assert_eq!(report.swaps, 0);
    assert_eq!(team_of(&ws, "V2"), 1);
}

#[test]
fn test_inclusion_transfers_when_no_counterpart() {
    let t0 = veterans(&["V1"]);
    let t1 = veterans(&["V2"]);
    let t2 = [("G1", Category::Other)];
    let mut ws = workspace(&[&t0, &t1, &t2], 6);

    let report = RepairEngine::new(RuleBook::new().with_rule(Rule::include("V1", "V2")))
        .repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "V2"), 0);
    assert_eq!(ws.team(0).roster.len(), 2);
    assert_eq!(ws.team(1).roster.len(), 0);
    assert_eq!(team_of(&ws, "G1"), 2);
    assert_eq!(report.rebalance.rebuilds, 1);
    assert!(ws.is_locked("V1") && ws.is_locked("V2"));
}

#[test]
fn test_two_captains_unsatisfiable() {
    let mut ws = workspace(&[], 7);
    let rule = Rule::include("C1", "C2");
    let report = RepairEngine::new(RuleBook::new().with_rule(rule.clone())).repair(&mut ws);

    assert_eq!(report.violations, vec![rule]);
    assert_eq!(report.score.hard(), -1);
    assert_eq!(
        report.ensure_satisfied(),
        Err(DrawError::ConstraintUnsatisfiable {
            rule: "include(C1, C2)".into(),
            names: ["C1".into(), "C2".into()],
        })
    );
}

#[test]
fn test_exclusion_without_target_is_reported() {
    let t0 = veterans(&["V1", "V2"]);
    let mut ws = workspace(&[&t0], 10);
    let rule = Rule::exclude("V1", "V2");
    let report = RepairEngine::new(RuleBook::new().with_rule(rule.clone())).repair(&mut ws);

    assert_eq!(report.violations, vec![rule]);
    assert_eq!(report.score, DrawScore::of(-1, 0));
    assert_eq!(team_of(&ws, "V1"), team_of(&ws, "V2"));
    assert!(matches!(
        report.ensure_satisfied(),
        Err(DrawError::ConstraintUnsatisfiable { ref rule, .. }) if rule == "exclude(V1, V2)"
    ));
}

#[test]
fn test_exclusion_trades_with_participant() {
    // V3 is bound by its own exclusion but can take V2's seat safely.
    let t0 = veterans(&["V1", "V2"]);
    let t1 = veterans(&["V3"]);
    let t2 = veterans(&["V4"]);
    let mut ws = workspace(&[&t0, &t1, &t2], 11);

    let rules = RuleBook::new()
        .with_rule(Rule::exclude("V1", "V2"))
        .with_rule(Rule::exclude("V3", "V4"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(report.swaps, 1);
    assert_eq!(team_of(&ws, "V2"), 1);
    assert_eq!(team_of(&ws, "V3"), 0);
    assert_eq!(report.score, DrawScore::ZERO);
}

#[test]
fn test_inclusion_trades_with_participant() {
    // Team 0 holds only rule participants; V2 can still swap with V5.
    let t0 = veterans(&["V1", "V2"]);
    let t1 = veterans(&["V5"]);
    let t2 = veterans(&["V6"]);
    let mut ws = workspace(&[&t0, &t1, &t2], 12);

    let rules = RuleBook::new()
        .with_rule(Rule::include("V1", "V5"))
        .with_rule(Rule::exclude("V2", "V6"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(report.swaps, 1);
    assert_eq!(team_of(&ws, "V5"), 0);
    assert_eq!(team_of(&ws, "V2"), 1);
    assert_eq!(ws.team(0).roster.len(), 2);
    assert_eq!(ws.team(1).roster.len(), 1);
    assert_eq!(report.rebalance.rebuilds, 0);
    assert_eq!(report.score, DrawScore::ZERO);
}

#[test]
fn test_inclusion_transfers_when_trade_breaks_a_rule() {
    // V2 would land next to V6, so V5 moves alone.
    let t0 = veterans(&["V1", "V2"]);
    let t1 = veterans(&["V5", "V6"]);
    let mut ws = workspace(&[&t0, &t1], 13);

    let rules = RuleBook::new()
        .with_rule(Rule::include("V1", "V5"))
        .with_rule(Rule::exclude("V2", "V6"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(team_of(&ws, "V5"), 0);
    assert_eq!(team_of(&ws, "V2"), 0);
    assert_eq!(team_of(&ws, "V6"), 1);
    assert_eq!(ws.team(0).roster.len(), 3);
    assert_eq!(report.score.soft(), -2);
}

#[test]
fn test_rule_with_absent_name_is_skipped() {
    let t0 = veterans(&["V1"]);
    let mut ws = workspace(&[&t0], 8);
    let rules = RuleBook::new()
        .with_rule(Rule::include("V1", "Nobody"))
        .with_rule(Rule::exclude("C1", "Ghost"));
    let report = RepairEngine::new(rules).repair(&mut ws);

    assert!(report.is_satisfied());
    assert_eq!(report.swaps, 0);
    assert!(!ws.is_locked("V1"));
}

fn skewed_workspace() -> AllocationWorkspace {
    // Team 0 holds both "other" members, team 1 the veteran; the plan wants
    // one "other" each and the veteran on team 0.
    let teams = build_teams(&[
        &[("G1", Category::Other), ("G2", Category::Other)],
        &[("V1", Category::Veteran)],
    ]);
    let mut plan = vec![GroupQuota::default(); 8];
    plan[0] = GroupQuota::new(1, 0, 1);
    plan[1] = GroupQuota::new(0, 0, 1);
    AllocationWorkspace::new(teams, QuotaPlan::new(plan), DrawRng::new(9))
}

#[test]
fn test_rebalance_restores_plan() {
    let mut ws = skewed_workspace();
    let report = RepairEngine::new(RuleBook::new()).repair(&mut ws);

    assert_eq!(report.rebalance.other_swaps, 1);
    assert_eq!(report.rebalance.rebuilds, 1);
    assert_eq!(report.score, DrawScore::ZERO);
    assert_eq!(ws.deviation(), 0);
    assert_eq!(ws.team(0).composition(), GroupQuota::new(1, 0, 1));
    assert_eq!(ws.team(1).composition(), GroupQuota::new(0, 0, 1));
}

#[test]
fn test_rebalance_step_cap() {
    let mut ws = skewed_workspace();
    let report = RepairEngine::new(RuleBook::new())
        .with_max_rebalance_steps(0)
        .repair(&mut ws);

    assert_eq!(report.rebalance.other_swaps, 0);
    assert!(report.is_satisfied());
    assert_eq!(report.score.soft(), -4);
    assert_eq!(ws.team(0).composition(), GroupQuota::new(0, 0, 2));
    assert_eq!(ws.team(1).composition(), GroupQuota::new(1, 0, 0));
}

#[test]
fn test_veteran_targets_respect_locks() {
    let teams = build_teams(&[
        &[
            ("V1", Category::Veteran),
            ("R1", Category::Rookie),
            ("R2", Category::Rookie),
        ],
        &[("V2", Category::Veteran), ("R3", Category::Rookie)],
    ]);
    let mut plan = vec![GroupQuota::default(); 8];
    plan[0] = GroupQuota::new(0, 3, 0);
    plan[1] = GroupQuota::new(2, 0, 0);
    let mut ws = AllocationWorkspace::new(teams, QuotaPlan::new(plan), DrawRng::new(0));
    ws.lock("V1");

    let targets = veteran_targets(&ws);
    assert_eq!(targets[0], GroupQuota::new(1, 2, 0));
    assert_eq!(targets[1], GroupQuota::new(1, 1, 0));
    assert!(targets[2..].iter().all(|t| *t == GroupQuota::default()));
}

#[test]
fn test_locked_people_survive_rebuild() {
    let teams = build_teams(&[
        &[("V1", Category::Veteran), ("V2", Category::Veteran)],
        &[("R1", Category::Rookie), ("R2", Category::Rookie)],
        &[("V3", Category::Veteran), ("R3", Category::Rookie)],
    ]);
    let mut plan = vec![GroupQuota::default(); 8];
    plan[0] = GroupQuota::new(1, 1, 0);
    plan[1] = GroupQuota::new(1, 1, 0);
    plan[2] = GroupQuota::new(1, 1, 0);

    for seed in 0..10 {
        let plan = QuotaPlan::new(plan.clone());
        let mut ws = AllocationWorkspace::new(teams.clone(), plan, DrawRng::new(seed));
        let rules = RuleBook::new().with_rule(Rule::include("C1", "V2"));
        let report = RepairEngine::new(rules).repair(&mut ws);

        assert!(report.is_satisfied());
        assert_eq!(team_of(&ws, "V2"), 0, "seed {seed}");
        assert_eq!(report.score, DrawScore::ZERO, "seed {seed}");
        let placed: usize = ws.teams().iter().map(|t| t.roster.len()).sum();
        assert_eq!(placed, 6);
    }
}

fn shifted_workspace(seed: u64) -> AllocationWorkspace {
    // V2 was moved alone onto team 0; the plan wants two people per team.
    let teams = build_teams(&[
        &[
            ("V1", Category::Veteran),
            ("R1", Category::Rookie),
            ("V2", Category::Veteran),
        ],
        &[("R2", Category::Rookie)],
    ]);
    let mut plan = vec![GroupQuota::default(); 8];
    plan[0] = GroupQuota::new(1, 1, 0);
    plan[1] = GroupQuota::new(1, 1, 0);
    let mut ws = AllocationWorkspace::new(teams, QuotaPlan::new(plan), DrawRng::new(seed));
    ws.lock("V1");
    ws
}

#[test]
fn test_veteran_targets_follow_planned_sizes() {
    let targets = veteran_targets(&shifted_workspace(0));
    assert_eq!(targets[0], GroupQuota::new(1, 1, 0));
    assert_eq!(targets[1], GroupQuota::new(1, 1, 0));
}

#[test]
fn test_rebuild_restores_team_sizes() {
    for seed in 0..10 {
        let mut ws = shifted_workspace(seed);
        let report = RepairEngine::new(RuleBook::new()).repair(&mut ws);

        assert_eq!(report.rebalance.rebuilds, 1, "seed {seed}");
        assert_eq!(report.score, DrawScore::ZERO, "seed {seed}");
        assert_eq!(team_of(&ws, "V1"), 0, "seed {seed}");
        assert_eq!(team_of(&ws, "V2"), 1, "seed {seed}");
        assert_eq!(ws.team(0).roster.len(), 2);
        assert_eq!(ws.team(1).roster.len(), 2);
    }
}
