//! The team draw pipeline: plan, distribute, repair.

use std::time::Instant;

use teamdraw_config::DrawConfig;
use teamdraw_core::{Category, DrawInput, QuotaPlan, Result, RuleBook, Team};
use tracing::info;

use crate::distribute::{shuffle_rosters, PoolDistributor};
use crate::intake::Population;
use crate::quota::QuotaPlanner;
use crate::repair::{RepairEngine, RepairReport};
use crate::rng::DrawRng;
use crate::workspace::AllocationWorkspace;

/// Result of one team draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The resolved seed; rerunning with it reproduces the draw.
    pub seed: u64,
    pub teams: Vec<Team>,
    pub plan: QuotaPlan,
    pub report: RepairReport,
}

impl DrawOutcome {
    /// Index of the team `name` sits on.
    pub fn team_of(&self, name: &str) -> Option<usize> {
        self.teams.iter().find(|t| t.contains(name)).map(|t| t.index)
    }

    /// Number of people placed, captains included.
    pub fn placed(&self) -> usize {
        self.teams.iter().map(Team::size).sum()
    }
}

/// Runs the allocation pipeline for a population.
///
/// # Example
///
/// ```
/// use teamdraw_core::{DrawInput, Record, Rule, RuleBook};
/// use teamdraw_solver::{Population, TeamDraw};
///
/// let mut input = DrawInput::default();
/// for i in 1..=8 {
///     let gender = if i <= 4 { "M" } else { "F" };
///     input.captains.push(Record::with_gender(format!("C{i}"), gender));
///     input.veterans.push(Record::named(format!("V{i}")));
///     input.others.push(Record::named(format!("G{i}")));
/// }
/// let population = Population::from_input(&input).unwrap();
///
/// let rules = RuleBook::new().with_rule(Rule::exclude("V1", "V2"));
/// let outcome = TeamDraw::new(rules).run(&population, Some(7)).unwrap();
///
/// assert_eq!(outcome.seed, 7);
/// assert!(outcome.teams.iter().all(|t| t.roster.len() == 2));
/// assert_ne!(outcome.team_of("V1"), outcome.team_of("V2"));
/// ```
#[derive(Debug, Clone)]
pub struct TeamDraw {
    repair: RepairEngine,
}

impl TeamDraw {
    pub fn new(rules: RuleBook) -> Self {
        Self {
            repair: RepairEngine::new(rules),
        }
    }

    /// Rules and rebalancing cap from `config`.
    pub fn from_config(config: &DrawConfig) -> Self {
        Self::new(config.rule_book()).with_max_rebalance_steps(config.max_rebalance_steps)
    }

    pub fn with_max_rebalance_steps(mut self, steps: usize) -> Self {
        self.repair = self.repair.with_max_rebalance_steps(steps);
        self
    }

    /// Draws teams for `population`, seeding the stream with `seed` or a
    /// time-derived value.
    ///
    /// # Errors
    ///
    /// Planning and distribution errors. Unsatisfied rules are not errors;
    /// see [`RepairReport::ensure_satisfied`].
    pub fn run(&self, population: &Population, seed: Option<u64>) -> Result<DrawOutcome> {
        let start = Instant::now();
        let mut rng = DrawRng::from_seed(seed);
        let seed = rng.seed();
        let counts = population.counts();

        info!(
            event = "draw_start",
            seed = seed,
            veterans = counts.veteran,
            rookies = counts.rookie,
            others = counts.other,
            rules = self.repair.rules().len(),
        );

        let mut distributor = PoolDistributor::new(population);
        distributor.shuffle(&mut rng);

        let plan = QuotaPlanner::new(&population.captains).plan(counts, &mut rng)?;
        info!(
            event = "plan_ready",
            veteran_spread = plan.spread(Category::Veteran),
            rookie_spread = plan.spread(Category::Rookie),
            other_spread = plan.spread(Category::Other),
        );

        let mut teams = distributor.distribute(&population.captains, &plan)?;
        shuffle_rosters(&mut teams, &mut rng);
        info!(event = "distribute_end", placed = population.len());

        let mut ws = AllocationWorkspace::new(teams, plan, rng);
        let report = self.repair.repair(&mut ws);
        info!(
            event = "repair_end",
            swaps = report.swaps,
            rebuilds = report.rebalance.rebuilds,
            violations = report.violations.len(),
            score = %report.score,
        );

        let (teams, plan) = ws.into_parts();
        info!(
            event = "draw_end",
            seed = seed,
            duration_ms = start.elapsed().as_millis() as u64,
        );

        Ok(DrawOutcome {
            seed,
            teams,
            plan,
            report,
        })
    }
}

/// Validates `input` and draws teams with `config`'s seed and rules.
///
/// # Errors
///
/// Intake, planning and distribution errors.
pub fn run_draw(input: &DrawInput, config: &DrawConfig) -> Result<DrawOutcome> {
    let population = Population::from_input(input)?;
    TeamDraw::from_config(config).run(&population, config.random_seed)
}
