//! Pool distribution.

use teamdraw_core::{Category, DrawError, Person, QuotaPlan, Result, Team};
use tracing::debug;

use crate::intake::Population;
use crate::rng::DrawRng;

/// Deals shuffled pools to teams according to a quota plan.
///
/// Pools are consumed in order: every team's veterans first, then rookies,
/// then "other" members.
#[derive(Debug, Clone)]
pub struct PoolDistributor {
    veterans: Vec<Person>,
    rookies: Vec<Person>,
    others: Vec<Person>,
}

impl PoolDistributor {
    pub fn new(population: &Population) -> Self {
        Self {
            veterans: population.veterans.clone(),
            rookies: population.rookies.clone(),
            others: population.others.clone(),
        }
    }

    /// Shuffles the veteran, rookie and other pools, in that order.
    pub fn shuffle(&mut self, rng: &mut DrawRng) {
        rng.shuffle(&mut self.veterans);
        rng.shuffle(&mut self.rookies);
        rng.shuffle(&mut self.others);
    }

    /// Builds one team per captain and deals each its quota.
    ///
    /// # Errors
    ///
    /// - [`DrawError::PoolExhausted`] if a quota asks for more people than
    ///   remain in the pool
    /// - [`DrawError::CapacityExhausted`] if people are left over once every
    ///   quota is met
    pub fn distribute(self, captains: &[Person], plan: &QuotaPlan) -> Result<Vec<Team>> {
        let mut teams: Vec<Team> = captains
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, captain)| Team::new(index, captain))
            .collect();

        let pools = [
            (Category::Veteran, self.veterans),
            (Category::Rookie, self.rookies),
            (Category::Other, self.others),
        ];
        for (category, pool) in pools {
            let mut remaining = pool.into_iter();
            for team in &mut teams {
                let requested = plan.team(team.index).get(category);
                let available = remaining.len();
                if requested > available {
                    return Err(DrawError::PoolExhausted {
                        category,
                        team: team.index,
                        requested,
                        available,
                    });
                }
                team.roster.extend(remaining.by_ref().take(requested));
            }
            if remaining.len() > 0 {
                return Err(DrawError::CapacityExhausted {
                    category,
                    unplaced: remaining.len(),
                });
            }
            debug!(event = "pool_dealt", category = %category);
        }

        Ok(teams)
    }
}

/// Reorders every roster. Order carries no meaning.
pub fn shuffle_rosters(teams: &mut [Team], rng: &mut DrawRng) {
    for team in teams {
        rng.shuffle(&mut team.roster);
    }
}
