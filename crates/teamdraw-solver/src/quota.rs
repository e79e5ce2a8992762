//! Quota planning.
//!
//! The planner first fixes each team's total non-captain capacity so team
//! sizes differ by at most one, then fills that capacity group by group:
//! the female "other" pool first (remainder preferring male-captain teams),
//! then rookies and veterans (remainder preferring female-captain teams).

use teamdraw_core::{Category, DrawError, Gender, GroupQuota, Person, QuotaPlan, Result};
use tracing::debug;

use crate::intake::validate_captains;
use crate::rng::DrawRng;

/// Computes per-team targets for each non-captain group.
///
/// # Example
///
/// ```
/// use teamdraw_core::{Category, Gender, GroupQuota, Person};
/// use teamdraw_solver::{DrawRng, QuotaPlanner};
///
/// let captains: Vec<Person> = (1..=8)
///     .map(|i| {
///         let gender = if i <= 4 { Gender::Male } else { Gender::Female };
///         Person::captain(format!("C{i}"), gender)
///     })
///     .collect();
///
/// let mut rng = DrawRng::new(42);
/// let plan = QuotaPlanner::new(&captains)
///     .plan(GroupQuota::new(8, 8, 8), &mut rng)
///     .unwrap();
///
/// assert_eq!(plan.totals(), GroupQuota::new(8, 8, 8));
/// assert!(plan.iter().all(|q| *q == GroupQuota::new(1, 1, 1)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuotaPlanner<'a> {
    captains: &'a [Person],
}

impl<'a> QuotaPlanner<'a> {
    pub fn new(captains: &'a [Person]) -> Self {
        Self { captains }
    }

    /// Plans quotas for pool sizes `counts`.
    ///
    /// # Errors
    ///
    /// - [`DrawError::InvalidCaptainComposition`] for a bad captain list
    /// - [`DrawError::CapacityExhausted`] if a person cannot be placed
    pub fn plan(&self, counts: GroupQuota, rng: &mut DrawRng) -> Result<QuotaPlan> {
        validate_captains(self.captains)?;
        let team_count = self.captains.len();

        let total = counts.total();
        let base = total / team_count;
        let remainder = total % team_count;
        let mut capacity = vec![base; team_count];
        for team in rng.sample_indices(team_count, remainder) {
            capacity[team] += 1;
        }
        debug!(event = "capacity", base = base, remainder = remainder);

        let mut quotas = vec![GroupQuota::default(); team_count];

        self.place_other(counts.other, &mut capacity, &mut quotas, rng)?;
        for category in [Category::Rookie, Category::Veteran] {
            self.deal(category, counts.get(category), &mut capacity, &mut quotas, rng)?;
        }

        Ok(QuotaPlan::new(quotas))
    }

    fn teams_led_by(&self, gender: Gender) -> Vec<usize> {
        self.captains
            .iter()
            .enumerate()
            .filter(|(_, c)| c.gender == gender)
            .map(|(i, _)| i)
            .collect()
    }

    fn place_other(
        &self,
        count: usize,
        capacity: &mut [usize],
        quotas: &mut [GroupQuota],
        rng: &mut DrawRng,
    ) -> Result<()> {
        let share = count / capacity.len();
        let mut left = count;
        for (team, quota) in quotas.iter_mut().enumerate() {
            let take = share.min(capacity[team]);
            quota.other = take;
            capacity[team] -= take;
            left -= take;
        }

        // Remainder goes to male-captain teams first, each segment in random order.
        let pool_gender = Category::Other.natural_gender().unwrap_or(Gender::Female);
        let mut order = self.teams_led_by(pool_gender.opposite());
        rng.shuffle(&mut order);
        let mut rest = self.teams_led_by(pool_gender);
        rng.shuffle(&mut rest);
        order.extend(rest);

        let mut first_pass = true;
        while left > 0 {
            let mut progressed = false;
            for &team in &order {
                if left == 0 {
                    break;
                }
                if capacity[team] > 0 {
                    quotas[team].other += 1;
                    capacity[team] -= 1;
                    left -= 1;
                    progressed = true;
                }
            }
            if !progressed {
                break;
            }
            if first_pass && left > 0 {
                debug!(event = "other_overflow", left = left);
            }
            first_pass = false;
        }

        if left > 0 {
            return Err(DrawError::CapacityExhausted {
                category: Category::Other,
                unplaced: left,
            });
        }
        Ok(())
    }

    fn deal(
        &self,
        category: Category,
        count: usize,
        capacity: &mut [usize],
        quotas: &mut [GroupQuota],
        rng: &mut DrawRng,
    ) -> Result<()> {
        let share = count / capacity.len();
        let mut left = count;
        for (team, quota) in quotas.iter_mut().enumerate() {
            let take = share.min(capacity[team]);
            if let Some(slot) = quota.get_mut(category) {
                *slot = take;
            }
            capacity[team] -= take;
            left -= take;
        }

        let pool_gender = category.natural_gender().unwrap_or(Gender::Male);
        let order = self.priority_order(pool_gender.opposite(), rng);
        let mut pointer = 0;
        while left > 0 {
            let next = (0..order.len())
                .map(|step| (pointer + step) % order.len())
                .find(|&at| capacity[order[at]] > 0);
            let Some(at) = next else {
                break;
            };
            let team = order[at];
            if let Some(slot) = quotas[team].get_mut(category) {
                *slot += 1;
            }
            capacity[team] -= 1;
            left -= 1;
            pointer = (at + 1) % order.len();
        }

        if left > 0 {
            return Err(DrawError::CapacityExhausted {
                category,
                unplaced: left,
            });
        }
        Ok(())
    }

    /// Teams led by `preferred` captains, then the rest; each segment
    /// rotated by a random offset.
    fn priority_order(&self, preferred: Gender, rng: &mut DrawRng) -> Vec<usize> {
        let mut first = self.teams_led_by(preferred);
        let mut second = self.teams_led_by(preferred.opposite());
        let offset = rng.offset(first.len());
        first.rotate_left(offset);
        let offset = rng.offset(second.len());
        second.rotate_left(offset);
        first.extend(second);
        first
    }
}
