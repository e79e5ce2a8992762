//! Roster moves used by repair and rebalancing.
//!
//! Both moves act on an [`AllocationWorkspace`] and only ever touch roster
//! members. Captains never move.

use tracing::debug;

use crate::workspace::{AllocationWorkspace, Seat};

/// Exchanges two roster members on different teams.
///
/// Team sizes are preserved.
///
/// # Example
///
/// ```
/// use teamdraw_core::{Category, Gender, GroupQuota, Person, QuotaPlan, Team};
/// use teamdraw_solver::{AllocationWorkspace, DrawRng, RosterSwap, Seat};
///
/// let mut teams: Vec<Team> = (0..2)
///     .map(|i| Team::new(i, Person::captain(format!("C{i}"), Gender::Male)))
///     .collect();
/// teams[0].roster.push(Person::member("Ann", Category::Other));
/// teams[1].roster.push(Person::member("Bo", Category::Veteran));
/// let plan = QuotaPlan::new(vec![GroupQuota::default(); 2]);
/// let mut ws = AllocationWorkspace::new(teams, plan, DrawRng::new(0));
///
/// let swap = RosterSwap::new(Seat::new(0, 0), Seat::new(1, 0));
/// assert!(swap.is_doable(&ws));
/// swap.do_move(&mut ws);
/// assert_eq!(ws.team(1).roster[0].name, "Ann");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterSwap {
    left: Seat,
    right: Seat,
}

impl RosterSwap {
    pub fn new(left: Seat, right: Seat) -> Self {
        Self { left, right }
    }

    pub fn is_doable(&self, ws: &AllocationWorkspace) -> bool {
        // Swapping inside one team changes nothing
        if self.left.team == self.right.team {
            return false;
        }
        ws.person(self.left).is_some() && ws.person(self.right).is_some()
    }

    pub fn do_move(&self, ws: &mut AllocationWorkspace) {
        if let (Some(left), Some(right)) = (ws.person(self.left), ws.person(self.right)) {
            debug!(
                event = "swap",
                left = %left.name,
                left_team = self.left.team,
                right = %right.name,
                right_team = self.right.team,
            );
        }
        ws.swap_seats(self.left, self.right);
    }
}

/// Moves one roster member to another team without a counterpart.
///
/// Changes two team sizes; used only when no swap can satisfy an inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterTransfer {
    from: Seat,
    to_team: usize,
}

impl RosterTransfer {
    pub fn new(from: Seat, to_team: usize) -> Self {
        Self { from, to_team }
    }

    pub fn is_doable(&self, ws: &AllocationWorkspace) -> bool {
        self.from.team != self.to_team
            && self.to_team < ws.team_count()
            && ws.person(self.from).is_some()
    }

    pub fn do_move(&self, ws: &mut AllocationWorkspace) {
        if let Some(person) = ws.person(self.from) {
            debug!(
                event = "transfer",
                name = %person.name,
                from_team = self.from.team,
                to_team = self.to_team,
            );
        }
        ws.transfer(self.from, self.to_team);
    }
}
