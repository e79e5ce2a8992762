//! Allocation workspace.

use std::collections::HashSet;

use teamdraw_core::{Category, Person, QuotaPlan, Team};

use crate::rng::DrawRng;

/// Position of a non-captain member: team index and roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    pub team: usize,
    pub position: usize,
}

impl Seat {
    pub fn new(team: usize, position: usize) -> Self {
        Self { team, position }
    }
}

/// Where a person currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Captain { team: usize },
    Member(Seat),
}

impl Location {
    pub fn team(&self) -> usize {
        match *self {
            Location::Captain { team } => team,
            Location::Member(seat) => seat.team,
        }
    }

    pub fn seat(&self) -> Option<Seat> {
        match *self {
            Location::Captain { .. } => None,
            Location::Member(seat) => Some(seat),
        }
    }

    pub fn is_captain(&self) -> bool {
        matches!(self, Location::Captain { .. })
    }
}

/// Single owned state of one draw, passed by `&mut` through every stage
/// after distribution.
///
/// Holds the teams, the quota plan they were dealt from, the run's random
/// stream and the set of names that rebalancing must not move.
#[derive(Debug, Clone)]
pub struct AllocationWorkspace {
    teams: Vec<Team>,
    plan: QuotaPlan,
    rng: DrawRng,
    locked: HashSet<String>,
    swap_count: u64,
}

impl AllocationWorkspace {
    pub fn new(teams: Vec<Team>, plan: QuotaPlan, rng: DrawRng) -> Self {
        Self {
            teams,
            plan,
            rng,
            locked: HashSet::new(),
            swap_count: 0,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [Team] {
        &mut self.teams
    }

    pub fn team(&self, index: usize) -> &Team {
        &self.teams[index]
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn plan(&self) -> &QuotaPlan {
        &self.plan
    }

    pub fn rng(&mut self) -> &mut DrawRng {
        &mut self.rng
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Finds `name` among captains and rosters.
    pub fn locate(&self, name: &str) -> Option<Location> {
        self.teams.iter().find_map(|team| {
            if team.captain.name == name {
                Some(Location::Captain { team: team.index })
            } else {
                team.position(name)
                    .map(|position| Location::Member(Seat::new(team.index, position)))
            }
        })
    }

    pub fn person(&self, seat: Seat) -> Option<&Person> {
        self.teams.get(seat.team)?.roster.get(seat.position)
    }

    pub fn lock(&mut self, name: impl Into<String>) {
        self.locked.insert(name.into());
    }

    pub fn is_locked(&self, name: &str) -> bool {
        self.locked.contains(name)
    }

    /// Exchanges two roster members. Team sizes are unchanged.
    pub(crate) fn swap_seats(&mut self, left: Seat, right: Seat) {
        let right_person = self.teams[right.team].roster[right.position].clone();
        let left_person = std::mem::replace(
            &mut self.teams[left.team].roster[left.position],
            right_person,
        );
        self.teams[right.team].roster[right.position] = left_person;
        self.swap_count += 1;
    }

    /// Moves one roster member to the end of another team's roster.
    pub(crate) fn transfer(&mut self, from: Seat, to_team: usize) {
        let person = self.teams[from.team].roster.remove(from.position);
        self.teams[to_team].roster.push(person);
        self.swap_count += 1;
    }

    /// Removes every unlocked roster member of `category`, team by team.
    pub(crate) fn pull_unlocked(&mut self, category: Category) -> Vec<Person> {
        let locked = &self.locked;
        let mut pulled = Vec::new();
        for team in &mut self.teams {
            let (keep, take): (Vec<Person>, Vec<Person>) = team
                .roster
                .drain(..)
                .partition(|p| p.category != category || locked.contains(&p.name));
            team.roster = keep;
            pulled.extend(take);
        }
        pulled
    }

    /// Number of swaps and transfers applied so far.
    pub fn swap_count(&self) -> u64 {
        self.swap_count
    }

    /// Total distance between current compositions and the plan.
    pub fn deviation(&self) -> usize {
        self.teams
            .iter()
            .map(|team| team.composition().deviation(&self.plan.team(team.index)))
            .sum()
    }

    pub fn into_parts(self) -> (Vec<Team>, QuotaPlan) {
        (self.teams, self.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamdraw_core::GroupQuota;
    use teamdraw_test::{captain_teams, member};

    fn workspace() -> AllocationWorkspace {
        let mut teams = captain_teams();
        teams[0].roster.push(member("V1", Category::Veteran));
        teams[0].roster.push(member("G1", Category::Other));
        teams[1].roster.push(member("R1", Category::Rookie));
        let plan = QuotaPlan::new(vec![GroupQuota::default(); 8]);
        AllocationWorkspace::new(teams, plan, DrawRng::new(1))
    }

    #[test]
    fn test_locate() {
        let ws = workspace();
        assert_eq!(ws.locate("C2"), Some(Location::Captain { team: 1 }));
        assert_eq!(ws.locate("G1"), Some(Location::Member(Seat::new(0, 1))));
        assert_eq!(ws.locate("nobody"), None);
        assert!(ws.locate("C8").unwrap().is_captain());
    }

    #[test]
    fn test_swap_and_transfer() {
        let mut ws = workspace();
        ws.swap_seats(Seat::new(0, 0), Seat::new(1, 0));
        assert_eq!(ws.locate("V1").map(|l| l.team()), Some(1));
        assert_eq!(ws.locate("R1").map(|l| l.team()), Some(0));

        ws.transfer(Seat::new(0, 1), 2);
        assert_eq!(ws.team(0).roster.len(), 1);
        assert_eq!(ws.locate("G1"), Some(Location::Member(Seat::new(2, 0))));
        assert_eq!(ws.swap_count(), 2);
    }

    #[test]
    fn test_pull_unlocked_keeps_locked() {
        let mut ws = workspace();
        ws.teams_mut()[1].roster.push(member("V2", Category::Veteran));
        ws.lock("V2");
        let pulled = ws.pull_unlocked(Category::Veteran);
        assert_eq!(pulled.len(), 1);
        assert_eq!(pulled[0].name, "V1");
        assert!(ws.locate("V2").is_some());
        assert_eq!(ws.team(0).roster.len(), 1);
    }

    #[test]
    fn test_deviation() {
        let ws = workspace();
        // team 0 has V1 + G1, team 1 has R1; the plan is empty
        assert_eq!(ws.deviation(), 3);
    }
}
