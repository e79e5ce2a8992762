//! Hand-built team fixtures.

use teamdraw_core::{Category, Person, Team};

use crate::roster::captain_people;

/// Eight teams with the standard captains and empty rosters.
pub fn captain_teams() -> Vec<Team> {
    captain_people()
        .into_iter()
        .enumerate()
        .map(|(i, captain)| Team::new(i, captain))
        .collect()
}

/// A pool member with its category's natural gender.
pub fn member(name: &str, category: Category) -> Person {
    Person::member(name, category)
}

/// Names on `team`, captain first, sorted after the captain.
pub fn member_names(team: &Team) -> Vec<String> {
    let mut names: Vec<String> = team.roster.iter().map(|p| p.name.clone()).collect();
    names.sort();
    names.insert(0, team.captain.name.clone());
    names
}
