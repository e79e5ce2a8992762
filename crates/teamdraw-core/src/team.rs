//! Teams and rooms.

use crate::person::{Category, Gender, Person};
use crate::quota::GroupQuota;

/// Number of teams in every draw.
pub const TEAM_COUNT: usize = 8;

/// Number of captains of each gender.
pub const CAPTAINS_PER_GENDER: usize = 4;

/// A team: one captain plus an unordered roster of pool members.
///
/// The roster never contains the captain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub index: usize,
    pub captain: Person,
    pub roster: Vec<Person>,
}

impl Team {
    pub fn new(index: usize, captain: Person) -> Self {
        Self {
            index,
            captain,
            roster: Vec::new(),
        }
    }

    /// Number of people including the captain.
    pub fn size(&self) -> usize {
        self.roster.len() + 1
    }

    /// Captain first, then the roster.
    pub fn all_people(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.captain).chain(self.roster.iter())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all_people().any(|p| p.name == name)
    }

    /// Roster position of `name`, if it is a non-captain member.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.roster.iter().position(|p| p.name == name)
    }

    pub fn count(&self, category: Category) -> usize {
        self.roster.iter().filter(|p| p.category == category).count()
    }

    /// Current per-group counts of the roster.
    pub fn composition(&self) -> GroupQuota {
        let mut quota = GroupQuota::default();
        for person in &self.roster {
            if let Some(slot) = quota.get_mut(person.category) {
                *slot += 1;
            }
        }
        quota
    }
}

/// A gender-homogeneous room.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub index: usize,
    pub gender: Gender,
    pub occupants: Vec<Person>,
}

impl Room {
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_composition() {
        let mut team = Team::new(0, Person::captain("Cap", Gender::Female));
        team.roster.push(Person::member("V1", Category::Veteran));
        team.roster.push(Person::member("V2", Category::Veteran));
        team.roster.push(Person::member("G1", Category::Other));

        assert_eq!(team.size(), 4);
        assert_eq!(team.composition(), GroupQuota::new(2, 0, 1));
        assert!(team.contains("Cap"));
        assert_eq!(team.position("Cap"), None);
        assert_eq!(team.position("G1"), Some(2));
    }
}
