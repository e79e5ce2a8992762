//! Per-team group quotas.

use crate::person::Category;

/// Target (or actual) head count of each non-captain group on one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupQuota {
    pub veteran: usize,
    pub rookie: usize,
    pub other: usize,
}

impl GroupQuota {
    pub const fn new(veteran: usize, rookie: usize, other: usize) -> Self {
        Self {
            veteran,
            rookie,
            other,
        }
    }

    /// Count for `category`; always 0 for captains.
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Captain => 0,
            Category::Veteran => self.veteran,
            Category::Rookie => self.rookie,
            Category::Other => self.other,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> Option<&mut usize> {
        match category {
            Category::Captain => None,
            Category::Veteran => Some(&mut self.veteran),
            Category::Rookie => Some(&mut self.rookie),
            Category::Other => Some(&mut self.other),
        }
    }

    pub fn total(&self) -> usize {
        self.veteran + self.rookie + self.other
    }

    /// Sum of absolute per-group differences.
    pub fn deviation(&self, other: &GroupQuota) -> usize {
        Category::GROUPS
            .iter()
            .map(|&c| self.get(c).abs_diff(other.get(c)))
            .sum()
    }
}

/// Quota map for every team, indexed by team index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotaPlan {
    teams: Vec<GroupQuota>,
}

impl QuotaPlan {
    pub fn new(teams: Vec<GroupQuota>) -> Self {
        Self { teams }
    }

    pub fn team(&self, index: usize) -> GroupQuota {
        self.teams.get(index).copied().unwrap_or_default()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupQuota> {
        self.teams.iter()
    }

    /// Sum of each field over all teams.
    pub fn totals(&self) -> GroupQuota {
        self.teams.iter().fold(GroupQuota::default(), |acc, q| {
            GroupQuota::new(
                acc.veteran + q.veteran,
                acc.rookie + q.rookie,
                acc.other + q.other,
            )
        })
    }

    /// Difference between the largest and smallest per-team value of `category`.
    ///
    /// # Examples
    ///
    /// ```
    /// use teamdraw_core::{Category, GroupQuota, QuotaPlan};
    ///
    /// let plan = QuotaPlan::new(vec![GroupQuota::new(2, 1, 0), GroupQuota::new(1, 1, 1)]);
    /// assert_eq!(plan.spread(Category::Veteran), 1);
    /// assert_eq!(plan.spread(Category::Rookie), 0);
    /// ```
    pub fn spread(&self, category: Category) -> usize {
        let values = self.teams.iter().map(|q| q.get(category));
        let max = values.clone().max().unwrap_or(0);
        let min = values.min().unwrap_or(0);
        max - min
    }
}
