//! Declarative pairing rules.
//!
//! Named-pair constraints are data, not control flow: the repair engine
//! evaluates a [`RuleBook`] generically, so adding a rule never touches the
//! allocation code.

use std::fmt;

/// Whether a pair must be kept apart or placed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    /// The two people must end up on different teams.
    Exclude,
    /// The two people must end up on the same team.
    Include,
}

/// Predicate on the run's resolved seed deciding whether a rule applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeedCondition {
    #[default]
    Always,
    /// Active only when `seed % n == 0`. A zero divisor never holds.
    DivisibleBy(u64),
}

impl SeedCondition {
    pub fn holds(&self, seed: u64) -> bool {
        match *self {
            SeedCondition::Always => true,
            SeedCondition::DivisibleBy(0) => false,
            SeedCondition::DivisibleBy(n) => seed % n == 0,
        }
    }
}

/// A named-pair constraint.
///
/// # Example
///
/// ```
/// use teamdraw_core::{Rule, RuleKind};
///
/// let rule = Rule::include("Kim", "Lee").when_seed_divisible_by(3);
/// assert_eq!(rule.kind, RuleKind::Include);
/// assert!(rule.is_active(9));
/// assert!(!rule.is_active(10));
/// assert_eq!(rule.partner_of("Lee"), Some("Kim"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub kind: RuleKind,
    pub names: [String; 2],
    pub condition: SeedCondition,
}

impl Rule {
    pub fn new(kind: RuleKind, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            kind,
            names: [a.into(), b.into()],
            condition: SeedCondition::Always,
        }
    }

    pub fn exclude(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::new(RuleKind::Exclude, a, b)
    }

    pub fn include(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::new(RuleKind::Include, a, b)
    }

    pub fn with_condition(mut self, condition: SeedCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn when_seed_divisible_by(self, n: u64) -> Self {
        self.with_condition(SeedCondition::DivisibleBy(n))
    }

    pub fn is_active(&self, seed: u64) -> bool {
        self.condition.holds(seed)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The other name of the pair, if `name` is part of it.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.names[0] == name {
            Some(&self.names[1])
        } else if self.names[1] == name {
            Some(&self.names[0])
        } else {
            None
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RuleKind::Exclude => "exclude",
            RuleKind::Include => "include",
        };
        write!(f, "{}({}, {})", kind, self.names[0], self.names[1])?;
        if let SeedCondition::DivisibleBy(n) = self.condition {
            write!(f, " if seed % {} == 0", n)?;
        }
        Ok(())
    }
}

/// Ordered rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Rules whose condition holds for `seed`, in table order.
    pub fn active(&self, seed: u64) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.is_active(seed))
    }
}

impl FromIterator<Rule> for RuleBook {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
