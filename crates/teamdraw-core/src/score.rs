//! DrawScore - Two-level score describing how well a draw honours its rules

use std::cmp::Ordering;
use std::fmt;

/// A score with separate hard and soft levels.
///
/// The hard level counts unsatisfied pairing rules (negated), the soft level
/// counts quota deviation (negated). A draw is feasible when no rule is
/// broken; among feasible draws, less deviation is better.
///
/// When comparing scores:
/// 1. Hard scores are compared first
/// 2. Soft scores are only compared when hard scores are equal
///
/// # Examples
///
/// ```
/// use teamdraw_core::DrawScore;
///
/// let broken = DrawScore::of(-1, 0);   // one rule unsatisfied
/// let skewed = DrawScore::of(0, -4);   // all rules hold, quotas off by 4
///
/// assert!(skewed > broken);
/// assert!(DrawScore::ZERO > skewed);
/// assert_eq!(skewed.to_string(), "0hard/-4soft");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawScore {
    hard: i64,
    soft: i64,
}

impl DrawScore {
    /// The zero score.
    pub const ZERO: DrawScore = DrawScore { hard: 0, soft: 0 };

    /// Creates a new DrawScore.
    #[inline]
    pub const fn of(hard: i64, soft: i64) -> Self {
        DrawScore { hard, soft }
    }

    /// Penalty for `violations` broken rules and `deviation` misplaced heads.
    pub fn penalty(violations: usize, deviation: usize) -> Self {
        DrawScore::of(-(violations as i64), -(deviation as i64))
    }

    #[inline]
    pub const fn hard(&self) -> i64 {
        self.hard
    }

    #[inline]
    pub const fn soft(&self) -> i64 {
        self.soft
    }

    /// Returns true when every active rule is satisfied.
    #[inline]
    pub fn is_feasible(&self) -> bool {
        self.hard >= 0
    }
}

impl Ord for DrawScore {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.hard.cmp(&other.hard) {
            Ordering::Equal => self.soft.cmp(&other.soft),
            other => other,
        }
    }
}

impl PartialOrd for DrawScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DrawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DrawScore({}, {})", self.hard, self.soft)
    }
}

impl fmt::Display for DrawScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}
