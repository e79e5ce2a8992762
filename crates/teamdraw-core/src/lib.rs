//! TeamDraw Core - Domain types for balanced team allocation
//!
//! This crate provides the fundamental abstractions for TeamDraw:
//! - Raw input records and participants with their categories
//! - Teams, rooms and per-team quotas
//! - Declarative pairing rules
//! - The draw score used to report repair quality
//! - The error taxonomy shared by every stage

pub mod error;
pub mod input;
pub mod person;
pub mod quota;
pub mod rule;
pub mod score;
pub mod team;

pub use error::{DrawError, Result};
pub use input::{DrawInput, Record};
pub use person::{Category, Gender, Person};
pub use quota::{GroupQuota, QuotaPlan};
pub use rule::{Rule, RuleBook, RuleKind, SeedCondition};
pub use score::DrawScore;
pub use team::{Room, Team, CAPTAINS_PER_GENDER, TEAM_COUNT};
