//! TeamDraw - balanced, constraint-aware team allocation
//!
//! Splits captains and three participant pools into eight gender-balanced
//! teams, enforces named-pair rules, and packs everyone into
//! gender-homogeneous rooms.
//!
//! # Example
//!
//! ```rust
//! use teamdraw::prelude::*;
//!
//! let mut input = DrawInput::default();
//! for i in 1..=8 {
//!     let gender = if i <= 4 { "M" } else { "F" };
//!     input.captains.push(Record::with_gender(format!("C{i}"), gender));
//!     input.veterans.push(Record::named(format!("V{i}")));
//!     input.rookies.push(Record::named(format!("R{i}")));
//!     input.others.push(Record::named(format!("G{i}")));
//! }
//!
//! let config = DrawConfig::new()
//!     .with_random_seed(42)
//!     .with_rule(RuleConfig::exclude("V1", "V2"))
//!     .with_rule(RuleConfig::include("R1", "G1").when_seed_divisible_by(3));
//!
//! let result = teamdraw::draw(&input, &config).unwrap();
//! assert!(result.teams.teams.iter().all(|t| t.roster.len() == 3));
//! assert_ne!(result.teams.team_of("V1"), result.teams.team_of("V2"));
//! assert_eq!(result.teams.team_of("R1"), result.teams.team_of("G1"));
//! assert_eq!(result.rooms.occupant_count(), 32);
//! ```

// Domain types
pub use teamdraw_core::{
    Category, DrawError, DrawInput, DrawScore, Gender, GroupQuota, Person, QuotaPlan, Record,
    Result, Room, Rule, RuleBook, RuleKind, SeedCondition, Team, TEAM_COUNT,
};

// Configuration
pub use teamdraw_config::{ConfigError, DrawConfig, RuleConfig, RuleType};

// Pipeline
pub use teamdraw_solver::{
    pack_rooms, run_draw, DrawOutcome, Population, RepairReport, RoomAssignment, RoomPacker,
    TeamDraw,
};

#[cfg(feature = "console")]
pub mod console;

mod pipeline;
pub use pipeline::{draw, DrawResult};

pub mod prelude {
    pub use super::{draw, DrawResult};
    pub use super::{DrawConfig, DrawError, DrawInput, DrawOutcome, Record, RuleConfig};
    pub use super::{Gender, Room, RoomAssignment, Rule, RuleBook, Team};
}
