//! Shared test fixtures for TeamDraw crates.
//!
//! This crate provides data builders only. It does NOT depend on
//! `teamdraw-solver` to avoid circular dependencies.
//!
//! - [`roster`] - Input records: the standard captain list and named pools
//! - [`teams`] - Hand-built teams for repair and rebalance tests
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! teamdraw-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use teamdraw_test::roster::{standard_input, captains};
//! use teamdraw_test::teams::captain_teams;
//! ```

pub mod roster;
pub mod teams;

// Re-export commonly used builders at crate root for convenience
pub use roster::{captain_people, captains, pool, standard_input};
pub use teams::{captain_teams, member, member_names};
