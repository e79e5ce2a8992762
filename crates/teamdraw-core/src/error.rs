//! Error types for TeamDraw

use thiserror::Error;

use crate::person::Category;

/// Main error type for TeamDraw operations.
///
/// Every variant except [`DrawError::ConstraintUnsatisfiable`] aborts a run
/// with no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Captain list is not exactly 8 people split 4 male / 4 female
    #[error("Expected 8 captains split 4 M / 4 F, got {count} ({male} M / {female} F)")]
    InvalidCaptainComposition {
        count: usize,
        male: usize,
        female: usize,
    },

    /// A gender label is neither `M` nor `F`
    #[error("Gender must be M or F: {name} -> {label:?}")]
    InvalidGenderLabel { name: String, label: String },

    /// A quota asks for more people than a pool still holds
    #[error("Pool exhausted: team {team} needs {requested} {category}, only {available} left")]
    PoolExhausted {
        category: Category,
        team: usize,
        requested: usize,
        available: usize,
    },

    /// The quota planner ran out of team capacity
    #[error("Capacity exhausted: {unplaced} {category} could not be placed")]
    CapacityExhausted { category: Category, unplaced: usize },

    /// Preferred room size outside 2..=6
    #[error("Room size must be between 2 and 6, got {0}")]
    InvalidRoomSize(usize),

    /// A pairing rule could not be resolved by any swap
    #[error("Rule {rule} could not be satisfied for {} and {}", names[0], names[1])]
    ConstraintUnsatisfiable { rule: String, names: [String; 2] },
}

/// Result type alias for TeamDraw operations
pub type Result<T> = std::result::Result<T, DrawError>;
