//! TeamDraw Solver Engine
//!
//! This crate provides the allocation pipeline:
//! - Seeded random source
//! - Intake (validation and deduplication of raw records)
//! - Quota planning and pool distribution
//! - Allocation workspace and roster swaps
//! - Constraint repair and quota rebalancing
//! - Room packing
//!
//! Logging levels:
//! - **INFO**: Draw start/end, plan summary, room packing summary
//! - **DEBUG**: Individual swaps, rebuilds and dropped duplicates
//! - **WARN**: Rules left unsatisfied after repair

pub mod distribute;
pub mod draw;
pub mod intake;
pub mod quota;
pub mod repair;
pub mod rng;
pub mod rooms;
pub mod workspace;

pub use distribute::{shuffle_rosters, PoolDistributor};
pub use draw::{run_draw, DrawOutcome, TeamDraw};
pub use intake::{validate_captains, Population};
pub use quota::QuotaPlanner;
pub use repair::{RebalanceStats, RepairEngine, RepairReport, RosterSwap, RosterTransfer};
pub use rng::DrawRng;
pub use rooms::{pack_rooms, RoomAssignment, RoomPacker};
pub use workspace::{AllocationWorkspace, Seat};
