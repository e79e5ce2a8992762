//! Entry point that runs the team draw and room packing on one seed.

use teamdraw_config::DrawConfig;
use teamdraw_core::{DrawInput, Result};
use teamdraw_solver::rng::time_seed;
use teamdraw_solver::{DrawOutcome, Population, RoomAssignment, RoomPacker, TeamDraw};

/// Teams and rooms from a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub teams: DrawOutcome,
    pub rooms: RoomAssignment,
}

impl DrawResult {
    pub fn seed(&self) -> u64 {
        self.teams.seed
    }
}

/// Validates `input`, draws teams and packs rooms.
///
/// The seed is resolved once: `config.random_seed`, or a time-derived value.
/// Teams and rooms use separate streams from that seed, so the room layout
/// does not depend on the rules.
///
/// # Errors
///
/// Any structural [`DrawError`](teamdraw_core::DrawError). Unsatisfied rules
/// are reported in `teams.report`.
pub fn draw(input: &DrawInput, config: &DrawConfig) -> Result<DrawResult> {
    #[cfg(feature = "console")]
    crate::console::init();

    let population = Population::from_input(input)?;
    let packer = RoomPacker::new(config.room_size)?;
    let seed = config.random_seed.unwrap_or_else(time_seed);

    let teams = TeamDraw::from_config(config).run(&population, Some(seed))?;
    let rooms = packer.pack_population(&population, seed);
    tracing::info!(
        event = "rooms_packed",
        seed = seed,
        room_size = packer.size(),
        male_rooms = rooms.male.len(),
        female_rooms = rooms.female.len(),
    );

    Ok(DrawResult { teams, rooms })
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamdraw_core::DrawError;
    use teamdraw_test::standard_input;

    #[test]
    fn test_draw_shares_seed() {
        let config = DrawConfig::new().with_random_seed(9);
        let result = draw(&standard_input(8, 8, 8), &config).unwrap();
        assert_eq!(result.seed(), 9);
        assert_eq!(result.rooms.seed, 9);

        let rooms = teamdraw_solver::pack_rooms(&standard_input(8, 8, 8), &config).unwrap();
        assert_eq!(rooms, result.rooms);
    }

    #[test]
    fn test_room_size_checked_before_drawing() {
        let config = DrawConfig::new().with_random_seed(1).with_room_size(8);
        assert_eq!(
            draw(&standard_input(8, 8, 8), &config),
            Err(DrawError::InvalidRoomSize(8))
        );
    }
}
