//! Room packing.
//!
//! Rooms are gender-homogeneous and independent of teams. Each gender uses
//! the fewest rooms that fit the preferred size, with sizes differing by at
//! most one and larger rooms first. At size 4 that gives:
//!
//! | people | rooms       |
//! |--------|-------------|
//! | 8      | 4, 4        |
//! | 7      | 4, 3        |
//! | 6      | 3, 3        |
//! | 5      | 3, 2        |
//! | 9      | 3, 3, 3     |
//! | 10     | 4, 3, 3     |
//!
//! A one-person room only appears when a gender has a single person.

use teamdraw_config::{DrawConfig, ROOM_SIZE_RANGE};
use teamdraw_core::{DrawError, DrawInput, Gender, Person, Result, Room};
use tracing::info;

use crate::intake::Population;
use crate::rng::{time_seed, DrawRng};

/// Rooms for both genders of one population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomAssignment {
    pub seed: u64,
    pub male: Vec<Room>,
    pub female: Vec<Room>,
}

impl RoomAssignment {
    pub fn rooms(&self, gender: Gender) -> &[Room] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Number of people placed in any room.
    pub fn occupant_count(&self) -> usize {
        self.male.iter().chain(&self.female).map(Room::len).sum()
    }
}

/// Splits people into rooms of a preferred size.
///
/// # Example
///
/// ```
/// use teamdraw_solver::RoomPacker;
///
/// let packer = RoomPacker::new(4).unwrap();
/// assert_eq!(packer.room_sizes(10), vec![4, 3, 3]);
/// assert_eq!(packer.room_sizes(5), vec![3, 2]);
/// assert!(RoomPacker::new(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomPacker {
    size: usize,
}

impl RoomPacker {
    /// # Errors
    ///
    /// [`DrawError::InvalidRoomSize`] unless `size` is within 2..=6.
    pub fn new(size: usize) -> Result<Self> {
        if !ROOM_SIZE_RANGE.contains(&size) {
            return Err(DrawError::InvalidRoomSize(size));
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Room sizes for `total` people, largest first.
    pub fn room_sizes(&self, total: usize) -> Vec<usize> {
        if total == 0 {
            return Vec::new();
        }
        let mut rooms = total.div_ceil(self.size);
        // Never strand one person while a pair is possible
        if total >= 2 && total / rooms < 2 {
            rooms = total / 2;
        }
        let base = total / rooms;
        let extra = total % rooms;
        (0..rooms)
            .map(|room| if room < extra { base + 1 } else { base })
            .collect()
    }

    /// Shuffles `people` and slices them into rooms.
    pub fn pack(&self, gender: Gender, mut people: Vec<Person>, rng: &mut DrawRng) -> Vec<Room> {
        rng.shuffle(&mut people);
        let mut people = people.into_iter();
        self.room_sizes(people.len())
            .into_iter()
            .enumerate()
            .map(|(index, size)| Room {
                index,
                gender,
                occupants: people.by_ref().take(size).collect(),
            })
            .collect()
    }

    /// Packs every captain and pool member, males first, on a stream seeded
    /// with `seed`.
    pub fn pack_population(&self, population: &Population, seed: u64) -> RoomAssignment {
        let mut rng = DrawRng::new(seed);
        let male = self.pack(Gender::Male, population.by_gender(Gender::Male), &mut rng);
        let female = self.pack(Gender::Female, population.by_gender(Gender::Female), &mut rng);
        RoomAssignment { seed, male, female }
    }
}

/// Validates `input` and packs it into rooms using `config`'s room size and
/// seed.
///
/// # Errors
///
/// Intake errors, or [`DrawError::InvalidRoomSize`].
pub fn pack_rooms(input: &DrawInput, config: &DrawConfig) -> Result<RoomAssignment> {
    let population = Population::from_input(input)?;
    let packer = RoomPacker::new(config.room_size)?;
    let seed = config.random_seed.unwrap_or_else(time_seed);
    let assignment = packer.pack_population(&population, seed);

    info!(
        event = "rooms_packed",
        seed = seed,
        room_size = packer.size(),
        male_rooms = assignment.male.len(),
        female_rooms = assignment.female.len(),
    );

    Ok(assignment)
}
