//! Room partitioning.
//!
//! # Algorithm
//!
//! 1. Shuffle a copy of the roster with a seeded RNG.
//! 2. Cut the shuffled roster into consecutive groups of `group_size`
//!    (the last group may be short), giving `ceil(N / G)` groups.
//! 3. Deal groups to rooms round-robin: group `i` goes to room
//!    `(i mod R) + 1`, so rooms keep groups in formation order.
//!
//! No room ends up with more than `ceil(groups / R)` groups.
//!
//! # Complexity
//! O(N) after the shuffle.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::{JudgingError, Result};
use crate::models::{Group, Room, RoomLayout, TeamId};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Splits `roster` into shuffled groups and deals them over `num_rooms`.
///
/// The roster slice itself is not reordered.
///
/// # Errors
/// `Configuration` if `group_size` or `num_rooms` is zero.
pub fn partition_teams<R: Rng + ?Sized>(
    roster: &[TeamId],
    group_size: usize,
    num_rooms: usize,
    rng: &mut R,
) -> Result<Vec<Room>> {
    check_dimensions(group_size, num_rooms)?;

    let mut shuffled = roster.to_vec();
    shuffled.shuffle(rng);

    let mut rooms: Vec<Room> = (1..=num_rooms).map(Room::new).collect();
    for (index, chunk) in shuffled.chunks(group_size).enumerate() {
        rooms[index % num_rooms].groups.push(Group {
            index,
            teams: chunk.to_vec(),
        });
    }

    Ok(rooms)
}

/// Builds a reproducible layout from `seed`.
pub fn build_layout(
    roster: &[TeamId],
    group_size: usize,
    num_rooms: usize,
    seed: u64,
) -> Result<RoomLayout> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rooms = partition_teams(roster, group_size, num_rooms, &mut rng)?;
    Ok(RoomLayout { rooms, seed })
}

fn check_dimensions(group_size: usize, num_rooms: usize) -> Result<()> {
    let mut errors = Vec::new();
    if group_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "group_size must be at least 1",
        ));
    }
    if num_rooms == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCount,
            "num_rooms must be at least 1",
        ));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(JudgingError::Configuration(errors))
    }
}
