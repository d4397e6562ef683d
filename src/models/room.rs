//! Room layout model.
//!
//! Teams are split into fixed-size groups, and groups are spread over the
//! event's rooms. The layout is informational: it tells judges where teams
//! sit but does not constrain which teams a judge is assigned.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Teams seated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Position of the group in formation order (0-based).
    pub index: usize,
    /// Teams in the group.
    pub teams: Vec<TeamId>,
}

/// A physical room hosting one or more groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room number (1-based).
    pub number: usize,
    /// Groups in formation order.
    pub groups: Vec<Group>,
}

impl Room {
    /// Creates an empty room.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            groups: Vec::new(),
        }
    }

    /// All teams seated in this room.
    pub fn teams(&self) -> impl Iterator<Item = TeamId> + '_ {
        self.groups.iter().flat_map(|g| g.teams.iter().copied())
    }

    /// Number of teams seated in this room.
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.teams.len()).sum()
    }
}

/// The complete room assignment for an event.
///
/// Immutable once built; `seed` reproduces the shuffle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Rooms `1..=num_rooms`, in order.
    pub rooms: Vec<Room>,
    /// Seed used to shuffle the roster.
    pub seed: u64,
}

impl RoomLayout {
    /// Total number of groups across all rooms.
    pub fn group_count(&self) -> usize {
        self.rooms.iter().map(|r| r.groups.len()).sum()
    }

    /// Room number hosting `team`.
    pub fn room_of(&self, team: TeamId) -> Option<usize> {
        self.rooms
            .iter()
            .find(|r| r.teams().any(|t| t == team))
            .map(|r| r.number)
    }

    /// Room by number.
    pub fn room(&self, number: usize) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> RoomLayout {
        let mut r1 = Room::new(1);
        r1.groups.push(Group {
            index: 0,
            teams: vec![TeamId(3), TeamId(1)],
        });
        let mut r2 = Room::new(2);
        r2.groups.push(Group {
            index: 1,
            teams: vec![TeamId(2)],
        });
        RoomLayout {
            rooms: vec![r1, r2],
            seed: 7,
        }
    }

    #[test]
    fn test_room_lookup() {
        let layout = sample_layout();
        assert_eq!(layout.room_of(TeamId(1)), Some(1));
        assert_eq!(layout.room_of(TeamId(2)), Some(2));
        assert_eq!(layout.room_of(TeamId(9)), None);
        assert_eq!(layout.group_count(), 2);
        assert_eq!(layout.room(1).map(Room::team_count), Some(2));
    }
}
