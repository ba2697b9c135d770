//! Room positions and the travel-time metric
//!
//! A `RoomPosition` is a flattened, read-only view of an available room used
//! only while an allocation runs. Travel time between two rooms models a lift
//! at position 1 on every floor: rooms on the same floor are as far apart as
//! their positions, rooms on different floors pay 2 per floor crossed plus the
//! corridor walk from the lift to each room.

use crate::hotel::{Floor, Room};
use crate::types::layout::ROOM_NUMBER_BASE;
use crate::types::RoomId;
use serde::{Deserialize, Serialize};

/// Position of the lift on every floor
pub const LIFT_POSITION: i64 = 1;

/// Cost of moving the lift by one floor
pub const FLOOR_TRAVEL_COST: i64 = 2;

/// A room as seen by the allocator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomPosition {
    /// Room identifier
    pub id: RoomId,
    /// Room number
    pub room_number: u32,
    /// Number of the floor the room is on
    pub floor_number: u32,
    /// Offset within the floor, `room_number % 100`
    pub position: u32,
    /// Availability when the position was taken
    pub is_available: bool,
}

impl RoomPosition {
    /// Derive the position of a room on a floor
    pub fn from_room(room: &Room, floor: &Floor) -> Self {
        Self {
            id: room.id,
            room_number: room.room_number,
            floor_number: floor.floor_number,
            position: room.room_number % ROOM_NUMBER_BASE,
            is_available: room.is_available,
        }
    }

    /// Travel time from this room to another
    pub fn travel_time_to(&self, other: &RoomPosition) -> i64 {
        travel_time(self, other)
    }
}

/// Travel time between two rooms
pub fn travel_time(a: &RoomPosition, b: &RoomPosition) -> i64 {
    let (pos_a, pos_b) = (i64::from(a.position), i64::from(b.position));

    if a.floor_number == b.floor_number {
        (pos_a - pos_b).abs()
    } else {
        let floors = (i64::from(a.floor_number) - i64::from(b.floor_number)).abs();
        FLOOR_TRAVEL_COST * floors + (pos_a - LIFT_POSITION) + (pos_b - LIFT_POSITION)
    }
}

/// Largest pairwise travel time within a set of rooms, 0 for fewer than two
pub fn combination_cost(rooms: &[RoomPosition]) -> i64 {
    let mut max_time = 0;
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            max_time = max_time.max(travel_time(a, b));
        }
    }
    max_time
}

/// Sum of room numbers, used to break cost ties
pub fn room_number_sum(rooms: &[RoomPosition]) -> u64 {
    rooms.iter().map(|r| u64::from(r.room_number)).sum()
}
