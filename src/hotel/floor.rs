//! Floor management and room organization
//!
//! This module contains the Floor struct: an ordered collection of rooms
//! sharing a floor number. The order rooms were added in is preserved, since
//! the multi-floor allocation phase walks rooms in that order.

use crate::hotel::room::Room;
use crate::types::layout::{MAX_POSITION, ROOM_NUMBER_BASE};
use crate::types::{FloorId, RoomId};
use serde::{Deserialize, Serialize};

/// Represents a floor of the hotel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    /// Unique identifier for the floor
    pub id: FloorId,
    /// Floor number, starting at 1
    pub floor_number: u32,
    /// Whether this is the top floor (affects room count only)
    pub is_last_floor: bool,
    /// Rooms on this floor in insertion order
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Create a new floor without rooms
    pub fn new(floor_number: u32, is_last_floor: bool) -> Self {
        Self { id: FloorId::new(), floor_number, is_last_floor, rooms: Vec::new() }
    }

    /// Room number for a position on this floor
    pub fn room_number_for(&self, position: u32) -> u32 {
        self.floor_number * ROOM_NUMBER_BASE + position
    }

    /// Add a room to the floor
    pub fn add_room(&mut self, mut room: Room) {
        room.floor_id = self.id;
        self.rooms.push(room);
    }

    /// Create and add an available room at the given position
    pub fn add_room_at(&mut self, position: u32) -> RoomId {
        let room = Room::new(self.id, self.room_number_for(position));
        let id = room.id;
        self.rooms.push(room);
        id
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == room_id)
    }

    /// Get a mutable reference to a room by ID
    pub fn get_room_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == room_id)
    }

    /// Rooms that can currently be booked, in insertion order
    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_available)
    }

    /// Number of rooms that can currently be booked
    pub fn available_count(&self) -> usize {
        self.available_rooms().count()
    }

    /// Get the number of rooms on the floor
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Check that every room belongs to this floor and is numbered for it
    pub fn validate(&self) -> Result<(), String> {
        if self.floor_number == 0 {
            return Err("Floor number must be at least 1".to_string());
        }

        for room in &self.rooms {
            if room.floor_id != self.id {
                return Err(format!("Room {} does not belong to floor {}", room.id, self.id));
            }
            if room.encoded_floor_number() != self.floor_number {
                return Err(format!(
                    "Room {} is numbered for floor {}, found on floor {}",
                    room.room_number,
                    room.encoded_floor_number(),
                    self.floor_number
                ));
            }
            if !(1..=MAX_POSITION).contains(&room.position()) {
                return Err(format!("Room {} has no valid position", room.room_number));
            }
        }

        Ok(())
    }
}
