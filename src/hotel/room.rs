//! Room records
//!
//! This module contains the Room struct: a numbered room on a floor with an
//! availability flag that bookings, resets, and randomize runs toggle.

use crate::types::layout::ROOM_NUMBER_BASE;
use crate::types::{FloorId, RoomId, RoomStatus};
use serde::{Deserialize, Serialize};

/// Represents a room on a floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: RoomId,
    /// ID of the floor this room belongs to
    pub floor_id: FloorId,
    /// Room number, `floor * 100 + position`
    pub room_number: u32,
    /// Whether the room can currently be booked
    pub is_available: bool,
}

impl Room {
    /// Create a new, available room
    pub fn new(floor_id: FloorId, room_number: u32) -> Self {
        Self { id: RoomId::new(), floor_id, room_number, is_available: true }
    }

    /// Offset of the room within its floor
    pub fn position(&self) -> u32 {
        self.room_number % ROOM_NUMBER_BASE
    }

    /// Floor number encoded in the room number
    pub fn encoded_floor_number(&self) -> u32 {
        self.room_number / ROOM_NUMBER_BASE
    }

    /// Current status for listings
    pub fn status(&self) -> RoomStatus {
        RoomStatus::from_availability(self.is_available)
    }

    /// Mark the room as booked
    pub fn occupy(&mut self) {
        self.is_available = false;
    }

    /// Mark the room as free
    pub fn release(&mut self) {
        self.is_available = true;
    }
}
