//! Hotel registry and room lookup
//!
//! This module contains the Hotel struct: the floors of the hotel in their
//! stored order, plus lookup indices by room ID and room number. It is the
//! in-memory counterpart of the persisted room table and provides the
//! conditional update that bookings commit through.

use crate::booking::error::{BookingError, HotelResult};
use crate::hotel::{floor::Floor, room::Room};
use crate::types::{RoomId, RoomStatus};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One row of a room listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomListing {
    /// Room identifier
    pub id: RoomId,
    /// Room number as displayed to guests
    pub number: String,
    /// Floor number
    pub floor: u32,
    /// Current status
    pub status: RoomStatus,
}

/// The floors of a hotel with lookup capabilities
#[derive(Debug, Clone, Default)]
pub struct Hotel {
    /// Floors in stored order
    floors: Vec<Floor>,
    /// room ID -> (floor index, room index)
    room_index: HashMap<RoomId, (usize, usize)>,
    /// room number -> (floor index, room index)
    number_index: HashMap<u32, (usize, usize)>,
}

impl Hotel {
    /// Create a new empty hotel
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hotel from floors, keeping their order
    pub fn from_floors(floors: Vec<Floor>) -> Self {
        let mut hotel = Self { floors, ..Default::default() };
        hotel.rebuild_indices();
        hotel
    }

    /// Add a floor to the hotel
    pub fn add_floor(&mut self, floor: Floor) {
        let floor_idx = self.floors.len();
        for (room_idx, room) in floor.rooms.iter().enumerate() {
            self.room_index.insert(room.id, (floor_idx, room_idx));
            self.number_index.insert(room.room_number, (floor_idx, room_idx));
        }
        self.floors.push(floor);
    }

    /// Rebuild the internal indices
    pub fn rebuild_indices(&mut self) {
        self.room_index.clear();
        self.number_index.clear();

        for (floor_idx, floor) in self.floors.iter().enumerate() {
            for (room_idx, room) in floor.rooms.iter().enumerate() {
                self.room_index.insert(room.id, (floor_idx, room_idx));
                self.number_index.insert(room.room_number, (floor_idx, room_idx));
            }
        }
    }

    /// All floors in stored order
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    /// Consume the hotel, returning its floors
    pub fn into_floors(self) -> Vec<Floor> {
        self.floors
    }

    /// Detached copy of the floors for allocation
    pub fn snapshot(&self) -> Vec<Floor> {
        self.floors.clone()
    }

    /// Get a room by ID
    pub fn get_room(&self, room_id: RoomId) -> Option<&Room> {
        self.room_index
            .get(&room_id)
            .and_then(|&(floor_idx, room_idx)| self.room_at(floor_idx, room_idx))
    }

    /// Get a room by its room number
    pub fn get_room_by_number(&self, room_number: u32) -> Option<&Room> {
        self.number_index
            .get(&room_number)
            .and_then(|&(floor_idx, room_idx)| self.room_at(floor_idx, room_idx))
    }

    /// Get the floor that contains a specific room
    pub fn floor_for_room(&self, room_id: RoomId) -> Option<&Floor> {
        self.room_index.get(&room_id).and_then(|&(floor_idx, _)| self.floors.get(floor_idx))
    }

    fn room_at(&self, floor_idx: usize, room_idx: usize) -> Option<&Room> {
        self.floors.get(floor_idx).and_then(|floor| floor.rooms.get(room_idx))
    }

    /// Get a mutable reference to a room by ID
    pub fn get_room_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        let &(floor_idx, room_idx) = self.room_index.get(&room_id)?;
        self.floors.get_mut(floor_idx).and_then(|floor| floor.rooms.get_mut(room_idx))
    }

    /// Get total number of floors
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Get total number of rooms across all floors
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(|f| f.room_count()).sum()
    }

    /// Get number of rooms that can currently be booked
    pub fn available_room_count(&self) -> usize {
        self.floors.iter().map(|f| f.available_count()).sum()
    }

    /// Set the availability of a single room
    pub fn set_availability(&mut self, room_id: RoomId, is_available: bool) -> HotelResult<()> {
        let room = self.get_room_mut(room_id).ok_or(BookingError::UnknownRoom(room_id))?;
        room.is_available = is_available;
        Ok(())
    }

    /// Mark every given room as occupied, but only if all of them are available
    ///
    /// Fails on the first unknown or already occupied room (a room listed twice
    /// counts as occupied by its first occurrence). Nothing is modified when
    /// this returns an error.
    pub fn occupy_if_available(&mut self, room_ids: &[RoomId]) -> HotelResult<()> {
        let mut claimed = HashSet::with_capacity(room_ids.len());

        for &room_id in room_ids {
            let room = self.get_room(room_id).ok_or(BookingError::UnknownRoom(room_id))?;
            if !room.is_available || !claimed.insert(room_id) {
                return Err(BookingError::RoomConflict(room_id));
            }
        }

        for &room_id in room_ids {
            if let Some(room) = self.get_room_mut(room_id) {
                room.occupy();
            }
        }

        Ok(())
    }

    /// Mark every room as available
    pub fn release_all(&mut self) {
        for room in self.floors.iter_mut().flat_map(|f| f.rooms.iter_mut()) {
            room.release();
        }
    }

    /// Listing of every room ordered by floor number then room number
    pub fn room_listing(&self) -> Vec<RoomListing> {
        let mut rows: Vec<(u32, &Room)> = self
            .floors
            .iter()
            .flat_map(|floor| floor.rooms.iter().map(move |room| (floor.floor_number, room)))
            .collect();
        rows.sort_by_key(|&(floor_number, room)| (floor_number, room.room_number));

        rows.into_iter()
            .map(|(floor_number, room)| RoomListing {
                id: room.id,
                number: room.room_number.to_string(),
                floor: floor_number,
                status: room.status(),
            })
            .collect()
    }

    /// Validate every floor and the hotel-wide numbering invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.floors.is_empty() {
            return Err("Hotel must have at least one floor".to_string());
        }

        let mut floor_numbers = HashSet::new();
        for floor in &self.floors {
            floor
                .validate()
                .map_err(|e| format!("Floor {} validation failed: {}", floor.floor_number, e))?;
            if !floor_numbers.insert(floor.floor_number) {
                return Err(format!("Floor number {} appears twice", floor.floor_number));
            }
        }

        if self.number_index.len() != self.room_count() {
            return Err("Room numbers must be unique".to_string());
        }

        let last_floors: Vec<&Floor> = self.floors.iter().filter(|f| f.is_last_floor).collect();
        let highest = self.floors.iter().map(|f| f.floor_number).max();
        match last_floors.as_slice() {
            [last] if Some(last.floor_number) == highest => Ok(()),
            [last] => Err(format!(
                "Floor {} is marked as last but is not the highest floor",
                last.floor_number
            )),
            _ => Err(format!("Expected exactly one last floor, found {}", last_floors.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_hotel() -> Hotel {
        let mut hotel = Hotel::new();
        for floor_number in 1..=3 {
            let mut floor = Floor::new(floor_number, floor_number == 3);
            for position in 1..=4 {
                floor.add_room_at(position);
            }
            hotel.add_floor(floor);
        }
        hotel
    }

    #[test]
    fn test_lookups() {
        let hotel = small_hotel();

        assert_eq!(hotel.floor_count(), 3);
        assert_eq!(hotel.room_count(), 12);
        assert_eq!(hotel.available_room_count(), 12);

        let room = hotel.get_room_by_number(203).unwrap();
        assert_eq!(hotel.get_room(room.id).map(|r| r.room_number), Some(203));
        assert_eq!(hotel.floor_for_room(room.id).map(|f| f.floor_number), Some(2));
        assert!(hotel.get_room_by_number(205).is_none());
        assert!(hotel.validate().is_ok());
    }

    #[test]
    fn test_occupy_if_available_is_all_or_nothing() {
        let mut hotel = small_hotel();
        let a = hotel.get_room_by_number(101).unwrap().id;
        let b = hotel.get_room_by_number(102).unwrap().id;
        let c = hotel.get_room_by_number(103).unwrap().id;

        hotel.set_availability(c, false).unwrap();

        let result = hotel.occupy_if_available(&[a, b, c]);
        assert!(matches!(result, Err(BookingError::RoomConflict(id)) if id == c));
        // a and b untouched
        assert!(hotel.get_room(a).unwrap().is_available);
        assert!(hotel.get_room(b).unwrap().is_available);

        hotel.occupy_if_available(&[a, b]).unwrap();
        assert_eq!(hotel.available_room_count(), 9);
    }

    #[test]
    fn test_occupy_if_available_rejects_duplicates_and_unknown() {
        let mut hotel = small_hotel();
        let a = hotel.get_room_by_number(101).unwrap().id;

        assert!(matches!(
            hotel.occupy_if_available(&[a, a]),
            Err(BookingError::RoomConflict(_))
        ));
        assert!(matches!(
            hotel.occupy_if_available(&[RoomId::new()]),
            Err(BookingError::UnknownRoom(_))
        ));
        assert_eq!(hotel.available_room_count(), 12);
    }

    #[test]
    fn test_get_room_mut() {
        let mut hotel = small_hotel();
        let id = hotel.get_room_by_number(304).unwrap().id;

        hotel.get_room_mut(id).unwrap().occupy();
        assert!(!hotel.get_room(id).unwrap().is_available);
        assert_eq!(hotel.available_room_count(), 11);
        assert!(hotel.get_room_mut(RoomId::new()).is_none());
    }

    #[test]
    fn test_release_all() {
        let mut hotel = small_hotel();
        let ids: Vec<RoomId> = hotel.floors()[0].rooms.iter().map(|r| r.id).collect();
        hotel.occupy_if_available(&ids).unwrap();
        assert_eq!(hotel.available_room_count(), 8);

        hotel.release_all();
        assert_eq!(hotel.available_room_count(), 12);
    }

    #[test]
    fn test_room_listing_order() {
        // Floors stored out of order still list by floor number
        let mut floors = small_hotel().into_floors();
        floors.reverse();
        let mut hotel = Hotel::from_floors(floors);

        let id = hotel.get_room_by_number(302).unwrap().id;
        hotel.set_availability(id, false).unwrap();

        let listing = hotel.room_listing();
        assert_eq!(listing.len(), 12);
        assert_eq!(listing[0].number, "101");
        assert_eq!(listing[11].number, "304");
        assert_eq!(listing[9].status, RoomStatus::Occupied);
        assert_eq!(listing[9].floor, 3);
    }

    #[test]
    fn test_validation_failures() {
        assert!(Hotel::new().validate().is_err());

        // Two floors marked as last
        let mut floors = small_hotel().into_floors();
        floors[0].is_last_floor = true;
        assert!(Hotel::from_floors(floors).validate().is_err());

        // Last floor is not the highest
        let mut floors = small_hotel().into_floors();
        floors[2].is_last_floor = false;
        floors[1].is_last_floor = true;
        assert!(Hotel::from_floors(floors).validate().is_err());
    }
}
