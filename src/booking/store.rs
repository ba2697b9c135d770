//! Room state storage
//!
//! A `RoomStore` holds the current availability of every room. Bookings read a
//! detached snapshot, allocate against it, then commit through
//! [`RoomStore::occupy_rooms`], which only succeeds if every chosen room is
//! still available at commit time.

use crate::booking::error::{BookingError, HotelResult};
use crate::hotel::{Floor, Hotel, HotelGenerator};
use crate::types::{HotelConfig, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Storage for room availability
pub trait RoomStore {
    /// Load the full hotel
    fn load(&self) -> HotelResult<Hotel>;

    /// Detached copy of the floors, in stored order
    fn snapshot(&self) -> HotelResult<Vec<Floor>> {
        Ok(self.load()?.into_floors())
    }

    /// Mark the rooms occupied if all of them are currently available
    fn occupy_rooms(&self, room_ids: &[RoomId]) -> HotelResult<()>;

    /// Replace the stored hotel wholesale
    fn replace(&self, hotel: Hotel) -> HotelResult<()>;
}

/// Store keeping the hotel in memory behind a mutex
#[derive(Debug, Default)]
pub struct InMemoryStore {
    hotel: Mutex<Hotel>,
}

impl InMemoryStore {
    /// Create a store holding the given hotel
    pub fn new(hotel: Hotel) -> Self {
        Self { hotel: Mutex::new(hotel) }
    }

    /// Create a store seeded with the configured layout
    pub fn with_standard_layout(config: &HotelConfig) -> Self {
        Self::new(HotelGenerator::generate_standard_layout(config))
    }

    fn lock(&self) -> HotelResult<MutexGuard<'_, Hotel>> {
        self.hotel.lock().map_err(|_| BookingError::storage("room store lock poisoned"))
    }
}

impl RoomStore for InMemoryStore {
    fn load(&self) -> HotelResult<Hotel> {
        Ok(self.lock()?.clone())
    }

    fn snapshot(&self) -> HotelResult<Vec<Floor>> {
        Ok(self.lock()?.snapshot())
    }

    fn occupy_rooms(&self, room_ids: &[RoomId]) -> HotelResult<()> {
        self.lock()?.occupy_if_available(room_ids)
    }

    fn replace(&self, hotel: Hotel) -> HotelResult<()> {
        *self.lock()? = hotel;
        Ok(())
    }
}

/// On-disk representation of the hotel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelState {
    /// Floors in stored order
    pub floors: Vec<Floor>,
    /// When the state was last written
    pub updated_at: DateTime<Utc>,
}

/// Store keeping the hotel in a pretty-printed JSON file
///
/// Every operation reads the file, and mutating operations write it back. A
/// missing file is created with the configured standard layout on first
/// access. Only one process should use a given file at a time.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    config: HotelConfig,
}

impl JsonFileStore {
    /// Create a store backed by `path`, seeding from `config` when the file is missing
    pub fn new(path: impl Into<PathBuf>, config: HotelConfig) -> Self {
        Self { path: path.into(), config }
    }

    /// Create a store at the configured state file
    pub fn from_config(config: &HotelConfig) -> Self {
        Self::new(&config.state_file, config.clone())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> HotelResult<Hotel> {
        let content = fs::read_to_string(&self.path)?;
        let state: HotelState = serde_json::from_str(&content)?;
        let hotel = Hotel::from_floors(state.floors);

        hotel.validate().map_err(|e| {
            BookingError::storage(format!("{} is not a valid hotel: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), updated_at = %state.updated_at, "Loaded hotel state");
        Ok(hotel)
    }

    fn write(&self, hotel: &Hotel) -> HotelResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let state = HotelState { floors: hotel.snapshot(), updated_at: Utc::now() };
        let content = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl RoomStore for JsonFileStore {
    fn load(&self) -> HotelResult<Hotel> {
        if !self.path.exists() {
            let hotel = HotelGenerator::generate_standard_layout(&self.config);
            self.write(&hotel)?;
            info!(path = %self.path.display(), rooms = hotel.room_count(), "Seeded new hotel state");
            return Ok(hotel);
        }
        self.read()
    }

    fn occupy_rooms(&self, room_ids: &[RoomId]) -> HotelResult<()> {
        let mut hotel = self.load()?;
        hotel.occupy_if_available(room_ids)?;
        self.write(&hotel)
    }

    fn replace(&self, hotel: Hotel) -> HotelResult<()> {
        self.write(&hotel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_config() -> HotelConfig {
        HotelConfig { floor_count: 2, rooms_per_floor: 3, last_floor_rooms: 2, ..Default::default() }
    }

    #[test]
    fn test_in_memory_conditional_commit() {
        let store = InMemoryStore::with_standard_layout(&small_config());
        let hotel = store.load().unwrap();
        let a = hotel.get_room_by_number(101).unwrap().id;
        let b = hotel.get_room_by_number(102).unwrap().id;

        store.occupy_rooms(&[a]).unwrap();
        assert!(matches!(store.occupy_rooms(&[b, a]), Err(BookingError::RoomConflict(id)) if id == a));

        let hotel = store.load().unwrap();
        assert!(!hotel.get_room(a).unwrap().is_available);
        assert!(hotel.get_room(b).unwrap().is_available);
    }

    #[test]
    fn test_in_memory_snapshot_is_detached() {
        let store = InMemoryStore::with_standard_layout(&small_config());
        let mut floors = store.snapshot().unwrap();
        floors[0].rooms[0].occupy();

        assert_eq!(store.load().unwrap().available_room_count(), 5);
    }

    #[test]
    fn test_json_store_seeds_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("hotel.json");
        let store = JsonFileStore::new(&path, small_config());

        assert!(!path.exists());
        let hotel = store.load().unwrap();
        assert!(path.exists());
        assert_eq!(hotel.room_count(), 5);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_json_store_persists_bookings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hotel.json");
        let store = JsonFileStore::new(&path, small_config());

        let room = store.load().unwrap().get_room_by_number(201).unwrap().id;
        store.occupy_rooms(&[room]).unwrap();

        // A second store on the same file sees the booking
        let reopened = JsonFileStore::new(&path, small_config());
        let hotel = reopened.load().unwrap();
        assert!(!hotel.get_room(room).unwrap().is_available);
        assert!(matches!(reopened.occupy_rooms(&[room]), Err(BookingError::RoomConflict(_))));
    }

    #[test]
    fn test_json_store_replace() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("hotel.json"), small_config());

        let mut hotel = store.load().unwrap();
        hotel.release_all();
        let ids: Vec<RoomId> = hotel.floors()[0].rooms.iter().map(|r| r.id).collect();
        hotel.occupy_if_available(&ids).unwrap();
        store.replace(hotel).unwrap();

        assert_eq!(store.load().unwrap().available_room_count(), 2);
    }

    #[test]
    fn test_json_store_rejects_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hotel.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(&path, small_config());
        assert!(matches!(store.load(), Err(BookingError::Serialization(_))));

        let empty = HotelState { floors: Vec::new(), updated_at: Utc::now() };
        fs::write(&path, serde_json::to_string(&empty).unwrap()).unwrap();
        assert!(matches!(store.load(), Err(BookingError::Storage(_))));
    }
}
