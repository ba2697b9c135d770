//! Hotel layout and occupancy generation
//!
//! This module contains the generator that seeds the standard hotel layout
//! and the randomize operation that occupies a random subset of rooms.

use crate::hotel::{floor::Floor, registry::Hotel};
use crate::types::{HotelConfig, RoomId};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

/// Generator for hotel layouts and random occupancy
pub struct HotelGenerator {
    rng: Box<dyn RngCore>,
}

impl fmt::Debug for HotelGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotelGenerator").finish()
    }
}

impl HotelGenerator {
    /// Create a new generator seeded from entropy
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()) }
    }

    /// Create a new generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)) }
    }

    /// Create a generator honouring the configured seed, if any
    pub fn from_config(config: &HotelConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate the configured layout with every room available
    ///
    /// Floors `1..floor_count` get `rooms_per_floor` rooms, the last floor gets
    /// `last_floor_rooms`. Rooms are numbered `floor * 100 + position`, which
    /// for the tenth floor gives `1001..`.
    pub fn generate_standard_layout(config: &HotelConfig) -> Hotel {
        let mut hotel = Hotel::new();

        for floor_number in 1..=config.floor_count {
            let is_last_floor = floor_number == config.floor_count;
            let room_count =
                if is_last_floor { config.last_floor_rooms } else { config.rooms_per_floor };

            let mut floor = Floor::new(floor_number, is_last_floor);
            for position in 1..=room_count {
                floor.add_room_at(position);
            }
            hotel.add_floor(floor);
        }

        debug!(
            floors = hotel.floor_count(),
            rooms = hotel.room_count(),
            "Generated standard hotel layout"
        );
        hotel
    }

    /// Release every room, then occupy a random number of distinct rooms
    ///
    /// The number of occupied rooms is drawn uniformly from
    /// `1..=min(max_occupied, room_count)`. Returns that number.
    pub fn randomize_occupancy(&mut self, hotel: &mut Hotel, max_occupied: usize) -> usize {
        hotel.release_all();

        let upper = max_occupied.min(hotel.room_count());
        if upper == 0 {
            return 0;
        }
        let occupied = self.rng.gen_range(1..=upper);

        let mut room_ids: Vec<RoomId> =
            hotel.floors().iter().flat_map(|f| f.rooms.iter().map(|r| r.id)).collect();
        room_ids.shuffle(&mut self.rng);

        for &room_id in room_ids.iter().take(occupied) {
            if let Some(room) = hotel.get_room_mut(room_id) {
                room.occupy();
            }
        }

        debug!(occupied, total = hotel.room_count(), "Randomized room occupancy");
        occupied
    }
}

impl Default for HotelGenerator {
    fn default() -> Self {
        Self::new()
    }
}
