//! Booking workflow
//!
//! `BookingService` ties a [`RoomStore`] to the [`RoomAllocator`]: it takes a
//! snapshot, allocates against it, and commits with the store's conditional
//! update. A commit that loses a race against another booking is retried on a
//! fresh snapshot up to `max_booking_attempts` times.

use crate::allocation::{Allocation, AllocationPhase, RoomAllocator};
use crate::booking::error::{BookingError, HotelResult};
use crate::booking::statistics::OccupancyStatistics;
use crate::booking::store::RoomStore;
use crate::booking_event;
use crate::hotel::{HotelGenerator, RoomListing};
use crate::types::{HotelConfig, RoomId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Outcome of a successful booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    /// Booked room numbers in selection order
    pub rooms: Vec<u32>,
    /// IDs of the booked rooms, same order as `rooms`
    pub room_ids: Vec<RoomId>,
    /// How the rooms were found
    pub phase: AllocationPhase,
    /// Largest travel time between two booked rooms
    pub cost: i64,
    /// When the booking was committed
    pub booked_at: DateTime<Utc>,
    /// Human-readable confirmation
    pub message: String,
}

impl BookingReceipt {
    fn from_allocation(allocation: Allocation) -> Self {
        let rooms = allocation.room_numbers();
        let room_ids = allocation.rooms.iter().map(|r| r.id).collect();
        let message = format!(
            "Successfully booked {} - {} room(s)",
            rooms.iter().map(u32::to_string).collect::<Vec<_>>().join(","),
            rooms.len()
        );

        Self {
            rooms,
            room_ids,
            phase: allocation.phase,
            cost: allocation.cost,
            booked_at: Utc::now(),
            message,
        }
    }
}

/// Books rooms against a room store
#[derive(Debug)]
pub struct BookingService<S> {
    store: S,
    allocator: RoomAllocator,
    config: HotelConfig,
}

impl<S: RoomStore> BookingService<S> {
    /// Create a service over `store`, taking policy and limits from `config`
    pub fn new(store: S, config: HotelConfig) -> Self {
        let allocator = RoomAllocator::from_config(&config);
        Self { store, allocator, config }
    }

    /// Replace the allocator
    pub fn with_allocator(mut self, allocator: RoomAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The configuration in use
    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Book `count` rooms
    ///
    /// Fails with `InvalidRequest` when `count` is outside
    /// `1..=max_rooms_per_booking`, with `InsufficientInventory` when the
    /// allocator cannot find enough rooms, and with `RoomConflict` when every
    /// commit attempt lost a race. Nothing is booked on failure.
    #[instrument(skip(self), fields(policy = %self.allocator.floor_selection()))]
    pub fn book(&self, count: usize) -> HotelResult<BookingReceipt> {
        self.validate_count(count)?;

        let max_attempts = self.config.max_booking_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.try_book(count) {
                Err(error) if error.is_retryable() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, %error, "Booking conflict, retrying on fresh snapshot");
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn validate_count(&self, count: usize) -> HotelResult<()> {
        let max = self.config.max_rooms_per_booking;
        if count == 0 || count > max {
            return Err(BookingError::invalid_request(format!(
                "room count must be between 1 and {}, got {}",
                max, count
            )));
        }
        Ok(())
    }

    fn try_book(&self, count: usize) -> HotelResult<BookingReceipt> {
        let floors = self.store.snapshot()?;
        let allocation = self.allocator.allocate(&floors, count);

        if !allocation.is_complete(count) {
            let available: usize = floors.iter().map(|f| f.available_count()).sum();
            booking_event!(info, "Booking rejected", requested = count, available = available);
            return Err(BookingError::InsufficientInventory { requested: count, available });
        }

        let room_ids: Vec<RoomId> = allocation.rooms.iter().map(|r| r.id).collect();
        // A room that vanished since the snapshot (e.g. a reset) lost the race too
        self.store.occupy_rooms(&room_ids).map_err(|error| match error {
            BookingError::UnknownRoom(id) => BookingError::RoomConflict(id),
            other => other,
        })?;

        let receipt = BookingReceipt::from_allocation(allocation);
        booking_event!(
            info,
            "Rooms booked",
            rooms = receipt.message.as_str(),
            phase = receipt.phase.to_string().as_str(),
            cost = receipt.cost,
        );
        Ok(receipt)
    }

    /// Restore the standard layout with every room available
    #[instrument(skip(self))]
    pub fn reset(&self) -> HotelResult<usize> {
        let hotel = HotelGenerator::generate_standard_layout(&self.config);
        let rooms = hotel.room_count();
        self.store.replace(hotel)?;
        booking_event!(info, "Hotel reset", rooms = rooms);
        Ok(rooms)
    }

    /// Release every room, then occupy a random number of them
    ///
    /// Uses the configured seed when there is one, so repeated calls with the
    /// same seed produce the same occupancy. Returns the number of rooms
    /// occupied.
    #[instrument(skip(self))]
    pub fn randomize(&self) -> HotelResult<usize> {
        let mut hotel = self.store.load()?;
        let mut generator = HotelGenerator::from_config(&self.config);
        let occupied = generator.randomize_occupancy(&mut hotel, self.config.max_random_occupied);
        let total = hotel.room_count();
        self.store.replace(hotel)?;
        booking_event!(info, "Occupancy randomized", occupied = occupied, total = total);
        Ok(occupied)
    }

    /// Every room ordered by floor then room number
    pub fn list_rooms(&self) -> HotelResult<Vec<RoomListing>> {
        let listing = self.store.load()?.room_listing();
        debug!(rooms = listing.len(), "Listed rooms");
        Ok(listing)
    }

    /// Current occupancy statistics
    pub fn statistics(&self) -> HotelResult<OccupancyStatistics> {
        Ok(OccupancyStatistics::from_hotel(&self.store.load()?))
    }
}
