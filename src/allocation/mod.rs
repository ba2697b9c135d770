//! Room selection for bookings
//!
//! This module decides which available rooms a booking receives, minimising
//! the travel time between the rooms of one booking.
//!
//! # Overview
//!
//! - **RoomPosition**: an available room reduced to floor and position
//! - **travel_time**: the distance metric between two rooms
//! - **Combinations**: lazy enumeration of candidate room sets
//! - **RoomAllocator**: the two-phase search (single floor, then multi floor)
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::allocation::*;
//! use hotel_room_allocator::hotel::HotelGenerator;
//! use hotel_room_allocator::types::HotelConfig;
//!
//! let hotel = HotelGenerator::generate_standard_layout(&HotelConfig::default());
//! let allocation = RoomAllocator::new().allocate(hotel.floors(), 3);
//!
//! assert_eq!(allocation.phase, AllocationPhase::SingleFloorContiguous);
//! assert_eq!(allocation.room_numbers(), vec![101, 102, 103]);
//! assert_eq!(allocation.cost, 2);
//! ```

pub mod allocator;
pub mod combinations;
pub mod position;

// Re-export all public types for convenience
pub use allocator::{
    find_consecutive_rooms, select_best_combination, Allocation, AllocationPhase, RoomAllocator,
};
pub use combinations::{combination_count, Combinations};
pub use position::{
    combination_cost, room_number_sum, travel_time, RoomPosition, FLOOR_TRAVEL_COST,
    LIFT_POSITION,
};
