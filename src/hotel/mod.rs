//! Floors, rooms, and the hotel registry
//!
//! This module models the physical hotel and the operations that mutate room
//! availability outside of bookings.
//!
//! # Overview
//!
//! - **Room**: a numbered room with an availability flag
//! - **Floor**: an ordered collection of rooms sharing a floor number
//! - **Hotel**: all floors with lookups by room ID and room number
//! - **HotelGenerator**: standard layout seeding and random occupancy
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::hotel::*;
//! use hotel_room_allocator::types::HotelConfig;
//!
//! let mut hotel = HotelGenerator::generate_standard_layout(&HotelConfig::default());
//! assert_eq!(hotel.room_count(), 97);
//!
//! let room = hotel.get_room_by_number(1003).unwrap().id;
//! hotel.occupy_if_available(&[room]).unwrap();
//! assert_eq!(hotel.available_room_count(), 96);
//! ```

pub mod floor;
pub mod generator;
pub mod registry;
pub mod room;

// Re-export all public types for convenience
pub use floor::Floor;
pub use generator::HotelGenerator;
pub use registry::{Hotel, RoomListing};
pub use room::Room;
