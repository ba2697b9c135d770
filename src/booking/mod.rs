//! Booking workflow, room storage, and logging
//!
//! This module turns an allocation into a committed booking and owns the
//! ambient pieces the binary needs around it.
//!
//! # Overview
//!
//! - **BookingService**: validate, snapshot, allocate, commit, retry
//! - **RoomStore**: storage seam with in-memory and JSON file implementations
//! - **OccupancyStatistics**: hotel-wide and per-floor occupancy
//! - **BookingError**: error taxonomy for bookings and storage
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::booking::*;
//! use hotel_room_allocator::types::HotelConfig;
//!
//! let config = HotelConfig::default();
//! let service = BookingService::new(InMemoryStore::with_standard_layout(&config), config);
//!
//! let receipt = service.book(2)?;
//! assert_eq!(receipt.message, "Successfully booked 101,102 - 2 room(s)");
//!
//! let stats = service.statistics()?;
//! assert_eq!(stats.available_rooms, 95);
//! # Ok::<(), BookingError>(())
//! ```

pub mod error;
pub mod logging;
pub mod service;
pub mod statistics;
pub mod store;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use service::*;
pub use statistics::*;
pub use store::*;
