//! Hotel Room Allocator
//!
//! Books groups of rooms in a multi-floor hotel so that the rooms of one
//! booking are as close to each other as possible.
//!
//! # Overview
//!
//! The hotel has a lift at position 1 of every floor. Moving the lift one floor
//! costs 2 time units and walking between adjacent rooms costs 1. A booking of
//! `count` rooms prefers a single floor; only when no floor can take the whole
//! booking are rooms spread across floors, choosing the set whose worst
//! pairwise travel time is smallest.
//!
//! ## Key Features
//!
//! - **Two-phase allocation**: consecutive rooms on one floor first, then the
//!   optimal multi-floor combination
//! - **Configurable floor policy**: first fitting floor, or any floor with a
//!   consecutive run
//! - **Safe commits**: bookings are applied only if every chosen room is still
//!   available, with bounded retry on conflicts
//! - **Persistent state**: in-memory or JSON file room stores
//!
//! ## Quick Start
//!
//! ```rust
//! use hotel_room_allocator::*;
//!
//! let config = HotelConfig::default();
//! let store = InMemoryStore::with_standard_layout(&config);
//! let service = BookingService::new(store, config);
//!
//! let receipt = service.book(3)?;
//! assert_eq!(receipt.rooms, vec![101, 102, 103]);
//! # Ok::<(), BookingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, and configuration
//! - [`hotel`]: Floors, rooms, and the hotel registry
//! - [`allocation`]: Travel time and the room allocator
//! - [`booking`]: Booking workflow, storage, statistics, and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Hotel     │    │ Allocation  │
//! │             │◄───┤             │◄───┤             │
//! │ Identifiers │    │ Floors      │    │ Positions   │
//! │ Config      │    │ Rooms       │    │ Allocator   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                           ▲                   ▲
//!                           │                   │
//!                    ┌─────────────────────────────────┐
//!                    │            Booking              │
//!                    │  Service · Stores · Statistics  │
//!                    └─────────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod allocation;
pub mod booking;
pub mod hotel;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    ConfigError,
    ConfigValidationError,
    FloorId,
    // Enums
    FloorSelection,
    HotelConfig,
    OutputFormat,
    // Identifiers
    RoomId,
    RoomStatus,
};

// Hotel model
pub use hotel::{Floor, Hotel, HotelGenerator, Room, RoomListing};

// Allocation
pub use allocation::{travel_time, Allocation, AllocationPhase, RoomAllocator, RoomPosition};

// Booking workflow
pub use booking::{
    BookingError, BookingReceipt, BookingService, FloorOccupancy, HotelResult, InMemoryStore,
    JsonFileStore, LoggingConfig, OccupancyStatistics, RoomStore,
};
