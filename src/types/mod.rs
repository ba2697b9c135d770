//! Core types and identifiers for the hotel
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based unique identifiers for floors and rooms
//! - **Enums**: Room status, floor selection policy, output formats
//! - **Configuration**: Hotel configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use hotel_room_allocator::types::*;
//!
//! let room_id = RoomId::new();
//! assert!(room_id.to_string().starts_with("ROOM_"));
//!
//! let config = HotelConfig {
//!     floor_selection: FloorSelection::PreferContiguous,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
