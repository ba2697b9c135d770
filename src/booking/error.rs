//! Error types for bookings and room storage

use crate::types::RoomId;
use thiserror::Error;

/// Errors that can occur while booking rooms or accessing stored room state
#[derive(Debug, Error)]
pub enum BookingError {
    /// Request rejected before any allocation took place
    #[error("Invalid booking request: {0}")]
    InvalidRequest(String),

    /// Allocator could not find enough available rooms
    #[error("Not enough available rooms: requested {requested}, available {available}")]
    InsufficientInventory {
        /// Rooms asked for
        requested: usize,
        /// Rooms available when the allocation ran
        available: usize,
    },

    /// Room was taken between snapshot and commit
    #[error("Room {0} is no longer available")]
    RoomConflict(RoomId),

    /// Room ID not present in the store
    #[error("Unknown room: {0}")]
    UnknownRoom(RoomId),

    /// Stored state is missing or inconsistent
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BookingError {
    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether repeating the booking against a fresh snapshot may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, BookingError::RoomConflict(_))
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            BookingError::InvalidRequest(_) => "Request",
            BookingError::InsufficientInventory { .. } => "Inventory",
            BookingError::RoomConflict(_) => "Conflict",
            BookingError::UnknownRoom(_) => "Lookup",
            BookingError::Storage(_) => "Storage",
            BookingError::Io(_) => "IO",
            BookingError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for hotel and booking operations
pub type HotelResult<T> = Result<T, BookingError>;
