//! Enumeration types for the hotel
//!
//! This module contains the enumeration types shared across the crate:
//! room status, the floor selection policy used by the allocator, and the
//! output formats supported by the command line front end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Occupancy status of a room as reported in room listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// The room can be booked
    Available,
    /// The room is booked
    Occupied,
}

impl RoomStatus {
    /// Map an availability flag to a status
    pub fn from_availability(is_available: bool) -> Self {
        if is_available {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "available"),
            RoomStatus::Occupied => write!(f, "occupied"),
        }
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" | "free" => Ok(RoomStatus::Available),
            "occupied" | "booked" => Ok(RoomStatus::Occupied),
            _ => Err(format!("Unknown room status: {}", s)),
        }
    }
}

/// Policy for choosing a floor during the single-floor phase of allocation
///
/// `FirstFit` stops at the first floor (in input order) that has enough
/// available rooms, even when that floor can only offer a non-contiguous set
/// and a later floor has a contiguous run. `PreferContiguous` keeps scanning
/// for a contiguous run before settling for the first floor's fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FloorSelection {
    /// First floor with enough available rooms wins
    #[default]
    FirstFit,
    /// Any floor with a contiguous run beats a non-contiguous fallback
    PreferContiguous,
}

impl fmt::Display for FloorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorSelection::FirstFit => write!(f, "first-fit"),
            FloorSelection::PreferContiguous => write!(f, "prefer-contiguous"),
        }
    }
}

impl FromStr for FloorSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "first-fit" | "firstfit" | "first" => Ok(FloorSelection::FirstFit),
            "prefer-contiguous" | "prefercontiguous" | "contiguous" => {
                Ok(FloorSelection::PreferContiguous)
            }
            _ => Err(format!("Unknown floor selection policy: {}", s)),
        }
    }
}

/// Output format options for the command line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JSON format for structured data
    Json,
    /// Plain text for terminals
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
