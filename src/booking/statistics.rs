//! Occupancy statistics and reporting

use crate::hotel::Hotel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy of a single floor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorOccupancy {
    /// Floor number
    pub floor_number: u32,
    /// Rooms on the floor
    pub total_rooms: usize,
    /// Rooms that can be booked
    pub available_rooms: usize,
    /// Rooms already taken
    pub occupied_rooms: usize,
}

impl FloorOccupancy {
    /// Share of the floor's rooms occupied
    pub fn occupancy_percentage(&self) -> f64 {
        percentage(self.occupied_rooms, self.total_rooms)
    }
}

/// Hotel-wide occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupancyStatistics {
    /// Number of floors
    pub total_floors: usize,
    /// Number of rooms
    pub total_rooms: usize,
    /// Rooms that can be booked
    pub available_rooms: usize,
    /// Rooms already taken
    pub occupied_rooms: usize,
    /// Breakdown ordered by floor number
    pub per_floor: Vec<FloorOccupancy>,
}

impl OccupancyStatistics {
    /// Collect statistics from the current hotel state
    pub fn from_hotel(hotel: &Hotel) -> Self {
        let mut per_floor: Vec<FloorOccupancy> = hotel
            .floors()
            .iter()
            .map(|floor| {
                let available = floor.available_count();
                FloorOccupancy {
                    floor_number: floor.floor_number,
                    total_rooms: floor.room_count(),
                    available_rooms: available,
                    occupied_rooms: floor.room_count() - available,
                }
            })
            .collect();
        per_floor.sort_by_key(|f| f.floor_number);

        let total_rooms = hotel.room_count();
        let available_rooms = hotel.available_room_count();

        Self {
            total_floors: hotel.floor_count(),
            total_rooms,
            available_rooms,
            occupied_rooms: total_rooms - available_rooms,
            per_floor,
        }
    }

    /// Share of rooms occupied, 0.0 for an empty hotel
    pub fn occupancy_percentage(&self) -> f64 {
        percentage(self.occupied_rooms, self.total_rooms)
    }

    /// Floors with no available room left
    pub fn full_floors(&self) -> Vec<u32> {
        self.per_floor
            .iter()
            .filter(|f| f.total_rooms > 0 && f.available_rooms == 0)
            .map(|f| f.floor_number)
            .collect()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!(
            "Occupancy: {} of {} rooms occupied ({:.1}%) | {} available across {} floors",
            self.occupied_rooms,
            self.total_rooms,
            self.occupancy_percentage(),
            self.available_rooms,
            self.total_floors
        )
    }

    /// Multi-line per-floor report
    pub fn detailed_breakdown(&self) -> String {
        let mut breakdown = String::from("=== Occupancy by Floor ===\n");
        for floor in &self.per_floor {
            breakdown.push_str(&format!(
                "  Floor {:>2}: {:>2}/{:<2} available ({:.1}% occupied)\n",
                floor.floor_number,
                floor.available_rooms,
                floor.total_rooms,
                floor.occupancy_percentage()
            ));
        }
        breakdown
    }
}

impl fmt::Display for OccupancyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary())?;
        write!(f, "{}", self.detailed_breakdown())
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}
