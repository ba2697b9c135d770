//! Room allocation
//!
//! The allocator picks which available rooms a booking of `count` rooms gets.
//! It works in two phases:
//!
//! 1. **Single floor.** Floors are visited in the order given. On a floor with
//!    at least `count` available rooms, the first run of `count` consecutive
//!    positions wins; failing that, the floor's `count` lowest positions do.
//!    Under [`FloorSelection::FirstFit`] the first such floor ends the search.
//!    Under [`FloorSelection::PreferContiguous`] a later floor's consecutive
//!    run beats an earlier floor's fallback.
//! 2. **Multi floor.** Only when no floor can hold the whole booking. Every
//!    `count`-subset of the available rooms is scored by its largest pairwise
//!    travel time; the lowest score wins and ties go to the smaller sum of
//!    room numbers. This is `C(n, count)` work, fine at hotel scale and small
//!    `count`, exponential in general.
//!
//! The allocator never modifies the floors it is given.

use crate::allocation::combinations::{combination_count, Combinations};
use crate::allocation::position::{combination_cost, room_number_sum, RoomPosition};
use crate::hotel::Floor;
use crate::types::{FloorSelection, HotelConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument, warn};

/// Which phase of the search produced an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationPhase {
    /// Consecutive rooms on one floor
    SingleFloorContiguous,
    /// Lowest positions on one floor, not consecutive
    SingleFloorFallback,
    /// Best combination across floors
    MultiFloor,
    /// Not enough available rooms anywhere
    Insufficient,
}

impl fmt::Display for AllocationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationPhase::SingleFloorContiguous => write!(f, "single floor, contiguous"),
            AllocationPhase::SingleFloorFallback => write!(f, "single floor, non-contiguous"),
            AllocationPhase::MultiFloor => write!(f, "multiple floors"),
            AllocationPhase::Insufficient => write!(f, "insufficient inventory"),
        }
    }
}

/// Result of an allocation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Selected rooms in selection order
    pub rooms: Vec<RoomPosition>,
    /// Phase that produced the selection
    pub phase: AllocationPhase,
    /// Largest pairwise travel time among the selected rooms
    pub cost: i64,
}

impl Allocation {
    fn new(rooms: Vec<RoomPosition>, phase: AllocationPhase) -> Self {
        let cost = combination_cost(&rooms);
        Self { rooms, phase, cost }
    }

    fn insufficient() -> Self {
        Self { rooms: Vec::new(), phase: AllocationPhase::Insufficient, cost: 0 }
    }

    /// Whether the allocation holds at least `requested` rooms
    pub fn is_complete(&self, requested: usize) -> bool {
        self.rooms.len() >= requested
    }

    /// Room numbers in selection order
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.room_number).collect()
    }
}

/// Selects rooms for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAllocator {
    floor_selection: FloorSelection,
    combination_warning_threshold: u64,
}

impl Default for RoomAllocator {
    fn default() -> Self {
        Self { floor_selection: FloorSelection::FirstFit, combination_warning_threshold: 1_000_000 }
    }
}

impl RoomAllocator {
    /// Create an allocator with the first-fit floor policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator from configuration
    pub fn from_config(config: &HotelConfig) -> Self {
        Self {
            floor_selection: config.floor_selection,
            combination_warning_threshold: config.combination_warning_threshold,
        }
    }

    /// Set the floor selection policy
    pub fn with_floor_selection(mut self, floor_selection: FloorSelection) -> Self {
        self.floor_selection = floor_selection;
        self
    }

    /// Set the combination count above which a warning is logged
    pub fn with_combination_warning_threshold(mut self, threshold: u64) -> Self {
        self.combination_warning_threshold = threshold;
        self
    }

    /// The floor selection policy in use
    pub fn floor_selection(&self) -> FloorSelection {
        self.floor_selection
    }

    /// Select `count` rooms; the result is shorter (empty) when inventory is insufficient
    pub fn find_optimal_rooms(&self, floors: &[Floor], count: usize) -> Vec<RoomPosition> {
        self.allocate(floors, count).rooms
    }

    /// Select `count` rooms and report how they were found
    #[instrument(level = "debug", skip(self, floors), fields(floors = floors.len(), policy = %self.floor_selection))]
    pub fn allocate(&self, floors: &[Floor], count: usize) -> Allocation {
        if count == 0 {
            return Allocation::insufficient();
        }

        if let Some(allocation) = self.find_single_floor_solution(floors, count) {
            debug!(
                phase = %allocation.phase,
                rooms = ?allocation.room_numbers(),
                "Single-floor allocation found"
            );
            return allocation;
        }

        self.find_multi_floor_solution(floors, count)
    }

    fn find_single_floor_solution(&self, floors: &[Floor], count: usize) -> Option<Allocation> {
        let mut fallback: Option<Vec<RoomPosition>> = None;

        for floor in floors {
            let available = available_positions(floor);
            if available.len() < count {
                continue;
            }

            if let Some(run) = find_consecutive_rooms(&available, count) {
                return Some(Allocation::new(run.to_vec(), AllocationPhase::SingleFloorContiguous));
            }

            match self.floor_selection {
                FloorSelection::FirstFit => {
                    return Some(Allocation::new(
                        available[..count].to_vec(),
                        AllocationPhase::SingleFloorFallback,
                    ));
                }
                FloorSelection::PreferContiguous => {
                    if fallback.is_none() {
                        fallback = Some(available[..count].to_vec());
                    }
                }
            }
        }

        fallback.map(|rooms| Allocation::new(rooms, AllocationPhase::SingleFloorFallback))
    }

    fn find_multi_floor_solution(&self, floors: &[Floor], count: usize) -> Allocation {
        let all_rooms: Vec<RoomPosition> = floors
            .iter()
            .flat_map(|floor| {
                floor.available_rooms().map(move |room| RoomPosition::from_room(room, floor))
            })
            .collect();

        if all_rooms.len() < count {
            debug!(available = all_rooms.len(), requested = count, "Not enough available rooms");
            return Allocation::insufficient();
        }

        match combination_count(all_rooms.len(), count) {
            Some(total) if total <= u128::from(self.combination_warning_threshold) => {
                debug!(combinations = %total, "Searching multi-floor combinations");
            }
            total => {
                warn!(
                    available = all_rooms.len(),
                    requested = count,
                    combinations = ?total,
                    "Multi-floor search space is large; allocation may be slow"
                );
            }
        }

        let rooms = select_best_combination(&all_rooms, count);
        let allocation = Allocation::new(rooms, AllocationPhase::MultiFloor);
        debug!(
            rooms = ?allocation.room_numbers(),
            cost = allocation.cost,
            "Multi-floor allocation found"
        );
        allocation
    }
}

/// Available rooms of a floor, stably sorted by position
fn available_positions(floor: &Floor) -> Vec<RoomPosition> {
    let mut rooms: Vec<RoomPosition> =
        floor.available_rooms().map(|room| RoomPosition::from_room(room, floor)).collect();
    rooms.sort_by_key(|r| r.position);
    rooms
}

/// First run of `count` rooms whose positions step by exactly one
///
/// `rooms` must be sorted by position. Start indices are tried in ascending
/// order and the first full-length run is returned.
pub fn find_consecutive_rooms(rooms: &[RoomPosition], count: usize) -> Option<&[RoomPosition]> {
    if count == 0 || rooms.len() < count {
        return None;
    }

    for start in 0..=rooms.len() - count {
        let mut end = start + 1;
        while end < rooms.len()
            && end - start < count
            && rooms[end].position == rooms[end - 1].position + 1
        {
            end += 1;
        }
        if end - start == count {
            return Some(&rooms[start..end]);
        }
    }
    None
}

/// Lowest-cost `count`-subset of `rooms`, ties to the smaller room-number sum
///
/// On a full tie the subset enumerated first (lexicographic by index) is kept.
pub fn select_best_combination(rooms: &[RoomPosition], count: usize) -> Vec<RoomPosition> {
    let mut best: Option<(i64, u64, Vec<RoomPosition>)> = None;

    for indices in Combinations::new(rooms.len(), count) {
        let candidate: Vec<RoomPosition> = indices.iter().map(|&i| rooms[i]).collect();
        let cost = combination_cost(&candidate);
        let sum = room_number_sum(&candidate);

        let better = match &best {
            None => true,
            Some((best_cost, best_sum, _)) => {
                cost < *best_cost || (cost == *best_cost && sum < *best_sum)
            }
        };
        if better {
            best = Some((cost, sum, candidate));
        }
    }

    best.map(|(_, _, rooms)| rooms).unwrap_or_default()
}
