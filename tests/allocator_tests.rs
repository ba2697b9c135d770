//! Tests for room allocation against realistic hotel states
//!
//! Floors are built through the public hotel API; the allocator results are
//! checked against an exhaustive search where the choice is multi-floor.

use hotel_room_allocator::allocation::{
    combination_cost, room_number_sum, AllocationPhase, Combinations, RoomAllocator, RoomPosition,
};
use hotel_room_allocator::hotel::{Floor, Hotel, HotelGenerator};
use hotel_room_allocator::types::{FloorSelection, HotelConfig};

/// Standard hotel with only the listed room numbers available
fn hotel_with_available(numbers: &[u32]) -> Hotel {
    let mut hotel = HotelGenerator::generate_standard_layout(&HotelConfig::default());
    let ids: Vec<_> = hotel
        .floors()
        .iter()
        .flat_map(|f| f.rooms.iter())
        .filter(|r| !numbers.contains(&r.room_number))
        .map(|r| r.id)
        .collect();
    hotel.occupy_if_available(&ids).unwrap();
    hotel
}

fn available_positions(floors: &[Floor]) -> Vec<RoomPosition> {
    floors
        .iter()
        .flat_map(|f| f.available_rooms().map(move |r| RoomPosition::from_room(r, f)))
        .collect()
}

/// Lowest (cost, room-number sum) over every subset of size `count`
fn brute_force_best(floors: &[Floor], count: usize) -> Option<(i64, u64)> {
    let all = available_positions(floors);
    Combinations::new(all.len(), count)
        .map(|indices| indices.iter().map(|&i| all[i]).collect::<Vec<_>>())
        .map(|rooms| (combination_cost(&rooms), room_number_sum(&rooms)))
        .min()
}

#[test]
fn test_fresh_hotel_books_from_the_first_floor() {
    let hotel = HotelGenerator::generate_standard_layout(&HotelConfig::default());
    let allocator = RoomAllocator::new();

    for count in 1..=5 {
        let allocation = allocator.allocate(hotel.floors(), count);
        let expected: Vec<u32> = (101..101 + count as u32).collect();
        assert_eq!(allocation.room_numbers(), expected);
        assert_eq!(allocation.cost, count as i64 - 1);
    }
}

#[test]
fn test_gap_on_floor_is_skipped() {
    let hotel = hotel_with_available(&[302, 303, 304, 306]);
    let allocation = RoomAllocator::new().allocate(hotel.floors(), 3);

    assert_eq!(allocation.phase, AllocationPhase::SingleFloorContiguous);
    assert_eq!(allocation.room_numbers(), vec![302, 303, 304]);
}

#[test]
fn test_cross_floor_pair() {
    let hotel = hotel_with_available(&[105, 402]);
    let allocation = RoomAllocator::new().allocate(hotel.floors(), 2);

    assert_eq!(allocation.phase, AllocationPhase::MultiFloor);
    assert_eq!(allocation.room_numbers(), vec![105, 402]);
    assert_eq!(allocation.cost, 11);
}

#[test]
fn test_first_qualifying_floor_wins_under_first_fit() {
    // Floor 2 can hold three rooms but not consecutively; floor 6 could
    let hotel = hotel_with_available(&[201, 204, 208, 601, 602, 603]);

    let first_fit = RoomAllocator::new().allocate(hotel.floors(), 3);
    assert_eq!(first_fit.phase, AllocationPhase::SingleFloorFallback);
    assert_eq!(first_fit.room_numbers(), vec![201, 204, 208]);

    let contiguous = RoomAllocator::new()
        .with_floor_selection(FloorSelection::PreferContiguous)
        .allocate(hotel.floors(), 3);
    assert_eq!(contiguous.phase, AllocationPhase::SingleFloorContiguous);
    assert_eq!(contiguous.room_numbers(), vec![601, 602, 603]);
    assert!(contiguous.cost < first_fit.cost);
}

#[test]
fn test_multi_floor_matches_exhaustive_search() {
    // At most one available room per floor, so every count >= 2 spans floors
    let scenarios: [&[u32]; 4] = [
        &[101, 203, 305, 402, 609, 1007],
        &[105, 206, 307, 408, 509, 610],
        &[110, 210, 301, 401, 901, 1001],
        &[101, 201, 301, 401, 501, 601, 701, 801, 901, 1001],
    ];

    for numbers in scenarios {
        let hotel = hotel_with_available(numbers);
        for count in 2..=4 {
            let allocation = RoomAllocator::new().allocate(hotel.floors(), count);
            let best = brute_force_best(hotel.floors(), count).unwrap();

            assert_eq!(allocation.phase, AllocationPhase::MultiFloor);
            assert_eq!(allocation.rooms.len(), count, "{:?} count {}", numbers, count);
            assert_eq!(
                (allocation.cost, room_number_sum(&allocation.rooms)),
                best,
                "{:?} count {}",
                numbers,
                count
            );
        }
    }
}

#[test]
fn test_insufficient_inventory_returns_nothing() {
    let hotel = hotel_with_available(&[101, 505]);
    let allocation = RoomAllocator::new().allocate(hotel.floors(), 3);

    assert_eq!(allocation.phase, AllocationPhase::Insufficient);
    assert!(allocation.rooms.is_empty());

    let full = hotel_with_available(&[]);
    assert!(RoomAllocator::new().find_optimal_rooms(full.floors(), 1).is_empty());
}

#[test]
fn test_every_selected_room_was_available() {
    let mut hotel = HotelGenerator::generate_standard_layout(&HotelConfig::default());
    let mut generator = HotelGenerator::with_seed(11);
    let allocator = RoomAllocator::new();

    for _ in 0..25 {
        generator.randomize_occupancy(&mut hotel, 90);
        for count in 1..=3 {
            let rooms = allocator.find_optimal_rooms(hotel.floors(), count);
            if hotel.available_room_count() >= count {
                assert_eq!(rooms.len(), count);
            }
            for room in &rooms {
                assert!(hotel.get_room(room.id).unwrap().is_available);
            }
        }
    }
}

#[test]
fn test_repeated_calls_agree() {
    let hotel = hotel_with_available(&[103, 207, 304, 305, 702, 1006]);
    let allocator = RoomAllocator::new();

    let first = allocator.allocate(hotel.floors(), 3);
    for _ in 0..10 {
        assert_eq!(allocator.allocate(hotel.floors(), 3), first);
    }
}
