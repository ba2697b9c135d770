//! Tests for the booking workflow against in-memory and file-backed stores

use hotel_room_allocator::booking::{
    BookingError, BookingService, InMemoryStore, JsonFileStore, RoomStore,
};
use hotel_room_allocator::types::{HotelConfig, RoomId, RoomStatus};
use std::collections::HashSet;
use std::thread;
use tempfile::tempdir;

fn in_memory_service(config: HotelConfig) -> BookingService<InMemoryStore> {
    BookingService::new(InMemoryStore::with_standard_layout(&config), config)
}

#[test]
fn test_bookings_fill_floors_in_order() {
    let service = in_memory_service(HotelConfig::default());

    assert_eq!(service.book(5).unwrap().rooms, vec![101, 102, 103, 104, 105]);
    assert_eq!(service.book(5).unwrap().rooms, vec![106, 107, 108, 109, 110]);
    assert_eq!(service.book(4).unwrap().rooms, vec![201, 202, 203, 204]);
    assert_eq!(service.statistics().unwrap().occupied_rooms, 14);
}

#[test]
fn test_booking_until_sold_out() {
    let service = in_memory_service(HotelConfig::default());
    let mut booked = HashSet::new();

    loop {
        match service.book(5) {
            Ok(receipt) => {
                for number in receipt.rooms {
                    assert!(booked.insert(number), "room {} booked twice", number);
                }
            }
            Err(BookingError::InsufficientInventory { requested, available }) => {
                assert_eq!(requested, 5);
                assert_eq!(available, 97 - booked.len());
                break;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // 19 bookings of five leave two rooms
    assert_eq!(booked.len(), 95);
    let last = service.book(2).unwrap();
    assert_eq!(last.rooms.len(), 2);
    assert!(matches!(service.book(1), Err(BookingError::InsufficientInventory { .. })));
}

#[test]
fn test_concurrent_bookings_never_share_rooms() {
    let config = HotelConfig { max_booking_attempts: 50, ..Default::default() };
    let service = in_memory_service(config);
    let shared = &service;

    let receipts: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || (0..3).map(|_| shared.book(3)).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    let mut seen: HashSet<RoomId> = HashSet::new();
    for receipt in receipts {
        let receipt = receipt.unwrap();
        for id in receipt.room_ids {
            assert!(seen.insert(id), "room {} booked twice", id);
        }
    }
    assert_eq!(seen.len(), 72);
    assert_eq!(service.statistics().unwrap().occupied_rooms, 72);
}

#[test]
fn test_file_store_round_trip_through_service() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hotel_state.json");
    let config = HotelConfig {
        state_file: path.to_string_lossy().into_owned(),
        ..Default::default()
    };

    let service = BookingService::new(JsonFileStore::from_config(&config), config.clone());
    let receipt = service.book(3).unwrap();
    assert_eq!(receipt.message, "Successfully booked 101,102,103 - 3 room(s)");

    // A new process would see the same state
    let reopened = BookingService::new(JsonFileStore::from_config(&config), config.clone());
    let rooms = reopened.list_rooms().unwrap();
    let occupied: Vec<&str> = rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .map(|r| r.number.as_str())
        .collect();
    assert_eq!(occupied, vec!["101", "102", "103"]);
    assert_eq!(reopened.book(1).unwrap().rooms, vec![104]);

    reopened.reset().unwrap();
    assert_eq!(service.statistics().unwrap().available_rooms, 97);
}

#[test]
fn test_file_store_randomize_then_book() {
    let dir = tempdir().unwrap();
    let config = HotelConfig {
        state_file: dir.path().join("state.json").to_string_lossy().into_owned(),
        seed: Some(5),
        ..Default::default()
    };
    let service = BookingService::new(JsonFileStore::from_config(&config), config);

    let occupied = service.randomize().unwrap();
    let available = 97 - occupied;
    assert_eq!(service.statistics().unwrap().available_rooms, available);

    match service.book(2) {
        Ok(receipt) => {
            let hotel = service.store().load().unwrap();
            for id in &receipt.room_ids {
                assert!(!hotel.get_room(*id).unwrap().is_available);
            }
            assert_eq!(hotel.available_room_count(), available - 2);
        }
        Err(BookingError::InsufficientInventory { available: left, .. }) => {
            assert!(left < 2);
        }
        Err(other) => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_failed_booking_leaves_state_untouched() {
    let config = HotelConfig { max_rooms_per_booking: 3, ..Default::default() };
    let service = in_memory_service(config);
    let before = service.list_rooms().unwrap();

    assert!(matches!(service.book(4), Err(BookingError::InvalidRequest(_))));
    assert_eq!(service.list_rooms().unwrap(), before);
}
