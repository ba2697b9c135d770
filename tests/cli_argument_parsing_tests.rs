//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed into
//! subcommands and that they override configuration file values.

use clap::Parser;
use hotel_room_allocator::types::config::{CliArgs, Command, HotelConfig};
use hotel_room_allocator::types::FloorSelection;
use std::fs;
use tempfile::tempdir;

/// Test parsing of each subcommand
#[test]
fn test_subcommand_parsing() {
    let cases = [
        (vec!["test", "rooms"], Command::Rooms),
        (vec!["test", "book", "--count", "4"], Command::Book { count: 4 }),
        (vec!["test", "book", "-n", "2"], Command::Book { count: 2 }),
        (vec!["test", "reset"], Command::Reset),
        (vec!["test", "randomize"], Command::Randomize),
        (vec!["test", "stats"], Command::Stats),
    ];

    for (args, expected) in cases {
        let cli_args = CliArgs::try_parse_from(&args).unwrap();
        assert_eq!(cli_args.command, Some(expected), "{:?}", args);
    }
}

/// Test that no subcommand is accepted (help is printed by the binary)
#[test]
fn test_missing_subcommand() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.command.is_none());
}

/// Test rejected arguments
#[test]
fn test_invalid_arguments() {
    assert!(CliArgs::try_parse_from(["test", "book"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "book", "--count", "many"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "book", "--count", "-1"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "--floor-selection", "random", "rooms"]).is_err());
    assert!(CliArgs::try_parse_from(["test", "checkout"]).is_err());
}

/// Test count beyond the booking limit parses but is not capped by the parser
#[test]
fn test_large_count_is_left_to_the_service() {
    let cli_args = CliArgs::try_parse_from(["test", "book", "--count", "50"]).unwrap();
    assert_eq!(cli_args.command, Some(Command::Book { count: 50 }));
}

/// Test global flags combined with a subcommand
#[test]
fn test_global_flags_with_subcommand() {
    let args = vec![
        "test",
        "--state-file",
        "/tmp/rooms.json",
        "--seed",
        "42",
        "--floor-selection",
        "prefer-contiguous",
        "--output-format",
        "text",
        "--verbose",
        "randomize",
    ];

    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.state_file.as_deref(), Some("/tmp/rooms.json"));
    assert_eq!(cli_args.seed, Some(42));
    assert_eq!(cli_args.floor_selection, Some(FloorSelection::PreferContiguous));
    assert!(cli_args.verbose);
    assert!(!cli_args.debug);

    let config = HotelConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.state_file, "/tmp/rooms.json");
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.floor_selection, FloorSelection::PreferContiguous);
    assert_eq!(config.output_format, "text");
    config.validate().unwrap();
}

/// Test that CLI flags win over the configuration file
#[test]
fn test_cli_overrides_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hotel.json");
    fs::write(
        &path,
        r#"{ "max_rooms_per_booking": 3, "floor_selection": "prefer-contiguous", "state_file": "from-file.json" }"#,
    )
    .unwrap();
    let path = path.to_str().unwrap();

    let cli_args = CliArgs::try_parse_from([
        "test",
        "--config",
        path,
        "--max-rooms-per-booking",
        "4",
        "stats",
    ])
    .unwrap();
    let config = HotelConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.max_rooms_per_booking, 4);
    assert_eq!(config.floor_selection, FloorSelection::PreferContiguous);
    assert_eq!(config.state_file, "from-file.json");
    // Untouched values keep their defaults
    assert_eq!(config.floor_count, 10);
    assert_eq!(config.max_booking_attempts, 3);
}

/// Test invalid values caught by validation rather than parsing
#[test]
fn test_validation_after_parsing() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--max-rooms-per-booking", "0", "rooms"]).unwrap();
    let config = HotelConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err(), "Zero booking size should fail validation");

    let cli_args = CliArgs::try_parse_from(["test", "--output-format", "xml", "rooms"]).unwrap();
    let config = HotelConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err(), "Unknown output format should fail validation");
}

/// Test missing configuration file
#[test]
fn test_missing_config_file() {
    let cli_args =
        CliArgs::try_parse_from(["test", "--config", "/nonexistent/hotel.json", "rooms"]).unwrap();
    assert!(HotelConfig::from_cli_args(cli_args).is_err());
}
