// Hotel Rooms - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-rooms book --count 3
// ```
//
// Or with a custom configuration and state file:
//
// ```console
// $ ./target/release/hotel-rooms --config hotel.json --state-file /tmp/hotel.json --verbose stats
// ```

use anyhow::Context;
use clap::{CommandFactory, Parser};
use hotel_room_allocator::booking::{BookingService, JsonFileStore, LoggingConfig};
use hotel_room_allocator::types::config::{CliArgs, Command};
use hotel_room_allocator::types::{HotelConfig, OutputFormat};
use hotel_room_allocator::RoomListing;
use serde_json::json;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match HotelConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        LoggingConfig::init_quiet()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = match HotelConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    let output_format = match config.get_output_format() {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    info!("Configuration loaded and validated successfully");

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the state file will not be touched.");
        print_configuration_summary(&config);
        return;
    }

    let Some(command) = args.command else {
        // Nothing to do; show what could be done
        let _ = CliArgs::command().print_help();
        return;
    };

    if let Err(e) = run(command, &config, output_format) {
        error!("{:#}", e);
        process::exit(1);
    }
}

/// Execute one command against the configured state file
fn run(command: Command, config: &HotelConfig, format: OutputFormat) -> anyhow::Result<()> {
    let service = BookingService::new(JsonFileStore::from_config(config), config.clone());

    match command {
        Command::Rooms => {
            let rooms = service.list_rooms().context("Failed to list rooms")?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rooms)?),
                OutputFormat::Text => print_room_table(&rooms),
            }
        }
        Command::Book { count } => {
            let receipt = service
                .book(count)
                .with_context(|| format!("Failed to book {} room(s)", count))?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&receipt)?),
                OutputFormat::Text => {
                    println!("{}", receipt.message);
                    println!("  Allocation: {} (max travel time {})", receipt.phase, receipt.cost);
                }
            }
        }
        Command::Reset => {
            let rooms = service.reset().context("Failed to reset the hotel")?;
            let message = format!("Hotel reset: {} rooms available", rooms);
            print_message(format, &message, json!({ "message": message, "rooms": rooms }))?;
        }
        Command::Randomize => {
            let occupied = service.randomize().context("Failed to randomize occupancy")?;
            let message = format!("Randomized occupancy: {} room(s) occupied", occupied);
            print_message(format, &message, json!({ "message": message, "occupied": occupied }))?;
        }
        Command::Stats => {
            let stats = service.statistics().context("Failed to collect statistics")?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Text => print!("{}", stats),
            }
        }
    }

    Ok(())
}

fn print_message(
    format: OutputFormat,
    message: &str,
    value: serde_json::Value,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
        OutputFormat::Text => println!("{}", message),
    }
    Ok(())
}

fn print_room_table(rooms: &[RoomListing]) {
    let mut current_floor = None;
    for room in rooms {
        if current_floor != Some(room.floor) {
            println!("Floor {}:", room.floor);
            current_floor = Some(room.floor);
        }
        println!("  {:>5}  {}", room.number, room.status);
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &HotelConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.floor_count);
    eprintln!(
        "  Rooms per Floor: {} (last floor: {})",
        config.rooms_per_floor, config.last_floor_rooms
    );
    eprintln!("  Total Rooms: {}", config.total_rooms());
    eprintln!("  Max Rooms per Booking: {}", config.max_rooms_per_booking);
    eprintln!("  Max Booking Attempts: {}", config.max_booking_attempts);
    eprintln!("  Floor Selection: {}", config.floor_selection);
    eprintln!("  State File: {}", config.state_file);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!();
}
