//! Configuration structures for the hotel
//!
//! This module contains the hotel configuration structure, the command line
//! arguments that feed it, and the validation logic applied before any
//! booking operation runs.

use super::{FloorSelection, OutputFormat};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Standard layout constants
pub mod layout {
    /// Number of floors in the standard hotel
    pub const FLOOR_COUNT: u32 = 10;

    /// Rooms on every floor except the last one
    pub const ROOMS_PER_FLOOR: u32 = 10;

    /// Rooms on the last floor
    pub const LAST_FLOOR_ROOMS: u32 = 7;

    /// Room numbers are `floor * ROOM_NUMBER_BASE + position`
    pub const ROOM_NUMBER_BASE: u32 = 100;

    /// Largest position a room number can encode
    pub const MAX_POSITION: u32 = ROOM_NUMBER_BASE - 1;

    /// Largest supported floor count, so room numbers stay within five digits
    pub const MAX_FLOOR_COUNT: u32 = 999;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-rooms",
    version = "0.1.0",
    about = "Hotel Rooms - Book rooms with minimal guest travel time",
    long_about = "Manages the rooms of a hotel and books groups of rooms so that the guests end up as close to each other as possible.

EXAMPLES:
    # List every room and its status
    hotel-rooms rooms

    # Book three rooms
    hotel-rooms book --count 3

    # Restore the standard layout with every room available
    hotel-rooms reset

    # Occupy a random set of rooms
    hotel-rooms --seed 42 randomize

    # Generate configuration template
    hotel-rooms --print-config > hotel.json

    # Validate configuration without touching the state file
    hotel-rooms --config hotel.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Path of the JSON file holding the hotel state
    #[arg(long, help = "Path of the JSON state file")]
    pub state_file: Option<String>,

    /// Random seed for reproducible randomize runs
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Floor selection policy for single-floor allocation
    #[arg(
        long,
        help = "Floor selection policy (first-fit or prefer-contiguous)",
        long_help = "How the allocator picks a floor when several floors can hold the whole booking. first-fit takes the first floor with enough rooms; prefer-contiguous keeps looking for a floor with consecutive rooms. Default: first-fit"
    )]
    pub floor_selection: Option<FloorSelection>,

    /// Maximum number of rooms in a single booking
    #[arg(long, help = "Maximum rooms per booking")]
    pub max_rooms_per_booking: Option<usize>,

    /// Output format for command results
    #[arg(long, help = "Output format (json or text)")]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running a command
    #[arg(long, help = "Validate configuration without running a command")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Operations offered by the command line front end
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every room with its floor and status
    Rooms,
    /// Book a group of rooms
    Book {
        /// Number of rooms to book
        #[arg(short = 'n', long)]
        count: usize,
    },
    /// Restore the standard layout with every room available
    Reset,
    /// Release every room, then occupy a random subset
    Randomize,
    /// Print occupancy statistics
    Stats,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of floors in the generated layout
    pub floor_count: Option<u32>,

    /// Rooms per floor, except the last floor
    pub rooms_per_floor: Option<u32>,

    /// Rooms on the last floor
    pub last_floor_rooms: Option<u32>,

    /// Maximum number of rooms in a single booking
    pub max_rooms_per_booking: Option<usize>,

    /// Upper bound on rooms occupied by a randomize run
    pub max_random_occupied: Option<usize>,

    /// Snapshot/commit attempts before a conflicting booking gives up
    pub max_booking_attempts: Option<usize>,

    /// Floor selection policy for single-floor allocation
    pub floor_selection: Option<FloorSelection>,

    /// Combination count above which the allocator logs a warning
    pub combination_warning_threshold: Option<u64>,

    /// Path of the JSON state file
    pub state_file: Option<String>,

    /// Output format for command results
    pub output_format: Option<String>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration for the hotel and its booking workflow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelConfig {
    /// Number of floors in the generated layout
    pub floor_count: u32,

    /// Rooms per floor, except the last floor
    pub rooms_per_floor: u32,

    /// Rooms on the last floor
    pub last_floor_rooms: u32,

    /// Maximum number of rooms in a single booking
    pub max_rooms_per_booking: usize,

    /// Upper bound on rooms occupied by a randomize run
    pub max_random_occupied: usize,

    /// Snapshot/commit attempts before a conflicting booking gives up
    pub max_booking_attempts: usize,

    /// Floor selection policy for single-floor allocation
    pub floor_selection: FloorSelection,

    /// Combination count above which the allocator logs a warning
    pub combination_warning_threshold: u64,

    /// Path of the JSON state file
    pub state_file: String,

    /// Output format for command results
    pub output_format: String,

    /// Random seed for reproducible results
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for hotel configuration
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigValidationError {
    /// Floor count is out of range
    #[error("Floor count must be between 1 and {max}, got {value}")]
    InvalidFloorCount {
        /// The invalid value
        value: u32,
        /// Largest supported floor count
        max: u32,
    },

    /// Rooms per floor is out of range
    #[error("Rooms per floor must be between 1 and {max}, got {value} for {field}")]
    InvalidRoomsPerFloor {
        /// Name of the offending field
        field: String,
        /// The invalid value
        value: u32,
        /// Largest value a room number can encode
        max: u32,
    },

    /// Booking size limit is invalid
    #[error("Maximum rooms per booking must be greater than 0, got {0}")]
    InvalidMaxRoomsPerBooking(usize),

    /// Random occupancy limit is invalid
    #[error("Maximum randomly occupied rooms must be greater than 0, got {0}")]
    InvalidMaxRandomOccupied(usize),

    /// Booking attempts is invalid
    #[error("Booking attempts must be greater than 0, got {0}")]
    InvalidBookingAttempts(usize),

    /// Output format is not recognised
    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            floor_count: layout::FLOOR_COUNT,
            rooms_per_floor: layout::ROOMS_PER_FLOOR,
            last_floor_rooms: layout::LAST_FLOOR_ROOMS,
            max_rooms_per_booking: 5,
            max_random_occupied: 97,
            max_booking_attempts: 3,
            floor_selection: FloorSelection::FirstFit,
            combination_warning_threshold: 1_000_000,
            state_file: "hotel_state.json".to_string(),
            output_format: "json".to_string(),
            seed: None,
        }
    }
}

impl HotelConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            floor_count: config_file.floor_count.unwrap_or(defaults.floor_count),
            rooms_per_floor: config_file.rooms_per_floor.unwrap_or(defaults.rooms_per_floor),
            last_floor_rooms: config_file.last_floor_rooms.unwrap_or(defaults.last_floor_rooms),
            max_rooms_per_booking: config_file
                .max_rooms_per_booking
                .unwrap_or(defaults.max_rooms_per_booking),
            max_random_occupied: config_file
                .max_random_occupied
                .unwrap_or(defaults.max_random_occupied),
            max_booking_attempts: config_file
                .max_booking_attempts
                .unwrap_or(defaults.max_booking_attempts),
            floor_selection: config_file.floor_selection.unwrap_or(defaults.floor_selection),
            combination_warning_threshold: config_file
                .combination_warning_threshold
                .unwrap_or(defaults.combination_warning_threshold),
            state_file: config_file.state_file.unwrap_or(defaults.state_file),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.state_file {
            config.state_file = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.floor_selection {
            config.floor_selection = value;
        }
        if let Some(value) = args.max_rooms_per_booking {
            config.max_rooms_per_booking = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(1..=layout::MAX_FLOOR_COUNT).contains(&self.floor_count) {
            return Err(ConfigValidationError::InvalidFloorCount {
                value: self.floor_count,
                max: layout::MAX_FLOOR_COUNT,
            });
        }

        self.validate_rooms_per_floor("rooms_per_floor", self.rooms_per_floor)?;
        self.validate_rooms_per_floor("last_floor_rooms", self.last_floor_rooms)?;

        if self.max_rooms_per_booking == 0 {
            return Err(ConfigValidationError::InvalidMaxRoomsPerBooking(
                self.max_rooms_per_booking,
            ));
        }

        if self.max_random_occupied == 0 {
            return Err(ConfigValidationError::InvalidMaxRandomOccupied(self.max_random_occupied));
        }

        if self.max_booking_attempts == 0 {
            return Err(ConfigValidationError::InvalidBookingAttempts(self.max_booking_attempts));
        }

        if self.get_output_format().is_err() {
            return Err(ConfigValidationError::InvalidOutputFormat(self.output_format.clone()));
        }

        Ok(())
    }

    /// Position must stay encodable in the last two digits of a room number
    fn validate_rooms_per_floor(&self, field: &str, value: u32) -> Result<(), ConfigValidationError> {
        if !(1..=layout::MAX_POSITION).contains(&value) {
            return Err(ConfigValidationError::InvalidRoomsPerFloor {
                field: field.to_string(),
                value,
                max: layout::MAX_POSITION,
            });
        }
        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Total number of rooms the configured layout produces
    pub fn total_rooms(&self) -> usize {
        if self.floor_count == 0 {
            return 0;
        }
        let regular = (self.floor_count - 1) as usize * self.rooms_per_floor as usize;
        regular + self.last_floor_rooms as usize
    }
}
