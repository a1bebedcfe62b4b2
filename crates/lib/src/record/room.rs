//! Room records.
//!
//! The room class doubles as the discriminator in the rooms file and
//! carries the build defaults: a freshly added room inherits its class's
//! rate, floor, guest capacity, and amenity set, and the class decides
//! which comfort extras are optional, forced, or unavailable.

use serde::Serialize;

use super::{Record, RecordError, ensure_min_fields, flag, parse_flag, parse_i64, parse_u32};

/// Comfort class a room is built out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomClass {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomClass {
    /// All classes, cheapest first.
    pub const ALL: [RoomClass; 4] = [
        RoomClass::Standard,
        RoomClass::Deluxe,
        RoomClass::Suite,
        RoomClass::Presidential,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomClass::Standard => "STANDARD",
            RoomClass::Deluxe => "DELUXE",
            RoomClass::Suite => "SUITE",
            RoomClass::Presidential => "PRESIDENTIAL",
        }
    }

    /// Parse a class discriminator.
    ///
    /// # Errors
    /// Returns an unknown-discriminator error for anything but the four
    /// class names; a room line with a bad class is dropped whole.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        match text {
            "STANDARD" => Ok(RoomClass::Standard),
            "DELUXE" => Ok(RoomClass::Deluxe),
            "SUITE" => Ok(RoomClass::Suite),
            "PRESIDENTIAL" => Ok(RoomClass::Presidential),
            other => Err(RecordError::UnknownDiscriminator {
                what: "room class",
                value: other.to_string(),
            }),
        }
    }

    /// Nightly rate, in whole currency units, for a freshly built room.
    pub fn default_rate(&self) -> i64 {
        match self {
            RoomClass::Standard => 500_000,
            RoomClass::Deluxe => 1_000_000,
            RoomClass::Suite => 2_500_000,
            RoomClass::Presidential => 5_000_000,
        }
    }

    /// Floor the class is normally built on.
    pub fn default_floor(&self) -> u32 {
        match self {
            RoomClass::Standard => 1,
            RoomClass::Deluxe => 2,
            RoomClass::Suite => 3,
            RoomClass::Presidential => 5,
        }
    }

    /// How many guests the class sleeps.
    pub fn guest_capacity(&self) -> u32 {
        match self {
            RoomClass::Standard | RoomClass::Deluxe => 2,
            RoomClass::Suite => 4,
            RoomClass::Presidential => 6,
        }
    }

    /// Amenity set bundled with the class.
    pub fn amenities(&self) -> &'static str {
        match self {
            RoomClass::Standard => "WiFi, TV, AC",
            RoomClass::Deluxe => "WiFi, TV, AC, Minibar",
            RoomClass::Suite => "WiFi, TV, AC, Minibar, Living Room",
            RoomClass::Presidential => "WiFi, TV, AC, Minibar, Living Room, Private Butler",
        }
    }

    fn forces_balcony(&self) -> bool {
        matches!(self, RoomClass::Suite | RoomClass::Presidential)
    }

    fn allows_balcony(&self) -> bool {
        !matches!(self, RoomClass::Standard)
    }

    fn forces_sea_view(&self) -> bool {
        matches!(self, RoomClass::Presidential)
    }

    fn allows_sea_view(&self) -> bool {
        matches!(self, RoomClass::Suite | RoomClass::Presidential)
    }
}

/// Operational status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "AVAILABLE",
            RoomStatus::Occupied => "OCCUPIED",
            RoomStatus::Maintenance => "MAINTENANCE",
            RoomStatus::Cleaning => "CLEANING",
        }
    }

    /// Lenient parse: an unrecognized status reads as `Available` rather
    /// than costing the whole record.
    pub fn parse_lossy(text: &str) -> Self {
        match text {
            "OCCUPIED" => RoomStatus::Occupied,
            "MAINTENANCE" => RoomStatus::Maintenance,
            "CLEANING" => RoomStatus::Cleaning,
            _ => RoomStatus::Available,
        }
    }
}

/// A single room, keyed by its room number.
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    number: String,
    class: RoomClass,
    status: RoomStatus,
    nightly_rate: i64,
    floor: u32,
    capacity: u32,
    balcony: bool,
    sea_view: bool,
    amenities: String,
}

impl Room {
    /// Build a room of `class` with the class defaults applied.
    ///
    /// `floor` overrides the class's usual floor when given. Balcony and
    /// sea-view requests are honored only where the class offers them;
    /// suites always get a balcony and the presidential class gets both.
    pub fn new(
        class: RoomClass,
        number: impl Into<String>,
        floor: Option<u32>,
        balcony: bool,
        sea_view: bool,
    ) -> Self {
        Self {
            number: number.into(),
            class,
            status: RoomStatus::Available,
            nightly_rate: class.default_rate(),
            floor: floor.unwrap_or_else(|| class.default_floor()),
            capacity: class.guest_capacity(),
            balcony: class.forces_balcony() || (class.allows_balcony() && balcony),
            sea_view: class.forces_sea_view() || (class.allows_sea_view() && sea_view),
            amenities: class.amenities().to_string(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn class(&self) -> RoomClass {
        self.class
    }

    pub fn status(&self) -> RoomStatus {
        self.status
    }

    pub fn nightly_rate(&self) -> i64 {
        self.nightly_rate
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn has_balcony(&self) -> bool {
        self.balcony
    }

    pub fn has_sea_view(&self) -> bool {
        self.sea_view
    }

    pub fn amenities(&self) -> &str {
        &self.amenities
    }

    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    pub fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }

    pub fn set_nightly_rate(&mut self, rate: i64) {
        self.nightly_rate = rate;
    }
}

impl Record for Room {
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        ensure_min_fields("room", fields, 9)?;
        let class = RoomClass::parse(fields[0])?;
        Ok(Self {
            number: fields[1].to_string(),
            class,
            status: RoomStatus::parse_lossy(fields[2]),
            nightly_rate: parse_i64("room", "nightly_rate", fields[3])?,
            floor: parse_u32("room", "floor", fields[4])?,
            capacity: parse_u32("room", "capacity", fields[5])?,
            balcony: parse_flag(fields[6]),
            sea_view: parse_flag(fields[7]),
            // The amenity list follows the class; the stored copy is for
            // humans reading the file.
            amenities: class.amenities().to_string(),
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.class.as_str().to_string(),
            self.number.clone(),
            self.status.as_str().to_string(),
            self.nightly_rate.to_string(),
            self.floor.to_string(),
            self.capacity.to_string(),
            flag(self.balcony),
            flag(self.sea_view),
            self.amenities.clone(),
        ]
    }

    fn key(&self) -> &str {
        &self.number
    }
}
