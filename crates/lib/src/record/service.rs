//! Facility service records.

use serde::Serialize;

use super::{Record, RecordError, ensure_min_fields, flag, parse_flag, parse_i64, parse_u32};

/// Which part of the house a service belongs to. Doubles as the
/// discriminator in the services file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Ballroom,
    Restaurant,
    Laundry,
    Pool,
    Gym,
    Shuttle,
    Catering,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::Ballroom,
        ServiceCategory::Restaurant,
        ServiceCategory::Laundry,
        ServiceCategory::Pool,
        ServiceCategory::Gym,
        ServiceCategory::Shuttle,
        ServiceCategory::Catering,
        ServiceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Ballroom => "BALLROOM",
            ServiceCategory::Restaurant => "RESTAURANT",
            ServiceCategory::Laundry => "LAUNDRY",
            ServiceCategory::Pool => "POOL",
            ServiceCategory::Gym => "GYM",
            ServiceCategory::Shuttle => "SHUTTLE",
            ServiceCategory::Catering => "CATERING",
            ServiceCategory::Other => "OTHER",
        }
    }

    /// Parse a category discriminator.
    ///
    /// # Errors
    /// Returns an unknown-discriminator error for unrecognized text; a
    /// service line with a bad category is dropped whole.
    pub fn parse(text: &str) -> Result<Self, RecordError> {
        match text {
            "BALLROOM" => Ok(ServiceCategory::Ballroom),
            "RESTAURANT" => Ok(ServiceCategory::Restaurant),
            "LAUNDRY" => Ok(ServiceCategory::Laundry),
            "POOL" => Ok(ServiceCategory::Pool),
            "GYM" => Ok(ServiceCategory::Gym),
            "SHUTTLE" => Ok(ServiceCategory::Shuttle),
            "CATERING" => Ok(ServiceCategory::Catering),
            "OTHER" => Ok(ServiceCategory::Other),
            other => Err(RecordError::UnknownDiscriminator {
                what: "service category",
                value: other.to_string(),
            }),
        }
    }
}

/// What one unit of a service's rate buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    PerEvent,
    PerPerson,
    PerKg,
    PerDay,
    PerSession,
    PerTrip,
    PerHour,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceUnit::PerEvent => "PER_EVENT",
            PriceUnit::PerPerson => "PER_PERSON",
            PriceUnit::PerKg => "PER_KG",
            PriceUnit::PerDay => "PER_DAY",
            PriceUnit::PerSession => "PER_SESSION",
            PriceUnit::PerTrip => "PER_TRIP",
            PriceUnit::PerHour => "PER_HOUR",
        }
    }

    /// Lenient parse. Older files wrote units with spaces ("PER DAY"), so
    /// both spellings are accepted; unrecognized text reads as `PerEvent`.
    pub fn parse_lossy(text: &str) -> Self {
        match text.replace(' ', "_").as_str() {
            "PER_PERSON" => PriceUnit::PerPerson,
            "PER_KG" => PriceUnit::PerKg,
            "PER_DAY" => PriceUnit::PerDay,
            "PER_SESSION" => PriceUnit::PerSession,
            "PER_TRIP" => PriceUnit::PerTrip,
            "PER_HOUR" => PriceUnit::PerHour,
            _ => PriceUnit::PerEvent,
        }
    }
}

/// A bookable facility service, keyed by its `L`-prefixed id.
#[derive(Debug, Clone, Serialize)]
pub struct Service {
    id: String,
    name: String,
    category: ServiceCategory,
    rate: i64,
    unit: PriceUnit,
    available: bool,
    min_order: u32,
    description: String,
}

impl Service {
    /// Build an available service with a minimum order of `min_order`
    /// units (at least 1).
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ServiceCategory,
        rate: i64,
        unit: PriceUnit,
        min_order: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            rate,
            unit,
            available: true,
            min_order: min_order.max(1),
            description: description.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ServiceCategory {
        self.category
    }

    pub fn rate(&self) -> i64 {
        self.rate
    }

    pub fn unit(&self) -> PriceUnit {
        self.unit
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn min_order(&self) -> u32 {
        self.min_order
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_rate(&mut self, rate: i64) {
        self.rate = rate;
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Record for Service {
    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        ensure_min_fields("service", fields, 8)?;
        Ok(Self {
            category: ServiceCategory::parse(fields[0])?,
            id: fields[1].to_string(),
            name: fields[2].to_string(),
            rate: parse_i64("service", "rate", fields[3])?,
            unit: PriceUnit::parse_lossy(fields[4]),
            available: parse_flag(fields[5]),
            min_order: parse_u32("service", "min_order", fields[6])?.max(1),
            description: fields[7].to_string(),
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.category.as_str().to_string(),
            self.id.clone(),
            self.name.clone(),
            self.rate.to_string(),
            self.unit.as_str().to_string(),
            flag(self.available),
            self.min_order.to_string(),
            self.description.clone(),
        ]
    }

    fn key(&self) -> &str {
        &self.id
    }
}
