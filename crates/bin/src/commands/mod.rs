//! Command implementations, one module per subcommand group.

pub mod bookings;
pub mod desk;
pub mod rooms;
pub mod services;
pub mod users;

use std::path::Path;

use chrono::{Local, NaiveDate};
use innkeep::FrontDesk;
use innkeep::flatfile;

/// Open the desk over `data_dir` with every store loaded.
pub(crate) fn open_loaded(data_dir: &Path) -> Result<FrontDesk, Box<dyn std::error::Error>> {
    let mut desk = FrontDesk::open(data_dir)?;
    let summary = desk.load_all()?;
    tracing::debug!(
        "Loaded {} rooms, {} services, {} users, {} bookings from {}",
        summary.rooms.loaded,
        summary.services.loaded,
        summary.users.loaded,
        summary.bookings.loaded,
        data_dir.display()
    );
    Ok(desk)
}

/// Parse a `DD/MM/YYYY` argument, falling back to today when absent.
pub(crate) fn parse_date_arg(raw: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match raw {
        None => Ok(Local::now().date_naive()),
        Some(text) => flatfile::parse_date(text)
            .ok_or_else(|| format!("invalid date '{text}', expected DD/MM/YYYY").into()),
    }
}
