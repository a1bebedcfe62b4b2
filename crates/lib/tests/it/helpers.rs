use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use innkeep::{Error, FrontDesk};
use tempfile::TempDir;

// ==========================
// CORE TEST FACTORIES
// ==========================
// Every test works against a scratch data directory; the TempDir guard
// must outlive the desk or store using it.

/// Creates a scratch data directory.
pub fn test_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp data dir")
}

/// Creates a desk over a scratch directory, loaded and seeded.
///
/// This is the starting point for most flow tests: 25 rooms, the full
/// service menu, and the owner account.
pub fn seeded_desk() -> (TempDir, FrontDesk) {
    let dir = test_data_dir();
    let mut desk = FrontDesk::open(dir.path()).expect("Failed to open desk");
    desk.load_all().expect("Failed to load stores");
    desk.seed_if_empty().expect("Failed to seed stores");
    (dir, desk)
}

/// Opens and loads a desk over an existing directory without seeding.
pub fn open_desk(path: &Path) -> FrontDesk {
    let mut desk = FrontDesk::open(path).expect("Failed to open desk");
    desk.load_all().expect("Failed to load stores");
    desk
}

/// Registers a customer with boilerplate contact details, returning the
/// allocated id.
pub fn register_test_customer(desk: &mut FrontDesk, name: &str) -> String {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    desk.users_mut()
        .register_customer(name, email, "0812-0000-0000", "pw123", "1 Test Street")
        .expect("Failed to register customer")
}

/// Registers a staff member on the morning shift, returning the
/// allocated id.
pub fn register_test_staff(desk: &mut FrontDesk, name: &str) -> String {
    let email = format!("{}@staff.example.com", name.to_lowercase().replace(' ', "."));
    desk.users_mut()
        .register_staff(name, email, "0813-0000-0000", "pw456", "Receptionist", "Morning", None)
        .expect("Failed to register staff")
}

/// A fixed date in July 2024; tests only care that dates round-trip.
pub fn test_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, day).expect("Failed to build test date")
}

// ==========================
// FILE HELPERS
// ==========================

/// Writes raw lines to a store file under `dir`, returning its path.
pub fn write_store_file(dir: &Path, file: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(file);
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).expect("Failed to write store file");
    path
}

/// Reads a store file back as its non-blank lines.
pub fn read_store_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read store file")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Helper for checking not-found errors.
pub fn assert_not_found<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(ref err) if err.is_not_found() => (),
        other => panic!("Expected not-found error, got {other:?}"),
    }
}

/// Helper for checking duplicate-key errors.
pub fn assert_duplicate<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(ref err) if err.is_duplicate() => (),
        other => panic!("Expected duplicate-key error, got {other:?}"),
    }
}

/// Helper for checking load/clear state-machine errors.
pub fn assert_state_error<T: std::fmt::Debug>(result: Result<T, Error>) {
    match result {
        Err(ref err) if err.is_state_error() => (),
        other => panic!("Expected state error, got {other:?}"),
    }
}
