//! EntityStore behavior against real files: the load/clear state machine,
//! write-through persistence, id recovery, and malformed-line handling.

use innkeep::record::{PriceUnit, Room, RoomClass, Service, ServiceCategory, User};
use innkeep::store::{EntityStore, IdSequence, LoadReport};

use crate::helpers::*;

fn room_store(path: &std::path::Path) -> EntityStore<Room> {
    EntityStore::open("rooms", path, Vec::new())
}

fn service_store(path: &std::path::Path) -> EntityStore<Service> {
    EntityStore::open("services", path, vec![IdSequence::new("L")])
}

fn user_store(path: &std::path::Path) -> EntityStore<User> {
    EntityStore::open(
        "users",
        path,
        vec![IdSequence::new("P"), IdSequence::new("PG")],
    )
}

fn test_room(number: &str) -> Room {
    Room::new(RoomClass::Standard, number, None, false, false)
}

#[test]
fn missing_file_starts_empty_and_creates_it() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    let report = store.load().expect("Failed to load store");

    assert_eq!(report, LoadReport::default());
    assert_eq!(store.len(), 0);
    assert!(path.exists(), "load should create the backing file");
}

#[test]
fn save_and_reload_preserves_records_and_order() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    store
        .add(Room::new(RoomClass::Suite, "301", None, true, false))
        .expect("Failed to add room");
    store
        .add(test_room("101"))
        .expect("Failed to add room");
    store
        .add(Room::new(RoomClass::Deluxe, "201", None, true, false))
        .expect("Failed to add room");
    drop(store);

    let mut reloaded = room_store(&path);
    let report = reloaded.load().expect("Failed to reload store");

    assert_eq!(report.loaded, 3);
    let numbers: Vec<&str> = reloaded.iter().map(Room::number).collect();
    assert_eq!(numbers, ["301", "101", "201"], "file order is insertion order, not key order");
    let suite = reloaded.get("301").expect("Room should exist");
    assert_eq!(suite.class(), RoomClass::Suite);
    assert_eq!(suite.nightly_rate(), 2_500_000);
    assert_eq!(suite.capacity(), 4);
    let standard = reloaded.get("101").expect("Room should exist");
    assert_eq!(standard.class(), RoomClass::Standard);
    assert_eq!(standard.nightly_rate(), 500_000);
}

#[test]
fn short_lines_are_skipped_and_counted() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "rooms.txt",
        &[
            "STANDARD|101|AVAILABLE|500000|1|2|0|0|WiFi, TV, AC",
            "STANDARD|102",
        ],
    );

    let mut store = room_store(&path);
    let report = store.load().expect("Failed to load store");

    assert_eq!(
        report,
        LoadReport {
            loaded: 1,
            skipped: 1
        }
    );
    assert!(store.contains("101"));
    assert!(!store.contains("102"));
}

#[test]
fn unknown_discriminators_are_skipped() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "rooms.txt",
        &[
            "PENTHOUSE|901|AVAILABLE|9000000|9|2|1|1|Everything",
            "DELUXE|201|AVAILABLE|1000000|2|2|1|0|WiFi, TV, AC, Minibar",
        ],
    );

    let mut store = room_store(&path);
    let report = store.load().expect("Failed to load store");

    assert_eq!(
        report,
        LoadReport {
            loaded: 1,
            skipped: 1
        }
    );
    assert!(store.contains("201"));
}

#[test]
fn fields_are_trimmed_before_parsing() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "rooms.txt",
        &[" STANDARD | 104 | AVAILABLE | 500000 | 1 | 2 | 0 | 0 | WiFi, TV, AC "],
    );

    let mut store = room_store(&path);
    let report = store.load().expect("Failed to load store");

    assert_eq!(report.loaded, 1);
    let room = store.get("104").expect("Room should exist");
    assert_eq!(room.nightly_rate(), 500_000);
}

#[test]
fn reload_requires_an_explicit_clear() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "rooms.txt",
        &["STANDARD|101|AVAILABLE|500000|1|2|0|0|WiFi, TV, AC"],
    );

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    assert_state_error(store.load());

    store.clear();
    assert!(!store.is_loaded());
    let report = store.load().expect("Failed to reload after clear");
    assert_eq!(report.loaded, 1);
}

#[test]
fn operations_before_load_are_state_errors() {
    let dir = test_data_dir();
    let mut store = room_store(&dir.path().join("rooms.txt"));

    assert_state_error(store.add(test_room("101")));
    assert_state_error(store.save());
    assert_state_error(store.remove("101"));
}

#[test]
fn duplicate_add_is_rejected_without_side_effects() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    store.add(test_room("101")).expect("Failed to add room");

    let mut imposter = test_room("101");
    imposter.set_nightly_rate(1);
    assert_duplicate(store.add(imposter));

    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get("101").expect("Room should exist").nightly_rate(),
        500_000
    );
    assert_eq!(read_store_lines(&path).len(), 1);
}

#[test]
fn remove_hands_back_the_record_and_persists() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    for number in ["101", "102", "103"] {
        store.add(test_room(number)).expect("Failed to add room");
    }

    let removed = store.remove("102").expect("Failed to remove room");
    assert_eq!(removed.number(), "102");
    assert_eq!(store.len(), 2);
    assert_not_found(store.remove("102"));

    let mut reloaded = room_store(&path);
    reloaded.load().expect("Failed to reload store");
    let numbers: Vec<&str> = reloaded.iter().map(Room::number).collect();
    assert_eq!(numbers, ["101", "103"]);
}

#[test]
fn update_persists_through_reload() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    store.add(test_room("101")).expect("Failed to add room");
    store
        .update("101", |room| room.set_nightly_rate(750_000))
        .expect("Failed to update room");

    let mut reloaded = room_store(&path);
    reloaded.load().expect("Failed to reload store");
    assert_eq!(
        reloaded.get("101").expect("Room should exist").nightly_rate(),
        750_000
    );
}

#[test]
fn id_sequences_resume_past_file_contents() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "users.txt",
        &[
            "CUSTOMER|P001|Andi Wijaya|andi@example.com|0812|pw|1|Jl. Melati 1|0|0",
            "CUSTOMER|P002|Sari Dewi|sari@example.com|0812|pw|1|Jl. Melati 2|0|0",
            "CUSTOMER|P005|Maya Lestari|maya@example.com|0812|pw|1|Jl. Melati 5|0|0",
            "STAFF|PG003|Bram Santoso|bram@example.com|0813|pw|1|Receptionist|Morning|5000000|0",
        ],
    );

    let mut store = user_store(&path);
    store.load().expect("Failed to load store");

    assert_eq!(store.next_id("P").expect("P sequence"), "P006");
    assert_eq!(store.next_id("PG").expect("PG sequence"), "PG004");
    assert!(store.next_id("X").is_err(), "unknown prefix has no sequence");
}

#[test]
fn hand_assigned_ids_push_the_sequence_forward() {
    let dir = test_data_dir();
    let path = dir.path().join("services.txt");

    let mut store = service_store(&path);
    store.load().expect("Failed to load store");
    store
        .add(Service::new(
            "L009",
            "Helicopter Tour",
            ServiceCategory::Other,
            9_000_000,
            PriceUnit::PerTrip,
            1,
            "Thirty minutes over the bay",
        ))
        .expect("Failed to add service");

    assert_eq!(store.next_id("L").expect("L sequence"), "L010");
}

#[test]
fn duplicate_keys_in_a_file_keep_the_first_record() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "rooms.txt",
        &[
            "STANDARD|101|AVAILABLE|500000|1|2|0|0|WiFi, TV, AC",
            "STANDARD|101|AVAILABLE|999999|1|2|0|0|WiFi, TV, AC",
        ],
    );

    let mut store = room_store(&path);
    let report = store.load().expect("Failed to load store");

    assert_eq!(
        report,
        LoadReport {
            loaded: 1,
            skipped: 1
        }
    );
    assert_eq!(
        store.get("101").expect("Room should exist").nightly_rate(),
        500_000
    );
}

#[test]
fn range_scans_ascend_by_key_regardless_of_file_order() {
    let dir = test_data_dir();
    let path = dir.path().join("services.txt");

    let mut store = service_store(&path);
    store.load().expect("Failed to load store");
    for id in ["L003", "L001", "L002"] {
        store
            .add(Service::new(
                id,
                format!("Service {id}"),
                ServiceCategory::Other,
                10_000,
                PriceUnit::PerEvent,
                1,
                "",
            ))
            .expect("Failed to add service");
    }

    let ids: Vec<&str> = store
        .range("L001", "L002")
        .into_iter()
        .map(Service::id)
        .collect();
    assert_eq!(ids, ["L001", "L002"]);

    let all: Vec<&str> = store
        .range("L001", "L999")
        .into_iter()
        .map(Service::id)
        .collect();
    assert_eq!(all, ["L001", "L002", "L003"]);

    assert!(store.range("L002", "L001").is_empty(), "inverted bounds match nothing");
}

#[test]
fn nth_follows_file_order() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    for number in ["301", "101", "201"] {
        store.add(test_room(number)).expect("Failed to add room");
    }

    assert_eq!(store.nth(0).expect("First room").number(), "301");
    assert_eq!(store.nth(2).expect("Third room").number(), "201");
    assert!(store.nth(3).is_none());
}

#[test]
fn for_each_walks_file_order() {
    let dir = test_data_dir();
    let path = dir.path().join("rooms.txt");

    let mut store = room_store(&path);
    store.load().expect("Failed to load store");
    for number in ["202", "102", "302"] {
        store.add(test_room(number)).expect("Failed to add room");
    }

    let mut walked = Vec::new();
    store.for_each(|room| walked.push(room.number().to_string()));
    assert_eq!(walked, ["202", "102", "302"]);
}

#[test]
fn clear_resets_id_sequences_for_the_next_load() {
    let dir = test_data_dir();
    let path = write_store_file(
        dir.path(),
        "users.txt",
        &["CUSTOMER|P005|Maya Lestari|maya@example.com|0812|pw|1|Jl. Melati 5|0|0"],
    );

    let mut store = user_store(&path);
    store.load().expect("Failed to load store");
    assert_eq!(store.next_id("P").expect("P sequence"), "P006");

    store.clear();
    store.load().expect("Failed to reload store");
    assert_eq!(
        store.next_id("P").expect("P sequence"),
        "P006",
        "sequence recovers from the file, not from the previous session"
    );
}
