//! FrontDesk flows that span several stores: seeding, sign-in, booking,
//! settlement, cancellation, and the walk-in waiting list.

use innkeep::Error;
use innkeep::manager::ManagerError;
use innkeep::record::{PaymentMethod, Profile, Role, RoomClass, RoomStatus, ServiceCategory};

use crate::helpers::*;

#[test]
fn seed_creates_the_standard_inventory() {
    let (_dir, desk) = seeded_desk();

    assert_eq!(desk.rooms().len(), 25);
    assert_eq!(desk.services().len(), 13);
    assert_eq!(desk.users().len(), 1, "only the owner account exists");

    let owner = desk
        .users()
        .authenticate("PM001", "admin123")
        .expect("Owner should sign in with the default secret");
    assert_eq!(owner.role(), Role::Owner);

    let summary = desk.summary();
    assert_eq!(summary.rooms_total, 25);
    assert_eq!(summary.rooms_occupied, 0);
    assert_eq!(summary.services_available, 13);
    assert_eq!(summary.revenue, 0);

    let first_three: Vec<&str> = desk
        .services()
        .ids_between("L001", "L003")
        .into_iter()
        .map(|service| service.id())
        .collect();
    assert_eq!(first_three, ["L001", "L002", "L003"]);

    assert_eq!(
        desk.services()
            .services_in_category(ServiceCategory::Restaurant)
            .len(),
        3
    );
}

#[test]
fn seed_is_idempotent_across_reopen() {
    let (dir, desk) = seeded_desk();
    drop(desk);

    let mut desk = open_desk(dir.path());
    desk.seed_if_empty().expect("Failed to reseed");

    assert_eq!(desk.rooms().len(), 25);
    assert_eq!(desk.services().len(), 13);
    assert_eq!(desk.users().len(), 1);
}

#[test]
fn room_grid_follows_the_class_defaults() {
    let (_dir, desk) = seeded_desk();

    assert_eq!(desk.rooms().rooms_in_class(RoomClass::Standard).len(), 10);
    assert_eq!(desk.rooms().rooms_in_class(RoomClass::Deluxe).len(), 8);
    assert_eq!(desk.rooms().rooms_in_class(RoomClass::Suite).len(), 5);
    assert_eq!(
        desk.rooms().rooms_in_class(RoomClass::Presidential).len(),
        2
    );

    let suite = desk.rooms().room("301").expect("Suite should exist");
    assert_eq!(suite.floor(), 3);
    assert!(suite.has_balcony());
    assert!(suite.has_sea_view());
}

#[test]
fn authenticate_accepts_id_or_email() {
    let (_dir, mut desk) = seeded_desk();
    let id = register_test_customer(&mut desk, "Maya");

    let by_id = desk
        .users()
        .authenticate(&id, "pw123")
        .expect("Sign-in by id should work");
    assert_eq!(by_id.name(), "Maya");

    let by_email = desk
        .users()
        .authenticate("maya@example.com", "pw123")
        .expect("Sign-in by email should work");
    assert_eq!(by_email.id(), id);

    let wrong = desk.users().authenticate(&id, "nope").unwrap_err();
    assert!(wrong.is_authentication_error());

    let unknown = desk.users().authenticate("P999", "pw123").unwrap_err();
    assert!(
        unknown.is_authentication_error(),
        "unknown logins fail the same way as wrong secrets"
    );
}

#[test]
fn deactivated_accounts_cannot_sign_in() {
    let (_dir, mut desk) = seeded_desk();
    let id = register_test_customer(&mut desk, "Maya");

    desk.users_mut()
        .set_active(&id, false)
        .expect("Failed to deactivate");
    let err = desk.users().authenticate(&id, "pw123").unwrap_err();
    assert!(err.is_authentication_error());

    desk.users_mut()
        .set_active(&id, true)
        .expect("Failed to reactivate");
    assert!(desk.users().authenticate(&id, "pw123").is_ok());
}

#[test]
fn booking_a_room_occupies_it() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");

    let booking_id = desk
        .book_room(&customer, "101", 2, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    assert_eq!(booking_id, "T001");

    let room = desk.rooms().room("101").expect("Room should exist");
    assert_eq!(room.status(), RoomStatus::Occupied);
    assert_eq!(desk.rooms().available_rooms().len(), 24);
    let fallback = desk
        .rooms()
        .first_available_in_class(RoomClass::Standard)
        .expect("Another standard room should be free");
    assert_eq!(fallback.number(), "102");

    let booking = desk.ledger().booking(&booking_id).expect("Booking should exist");
    assert_eq!(booking.total(), 1_000_000, "two nights at the standard rate");
    assert_eq!(booking.end_date(), Some(test_date(12)));

    let other = register_test_customer(&mut desk, "Andi");
    let err = desk
        .book_room(&other, "101", 1, PaymentMethod::Cash, test_date(10))
        .unwrap_err();
    assert!(
        matches!(&err, Error::Manager(m) if m.is_unavailable()),
        "occupied rooms cannot be double-booked, got {err:?}"
    );
}

#[test]
fn booking_requires_a_customer_account() {
    let (_dir, mut desk) = seeded_desk();

    let err = desk
        .book_room("PM001", "101", 1, PaymentMethod::Cash, test_date(10))
        .unwrap_err();
    assert!(
        matches!(&err, Error::Manager(ManagerError::NotACustomer { .. })),
        "owner cannot book rooms, got {err:?}"
    );

    assert_not_found(desk.book_room("P999", "101", 1, PaymentMethod::Cash, test_date(10)));
}

#[test]
fn settling_a_stay_updates_every_store() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");
    let staff = register_test_staff(&mut desk, "Bram");

    let booking_id = desk
        .book_room(&customer, "201", 1, PaymentMethod::CreditCard, test_date(10))
        .expect("Failed to book room");

    let payment = desk
        .settle_booking(&booking_id, Some(&staff))
        .expect("Failed to settle booking");
    assert_eq!(payment.amount, 1_000_000, "one night at the deluxe rate");

    let room = desk.rooms().room("201").expect("Room should exist");
    assert_eq!(room.status(), RoomStatus::Cleaning, "settled stays go to housekeeping");

    let user = desk.users().user(&customer).expect("Customer should exist");
    match user.profile() {
        Profile::Customer {
            bookings,
            total_spent,
            ..
        } => {
            assert_eq!(*bookings, 1);
            assert_eq!(*total_spent, 1_000_000);
        }
        other => panic!("expected customer profile, got {other:?}"),
    }

    let handler = desk.users().user(&staff).expect("Staff should exist");
    match handler.profile() {
        Profile::Staff { handled, .. } => assert_eq!(*handled, 1),
        other => panic!("expected staff profile, got {other:?}"),
    }

    assert_eq!(desk.ledger().revenue(), 1_000_000);
    assert_eq!(desk.summary().open_bookings, 0);
}

#[test]
fn cancelling_a_stay_frees_the_room_for_the_waitlist() {
    let (_dir, mut desk) = seeded_desk();
    let guest = register_test_customer(&mut desk, "Maya");
    let waiting = register_test_customer(&mut desk, "Andi");

    let booking_id = desk
        .book_room(&guest, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    let position = desk
        .join_waitlist(&waiting, RoomClass::Standard)
        .expect("Failed to join waitlist");
    assert_eq!(position, 1);

    let next = desk
        .cancel_booking(&booking_id)
        .expect("Failed to cancel booking");
    let entry = next.expect("The waiting customer should be first in line");
    assert_eq!(entry.customer_id, waiting);

    let room = desk.rooms().room("101").expect("Room should exist");
    assert_eq!(room.status(), RoomStatus::Available);
    assert_eq!(desk.rooms().waitlist_len(), 0);
}

#[test]
fn waitlist_is_first_come_first_served() {
    let (_dir, mut desk) = seeded_desk();
    let a = register_test_customer(&mut desk, "Aria");
    let b = register_test_customer(&mut desk, "Bima");
    let c = register_test_customer(&mut desk, "Citra");

    assert_eq!(desk.join_waitlist(&a, RoomClass::Standard).expect("join"), 1);
    assert_eq!(desk.join_waitlist(&b, RoomClass::Standard).expect("join"), 2);
    assert_eq!(desk.join_waitlist(&c, RoomClass::Suite).expect("join"), 3);

    let first = desk
        .rooms_mut()
        .next_in_line(RoomClass::Standard)
        .expect("Someone is waiting for a standard room");
    assert_eq!(first.customer_id, a);

    assert_eq!(desk.rooms().waitlist_position(&b), Some(1));
    assert_eq!(desk.rooms().waitlist_position(&c), Some(2));

    let cancelled = desk
        .rooms_mut()
        .cancel_waiting(&c)
        .expect("Citra should be waiting");
    assert_eq!(cancelled.customer_id, c);
    assert_eq!(desk.rooms().waitlist_len(), 1);
}

#[test]
fn service_orders_enforce_the_menu_rules() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");

    // Romantic Dinner is seeded with a two-person minimum.
    let err = desk
        .order_service(&customer, "L004", 1, PaymentMethod::Cash, test_date(11))
        .unwrap_err();
    assert!(
        matches!(
            &err,
            Error::Manager(ManagerError::BelowMinimumOrder { minimum: 2, .. })
        ),
        "under-minimum orders are refused, got {err:?}"
    );

    let booking_id = desk
        .order_service(&customer, "L004", 2, PaymentMethod::Cash, test_date(11))
        .expect("Failed to order service");
    let booking = desk.ledger().booking(&booking_id).expect("Booking should exist");
    assert_eq!(booking.total(), 1_500_000);
    assert_eq!(booking.end_date(), None);

    desk.services_mut()
        .set_available("L004", false)
        .expect("Failed to switch service off");
    let err = desk
        .order_service(&customer, "L004", 2, PaymentMethod::Cash, test_date(12))
        .unwrap_err();
    assert!(matches!(&err, Error::Manager(m) if m.is_unavailable()));
}

#[test]
fn desk_state_survives_a_reopen() {
    let (dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");
    desk.book_room(&customer, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    drop(desk);

    let mut desk = open_desk(dir.path());
    assert_eq!(desk.rooms().len(), 25);
    assert_eq!(desk.users().len(), 2);
    assert_eq!(desk.ledger().len(), 1);
    assert_eq!(
        desk.rooms()
            .room("101")
            .expect("Room should exist")
            .status(),
        RoomStatus::Occupied
    );

    // Id sequences pick up where the files left off.
    let next_customer = register_test_customer(&mut desk, "Andi");
    assert_eq!(next_customer, "P002");
    let next_booking = desk
        .book_room(&next_customer, "102", 1, PaymentMethod::Cash, test_date(11))
        .expect("Failed to book room");
    assert_eq!(next_booking, "T002");
}

#[test]
fn save_all_rewrites_files_from_memory() {
    let (dir, desk) = seeded_desk();

    // In-memory state is authoritative while the desk is open.
    write_store_file(dir.path(), "rooms.txt", &["scribbled over"]);
    desk.save_all().expect("Failed to save");
    drop(desk);

    let desk = open_desk(dir.path());
    assert_eq!(desk.rooms().len(), 25);
}

#[test]
fn clear_all_returns_the_desk_to_the_unloaded_state() {
    let (_dir, mut desk) = seeded_desk();
    register_test_customer(&mut desk, "Maya");

    assert_state_error(desk.load_all());

    desk.clear_all();
    let summary = desk.load_all().expect("Failed to reload after clear");
    assert_eq!(summary.rooms.loaded, 25);
    assert_eq!(summary.users.loaded, 2);
}
