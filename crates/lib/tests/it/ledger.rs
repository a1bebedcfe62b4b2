//! Booking lifecycle rules, ledger queries, and the session payment
//! history.

use innkeep::Error;
use innkeep::manager::ManagerError;
use innkeep::record::{BookingStatus, PaymentMethod};

use crate::helpers::*;

#[test]
fn lifecycle_moves_forward_only() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");
    let id = desk
        .book_room(&customer, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");

    desk.ledger_mut().confirm(&id).expect("Pending can confirm");
    let err = desk.ledger_mut().confirm(&id).unwrap_err();
    assert!(
        matches!(
            &err,
            Error::Manager(ManagerError::InvalidTransition {
                from: "CONFIRMED",
                ..
            })
        ),
        "confirming twice is refused, got {err:?}"
    );

    desk.ledger_mut().cancel(&id).expect("Confirmed can cancel");
    let err = desk.settle_booking(&id, None).unwrap_err();
    assert!(
        matches!(&err, Error::Manager(m) if m.is_invalid_transition()),
        "cancelled bookings cannot settle, got {err:?}"
    );
    assert_eq!(
        desk.ledger().booking(&id).expect("Booking should exist").status(),
        BookingStatus::Cancelled
    );
}

#[test]
fn pending_bookings_can_settle_directly() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");
    let id = desk
        .order_service(&customer, "L003", 2, PaymentMethod::EWallet, test_date(11))
        .expect("Failed to order service");

    let payment = desk
        .settle_booking(&id, None)
        .expect("Pending should settle without a confirm step");
    assert_eq!(payment.amount, 300_000, "two breakfast buffets");
    assert_eq!(payment.method, PaymentMethod::EWallet);
}

#[test]
fn revenue_counts_only_completed_bookings() {
    let (_dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");

    let settled = desk
        .book_room(&customer, "101", 2, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    let cancelled = desk
        .book_room(&customer, "102", 5, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    let open = desk
        .book_room(&customer, "103", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");

    desk.settle_booking(&settled, None).expect("Failed to settle");
    desk.cancel_booking(&cancelled).expect("Failed to cancel");

    assert_eq!(desk.ledger().revenue(), 1_000_000);
    assert_eq!(desk.ledger().open_bookings(), 1);
    assert_eq!(
        desk.ledger().booking(&open).expect("Booking should exist").status(),
        BookingStatus::Pending
    );
}

#[test]
fn ledger_queries_filter_and_scan() {
    let (_dir, mut desk) = seeded_desk();
    let maya = register_test_customer(&mut desk, "Maya");
    let andi = register_test_customer(&mut desk, "Andi");

    desk.book_room(&maya, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    desk.book_room(&andi, "102", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    desk.order_service(&maya, "L003", 1, PaymentMethod::Cash, test_date(11))
        .expect("Failed to order service");

    let mayas = desk.ledger().bookings_for_customer(&maya);
    assert_eq!(mayas.len(), 2);
    assert!(mayas.iter().all(|b| b.customer_id() == maya));

    let window: Vec<&str> = desk
        .ledger()
        .ids_between("T001", "T002")
        .into_iter()
        .map(|b| b.id())
        .collect();
    assert_eq!(window, ["T001", "T002"], "range scan is inclusive and ascending");
}

#[test]
fn payment_history_is_newest_first() {
    let (dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");

    let first = desk
        .book_room(&customer, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");
    let second = desk
        .order_service(&customer, "L003", 1, PaymentMethod::CreditCard, test_date(11))
        .expect("Failed to order service");

    desk.settle_booking(&first, None).expect("Failed to settle");
    desk.settle_booking(&second, None).expect("Failed to settle");

    assert_eq!(desk.ledger().payment_count(), 2);
    let recent: Vec<&str> = desk
        .ledger()
        .recent_payments(5)
        .into_iter()
        .map(|p| p.booking_id.as_str())
        .collect();
    assert_eq!(recent, [second.as_str(), first.as_str()]);

    // The history is session-scoped: the bookings persist, the stack
    // does not.
    drop(desk);
    let desk = open_desk(dir.path());
    assert_eq!(desk.ledger().len(), 2);
    assert_eq!(desk.ledger().payment_count(), 0);
}

#[test]
fn notes_survive_a_reload() {
    let (dir, mut desk) = seeded_desk();
    let customer = register_test_customer(&mut desk, "Maya");
    let id = desk
        .book_room(&customer, "101", 1, PaymentMethod::Cash, test_date(10))
        .expect("Failed to book room");

    desk.ledger_mut()
        .annotate(&id, "Late arrival, keep the key at the desk")
        .expect("Failed to annotate");
    drop(desk);

    let desk = open_desk(dir.path());
    assert_eq!(
        desk.ledger().booking(&id).expect("Booking should exist").note(),
        "Late arrival, keep the key at the desk"
    );
}
