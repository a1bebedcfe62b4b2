//! Operational managers composed over the record stores.
//!
//! Each manager owns exactly one [`EntityStore`](crate::store::EntityStore)
//! and speaks its domain's language: the [`RoomCatalog`] knows which rooms
//! are free, the [`BookingLedger`] knows what a valid status move is, and
//! so on. [`FrontDesk`] holds all four and runs the flows that touch more
//! than one store, like settling a stay and releasing its room.

mod errors;
mod ledger;
mod rooms;
mod services;
mod users;

pub use errors::ManagerError;
pub use ledger::{BookingLedger, PaymentRecord};
pub use rooms::{RoomCatalog, WaitlistEntry};
pub use services::ServiceCatalog;
pub use users::UserDirectory;

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::Result;
use crate::record::{
    BookingKind, PaymentMethod, PriceUnit, Role, Room, RoomClass, RoomStatus, ServiceCategory,
};
use crate::store::LoadReport;

const ROOMS_FILE: &str = "rooms.txt";
const SERVICES_FILE: &str = "services.txt";
const USERS_FILE: &str = "users.txt";
const BOOKINGS_FILE: &str = "bookings.txt";

/// Load results for all four stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub rooms: LoadReport,
    pub services: LoadReport,
    pub users: LoadReport,
    pub bookings: LoadReport,
}

/// Headline numbers for the whole property.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeskSummary {
    pub rooms_total: usize,
    pub rooms_occupied: usize,
    pub services_available: usize,
    pub customers: usize,
    pub staff: usize,
    pub open_bookings: usize,
    pub revenue: i64,
    pub waiting: usize,
}

/// The whole property behind one handle: four managers over one data
/// directory.
pub struct FrontDesk {
    rooms: RoomCatalog,
    services: ServiceCatalog,
    users: UserDirectory,
    ledger: BookingLedger,
}

impl FrontDesk {
    /// Open a desk over `data_dir`, creating the directory if needed.
    ///
    /// The stores start unloaded; call [`load_all`](Self::load_all)
    /// before touching records.
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            rooms: RoomCatalog::open(dir.join(ROOMS_FILE)),
            services: ServiceCatalog::open(dir.join(SERVICES_FILE)),
            users: UserDirectory::open(dir.join(USERS_FILE)),
            ledger: BookingLedger::open(dir.join(BOOKINGS_FILE)),
        })
    }

    /// Load all four stores from their files.
    pub fn load_all(&mut self) -> Result<LoadSummary> {
        let summary = LoadSummary {
            rooms: self.rooms.load()?,
            services: self.services.load()?,
            users: self.users.load()?,
            bookings: self.ledger.load()?,
        };
        info!(
            rooms = summary.rooms.loaded,
            services = summary.services.loaded,
            users = summary.users.loaded,
            bookings = summary.bookings.loaded,
            "Data directory loaded"
        );
        Ok(summary)
    }

    /// Write all four stores back to their files.
    pub fn save_all(&self) -> Result<()> {
        self.rooms.save()?;
        self.services.save()?;
        self.users.save()?;
        self.ledger.save()
    }

    /// Drop everything in memory and return every store to its unloaded
    /// state. The files are untouched.
    pub fn clear_all(&mut self) {
        self.rooms.clear();
        self.services.clear();
        self.users.clear();
        self.ledger.clear();
    }

    pub fn rooms(&self) -> &RoomCatalog {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> &mut RoomCatalog {
        &mut self.rooms
    }

    pub fn services(&self) -> &ServiceCatalog {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut ServiceCatalog {
        &mut self.services
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    pub fn users_mut(&mut self) -> &mut UserDirectory {
        &mut self.users
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut BookingLedger {
        &mut self.ledger
    }

    /// Stock the property on first run: the standard room grid, the
    /// facility menu, and the owner account. Stores that already hold
    /// records are left alone, so running this twice changes nothing.
    ///
    /// # Errors
    /// The stores must be loaded first; see [`load_all`](Self::load_all).
    pub fn seed_if_empty(&mut self) -> Result<()> {
        if self.rooms.is_empty() {
            for room in standard_room_grid() {
                self.rooms.add_room(room)?;
            }
            info!(rooms = self.rooms.len(), "Seeded room inventory");
        }
        if self.services.is_empty() {
            for (name, category, rate, unit, min_order, description) in standard_service_menu() {
                self.services
                    .add_service(name, category, rate, unit, min_order, description)?;
            }
            info!(services = self.services.len(), "Seeded service menu");
        }
        if self
            .users
            .ensure_owner_account("Property Owner", "owner@innkeep.local", "admin123")?
        {
            warn!("Owner account created with the default secret; change it");
        }
        Ok(())
    }

    /// Book a room stay for a customer.
    ///
    /// Validates the customer and the room, records the booking, and
    /// flips the room to occupied.
    ///
    /// # Returns
    /// The booking id.
    ///
    /// # Errors
    /// Returns [`ManagerError::NotACustomer`] for non-customer ids,
    /// [`ManagerError::RoomUnavailable`] when the room is not free, or a
    /// not-found error when either id is unknown.
    pub fn book_room(
        &mut self,
        customer_id: &str,
        room_number: &str,
        nights: u32,
        method: PaymentMethod,
        start: NaiveDate,
    ) -> Result<String> {
        let customer = self.users.user(customer_id)?;
        if customer.role() != Role::Customer {
            return Err(ManagerError::NotACustomer {
                id: customer_id.to_string(),
            }
            .into());
        }
        let customer_name = customer.name().to_string();

        let room = self.rooms.room(room_number)?;
        if !room.is_available() {
            return Err(ManagerError::RoomUnavailable {
                number: room_number.to_string(),
                status: room.status().as_str(),
            }
            .into());
        }
        let rate = room.nightly_rate();

        let id = self.ledger.book_room(
            customer_id,
            &customer_name,
            room_number,
            rate,
            nights,
            method,
            start,
        )?;
        self.rooms.set_status(room_number, RoomStatus::Occupied)?;
        info!(booking = %id, room = room_number, customer = customer_id, "Room booked");
        Ok(id)
    }

    /// Order a facility service for a customer.
    ///
    /// # Returns
    /// The booking id.
    ///
    /// # Errors
    /// Returns [`ManagerError::NotACustomer`] for non-customer ids, the
    /// ledger's availability and minimum-order errors, or a not-found
    /// error when either id is unknown.
    pub fn order_service(
        &mut self,
        customer_id: &str,
        service_id: &str,
        quantity: u32,
        method: PaymentMethod,
        date: NaiveDate,
    ) -> Result<String> {
        let customer = self.users.user(customer_id)?;
        if customer.role() != Role::Customer {
            return Err(ManagerError::NotACustomer {
                id: customer_id.to_string(),
            }
            .into());
        }
        let customer_name = customer.name().to_string();

        let service = self.services.service(service_id)?;
        let id = self
            .ledger
            .order_service(customer_id, &customer_name, service, quantity, method, date)?;
        info!(booking = %id, service = service_id, customer = customer_id, "Service ordered");
        Ok(id)
    }

    /// Settle a booking: the payment is recorded, the customer's stats
    /// are updated, a room stay sends its room to cleaning, and the
    /// handling staff member's counter is bumped when one is named.
    ///
    /// Bookkeeping that fails after the payment is taken is logged and
    /// does not undo the settlement.
    ///
    /// # Returns
    /// The payment that was recorded.
    pub fn settle_booking(
        &mut self,
        booking_id: &str,
        staff_id: Option<&str>,
    ) -> Result<PaymentRecord> {
        let (kind, customer_id, item_id) = {
            let booking = self.ledger.booking(booking_id)?;
            (
                booking.kind(),
                booking.customer_id().to_string(),
                booking.item_id().to_string(),
            )
        };

        let payment = self.ledger.settle(booking_id)?;

        if let Err(err) = self.users.record_spending(&customer_id, payment.amount) {
            warn!(customer = %customer_id, %err, "Could not update customer stats");
        }
        if let Some(staff) = staff_id {
            if let Err(err) = self.users.record_handled(staff) {
                warn!(staff = %staff, %err, "Could not update staff stats");
            }
        }
        if kind == BookingKind::Room {
            if let Err(err) = self.rooms.set_status(&item_id, RoomStatus::Cleaning) {
                warn!(room = %item_id, %err, "Could not send room to cleaning");
            }
        }
        info!(booking = %booking_id, amount = payment.amount, "Booking settled");
        Ok(payment)
    }

    /// Cancel a booking. A room stay releases its room, and the
    /// longest-waiting customer for that room's class is pulled off the
    /// waiting list.
    ///
    /// # Returns
    /// The waiting customer now first in line for the freed room, if the
    /// waiting list had one.
    pub fn cancel_booking(&mut self, booking_id: &str) -> Result<Option<WaitlistEntry>> {
        let (kind, item_id) = {
            let booking = self.ledger.booking(booking_id)?;
            (booking.kind(), booking.item_id().to_string())
        };

        self.ledger.cancel(booking_id)?;

        if kind != BookingKind::Room {
            return Ok(None);
        }
        if let Err(err) = self.rooms.set_status(&item_id, RoomStatus::Available) {
            warn!(room = %item_id, %err, "Could not release room");
            return Ok(None);
        }
        let class = match self.rooms.room(&item_id) {
            Ok(room) => room.class(),
            Err(_) => return Ok(None),
        };
        let next = self.rooms.next_in_line(class);
        if let Some(entry) = &next {
            info!(
                customer = %entry.customer_id,
                room = %item_id,
                "Room freed; next customer in line can book"
            );
        }
        Ok(next)
    }

    /// Put a customer on the waiting list for a room class.
    ///
    /// # Returns
    /// The customer's 1-based spot in the list.
    pub fn join_waitlist(&mut self, customer_id: &str, class: RoomClass) -> Result<usize> {
        let customer = self.users.user(customer_id)?;
        if customer.role() != Role::Customer {
            return Err(ManagerError::NotACustomer {
                id: customer_id.to_string(),
            }
            .into());
        }
        let entry = WaitlistEntry {
            customer_id: customer_id.to_string(),
            customer_name: customer.name().to_string(),
            class,
        };
        self.rooms.join_waitlist(entry)?;
        let position = self
            .rooms
            .waitlist_position(customer_id)
            .unwrap_or_else(|| self.rooms.waitlist_len());
        Ok(position)
    }

    /// Headline numbers for the whole property.
    pub fn summary(&self) -> DeskSummary {
        let (occupied, total) = self.rooms.occupancy();
        DeskSummary {
            rooms_total: total,
            rooms_occupied: occupied,
            services_available: self.services.available_services().len(),
            customers: self.users.with_role(Role::Customer).len(),
            staff: self.users.with_role(Role::Staff).len(),
            open_bookings: self.ledger.open_bookings(),
            revenue: self.ledger.revenue(),
            waiting: self.rooms.waitlist_len(),
        }
    }
}

/// The room grid a fresh property opens with: ten standard rooms on the
/// first floor, eight deluxe on the second, five suites on the third,
/// and two presidential rooms on the fifth.
fn standard_room_grid() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(25);
    for n in 1..=10 {
        rooms.push(Room::new(
            RoomClass::Standard,
            format!("{}", 100 + n),
            None,
            false,
            false,
        ));
    }
    for n in 1..=8 {
        rooms.push(Room::new(
            RoomClass::Deluxe,
            format!("{}", 200 + n),
            None,
            true,
            false,
        ));
    }
    for n in 1..=5 {
        rooms.push(Room::new(
            RoomClass::Suite,
            format!("{}", 300 + n),
            None,
            true,
            true,
        ));
    }
    for n in 1..=2 {
        rooms.push(Room::new(
            RoomClass::Presidential,
            format!("{}", 500 + n),
            None,
            true,
            true,
        ));
    }
    rooms
}

type ServiceSeed = (
    &'static str,
    ServiceCategory,
    i64,
    PriceUnit,
    u32,
    &'static str,
);

/// The menu a fresh property opens with.
fn standard_service_menu() -> Vec<ServiceSeed> {
    use PriceUnit::*;
    use ServiceCategory::*;

    vec![
        (
            "Grand Ballroom",
            Ballroom,
            15_000_000,
            PerEvent,
            1,
            "Full-day hire of the grand ballroom, seats 500",
        ),
        (
            "Meeting Hall",
            Ballroom,
            5_000_000,
            PerEvent,
            1,
            "Half-floor meeting hall with projector",
        ),
        (
            "Breakfast Buffet",
            Restaurant,
            150_000,
            PerPerson,
            1,
            "Morning buffet at the main restaurant",
        ),
        (
            "Romantic Dinner",
            Restaurant,
            750_000,
            PerPerson,
            2,
            "Private table dinner, booked per couple",
        ),
        (
            "Room Service Meal",
            Restaurant,
            100_000,
            PerPerson,
            1,
            "In-room dining from the all-day menu",
        ),
        (
            "Regular Laundry",
            Laundry,
            25_000,
            PerKg,
            1,
            "Next-day wash and fold",
        ),
        (
            "Express Laundry",
            Laundry,
            45_000,
            PerKg,
            1,
            "Same-day wash and press",
        ),
        (
            "Pool Day Pass",
            Pool,
            100_000,
            PerPerson,
            1,
            "All-day access to the outdoor pool",
        ),
        (
            "Private Pool Session",
            Pool,
            500_000,
            PerSession,
            1,
            "Two-hour private hire of the rooftop pool",
        ),
        (
            "Gym Day Pass",
            Gym,
            75_000,
            PerDay,
            1,
            "All-day access to the fitness center",
        ),
        (
            "Personal Trainer",
            Gym,
            300_000,
            PerSession,
            1,
            "One-hour session with a certified trainer",
        ),
        (
            "Airport Shuttle",
            Shuttle,
            250_000,
            PerTrip,
            1,
            "One-way transfer to or from the airport",
        ),
        (
            "City Tour",
            Shuttle,
            600_000,
            PerTrip,
            1,
            "Guided half-day tour of the old town",
        ),
    ]
}
