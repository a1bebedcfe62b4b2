//! CLI argument definitions for the Innkeep binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use innkeep::record::{PaymentMethod, PriceUnit, Role, RoomClass, RoomStatus, ServiceCategory};

use crate::output::OutputFormat;

/// Innkeep hotel operations console
#[derive(Parser, Debug)]
#[command(name = "innkeep")]
#[command(about = "Innkeep: flat-file hotel records from the command line")]
#[command(version)]
pub struct Cli {
    /// Directory holding the record files
    #[arg(short = 'D', long, default_value = "data", env = "INNKEEP_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "human", env = "INNKEEP_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stock an empty data directory with the standard inventory
    Seed,
    /// Show headline numbers for the whole property
    Summary,
    /// Inspect and manage rooms
    #[command(subcommand)]
    Room(RoomCommands),
    /// Inspect and manage facility services
    #[command(subcommand)]
    Service(ServiceCommands),
    /// Inspect and manage accounts
    #[command(subcommand)]
    User(UserCommands),
    /// Create and move bookings
    #[command(subcommand)]
    Booking(BookingCommands),
}

// ==================== room ====================

#[derive(Subcommand, Debug)]
pub enum RoomCommands {
    /// List rooms
    List(RoomListArgs),
    /// Show one room in full
    Show { number: String },
    /// Add a room to the catalog
    Add(RoomAddArgs),
    /// Change a room's status
    SetStatus {
        number: String,
        status: RoomStatusArg,
    },
    /// Change a room's nightly rate
    SetRate { number: String, rate: i64 },
    /// Retire a room from the catalog
    Remove { number: String },
}

/// Arguments for `room list`
#[derive(clap::Args, Debug)]
pub struct RoomListArgs {
    /// Only rooms of this class
    #[arg(short, long)]
    pub class: Option<RoomClassArg>,

    /// Only rooms free to book right now
    #[arg(short, long)]
    pub free: bool,
}

/// Arguments for `room add`
#[derive(clap::Args, Debug)]
pub struct RoomAddArgs {
    /// Room number, e.g. 104
    pub number: String,

    /// Room class
    #[arg(short, long)]
    pub class: RoomClassArg,

    /// Floor the room is on; the class picks one when omitted
    #[arg(long)]
    pub floor: Option<u32>,

    /// The room has a balcony
    #[arg(long)]
    pub balcony: bool,

    /// The room faces the sea
    #[arg(long)]
    pub sea_view: bool,
}

// ==================== service ====================

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// List facility services
    List(ServiceListArgs),
    /// Show one service in full
    Show { id: String },
    /// Add a service to the menu
    Add(ServiceAddArgs),
    /// Change a service's rate
    SetRate { id: String, rate: i64 },
    /// Put a service back on the menu
    Enable { id: String },
    /// Take a service off the menu without deleting it
    Disable { id: String },
}

/// Arguments for `service list`
#[derive(clap::Args, Debug)]
pub struct ServiceListArgs {
    /// Only services in this category
    #[arg(short, long)]
    pub category: Option<ServiceCategoryArg>,

    /// Only services currently bookable
    #[arg(short, long)]
    pub available: bool,
}

/// Arguments for `service add`
#[derive(clap::Args, Debug)]
pub struct ServiceAddArgs {
    /// Display name, e.g. "Sunset Cruise"
    pub name: String,

    /// Service category
    #[arg(short, long)]
    pub category: ServiceCategoryArg,

    /// Rate per pricing unit
    #[arg(short, long)]
    pub rate: i64,

    /// Pricing unit
    #[arg(short, long, default_value = "per-event")]
    pub unit: PriceUnitArg,

    /// Smallest quantity a customer can order
    #[arg(short, long, default_value_t = 1)]
    pub min_order: u32,

    /// One-line description for the menu
    #[arg(short, long, default_value = "")]
    pub description: String,
}

// ==================== user ====================

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List accounts
    List(UserListArgs),
    /// Show one account in full
    Show { id: String },
    /// Open a customer account
    RegisterCustomer(RegisterCustomerArgs),
    /// Hire a staff member
    RegisterStaff(RegisterStaffArgs),
    /// Check a login against the directory
    Login(LoginArgs),
    /// Reactivate an account
    Activate { id: String },
    /// Deactivate an account, keeping its history
    Deactivate { id: String },
}

/// Arguments for `user list`
#[derive(clap::Args, Debug)]
pub struct UserListArgs {
    /// Only accounts with this role
    #[arg(short, long)]
    pub role: Option<RoleArg>,
}

/// Arguments for `user register-customer`
#[derive(clap::Args, Debug)]
pub struct RegisterCustomerArgs {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Phone number
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Sign-in secret
    #[arg(short, long)]
    pub secret: String,

    /// Home address
    #[arg(short, long, default_value = "")]
    pub address: String,
}

/// Arguments for `user register-staff`
#[derive(clap::Args, Debug)]
pub struct RegisterStaffArgs {
    /// Full name
    #[arg(short, long)]
    pub name: String,

    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Phone number
    #[arg(short, long, default_value = "")]
    pub phone: String,

    /// Sign-in secret
    #[arg(short, long)]
    pub secret: String,

    /// Job title
    #[arg(long, default_value = "Receptionist")]
    pub position: String,

    /// Working shift, e.g. Morning
    #[arg(long, default_value = "Morning")]
    pub shift: String,

    /// Monthly salary; the standard figure when omitted
    #[arg(long)]
    pub salary: Option<i64>,
}

/// Arguments for `user login`
#[derive(clap::Args, Debug)]
pub struct LoginArgs {
    /// Account id or email address
    pub login: String,

    /// Sign-in secret
    #[arg(short, long)]
    pub secret: String,
}

// ==================== booking ====================

#[derive(Subcommand, Debug)]
pub enum BookingCommands {
    /// List bookings
    List(BookingListArgs),
    /// Show one booking in full
    Show { id: String },
    /// Book a room stay for a customer
    Room(BookRoomArgs),
    /// Order a facility service for a customer
    Service(OrderServiceArgs),
    /// Confirm a pending booking
    Confirm { id: String },
    /// Settle a booking and record its payment
    Settle(SettleArgs),
    /// Cancel a booking and release its room
    Cancel { id: String },
    /// Attach a free-form note to a booking
    Note { id: String, note: String },
}

/// Arguments for `booking list`
#[derive(clap::Args, Debug)]
pub struct BookingListArgs {
    /// Only bookings for this customer
    #[arg(short, long)]
    pub customer: Option<String>,

    /// Only bookings still pending or confirmed
    #[arg(short, long)]
    pub open: bool,
}

/// Arguments for `booking room`
#[derive(clap::Args, Debug)]
pub struct BookRoomArgs {
    /// Customer account id
    #[arg(short, long)]
    pub customer: String,

    /// Room number
    #[arg(short, long)]
    pub room: String,

    /// Number of nights
    #[arg(short, long, default_value_t = 1)]
    pub nights: u32,

    /// Payment method
    #[arg(short, long, default_value = "cash")]
    pub method: PaymentMethodArg,

    /// Check-in date as DD/MM/YYYY; today when omitted
    #[arg(short, long)]
    pub start: Option<String>,
}

/// Arguments for `booking service`
#[derive(clap::Args, Debug)]
pub struct OrderServiceArgs {
    /// Customer account id
    #[arg(short, long)]
    pub customer: String,

    /// Service id
    #[arg(short, long)]
    pub service: String,

    /// How many units to order
    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// Payment method
    #[arg(short, long, default_value = "cash")]
    pub method: PaymentMethodArg,

    /// Service date as DD/MM/YYYY; today when omitted
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for `booking settle`
#[derive(clap::Args, Debug)]
pub struct SettleArgs {
    /// Booking id
    pub id: String,

    /// Staff member who handled the settlement
    #[arg(long)]
    pub staff: Option<String>,
}

// ==================== value enums ====================

/// Room class on the tariff sheet
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoomClassArg {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl From<RoomClassArg> for RoomClass {
    fn from(arg: RoomClassArg) -> Self {
        match arg {
            RoomClassArg::Standard => RoomClass::Standard,
            RoomClassArg::Deluxe => RoomClass::Deluxe,
            RoomClassArg::Suite => RoomClass::Suite,
            RoomClassArg::Presidential => RoomClass::Presidential,
        }
    }
}

/// Housekeeping status of a room
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoomStatusArg {
    Available,
    Occupied,
    Maintenance,
    Cleaning,
}

impl From<RoomStatusArg> for RoomStatus {
    fn from(arg: RoomStatusArg) -> Self {
        match arg {
            RoomStatusArg::Available => RoomStatus::Available,
            RoomStatusArg::Occupied => RoomStatus::Occupied,
            RoomStatusArg::Maintenance => RoomStatus::Maintenance,
            RoomStatusArg::Cleaning => RoomStatus::Cleaning,
        }
    }
}

/// Facility a service belongs to
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ServiceCategoryArg {
    Ballroom,
    Restaurant,
    Laundry,
    Pool,
    Gym,
    Shuttle,
    Catering,
    Other,
}

impl From<ServiceCategoryArg> for ServiceCategory {
    fn from(arg: ServiceCategoryArg) -> Self {
        match arg {
            ServiceCategoryArg::Ballroom => ServiceCategory::Ballroom,
            ServiceCategoryArg::Restaurant => ServiceCategory::Restaurant,
            ServiceCategoryArg::Laundry => ServiceCategory::Laundry,
            ServiceCategoryArg::Pool => ServiceCategory::Pool,
            ServiceCategoryArg::Gym => ServiceCategory::Gym,
            ServiceCategoryArg::Shuttle => ServiceCategory::Shuttle,
            ServiceCategoryArg::Catering => ServiceCategory::Catering,
            ServiceCategoryArg::Other => ServiceCategory::Other,
        }
    }
}

/// What a service's rate is charged per
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriceUnitArg {
    PerEvent,
    PerPerson,
    PerKg,
    PerDay,
    PerSession,
    PerTrip,
    PerHour,
}

impl From<PriceUnitArg> for PriceUnit {
    fn from(arg: PriceUnitArg) -> Self {
        match arg {
            PriceUnitArg::PerEvent => PriceUnit::PerEvent,
            PriceUnitArg::PerPerson => PriceUnit::PerPerson,
            PriceUnitArg::PerKg => PriceUnit::PerKg,
            PriceUnitArg::PerDay => PriceUnit::PerDay,
            PriceUnitArg::PerSession => PriceUnit::PerSession,
            PriceUnitArg::PerTrip => PriceUnit::PerTrip,
            PriceUnitArg::PerHour => PriceUnit::PerHour,
        }
    }
}

/// Account role
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    Customer,
    Staff,
    Owner,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Customer => Role::Customer,
            RoleArg::Staff => Role::Staff,
            RoleArg::Owner => Role::Owner,
        }
    }
}

/// How a booking is paid
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PaymentMethodArg {
    Cash,
    BankTransfer,
    CreditCard,
    EWallet,
}

impl From<PaymentMethodArg> for PaymentMethod {
    fn from(arg: PaymentMethodArg) -> Self {
        match arg {
            PaymentMethodArg::Cash => PaymentMethod::Cash,
            PaymentMethodArg::BankTransfer => PaymentMethod::BankTransfer,
            PaymentMethodArg::CreditCard => PaymentMethod::CreditCard,
            PaymentMethodArg::EWallet => PaymentMethod::EWallet,
        }
    }
}
