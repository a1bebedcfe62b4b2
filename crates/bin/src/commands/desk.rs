//! Property-level commands: first-run stocking and the summary board.

use std::path::Path;

use innkeep::FrontDesk;

use crate::output::{OutputFormat, money};

/// Run the `seed` command
pub fn seed(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = FrontDesk::open(data_dir)?;
    let loads = desk.load_all()?;
    desk.seed_if_empty()?;

    let skipped =
        loads.rooms.skipped + loads.services.skipped + loads.users.skipped + loads.bookings.skipped;

    match format {
        OutputFormat::Human => {
            println!(
                "Data directory ready: {} rooms, {} services, {} accounts, {} bookings",
                desk.rooms().len(),
                desk.services().len(),
                desk.users().len(),
                desk.ledger().len(),
            );
            if skipped > 0 {
                println!("Skipped {skipped} unreadable lines; see the log for details");
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "rooms": desk.rooms().len(),
                    "services": desk.services().len(),
                    "users": desk.users().len(),
                    "bookings": desk.ledger().len(),
                    "skipped_lines": skipped,
                })
            );
        }
    }
    Ok(())
}

/// Run the `summary` command
pub fn summary(data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let summary = desk.summary();

    match format {
        OutputFormat::Human => {
            println!(
                "Rooms     {} total, {} occupied",
                summary.rooms_total, summary.rooms_occupied
            );
            println!("Services  {} bookable", summary.services_available);
            println!(
                "Accounts  {} customers, {} staff",
                summary.customers, summary.staff
            );
            println!("Bookings  {} open", summary.open_bookings);
            println!("Revenue   {}", money(summary.revenue));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
    }
    Ok(())
}
