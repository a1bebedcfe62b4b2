//! Booking ledger commands.

use std::path::Path;

use innkeep::flatfile;
use innkeep::record::Booking;

use crate::cli::{BookRoomArgs, BookingCommands, BookingListArgs, OrderServiceArgs, SettleArgs};
use crate::output::{OutputFormat, money, table};

/// Dispatch a `booking` subcommand
pub fn run(
    cmd: &BookingCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        BookingCommands::List(args) => list(args, data_dir, format),
        BookingCommands::Show { id } => show(id, data_dir, format),
        BookingCommands::Room(args) => book_room(args, data_dir, format),
        BookingCommands::Service(args) => order_service(args, data_dir, format),
        BookingCommands::Confirm { id } => confirm(id, data_dir, format),
        BookingCommands::Settle(args) => settle(args, data_dir, format),
        BookingCommands::Cancel { id } => cancel(id, data_dir, format),
        BookingCommands::Note { id, note } => annotate(id, note, data_dir, format),
    }
}

fn list(
    args: &BookingListArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let bookings: Vec<&Booking> = desk
        .ledger()
        .iter()
        .filter(|booking| {
            args.customer
                .as_deref()
                .is_none_or(|customer| booking.customer_id() == customer)
        })
        .filter(|booking| !args.open || !booking.status().is_terminal())
        .collect();

    match format {
        OutputFormat::Human => {
            if bookings.is_empty() {
                println!("No bookings matched.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = bookings
                .iter()
                .map(|booking| {
                    vec![
                        booking.id().to_string(),
                        booking.kind().as_str().to_string(),
                        booking.customer_id().to_string(),
                        booking.item_id().to_string(),
                        money(booking.total()),
                        booking.status().as_str().to_string(),
                        flatfile::format_date(booking.start_date()),
                    ]
                })
                .collect();
            table(
                &["ID", "KIND", "CUSTOMER", "ITEM", "TOTAL", "STATUS", "START"],
                &rows,
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&bookings)?),
    }
    Ok(())
}

fn show(id: &str, data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let booking = desk.ledger().booking(id)?;

    match format {
        OutputFormat::Human => {
            println!("Booking {} ({})", booking.id(), booking.kind().as_str());
            println!(
                "  Customer  {} ({})",
                booking.customer_name(),
                booking.customer_id()
            );
            println!("  Item      {} x{}", booking.item_id(), booking.quantity());
            println!("  Total     {}", money(booking.total()));
            println!("  Status    {}", booking.status().as_str());
            println!("  Payment   {}", booking.method().as_str());
            match booking.end_date() {
                Some(end) => println!(
                    "  Dates     {} to {}",
                    flatfile::format_date(booking.start_date()),
                    flatfile::format_date(end)
                ),
                None => println!("  Date      {}", flatfile::format_date(booking.start_date())),
            }
            if !booking.note().is_empty() {
                println!("  Note      {}", booking.note());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(booking)?),
    }
    Ok(())
}

fn book_room(
    args: &BookRoomArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let start = super::parse_date_arg(args.start.as_deref())?;
    let id = desk.book_room(
        &args.customer,
        &args.room,
        args.nights,
        args.method.into(),
        start,
    )?;
    let total = desk.ledger().booking(&id)?.total();

    match format {
        OutputFormat::Human => {
            println!(
                "Booking {id}: room {} for {} night(s), {} due",
                args.room,
                args.nights,
                money(total)
            )
        }
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "total": total })),
    }
    Ok(())
}

fn order_service(
    args: &OrderServiceArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let date = super::parse_date_arg(args.date.as_deref())?;
    let id = desk.order_service(
        &args.customer,
        &args.service,
        args.quantity,
        args.method.into(),
        date,
    )?;
    let total = desk.ledger().booking(&id)?.total();

    match format {
        OutputFormat::Human => {
            println!(
                "Booking {id}: {} x{}, {} due",
                args.service,
                args.quantity,
                money(total)
            )
        }
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "total": total })),
    }
    Ok(())
}

fn confirm(
    id: &str,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.ledger_mut().confirm(id)?;

    match format {
        OutputFormat::Human => println!("Booking {id} confirmed"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
    Ok(())
}

fn settle(
    args: &SettleArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let payment = desk.settle_booking(&args.id, args.staff.as_deref())?;

    match format {
        OutputFormat::Human => {
            println!(
                "Booking {} settled: {} by {}",
                args.id,
                money(payment.amount),
                payment.method.as_str()
            )
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&payment)?),
    }
    Ok(())
}

fn cancel(
    id: &str,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let next = desk.cancel_booking(id)?;

    match format {
        OutputFormat::Human => {
            println!("Booking {id} cancelled");
            if let Some(entry) = &next {
                println!(
                    "Next in line for a {} room: {} ({})",
                    entry.class.as_str(),
                    entry.customer_name,
                    entry.customer_id
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id, "next_in_line": next }))
        }
    }
    Ok(())
}

fn annotate(
    id: &str,
    note: &str,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.ledger_mut().annotate(id, note)?;

    match format {
        OutputFormat::Human => println!("Booking {id} annotated"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
    Ok(())
}
