//! Room catalog commands.

use std::path::Path;

use innkeep::record::{Room, RoomClass, RoomStatus};

use crate::cli::{RoomAddArgs, RoomCommands, RoomListArgs};
use crate::output::{OutputFormat, money, table};

/// Dispatch a `room` subcommand
pub fn run(
    cmd: &RoomCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        RoomCommands::List(args) => list(args, data_dir, format),
        RoomCommands::Show { number } => show(number, data_dir, format),
        RoomCommands::Add(args) => add(args, data_dir, format),
        RoomCommands::SetStatus { number, status } => {
            set_status(number, RoomStatus::from(*status), data_dir, format)
        }
        RoomCommands::SetRate { number, rate } => set_rate(number, *rate, data_dir, format),
        RoomCommands::Remove { number } => remove(number, data_dir, format),
    }
}

fn list(
    args: &RoomListArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let wanted = args.class.map(RoomClass::from);
    let rooms: Vec<&Room> = desk
        .rooms()
        .iter()
        .filter(|room| wanted.is_none_or(|class| room.class() == class))
        .filter(|room| !args.free || room.is_available())
        .collect();

    match format {
        OutputFormat::Human => {
            if rooms.is_empty() {
                println!("No rooms matched.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = rooms
                .iter()
                .map(|room| {
                    vec![
                        room.number().to_string(),
                        room.class().as_str().to_string(),
                        room.status().as_str().to_string(),
                        money(room.nightly_rate()),
                        room.floor().to_string(),
                        room.capacity().to_string(),
                    ]
                })
                .collect();
            table(&["NUMBER", "CLASS", "STATUS", "RATE", "FLOOR", "SLEEPS"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&rooms)?),
    }
    Ok(())
}

fn show(
    number: &str,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let room = desk.rooms().room(number)?;

    match format {
        OutputFormat::Human => {
            println!("Room {}", room.number());
            println!("  Class      {}", room.class().as_str());
            println!("  Status     {}", room.status().as_str());
            println!("  Rate       {} per night", money(room.nightly_rate()));
            println!("  Floor      {}", room.floor());
            println!("  Sleeps     {}", room.capacity());
            println!("  Balcony    {}", if room.has_balcony() { "yes" } else { "no" });
            println!("  Sea view   {}", if room.has_sea_view() { "yes" } else { "no" });
            println!("  Amenities  {}", room.amenities());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(room)?),
    }
    Ok(())
}

fn add(
    args: &RoomAddArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let room = Room::new(
        RoomClass::from(args.class),
        args.number.clone(),
        args.floor,
        args.balcony,
        args.sea_view,
    );
    desk.rooms_mut().add_room(room)?;

    match format {
        OutputFormat::Human => println!("Room {} added", args.number),
        OutputFormat::Json => println!("{}", serde_json::json!({ "number": args.number })),
    }
    Ok(())
}

fn set_status(
    number: &str,
    status: RoomStatus,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.rooms_mut().set_status(number, status)?;

    match format {
        OutputFormat::Human => println!("Room {number} is now {}", status.as_str()),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "number": number, "status": status.as_str() })
            )
        }
    }
    Ok(())
}

fn set_rate(
    number: &str,
    rate: i64,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.rooms_mut().set_nightly_rate(number, rate)?;

    match format {
        OutputFormat::Human => println!("Room {number} now rates {} per night", money(rate)),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "number": number, "rate": rate }))
        }
    }
    Ok(())
}

fn remove(
    number: &str,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let room = desk.rooms_mut().remove_room(number)?;

    match format {
        OutputFormat::Human => {
            println!("Room {} retired ({})", room.number(), room.class().as_str())
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&room)?),
    }
    Ok(())
}
