//! Service menu commands.

use std::path::Path;

use innkeep::record::{Service, ServiceCategory};

use crate::cli::{ServiceAddArgs, ServiceCommands, ServiceListArgs};
use crate::output::{OutputFormat, money, table};

/// Dispatch a `service` subcommand
pub fn run(
    cmd: &ServiceCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ServiceCommands::List(args) => list(args, data_dir, format),
        ServiceCommands::Show { id } => show(id, data_dir, format),
        ServiceCommands::Add(args) => add(args, data_dir, format),
        ServiceCommands::SetRate { id, rate } => set_rate(id, *rate, data_dir, format),
        ServiceCommands::Enable { id } => set_available(id, true, data_dir, format),
        ServiceCommands::Disable { id } => set_available(id, false, data_dir, format),
    }
}

fn list(
    args: &ServiceListArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let wanted = args.category.map(ServiceCategory::from);
    let services: Vec<&Service> = desk
        .services()
        .iter()
        .filter(|service| wanted.is_none_or(|category| service.category() == category))
        .filter(|service| !args.available || service.is_available())
        .collect();

    match format {
        OutputFormat::Human => {
            if services.is_empty() {
                println!("No services matched.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = services
                .iter()
                .map(|service| {
                    vec![
                        service.id().to_string(),
                        service.name().to_string(),
                        service.category().as_str().to_string(),
                        money(service.rate()),
                        service.unit().as_str().to_string(),
                        if service.is_available() { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            table(&["ID", "NAME", "CATEGORY", "RATE", "UNIT", "OPEN"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&services)?),
    }
    Ok(())
}

fn show(id: &str, data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let service = desk.services().service(id)?;

    match format {
        OutputFormat::Human => {
            println!("Service {}: {}", service.id(), service.name());
            println!("  Category   {}", service.category().as_str());
            println!("  Rate       {} {}", money(service.rate()), service.unit().as_str());
            println!("  Bookable   {}", if service.is_available() { "yes" } else { "no" });
            println!("  Min order  {}", service.min_order());
            if !service.description().is_empty() {
                println!("  About      {}", service.description());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(service)?),
    }
    Ok(())
}

fn add(
    args: &ServiceAddArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let id = desk.services_mut().add_service(
        args.name.clone(),
        ServiceCategory::from(args.category),
        args.rate,
        args.unit.into(),
        args.min_order,
        args.description.clone(),
    )?;

    match format {
        OutputFormat::Human => println!("Service {id} added: {}", args.name),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
    Ok(())
}

fn set_rate(
    id: &str,
    rate: i64,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.services_mut().set_rate(id, rate)?;

    match format {
        OutputFormat::Human => println!("Service {id} now rates {}", money(rate)),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "rate": rate })),
    }
    Ok(())
}

fn set_available(
    id: &str,
    available: bool,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.services_mut().set_available(id, available)?;

    match format {
        OutputFormat::Human => {
            if available {
                println!("Service {id} is back on the menu");
            } else {
                println!("Service {id} is off the menu");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id, "available": available }))
        }
    }
    Ok(())
}
