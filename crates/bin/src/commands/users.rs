//! Account directory commands.

use std::path::Path;

use innkeep::record::{Profile, Role, User};

use crate::cli::{LoginArgs, RegisterCustomerArgs, RegisterStaffArgs, UserCommands, UserListArgs};
use crate::output::{OutputFormat, money, table};

/// Dispatch a `user` subcommand
pub fn run(
    cmd: &UserCommands,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        UserCommands::List(args) => list(args, data_dir, format),
        UserCommands::Show { id } => show(id, data_dir, format),
        UserCommands::RegisterCustomer(args) => register_customer(args, data_dir, format),
        UserCommands::RegisterStaff(args) => register_staff(args, data_dir, format),
        UserCommands::Login(args) => login(args, data_dir, format),
        UserCommands::Activate { id } => set_active(id, true, data_dir, format),
        UserCommands::Deactivate { id } => set_active(id, false, data_dir, format),
    }
}

fn list(
    args: &UserListArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let wanted = args.role.map(Role::from);
    let users: Vec<&User> = desk
        .users()
        .iter()
        .filter(|user| wanted.is_none_or(|role| user.role() == role))
        .collect();

    match format {
        OutputFormat::Human => {
            if users.is_empty() {
                println!("No accounts matched.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|user| {
                    vec![
                        user.id().to_string(),
                        user.name().to_string(),
                        user.role().as_str().to_string(),
                        user.email().to_string(),
                        if user.is_active() { "yes" } else { "no" }.to_string(),
                    ]
                })
                .collect();
            table(&["ID", "NAME", "ROLE", "EMAIL", "ACTIVE"], &rows);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&users)?),
    }
    Ok(())
}

fn show(id: &str, data_dir: &Path, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let user = desk.users().user(id)?;

    match format {
        OutputFormat::Human => {
            println!("Account {}: {}", user.id(), user.name());
            println!("  Role    {}", user.role().as_str());
            println!("  Email   {}", user.email());
            if !user.phone().is_empty() {
                println!("  Phone   {}", user.phone());
            }
            println!("  Active  {}", if user.is_active() { "yes" } else { "no" });
            match user.profile() {
                Profile::Customer {
                    address,
                    bookings,
                    total_spent,
                } => {
                    if !address.is_empty() {
                        println!("  Address {address}");
                    }
                    println!("  Stays   {bookings} completed, {} spent", money(*total_spent));
                }
                Profile::Staff {
                    position,
                    shift,
                    salary,
                    handled,
                } => {
                    println!("  Role    {position}, {shift} shift");
                    println!("  Salary  {}", money(*salary));
                    println!("  Handled {handled} bookings");
                }
                Profile::Owner => {}
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(user)?),
    }
    Ok(())
}

fn register_customer(
    args: &RegisterCustomerArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let id = desk.users_mut().register_customer(
        args.name.clone(),
        args.email.clone(),
        args.phone.clone(),
        args.secret.clone(),
        args.address.clone(),
    )?;

    match format {
        OutputFormat::Human => println!("Customer account {id} opened for {}", args.name),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
    Ok(())
}

fn register_staff(
    args: &RegisterStaffArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    let id = desk.users_mut().register_staff(
        args.name.clone(),
        args.email.clone(),
        args.phone.clone(),
        args.secret.clone(),
        args.position.clone(),
        args.shift.clone(),
        args.salary,
    )?;

    match format {
        OutputFormat::Human => println!("Staff account {id} opened for {}", args.name),
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id })),
    }
    Ok(())
}

fn login(
    args: &LoginArgs,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let desk = super::open_loaded(data_dir)?;
    let user = desk.users().authenticate(&args.login, &args.secret)?;

    match format {
        OutputFormat::Human => {
            println!(
                "Signed in as {} ({}, {})",
                user.name(),
                user.id(),
                user.role().as_str()
            )
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(user)?),
    }
    Ok(())
}

fn set_active(
    id: &str,
    active: bool,
    data_dir: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut desk = super::open_loaded(data_dir)?;
    desk.users_mut().set_active(id, active)?;

    match format {
        OutputFormat::Human => {
            if active {
                println!("Account {id} reactivated");
            } else {
                println!("Account {id} deactivated");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::json!({ "id": id, "active": active })),
    }
    Ok(())
}
