use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("innkeep=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Seed => commands::desk::seed(&cli.data_dir, cli.format),
        Commands::Summary => commands::desk::summary(&cli.data_dir, cli.format),
        Commands::Room(cmd) => commands::rooms::run(cmd, &cli.data_dir, cli.format),
        Commands::Service(cmd) => commands::services::run(cmd, &cli.data_dir, cli.format),
        Commands::User(cmd) => commands::users::run(cmd, &cli.data_dir, cli.format),
        Commands::Booking(cmd) => commands::bookings::run(cmd, &cli.data_dir, cli.format),
    }
}
