mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = cli::Cli::parse();
    let inventory_path = config::resolve_inventory_path(cli.inventory)?;

    match cli.command {
        cli::Commands::Init => commands::init::handle(&inventory_path),
        cli::Commands::ImportBadges { badges } => {
            commands::import_badges::handle(&badges, &inventory_path)
        }
        cli::Commands::List => commands::list::handle(&inventory_path),
        cli::Commands::Redact {
            src_dir,
            dst_dir,
            overwrite,
        } => commands::redact::handle(&src_dir, &dst_dir, &inventory_path, overwrite),
        cli::Commands::Unredact {
            src_dir,
            dst_dir,
            overwrite,
        } => commands::unredact::handle(&src_dir, &dst_dir, &inventory_path, overwrite),
    }
}
