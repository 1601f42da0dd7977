//! Stax CLI - Which card should I swipe?
//!
//! Usage:
//!   stax recommend --mcc 5812      Best card for a restaurant
//!   stax rank --mcc 5411           Full wallet ranking for a supermarket
//!   stax upsell --mcc 5541         Better card you don't own yet
//!   stax cards --search sapphire   Browse the catalog
//!   stax wallet add amex-gold      Manage owned cards

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let catalog = commands::load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Recommend { mcc, merchant, demo } => commands::cmd_recommend(
            &catalog,
            &cli.wallet,
            mcc.as_deref(),
            merchant.as_deref(),
            demo,
            cli.json,
        ),
        Commands::Rank { mcc, merchant } => {
            commands::cmd_rank(&catalog, &cli.wallet, &mcc, merchant.as_deref(), cli.json)
        }
        Commands::Upsell { mcc } => commands::cmd_upsell(&catalog, &cli.wallet, &mcc, cli.json),
        Commands::Cards { action, issuer, search } => match action {
            Some(CardsAction::Show { id }) => commands::cmd_cards_show(&catalog, &id, cli.json),
            None => commands::cmd_cards_list(
                &catalog,
                issuer.as_deref(),
                search.as_deref(),
                cli.json,
            ),
        },
        Commands::Wallet { action } => match action {
            None => commands::cmd_wallet_list(&catalog, &cli.wallet, cli.json),
            Some(WalletAction::Add { id }) => {
                commands::cmd_wallet_add(&catalog, &cli.wallet, &id)
            }
            Some(WalletAction::Remove { id }) => commands::cmd_wallet_remove(&cli.wallet, &id),
        },
        Commands::Demo => commands::cmd_demo(&catalog, &cli.wallet, cli.json),
    }
}
