//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stax - Know which card to swipe
#[derive(Parser)]
#[command(name = "stax")]
#[command(about = "Credit card reward recommendations by merchant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Wallet file path
    #[arg(long, default_value = "wallet.json", global = true)]
    pub wallet: PathBuf,

    /// Card catalog file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend the best card for a merchant
    Recommend {
        /// Merchant category code, e.g. 5812 for restaurants
        #[arg(short, long, conflicts_with = "demo")]
        mcc: Option<String>,

        /// Merchant display name
        #[arg(short = 'n', long, requires = "mcc")]
        merchant: Option<String>,

        /// Use the current demo merchant instead of an MCC
        #[arg(long)]
        demo: bool,
    },

    /// Rank every owned card for a merchant
    Rank {
        /// Merchant category code
        #[arg(short, long)]
        mcc: String,

        /// Merchant display name
        #[arg(short = 'n', long)]
        merchant: Option<String>,
    },

    /// Suggest a better card you don't own yet
    Upsell {
        /// Merchant category code
        #[arg(short, long)]
        mcc: String,
    },

    /// Browse the card catalog
    Cards {
        #[command(subcommand)]
        action: Option<CardsAction>,

        /// Filter by issuer
        #[arg(long, conflicts_with = "search")]
        issuer: Option<String>,

        /// Search card names and issuers
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage your wallet
    Wallet {
        #[command(subcommand)]
        action: Option<WalletAction>,
    },

    /// Cycle through the demo merchants and show each pick
    Demo,
}

#[derive(Subcommand)]
pub enum CardsAction {
    /// Show one card in full
    Show {
        /// Card id, e.g. amex-gold
        id: String,
    },
}

#[derive(Subcommand)]
pub enum WalletAction {
    /// Add a card to the wallet
    Add {
        /// Card id from the catalog
        id: String,
    },
    /// Remove a card from the wallet
    Remove {
        /// Card id
        id: String,
    },
}
