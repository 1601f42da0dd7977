//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `cards` - Catalog browsing commands (list, search, show)
//! - `recommend` - Recommendation commands (recommend, rank, upsell, demo)
//! - `wallet` - Wallet management commands (list, add, remove)

pub mod cards;
pub mod recommend;
pub mod wallet;

// Re-export command functions for main.rs
pub use cards::*;
pub use recommend::*;
pub use wallet::*;

use std::path::Path;

use anyhow::{Context, Result};

use stax_core::{CardCatalog, Recommendation, Wallet, WalletStore};

/// Load the built-in catalog, or an external catalog file when given
pub fn load_catalog(path: Option<&Path>) -> Result<CardCatalog> {
    match path {
        Some(path) => CardCatalog::from_json_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(CardCatalog::builtin()),
    }
}

/// Load the wallet file, seeding the starter wallet on first run
pub fn open_wallet(path: &Path) -> Result<Wallet> {
    WalletStore::new(path)
        .load()
        .with_context(|| format!("failed to load wallet from {}", path.display()))
}

/// One-line summary of a recommendation: name, rate, and estimate
pub fn recommendation_line(rec: &Recommendation) -> String {
    format!(
        "{} - {} ({})",
        rec.card.full_name(),
        rec.reason,
        rec.estimated_reward
    )
}
