//! Wallet management command implementations (list, add, remove)

use std::path::Path;

use anyhow::{bail, Context, Result};

use stax_core::rewards::format_card_summary;
use stax_core::{CardCatalog, WalletStore};

use super::open_wallet;

pub fn cmd_wallet_list(catalog: &CardCatalog, wallet_path: &Path, json: bool) -> Result<()> {
    let wallet = open_wallet(wallet_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&wallet)?);
        return Ok(());
    }

    if wallet.is_empty() {
        println!("Your wallet is empty. Add a card with:");
        println!("  stax wallet add <card-id>");
        return Ok(());
    }

    println!();
    println!("👛 Your wallet ({} cards)", wallet.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for owned in &wallet.cards {
        let default_marker = if wallet.default_card_id.as_deref() == Some(owned.card_id.as_str()) {
            " (default)"
        } else {
            ""
        };
        match catalog.get(&owned.card_id) {
            Some(card) => println!(
                "   {:<28} {}{}",
                owned.card_id,
                format_card_summary(card),
                default_marker
            ),
            // Wallet can reference cards a newer catalog dropped
            None => println!("   {:<28} (not in catalog){}", owned.card_id, default_marker),
        }
    }
    println!();
    Ok(())
}

pub fn cmd_wallet_add(catalog: &CardCatalog, wallet_path: &Path, id: &str) -> Result<()> {
    let Some(card) = catalog.get(id) else {
        bail!("no card with id '{}' (try: stax cards --search <name>)", id);
    };

    let store = WalletStore::new(wallet_path);
    let mut wallet = store.load().context("failed to load wallet")?;

    if !wallet.add(id) {
        println!("{} is already in your wallet.", card.full_name());
        return Ok(());
    }
    store.save(&wallet).context("failed to save wallet")?;
    println!("Added {} to your wallet.", card.full_name());
    Ok(())
}

pub fn cmd_wallet_remove(wallet_path: &Path, id: &str) -> Result<()> {
    let store = WalletStore::new(wallet_path);
    let mut wallet = store.load().context("failed to load wallet")?;

    if !wallet.remove(id) {
        bail!("'{}' is not in your wallet", id);
    }
    store.save(&wallet).context("failed to save wallet")?;
    println!("Removed {} from your wallet.", id);
    Ok(())
}
