//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::PathBuf;

use stax_core::{CardCatalog, WalletStore};

use crate::commands;

fn temp_wallet_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("wallet.json")
}

// ========== Catalog Loading Tests ==========

#[test]
fn test_load_catalog_builtin() {
    let catalog = commands::load_catalog(None).unwrap();
    assert!(catalog.get("amex-gold").is_some());
}

#[test]
fn test_load_catalog_missing_file() {
    let result = commands::load_catalog(Some(std::path::Path::new("/no/such/catalog.json")));
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("failed to load catalog"));
}

// ========== Recommend Command Tests ==========

#[test]
fn test_cmd_recommend_with_mcc() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    let result = commands::cmd_recommend(
        &catalog,
        &temp_wallet_path(&dir),
        Some("5812"),
        Some("Chipotle"),
        false,
        false,
    );
    assert!(result.is_ok());
}

#[test]
fn test_cmd_recommend_demo_json() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    let result =
        commands::cmd_recommend(&catalog, &temp_wallet_path(&dir), None, None, true, true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_rank_and_upsell() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    let wallet_path = temp_wallet_path(&dir);

    assert!(commands::cmd_rank(&catalog, &wallet_path, "5411", None, false).is_ok());
    assert!(commands::cmd_upsell(&catalog, &wallet_path, "5411", false).is_ok());
}

#[test]
fn test_cmd_demo() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    assert!(commands::cmd_demo(&catalog, &temp_wallet_path(&dir), false).is_ok());
}

// ========== Cards Command Tests ==========

#[test]
fn test_cmd_cards_list_and_show() {
    let catalog = CardCatalog::builtin();
    assert!(commands::cmd_cards_list(&catalog, None, None, false).is_ok());
    assert!(commands::cmd_cards_list(&catalog, Some("Chase"), None, false).is_ok());
    assert!(commands::cmd_cards_list(&catalog, None, Some("sapphire"), false).is_ok());
    assert!(commands::cmd_cards_show(&catalog, "amex-gold", false).is_ok());
}

#[test]
fn test_cmd_cards_show_unknown_id_fails() {
    let catalog = CardCatalog::builtin();
    let result = commands::cmd_cards_show(&catalog, "no-such-card", false);
    assert!(result.is_err());
}

// ========== Wallet Command Tests ==========

#[test]
fn test_cmd_wallet_add_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    let wallet_path = temp_wallet_path(&dir);

    // First touch seeds the starter wallet
    assert!(commands::cmd_wallet_list(&catalog, &wallet_path, false).is_ok());

    commands::cmd_wallet_add(&catalog, &wallet_path, "apple-card").unwrap();
    let wallet = WalletStore::new(&wallet_path).load().unwrap();
    assert!(wallet.contains("apple-card"));

    // Adding twice is a no-op, not an error
    assert!(commands::cmd_wallet_add(&catalog, &wallet_path, "apple-card").is_ok());

    commands::cmd_wallet_remove(&wallet_path, "apple-card").unwrap();
    let wallet = WalletStore::new(&wallet_path).load().unwrap();
    assert!(!wallet.contains("apple-card"));
}

#[test]
fn test_cmd_wallet_add_unknown_card_fails() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CardCatalog::builtin();
    let result = commands::cmd_wallet_add(&catalog, &temp_wallet_path(&dir), "ghost-card");
    assert!(result.is_err());
}

#[test]
fn test_cmd_wallet_remove_absent_card_fails() {
    let dir = tempfile::tempdir().unwrap();
    let wallet_path = temp_wallet_path(&dir);
    // Seed the starter wallet first
    WalletStore::new(&wallet_path).load().unwrap();

    let result = commands::cmd_wallet_remove(&wallet_path, "apple-card");
    assert!(result.is_err());
}
