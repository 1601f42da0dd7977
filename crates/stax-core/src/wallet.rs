//! User wallet persistence
//!
//! Which catalog cards the user owns, stored as a small JSON file. Insertion
//! order is preserved and fed straight to the engine, where it doubles as
//! the tie-break order, so load/save must never reorder cards.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Cards seeded into a brand-new wallet, matching the hosted onboarding flow
const STARTER_CARD_IDS: &[&str] = &[
    "amex-gold",
    "chase-sapphire-preferred",
    "citi-double-cash",
    "chase-freedom-unlimited",
];

/// One owned card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletCard {
    pub card_id: String,
    pub added_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// The user's owned-card list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(default)]
    pub cards: Vec<WalletCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_card_id: Option<String>,
}

impl Wallet {
    /// Wallet pre-loaded with the starter cards, first one as default
    pub fn starter() -> Self {
        let now = Utc::now();
        Self {
            cards: STARTER_CARD_IDS
                .iter()
                .map(|id| WalletCard {
                    card_id: id.to_string(),
                    added_at: now,
                    nickname: None,
                })
                .collect(),
            default_card_id: Some(STARTER_CARD_IDS[0].to_string()),
        }
    }

    /// Owned card ids in insertion order (the engine's tie-break order)
    pub fn card_ids(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.card_id.clone()).collect()
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.cards.iter().any(|card| card.card_id == card_id)
    }

    /// Add a card. Returns false if it was already present. The first card
    /// added to an empty wallet becomes the default.
    pub fn add(&mut self, card_id: &str) -> bool {
        if self.contains(card_id) {
            return false;
        }
        self.cards.push(WalletCard {
            card_id: card_id.to_string(),
            added_at: Utc::now(),
            nickname: None,
        });
        if self.default_card_id.is_none() {
            self.default_card_id = Some(card_id.to_string());
        }
        true
    }

    /// Remove a card. Returns false if it wasn't present. Removing the
    /// default promotes the earliest remaining card.
    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.card_id != card_id);
        if self.cards.len() == before {
            return false;
        }
        if self.default_card_id.as_deref() == Some(card_id) {
            self.default_card_id = self.cards.first().map(|card| card.card_id.clone());
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// JSON-file wallet store.
///
/// First load on a fresh path seeds and saves the starter wallet, so a new
/// install has something to recommend from.
pub struct WalletStore {
    path: PathBuf,
}

impl WalletStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the wallet, seeding the starter wallet when the file is missing
    pub fn load(&self) -> Result<Wallet> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no wallet file; seeding starter wallet");
            let wallet = Wallet::starter();
            self.save(&wallet)?;
            return Ok(wallet);
        }
        let json = std::fs::read_to_string(&self.path)?;
        let wallet: Wallet = serde_json::from_str(&json)
            .map_err(|e| Error::Wallet(format!("{}: {}", self.path.display(), e)))?;
        debug!(cards = wallet.len(), "wallet loaded");
        Ok(wallet)
    }

    /// Write the wallet atomically (sibling temp file + rename)
    pub fn save(&self, wallet: &Wallet) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(wallet)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), cards = wallet.len(), "wallet saved");
        Ok(())
    }
}
