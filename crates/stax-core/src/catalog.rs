//! Card catalog
//!
//! Read-only universe of credit cards the engine ranks over. Ships with a
//! built-in catalog embedded at compile time; deployments that sync cards
//! from a backend can load a JSON file with the same schema instead. The
//! catalog never changes after construction, which is what lets the ranker
//! stay a pure function of its arguments.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::CreditCard;

/// Built-in card data, same entries as the hosted catalog
const BUILTIN_CARDS_JSON: &str = include_str!("data/cards.json");

/// Immutable mapping from card id to card, preserving catalog order
#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<CreditCard>,
    by_id: HashMap<String, usize>,
}

impl CardCatalog {
    /// Build a catalog from a list of cards.
    ///
    /// Rejects duplicate ids and non-positive multipliers; a corrupt catalog
    /// is a fatal condition for the caller, unlike anything inside the
    /// ranking path.
    pub fn new(cards: Vec<CreditCard>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(cards.len());
        for (idx, card) in cards.iter().enumerate() {
            if card.base_reward <= 0.0 {
                return Err(Error::Catalog(format!(
                    "card '{}' has non-positive base reward {}",
                    card.id, card.base_reward
                )));
            }
            for reward in &card.reward_structure {
                if reward.multiplier <= 0.0 {
                    return Err(Error::Catalog(format!(
                        "card '{}' has non-positive multiplier {} for {}",
                        card.id, reward.multiplier, reward.category
                    )));
                }
            }
            if by_id.insert(card.id.clone(), idx).is_some() {
                return Err(Error::Catalog(format!("duplicate card id '{}'", card.id)));
            }
        }
        debug!(cards = cards.len(), "catalog loaded");
        Ok(Self { cards, by_id })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        // The embedded JSON is validated by tests; a failure here is a build
        // defect, not a runtime condition.
        Self::from_json(BUILTIN_CARDS_JSON)
            .unwrap_or_else(|e| panic!("built-in card catalog is invalid: {}", e))
    }

    /// Parse a catalog from a JSON array of cards
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CreditCard> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Load an externally supplied catalog file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn get(&self, id: &str) -> Option<&CreditCard> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    /// All cards in catalog order
    pub fn all(&self) -> &[CreditCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn by_issuer(&self, issuer: &str) -> Vec<&CreditCard> {
        self.cards
            .iter()
            .filter(|card| card.issuer.eq_ignore_ascii_case(issuer))
            .collect()
    }

    /// Case-insensitive substring search over card name and issuer
    pub fn search(&self, query: &str) -> Vec<&CreditCard> {
        let query = query.to_lowercase();
        self.cards
            .iter()
            .filter(|card| {
                card.name.to_lowercase().contains(&query)
                    || card.issuer.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Network, RewardType};

    #[test]
    fn test_builtin_catalog_parses_and_validates() {
        let catalog = CardCatalog::builtin();
        assert!(catalog.len() > 30);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_builtin_catalog_lookups() {
        let catalog = CardCatalog::builtin();

        let gold = catalog.get("amex-gold").unwrap();
        assert_eq!(gold.issuer, "American Express");
        assert_eq!(gold.reward_type, RewardType::Points);
        assert_eq!(gold.network, Network::Amex);
        assert_eq!(gold.annual_fee, 250.0);

        assert!(catalog.get("no-such-card").is_none());
    }

    #[test]
    fn test_builtin_catalog_keeps_duplicate_travel_tiers() {
        // Venture X lists hotels before flights under the same category; the
        // reward model depends on that order surviving the load.
        let catalog = CardCatalog::builtin();
        let venture_x = catalog.get("capital-one-venture-x").unwrap();
        let travel: Vec<_> = venture_x
            .reward_structure
            .iter()
            .filter(|r| r.category == crate::models::SpendCategory::Travel)
            .collect();
        assert_eq!(travel.len(), 2);
        assert_eq!(travel[0].multiplier, 10.0);
        assert_eq!(travel[1].multiplier, 5.0);
    }

    #[test]
    fn test_by_issuer_and_search() {
        let catalog = CardCatalog::builtin();

        let chase = catalog.by_issuer("Chase");
        assert!(chase.len() >= 5);
        assert!(chase.iter().all(|c| c.issuer == "Chase"));

        let sapphire = catalog.search("sapphire");
        assert_eq!(sapphire.len(), 2);

        let amex = catalog.search("american express");
        assert!(amex.len() >= 5);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let catalog = CardCatalog::builtin();
        let mut cards = catalog.all().to_vec();
        cards.push(cards[0].clone());
        let err = CardCatalog::new(cards).unwrap_err();
        assert!(err.to_string().contains("duplicate card id"));
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        let catalog = CardCatalog::builtin();
        let mut cards = catalog.all().to_vec();
        cards[0].reward_structure[0].multiplier = 0.0;
        assert!(CardCatalog::new(cards).is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(CardCatalog::from_json("{not json").is_err());
        assert!(CardCatalog::from_json("[{\"id\": \"x\"}]").is_err());
    }
}
