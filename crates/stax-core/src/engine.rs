//! Recommendation engine
//!
//! Ranks a user's cards for a merchant and finds upsell opportunities
//! (catalog cards the user doesn't own that would beat everything they do).
//! Every operation is a pure computation over the injected catalog and the
//! caller-supplied wallet: no ambient state, no I/O, and no failure paths:
//! missing data degrades to `None` or an empty list.
//!
//! Tie-breaks are part of the contract, not incidental: the first wallet
//! card reaching the maximum multiplier wins, and sorts are stable so equal
//! multipliers keep wallet order. Callers relying on reproducible output
//! (notifications, analytics) depend on this.

use tracing::debug;

use crate::catalog::CardCatalog;
use crate::models::{CreditCard, Merchant, Recommendation};
use crate::rewards::{estimate_reward_default, multiplier_for, reward_reason};

/// Recommendation queries over one immutable catalog.
///
/// Cheap to construct; holds only a borrow. Safe to share across threads
/// since nothing here mutates.
pub struct Recommender<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> Recommender<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        Self { catalog }
    }

    /// The best card the user already owns for this merchant.
    ///
    /// Wallet ids that don't resolve in the catalog are dropped (the wallet
    /// and catalog can drift after a catalog update). Returns `None` when
    /// nothing resolves. Ties go to the earliest card in wallet order.
    pub fn best_owned_card(
        &self,
        merchant: &Merchant,
        owned_ids: &[String],
    ) -> Option<Recommendation> {
        let owned = self.resolve_owned(owned_ids);
        if owned.is_empty() {
            debug!(merchant = %merchant.name, "no owned cards resolve; no recommendation");
            return None;
        }

        let mut best = owned[0];
        let mut best_multiplier = multiplier_for(best, merchant.category);
        for &card in &owned {
            let multiplier = multiplier_for(card, merchant.category);
            // Strict > keeps the earliest card on ties
            if multiplier > best_multiplier {
                best_multiplier = multiplier;
                best = card;
            }
        }

        debug!(
            merchant = %merchant.name,
            card = %best.id,
            multiplier = best_multiplier,
            "best owned card"
        );
        Some(self.recommend(best, merchant))
    }

    /// Up to three runner-up cards from the wallet, best first.
    ///
    /// `exclude_id` is the already-recommended card and never appears in the
    /// output. The sort is stable, so equal multipliers keep wallet order.
    pub fn alternative_cards(
        &self,
        merchant: &Merchant,
        owned_ids: &[String],
        exclude_id: &str,
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .resolve_owned(owned_ids)
            .into_iter()
            .filter(|card| card.id != exclude_id)
            .map(|card| self.recommend(card, merchant))
            .collect();

        recommendations.sort_by(|a, b| {
            b.multiplier
                .partial_cmp(&a.multiplier)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations.truncate(3);
        recommendations
    }

    /// The best catalog card the user does *not* own, if it strictly beats
    /// their current best. This is the upsell query.
    ///
    /// Returns `None` when every catalog card is already owned, or when no
    /// non-owned card earns strictly more than the wallet's best (owning an
    /// equally good card means there is nothing to pitch). An empty wallet
    /// compares against a baseline of zero, so any catalog card qualifies.
    pub fn best_card_overall(
        &self,
        merchant: &Merchant,
        owned_ids: &[String],
    ) -> Option<Recommendation> {
        let non_owned: Vec<&CreditCard> = self
            .catalog
            .all()
            .iter()
            .filter(|card| !owned_ids.iter().any(|id| *id == card.id))
            .collect();

        if non_owned.is_empty() {
            return None;
        }

        let owned_best_multiplier = self
            .best_owned_card(merchant, owned_ids)
            .map(|rec| rec.multiplier)
            .unwrap_or(0.0);

        let mut best: Option<&CreditCard> = None;
        let mut best_multiplier = 0.0;
        for card in non_owned {
            let multiplier = multiplier_for(card, merchant.category);
            if multiplier > best_multiplier {
                best_multiplier = multiplier;
                best = Some(card);
            }
        }

        let best = best?;
        if best_multiplier <= owned_best_multiplier {
            debug!(
                merchant = %merchant.name,
                best_non_owned = %best.id,
                multiplier = best_multiplier,
                owned_best = owned_best_multiplier,
                "no upsell; owned cards are at least as good"
            );
            return None;
        }

        debug!(merchant = %merchant.name, card = %best.id, "upsell candidate");
        Some(self.recommend(best, merchant))
    }

    /// Every owned card ranked for this merchant, best first.
    ///
    /// Same resolution and ordering rules as [`Self::alternative_cards`] but
    /// with no exclusion and no truncation. Its first element always agrees
    /// with [`Self::best_owned_card`].
    pub fn all_cards_ranked(
        &self,
        merchant: &Merchant,
        owned_ids: &[String],
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = self
            .resolve_owned(owned_ids)
            .into_iter()
            .map(|card| self.recommend(card, merchant))
            .collect();

        recommendations.sort_by(|a, b| {
            b.multiplier
                .partial_cmp(&a.multiplier)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        recommendations
    }

    /// Resolve wallet ids against the catalog, keeping wallet order and
    /// silently dropping ids the catalog no longer carries
    fn resolve_owned(&self, owned_ids: &[String]) -> Vec<&'a CreditCard> {
        owned_ids
            .iter()
            .filter_map(|id| {
                let card = self.catalog.get(id);
                if card.is_none() {
                    debug!(card = %id, "wallet card not in catalog; skipping");
                }
                card
            })
            .collect()
    }

    /// Assemble a recommendation from one reward lookup so the multiplier,
    /// reason, and estimate can never disagree
    fn recommend(&self, card: &CreditCard, merchant: &Merchant) -> Recommendation {
        let multiplier = multiplier_for(card, merchant.category);
        Recommendation {
            multiplier,
            estimated_reward: estimate_reward_default(multiplier, card.reward_type),
            reason: reward_reason(card, merchant.category),
            card: card.clone(),
            merchant: merchant.clone(),
        }
    }
}
