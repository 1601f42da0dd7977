//! Stax Core Library
//!
//! Shared functionality for the Stax card recommendation tool:
//! - MCC classification into normalized spend categories
//! - Card reward model (per-category multipliers with base-reward floor)
//! - Reward estimates for a reference spend
//! - Recommendation engine (best owned card, alternatives, upsell, ranking)
//! - Read-only card catalog (built-in or loaded from JSON)
//! - Wallet persistence (which cards the user owns)
//! - Demo merchant provider for running without a live location source

pub mod catalog;
pub mod engine;
pub mod error;
pub mod mcc;
pub mod merchants;
pub mod models;
pub mod rewards;
pub mod wallet;

pub use catalog::CardCatalog;
pub use engine::Recommender;
pub use error::{Error, Result};
pub use merchants::{demo_merchants, merchant_for, DemoRotation, DEMO_ROTATION};
pub use models::{
    CreditCard, Merchant, Network, Recommendation, RewardStructure, RewardType, SpendCategory,
};
pub use rewards::{
    estimate_reward, estimate_reward_default, format_card_summary, multiplier_for, reward_reason,
    DEFAULT_REFERENCE_SPEND,
};
pub use wallet::{Wallet, WalletCard, WalletStore};
