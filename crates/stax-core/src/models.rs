//! Domain models for Stax

use serde::{Deserialize, Serialize};

/// Normalized spending categories derived from merchant category codes.
///
/// Every merchant and every reward-structure entry resolves to exactly one
/// of these buckets; codes we don't recognize resolve to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendCategory {
    Dining,
    Grocery,
    Gas,
    Drugstore,
    Travel,
    Entertainment,
    Streaming,
    Transit,
    OnlineShopping,
    OfficeSupplies,
    Shipping,
    Fitness,
    Other,
}

impl SpendCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dining => "dining",
            Self::Grocery => "grocery",
            Self::Gas => "gas",
            Self::Drugstore => "drugstore",
            Self::Travel => "travel",
            Self::Entertainment => "entertainment",
            Self::Streaming => "streaming",
            Self::Transit => "transit",
            Self::OnlineShopping => "online_shopping",
            Self::OfficeSupplies => "office_supplies",
            Self::Shipping => "shipping",
            Self::Fitness => "fitness",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for SpendCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dining" => Ok(Self::Dining),
            "grocery" => Ok(Self::Grocery),
            "gas" => Ok(Self::Gas),
            "drugstore" => Ok(Self::Drugstore),
            "travel" => Ok(Self::Travel),
            "entertainment" => Ok(Self::Entertainment),
            "streaming" => Ok(Self::Streaming),
            "online_shopping" | "online" => Ok(Self::OnlineShopping),
            "transit" => Ok(Self::Transit),
            "office_supplies" | "office" => Ok(Self::OfficeSupplies),
            "shipping" => Ok(Self::Shipping),
            "fitness" | "gym" => Ok(Self::Fitness),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown spend category: {}", s)),
        }
    }
}

impl std::fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The unit a card's rewards are denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardType {
    Points,
    Cashback,
    Miles,
}

impl RewardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Cashback => "cashback",
            Self::Miles => "miles",
        }
    }
}

impl std::str::FromStr for RewardType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "cashback" | "cash_back" => Ok(Self::Cashback),
            "miles" => Ok(Self::Miles),
            _ => Err(format!("Unknown reward type: {}", s)),
        }
    }
}

impl std::fmt::Display for RewardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Card payment networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category-specific reward tier on a card.
///
/// List order matters: when a card carries more than one entry for the same
/// category, the first entry in the list wins the lookup. Some catalog cards
/// rely on this (e.g. separate hotel/flight tiers both tagged `travel`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardStructure {
    pub category: SpendCategory,
    /// Reward rate per dollar spent, denominated in the card's reward type
    pub multiplier: f64,
    pub description: String,
}

/// An immutable card catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub network: Network,
    pub annual_fee: f64,
    /// Multiplier applied when no category entry matches
    pub base_reward: f64,
    pub reward_type: RewardType,
    #[serde(default)]
    pub reward_structure: Vec<RewardStructure>,
    /// Signup/affiliate fields belong to the apply flow; ranking ignores them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_bonus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_bonus_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_url: Option<String>,
}

impl CreditCard {
    /// Display name including the issuer, e.g. "American Express Gold Card"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.issuer, self.name)
    }
}

/// A merchant the user is (or could be) paying at.
///
/// Supplied by the location/detection layer; read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub category: SpendCategory,
    pub mcc_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// A ranked card suggestion for a specific merchant.
///
/// Derived value, recomputed on every query and never persisted. The
/// multiplier, reason, and estimate are always produced together from the
/// same reward lookup, so they cannot drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub card: CreditCard,
    pub merchant: Merchant,
    pub multiplier: f64,
    pub estimated_reward: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spend_category_roundtrip() {
        for cat in [
            SpendCategory::Dining,
            SpendCategory::OnlineShopping,
            SpendCategory::OfficeSupplies,
            SpendCategory::Other,
        ] {
            let parsed: SpendCategory = cat.as_str().parse().unwrap();
            assert_eq!(parsed, cat);
        }
    }

    #[test]
    fn test_spend_category_aliases() {
        assert_eq!("gym".parse::<SpendCategory>().unwrap(), SpendCategory::Fitness);
        assert_eq!(
            "office".parse::<SpendCategory>().unwrap(),
            SpendCategory::OfficeSupplies
        );
        assert!("snacks".parse::<SpendCategory>().is_err());
    }

    #[test]
    fn test_reward_type_serde() {
        let json = serde_json::to_string(&RewardType::Cashback).unwrap();
        assert_eq!(json, "\"cashback\"");
        let back: RewardType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RewardType::Cashback);
    }
}
