//! Merchant category code (MCC) classification
//!
//! Maps raw four-digit MCC strings to normalized [`SpendCategory`] buckets.
//! The lookup is total: codes outside the table classify as `Other` rather
//! than failing. Classification drives every downstream reward lookup, so
//! the table mirrors the categories the card catalog actually rewards.

use crate::models::SpendCategory;

/// MCC -> category table. Exact string match only.
const MCC_TABLE: &[(&str, SpendCategory)] = &[
    // Dining
    ("5812", SpendCategory::Dining), // Eating places, restaurants
    ("5813", SpendCategory::Dining), // Bars, taverns, nightclubs
    ("5814", SpendCategory::Dining), // Fast food
    // Grocery
    ("5411", SpendCategory::Grocery), // Supermarkets
    ("5422", SpendCategory::Grocery), // Freezer and meat lockers
    // Gas
    ("5541", SpendCategory::Gas), // Service stations
    ("5542", SpendCategory::Gas), // Automated fuel dispensers
    // Drugstore
    ("5912", SpendCategory::Drugstore),
    // Travel - airlines
    ("3000", SpendCategory::Travel),
    ("3001", SpendCategory::Travel),
    ("4511", SpendCategory::Travel),
    // Travel - hotels
    ("7011", SpendCategory::Travel),
    // Entertainment
    ("7832", SpendCategory::Entertainment), // Movie theaters
    ("7922", SpendCategory::Entertainment), // Theatrical producers
    ("7941", SpendCategory::Entertainment), // Sports venues
    // Transit
    ("4111", SpendCategory::Transit), // Local commuter transport
    ("4121", SpendCategory::Transit), // Taxis and rideshare
];

impl SpendCategory {
    /// Classify a raw merchant category code.
    ///
    /// Total and pure: unknown codes are not an error, they are the `Other`
    /// bucket by design.
    pub fn from_mcc(code: &str) -> SpendCategory {
        MCC_TABLE
            .iter()
            .find(|(mcc, _)| *mcc == code)
            .map(|(_, category)| *category)
            .unwrap_or(SpendCategory::Other)
    }
}
