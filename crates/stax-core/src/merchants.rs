//! Demo merchants
//!
//! Canned merchants the app cycles through when no live location source is
//! available. Cycling state is an explicit [`DemoRotation`] value the caller
//! owns and advances; the engine itself only ever sees the resulting
//! [`Merchant`], never the rotation.

use crate::models::{Merchant, SpendCategory};

/// Categories the demo mode cycles through, in rotation order
pub const DEMO_ROTATION: &[SpendCategory] = &[
    SpendCategory::Gas,
    SpendCategory::Grocery,
    SpendCategory::Dining,
    SpendCategory::Drugstore,
];

/// (id, name, mcc, address) tuples per category
const DEMO_MERCHANTS: &[(&str, &str, &str, &str)] = &[
    ("chipotle-1", "Chipotle Mexican Grill", "5812", "123 Main St"),
    ("starbucks-1", "Starbucks", "5814", "456 Oak Ave"),
    ("olive-garden-1", "Olive Garden", "5812", "789 Elm Blvd"),
    ("whole-foods-1", "Whole Foods Market", "5411", "321 Market St"),
    ("trader-joes-1", "Trader Joe's", "5411", "654 Grocery Lane"),
    ("kroger-1", "Kroger", "5411", "987 Shop Way"),
    ("shell-1", "Shell", "5541", "111 Fuel Dr"),
    ("exxon-1", "Exxon Mobil", "5541", "222 Gas Blvd"),
    ("chevron-1", "Chevron", "5542", "333 Petro Ave"),
    ("cvs-1", "CVS Pharmacy", "5912", "444 Health St"),
    ("walgreens-1", "Walgreens", "5912", "555 Pharmacy Rd"),
    ("rite-aid-1", "Rite Aid", "5912", "666 Med Lane"),
    ("marriott-1", "Marriott Hotel", "7011", "777 Travel Blvd"),
    ("united-1", "United Airlines", "4511", "Airport Terminal A"),
    ("amc-1", "AMC Theatres", "7832", "888 Cinema Way"),
    ("uber-1", "Uber", "4121", "Mobile App"),
    ("generic-1", "Local Store", "5999", "999 Generic St"),
];

impl Merchant {
    /// Build a merchant from a raw MCC, classifying it on the way in
    pub fn from_mcc(id: &str, name: &str, mcc_code: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: SpendCategory::from_mcc(mcc_code),
            mcc_code: mcc_code.to_string(),
            address: None,
            latitude: None,
            longitude: None,
        }
    }
}

/// All demo merchants whose MCC classifies into the given category
pub fn demo_merchants(category: SpendCategory) -> Vec<Merchant> {
    DEMO_MERCHANTS
        .iter()
        .filter(|(_, _, mcc, _)| SpendCategory::from_mcc(mcc) == category)
        .map(|(id, name, mcc, address)| Merchant {
            address: Some(address.to_string()),
            ..Merchant::from_mcc(id, name, mcc)
        })
        .collect()
}

/// The canonical demo merchant for a category (first table entry), falling
/// back to the generic `other` merchant for categories with no demo data
pub fn merchant_for(category: SpendCategory) -> Merchant {
    demo_merchants(category)
        .into_iter()
        .next()
        .unwrap_or_else(|| Merchant {
            address: Some("999 Generic St".to_string()),
            ..Merchant::from_mcc("generic-1", "Local Store", "5999")
        })
}

/// Explicit demo-category cursor.
///
/// The mobile app kept this as module-global mutable state; here the caller
/// owns the value and the rest of the crate stays a pure function of its
/// arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoRotation {
    index: usize,
}

impl DemoRotation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the rotation at a specific category, if it participates
    pub fn starting_at(category: SpendCategory) -> Self {
        let index = DEMO_ROTATION
            .iter()
            .position(|&c| c == category)
            .unwrap_or(0);
        Self { index }
    }

    pub fn current(&self) -> SpendCategory {
        DEMO_ROTATION[self.index]
    }

    /// Step to the next category, wrapping around
    pub fn advance(&mut self) -> SpendCategory {
        self.index = (self.index + 1) % DEMO_ROTATION.len();
        self.current()
    }

    /// The merchant for the current rotation stop
    pub fn merchant(&self) -> Merchant {
        merchant_for(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_merchants_classify_into_their_category() {
        for category in [
            SpendCategory::Dining,
            SpendCategory::Grocery,
            SpendCategory::Gas,
            SpendCategory::Drugstore,
        ] {
            let merchants = demo_merchants(category);
            assert_eq!(merchants.len(), 3, "{} should have 3 demo merchants", category);
            assert!(merchants.iter().all(|m| m.category == category));
        }
        assert_eq!(demo_merchants(SpendCategory::Travel).len(), 2);
        assert_eq!(demo_merchants(SpendCategory::Streaming).len(), 0);
    }

    #[test]
    fn test_merchant_for_is_deterministic() {
        let a = merchant_for(SpendCategory::Dining);
        let b = merchant_for(SpendCategory::Dining);
        assert_eq!(a.id, b.id);
        assert_eq!(a.id, "chipotle-1");

        // No demo data for streaming: generic fallback
        let fallback = merchant_for(SpendCategory::Streaming);
        assert_eq!(fallback.id, "generic-1");
        assert_eq!(fallback.category, SpendCategory::Other);
    }

    #[test]
    fn test_rotation_cycles_in_order() {
        let mut rotation = DemoRotation::new();
        assert_eq!(rotation.current(), SpendCategory::Gas);
        assert_eq!(rotation.advance(), SpendCategory::Grocery);
        assert_eq!(rotation.advance(), SpendCategory::Dining);
        assert_eq!(rotation.advance(), SpendCategory::Drugstore);
        assert_eq!(rotation.advance(), SpendCategory::Gas);
    }

    #[test]
    fn test_rotation_starting_at() {
        let rotation = DemoRotation::starting_at(SpendCategory::Dining);
        assert_eq!(rotation.current(), SpendCategory::Dining);

        // Categories outside the rotation start from the top
        let rotation = DemoRotation::starting_at(SpendCategory::Travel);
        assert_eq!(rotation.current(), SpendCategory::Gas);
    }
}
