//! Card reward model and reward estimation
//!
//! Pure lookups over a card's reward-structure table plus the reference-spend
//! estimate formatter the UI surfaces ("$4.00 cash back per $100").

use crate::models::{CreditCard, RewardType, SpendCategory};

/// Reference purchase amount used for illustrative estimates
pub const DEFAULT_REFERENCE_SPEND: f64 = 100.0;

/// Resolve the multiplier a card earns in a category.
///
/// Scans the card's reward structure in list order and takes the first entry
/// matching the category; with no match, the card's base reward applies.
/// First-match is a deliberate contract: some catalog cards carry several
/// entries for the same category and the ranking must stay deterministic
/// against that data.
pub fn multiplier_for(card: &CreditCard, category: SpendCategory) -> f64 {
    card.reward_structure
        .iter()
        .find(|reward| reward.category == category)
        .map(|reward| reward.multiplier)
        .unwrap_or(card.base_reward)
}

/// Human-readable justification for the multiplier a card earns in a category.
///
/// Uses the matching reward entry's own description, or a generated
/// "on all purchases" line when the base reward applies. Same first-match
/// scan as [`multiplier_for`], so the two never disagree.
pub fn reward_reason(card: &CreditCard, category: SpendCategory) -> String {
    card.reward_structure
        .iter()
        .find(|reward| reward.category == category)
        .map(|reward| reward.description.clone())
        .unwrap_or_else(|| {
            format!(
                "{}x {} on all purchases",
                format_rate(card.base_reward),
                card.reward_type
            )
        })
}

/// Format an estimated reward for a reference purchase amount.
///
/// Cashback multipliers are percentages, so $100 at 4x is $4.00 back;
/// points and miles accrue per dollar, so $100 at 4x is 400 points.
pub fn estimate_reward(multiplier: f64, reward_type: RewardType, reference_spend: f64) -> String {
    let earned = multiplier * reference_spend;
    match reward_type {
        RewardType::Cashback => format!("${:.2} cash back per $100", earned / 100.0),
        RewardType::Points | RewardType::Miles => {
            format!("{} {} per $100 spent", format_rate(earned), reward_type)
        }
    }
}

/// Estimate against the standard $100 reference spend
pub fn estimate_reward_default(multiplier: f64, reward_type: RewardType) -> String {
    estimate_reward(multiplier, reward_type, DEFAULT_REFERENCE_SPEND)
}

/// Short catalog-listing summary, e.g.
/// "1x points, bonuses: dining, grocery" or "2x cashback on everything"
pub fn format_card_summary(card: &CreditCard) -> String {
    if card.reward_structure.is_empty() {
        return format!(
            "{}x {} on everything",
            format_rate(card.base_reward),
            card.reward_type
        );
    }
    let mut categories: Vec<&str> = Vec::new();
    for reward in &card.reward_structure {
        let name = reward.category.as_str();
        if !categories.contains(&name) {
            categories.push(name);
        }
    }
    format!(
        "{}x {}, bonuses: {}",
        format_rate(card.base_reward),
        card.reward_type,
        categories.join(", ")
    )
}

/// Print a rate without a trailing ".0" when it is integral (so "2x" and
/// "1.5x", never "2.0x")
pub(crate) fn format_rate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
