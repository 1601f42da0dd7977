//! Catalog browsing command implementations (list, search, show)

use anyhow::{bail, Result};

use stax_core::rewards::format_card_summary;
use stax_core::{CardCatalog, CreditCard};

pub fn cmd_cards_list(
    catalog: &CardCatalog,
    issuer: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let cards: Vec<&CreditCard> = match (issuer, search) {
        (Some(issuer), _) => catalog.by_issuer(issuer),
        (None, Some(query)) => catalog.search(query),
        (None, None) => catalog.all().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No cards match.");
        return Ok(());
    }

    println!();
    println!("💳 Cards ({})", cards.len());
    println!("   ─────────────────────────────────────────────────────────────");
    for card in cards {
        println!("   {:<28} {}", card.id, format_card_summary(card));
    }
    println!();
    Ok(())
}

pub fn cmd_cards_show(catalog: &CardCatalog, id: &str, json: bool) -> Result<()> {
    let Some(card) = catalog.get(id) else {
        bail!("no card with id '{}' (try: stax cards --search <name>)", id);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(card)?);
        return Ok(());
    }

    println!();
    println!("💳 {}", card.full_name());
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Network: {}", card.network);
    println!("   Annual fee: ${:.0}", card.annual_fee);
    println!("   Rewards: {}", format_card_summary(card));
    if !card.reward_structure.is_empty() {
        println!();
        for reward in &card.reward_structure {
            println!("   • {:<16} {}", reward.category.to_string(), reward.description);
        }
    }
    println!();
    Ok(())
}
