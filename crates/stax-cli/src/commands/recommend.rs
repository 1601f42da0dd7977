//! Recommendation command implementations (recommend, rank, upsell, demo)

use std::path::Path;

use anyhow::Result;

use stax_core::{CardCatalog, DemoRotation, Merchant, Recommender};

use super::{open_wallet, recommendation_line};

/// Build the merchant the user asked about: either from an MCC (with an
/// optional display name) or the current demo merchant
fn resolve_merchant(mcc: Option<&str>, name: Option<&str>) -> Merchant {
    match mcc {
        Some(code) => {
            let name = name.unwrap_or("Merchant");
            Merchant::from_mcc(&name.to_lowercase().replace(' ', "-"), name, code)
        }
        None => DemoRotation::new().merchant(),
    }
}

pub fn cmd_recommend(
    catalog: &CardCatalog,
    wallet_path: &Path,
    mcc: Option<&str>,
    merchant_name: Option<&str>,
    demo: bool,
    json: bool,
) -> Result<()> {
    let wallet = open_wallet(wallet_path)?;
    let merchant = if demo {
        DemoRotation::new().merchant()
    } else {
        resolve_merchant(mcc, merchant_name)
    };
    let engine = Recommender::new(catalog);
    let owned = wallet.card_ids();

    let best = engine.best_owned_card(&merchant, &owned);
    let alternatives = match &best {
        Some(rec) => engine.alternative_cards(&merchant, &owned, &rec.card.id),
        None => Vec::new(),
    };
    let upsell = engine.best_card_overall(&merchant, &owned);

    if json {
        let payload = serde_json::json!({
            "merchant": merchant,
            "best": best,
            "alternatives": alternatives,
            "upsell": upsell,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!("📍 {} ({})", merchant.name, merchant.category);
    println!("   ─────────────────────────────────────────────────────────────");

    match best {
        Some(rec) => {
            println!("   💳 Use: {}", rec.card.full_name());
            println!("      {}", rec.reason);
            println!("      {}", rec.estimated_reward);
        }
        None => {
            println!("   No cards in your wallet. Add one with:");
            println!("     stax wallet add <card-id>");
        }
    }

    if !alternatives.is_empty() {
        println!();
        println!("   Also good:");
        for rec in &alternatives {
            println!("   • {}", recommendation_line(rec));
        }
    }

    if let Some(rec) = upsell {
        println!();
        println!("   ✨ Worth a look: {}", recommendation_line(&rec));
        println!("      (annual fee ${:.0})", rec.card.annual_fee);
    }

    println!();
    Ok(())
}

pub fn cmd_rank(
    catalog: &CardCatalog,
    wallet_path: &Path,
    mcc: &str,
    merchant_name: Option<&str>,
    json: bool,
) -> Result<()> {
    let wallet = open_wallet(wallet_path)?;
    let merchant = resolve_merchant(Some(mcc), merchant_name);
    let engine = Recommender::new(catalog);

    let ranked = engine.all_cards_ranked(&merchant, &wallet.card_ids());

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No cards in your wallet to rank.");
        return Ok(());
    }

    println!();
    println!("🏆 Ranking for {} ({})", merchant.name, merchant.category);
    println!("   ─────────────────────────────────────────────────────────────");
    for (i, rec) in ranked.iter().enumerate() {
        println!("   {}. {}", i + 1, recommendation_line(rec));
    }
    println!();
    Ok(())
}

pub fn cmd_upsell(catalog: &CardCatalog, wallet_path: &Path, mcc: &str, json: bool) -> Result<()> {
    let wallet = open_wallet(wallet_path)?;
    let merchant = resolve_merchant(Some(mcc), None);
    let engine = Recommender::new(catalog);

    let upsell = engine.best_card_overall(&merchant, &wallet.card_ids());

    if json {
        println!("{}", serde_json::to_string_pretty(&upsell)?);
        return Ok(());
    }

    match upsell {
        Some(rec) => {
            println!();
            println!("✨ For {} purchases, consider:", merchant.category);
            println!("   {}", recommendation_line(&rec));
            println!("   Annual fee: ${:.0}", rec.card.annual_fee);
            println!();
        }
        None => {
            println!(
                "No suggestion: your wallet already earns the top rate for {}.",
                merchant.category
            );
        }
    }
    Ok(())
}

pub fn cmd_demo(catalog: &CardCatalog, wallet_path: &Path, json: bool) -> Result<()> {
    let wallet = open_wallet(wallet_path)?;
    let engine = Recommender::new(catalog);
    let owned = wallet.card_ids();

    let mut rotation = DemoRotation::new();
    let mut stops = Vec::new();
    for _ in 0..stax_core::DEMO_ROTATION.len() {
        let merchant = rotation.merchant();
        let best = engine.best_owned_card(&merchant, &owned);
        stops.push((merchant, best));
        rotation.advance();
    }

    if json {
        let payload: Vec<_> = stops
            .iter()
            .map(|(merchant, best)| serde_json::json!({ "merchant": merchant, "best": best }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!();
    println!("🚗 Demo drive");
    println!("   ─────────────────────────────────────────────────────────────");
    for (merchant, best) in &stops {
        match best {
            Some(rec) => println!(
                "   {} ({}) → {}",
                merchant.name,
                merchant.category,
                recommendation_line(rec)
            ),
            None => println!("   {} ({}) → no cards in wallet", merchant.name, merchant.category),
        }
    }
    println!();
    Ok(())
}
