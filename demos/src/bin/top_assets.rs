//! Demo 1: Top Assets by Market Cap
//!
//! Showcases: Asset listing with pagination, string-encoded numbers decoded
//! into typed fields, optional API key from the environment
//!
//! Run: cargo run --bin top_assets [-- LIMIT]

use coincap_rest::{ClientConfig, CoinCapRestClient, GetAssetsParams};
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let limit: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(20);

    println!("{}", "═".repeat(78).cyan());
    println!("{}", "  TOP ASSETS BY MARKET CAP".cyan().bold());
    println!("{}", "  CoinCap REST Demo - Asset Listing".cyan());
    println!("{}", "═".repeat(78).cyan());
    println!();

    let client = CoinCapRestClient::with_config(ClientConfig::from_env()?)?;
    if client.has_api_key() {
        println!("{} Using API key from COINCAP_API_KEY\n", "✓".green());
    }

    let assets = client
        .get_assets(&GetAssetsParams::new().with_limit(limit))
        .await?;

    println!(
        "  {:>4} {:<8} {:<20} {:>14} {:>18} {:>9}",
        "RANK".white().bold(),
        "SYMBOL".white().bold(),
        "NAME".white().bold(),
        "PRICE (USD)".white().bold(),
        "MARKET CAP".white().bold(),
        "24H %".white().bold()
    );
    println!("  {}", "─".repeat(76));

    for asset in &assets.data {
        let change = asset.change_percent24_hr.unwrap_or_default();
        let change_str = format!("{:+.2}", change);
        let change_str = if change >= 0.0 {
            change_str.green()
        } else {
            change_str.red()
        };

        println!(
            "  {:>4} {:<8} {:<20} {:>14.4} {:>18.0} {:>9}",
            asset.rank,
            asset.symbol.cyan(),
            asset.name,
            asset.price_usd,
            asset.market_cap_usd,
            change_str
        );
    }

    if let Some(time) = assets.time() {
        println!("\n  As of {}", time.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}
