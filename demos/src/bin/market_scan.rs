//! Demo 3: Market Scanner
//!
//! Showcases: Market filters, exchange lookup, candles for the most liquid
//! market, deflate compression
//!
//! Run: cargo run --bin market_scan [-- BASE_ID]

use chrono::{Duration, DurationRound, Utc};
use coincap_rest::{
    ClientConfig, CoinCapRestClient, Compression, GetCandlesParams, GetMarketsParams,
    HistoryParams,
};
use coincap_types::Interval;
use colored::*;
use std::cmp::Ordering;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let base_id = std::env::args().nth(1).unwrap_or_else(|| "ethereum".to_string());

    println!("{}", "═".repeat(72).cyan());
    println!("{}", "  MARKET SCANNER".cyan().bold());
    println!("{}", "  CoinCap REST Demo - Markets & Candles".cyan());
    println!("{}", "═".repeat(72).cyan());
    println!();

    let config = ClientConfig::from_env()?.with_compression(Compression::Deflate);
    let client = CoinCapRestClient::with_config(config)?;

    let markets = client
        .get_markets(&GetMarketsParams::new().with_base_id(base_id.as_str()).with_limit(10))
        .await?;

    println!(
        "  {:<14} {:<12} {:>14} {:>16} {:>8}",
        "EXCHANGE".white().bold(),
        "PAIR".white().bold(),
        "PRICE (USD)".white().bold(),
        "VOLUME 24H".white().bold(),
        "SHARE".white().bold()
    );
    println!("  {}", "─".repeat(70));

    for market in &markets.data {
        println!(
            "  {:<14} {:<12} {:>14.4} {:>16.0} {:>7.2}%",
            market.exchange_id.cyan(),
            format!("{}/{}", market.base_symbol, market.quote_symbol),
            market.price_usd,
            market.volume_usd24_hr.unwrap_or_default(),
            market.percent_exchange_volume.unwrap_or_default()
        );
    }

    let Some(top) = markets.data.iter().max_by(|a, b| {
        a.volume_usd24_hr
            .partial_cmp(&b.volume_usd24_hr)
            .unwrap_or(Ordering::Equal)
    }) else {
        println!("\n  No markets found for {}", base_id);
        return Ok(());
    };

    let exchange = client.get_exchange(&top.exchange_id).await?;
    println!(
        "\n{} Most liquid: {} on {} (rank {}, {} pairs)",
        "✓".green(),
        format!("{}/{}", top.base_symbol, top.quote_symbol).bold(),
        exchange.data.name,
        exchange.data.rank,
        exchange.data.trading_pairs
    );

    let end = Utc::now().duration_trunc(Duration::hours(1))?;
    let params = GetCandlesParams::new(
        top.exchange_id.as_str(),
        top.base_id.as_str(),
        top.quote_id.as_str(),
        HistoryParams::new(Interval::H1).with_range(end - Duration::hours(12), end),
    );
    let candles = client.get_candles(&params).await?;

    println!("\n  {:<17} {:>10} {:>10} {:>10} {:>10}", "HOUR", "OPEN", "HIGH", "LOW", "CLOSE");
    for candle in &candles.data {
        let hour = candle
            .period_start()
            .map(|t| t.format("%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let close = format!("{:>10.4}", candle.close);
        println!(
            "  {:<17} {:>10.4} {:>10.4} {:>10.4} {}",
            hour,
            candle.open,
            candle.high,
            candle.low,
            if candle.change() >= 0.0 { close.green() } else { close.red() }
        );
    }

    Ok(())
}
