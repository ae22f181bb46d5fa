//! Demo 2: Asset Price History
//!
//! Showcases: History parameters (interval + time window), validation
//! before any request is sent, derived sample dates
//!
//! Run: cargo run --bin asset_history [-- ASSET_ID INTERVAL DAYS]

use chrono::{Duration, Utc};
use coincap_rest::{CoinCapRestClient, GetAssetHistoryParams, HistoryParams};
use coincap_types::Interval;
use colored::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let asset_id = args.next().unwrap_or_else(|| "bitcoin".to_string());
    let interval: Interval = args.next().as_deref().unwrap_or("h6").parse()?;
    let days: i64 = args.next().and_then(|d| d.parse().ok()).unwrap_or(7);

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ASSET PRICE HISTORY".cyan().bold());
    println!("{}", "  CoinCap REST Demo - History Window".cyan());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let window = Duration::days(days);
    if window > interval.max_range() {
        println!(
            "{} {} days exceeds the documented range for {} ({} days)\n",
            "!".yellow(),
            days,
            interval,
            interval.max_range().num_days()
        );
    }

    let end = Utc::now();
    let start = end - window;
    let params = GetAssetHistoryParams::new(
        asset_id.clone(),
        HistoryParams::new(interval).with_range(start, end),
    );

    let client = CoinCapRestClient::new();
    let history = match client.get_asset_history(&params).await {
        Ok(history) => history,
        Err(e) if e.is_validation() => {
            println!("{} Rejected before sending: {}", "✗".red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "  {} samples of {} at {} granularity\n",
        history.data.len().to_string().bold(),
        asset_id.cyan(),
        interval
    );

    let prices: Vec<f64> = history.data.iter().map(|s| s.price_usd).collect();
    let (Some(first), Some(last)) = (prices.first(), prices.last()) else {
        println!("  No samples returned");
        return Ok(());
    };
    let high = prices.iter().cloned().fold(f64::MIN, f64::max);
    let low = prices.iter().cloned().fold(f64::MAX, f64::min);

    for sample in history.data.iter().rev().take(10) {
        let date = sample
            .date()
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        println!("  {}  {:>14.4}", date, sample.price_usd);
    }

    let change = (last - first) / first * 100.0;
    println!("  {}", "─".repeat(40));
    println!("  High   {:>14.4}", high);
    println!("  Low    {:>14.4}", low);
    println!(
        "  Change {:>13.2}%",
        if change >= 0.0 {
            format!("{:+.2}", change).green()
        } else {
            format!("{:+.2}", change).red()
        }
    );

    Ok(())
}
