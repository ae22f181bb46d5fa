//! Response models for the CoinCap REST API v2
//!
//! Every endpoint wraps its payload in the same envelope:
//! `{"data": ..., "timestamp": 1627299055657}`. [`Response`] models that
//! envelope once and the per-endpoint aliases fix its payload type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::numeric::{deserialize_number, deserialize_optional_number};

// ============================================================================
// Envelope
// ============================================================================

/// Standard CoinCap response envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    /// Endpoint payload
    pub data: T,
    /// Server time the payload was produced, in Unix milliseconds
    pub timestamp: u64,
}

impl<T> Response<T> {
    /// Server timestamp as a calendar time
    pub fn time(&self) -> Option<DateTime<Utc>> {
        from_millis(self.timestamp)
    }

    /// Consume the envelope, keeping only the payload
    pub fn into_data(self) -> T {
        self.data
    }
}

/// `GET /assets/{id}`
pub type AssetData = Response<Asset>;
/// `GET /assets`
pub type AssetsData = Response<Vec<Asset>>;
/// `GET /assets/{id}/history`
pub type AssetHistoriesData = Response<Vec<AssetHistory>>;
/// `GET /assets/{id}/markets`
pub type AssetMarketsData = Response<Vec<AssetMarket>>;
/// `GET /rates/{id}`
pub type RateData = Response<Rate>;
/// `GET /rates`
pub type RatesData = Response<Vec<Rate>>;
/// `GET /exchanges/{id}`
pub type ExchangeData = Response<Exchange>;
/// `GET /exchanges`
pub type ExchangesData = Response<Vec<Exchange>>;
/// `GET /markets`
pub type MarketsData = Response<Vec<Market>>;
/// `GET /candles`
pub type CandlesData = Response<Vec<Candle>>;

fn from_millis(millis: u64) -> Option<DateTime<Utc>> {
    i64::try_from(millis).ok().and_then(DateTime::from_timestamp_millis)
}

// ============================================================================
// Assets
// ============================================================================

/// A tradable asset with its market statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier (e.g. "bitcoin")
    pub id: String,
    /// Rank by market cap
    #[serde(deserialize_with = "deserialize_number")]
    pub rank: u32,
    /// Ticker symbol (e.g. "BTC")
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Circulating supply
    #[serde(deserialize_with = "deserialize_number")]
    pub supply: f64,
    /// Total quantity that will ever exist, if capped
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub max_supply: Option<f64>,
    /// Supply x price
    #[serde(deserialize_with = "deserialize_number")]
    pub market_cap_usd: f64,
    /// Trading volume over the last 24 hours, in USD
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub volume_usd24_hr: Option<f64>,
    /// Volume-weighted price, in USD
    #[serde(deserialize_with = "deserialize_number")]
    pub price_usd: f64,
    /// Price change over the last 24 hours, in percent
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub change_percent24_hr: Option<f64>,
    /// Volume-weighted average price over the last 24 hours
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub vwap24_hr: Option<f64>,
    /// Block explorer URL
    #[serde(default)]
    pub explorer: Option<String>,
}

/// One sample of an asset's price history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetHistory {
    /// Volume-weighted price in USD over the interval
    #[serde(deserialize_with = "deserialize_number")]
    pub price_usd: f64,
    /// Start of the interval, in Unix milliseconds
    pub time: u64,
    /// Circulating supply at the time
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub circulating_supply: Option<f64>,
}

impl AssetHistory {
    /// Start of the interval as a calendar time
    pub fn date(&self) -> Option<DateTime<Utc>> {
        from_millis(self.time)
    }
}

/// A market an asset trades on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMarket {
    pub exchange_id: String,
    pub base_id: String,
    pub quote_id: String,
    pub base_symbol: String,
    pub quote_symbol: String,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub volume_usd24_hr: Option<f64>,
    #[serde(deserialize_with = "deserialize_number")]
    pub price_usd: f64,
    /// Share of the asset's total volume traded on this market, in percent
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub volume_percent: Option<f64>,
}

// ============================================================================
// Rates
// ============================================================================

/// Conversion rate of a currency or asset to USD
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    /// Unique identifier (e.g. "usd-coin")
    #[serde(alias = "Id")]
    pub id: String,
    /// Currency symbol (e.g. "USDC")
    pub symbol: String,
    /// Printed symbol (e.g. "$"), absent for most crypto assets
    #[serde(default)]
    pub currency_symbol: Option<String>,
    /// "crypto" or "fiat"
    #[serde(rename = "type")]
    pub kind: String,
    /// Value of one unit in USD
    #[serde(deserialize_with = "deserialize_number")]
    pub rate_usd: f64,
}

impl Rate {
    /// True for fiat currencies
    pub fn is_fiat(&self) -> bool {
        self.kind == "fiat"
    }
}

// ============================================================================
// Exchanges
// ============================================================================

/// A trading venue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exchange {
    /// Unique identifier (e.g. "kraken")
    pub exchange_id: String,
    pub name: String,
    /// Rank by total volume
    #[serde(deserialize_with = "deserialize_number")]
    pub rank: u32,
    /// Share of the total volume across all exchanges, in percent
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub percent_total_volume: Option<f64>,
    /// Daily volume in USD
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub volume_usd: Option<f64>,
    /// Number of trading pairs offered
    #[serde(deserialize_with = "deserialize_number")]
    pub trading_pairs: u32,
    /// Whether a trade socket is available
    #[serde(default)]
    pub socket: Option<bool>,
    #[serde(default)]
    pub exchange_url: Option<String>,
    /// Last update, in Unix milliseconds
    pub updated: u64,
}

impl Exchange {
    /// Last update as a calendar time
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        from_millis(self.updated)
    }
}

// ============================================================================
// Markets
// ============================================================================

/// A base/quote trading pair on one exchange
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub exchange_id: String,
    /// Rank by volume within the exchange
    #[serde(deserialize_with = "deserialize_number")]
    pub rank: u32,
    pub base_symbol: String,
    pub base_id: String,
    pub quote_symbol: String,
    pub quote_id: String,
    /// Amount of quote asset traded for one unit of base
    #[serde(deserialize_with = "deserialize_number")]
    pub price_quote: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub price_usd: f64,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub volume_usd24_hr: Option<f64>,
    /// Share of the exchange's volume on this market, in percent
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub percent_exchange_volume: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub trades_count24_hr: Option<u64>,
    /// Last update, in Unix milliseconds
    pub updated: u64,
}

impl Market {
    /// Last update as a calendar time
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        from_millis(self.updated)
    }
}

// ============================================================================
// Candles
// ============================================================================

/// OHLCV aggregate for one interval
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(deserialize_with = "deserialize_number")]
    pub open: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub high: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub low: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub close: f64,
    #[serde(deserialize_with = "deserialize_number")]
    pub volume: f64,
    /// Start of the interval, in Unix milliseconds
    pub period: u64,
}

impl Candle {
    /// Start of the interval as a calendar time
    pub fn period_start(&self) -> Option<DateTime<Utc>> {
        from_millis(self.period)
    }

    /// Close minus open
    pub fn change(&self) -> f64 {
        self.close - self.open
    }
}
