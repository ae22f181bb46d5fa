//! REST API client for CoinCap market data
//!
//! This crate provides a typed client for the public CoinCap REST API v2:
//! asset prices and history, USD rates, exchanges, markets and candles.
//!
//! # Features
//!
//! - **Assets**: Listing, lookup, price history, markets per asset
//! - **Rates**: USD conversion rates for fiat and crypto currencies
//! - **Exchanges / Markets**: Venue and trading pair statistics
//! - **Candles**: OHLCV history for one market
//!
//! # Validation
//!
//! Every parameter struct is checked before a request is sent: a missing
//! required field fails with [`RestError::MissingParameter`], a value the API
//! would reject (e.g. `limit > 2000`) with [`RestError::InvalidParameter`].
//!
//! # Example
//!
//! ```no_run
//! use coincap_rest::{CoinCapRestClient, GetAssetHistoryParams, HistoryParams};
//! use coincap_types::Interval;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinCapRestClient::new();
//!
//!     let dot = client.get_asset("polkadot").await?;
//!     println!("DOT: {:?}", dot.data.price_usd);
//!
//!     let params = GetAssetHistoryParams::new("polkadot", HistoryParams::new(Interval::H1));
//!     let history = client.get_asset_history(&params).await?;
//!     println!("{} hourly samples", history.data.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Compression and authentication
//!
//! Responses are requested gzip-compressed by default (see
//! [`Compression`]). An optional API key is sent as a bearer token; see
//! [`ApiKey`].

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;

// Re-export main types
pub use auth::ApiKey;
pub use client::{
    ClientConfig, CoinCapRestClient, Compression, DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use error::{RestError, RestResult};
pub use params::{
    GetAssetHistoryParams, GetAssetMarketsParams, GetAssetsParams, GetCandlesParams,
    GetMarketsParams, HistoryParams, LimitOffsetParams, QueryParams, ToQuery,
};
