//! Shared types for the CoinCap REST API v2
//!
//! This crate provides the data types used by `coincap-rest`.
//! It has minimal dependencies and can be used independently, e.g. to
//! decode payloads fetched by some other transport.
//!
//! # Key Types
//!
//! - [`Interval`] - Candle/history granularity and its wire code
//! - [`Asset`], [`AssetHistory`], [`AssetMarket`] - Asset endpoints
//! - [`Rate`], [`Exchange`], [`Market`], [`Candle`] - Remaining endpoints
//! - [`Response`] - The `data` + `timestamp` envelope every endpoint returns
//! - [`TypesError`] - Parse errors for the types above
//!
//! # Numeric fields
//!
//! CoinCap sends most numbers as JSON strings (`"priceUsd": "14.77"`).
//! The models decode them into `f64`/integer fields; see [`numeric`].

pub mod enums;
pub mod error;
pub mod models;
pub mod numeric;

// Re-export commonly used types
pub use enums::*;
pub use error::*;
pub use models::*;
