//! Deserializers for string-encoded numbers
//!
//! CoinCap encodes prices, supplies, ranks and counts as JSON strings
//! (`"rank": "9"`, `"priceUsd": "14.7710918668897673"`). The helpers here
//! accept either a string or a bare JSON number and parse it into the
//! field's numeric type, so a model never has to carry the string around.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(deserialize_with = "coincap_types::numeric::deserialize_number")]
//!     rank: u32,
//!     #[serde(default, deserialize_with = "coincap_types::numeric::deserialize_optional_number")]
//!     max_supply: Option<f64>,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"rank": "9", "max_supply": null}"#).unwrap();
//! assert_eq!(row.rank, 9);
//! assert!(row.max_supply.is_none());
//! ```

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

fn parse<T, E>(raw: &str) -> Result<T, E>
where
    T: FromStr,
    T::Err: Display,
    E: Error,
{
    raw.trim()
        .parse()
        .map_err(|e| E::custom(format!("invalid number {:?}: {}", raw, e)))
}

/// Deserialize a required numeric field sent as a string or a number
pub fn deserialize_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = StringOrNumber::deserialize(deserializer)?.into_string();
    parse(&raw)
}

/// Deserialize a nullable numeric field sent as a string or a number
///
/// `null` and the empty string both decode to `None`. Pair with
/// `#[serde(default)]` so a missing key decodes to `None` too.
pub fn deserialize_optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => {
            let raw = value.into_string();
            if raw.trim().is_empty() {
                Ok(None)
            } else {
                parse(&raw).map(Some)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "deserialize_number")]
        rank: u32,
        #[serde(deserialize_with = "deserialize_number")]
        price: f64,
        #[serde(default, deserialize_with = "deserialize_optional_number")]
        supply: Option<f64>,
    }

    #[test]
    fn test_from_strings() {
        let json = r#"{"rank": "9", "price": "14.7710918668897673", "supply": "1013089106.20015"}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.rank, 9);
        assert_eq!(sample.price, 14.7710918668897673);
        assert_eq!(sample.supply, Some(1013089106.20015));
    }

    #[test]
    fn test_from_numbers() {
        let json = r#"{"rank": 3, "price": 0.5, "supply": 21000000}"#;
        let sample: Sample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.rank, 3);
        assert_eq!(sample.price, 0.5);
        assert_eq!(sample.supply, Some(21000000.0));
    }

    #[test]
    fn test_optional_null_missing_empty() {
        let null: Sample = serde_json::from_str(r#"{"rank": "1", "price": "1", "supply": null}"#).unwrap();
        assert!(null.supply.is_none());

        let missing: Sample = serde_json::from_str(r#"{"rank": "1", "price": "1"}"#).unwrap();
        assert!(missing.supply.is_none());

        let empty: Sample = serde_json::from_str(r#"{"rank": "1", "price": "1", "supply": ""}"#).unwrap();
        assert!(empty.supply.is_none());
    }

    #[test]
    fn test_scientific_notation() {
        let sample: Sample = serde_json::from_str(r#"{"rank": "1", "price": "5e-7"}"#).unwrap();
        assert_eq!(sample.price, 0.0000005);
    }

    #[test]
    fn test_garbage_rejected() {
        let err = serde_json::from_str::<Sample>(r#"{"rank": "nine", "price": "1"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid number"));

        assert!(serde_json::from_str::<Sample>(r#"{"rank": "1", "price": null}"#).is_err());
    }
}
