//! Interval enum

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TypesError, TypesResult};

/// Candle / history granularity
///
/// The serde representation is the wire code used in the `interval`
/// query parameter (e.g. `"m30"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// 1 minute (max range: 1 day)
    M1,
    /// 5 minutes (max range: 5 days)
    M5,
    /// 15 minutes (max range: 7 days)
    M15,
    /// 30 minutes (max range: 14 days)
    M30,
    /// 1 hour (max range: 30 days)
    H1,
    /// 2 hours (max range: 61 days)
    H2,
    /// 6 hours (max range: 183 days)
    H6,
    /// 12 hours (max range: 365 days)
    H12,
    /// 1 day (max range: 7305 days)
    D1,
}

impl Interval {
    /// Every supported interval, finest first
    pub const ALL: [Interval; 9] = [
        Self::M1,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::H1,
        Self::H2,
        Self::H6,
        Self::H12,
        Self::D1,
    ];

    /// Returns the interval code as used in query parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "m1",
            Self::M5 => "m5",
            Self::M15 => "m15",
            Self::M30 => "m30",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H6 => "h6",
            Self::H12 => "h12",
            Self::D1 => "d1",
        }
    }

    /// Length of one sample at this granularity
    pub fn duration(&self) -> Duration {
        match self {
            Self::M1 => Duration::minutes(1),
            Self::M5 => Duration::minutes(5),
            Self::M15 => Duration::minutes(15),
            Self::M30 => Duration::minutes(30),
            Self::H1 => Duration::hours(1),
            Self::H2 => Duration::hours(2),
            Self::H6 => Duration::hours(6),
            Self::H12 => Duration::hours(12),
            Self::D1 => Duration::days(1),
        }
    }

    /// Widest `start`..`end` window the API documents for this interval
    ///
    /// Informational only; requests exceeding it are left to the server.
    pub fn max_range(&self) -> Duration {
        let days = match self {
            Self::M1 => 1,
            Self::M5 => 5,
            Self::M15 => 7,
            Self::M30 => 14,
            Self::H1 => 30,
            Self::H2 => 61,
            Self::H6 => 183,
            Self::H12 => 365,
            Self::D1 => 7305,
        };
        Duration::days(days)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = TypesError;

    fn from_str(s: &str) -> TypesResult<Self> {
        Self::ALL
            .into_iter()
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| TypesError::InvalidInterval(s.to_string()))
    }
}
