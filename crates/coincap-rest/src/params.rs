//! Query parameter validation and encoding
//!
//! Each endpoint takes a parameter struct implementing [`ToQuery`]. Encoding
//! validates the struct and yields the query pairs to send; fields that are
//! unset (empty strings, zero limit/offset, `None`) are left out so the
//! server applies its defaults.
//!
//! Shared rules live in two sub-validators that the endpoint structs hold by
//! name and merge into their own output:
//!
//! - [`LimitOffsetParams`] - pagination bounds (`limit`, `offset`)
//! - [`HistoryParams`] - `interval` plus an optional `start`/`end` window

use chrono::{DateTime, Utc};
use coincap_types::Interval;
use std::collections::BTreeMap;

use crate::error::{RestError, RestResult};

/// Maximum `limit` accepted by the API
pub const MAX_LIMIT: u32 = 2000;

/// Maximum number of ids in one `/assets` request
pub const MAX_IDS: usize = 2000;

/// Query pairs for one request, keyed by parameter name
pub type QueryParams = BTreeMap<&'static str, String>;

/// Validate a parameter struct and encode it as query pairs
pub trait ToQuery {
    /// Build the query pairs, or fail without touching the network
    fn to_query(&self) -> RestResult<QueryParams>;
}

fn insert_non_empty(query: &mut QueryParams, name: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        query.insert(name, value.to_string());
    }
}

fn require(name: &'static str, value: &str) -> RestResult<()> {
    if value.is_empty() {
        return Err(RestError::missing(name));
    }
    Ok(())
}

// ============================================================================
// Shared sub-validators
// ============================================================================

/// Pagination bounds
///
/// Zero means "not set" for both fields, so `offset: 0` is never sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitOffsetParams {
    /// Maximum number of results (at most [`MAX_LIMIT`])
    pub limit: u32,
    /// Number of results to skip
    pub offset: u32,
}

impl LimitOffsetParams {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Validate and add `limit`/`offset` to an existing query
    pub fn merge_into(&self, mut query: QueryParams) -> RestResult<QueryParams> {
        query.extend(self.to_query()?);
        Ok(query)
    }
}

impl ToQuery for LimitOffsetParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        if self.limit > MAX_LIMIT {
            return Err(RestError::invalid(
                "limit",
                format!("{} exceeds the maximum of {}", self.limit, MAX_LIMIT),
            ));
        }

        let mut query = QueryParams::new();
        if self.limit > 0 {
            query.insert("limit", self.limit.to_string());
        }
        if self.offset > 0 {
            query.insert("offset", self.offset.to_string());
        }
        Ok(query)
    }
}

/// Granularity and optional time window for history-shaped endpoints
///
/// `start` and `end` must be given together. The server excludes the
/// sample starting exactly at `end`; omitting both returns the most recent
/// samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryParams {
    /// Required
    pub interval: Option<Interval>,
    /// Window start, sent as epoch milliseconds
    pub start: Option<DateTime<Utc>>,
    /// Window end (exclusive), sent as epoch milliseconds
    pub end: Option<DateTime<Utc>>,
}

impl HistoryParams {
    pub fn new(interval: Interval) -> Self {
        Self {
            interval: Some(interval),
            start: None,
            end: None,
        }
    }

    /// Set the `start`..`end` window
    pub fn with_range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Validate and add `interval`/`start`/`end` to an existing query
    pub fn merge_into(&self, mut query: QueryParams) -> RestResult<QueryParams> {
        query.extend(self.to_query()?);
        Ok(query)
    }
}

impl ToQuery for HistoryParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        let interval = self
            .interval
            .ok_or_else(|| RestError::missing("interval"))?;

        let mut query = QueryParams::new();
        query.insert("interval", interval.as_str().to_string());

        match (self.start, self.end) {
            (None, None) => {}
            (Some(_), None) => return Err(RestError::missing("end")),
            (None, Some(_)) => return Err(RestError::missing("start")),
            (Some(start), Some(end)) => {
                // At least one sample must fit in the window
                let fits = start
                    .checked_add_signed(interval.duration())
                    .is_some_and(|first_close| first_close <= end);
                if !fits {
                    return Err(RestError::invalid(
                        "end",
                        format!("{} is less than one {} interval after start {}", end, interval, start),
                    ));
                }
                query.insert("start", start.timestamp_millis().to_string());
                query.insert("end", end.timestamp_millis().to_string());
            }
        }
        Ok(query)
    }
}

// ============================================================================
// Assets
// ============================================================================

/// Filters for `GET /assets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAssetsParams {
    /// Search by asset id ("bitcoin") or symbol ("BTC")
    pub search: Option<String>,
    /// Restrict to these asset ids
    pub ids: Vec<String>,
    pub limit_offset: LimitOffsetParams,
}

impl GetAssetsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit_offset.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.limit_offset.offset = offset;
        self
    }
}

impl ToQuery for GetAssetsParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        if self.ids.len() > MAX_IDS {
            return Err(RestError::invalid(
                "ids",
                format!("{} ids exceeds the maximum of {}", self.ids.len(), MAX_IDS),
            ));
        }

        let mut query = QueryParams::new();
        insert_non_empty(&mut query, "search", self.search.as_deref());
        if !self.ids.is_empty() {
            query.insert("ids", self.ids.join(","));
        }
        self.limit_offset.merge_into(query)
    }
}

/// Parameters for `GET /assets/{id}/history`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAssetHistoryParams {
    /// Asset id, required
    pub id: String,
    pub history: HistoryParams,
}

impl GetAssetHistoryParams {
    pub fn new(id: impl Into<String>, history: HistoryParams) -> Self {
        Self {
            id: id.into(),
            history,
        }
    }
}

impl ToQuery for GetAssetHistoryParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        require("id", &self.id)?;
        self.history.to_query()
    }
}

/// Parameters for `GET /assets/{id}/markets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAssetMarketsParams {
    /// Asset id, required
    pub id: String,
    pub limit_offset: LimitOffsetParams,
}

impl GetAssetMarketsParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            limit_offset: LimitOffsetParams::default(),
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit_offset.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.limit_offset.offset = offset;
        self
    }
}

impl ToQuery for GetAssetMarketsParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        require("id", &self.id)?;
        self.limit_offset.to_query()
    }
}

// ============================================================================
// Markets
// ============================================================================

/// Filters for `GET /markets`, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMarketsParams {
    /// Search by exchange id
    pub exchange_id: Option<String>,
    /// Markets whose base symbol matches
    pub base_symbol: Option<String>,
    /// Markets whose quote symbol matches
    pub quote_symbol: Option<String>,
    /// Markets whose base id matches
    pub base_id: Option<String>,
    /// Markets whose quote id matches
    pub quote_id: Option<String>,
    /// Markets with this symbol as base or quote
    pub asset_symbol: Option<String>,
    /// Markets with this id as base or quote
    pub asset_id: Option<String>,
    pub limit_offset: LimitOffsetParams,
}

impl GetMarketsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exchange_id(mut self, exchange_id: impl Into<String>) -> Self {
        self.exchange_id = Some(exchange_id.into());
        self
    }

    pub fn with_base_symbol(mut self, base_symbol: impl Into<String>) -> Self {
        self.base_symbol = Some(base_symbol.into());
        self
    }

    pub fn with_quote_symbol(mut self, quote_symbol: impl Into<String>) -> Self {
        self.quote_symbol = Some(quote_symbol.into());
        self
    }

    pub fn with_base_id(mut self, base_id: impl Into<String>) -> Self {
        self.base_id = Some(base_id.into());
        self
    }

    pub fn with_quote_id(mut self, quote_id: impl Into<String>) -> Self {
        self.quote_id = Some(quote_id.into());
        self
    }

    pub fn with_asset_symbol(mut self, asset_symbol: impl Into<String>) -> Self {
        self.asset_symbol = Some(asset_symbol.into());
        self
    }

    pub fn with_asset_id(mut self, asset_id: impl Into<String>) -> Self {
        self.asset_id = Some(asset_id.into());
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit_offset.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.limit_offset.offset = offset;
        self
    }
}

impl ToQuery for GetMarketsParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        let mut query = QueryParams::new();
        insert_non_empty(&mut query, "exchangeId", self.exchange_id.as_deref());
        insert_non_empty(&mut query, "baseSymbol", self.base_symbol.as_deref());
        insert_non_empty(&mut query, "quoteSymbol", self.quote_symbol.as_deref());
        insert_non_empty(&mut query, "baseId", self.base_id.as_deref());
        insert_non_empty(&mut query, "quoteId", self.quote_id.as_deref());
        insert_non_empty(&mut query, "assetSymbol", self.asset_symbol.as_deref());
        insert_non_empty(&mut query, "assetId", self.asset_id.as_deref());
        self.limit_offset.merge_into(query)
    }
}

// ============================================================================
// Candles
// ============================================================================

/// Parameters for `GET /candles`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCandlesParams {
    /// Exchange id (e.g. "poloniex"), required
    pub exchange: String,
    /// Base asset id (e.g. "ethereum"), required
    pub base_id: String,
    /// Quote asset id (e.g. "bitcoin"), required
    pub quote_id: String,
    pub history: HistoryParams,
}

impl GetCandlesParams {
    pub fn new(
        exchange: impl Into<String>,
        base_id: impl Into<String>,
        quote_id: impl Into<String>,
        history: HistoryParams,
    ) -> Self {
        Self {
            exchange: exchange.into(),
            base_id: base_id.into(),
            quote_id: quote_id.into(),
            history,
        }
    }
}

impl ToQuery for GetCandlesParams {
    fn to_query(&self) -> RestResult<QueryParams> {
        require("exchange", &self.exchange)?;
        require("baseId", &self.base_id)?;
        require("quoteId", &self.quote_id)?;

        let mut query = QueryParams::new();
        query.insert("exchange", self.exchange.clone());
        query.insert("baseId", self.base_id.clone());
        query.insert("quoteId", self.quote_id.clone());
        self.history.merge_into(query)
    }
}
