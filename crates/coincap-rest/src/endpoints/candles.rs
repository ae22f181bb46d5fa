//! Candle endpoints

use crate::client::CoinCapRestClient;
use crate::error::RestResult;
use crate::params::{GetCandlesParams, ToQuery};
use coincap_types::CandlesData;
use tracing::{debug, instrument};

/// OHLCV candle endpoints
pub struct CandleEndpoints<'a> {
    client: &'a CoinCapRestClient,
}

impl<'a> CandleEndpoints<'a> {
    pub fn new(client: &'a CoinCapRestClient) -> Self {
        Self { client }
    }

    /// Get candles for one market
    ///
    /// `exchange`, `base_id`, `quote_id` and the interval are required.
    #[instrument(skip(self))]
    pub async fn get(&self, params: &GetCandlesParams) -> RestResult<CandlesData> {
        let query = params.to_query()?;
        debug!(
            "Fetching candles for {}/{} on {}",
            params.base_id, params.quote_id, params.exchange
        );

        self.client.dispatch("/candles", Some(&query)).await
    }
}
