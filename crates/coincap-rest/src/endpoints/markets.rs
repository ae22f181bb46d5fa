//! Market endpoints

use crate::client::CoinCapRestClient;
use crate::error::RestResult;
use crate::params::{GetMarketsParams, ToQuery};
use coincap_types::MarketsData;
use tracing::{debug, instrument};

/// Market endpoints
pub struct MarketEndpoints<'a> {
    client: &'a CoinCapRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a CoinCapRestClient) -> Self {
        Self { client }
    }

    /// List markets matching the filters
    #[instrument(skip(self))]
    pub async fn list(&self, params: &GetMarketsParams) -> RestResult<MarketsData> {
        let query = params.to_query()?;
        debug!("Fetching markets with {} filters", query.len());

        self.client.dispatch("/markets", Some(&query)).await
    }
}
