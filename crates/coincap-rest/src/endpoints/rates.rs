//! Rate endpoints

use crate::client::CoinCapRestClient;
use crate::endpoints::path_id;
use crate::error::RestResult;
use coincap_types::{RateData, RatesData};
use tracing::{debug, instrument};

/// USD conversion rate endpoints
pub struct RateEndpoints<'a> {
    client: &'a CoinCapRestClient,
}

impl<'a> RateEndpoints<'a> {
    pub fn new(client: &'a CoinCapRestClient) -> Self {
        Self { client }
    }

    /// Get all rates
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<RatesData> {
        debug!("Fetching rates");
        self.client.dispatch("/rates", None).await
    }

    /// Get one rate
    ///
    /// # Arguments
    /// * `id` - Currency id (e.g. "australian-dollar", "usd-coin")
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> RestResult<RateData> {
        let segment = path_id(id)?;
        debug!("Fetching rate {}", id);

        self.client.dispatch(&format!("/rates/{}", segment), None).await
    }
}
