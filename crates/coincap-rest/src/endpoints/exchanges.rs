//! Exchange endpoints

use crate::client::CoinCapRestClient;
use crate::endpoints::path_id;
use crate::error::RestResult;
use coincap_types::{ExchangeData, ExchangesData};
use tracing::{debug, instrument};

/// Exchange endpoints
pub struct ExchangeEndpoints<'a> {
    client: &'a CoinCapRestClient,
}

impl<'a> ExchangeEndpoints<'a> {
    pub fn new(client: &'a CoinCapRestClient) -> Self {
        Self { client }
    }

    /// Get all exchanges, ranked by volume
    #[instrument(skip(self))]
    pub async fn list(&self) -> RestResult<ExchangesData> {
        debug!("Fetching exchanges");
        self.client.dispatch("/exchanges", None).await
    }

    /// Get one exchange
    ///
    /// # Arguments
    /// * `id` - Exchange id (e.g. "kraken")
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> RestResult<ExchangeData> {
        let segment = path_id(id)?;
        debug!("Fetching exchange {}", id);

        self.client.dispatch(&format!("/exchanges/{}", segment), None).await
    }
}
