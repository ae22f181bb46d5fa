//! Asset endpoints
//!
//! `/assets`, `/assets/{id}`, `/assets/{id}/history`, `/assets/{id}/markets`

use crate::client::CoinCapRestClient;
use crate::endpoints::path_id;
use crate::error::RestResult;
use crate::params::{GetAssetHistoryParams, GetAssetMarketsParams, GetAssetsParams, ToQuery};
use coincap_types::{AssetData, AssetHistoriesData, AssetMarketsData, AssetsData};
use tracing::{debug, instrument};

/// Asset endpoints
pub struct AssetEndpoints<'a> {
    client: &'a CoinCapRestClient,
}

impl<'a> AssetEndpoints<'a> {
    pub fn new(client: &'a CoinCapRestClient) -> Self {
        Self { client }
    }

    /// List assets
    ///
    /// Without filters the server returns the top 100 by market cap.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &GetAssetsParams) -> RestResult<AssetsData> {
        let query = params.to_query()?;
        debug!("Fetching assets");

        self.client.dispatch("/assets", Some(&query)).await
    }

    /// Get a single asset
    ///
    /// # Arguments
    /// * `id` - Asset id (e.g. "bitcoin")
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> RestResult<AssetData> {
        let segment = path_id(id)?;
        debug!("Fetching asset {}", id);

        self.client.dispatch(&format!("/assets/{}", segment), None).await
    }

    /// Get an asset's price history
    #[instrument(skip(self))]
    pub async fn history(&self, params: &GetAssetHistoryParams) -> RestResult<AssetHistoriesData> {
        let segment = path_id(&params.id)?;
        let query = params.to_query()?;
        debug!("Fetching history for {}", params.id);

        self.client
            .dispatch(&format!("/assets/{}/history", segment), Some(&query))
            .await
    }

    /// Get the markets an asset trades on
    #[instrument(skip(self))]
    pub async fn markets(&self, params: &GetAssetMarketsParams) -> RestResult<AssetMarketsData> {
        let segment = path_id(&params.id)?;
        let query = params.to_query()?;
        debug!("Fetching markets for {}", params.id);

        self.client
            .dispatch(&format!("/assets/{}/markets", segment), Some(&query))
            .await
    }
}
