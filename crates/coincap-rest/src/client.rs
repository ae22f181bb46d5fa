//! Main REST client implementation

use crate::auth::ApiKey;
use crate::endpoints::{
    AssetEndpoints, CandleEndpoints, ExchangeEndpoints, MarketEndpoints, RateEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::params::{
    GetAssetHistoryParams, GetAssetMarketsParams, GetAssetsParams, GetCandlesParams,
    GetMarketsParams, QueryParams,
};
use coincap_types::{
    AssetData, AssetHistoriesData, AssetMarketsData, AssetsData, CandlesData, ExchangeData,
    ExchangesData, MarketsData, RateData, RatesData,
};
use flate2::read::{GzDecoder, ZlibDecoder};
use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, info, trace};

/// CoinCap REST API v2 host
pub const DEFAULT_BASE_URL: &str = "https://api.coincap.io/v2";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `User-Agent` sent when the configuration does not set one
pub const DEFAULT_USER_AGENT: &str = concat!("coincap-rest/", env!("CARGO_PKG_VERSION"));

/// Compression scheme requested via `Accept-Encoding`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    #[default]
    Gzip,
    Deflate,
}

impl Compression {
    /// Returns the `Accept-Encoding` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
        }
    }
}

/// How a response body is encoded, from its `Content-Encoding` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentEncoding {
    Gzip,
    Deflate,
    Identity,
}

impl ContentEncoding {
    fn from_header(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("gzip") | Some("x-gzip") => Self::Gzip,
            Some("deflate") => Self::Deflate,
            _ => Self::Identity,
        }
    }
}

/// Decompress (if needed) and decode a response body
fn decode_body<T: DeserializeOwned>(encoding: ContentEncoding, body: &[u8]) -> RestResult<T> {
    trace!(?encoding, bytes = body.len(), "Decoding response body");

    let mut decompressed = Vec::new();
    let json = match encoding {
        ContentEncoding::Gzip => {
            GzDecoder::new(body)
                .read_to_end(&mut decompressed)
                .map_err(RestError::Decompression)?;
            decompressed.as_slice()
        }
        // HTTP "deflate" is the zlib format
        ContentEncoding::Deflate => {
            ZlibDecoder::new(body)
                .read_to_end(&mut decompressed)
                .map_err(RestError::Decompression)?;
            decompressed.as_slice()
        }
        ContentEncoding::Identity => body,
    };

    Ok(serde_json::from_slice(json)?)
}

/// CoinCap REST API client
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// holds no per-request state, so one instance can serve concurrent calls.
///
/// # Example
///
/// ```no_run
/// use coincap_rest::{CoinCapRestClient, GetAssetsParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinCapRestClient::new();
///
///     let top = client.get_assets(&GetAssetsParams::new().with_limit(10)).await?;
///     for asset in &top.data {
///         println!("{:>3} {:<6} {:.2}", asset.rank, asset.symbol, asset.price_usd);
///     }
///
///     let btc = client.get_asset("bitcoin").await?;
///     println!("BTC: {}", btc.data.price_usd);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinCapRestClient {
    http_client: Client,
    base_url: String,
    api_key: Option<ApiKey>,
    compression: Compression,
}

impl CoinCapRestClient {
    /// Create a new client without an API key
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialised. Use
    /// [`with_config`](Self::with_config) to handle that as an error.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default()).expect("Failed to create HTTP client")
    }

    /// Create a new client that authenticates with `api_key`
    ///
    /// # Panics
    ///
    /// Same as [`new`](Self::new).
    pub fn with_api_key(api_key: ApiKey) -> Self {
        Self::with_config(ClientConfig::default().with_api_key(api_key))
            .expect("Failed to create HTTP client")
    }

    /// Create a new client with custom configuration
    ///
    /// Builds a transport from `timeout_secs` and `user_agent` unless the
    /// configuration carries its own `http_client`.
    pub fn with_config(mut config: ClientConfig) -> RestResult<Self> {
        let http_client = match config.http_client.take() {
            Some(client) => client,
            None => Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
                .build()?,
        };

        Ok(Self::from_parts(http_client, config))
    }

    fn from_parts(http_client: Client, config: ClientConfig) -> Self {
        info!(
            base_url = %config.base_url,
            compression = config.compression.as_str(),
            "Created CoinCap REST client"
        );

        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            compression: config.compression,
        }
    }

    /// Check if requests carry an API key
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compression scheme requested from the server
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Send `GET {base_url}{path}` and decode the JSON body into `T`
    ///
    /// `query` must already be validated. Transport, decompression and
    /// decode errors are returned as they occur; nothing is retried.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> RestResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http_client
            .get(&url)
            .header(ACCEPT_ENCODING, self.compression.as_str());
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(api_key) = &self.api_key {
            request = request.header(AUTHORIZATION, api_key.bearer());
        }

        debug!(%url, ?query, "GET");

        let response = request.send().await?;
        let encoding = ContentEncoding::from_header(
            response
                .headers()
                .get(CONTENT_ENCODING)
                .and_then(|v| v.to_str().ok()),
        );
        let body = response.bytes().await?;

        decode_body(encoding, &body)
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Get asset endpoints
    pub fn assets(&self) -> AssetEndpoints<'_> {
        AssetEndpoints::new(self)
    }

    /// Get rate endpoints
    pub fn rates(&self) -> RateEndpoints<'_> {
        RateEndpoints::new(self)
    }

    /// Get exchange endpoints
    pub fn exchanges(&self) -> ExchangeEndpoints<'_> {
        ExchangeEndpoints::new(self)
    }

    /// Get market endpoints
    pub fn markets(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(self)
    }

    /// Get candle endpoints
    pub fn candles(&self) -> CandleEndpoints<'_> {
        CandleEndpoints::new(self)
    }

    // ========================================================================
    // Assets
    // ========================================================================

    /// List assets, optionally filtered and paginated
    pub async fn get_assets(&self, params: &GetAssetsParams) -> RestResult<AssetsData> {
        self.assets().list(params).await
    }

    /// Get a single asset by id (e.g. "bitcoin")
    pub async fn get_asset(&self, id: &str) -> RestResult<AssetData> {
        self.assets().get(id).await
    }

    /// Get an asset's price history
    pub async fn get_asset_history(
        &self,
        params: &GetAssetHistoryParams,
    ) -> RestResult<AssetHistoriesData> {
        self.assets().history(params).await
    }

    /// Get the markets an asset trades on
    pub async fn get_asset_markets(
        &self,
        params: &GetAssetMarketsParams,
    ) -> RestResult<AssetMarketsData> {
        self.assets().markets(params).await
    }

    // ========================================================================
    // Rates
    // ========================================================================

    /// Get USD conversion rates for all currencies
    pub async fn get_rates(&self) -> RestResult<RatesData> {
        self.rates().list().await
    }

    /// Get the USD conversion rate for one currency (e.g. "australian-dollar")
    pub async fn get_rate(&self, id: &str) -> RestResult<RateData> {
        self.rates().get(id).await
    }

    // ========================================================================
    // Exchanges
    // ========================================================================

    /// List exchanges
    pub async fn get_exchanges(&self) -> RestResult<ExchangesData> {
        self.exchanges().list().await
    }

    /// Get a single exchange by id (e.g. "kraken")
    pub async fn get_exchange(&self, id: &str) -> RestResult<ExchangeData> {
        self.exchanges().get(id).await
    }

    // ========================================================================
    // Markets & Candles
    // ========================================================================

    /// List markets matching the filters
    pub async fn get_markets(&self, params: &GetMarketsParams) -> RestResult<MarketsData> {
        self.markets().list(params).await
    }

    /// Get OHLCV candles for a market
    pub async fn get_candles(&self, params: &GetCandlesParams) -> RestResult<CandlesData> {
        self.candles().get(params).await
    }
}

impl Default for CoinCapRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinCapRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinCapRestClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.has_api_key())
            .field("compression", &self.compression)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API host, without trailing slash
    pub base_url: String,
    /// API key sent as a bearer token (optional)
    pub api_key: Option<ApiKey>,
    /// Compression requested from the server
    pub compression: Compression,
    /// Request timeout in seconds, ignored with a custom `http_client`
    pub timeout_secs: u64,
    /// Custom user agent, ignored with a custom `http_client`
    pub user_agent: Option<String>,
    /// Pre-built transport to use instead of building one
    pub http_client: Option<Client>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            compression: Compression::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            http_client: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration, with the API key from `COINCAP_API_KEY` if set
    pub fn from_env() -> RestResult<Self> {
        match ApiKey::from_env() {
            Ok(api_key) => Ok(Self::default().with_api_key(api_key)),
            Err(RestError::EnvVarNotSet(_)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Set compression scheme
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a pre-built transport
    pub fn with_http_client(mut self, http_client: Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}
