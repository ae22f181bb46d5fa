//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON payloads captured from the live CoinCap API v2 and a
//! mock Axum server that records every request it receives.

use std::{collections::HashMap, io::Write, net::SocketAddr, sync::Arc};

use axum::{
    extract::Query,
    http::{
        header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE, USER_AGENT},
        HeaderMap, Uri,
    },
    response::{IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use coincap_rest::{ClientConfig, CoinCapRestClient};
use flate2::write::{GzEncoder, ZlibEncoder};
use tokio::sync::Mutex;

pub const ASSETS: &str = r#"{
    "data": [
        {"id": "uniswap", "rank": "11", "symbol": "UNI", "name": "Uniswap", "supply": "588624203.0000000000000000", "maxSupply": "1000000000.0000000000000000", "marketCapUsd": "11271633254.6508787432843008", "volumeUsd24Hr": "347372738.2506462387412373", "priceUsd": "19.1490744015962839", "changePercent24Hr": "5.3180898022698420", "vwap24Hr": "18.7854226735394736", "explorer": "https://etherscan.io/token/0x1f9840a85d5af5bf1d1762f925bdaddc4201f984"},
        {"id": "bitcoin-cash", "rank": "12", "symbol": "BCH", "name": "Bitcoin Cash", "supply": "18780231.2500000000000000", "maxSupply": "21000000.0000000000000000", "marketCapUsd": "9858297626.6418512386007763", "volumeUsd24Hr": "872347290.5703658862917651", "priceUsd": "524.9335484580632171", "changePercent24Hr": "7.3542133498574318", "vwap24Hr": "513.6016829402702591", "explorer": "https://blockchair.com/bitcoin-cash/blocks"}
    ],
    "timestamp": 1627299026781
}"#;

pub const ASSET_ID: &str = r#"{
    "data": {
        "id": "polkadot",
        "rank": "9",
        "symbol": "DOT",
        "name": "Polkadot",
        "supply": "1013089106.2001500000000000",
        "maxSupply": null,
        "marketCapUsd": "14964432257.0276593916630207",
        "volumeUsd24Hr": "567049854.0292255884810806",
        "priceUsd": "14.7710918668897673",
        "changePercent24Hr": "10.0829076670949820",
        "vwap24Hr": "14.3158259816882364",
        "explorer": "https://polkascan.io/polkadot"
    },
    "timestamp": 1627299055657
}"#;

pub const ASSET_HISTORY: &str = r#"{
    "data": [
        {"priceUsd": "14.6070423366046230", "time": 1624665600000, "circulatingSupply": "1013089106.25717", "date": "2021-06-26T00:00:00.000Z"},
        {"priceUsd": "14.6849916582587371", "time": 1624667400000, "circulatingSupply": "1013089106.25717", "date": "2021-06-26T00:30:00.000Z"}
    ],
    "timestamp": 1627302497523
}"#;

pub const ASSET_MARKETS: &str = r#"{
    "data": [
        {"exchangeId": "Binance", "baseId": "solana", "quoteId": "tether", "baseSymbol": "SOL", "quoteSymbol": "USDT", "volumeUsd24Hr": "159553470.5460316254522305", "priceUsd": "28.5837806637094710", "volumePercent": "58.9577416612357735"},
        {"exchangeId": "FTX", "baseId": "solana", "quoteId": "united-states-dollar", "baseSymbol": "SOL", "quoteSymbol": "USD", "volumeUsd24Hr": "49312637.1427405000000000", "priceUsd": "28.6250000000000000", "volumePercent": "18.2216289378009880"}
    ],
    "timestamp": 1627299099913
}"#;

pub const RATES: &str = r#"{
    "data": [
        {"id": "australian-dollar", "symbol": "AUD", "currencySymbol": "$", "type": "fiat", "rateUsd": "0.7379609535000000"},
        {"id": "usd-coin", "symbol": "USDC", "currencySymbol": null, "type": "crypto", "rateUsd": "1.0000000000000000"}
    ],
    "timestamp": 1627299125011
}"#;

pub const RATE_ID: &str = r#"{
    "data": {"id": "australian-dollar", "symbol": "AUD", "currencySymbol": "$", "type": "fiat", "rateUsd": "0.7379609535000000"},
    "timestamp": 1627299161487
}"#;

pub const EXCHANGES: &str = r#"{
    "data": [
        {"exchangeId": "binance", "name": "Binance", "rank": "1", "percentTotalVolume": "40.190598349471437549", "volumeUsd": "27000197232.0614542113302405", "tradingPairs": "1093", "socket": true, "exchangeUrl": "https://www.binance.com/", "updated": 1627299181398},
        {"exchangeId": "dodo", "name": "DODO", "rank": "70", "percentTotalVolume": null, "volumeUsd": null, "tradingPairs": "0", "socket": null, "exchangeUrl": null, "updated": 1627299181398}
    ],
    "timestamp": 1627299185127
}"#;

pub const EXCHANGE: &str = r#"{
    "data": {"exchangeId": "kraken", "name": "Kraken", "rank": "4", "percentTotalVolume": "1.845246588138155764", "volumeUsd": "1239651159.14623069901081", "tradingPairs": "141", "socket": false, "exchangeUrl": "https://kraken.com", "updated": 1627299181398},
    "timestamp": 1627299196117
}"#;

pub const MARKETS: &str = r#"{
    "data": [
        {"exchangeId": "kraken", "rank": "12", "baseSymbol": "ADA", "baseId": "cardano", "quoteSymbol": "USD", "quoteId": "united-states-dollar", "priceQuote": "1.2530870000000000", "priceUsd": "1.2530870000000000", "volumeUsd24Hr": "23052213.7416013069540000", "percentExchangeVolume": "1.8594928913406306", "tradesCount24Hr": "8102", "updated": 1627299239946}
    ],
    "timestamp": 1627299245271
}"#;

pub const CANDLES: &str = r#"{
    "data": [
        {"open": "15.1690000000000000", "high": "15.1740000000000000", "low": "15.0120000000000000", "close": "15.1300000000000000", "volume": "183240.5920000000000000", "period": 1624665600000},
        {"open": "15.1300000000000000", "high": "15.2100000000000000", "low": "15.0810000000000000", "close": "15.1990000000000000", "volume": "98514.3100000000000000", "period": 1624669200000}
    ],
    "timestamp": 1627299287016
}"#;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept_encoding: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Default)]
pub struct TestServerState {
    /// Encode bodies per the request's `Accept-Encoding`
    pub compress: bool,
    pub requests: Mutex<Vec<RecordedRequest>>,
}

impl TestServerState {
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

fn header(headers: &HeaderMap, name: axum::http::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

pub fn zlib(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(bytes).expect("zlib write");
    encoder.finish().expect("zlib finish")
}

fn respond(compress: bool, headers: &HeaderMap, body: &'static str) -> Response {
    let accept = header(headers, ACCEPT_ENCODING).unwrap_or_default();

    match (compress, accept.as_str()) {
        (true, "gzip") => (
            [(CONTENT_TYPE, "application/json"), (CONTENT_ENCODING, "gzip")],
            gzip(body.as_bytes()),
        )
            .into_response(),
        (true, "deflate") => (
            [(CONTENT_TYPE, "application/json"), (CONTENT_ENCODING, "deflate")],
            zlib(body.as_bytes()),
        )
            .into_response(),
        _ => ([(CONTENT_TYPE, "application/json")], body).into_response(),
    }
}

fn fixture(state: Arc<TestServerState>, body: &'static str) -> MethodRouter {
    get(
        move |uri: Uri, Query(query): Query<HashMap<String, String>>, headers: HeaderMap| {
            let state = state.clone();
            async move {
                state.requests.lock().await.push(RecordedRequest {
                    path: uri.path().to_string(),
                    query,
                    authorization: header(&headers, AUTHORIZATION),
                    accept_encoding: header(&headers, ACCEPT_ENCODING),
                    user_agent: header(&headers, USER_AGENT),
                });
                respond(state.compress, &headers, body)
            }
        },
    )
}

fn create_router(state: Arc<TestServerState>) -> Router {
    Router::new()
        .route("/v2/assets", fixture(state.clone(), ASSETS))
        .route("/v2/assets/:id", fixture(state.clone(), ASSET_ID))
        .route("/v2/assets/:id/history", fixture(state.clone(), ASSET_HISTORY))
        .route("/v2/assets/:id/markets", fixture(state.clone(), ASSET_MARKETS))
        .route("/v2/rates", fixture(state.clone(), RATES))
        .route("/v2/rates/:id", fixture(state.clone(), RATE_ID))
        .route("/v2/exchanges", fixture(state.clone(), EXCHANGES))
        .route("/v2/exchanges/:id", fixture(state.clone(), EXCHANGE))
        .route("/v2/markets", fixture(state.clone(), MARKETS))
        .route("/v2/candles", fixture(state, CANDLES))
}

pub async fn start_test_server(state: Arc<TestServerState>) -> SocketAddr {
    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test server");
    let addr = listener.local_addr().expect("missing local addr");

    tokio::spawn(async move {
        axum::serve(listener, router.into_make_service())
            .await
            .expect("test server failed");
    });

    addr
}

/// Start a mock server and a client pointed at it
pub async fn setup(compress: bool, config: ClientConfig) -> (Arc<TestServerState>, CoinCapRestClient) {
    let state = Arc::new(TestServerState {
        compress,
        ..Default::default()
    });
    let addr = start_test_server(state.clone()).await;

    let client = CoinCapRestClient::with_config(config.with_base_url(format!("http://{}/v2", addr)))
        .expect("failed to create client");

    (state, client)
}
