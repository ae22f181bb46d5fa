//! API endpoint implementations
//!
//! Each group borrows the client and maps one URL family onto its
//! parameter struct and response model.

pub mod assets;
pub mod candles;
pub mod exchanges;
pub mod markets;
pub mod rates;

pub use assets::AssetEndpoints;
pub use candles::CandleEndpoints;
pub use exchanges::ExchangeEndpoints;
pub use markets::MarketEndpoints;
pub use rates::RateEndpoints;

use std::borrow::Cow;

use crate::error::{RestError, RestResult};

/// Reject an empty path identifier and percent-encode it as one URL segment
pub(crate) fn path_id(id: &str) -> RestResult<Cow<'_, str>> {
    if id.is_empty() {
        return Err(RestError::MissingParameter { name: "id" });
    }
    Ok(urlencoding::encode(id))
}
