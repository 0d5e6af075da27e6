use async_trait::async_trait;
use thiserror::Error;

use crate::domain::AssetRecord;

/// Asset source error type
#[derive(Error, Debug)]
pub enum AssetSourceError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Asset source port trait
///
/// Abstracts where the asset records come from so the reporter can be
/// exercised without a running backend.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the full asset list, in backend order.
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, AssetSourceError>;
}
