use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::AssetRecord;
use crate::ports::{AssetSource, AssetSourceError};

const ASSETS_PATH: &str = "/api/v1/assets";

#[derive(Debug, Error)]
pub enum AssetsApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Client for the local token API's assets endpoint.
///
/// One GET, no auth, no custom headers. The status code is not inspected:
/// whatever body comes back is decoded as `{"data": [...]}`, and any
/// network or decode failure surfaces as a single error.
#[derive(Debug, Clone)]
pub struct AssetsClient {
    http: Client,
    base_url: String,
}

impl AssetsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AssetsApiError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn assets_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ASSETS_PATH)
    }

    /// Fetch the asset list, in the order the backend serialized it.
    pub async fn get_assets(&self) -> Result<Vec<AssetRecord>, AssetsApiError> {
        let response: AssetsResponse = self
            .http
            .get(self.assets_url())
            .send()
            .await?
            .json()
            .await?;

        Ok(response.data)
    }
}

#[async_trait]
impl AssetSource for AssetsClient {
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, AssetSourceError> {
        self.get_assets().await.map_err(|e| match e {
            AssetsApiError::HttpError(inner) if inner.is_decode() => {
                AssetSourceError::Decode(inner.to_string())
            }
            AssetsApiError::HttpError(inner) => AssetSourceError::Request(inner.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct AssetsResponse {
    data: Vec<AssetRecord>,
}
