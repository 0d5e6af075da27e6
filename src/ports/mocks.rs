use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::AssetRecord;
use crate::ports::asset_source::{AssetSource, AssetSourceError};

/// Mock asset source that records calls and allows controlled responses
#[derive(Debug, Default)]
pub struct MockAssetSource {
    calls: Arc<Mutex<u32>>,
    records: Arc<Mutex<Option<Vec<AssetRecord>>>>,
    error: Arc<Mutex<Option<String>>>,
}

impl MockAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the records returned by `fetch_assets`
    pub fn with_records(self, records: Vec<AssetRecord>) -> Self {
        *self.records.lock().unwrap() = Some(records);
        self
    }

    /// Builder method to set the raw JSON body the records are parsed from
    pub fn with_json(self, body: &str) -> Self {
        let records: Vec<AssetRecord> =
            serde_json::from_str(body).expect("mock body must be a JSON array of records");
        self.with_records(records)
    }

    /// Builder method to make every fetch fail with a request error
    pub fn with_request_error(self, message: &str) -> Self {
        *self.error.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Number of `fetch_assets` calls made so far
    pub fn call_count(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AssetSource for MockAssetSource {
    async fn fetch_assets(&self) -> Result<Vec<AssetRecord>, AssetSourceError> {
        *self.calls.lock().unwrap() += 1;

        if let Some(message) = self.error.lock().unwrap().clone() {
            return Err(AssetSourceError::Request(message));
        }

        self.records
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AssetSourceError::Request("no response configured".to_string()))
    }
}
