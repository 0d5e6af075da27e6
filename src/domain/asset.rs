use std::fmt;

use serde::Deserialize;

/// Token price as the assets API reports it.
///
/// The backend serves prices either as JSON numbers or as numeric strings
/// (string prices show up on routes quoted through the router). Display
/// reproduces the value exactly as received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Number(n) => write!(f, "{}", n),
            Price::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One entry of the assets API `data` array.
///
/// Deserialization is deliberately lenient: the backend attaches extra
/// fields (address, decimals, logoURI, ...) which are ignored, and records
/// missing any of the three fields we care about still decode.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default)]
    pub stable: bool,
}

/// Projection of an [`AssetRecord`] down to the reported fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub symbol: String,
    pub price: Option<Price>,
    pub stable: bool,
}

impl From<AssetRecord> for ReportRow {
    fn from(record: AssetRecord) -> Self {
        Self {
            symbol: record.symbol,
            price: record.price,
            stable: record.stable,
        }
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token: {} Price: ", self.symbol)?;
        match &self.price {
            Some(price) => write!(f, "{}", price),
            None => write!(f, "null"),
        }
    }
}
