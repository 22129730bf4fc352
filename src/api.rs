//! Tyradex catalog client

use std::sync::OnceLock;

use reqwest::StatusCode;

use crate::catalog;
use crate::pokemon::Pokemon;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog server answered {0}")]
    Status(StatusCode),
    #[error("catalog payload is not a Pokemon list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch the whole catalog once, without the sentinel entry, sorted by id.
pub async fn fetch_catalog(url: &str) -> Result<Vec<Pokemon>, CatalogError> {
    let response = http_client().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }
    let bytes = response.bytes().await?;
    let raw = decode_catalog(&bytes)?;
    Ok(catalog::prepare(raw))
}

pub fn decode_catalog(bytes: &[u8]) -> Result<Vec<Pokemon>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
