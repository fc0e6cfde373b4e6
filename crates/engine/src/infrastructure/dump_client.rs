//! HTTP client for the upstream collection dump API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::infrastructure::ports::{CollectionKind, DumpFetcher, FetchError};

/// Map and item dumps run to tens of megabytes.
const DUMP_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct HttpDumpFetcher {
    client: Client,
    base_url: String,
}

impl HttpDumpFetcher {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DUMP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn dump_url(&self, kind: CollectionKind) -> String {
        format!("{}/{}/dump", self.base_url, kind.as_str())
    }
}

#[async_trait]
impl DumpFetcher for HttpDumpFetcher {
    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<u8>, FetchError> {
        let url = self.dump_url(kind);
        tracing::debug!(collection = %kind, url = %url, "Fetching collection dump");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                collection: kind,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                collection: kind,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            collection: kind,
            message: e.to_string(),
        })?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_urls_follow_collection_names() {
        let fetcher = HttpDumpFetcher::new("https://eor-api.exile-studios.com/api/");
        assert_eq!(
            fetcher.dump_url(CollectionKind::Quests),
            "https://eor-api.exile-studios.com/api/quests/dump"
        );
    }
}
