use super::Fetcher;
use crate::config::LoaderConfig;
use crate::loader::LoaderError;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Fetches locations as HTTP(S) URLs
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoaderError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| LoaderError::HttpClient(e.to_string()))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoaderError> {
        debug!("GET {}", location);

        let response = self
            .http
            .get(location)
            .send()
            .await
            .map_err(|e| LoaderError::Fetch {
                location: location.to_string(),
                status: None,
                reason: format!("HTTP request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoaderError::Fetch {
                location: location.to_string(),
                status: Some(status.as_u16()),
                reason: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let bytes = response.bytes().await.map_err(|e| LoaderError::Fetch {
            location: location.to_string(),
            status: Some(status.as_u16()),
            reason: format!("Failed to read response body: {}", e),
        })?;

        debug!("Fetched {} bytes from {}", bytes.len(), location);
        Ok(bytes.to_vec())
    }
}
