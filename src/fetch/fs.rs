use super::Fetcher;
use crate::loader::LoaderError;
use async_trait::async_trait;
use tracing::debug;

/// Fetches locations as paths on the local filesystem.
///
/// Lets a project directory with a manifest be loaded without a web server.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFetcher;

#[async_trait]
impl Fetcher for FsFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoaderError> {
        let bytes = tokio::fs::read(location)
            .await
            .map_err(|e| LoaderError::Fetch {
                location: location.to_string(),
                status: None,
                reason: e.to_string(),
            })?;

        debug!("Read {} bytes from {}", bytes.len(), location);
        Ok(bytes)
    }
}
