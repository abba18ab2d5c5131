use super::{Fetcher, FsFetcher, HttpFetcher};
use crate::config::LoaderConfig;
use crate::loader::LoaderError;
use async_trait::async_trait;

/// Picks the transport per location: HTTP(S) URLs go over the network,
/// anything else is read from disk.
///
/// One instance holds a single HTTP client, so it can serve as both the
/// loader's fetcher and the sandbox.
pub struct AutoFetcher {
    http: HttpFetcher,
    fs: FsFetcher,
}

impl AutoFetcher {
    pub fn new(config: &LoaderConfig) -> Result<Self, LoaderError> {
        Ok(Self {
            http: HttpFetcher::new(config)?,
            fs: FsFetcher,
        })
    }
}

pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[async_trait]
impl Fetcher for AutoFetcher {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoaderError> {
        if is_url(location) {
            self.http.fetch(location).await
        } else {
            self.fs.fetch(location).await
        }
    }
}
