//! Transports used to retrieve manifests, project files and archives.
//!
//! The loader only sees the [`Fetcher`] and [`SandboxFetcher`] traits, so hosts
//! can substitute their own transport and tests can use fakes.

mod auto;
mod fs;
mod http;


pub use auto::{is_url, AutoFetcher};
pub use fs::FsFetcher;
pub use http::HttpFetcher;

use crate::loader::LoaderError;
use async_trait::async_trait;

/// Retrieves the raw bytes behind a location (URL or path)
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoaderError>;
}

/// Retrieves a URL from inside a sandboxed network context
///
/// Used for sources whose direct fetch would be blocked by the caller's
/// environment (see [`crate::requires_vm_loading`]).
#[async_trait]
pub trait SandboxFetcher: Send + Sync {
    async fn fetch_in_sandbox(&self, url: &str) -> Result<Vec<u8>, LoaderError>;
}

/// A native process has no cross-origin policy, so any fetcher can stand in
/// for the sandbox.
#[async_trait]
impl<F: Fetcher + ?Sized> SandboxFetcher for F {
    async fn fetch_in_sandbox(&self, url: &str) -> Result<Vec<u8>, LoaderError> {
        self.fetch(url).await
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for &F {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, LoaderError> {
        (**self).fetch(location).await
    }
}
