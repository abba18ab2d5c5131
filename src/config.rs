//! Configuration for project loading

use std::time::Duration;

/// Branch used for GitHub sources that name no ref
pub const DEFAULT_REF: &str = "main";

/// Base of the GitHub REST API used for zipball downloads
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Manifest file looked up in a local project directory by default
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.txt";

#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Per-request timeout for the HTTP transport
    pub timeout: Duration,
    pub user_agent: String,
    /// Largest single file accepted into a project
    pub max_file_size: u64,
    /// Largest total content size of a project
    pub max_total_size: u64,
    /// File name appended to a local source path when no manifest path is given
    pub manifest_name: String,
}

impl LoaderConfig {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    pub fn max_total_size(mut self, size: u64) -> Self {
        self.max_total_size = size;
        self
    }

    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("project-ingest/{}", env!("CARGO_PKG_VERSION")),
            max_file_size: 50 * 1024 * 1024,   // 50 MB per file
            max_total_size: 500 * 1024 * 1024, // 500 MB total
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}
