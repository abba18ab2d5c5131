use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to fetch {location}: {reason}")]
    Fetch {
        location: String,
        status: Option<u16>,
        reason: String,
    },

    #[error("Failed to parse archive: {0}")]
    ArchiveParse(String),

    #[error("Unsupported project source: {0}")]
    UnsupportedSource(String),

    #[error("Invalid path in project: {0}")]
    InvalidPath(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("File too large: {size} bytes (max: {max})")]
    FileTooLarge { size: u64, max: u64 },
}

impl LoaderError {
    /// Transport status code, if the failure came from a completed response
    pub fn status(&self) -> Option<u16> {
        match self {
            LoaderError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}
