/// One entry of a parsed archive, listed without its content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Raw path as stored in the archive (e.g., "repo-main/src/lib.rs")
    pub path: String,
    pub is_dir: bool,
    /// Uncompressed size declared by the archive; 0 for directories
    pub size: u64,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
        }
    }

    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
        }
    }
}
