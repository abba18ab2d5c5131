// Public API exports
pub mod archive;
pub mod config;
pub mod fetch;
pub mod loader;
pub mod manifest;
pub mod security;
pub mod source;
pub mod tree;

// Re-export main types for convenience
pub use archive::{extract_archive, ArchiveEntry, ArchiveExtractor, ArchiveReader, ZipReader};
pub use config::LoaderConfig;
pub use fetch::{AutoFetcher, Fetcher, FsFetcher, HttpFetcher, SandboxFetcher};
pub use loader::{LoadedProject, LoaderError, ProjectBuilder, ProjectFile, ProjectLoader};
pub use manifest::{load_manifest, parse_manifest, render_manifest};
pub use security::PathSanitizer;
pub use source::{get_vm_load_config, requires_vm_loading, ProjectSource, VmLoadConfig};
pub use tree::{build_tree, compare_names, render_tree, TreeNode};
