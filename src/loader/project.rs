use super::LoaderError;
use crate::config::LoaderConfig;
use crate::security::PathSanitizer;
use crate::tree::{build_tree, TreeNode};
use serde::Serialize;
use std::collections::HashMap;

/// A file of a loaded project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    /// Sanitized relative path (e.g., "src/lib.rs")
    pub path: String,
    pub content: Vec<u8>,
}

/// Result of one load: files plus the sidebar tree built from their paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedProject {
    pub files: Vec<ProjectFile>,
    pub file_tree: Vec<TreeNode>,
}

impl LoadedProject {
    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.content.as_slice())
    }

    /// Paths in load order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.path.as_str())
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total content size in bytes
    pub fn total_size(&self) -> usize {
        self.files.iter().map(|file| file.content.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Mutable builder that accumulates files for one load
pub struct ProjectBuilder {
    files: Vec<ProjectFile>,
    /// Path -> position in `files`
    index: HashMap<String, usize>,
    total_size: u64,
    max_file_size: u64,
    max_total_size: u64,
}

impl ProjectBuilder {
    /// Create a new builder with default limits
    pub fn new() -> Self {
        Self::with_limits(&LoaderConfig::default())
    }

    /// Create a builder using the size limits of `config`
    pub fn with_limits(config: &LoaderConfig) -> Self {
        Self {
            files: Vec::new(),
            index: HashMap::new(),
            total_size: 0,
            max_file_size: config.max_file_size,
            max_total_size: config.max_total_size,
        }
    }

    /// Set maximum individual file size
    pub fn max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set maximum total project size
    pub fn max_total_size(mut self, size: u64) -> Self {
        self.max_total_size = size;
        self
    }

    /// Add a file; a path added twice keeps its first position and the
    /// latest content.
    pub fn add_file(&mut self, raw_path: &str, data: Vec<u8>) -> Result<(), LoaderError> {
        let path = PathSanitizer::sanitize(raw_path)?;

        let size = data.len() as u64;
        if size > self.max_file_size {
            return Err(LoaderError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        let replaced = self
            .index
            .get(&path)
            .map(|&i| self.files[i].content.len() as u64)
            .unwrap_or(0);
        let new_total = self.total_size - replaced + size;
        if new_total > self.max_total_size {
            return Err(LoaderError::FileTooLarge {
                size: new_total,
                max: self.max_total_size,
            });
        }
        self.total_size = new_total;

        match self.index.get(&path) {
            Some(&i) => self.files[i].content = data,
            None => {
                self.index.insert(path.clone(), self.files.len());
                self.files.push(ProjectFile {
                    path,
                    content: data,
                });
            }
        }

        Ok(())
    }

    /// Number of distinct files added so far
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Build the tree and hand out the finished project
    pub fn build(self) -> LoadedProject {
        let file_tree = build_tree(self.files.iter().map(|file| file.path.as_str()));
        LoadedProject {
            files: self.files,
            file_tree,
        }
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
