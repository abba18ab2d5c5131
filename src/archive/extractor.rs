use super::{ArchiveEntry, ArchiveReader, ZipReader};
use crate::config::LoaderConfig;
use crate::loader::{LoadedProject, LoaderError, ProjectBuilder};
use tracing::debug;

/// Turns archive bytes into a [`LoadedProject`].
///
/// ```ignore
/// let project = ArchiveExtractor::new()
///     .strip_prefix(true)
///     .sub_path("crates/core")
///     .extract(&bytes)?;
/// ```
pub struct ArchiveExtractor<R = ZipReader> {
    reader: R,
    strip_prefix: bool,
    sub_path: Option<String>,
    config: LoaderConfig,
}

impl ArchiveExtractor<ZipReader> {
    /// Zip extractor that strips the common top-level directory
    pub fn new() -> Self {
        Self::with_reader(ZipReader)
    }
}

impl Default for ArchiveExtractor<ZipReader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ArchiveReader> ArchiveExtractor<R> {
    pub fn with_reader(reader: R) -> Self {
        Self {
            reader,
            strip_prefix: true,
            sub_path: None,
            config: LoaderConfig::default(),
        }
    }

    /// Whether to detect and remove a directory shared by every entry
    pub fn strip_prefix(mut self, strip: bool) -> Self {
        self.strip_prefix = strip;
        self
    }

    /// Keep only files below this directory, relative to the stripped root
    pub fn sub_path(mut self, sub_path: impl Into<String>) -> Self {
        self.sub_path = Some(sub_path.into());
        self
    }

    /// Use the size limits of `config`
    pub fn config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn extract(&self, bytes: &[u8]) -> Result<LoadedProject, LoaderError> {
        let entries = self.reader.parse(bytes)?;

        let prefix = if self.strip_prefix {
            detect_prefix(&entries).to_string()
        } else {
            String::new()
        };

        let sub_path = self
            .sub_path
            .as_deref()
            .map(|sub| sub.trim_matches('/'))
            .filter(|sub| !sub.is_empty());
        let full_prefix = match sub_path {
            Some(sub) => collapse_slashes(&format!("{}{}/", prefix, sub)),
            None => prefix.to_string(),
        };

        debug!(
            "Listing {} entries (prefix: {:?}, filter: {:?})",
            entries.len(),
            prefix,
            sub_path
        );

        let mut kept: Vec<(usize, &str)> = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.is_dir {
                continue;
            }
            if sub_path.is_some() && !entry.path.starts_with(&full_prefix) {
                continue;
            }

            let relative = if !full_prefix.is_empty() && entry.path.starts_with(&full_prefix) {
                &entry.path[full_prefix.len()..]
            } else if !prefix.is_empty() && entry.path.starts_with(&prefix) {
                &entry.path[prefix.len()..]
            } else {
                entry.path.as_str()
            };

            if relative.is_empty() {
                continue;
            }

            kept.push((index, relative));
        }

        let indices: Vec<usize> = kept.iter().map(|(index, _)| *index).collect();
        let contents = self.reader.read(bytes, &indices, &self.config)?;

        let mut builder = ProjectBuilder::with_limits(&self.config);
        for ((_, relative), content) in kept.into_iter().zip(contents) {
            builder.add_file(relative, content)?;
        }

        debug!("Extracted {} files", builder.file_count());
        Ok(builder.build())
    }
}

/// Extract zip bytes with default limits
pub fn extract_archive(
    bytes: &[u8],
    strip_prefix: bool,
    sub_path: Option<&str>,
) -> Result<LoadedProject, LoaderError> {
    let mut extractor = ArchiveExtractor::new().strip_prefix(strip_prefix);
    if let Some(sub) = sub_path {
        extractor = extractor.sub_path(sub);
    }
    extractor.extract(bytes)
}

/// The leading directory (with its trailing `/`) of the first entry, if every
/// entry starts with it; otherwise empty.
pub fn detect_prefix(entries: &[ArchiveEntry]) -> &str {
    let Some(first) = entries.first() else {
        return "";
    };

    let candidate = match first.path.find('/') {
        Some(slash) if slash > 0 => &first.path[..=slash],
        _ => return "",
    };

    if entries.iter().all(|entry| entry.path.starts_with(candidate)) {
        candidate
    } else {
        ""
    }
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}
