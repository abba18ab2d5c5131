//! Line-oriented project manifests: one relative path per line, blank lines
//! and `#` comments ignored.

#[cfg(test)]
mod tests;

use crate::fetch::Fetcher;
use crate::loader::LoaderError;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Fetch a manifest and return its paths in manifest order
pub async fn load_manifest<F>(fetcher: &F, location: &str) -> Result<Vec<String>, LoaderError>
where
    F: Fetcher + ?Sized,
{
    let bytes = fetcher.fetch(location).await?;
    let text = String::from_utf8_lossy(&bytes);
    let paths = parse_manifest(&text);

    debug!("Manifest {} lists {} paths", location, paths.len());
    Ok(paths)
}

/// Parse manifest text into trimmed, non-empty, non-comment lines
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Render paths as manifest text, one per line
pub fn render_manifest<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for path in paths {
        out.push_str(path.as_ref());
        out.push('\n');
    }
    out
}

/// List every file below `root` as a sorted manifest path list.
///
/// Version control directories and the manifest file itself are skipped.
pub fn scan_directory(root: &Path, manifest_name: &str) -> std::io::Result<Vec<String>> {
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !matches!(entry.file_name().to_str(), Some(".git" | ".hg" | ".svn")));

    for entry in walker {
        let entry = entry.map_err(std::io::Error::other)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let relative: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let relative = relative.join("/");

        if relative == manifest_name {
            continue;
        }
        paths.push(relative);
    }

    paths.sort();
    Ok(paths)
}
