use crate::loader::LoaderError;

pub struct PathSanitizer;

impl PathSanitizer {
    /// Normalize a project-relative path coming from a manifest or an archive.
    ///
    /// Paths are always `/`-separated regardless of host platform. Rejects:
    /// - Absolute paths (`/etc/passwd`, `C:/Windows`)
    /// - Parent directory traversal (`../`)
    ///
    /// `.` segments and repeated separators are dropped; hidden files are kept.
    pub fn sanitize(raw_path: &str) -> Result<String, LoaderError> {
        if raw_path.is_empty() {
            return Err(LoaderError::InvalidPath("Empty path".to_string()));
        }

        if raw_path.starts_with('/') || Self::has_drive_prefix(raw_path) {
            return Err(LoaderError::InvalidPath(format!(
                "Absolute path not allowed: {}",
                raw_path
            )));
        }

        let mut segments = Vec::new();
        for segment in raw_path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(LoaderError::InvalidPath(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                part => segments.push(part),
            }
        }

        if segments.is_empty() {
            return Err(LoaderError::InvalidPath(format!(
                "No valid components: {}",
                raw_path
            )));
        }

        Ok(segments.join("/"))
    }

    /// Join a base location (directory path or URL) with a relative path
    pub fn join(base: &str, relative: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", base, relative)
        }
    }

    fn has_drive_prefix(path: &str) -> bool {
        let bytes = path.as_bytes();
        bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    }
}
