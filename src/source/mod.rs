//! Project source descriptors and the VM delegation projection.

#[cfg(test)]
mod tests;

use crate::config::{DEFAULT_REF, GITHUB_API_BASE};
use serde::{Deserialize, Serialize};

/// Where a project comes from.
///
/// JSON shape: `{"type": "local", "path": ..., "manifestPath": ...}`,
/// `{"type": "zip", "url": ..., "stripPrefix": ..., "useVm": ...}` or
/// `{"type": "github", "owner": ..., "repo": ..., "ref": ..., "path": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectSource {
    /// Static directory listed by a manifest
    Local {
        path: String,
        /// Defaults to `{path}/manifest.txt`
        #[serde(
            default,
            rename = "manifestPath",
            skip_serializing_if = "Option::is_none"
        )]
        manifest_path: Option<String>,
    },
    /// Zip archive at a URL
    Zip {
        url: String,
        /// Strip the top-level directory shared by all entries (default: true)
        #[serde(
            default,
            rename = "stripPrefix",
            skip_serializing_if = "Option::is_none"
        )]
        strip_prefix: Option<bool>,
        /// Fetch through the sandbox instead of directly
        #[serde(default, rename = "useVm")]
        use_vm: bool,
    },
    /// GitHub repository, downloaded as a zipball
    Github {
        owner: String,
        repo: String,
        /// Branch, tag or commit (default: `main`)
        #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
        git_ref: Option<String>,
        /// Subdirectory of the repository to load
        #[serde(default, skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },
}

impl ProjectSource {
    pub fn local(path: impl Into<String>) -> Self {
        ProjectSource::Local {
            path: path.into(),
            manifest_path: None,
        }
    }

    pub fn zip(url: impl Into<String>) -> Self {
        ProjectSource::Zip {
            url: url.into(),
            strip_prefix: None,
            use_vm: false,
        }
    }

    pub fn github(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ProjectSource::Github {
            owner: owner.into(),
            repo: repo.into(),
            git_ref: None,
            path: None,
        }
    }

    /// Human-readable one-line description
    pub fn description(&self) -> String {
        match self {
            ProjectSource::Local { path, .. } => format!("local project at {}", path),
            ProjectSource::Zip { url, use_vm, .. } => {
                if *use_vm {
                    format!("zip archive {} (via sandbox)", url)
                } else {
                    format!("zip archive {}", url)
                }
            }
            ProjectSource::Github {
                owner,
                repo,
                git_ref,
                path,
            } => {
                let mut out = format!(
                    "github {}/{}@{}",
                    owner,
                    repo,
                    git_ref.as_deref().unwrap_or(DEFAULT_REF)
                );
                if let Some(path) = path {
                    out.push_str(&format!(" ({})", path));
                }
                out
            }
        }
    }
}

/// Parameters for fetching and extracting an archive inside a sandbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VmLoadConfig {
    pub url: String,
    pub strip_prefix: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
}

/// Whether `source` must be loaded through the sandbox
pub fn requires_vm_loading(source: &ProjectSource) -> bool {
    matches!(
        source,
        ProjectSource::Github { .. } | ProjectSource::Zip { use_vm: true, .. }
    )
}

/// Sandbox fetch parameters for `source`, or `None` if it loads directly.
///
/// Performs no I/O.
pub fn get_vm_load_config(source: &ProjectSource) -> Option<VmLoadConfig> {
    match source {
        ProjectSource::Github {
            owner,
            repo,
            git_ref,
            path,
        } => {
            let git_ref = git_ref
                .as_deref()
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_REF);
            Some(VmLoadConfig {
                url: format!(
                    "{}/repos/{}/{}/zipball/{}",
                    GITHUB_API_BASE, owner, repo, git_ref
                ),
                strip_prefix: true,
                sub_path: path.clone(),
            })
        }
        ProjectSource::Zip {
            url,
            strip_prefix,
            use_vm: true,
        } => Some(VmLoadConfig {
            url: url.clone(),
            strip_prefix: strip_prefix.unwrap_or(true),
            sub_path: None,
        }),
        _ => None,
    }
}
