mod builder;
mod collate;
mod render;


pub use builder::build_tree;
pub use collate::compare_names;
pub use render::render_tree;

use serde::{Deserialize, Serialize};

/// A node in the sidebar tree
///
/// Serializes as `{"type": "folder", "name": ..., "files": [...]}` or
/// `{"type": "file", "name": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Folder {
        name: String,
        #[serde(rename = "files")]
        children: Vec<TreeNode>,
    },
    File {
        name: String,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder { name, .. } | TreeNode::File { name } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder { .. })
    }

    /// Children of a folder; files have none
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Folder { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}
