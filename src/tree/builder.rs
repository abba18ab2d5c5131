use super::{compare_names, TreeNode};
use std::collections::HashMap;

/// In-progress node, owned by exactly one level map until conversion.
/// `children: None` marks a file.
#[derive(Default)]
struct Pending {
    children: Option<HashMap<String, Pending>>,
}

/// Build a sorted folder/file tree from flat `/`-separated paths.
///
/// Within every level folders come first, then files, each group ordered by
/// [`compare_names`]. The result does not depend on input order and duplicate
/// paths collapse into one leaf. Empty paths and empty segments are ignored.
///
/// A name used both as a file and as a folder (`a` and `a/b`) becomes a
/// folder; the file leaf is dropped.
pub fn build_tree<I, S>(paths: I) -> Vec<TreeNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut root: HashMap<String, Pending> = HashMap::new();

    for path in paths {
        let parts: Vec<&str> = path
            .as_ref()
            .split('/')
            .filter(|part| !part.is_empty())
            .collect();

        let Some((file_name, folders)) = parts.split_last() else {
            continue;
        };

        let mut level = &mut root;
        for folder in folders {
            level = level
                .entry((*folder).to_string())
                .or_default()
                .children
                .get_or_insert_with(HashMap::new);
        }

        level.entry((*file_name).to_string()).or_default();
    }

    into_sorted(root)
}

fn into_sorted(level: HashMap<String, Pending>) -> Vec<TreeNode> {
    let mut folders = Vec::new();
    let mut files = Vec::new();

    for (name, pending) in level {
        match pending.children {
            Some(children) => folders.push(TreeNode::Folder {
                name,
                children: into_sorted(children),
            }),
            None => files.push(TreeNode::File { name }),
        }
    }

    folders.sort_by(|a, b| compare_names(a.name(), b.name()));
    files.sort_by(|a, b| compare_names(a.name(), b.name()));

    folders.extend(files);
    folders
}
