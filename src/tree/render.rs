//! ASCII rendering of project trees for terminals.

use super::TreeNode;

/// Render a tree as ASCII art, folders suffixed with `/`.
///
/// Example output:
/// ```text
/// src/
/// ├── parser/
/// │   └── mod.rs
/// └── lib.rs
/// README.md
/// ```
pub fn render_tree(nodes: &[TreeNode]) -> String {
    let mut output = String::new();
    for node in nodes {
        push_label(&mut output, node);
        render_children(&mut output, node.children(), "");
    }
    output
}

fn render_children(output: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        let branch = if is_last { "└── " } else { "├── " };
        output.push_str(prefix);
        output.push_str(branch);
        push_label(output, child);

        let continuation = if is_last { "    " } else { "│   " };
        render_children(output, child.children(), &format!("{}{}", prefix, continuation));
    }
}

fn push_label(output: &mut String, node: &TreeNode) {
    output.push_str(node.name());
    if node.is_folder() {
        output.push('/');
    }
    output.push('\n');
}
