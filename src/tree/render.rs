use std::fmt;

use super::Node;

const ROOT_LABEL: &str = "Raiz: ";
const LEFT_LABEL: &str = "E--- ";
const RIGHT_LABEL: &str = "D--- ";
const INDENT_WIDTH: usize = 4;

/// Indented, line-per-node display of a tree's structure
///
/// Each line is `<indent><label><key>` where the indent is 4 spaces per level of depth and the
/// label is `Raiz: ` for the root, `E--- ` for a left child and `D--- ` for a right child. If a
/// node has any children, both are shown and the missing one is printed as `None`. An empty tree
/// renders as `Raiz: None`.
///
/// # Examples
///
/// ```
/// use avl::AvlTree;
///
/// let tree: AvlTree<_> = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(tree.render().to_string(), "Raiz: 2\n    E--- 1\n    D--- 3\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Render<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Render<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {root}
    }
}

impl<'a, K: fmt::Display> fmt::Display for Render<'a, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtree(f, self.root, 0, ROOT_LABEL)
    }
}

fn write_subtree<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: Option<&Node<K>>,
    depth: usize,
    label: &str,
) -> fmt::Result {
    let indent = depth * INDENT_WIDTH;
    let node = match node {
        Some(node) => node,
        None => return writeln!(f, "{:indent$}{}None", "", label, indent = indent),
    };

    writeln!(f, "{:indent$}{}{}", "", label, node.key(), indent = indent)?;
    if node.has_left() || node.has_right() {
        write_subtree(f, node.left(), depth + 1, LEFT_LABEL)?;
        write_subtree(f, node.right(), depth + 1, RIGHT_LABEL)?;
    }

    Ok(())
}
