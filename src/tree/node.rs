use std::cmp;
use std::fmt;

/// An owned subtree, or `None` for the empty subtree
pub type Link<K> = Option<Box<Node<K>>>;

/// A single node of the AVL tree
///
/// Each node exclusively owns its children. The cached `height` is the height of the subtree
/// rooted at this node: a leaf has height 1 and the empty subtree has height 0.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(super) key: K,
    pub(super) left: Link<K>,
    pub(super) right: Link<K>,
    pub(super) height: usize,
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    /// Creates a new leaf node
    pub(crate) fn leaf(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// Returns the key of this node
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the cached height of the subtree rooted at this node
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `height(left) - height(right)`
    pub fn balance_factor(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Recomputes the cached height from the heights of both children
    ///
    /// Children MUST already have correct heights.
    pub(super) fn update_height(&mut self) {
        self.height = 1 + cmp::max(height(self.left()), height(self.right()));
    }

    /// Moves the key out of this node, consuming it
    pub(super) fn into_key(self) -> K {
        self.key
    }
}

/// Height of a subtree: 0 for the empty subtree, otherwise the cached height of its root
pub fn height<K>(node: Option<&Node<K>>) -> usize {
    node.map_or(0, |node| node.height)
}

/// Balance factor of a subtree: 0 for the empty subtree
pub fn balance<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(0, Node::balance_factor)
}

/// Returns the node with the smallest key in the subtree rooted at `node`
///
/// Follows left children until none remain. Taking `&Node` rather than an optional subtree means
/// an empty subtree can never be passed in.
pub fn minimum<K>(node: &Node<K>) -> &Node<K> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }

    current
}
