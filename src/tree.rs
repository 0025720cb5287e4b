mod node;
mod engine;
mod preorder;
mod inorder;
mod level_order;
mod render;

pub use node::*;
pub use engine::*;
pub use preorder::*;
pub use inorder::*;
pub use level_order::*;
pub use render::*;

use std::fmt;
use std::borrow::Borrow;
use std::iter::FromIterator;

use tracing::debug;

/// A self-balancing binary search tree (AVL tree)
///
/// BST properties: For each node with key `k`:
/// - The key of each node in the left subtree is less than `k`
/// - The key of each node in the right subtree is greater than or equal to `k`
///
/// Duplicate keys are allowed. Inserting a key that is already present adds another node to the
/// right of the existing one.
///
/// After every insertion and removal, the heights of the two subtrees of any node differ by at
/// most one, so all operations that walk a single path are `O(log n)`.
///
/// This type owns the root of the tree and keeps a count of its nodes. The same operations are
/// available as free functions over a caller-held root in this module (see [`insert`] and
/// [`remove`]).
#[derive(Clone)]
pub struct AvlTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K: Ord> PartialEq for AvlTree<K> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees holding the same keys may be shaped differently depending on insertion order.
        // In-order traversal always produces sorted keys, so compare those instead.
        self.len == other.len && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<K: Ord> Eq for AvlTree<K> {}

impl<K: Ord> AvlTree<K> {
    /// Creates an empty `AvlTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    /// let mut tree: AvlTree<&str> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree (i.e. the number of nodes), counting duplicates
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!((self.len == 0) == self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree, 0 if it is empty
    ///
    /// Time complexity: `O(1)`
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Returns `true` if the tree contains the specified key.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("def"));
    /// ```
    pub fn contains<Q>(&self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        contains(self.root(), key)
    }

    /// Returns the smallest key in the tree, or `None` if the tree is empty
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| minimum(root).key())
    }

    /// Inserts a key into the tree, rebalancing as needed
    ///
    /// Insertion always adds a node, even if an equal key is already present.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn insert(&mut self, key: K) {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;

        debug!(len = self.len, height = self.height(), "inserted key");
    }

    /// Removes one occurrence of a key from the tree. Returns whether the key was present.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
    /// form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.remove("abc"));
    /// assert!(!tree.remove("def"));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Removes and returns one key in the tree, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.take("abc"), Some(String::from("abc")));
    /// assert_eq!(tree.take("def"), None);
    /// ```
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
        where K: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, removed) = take(self.root.take(), key);
        self.root = root;

        if removed.is_some() {
            self.len -= 1;
            debug!(len = self.len, height = self.height(), "removed key");
        }

        removed
    }

    /// Clears the tree, removing all keys
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<K> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree, yielding keys in sorted order
    pub fn iter_inorder(&self) -> IterInorder<K> {
        IterInorder::new(self.root())
    }

    /// Performs a breadth-first (level-order) traversal of the tree
    pub fn iter_level_order(&self) -> IterLevelOrder<K> {
        IterLevelOrder::new(self.root())
    }

    /// Returns a value that displays the structure of the tree, one node per line
    ///
    /// See [`Render`] for the format.
    pub fn render(&self) -> Render<K> {
        Render::new(self.root())
    }
}

impl<K> AvlTree<K> {
    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree. It changes as the tree
    /// rebalances itself. For a guaranteed ordering, use the various iteration methods.
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
