use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

mod node;
mod iter;

pub use node::*;
pub use iter::*;

type Link<T> = Option<Box<Node<T>>>;

/// A "simple" BST that never rebalances itself
///
/// Values strictly less than a node go left and everything else goes right, so duplicates are
/// kept. Removal replaces a node that has two children with its successor.
///
/// Used as a baseline to test and benchmark the `avl` crate
#[derive(Debug, Clone)]
pub struct SimpleBSTSet<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for SimpleBSTSet<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord> SimpleBSTSet<T> {
    /// Creates an empty `SimpleBSTSet`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    /// let mut set: SimpleBSTSet<&str> = SimpleBSTSet::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the set, counting duplicates
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns the height of the tree, 0 if it is empty
    ///
    /// Time complexity: `O(n)`
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// Time complexity: `O(h)` where `h` is the height of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let mut set = SimpleBSTSet::new();
    /// set.insert(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Inserts a value into the set, even if an equal value is already present
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let mut set = SimpleBSTSet::new();
    /// set.insert(37);
    /// set.insert(37);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < *node.value() {
                node.left_slot()
            } else {
                node.right_slot()
            };
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Removes one occurrence of a value from the set. Returns whether the value was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let mut set = SimpleBSTSet::new();
    /// set.insert(String::from("abc"));
    /// assert!(set.remove("abc"));
    /// assert!(!set.remove("abc"));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let removed = take_node(&mut self.root, value).is_some();
        if removed {
            self.len -= 1;
        }

        removed
    }

    /// Clears the set, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the values in pre-order (node, left, right), which fixes the shape of the tree
    pub fn preorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
            if let Some(node) = node {
                values.push(node.value());
                visit(node.left(), values);
                visit(node.right(), values);
            }
        }

        let mut values = Vec::with_capacity(self.len);
        visit(self.root(), &mut values);
        values
    }

    /// Performs an in-order traversal of the tree, yielding values in sorted order
    pub fn iter_inorder(&self) -> Iter<T> {
        Iter::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

fn take_node<T, Q>(slot: &mut Link<T>, value: &Q) -> Option<T>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let node = slot.as_mut()?;
    match value.cmp(node.value().borrow()) {
        Ordering::Less => take_node(node.left_slot(), value),
        Ordering::Greater => take_node(node.right_slot(), value),
        Ordering::Equal => {
            let mut node = slot.take()?;
            *slot = match (node.left_slot().take(), node.right_slot().take()) {
                (None, child) | (child, None) => child,

                (Some(left), Some(right)) => {
                    let (right, mut successor) = take_min(right);
                    *successor.left_slot() = Some(left);
                    *successor.right_slot() = right;
                    Some(successor)
                },
            };

            Some(node.into_value())
        },
    }
}

/// Unlinks the leftmost node of the subtree, returning the rest of the subtree and that node
fn take_min<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.left_slot().take() {
        Some(left) => {
            let (left, min) = take_min(left);
            *node.left_slot() = left;
            (Some(node), min)
        },

        None => {
            let right = node.right_slot().take();
            (right, node)
        },
    }
}

impl<T: Ord> Extend<T> for SimpleBSTSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SimpleBSTSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
