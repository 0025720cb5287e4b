//! The stateless AVL engine
//!
//! Every mutating function takes the current root by value and returns the new root. Ownership of
//! the subtrees moves through those return values; nodes are only ever relinked, never copied.

use std::mem;
use std::borrow::Borrow;
use std::cmp::Ordering;

use tracing::trace;

use super::node::{balance, Link, Node};

/// The child a key was routed into while descending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Rotates the subtree rooted at `z` to the left and returns the new subtree root
///
/// `z.right` becomes the new root, its left subtree becomes `z`'s right subtree and `z` becomes
/// its left child. Heights are recomputed child first.
///
/// # Panics
///
/// Panics if `z` has no right child.
pub fn rotate_left<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.right.take().expect("bug: left rotation requires a right child");
    z.right = y.left.take();
    z.update_height();

    y.left = Some(z);
    y.update_height();

    trace!(height = y.height, "rotated left");
    y
}

/// Rotates the subtree rooted at `z` to the right and returns the new subtree root
///
/// Mirror image of [`rotate_left`].
///
/// # Panics
///
/// Panics if `z` has no left child.
pub fn rotate_right<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.left.take().expect("bug: right rotation requires a left child");
    z.left = y.right.take();
    z.update_height();

    y.right = Some(z);
    y.update_height();

    trace!(height = y.height, "rotated right");
    y
}

/// Inserts `key` into the tree rooted at `root` and returns the new root
///
/// Keys strictly less than a node's key go left, everything else (including equal keys) goes
/// right. Duplicates are kept as separate nodes; nothing is ever overwritten.
pub fn insert<K: Ord>(root: Link<K>, key: K) -> Box<Node<K>> {
    insert_at(root, key).0
}

/// Returns the new subtree root and the side the key was routed into at that root (`None` if the
/// returned root is the freshly created leaf)
fn insert_at<K: Ord>(root: Link<K>, key: K) -> (Box<Node<K>>, Option<Side>) {
    let mut node = match root {
        Some(node) => node,
        None => return (Node::leaf(key), None),
    };

    let side = if key < node.key { Side::Left } else { Side::Right };
    let child_side = match side {
        Side::Left => {
            let (left, child_side) = insert_at(node.left.take(), key);
            node.left = Some(left);
            child_side
        },

        Side::Right => {
            let (right, child_side) = insert_at(node.right.take(), key);
            node.right = Some(right);
            child_side
        },
    };

    node.update_height();
    (rebalance_after_insert(node, child_side), Some(side))
}

/// Restores the balance of `node` after an insertion into one of its subtrees
///
/// `child_side` is where the new key went below the heavy child. If the node is unbalanced, its
/// heavy child was not rotated during this insertion, so this is the same as comparing the new
/// key against the heavy child's key with the descent's routing rule.
fn rebalance_after_insert<K>(mut node: Box<Node<K>>, child_side: Option<Side>) -> Box<Node<K>> {
    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        match child_side {
            // left-left
            Some(Side::Left) => rotate_right(node),
            // left-right
            Some(Side::Right) => {
                node.left = node.left.take().map(rotate_left);
                rotate_right(node)
            },
            None => node,
        }
    } else if balance_factor < -1 {
        match child_side {
            // right-right
            Some(Side::Right) => rotate_left(node),
            // right-left
            Some(Side::Left) => {
                node.right = node.right.take().map(rotate_right);
                rotate_left(node)
            },
            None => node,
        }
    } else {
        node
    }
}

/// Removes one node whose key equals `key` and returns the new root
///
/// Removing a key that is not in the tree returns the tree unchanged.
pub fn remove<K, Q>(root: Link<K>, key: &Q) -> Link<K>
    where K: Borrow<Q>,
          Q: Ord + ?Sized,
{
    take(root, key).0
}

/// Removes one node whose key equals `key`, returning the new root and the removed key
///
/// A node with at most one child is replaced by that child. A node with two children takes the
/// key of its successor (the minimum of its right subtree) and the successor node is unlinked from
/// the right subtree instead.
pub fn take<K, Q>(root: Link<K>, key: &Q) -> (Link<K>, Option<K>)
    where K: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut node = match root {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let (left, removed) = take(node.left.take(), key);
            node.left = left;
            removed
        },

        Ordering::Greater => {
            let (right, removed) = take(node.right.take(), key);
            node.right = right;
            removed
        },

        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, child) | (child, None) => return (child, Some(node.into_key())),

            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.key, successor.into_key()))
            },
        },
    };

    node.update_height();
    (Some(rebalance_after_remove(node)), removed)
}

/// Unlinks the node with the smallest key from the subtree rooted at `node`
///
/// Returns the rebalanced remainder of the subtree and the detached node.
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        },

        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            node.update_height();
            (Some(rebalance_after_remove(node)), min)
        },
    }
}

/// Restores the balance of `node` after a removal from one of its subtrees
///
/// Unlike insertion, the rotation is chosen from the balance factor of the heavy child.
fn rebalance_after_remove<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let balance_factor = node.balance_factor();
    if balance_factor > 1 {
        if balance(node.left()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if balance_factor < -1 {
        if balance(node.right()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        rotate_left(node)
    } else {
        node
    }
}

/// Returns `true` if some node in the tree has a key equal to `key`
///
/// Time complexity: `O(log n)`
pub fn contains<K, Q>(root: Option<&Node<K>>, key: &Q) -> bool
    where K: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut current = root;
    while let Some(node) = current {
        match key.cmp(node.key().borrow()) {
            Ordering::Less => current = node.left(),
            Ordering::Greater => current = node.right(),
            Ordering::Equal => return true,
        }
    }

    false
}

/// Counts the nodes of the tree
///
/// Time complexity: `O(n)`
pub fn len<K>(root: Option<&Node<K>>) -> usize {
    super::IterPreorder::new(root).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tree::{height, IterLevelOrder, IterPreorder};

    fn build(keys: &[i32]) -> Link<i32> {
        keys.iter().fold(None, |root, &key| Some(insert(root, key)))
    }

    fn preorder(root: &Link<i32>) -> Vec<i32> {
        IterPreorder::new(root.as_deref()).copied().collect()
    }

    fn level_order(root: &Link<i32>) -> Vec<i32> {
        IterLevelOrder::new(root.as_deref()).copied().collect()
    }

    #[test]
    fn insert_into_empty_tree_creates_leaf() {
        let root = insert(None, 42);
        assert_eq!(*root.key(), 42);
        assert_eq!(root.height(), 1);
        assert!(!root.has_left() && !root.has_right());
    }

    #[test]
    fn rotate_left_relinks_and_updates_heights() {
        // 1
        //   2
        //     3
        let mut root = Node::leaf(1);
        let mut mid = Node::leaf(2);
        mid.right = Some(Node::leaf(3));
        mid.update_height();
        root.right = Some(mid);
        root.update_height();
        assert_eq!(root.height(), 3);

        let root = rotate_left(root);
        assert_eq!(*root.key(), 2);
        assert_eq!(root.height(), 2);
        assert_eq!(root.left().map(|node| (*node.key(), node.height())), Some((1, 1)));
        assert_eq!(root.right().map(|node| (*node.key(), node.height())), Some((3, 1)));
    }

    #[test]
    fn rotate_right_keeps_middle_subtree() {
        //     4
        //   2
        // 1   3
        let mut left = Node::leaf(2);
        left.left = Some(Node::leaf(1));
        left.right = Some(Node::leaf(3));
        left.update_height();
        let mut root = Node::leaf(4);
        root.left = Some(left);
        root.update_height();

        let root = rotate_right(root);
        assert_eq!(*root.key(), 2);
        // 3 moved from 2's right to 4's left
        let right = root.right().unwrap();
        assert_eq!(*right.key(), 4);
        assert_eq!(right.left().map(|node| *node.key()), Some(3));
        assert_eq!(right.height(), 2);
        assert_eq!(root.height(), 3);
    }

    #[test]
    fn single_left_rotation_on_ascending_inserts() {
        let root = build(&[1, 2, 3]);
        assert_eq!(preorder(&root), &[2, 1, 3]);
        assert_eq!(height(root.as_deref()), 2);
    }

    #[test]
    fn single_right_rotation_on_descending_inserts() {
        let root = build(&[3, 2, 1]);
        assert_eq!(preorder(&root), &[2, 1, 3]);
    }

    #[test]
    fn double_rotations() {
        // left-right
        assert_eq!(preorder(&build(&[3, 1, 2])), &[2, 1, 3]);
        // right-left
        assert_eq!(preorder(&build(&[1, 3, 2])), &[2, 1, 3]);
    }

    #[test]
    fn duplicate_keys_go_right() {
        let root = build(&[5, 5]);
        assert_eq!(preorder(&root), &[5, 5]);
        let root = root.unwrap();
        assert!(!root.has_left());
        assert!(root.has_right());
    }

    #[test]
    fn duplicate_keys_stay_balanced() {
        // A duplicate of the heavy child's key goes to that child's right, which is the
        // left-right case
        let root = build(&[5, 3, 3]);
        assert_eq!(preorder(&root), &[3, 3, 5]);
        let root = root.unwrap();
        assert_eq!(root.height(), 2);
        assert_eq!(root.balance_factor(), 0);
    }

    #[test]
    fn remove_from_empty_tree() {
        assert!(remove::<i32, i32>(None, &1).is_none());
        assert_eq!(take::<i32, i32>(None, &1), (None, None));
    }

    #[test]
    fn remove_only_node() {
        let (root, removed) = take(build(&[1]), &1);
        assert!(root.is_none());
        assert_eq!(removed, Some(1));
    }

    #[test]
    fn remove_node_with_one_child() {
        let root = build(&[2, 1, 3, 4]);
        let root = remove(root, &3);
        assert_eq!(preorder(&root), &[2, 1, 4]);
    }

    #[test]
    fn remove_node_with_two_children_uses_successor() {
        //     4
        //   2   6
        // 1  3 5  7
        let root = build(&[4, 2, 6, 1, 3, 5, 7]);
        let (root, removed) = take(root, &4);
        assert_eq!(removed, Some(4));
        assert_eq!(preorder(&root), &[5, 2, 1, 3, 6, 7]);
    }

    #[test]
    fn remove_rebalances_with_single_rotation() {
        //   2
        // 1   3
        //       4
        let root = build(&[2, 1, 3, 4]);
        let root = remove(root, &1);
        assert_eq!(preorder(&root), &[3, 2, 4]);
        assert_eq!(level_order(&root), &[3, 2, 4]);
    }

    #[test]
    fn remove_rebalances_with_double_rotation() {
        //   2
        // 1   4
        //   3
        let root = build(&[2, 1, 4, 3]);
        let root = remove(root, &1);
        assert_eq!(preorder(&root), &[3, 2, 4]);
    }

    #[test]
    fn remove_absent_key_is_noop() {
        let root = build(&[4, 2, 6, 1, 3]);
        let before = root.clone();
        let (root, removed) = take(root, &42);
        assert_eq!(removed, None);
        assert_eq!(root, before);
    }

    #[test]
    fn remove_one_of_duplicates() {
        let root = build(&[5, 5, 5]);
        let root = remove(root, &5);
        assert_eq!(preorder(&root), &[5, 5]);
        let root = remove(root, &5);
        let root = remove(root, &5);
        assert!(root.is_none());
    }

    #[test]
    fn contains_and_len() {
        let root = build(&[8, 3, 10, 1, 6]);
        assert!(contains(root.as_deref(), &6));
        assert!(!contains(root.as_deref(), &7));
        assert_eq!(len(root.as_deref()), 5);
        assert_eq!(len::<i32>(None), 0);
    }
}
