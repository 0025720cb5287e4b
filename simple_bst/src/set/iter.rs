use std::iter::FusedIterator;

use super::Node;

/// In-order (sorted) iterator over the values of a `SimpleBSTSet`
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    // Next subtree whose left spine still has to be pushed
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }

        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
