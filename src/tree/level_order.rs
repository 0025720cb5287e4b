use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Node;

/// Breadth-first traversal, one level at a time from left to right
#[derive(Debug, Clone)]
pub struct IterLevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> IterLevelOrder<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for IterLevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every queued node is yielded at least once
        (self.queue.len(), None)
    }
}

impl<'a, K> FusedIterator for IterLevelOrder<'a, K> {}
