//! Traversal of a [`PairingHeap`](crate::PairingHeap)
//!
//! Nodes are visited in pre-order (node, its child subtree, then its next sibling) using an
//! explicit stack, so very wide or deep trees cannot exhaust the call stack. The iterators
//! borrow the heap, so it cannot be mutated while one is alive.

use std::iter::FusedIterator;

use slotmap::SlotMap;

use crate::heap::node::{Node, NodeKey};

/// Iterator over (element, priority) pairs of a heap, in unspecified order
#[derive(Debug)]
pub struct IterWithPriority<'a, T, P> {
    nodes: &'a SlotMap<NodeKey, Node<T, P>>,
    stack: Vec<NodeKey>,
    remaining: usize,
}

impl<'a, T, P> IterWithPriority<'a, T, P> {
    pub(crate) fn new(
        nodes: &'a SlotMap<NodeKey, Node<T, P>>,
        root: Option<NodeKey>,
        len: usize,
    ) -> Self {
        IterWithPriority {
            nodes,
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T, P> Iterator for IterWithPriority<'a, T, P> {
    type Item = (&'a T, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let nodes: &'a SlotMap<NodeKey, Node<T, P>> = self.nodes;
        let node = &nodes[key];

        // Sibling goes below the child so the whole child subtree is visited first
        if let Some(next) = node.next_sibling {
            self.stack.push(next);
        }
        if let Some(child) = node.first_child {
            self.stack.push(child);
        }

        self.remaining -= 1;
        Some((&node.elem, &node.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> ExactSizeIterator for IterWithPriority<'_, T, P> {}

impl<T, P> FusedIterator for IterWithPriority<'_, T, P> {}

/// Iterator over the elements of a heap, in unspecified order
#[derive(Debug)]
pub struct Iter<'a, T, P> {
    inner: IterWithPriority<'a, T, P>,
}

impl<'a, T, P> Iter<'a, T, P> {
    pub(crate) fn new(inner: IterWithPriority<'a, T, P>) -> Self {
        Iter { inner }
    }
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(elem, _)| elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}
