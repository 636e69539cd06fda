//! Pairing heap for anonymous elements
//!
//! Without an identity index there is no way to address an element after it was pushed,
//! so nodes do not need parent or previous-sibling links. Each node owns its first child
//! and its next sibling, which makes melding two whole heaps an O(1) pointer swap.

use std::fmt;
use std::iter::FusedIterator;

use log::trace;

use crate::order::{MinOrder, PriorityOrder};
use crate::{Error, Result};

#[derive(Debug)]
struct Node<T, P> {
    elem: T,
    priority: P,
    first_child: Option<Box<Node<T, P>>>,
    next_sibling: Option<Box<Node<T, P>>>,
}

/// Pairing heap without an identity index
///
/// Equal elements may be pushed any number of times. Supports O(1) [`merge`](Self::merge).
///
/// # Example
///
/// ```rust
/// use pairing_heap::SimplePairingHeap;
///
/// let mut evens: SimplePairingHeap<_, _> = SimplePairingHeap::new();
/// let mut odds: SimplePairingHeap<_, _> = SimplePairingHeap::new();
/// for i in 0..5 {
///     evens.push_value(2 * i);
///     odds.push_value(2 * i + 1);
/// }
///
/// evens.merge(&mut odds);
/// assert_eq!(evens.len(), 10);
/// assert!(odds.is_empty());
/// assert_eq!(evens.pop(), Ok(0));
/// assert_eq!(evens.pop(), Ok(1));
/// ```
///
/// A heap cannot be merged with itself:
///
/// ```compile_fail
/// use pairing_heap::SimplePairingHeap;
///
/// let mut heap: SimplePairingHeap<_, _> = SimplePairingHeap::new();
/// heap.push_value(3);
/// heap.merge(&mut heap);
/// ```
pub struct SimplePairingHeap<T, P, O = MinOrder> {
    root: Option<Box<Node<T, P>>>,
    len: usize,
    order: O,
}

impl<T, P, O> Default for SimplePairingHeap<T, P, O>
where
    O: Default,
{
    fn default() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, P, O> SimplePairingHeap<T, P, O>
where
    O: Default,
{
    /// Creates an empty heap using the default value of the ordering policy
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, P, O> SimplePairingHeap<T, P, O> {
    /// Creates an empty heap ordered by `order`
    pub fn with_order(order: O) -> Self {
        SimplePairingHeap {
            root: None,
            len: 0,
            order,
        }
    }

    /// Returns the ordering policy of this heap
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the most prioritary element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.root.as_ref().map(|root| &root.elem)
    }

    /// Returns the priority of the most prioritary element
    pub fn peek_priority(&self) -> Option<&P> {
        self.root.as_ref().map(|root| &root.priority)
    }

    /// Returns the most prioritary element together with its priority
    pub fn peek_with_priority(&self) -> Option<(&T, &P)> {
        self.root.as_ref().map(|root| (&root.elem, &root.priority))
    }

    /// Like [`peek`](Self::peek), but fails with [`Error::EmptyHeap`] on an empty heap
    pub fn top(&self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyHeap)
    }

    /// Iterates over all elements in unspecified order
    pub fn iter(&self) -> SimpleIter<'_, T, P> {
        SimpleIter {
            inner: self.iter_with_priority(),
        }
    }

    /// Iterates over all (element, priority) pairs in unspecified order
    pub fn iter_with_priority(&self) -> SimpleIterWithPriority<'_, T, P> {
        SimpleIterWithPriority {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }
}

impl<T, P, O> SimplePairingHeap<T, P, O>
where
    O: PriorityOrder<P>,
{
    /// Pushes an element with the given priority
    ///
    /// # Time Complexity
    /// O(1)
    pub fn push(&mut self, elem: T, priority: P) {
        let node = Box::new(Node {
            elem,
            priority,
            first_child: None,
            next_sibling: None,
        });
        self.root = Some(match self.root.take() {
            Some(root) => self.meld(root, node),
            None => node,
        });
        self.len += 1;
    }

    /// Removes the most prioritary element and returns it
    ///
    /// # Time Complexity
    /// O(log n) amortized, O(n) worst case
    pub fn pop(&mut self) -> Result<T> {
        self.pop_with_priority().map(|(elem, _)| elem)
    }

    /// Removes the most prioritary element and returns its priority
    pub fn pop_priority(&mut self) -> Result<P> {
        self.pop_with_priority().map(|(_, priority)| priority)
    }

    /// Removes the most prioritary element and returns it with its priority
    pub fn pop_with_priority(&mut self) -> Result<(T, P)> {
        let mut root = self.root.take().ok_or(Error::EmptyHeap)?;
        self.root = self.merge_pairs(root.first_child.take());
        self.len -= 1;
        Ok((root.elem, root.priority))
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// The result is ordered by this heap's policy.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn merge(&mut self, other: &mut Self) -> &mut Self {
        let moved = std::mem::take(&mut other.len);
        trace!("Merging heap of {} elements into heap of {}", moved, self.len);

        self.root = match (self.root.take(), other.root.take()) {
            (Some(ours), Some(theirs)) => Some(self.meld(ours, theirs)),
            (ours, theirs) => ours.or(theirs),
        };
        self.len += moved;
        self
    }

    fn meld(&self, left: Box<Node<T, P>>, right: Box<Node<T, P>>) -> Box<Node<T, P>> {
        let (mut parent, mut child) = if self
            .order
            .is_at_least_as_prioritary(&left.priority, &right.priority)
        {
            (left, right)
        } else {
            (right, left)
        };
        child.next_sibling = parent.first_child.take();
        parent.first_child = Some(child);
        parent
    }

    fn merge_pairs(&self, first: Option<Box<Node<T, P>>>) -> Option<Box<Node<T, P>>> {
        let mut pairs = Vec::new();
        let mut current = first;

        while let Some(mut left) = current {
            match left.next_sibling.take() {
                Some(mut right) => {
                    current = right.next_sibling.take();
                    pairs.push(self.meld(left, right));
                }
                None => {
                    pairs.push(left);
                    current = None;
                }
            }
        }

        let mut root = pairs.pop()?;
        while let Some(left) = pairs.pop() {
            root = self.meld(left, root);
        }
        Some(root)
    }
}

impl<T, O> SimplePairingHeap<T, T, O>
where
    T: Clone,
    O: PriorityOrder<T>,
{
    /// Pushes `value` using itself as its priority
    pub fn push_value(&mut self, value: T) {
        self.push(value.clone(), value)
    }
}

impl<T, P, O> Drop for SimplePairingHeap<T, P, O> {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl<T, P, O> fmt::Debug for SimplePairingHeap<T, P, O>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplePairingHeap")
            .field("len", &self.len)
            .field("top", &self.peek_with_priority())
            .finish()
    }
}

impl<'a, T, P, O> IntoIterator for &'a SimplePairingHeap<T, P, O> {
    type Item = &'a T;
    type IntoIter = SimpleIter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Frees a tree without recursing, so long sibling chains cannot overflow the stack
fn release<T, P>(root: Option<Box<Node<T, P>>>) {
    let mut stack: Vec<Box<Node<T, P>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.first_child.take());
        stack.extend(node.next_sibling.take());
    }
}

/// Iterator over (element, priority) pairs of a [`SimplePairingHeap`], in unspecified order
#[derive(Debug)]
pub struct SimpleIterWithPriority<'a, T, P> {
    stack: Vec<&'a Node<T, P>>,
    remaining: usize,
}

impl<'a, T, P> Iterator for SimpleIterWithPriority<'a, T, P> {
    type Item = (&'a T, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.next_sibling.as_deref());
        self.stack.extend(node.first_child.as_deref());
        self.remaining -= 1;
        Some((&node.elem, &node.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, P> ExactSizeIterator for SimpleIterWithPriority<'_, T, P> {}

impl<T, P> FusedIterator for SimpleIterWithPriority<'_, T, P> {}

/// Iterator over the elements of a [`SimplePairingHeap`], in unspecified order
#[derive(Debug)]
pub struct SimpleIter<'a, T, P> {
    inner: SimpleIterWithPriority<'a, T, P>,
}

impl<'a, T, P> Iterator for SimpleIter<'a, T, P> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(elem, _)| elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> ExactSizeIterator for SimpleIter<'_, T, P> {}

impl<T, P> FusedIterator for SimpleIter<'_, T, P> {}
