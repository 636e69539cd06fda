//! Priority queue whose `change_priority` accepts any new priority
//!
//! Promotions take the usual cut-and-meld path. A demotion takes the node out of the tree
//! and melds it back with the new priority, which is observably the same as a delete
//! followed by a push, but happens as one operation.

use std::borrow::Borrow;
use std::hash::Hash;
use std::ops::Deref;

use crate::heap::pairing::PairingHeap;
use crate::order::{MinOrder, PriorityOrder};
use crate::Result;

/// Pairing heap whose `change_priority` never fails on a demotion
///
/// Read-only queries are available through [`Deref`] to the underlying [`PairingHeap`].
///
/// ```rust
/// use pairing_heap::SafeChangePriorityQueue;
///
/// let mut queue = SafeChangePriorityQueue::new();
/// queue.push(1, 1).unwrap();
/// queue.push(2, 2).unwrap();
/// queue.change_priority(&1, 3).unwrap();
/// assert_eq!(queue.pop(), Ok(2));
/// assert_eq!(queue.pop(), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct SafeChangePriorityQueue<T, P, O = MinOrder> {
    heap: PairingHeap<T, P, O>,
}

impl<T, P> SafeChangePriorityQueue<T, P, MinOrder> {
    /// Creates an empty min-ordered queue
    pub fn new() -> Self {
        Self::with_order(MinOrder)
    }
}

impl<T, P> Default for SafeChangePriorityQueue<T, P, MinOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, O> SafeChangePriorityQueue<T, P, O> {
    /// Creates an empty queue ordered by `order`
    pub fn with_order(order: O) -> Self {
        SafeChangePriorityQueue {
            heap: PairingHeap::with_order(order),
        }
    }

    /// Unwraps the underlying heap
    pub fn into_inner(self) -> PairingHeap<T, P, O> {
        self.heap
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P, O> SafeChangePriorityQueue<T, P, O>
where
    T: Hash + Eq + Clone,
    O: PriorityOrder<P>,
{
    /// See [`PairingHeap::push`]
    pub fn push(&mut self, elem: T, priority: P) -> Result<()> {
        self.heap.push(elem, priority)
    }

    /// See [`PairingHeap::pop`]
    pub fn pop(&mut self) -> Result<T> {
        self.heap.pop()
    }

    /// See [`PairingHeap::pop_priority`]
    pub fn pop_priority(&mut self) -> Result<P> {
        self.heap.pop_priority()
    }

    /// See [`PairingHeap::pop_with_priority`]
    pub fn pop_with_priority(&mut self) -> Result<(T, P)> {
        self.heap.pop_with_priority()
    }

    /// See [`PairingHeap::delete`]
    pub fn delete<Q>(&mut self, elem: &Q) -> Result<(T, P)>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap.delete(elem)
    }

    /// Changes the priority of `elem` to any value
    ///
    /// # Errors
    /// Returns [`Error::UnknownElement`](crate::Error::UnknownElement) if `elem` is not in the heap.
    ///
    /// # Time Complexity
    /// O(1) amortized for a promotion, O(log n) amortized for a demotion
    pub fn change_priority<Q>(&mut self, elem: &Q, priority: P) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap.reprioritize(elem, priority)
    }
}

impl<T, O> SafeChangePriorityQueue<T, T, O>
where
    T: Hash + Eq + Clone,
    O: PriorityOrder<T>,
{
    /// See [`PairingHeap::push_value`]
    pub fn push_value(&mut self, value: T) -> Result<()> {
        self.heap.push_value(value)
    }
}

impl<T, P, O> Deref for SafeChangePriorityQueue<T, P, O> {
    type Target = PairingHeap<T, P, O>;

    fn deref(&self) -> &Self::Target {
        &self.heap
    }
}

impl<T, P, O> From<PairingHeap<T, P, O>> for SafeChangePriorityQueue<T, P, O> {
    fn from(heap: PairingHeap<T, P, O>) -> Self {
        SafeChangePriorityQueue { heap }
    }
}
