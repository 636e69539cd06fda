//! Min and max priority queues
//!
//! These are [`PairingHeap`] configured with a fixed ordering policy, plus the classic
//! priority-queue vocabulary (`decrease_key`, `extract_min`, ...) as aliases.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::heap::pairing::PairingHeap;
use crate::order::{MaxOrder, MinOrder};
use crate::Result;

/// Priority queue where the smallest priority is the most prioritary
///
/// ```rust
/// use pairing_heap::MinPriorityQueue;
///
/// let mut queue = MinPriorityQueue::new();
/// for (vertex, distance) in [(0, 7), (1, 3), (2, 9)] {
///     queue.push(vertex, distance).unwrap();
/// }
/// queue.decrease_key(&2, 1).unwrap();
/// assert_eq!(queue.min(), Some(&2));
/// ```
pub type MinPriorityQueue<T, P> = PairingHeap<T, P, MinOrder>;

/// Priority queue where the highest priority is the most prioritary
pub type MaxPriorityQueue<T, P> = PairingHeap<T, P, MaxOrder>;

impl<T, P> PairingHeap<T, P, MinOrder>
where
    T: Hash + Eq + Clone,
    P: PartialOrd,
{
    /// Lowers the priority of `elem`; alias of [`change_priority`](PairingHeap::change_priority)
    pub fn decrease_key<Q>(&mut self, elem: &Q, priority: P) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.change_priority(elem, priority)
    }

    /// Returns the element with the smallest priority
    pub fn min(&self) -> Option<&T> {
        self.peek()
    }

    /// Removes and returns the element with the smallest priority
    pub fn extract_min(&mut self) -> Result<T> {
        self.pop()
    }
}

impl<T, P> PairingHeap<T, P, MaxOrder>
where
    T: Hash + Eq + Clone,
    P: PartialOrd,
{
    /// Raises the priority of `elem`; alias of [`change_priority`](PairingHeap::change_priority)
    pub fn increase_key<Q>(&mut self, elem: &Q, priority: P) -> Result<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.change_priority(elem, priority)
    }

    /// Returns the element with the highest priority
    pub fn max(&self) -> Option<&T> {
        self.peek()
    }

    /// Removes and returns the element with the highest priority
    pub fn extract_max(&mut self) -> Result<T> {
        self.pop()
    }
}
