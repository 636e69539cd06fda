//! Ordering policies deciding which of two priorities wins a meld
//!
//! A policy is a binary predicate `is_at_least_as_prioritary(left, right)`. It does not need
//! to be strict: ties are allowed and resolved in favour of the left-hand argument. The heap
//! calls it many times on the same priorities while restructuring, so it must be
//! deterministic and free of side effects.

use std::fmt;

/// Binary predicate defining heap order
pub trait PriorityOrder<P: ?Sized> {
    /// Returns true if `left` may be the parent of `right`
    fn is_at_least_as_prioritary(&self, left: &P, right: &P) -> bool;
}

/// Smaller-or-equal is more prioritary (min-heap). This is the default policy.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinOrder;

impl<P> PriorityOrder<P> for MinOrder
where
    P: PartialOrd + ?Sized,
{
    #[inline]
    fn is_at_least_as_prioritary(&self, left: &P, right: &P) -> bool {
        left <= right
    }
}

/// Greater-or-equal is more prioritary (max-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxOrder;

impl<P> PriorityOrder<P> for MaxOrder
where
    P: PartialOrd + ?Sized,
{
    #[inline]
    fn is_at_least_as_prioritary(&self, left: &P, right: &P) -> bool {
        left >= right
    }
}

/// Policy backed by a caller-supplied comparison closure
///
/// ```rust
/// use pairing_heap::{CustomOrder, PairingHeap};
///
/// // Order words by length, longest first
/// let mut heap = PairingHeap::with_order(CustomOrder::new(|a: &usize, b: &usize| a >= b));
/// heap.push("pair", 4).unwrap();
/// heap.push("heap", 4).unwrap();
/// heap.push("meld", 4).unwrap();
/// heap.push("priority", 8).unwrap();
/// assert_eq!(heap.peek(), Some(&"priority"));
/// ```
#[derive(Clone, Copy)]
pub struct CustomOrder<F> {
    compare: F,
}

impl<F> CustomOrder<F> {
    /// Wraps `compare` as an ordering policy
    pub fn new(compare: F) -> Self {
        CustomOrder { compare }
    }
}

impl<F> fmt::Debug for CustomOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomOrder").finish_non_exhaustive()
    }
}

impl<P, F> PriorityOrder<P> for CustomOrder<F>
where
    P: ?Sized,
    F: Fn(&P, &P) -> bool,
{
    #[inline]
    fn is_at_least_as_prioritary(&self, left: &P, right: &P) -> bool {
        (self.compare)(left, right)
    }
}
