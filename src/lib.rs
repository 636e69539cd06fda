//! Pairing Heap - addressable priority queues built on a pairing heap
//!
//! This library implements a multiway-tree pairing heap whose elements are addressed by
//! identity rather than by position. Besides push, peek and pop it supports changing the
//! priority of an element already in the heap and deleting an arbitrary element, which is
//! what shortest-path style consumers need.
//!
//! - [`PairingHeap`]: the addressable engine, with an identity index from element to node
//! - [`SimplePairingHeap`]: anonymous elements only, without an index, with O(1) `merge`
//! - [`MinPriorityQueue`], [`MaxPriorityQueue`], [`SafeChangePriorityQueue`]: facades fixing
//!   the ordering policy or the change-priority semantics
//!
//! # Example
//!
//! ```rust
//! use pairing_heap::MinPriorityQueue;
//!
//! let mut queue = MinPriorityQueue::new();
//! queue.push("a", 5).unwrap();
//! queue.push("b", 3).unwrap();
//! queue.decrease_key("a", 1).unwrap();
//! assert_eq!(queue.peek_with_priority(), Some((&"a", &1)));
//! assert_eq!(queue.extract_min(), Ok("a"));
//! ```

pub mod heap;
pub mod order;
pub mod queue;

// Re-export main types for convenient use
pub use heap::pairing::PairingHeap;
pub use heap::simple::SimplePairingHeap;
pub use order::{CustomOrder, MaxOrder, MinOrder, PriorityOrder};
pub use queue::{MaxPriorityQueue, MinPriorityQueue, SafeChangePriorityQueue};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Element already in the heap")]
    DuplicateElement,

    #[error("Provided element is not in the heap")]
    UnknownElement,

    #[error("Priority cannot be changed to a less prioritary value")]
    InvalidPromotion,

    #[error("Cannot remove from an empty heap")]
    EmptyHeap,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
