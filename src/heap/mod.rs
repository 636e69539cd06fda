pub mod iter;
pub(crate) mod node;
pub mod pairing;
pub mod simple;

pub use iter::{Iter, IterWithPriority};
pub use pairing::PairingHeap;
pub use simple::{SimpleIter, SimpleIterWithPriority, SimplePairingHeap};
