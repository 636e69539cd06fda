pub mod min_max;
pub mod safe;

pub use min_max::{MaxPriorityQueue, MinPriorityQueue};
pub use safe::SafeChangePriorityQueue;
