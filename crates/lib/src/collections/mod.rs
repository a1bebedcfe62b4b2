//! Hand-rolled containers backing every store in the library.
//!
//! All four containers are linked structures, but none of them touch raw
//! pointers: nodes live in slot arenas (or boxed chains) and refer to each
//! other by index, which keeps the classic linked algorithms in safe Rust
//! while preserving their shape.
//!
//! * [`Ring`]: circular singly-linked list, the owning primary container.
//! * [`SearchIndex`]: unbalanced binary search tree, the secondary key index.
//! * [`BoundedStack`] / [`BoundedQueue`]: fixed-capacity LIFO and FIFO chains.

mod arena;
mod queue;
mod ring;
mod search_index;
mod stack;

pub use arena::NodeId;
pub use queue::BoundedQueue;
pub use ring::Ring;
pub use search_index::SearchIndex;
pub use stack::BoundedStack;
