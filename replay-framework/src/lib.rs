//! Replay Framework
//!
//! Forward conversion: wraps a single-pass sequence in a shared,
//! growable buffer so that any number of independent cursors can replay
//! it. Each element is pulled from the source at most once; elements are
//! retained exactly while some live cursor has not consumed them.

pub mod memoized;
mod store;

#[cfg(feature = "trace")]
pub use memoized::{memoize_with_observer, BufferEvent};
pub use memoized::{memoize, Memoized};
