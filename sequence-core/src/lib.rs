//! Sequence Core
//!
//! Shared building blocks for the lazy sequence combinator crates: the
//! `Sequence` consumption contract, the capability traits each combinator
//! propagates, the tier tags used for construction-time engine selection,
//! the fixed-arity `Window` value, and a handful of concrete sources.

pub mod capability;
pub mod sources;
pub mod tier;
pub mod traits;
pub mod window;

pub use capability::{Bounded, DoubleEnded, Endless, Indexed, Replay, Sliceable, WriteBack};
pub use sources::{
    ascending, from_iterator, from_mut_slice, from_slice, repeat, Ascending, IterSeq, MutSliceSeq,
    NotIndexed, Repeat, SliceSeq,
};
pub use tier::{DoubleEndedTier, EndlessRandomTier, ForwardTier, RandomTier, Tiered};
pub use traits::{SeqIter, Sequence};
pub use window::Window;
