//! Compose Framework
//!
//! Combinators that merge or unnest sequences: `knit` (pointwise tuple
//! zip), `concat` (flatten one nesting level, tier-dispatched between a
//! forward and a double-ended engine), and `flatten` (statically repeated
//! concat, with the depth resolved from the element type's nesting).

pub mod concat;
pub mod flatten;
pub mod knit;

pub use concat::{concat, Concat, ConcatStrategy, DeConcat};
pub use flatten::{flatten, Depth1, Depth2, Depth3, FlattenSeq, Leaf, Nested};
pub use knit::{knit, Knit};
