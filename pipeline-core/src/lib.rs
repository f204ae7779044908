//! Pipeline Core
//!
//! Facade over the sequence combinator crates. A caller builds a pipeline
//! by wrapping a base source in successive combinators; everything is
//! evaluated lazily, element by element, as the pipeline is advanced.

pub use compose_framework::{
    concat, flatten, knit, Concat, ConcatStrategy, DeConcat, Depth1, Depth2, Depth3, FlattenSeq,
    Knit, Leaf, Nested,
};
#[cfg(feature = "trace")]
pub use replay_framework::{memoize_with_observer, BufferEvent};
pub use replay_framework::{memoize, Memoized};
pub use segment_framework::{
    delay, parallel, segment, Delay, DoubleEndedSegments, EndlessSegments, Parallel,
    RandomSegments, RollingSegments, SegmentStrategy,
};
pub use sequence_core::{
    ascending, from_iterator, from_mut_slice, from_slice, repeat, Ascending, Bounded, DoubleEnded,
    DoubleEndedTier, Endless, EndlessRandomTier, ForwardTier, Indexed, IterSeq, MutSliceSeq,
    NotIndexed, RandomTier, Repeat, Replay, SeqIter, Sequence, SliceSeq, Sliceable, Tiered, Window,
    WriteBack,
};

/// One-stop import for pipeline builders.
pub mod prelude {
    pub use compose_framework::{concat, flatten, knit, Depth1, Depth2, Depth3};
    pub use replay_framework::memoize;
    pub use segment_framework::{delay, parallel, segment};
    pub use sequence_core::{
        ascending, from_iterator, from_mut_slice, from_slice, repeat, Bounded, DoubleEnded,
        Indexed, Replay, Sequence, Sliceable, Window, WriteBack,
    };
}
