//! Segment Framework
//!
//! Overlapping fixed-width windowing over any sequence, with the engine
//! chosen at construction time from the input's capability tier, plus the
//! two projections built on top of it: `delay` (offset extraction) and
//! `parallel` (lock-step broadcast).

pub mod delay;
pub mod dispatch;
pub mod double_ended;
pub mod endless;
pub mod parallel;
pub mod random;
pub mod rolling;

pub use delay::{delay, Delay};
pub use dispatch::{segment, SegmentStrategy};
pub use double_ended::DoubleEndedSegments;
pub use endless::EndlessSegments;
pub use parallel::{parallel, Parallel};
pub use random::RandomSegments;
pub use rolling::RollingSegments;
