use crate::double_ended::DoubleEndedSegments;
use crate::endless::EndlessSegments;
use crate::random::RandomSegments;
use crate::rolling::RollingSegments;
use sequence_core::{
    Bounded, DoubleEnded, DoubleEndedTier, Endless, EndlessRandomTier, ForwardTier, Indexed,
    RandomTier, Replay, Sequence, Tiered, Window,
};

/// Maps a capability tier to the segmentation engine it can support.
///
/// Resolved once per input type at construction; there is no runtime
/// branching on capabilities. An input whose tier cannot satisfy a
/// strategy's bounds fails to compile at the `segment` call site.
pub trait SegmentStrategy<S: Sequence, const N: usize> {
    type Engine: Sequence<Item = Window<S::Item, N>>;

    fn build(seq: S) -> Self::Engine;
}

impl<S, const N: usize> SegmentStrategy<S, N> for RandomTier
where
    S: Indexed + Bounded + DoubleEnded,
    S::Item: Clone,
{
    type Engine = RandomSegments<S, N>;

    fn build(seq: S) -> Self::Engine {
        RandomSegments::new(seq)
    }
}

impl<S, const N: usize> SegmentStrategy<S, N> for ForwardTier
where
    S: Sequence,
    S::Item: Clone,
{
    type Engine = RollingSegments<S, N>;

    fn build(seq: S) -> Self::Engine {
        RollingSegments::new(seq)
    }
}

impl<S, const N: usize> SegmentStrategy<S, N> for DoubleEndedTier
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    type Engine = DoubleEndedSegments<S, N>;

    fn build(seq: S) -> Self::Engine {
        DoubleEndedSegments::new(seq)
    }
}

impl<S, const N: usize> SegmentStrategy<S, N> for EndlessRandomTier
where
    S: Indexed + Endless,
    S::Item: Clone,
{
    type Engine = EndlessSegments<S, N>;

    fn build(seq: S) -> Self::Engine {
        EndlessSegments::new(seq)
    }
}

/// Produces every `N`-wide overlapping window of `seq`, using the engine
/// selected by the input's capability tier.
///
/// An input with fewer than `N` elements yields an empty result. `N == 1`
/// wraps each element in a unary window with full capability propagation.
///
/// # Panics
///
/// Panics if `N == 0`.
pub fn segment<const N: usize, S>(seq: S) -> <S::Tier as SegmentStrategy<S, N>>::Engine
where
    S: Tiered,
    S::Tier: SegmentStrategy<S, N>,
{
    <S::Tier as SegmentStrategy<S, N>>::build(seq)
}
