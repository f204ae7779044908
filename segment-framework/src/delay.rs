use crate::dispatch::{segment, SegmentStrategy};
use sequence_core::{Bounded, DoubleEnded, Endless, Indexed, Replay, Sequence, Tiered, Window};

/// Extracts a fixed list of index offsets from each window position.
///
/// `delay` reduces to segmentation plus a static field projection: the
/// wrapped engine produces `W`-wide windows and each output tuple's k-th
/// field is the window field at `offsets[k]`. Offsets may repeat, be
/// unordered, and be non-contiguous; the windowing logic itself is never
/// re-derived here.
#[derive(Debug, Clone)]
pub struct Delay<Seg, const K: usize> {
    segments: Seg,
    picks: [usize; K],
}

impl<T, Seg, const W: usize, const K: usize> Delay<Seg, K>
where
    T: Clone,
    Seg: Sequence<Item = Window<T, W>>,
{
    /// Wraps an existing window sequence with a field projection.
    ///
    /// # Panics
    ///
    /// Panics if `K == 0` or any offset is outside the window width `W`.
    pub fn new(segments: Seg, picks: [usize; K]) -> Self {
        assert!(K > 0, "delay requires at least one offset");
        for &offset in picks.iter() {
            assert!(offset < W, "delay offset {offset} exceeds window width {W}");
        }
        Self { segments, picks }
    }

    fn project(&self, window: &Window<T, W>) -> Option<Window<T, K>> {
        Window::try_collect(|k| window.get(self.picks[k]).cloned())
    }
}

/// Produces tuples of the input elements at `currentPosition + offsets[k]`.
///
/// The window width `W` must equal `max(offsets) + 1`; the mismatch is
/// rejected at construction.
///
/// # Panics
///
/// Panics if `K == 0` or `max(offsets) + 1 != W`.
pub fn delay<const W: usize, const K: usize, S>(
    offsets: [usize; K],
    seq: S,
) -> Delay<<S::Tier as SegmentStrategy<S, W>>::Engine, K>
where
    S: Tiered,
    S::Tier: SegmentStrategy<S, W>,
{
    assert!(K > 0, "delay requires at least one offset");
    let widest = offsets.iter().copied().max().unwrap_or(0);
    assert!(
        widest + 1 == W,
        "delay window width {W} must equal max(offsets) + 1 = {}",
        widest + 1
    );
    Delay {
        segments: segment::<W, S>(seq),
        picks: offsets,
    }
}

impl<T, Seg, const W: usize, const K: usize> Sequence for Delay<Seg, K>
where
    T: Clone,
    Seg: Sequence<Item = Window<T, W>>,
{
    type Item = Window<T, K>;

    fn is_done(&self) -> bool {
        self.segments.is_done()
    }

    fn peek(&self) -> Option<Self::Item> {
        let window = self.segments.peek()?;
        self.project(&window)
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let window = self.segments.advance()?;
        self.project(&window)
    }
}

impl<T, Seg, const W: usize, const K: usize> DoubleEnded for Delay<Seg, K>
where
    T: Clone,
    Seg: DoubleEnded<Item = Window<T, W>>,
{
    fn peek_back(&self) -> Option<Self::Item> {
        let window = self.segments.peek_back()?;
        self.project(&window)
    }

    fn advance_back(&mut self) -> Option<Self::Item> {
        let window = self.segments.advance_back()?;
        self.project(&window)
    }
}

impl<T, Seg, const W: usize, const K: usize> Indexed for Delay<Seg, K>
where
    T: Clone,
    Seg: Indexed<Item = Window<T, W>>,
{
    fn get(&self, index: usize) -> Option<Self::Item> {
        let window = self.segments.get(index)?;
        self.project(&window)
    }
}

impl<T, Seg, const W: usize, const K: usize> Bounded for Delay<Seg, K>
where
    T: Clone,
    Seg: Bounded<Item = Window<T, W>>,
{
    fn len(&self) -> usize {
        self.segments.len()
    }
}

impl<T, Seg, const W: usize, const K: usize> Replay for Delay<Seg, K>
where
    T: Clone,
    Seg: Replay<Item = Window<T, W>>,
{
}

impl<T, Seg, const W: usize, const K: usize> Endless for Delay<Seg, K>
where
    T: Clone,
    Seg: Endless<Item = Window<T, W>>,
{
}

impl<T, Seg, const W: usize, const K: usize> Tiered for Delay<Seg, K>
where
    T: Clone,
    Seg: Tiered<Item = Window<T, W>>,
{
    type Tier = Seg::Tier;
}
