use sequence_core::{
    Bounded, DoubleEnded, Indexed, RandomTier, Replay, Sequence, Sliceable, Tiered, Window,
    WriteBack,
};

/// Windowing engine for indexed, bounded, reversible inputs.
///
/// Keeps two half-open window indices into the untouched input and
/// materializes each window on demand from direct reads, so every
/// operation the input supports survives: forward and backward traversal,
/// indexing, length, slicing, and write-through.
#[derive(Debug, Clone)]
pub struct RandomSegments<S, const N: usize> {
    seq: S,
    front: usize,
    back: usize,
}

impl<S, const N: usize> RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    /// Creates the engine over `seq`.
    ///
    /// An input shorter than `N` yields an empty engine.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn new(seq: S) -> Self {
        assert!(N > 0, "window width must be at least 1");
        let windows = seq.len().saturating_sub(N - 1);
        Self {
            seq,
            front: 0,
            back: windows,
        }
    }

    fn window_at(&self, start: usize) -> Option<Window<S::Item, N>> {
        Window::try_collect(|k| self.seq.get(start + k))
    }
}

impl<S, const N: usize> Sequence for RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    type Item = Window<S::Item, N>;

    fn is_done(&self) -> bool {
        self.front >= self.back
    }

    fn peek(&self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        self.window_at(self.front)
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let window = self.peek()?;
        self.front += 1;
        Some(window)
    }
}

impl<S, const N: usize> DoubleEnded for RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    fn peek_back(&self) -> Option<Self::Item> {
        if self.is_done() {
            return None;
        }
        self.window_at(self.back - 1)
    }

    fn advance_back(&mut self) -> Option<Self::Item> {
        let window = self.peek_back()?;
        self.back -= 1;
        Some(window)
    }
}

impl<S, const N: usize> Indexed for RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    fn get(&self, index: usize) -> Option<Self::Item> {
        if self.front + index >= self.back {
            return None;
        }
        self.window_at(self.front + index)
    }
}

impl<S, const N: usize> Bounded for RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<S, const N: usize> Replay for RandomSegments<S, N>
where
    S: Indexed + Bounded + Replay,
    S::Item: Clone,
{
}

impl<S, const N: usize> Sliceable for RandomSegments<S, N>
where
    S: Indexed + Bounded + Replay,
    S::Item: Clone,
{
    type Slice = Self;

    fn slice(&self, start: usize, end: usize) -> Self {
        assert!(
            start <= end && self.front + end <= self.back,
            "slice bounds {start}..{end} out of range for length {}",
            self.back - self.front
        );
        Self {
            seq: self.seq.save(),
            front: self.front + start,
            back: self.front + end,
        }
    }
}

impl<S, const N: usize> WriteBack for RandomSegments<S, N>
where
    S: Indexed + Bounded + WriteBack,
    S::Item: Clone,
{
    fn put(&mut self, value: Self::Item) {
        self.put_at(0, value);
    }

    /// Writes the window's `N` members back into input positions
    /// `index .. index + N` relative to the current front window.
    fn put_at(&mut self, index: usize, value: Self::Item) {
        assert!(
            self.front + index < self.back,
            "window position {index} out of bounds for length {}",
            self.back - self.front
        );
        for (k, member) in value.into_inner().into_iter().enumerate() {
            self.seq.put_at(self.front + index + k, member);
        }
    }
}

impl<S, const N: usize> Tiered for RandomSegments<S, N>
where
    S: Indexed + Bounded,
    S::Item: Clone,
{
    type Tier = RandomTier;
}
