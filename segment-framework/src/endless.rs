use sequence_core::{
    Endless, EndlessRandomTier, Indexed, Replay, Sequence, Tiered, Window, WriteBack,
};

/// Windowing engine for indexed, endless inputs.
///
/// A forward window index only: the input never ends, so there is no back
/// boundary and window indexing is unbounded in the forward direction.
#[derive(Debug, Clone)]
pub struct EndlessSegments<S, const N: usize> {
    seq: S,
    front: usize,
}

impl<S, const N: usize> EndlessSegments<S, N>
where
    S: Indexed + Endless,
    S::Item: Clone,
{
    /// Creates the engine over `seq`.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn new(seq: S) -> Self {
        assert!(N > 0, "window width must be at least 1");
        Self { seq, front: 0 }
    }

    fn window_at(&self, start: usize) -> Option<Window<S::Item, N>> {
        Window::try_collect(|k| self.seq.get(start + k))
    }
}

impl<S, const N: usize> Sequence for EndlessSegments<S, N>
where
    S: Indexed + Endless,
    S::Item: Clone,
{
    type Item = Window<S::Item, N>;

    fn is_done(&self) -> bool {
        false
    }

    fn peek(&self) -> Option<Self::Item> {
        self.window_at(self.front)
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let window = self.peek()?;
        self.front += 1;
        Some(window)
    }
}

impl<S, const N: usize> Indexed for EndlessSegments<S, N>
where
    S: Indexed + Endless,
    S::Item: Clone,
{
    fn get(&self, index: usize) -> Option<Self::Item> {
        self.window_at(self.front + index)
    }
}

impl<S, const N: usize> Endless for EndlessSegments<S, N>
where
    S: Indexed + Endless,
    S::Item: Clone,
{
}

impl<S, const N: usize> Replay for EndlessSegments<S, N>
where
    S: Indexed + Endless + Replay,
    S::Item: Clone,
{
}

impl<S, const N: usize> WriteBack for EndlessSegments<S, N>
where
    S: Indexed + Endless + WriteBack,
    S::Item: Clone,
{
    fn put(&mut self, value: Self::Item) {
        self.put_at(0, value);
    }

    fn put_at(&mut self, index: usize, value: Self::Item) {
        for (k, member) in value.into_inner().into_iter().enumerate() {
            self.seq.put_at(self.front + index + k, member);
        }
    }
}

impl<S, const N: usize> Tiered for EndlessSegments<S, N>
where
    S: Indexed + Endless,
    S::Item: Clone,
{
    type Tier = EndlessRandomTier;
}
