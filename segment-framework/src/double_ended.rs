use sequence_core::{Bounded, DoubleEnded, DoubleEndedTier, Replay, Sequence, Tiered, Window};
use std::collections::VecDeque;

/// Windowing engine for reversible, bounded inputs without direct
/// indexing.
///
/// Keeps two saved cursors into the input plus a front and a back rolling
/// buffer. The total window count is fixed at construction; `remaining`
/// counts down as either end emits, so the two ends hand off the shared
/// middle region exactly once and neither cursor is advanced past the
/// meeting point.
#[derive(Debug, Clone)]
pub struct DoubleEndedSegments<S: Sequence, const N: usize> {
    front_src: S,
    back_src: S,
    front_buf: VecDeque<S::Item>,
    back_buf: VecDeque<S::Item>,
    remaining: usize,
}

impl<S, const N: usize> DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    /// Creates the engine, filling both end buffers eagerly.
    ///
    /// An input shorter than `N` yields an empty engine.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn new(seq: S) -> Self {
        assert!(N > 0, "window width must be at least 1");
        let windows = seq.len().saturating_sub(N - 1);
        if windows == 0 {
            let front_src = seq.save();
            return Self {
                front_src,
                back_src: seq,
                front_buf: VecDeque::new(),
                back_buf: VecDeque::new(),
                remaining: 0,
            };
        }

        let mut front_src = seq.save();
        let mut front_buf = VecDeque::with_capacity(N);
        for _ in 0..N {
            if let Some(value) = front_src.advance() {
                front_buf.push_back(value);
            }
        }

        let mut back_src = seq;
        let mut back_buf = VecDeque::with_capacity(N);
        for _ in 0..N {
            if let Some(value) = back_src.advance_back() {
                back_buf.push_front(value);
            }
        }

        Self {
            front_src,
            back_src,
            front_buf,
            back_buf,
            remaining: windows,
        }
    }
}

impl<S, const N: usize> Sequence for DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    type Item = Window<S::Item, N>;

    fn is_done(&self) -> bool {
        self.remaining == 0
    }

    fn peek(&self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        Window::try_collect(|k| self.front_buf.get(k).cloned())
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let window = self.peek()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            // The pull cannot fail: the counter guarantees the next front
            // window still ends before the input's end.
            if let Some(value) = self.front_src.advance() {
                self.front_buf.pop_front();
                self.front_buf.push_back(value);
            }
        } else {
            self.front_buf.clear();
            self.back_buf.clear();
        }
        Some(window)
    }
}

impl<S, const N: usize> DoubleEnded for DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    fn peek_back(&self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        Window::try_collect(|k| self.back_buf.get(k).cloned())
    }

    fn advance_back(&mut self) -> Option<Self::Item> {
        let window = self.peek_back()?;
        self.remaining -= 1;
        if self.remaining > 0 {
            if let Some(value) = self.back_src.advance_back() {
                self.back_buf.pop_back();
                self.back_buf.push_front(value);
            }
        } else {
            self.front_buf.clear();
            self.back_buf.clear();
        }
        Some(window)
    }
}

impl<S, const N: usize> Bounded for DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<S, const N: usize> Replay for DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
}

impl<S, const N: usize> Tiered for DoubleEndedSegments<S, N>
where
    S: DoubleEnded + Bounded + Replay,
    S::Item: Clone,
{
    type Tier = DoubleEndedTier;
}
