use sequence_core::{Bounded, Endless, ForwardTier, Replay, Sequence, Tiered, Window};
use std::collections::VecDeque;

/// Windowing engine for forward-only inputs.
///
/// Keeps a rolling buffer of the last `N` elements; each advance drops
/// the oldest buffered element and pulls one new element from the input,
/// O(1) amortized. Replayable exactly when the input is (duplicating the
/// buffer along with the input cursor); no reverse traversal.
#[derive(Debug, Clone)]
pub struct RollingSegments<S: Sequence, const N: usize> {
    seq: S,
    buf: VecDeque<S::Item>,
    done: bool,
}

impl<S, const N: usize> RollingSegments<S, N>
where
    S: Sequence,
    S::Item: Clone,
{
    /// Creates the engine, pulling the first `N` elements eagerly.
    ///
    /// An input shorter than `N` yields an empty engine.
    ///
    /// # Panics
    ///
    /// Panics if `N == 0`.
    pub fn new(mut seq: S) -> Self {
        assert!(N > 0, "window width must be at least 1");
        let mut buf = VecDeque::with_capacity(N);
        for _ in 0..N {
            match seq.advance() {
                Some(value) => buf.push_back(value),
                None => {
                    return Self {
                        seq,
                        buf: VecDeque::new(),
                        done: true,
                    }
                }
            }
        }
        Self {
            seq,
            buf,
            done: false,
        }
    }
}

impl<S, const N: usize> Sequence for RollingSegments<S, N>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Window<S::Item, N>;

    fn is_done(&self) -> bool {
        self.done
    }

    fn peek(&self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        Window::try_collect(|k| self.buf.get(k).cloned())
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let window = self.peek()?;
        match self.seq.advance() {
            Some(value) => {
                self.buf.pop_front();
                self.buf.push_back(value);
            }
            None => {
                self.done = true;
                self.buf.clear();
            }
        }
        Some(window)
    }
}

impl<S, const N: usize> Replay for RollingSegments<S, N>
where
    S: Replay,
    S::Item: Clone,
{
}

impl<S, const N: usize> Bounded for RollingSegments<S, N>
where
    S: Bounded,
    S::Item: Clone,
{
    fn len(&self) -> usize {
        // One window per unpulled input element, plus the buffered one.
        if self.done {
            0
        } else {
            self.seq.len() + 1
        }
    }
}

impl<S, const N: usize> Endless for RollingSegments<S, N>
where
    S: Endless,
    S::Item: Clone,
{
}

impl<S, const N: usize> Tiered for RollingSegments<S, N>
where
    S: Sequence,
    S::Item: Clone,
{
    type Tier = ForwardTier;
}
