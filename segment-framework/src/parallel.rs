use sequence_core::{Bounded, DoubleEnded, Endless, Indexed, Replay, Sequence, Tiered, Window};

/// Broadcasts one sequence into lock-step `K`-tuples.
///
/// Every field of each output window is the same current element; no
/// windowing is involved, so every input capability survives.
#[derive(Debug, Clone)]
pub struct Parallel<S, const K: usize> {
    seq: S,
}

/// Broadcasts each element of `seq` into a `K`-field window.
///
/// # Panics
///
/// Panics if `K == 0`.
pub fn parallel<const K: usize, S: Sequence>(seq: S) -> Parallel<S, K> {
    assert!(K > 0, "parallel requires at least one field");
    Parallel { seq }
}

fn broadcast<T: Clone, const K: usize>(value: T) -> Window<T, K> {
    Window::fill_with(|_| value.clone())
}

impl<S, const K: usize> Sequence for Parallel<S, K>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = Window<S::Item, K>;

    fn is_done(&self) -> bool {
        self.seq.is_done()
    }

    fn peek(&self) -> Option<Self::Item> {
        Some(broadcast(self.seq.peek()?))
    }

    fn advance(&mut self) -> Option<Self::Item> {
        Some(broadcast(self.seq.advance()?))
    }
}

impl<S, const K: usize> DoubleEnded for Parallel<S, K>
where
    S: DoubleEnded,
    S::Item: Clone,
{
    fn peek_back(&self) -> Option<Self::Item> {
        Some(broadcast(self.seq.peek_back()?))
    }

    fn advance_back(&mut self) -> Option<Self::Item> {
        Some(broadcast(self.seq.advance_back()?))
    }
}

impl<S, const K: usize> Indexed for Parallel<S, K>
where
    S: Indexed,
    S::Item: Clone,
{
    fn get(&self, index: usize) -> Option<Self::Item> {
        Some(broadcast(self.seq.get(index)?))
    }
}

impl<S, const K: usize> Bounded for Parallel<S, K>
where
    S: Bounded,
    S::Item: Clone,
{
    fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<S, const K: usize> Replay for Parallel<S, K>
where
    S: Replay,
    S::Item: Clone,
{
}

impl<S, const K: usize> Endless for Parallel<S, K>
where
    S: Endless,
    S::Item: Clone,
{
}

impl<S, const K: usize> Tiered for Parallel<S, K>
where
    S: Tiered,
    S::Item: Clone,
{
    type Tier = S::Tier;
}
