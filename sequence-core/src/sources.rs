//! Concrete sequence sources.
//!
//! These are the entry points callers wrap in combinators: borrowed
//! slices (full random tier), mutable slices (random tier with
//! write-through), an adapter over any `Iterator` (single pass), and the
//! endless `repeat`/`ascending` generators.

use crate::capability::{Bounded, DoubleEnded, Endless, Indexed, Replay, Sliceable, WriteBack};
use crate::tier::{DoubleEndedTier, EndlessRandomTier, ForwardTier, RandomTier, Tiered};
use crate::traits::Sequence;

/// A sequence over a borrowed slice.
#[derive(Debug)]
pub struct SliceSeq<'a, T> {
    data: &'a [T],
    front: usize,
    back: usize,
}

/// Creates a sequence over `data`.
pub fn from_slice<T>(data: &[T]) -> SliceSeq<'_, T> {
    SliceSeq {
        data,
        front: 0,
        back: data.len(),
    }
}

impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> Copy for SliceSeq<'_, T> {}

impl<T: Clone> Sequence for SliceSeq<'_, T> {
    type Item = T;

    fn is_done(&self) -> bool {
        self.front >= self.back
    }

    fn peek(&self) -> Option<T> {
        if self.is_done() {
            return None;
        }
        Some(self.data[self.front].clone())
    }

    fn advance(&mut self) -> Option<T> {
        let value = self.peek()?;
        self.front += 1;
        Some(value)
    }
}

impl<T: Clone> Replay for SliceSeq<'_, T> {}

impl<T: Clone> DoubleEnded for SliceSeq<'_, T> {
    fn peek_back(&self) -> Option<T> {
        if self.is_done() {
            return None;
        }
        Some(self.data[self.back - 1].clone())
    }

    fn advance_back(&mut self) -> Option<T> {
        let value = self.peek_back()?;
        self.back -= 1;
        Some(value)
    }
}

impl<T: Clone> Indexed for SliceSeq<'_, T> {
    fn get(&self, index: usize) -> Option<T> {
        if self.front + index >= self.back {
            return None;
        }
        Some(self.data[self.front + index].clone())
    }
}

impl<T: Clone> Bounded for SliceSeq<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, T: Clone> Sliceable for SliceSeq<'a, T> {
    type Slice = SliceSeq<'a, T>;

    fn slice(&self, start: usize, end: usize) -> SliceSeq<'a, T> {
        assert!(
            start <= end && self.front + end <= self.back,
            "slice bounds {start}..{end} out of range for length {}",
            self.back - self.front
        );
        SliceSeq {
            data: self.data,
            front: self.front + start,
            back: self.front + end,
        }
    }
}

impl<T: Clone> Tiered for SliceSeq<'_, T> {
    type Tier = RandomTier;
}

/// A sequence over a mutable slice, with element write-through.
///
/// Not replayable: the exclusive borrow cannot be duplicated.
#[derive(Debug)]
pub struct MutSliceSeq<'a, T> {
    data: &'a mut [T],
    front: usize,
    back: usize,
}

/// Creates a mutable sequence over `data`.
pub fn from_mut_slice<T>(data: &mut [T]) -> MutSliceSeq<'_, T> {
    let back = data.len();
    MutSliceSeq {
        data,
        front: 0,
        back,
    }
}

impl<T: Clone> Sequence for MutSliceSeq<'_, T> {
    type Item = T;

    fn is_done(&self) -> bool {
        self.front >= self.back
    }

    fn peek(&self) -> Option<T> {
        if self.is_done() {
            return None;
        }
        Some(self.data[self.front].clone())
    }

    fn advance(&mut self) -> Option<T> {
        let value = self.peek()?;
        self.front += 1;
        Some(value)
    }
}

impl<T: Clone> DoubleEnded for MutSliceSeq<'_, T> {
    fn peek_back(&self) -> Option<T> {
        if self.is_done() {
            return None;
        }
        Some(self.data[self.back - 1].clone())
    }

    fn advance_back(&mut self) -> Option<T> {
        let value = self.peek_back()?;
        self.back -= 1;
        Some(value)
    }
}

impl<T: Clone> Indexed for MutSliceSeq<'_, T> {
    fn get(&self, index: usize) -> Option<T> {
        if self.front + index >= self.back {
            return None;
        }
        Some(self.data[self.front + index].clone())
    }
}

impl<T: Clone> Bounded for MutSliceSeq<'_, T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T: Clone> WriteBack for MutSliceSeq<'_, T> {
    fn put(&mut self, value: T) {
        self.put_at(0, value);
    }

    fn put_at(&mut self, index: usize, value: T) {
        assert!(
            self.front + index < self.back,
            "write index {index} out of bounds for length {}",
            self.back - self.front
        );
        self.data[self.front + index] = value;
    }
}

impl<T: Clone> Tiered for MutSliceSeq<'_, T> {
    type Tier = RandomTier;
}

/// Single-pass adapter over any iterator.
///
/// The current element is held so that `peek` works without consuming.
#[derive(Debug, Clone)]
pub struct IterSeq<I: Iterator> {
    iter: I,
    current: Option<I::Item>,
}

/// Adapts an iterator (or anything iterable) into a single-pass sequence.
pub fn from_iterator<I: IntoIterator>(iter: I) -> IterSeq<I::IntoIter> {
    let mut iter = iter.into_iter();
    let current = iter.next();
    IterSeq { iter, current }
}

impl<I> Sequence for IterSeq<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn is_done(&self) -> bool {
        self.current.is_none()
    }

    fn peek(&self) -> Option<I::Item> {
        self.current.clone()
    }

    fn advance(&mut self) -> Option<I::Item> {
        let value = self.current.take();
        self.current = self.iter.next();
        value
    }
}

impl<I> Tiered for IterSeq<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Tier = ForwardTier;
}

/// Endless sequence repeating one value.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
}

/// Creates an endless sequence of clones of `value`.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat { value }
}

impl<T: Clone> Sequence for Repeat<T> {
    type Item = T;

    fn is_done(&self) -> bool {
        false
    }

    fn peek(&self) -> Option<T> {
        Some(self.value.clone())
    }

    fn advance(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T: Clone> Replay for Repeat<T> {}

impl<T: Clone> Indexed for Repeat<T> {
    fn get(&self, _index: usize) -> Option<T> {
        Some(self.value.clone())
    }
}

impl<T: Clone> Endless for Repeat<T> {}

impl<T: Clone> Tiered for Repeat<T> {
    type Tier = EndlessRandomTier;
}

/// Endless ascending integers.
#[derive(Debug, Clone, Copy)]
pub struct Ascending {
    next: usize,
}

/// Creates the endless sequence `start, start + 1, start + 2, ...`.
pub fn ascending(start: usize) -> Ascending {
    Ascending { next: start }
}

impl Sequence for Ascending {
    type Item = usize;

    fn is_done(&self) -> bool {
        false
    }

    fn peek(&self) -> Option<usize> {
        Some(self.next)
    }

    fn advance(&mut self) -> Option<usize> {
        let value = self.next;
        self.next += 1;
        Some(value)
    }
}

impl Replay for Ascending {}

impl Indexed for Ascending {
    fn get(&self, index: usize) -> Option<usize> {
        Some(self.next + index)
    }
}

impl Endless for Ascending {}

impl Tiered for Ascending {
    type Tier = EndlessRandomTier;
}

/// Capability-restricting wrapper: hides indexing and slicing, keeping
/// only forward/backward traversal, length and replay.
///
/// Declares the double-ended tier, so engine selection over a fully
/// random-access input can be forced onto the buffered double-ended
/// strategy (useful for parity testing and for composing with inputs
/// whose indexing is expensive).
#[derive(Debug, Clone)]
pub struct NotIndexed<S> {
    seq: S,
}

impl<S: Sequence> NotIndexed<S> {
    pub fn new(seq: S) -> Self {
        Self { seq }
    }
}

impl<S: Sequence> Sequence for NotIndexed<S> {
    type Item = S::Item;

    fn is_done(&self) -> bool {
        self.seq.is_done()
    }

    fn peek(&self) -> Option<S::Item> {
        self.seq.peek()
    }

    fn advance(&mut self) -> Option<S::Item> {
        self.seq.advance()
    }
}

impl<S: Replay> Replay for NotIndexed<S> {}

impl<S: DoubleEnded> DoubleEnded for NotIndexed<S> {
    fn peek_back(&self) -> Option<S::Item> {
        self.seq.peek_back()
    }

    fn advance_back(&mut self) -> Option<S::Item> {
        self.seq.advance_back()
    }
}

impl<S: Bounded> Bounded for NotIndexed<S> {
    fn len(&self) -> usize {
        self.seq.len()
    }
}

impl<S: Sequence> Tiered for NotIndexed<S> {
    type Tier = DoubleEndedTier;
}
