use crate::traits::Sequence;

/// A sequence whose traversal position can be duplicated cheaply.
///
/// The duplicate advances independently of the original. Duplication is
/// `Clone` by default; implementations with shared state override `save`
/// when duplication has side effects (e.g. cursor registration).
pub trait Replay: Sequence + Clone {
    /// Returns an independent copy positioned at the same element.
    fn save(&self) -> Self {
        self.clone()
    }
}

/// A sequence that can also be traversed from the end.
///
/// Front and back consumption converge: once they meet the sequence is
/// done, and no element is observed from both ends.
pub trait DoubleEnded: Sequence {
    /// Returns the last remaining element without retreating.
    fn peek_back(&self) -> Option<Self::Item>;

    /// Returns the last remaining element and retreats past it.
    fn advance_back(&mut self) -> Option<Self::Item>;
}

/// A sequence supporting direct access by offset from the current front.
pub trait Indexed: Sequence {
    /// Returns the element `index` positions past the current front, or
    /// `None` if that offset is out of bounds.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the currently valid range. Exhaustion
    /// is not involved here; an out-of-range offset is a caller error.
    fn at(&self, index: usize) -> Self::Item {
        match self.get(index) {
            Some(value) => value,
            None => panic!("sequence index {index} out of bounds"),
        }
    }
}

/// A sequence that knows its remaining element count without traversal.
pub trait Bounded: Sequence {
    /// Returns the number of elements left.
    fn len(&self) -> usize;

    /// Returns true if no elements are left.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence supporting extraction of a sub-sequence by offset range.
pub trait Sliceable: Sequence {
    type Slice: Sequence<Item = Self::Item>;

    /// Returns the sub-sequence covering `[start, end)` relative to the
    /// current front.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end` exceeds the remaining length.
    fn slice(&self, start: usize, end: usize) -> Self::Slice;
}

/// Marker for sequences that never terminate.
///
/// `is_done` is always false and the sequence is never empty. Mutually
/// exclusive with [`Bounded`]; no type implements both.
pub trait Endless: Sequence {}

/// A sequence whose elements can be written through the traversal position.
pub trait WriteBack: Sequence {
    /// Overwrites the current front element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is exhausted.
    fn put(&mut self, value: Self::Item);

    /// Overwrites the element `index` positions past the current front.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the currently valid range.
    fn put_at(&mut self, index: usize, value: Self::Item);
}
