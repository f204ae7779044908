/// The minimal consumption contract every sequence value supports.
///
/// A sequence is read by checking for a current element, reading it, and
/// advancing past it. Everything beyond that (reverse traversal, direct
/// indexing, slicing, known length, write-through) lives in the capability
/// traits and is only available when the concrete type grants it; calling
/// an operation a type does not support fails to compile rather than at
/// run time.
pub trait Sequence {
    type Item;

    /// Returns true if there is no current element.
    fn is_done(&self) -> bool;

    /// Returns the current element without advancing.
    fn peek(&self) -> Option<Self::Item>;

    /// Returns the current element and advances past it.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Advances past up to `n` elements, returning how many were consumed.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut count = 0;
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
            count += 1;
        }
        count
    }

    /// Converts the sequence into a standard iterator that drains it.
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter { seq: self }
    }
}

/// Iterator bridge for any sequence; yields elements front to back.
#[derive(Debug, Clone)]
pub struct SeqIter<S> {
    seq: S,
}

impl<S: Sequence> Iterator for SeqIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.advance()
    }
}

impl<S: crate::capability::DoubleEnded> DoubleEndedIterator for SeqIter<S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.seq.advance_back()
    }
}
