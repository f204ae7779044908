use sequence_core::{Bounded, Endless, Indexed, Replay, Sequence, Sliceable, Tiered, WriteBack};

/// Pointwise tuple zip over two to four sequences.
///
/// Produces the tuple of simultaneous current elements and terminates as
/// soon as any input does. Length is the minimum of the inputs' lengths,
/// exposed only when every input is bounded: mixing a bounded input with
/// an endless one leaves the result unbounded even though the minimum is
/// knowable, because the impls require a uniform capability across the
/// tuple. Indexing, slicing, replay and write-through likewise survive
/// only when every input has them, and the result is endless only when
/// every input is.
#[derive(Debug, Clone)]
pub struct Knit<T> {
    seqs: T,
}

/// Knits a tuple of sequences into one sequence of tuples.
pub fn knit<T>(seqs: T) -> Knit<T> {
    Knit { seqs }
}

macro_rules! knit_impl {
    ($(($S:ident, $idx:tt)),+) => {
        impl<$($S: Sequence),+> Sequence for Knit<($($S,)+)> {
            type Item = ($($S::Item,)+);

            fn is_done(&self) -> bool {
                false $(|| self.seqs.$idx.is_done())+
            }

            fn peek(&self) -> Option<Self::Item> {
                Some(($(self.seqs.$idx.peek()?,)+))
            }

            fn advance(&mut self) -> Option<Self::Item> {
                if self.is_done() {
                    return None;
                }
                Some(($(self.seqs.$idx.advance()?,)+))
            }
        }

        impl<$($S: Bounded),+> Bounded for Knit<($($S,)+)> {
            fn len(&self) -> usize {
                let mut len = usize::MAX;
                $(len = len.min(self.seqs.$idx.len());)+
                len
            }
        }

        impl<$($S: Indexed),+> Indexed for Knit<($($S,)+)> {
            fn get(&self, index: usize) -> Option<Self::Item> {
                Some(($(self.seqs.$idx.get(index)?,)+))
            }
        }

        impl<$($S: Replay),+> Replay for Knit<($($S,)+)> {}

        impl<$($S: Endless),+> Endless for Knit<($($S,)+)> {}

        impl<$($S: Sliceable),+> Sliceable for Knit<($($S,)+)> {
            type Slice = Knit<($($S::Slice,)+)>;

            fn slice(&self, start: usize, end: usize) -> Self::Slice {
                Knit {
                    seqs: ($(self.seqs.$idx.slice(start, end),)+),
                }
            }
        }

        impl<$($S: WriteBack),+> WriteBack for Knit<($($S,)+)> {
            fn put(&mut self, value: Self::Item) {
                $(self.seqs.$idx.put(value.$idx);)+
            }

            fn put_at(&mut self, index: usize, value: Self::Item) {
                $(self.seqs.$idx.put_at(index, value.$idx);)+
            }
        }

        impl<Tier, $($S: Tiered<Tier = Tier>),+> Tiered for Knit<($($S,)+)> {
            type Tier = Tier;
        }
    };
}

knit_impl!((A, 0), (B, 1));
knit_impl!((A, 0), (B, 1), (C, 2));
knit_impl!((A, 0), (B, 1), (C, 2), (D, 3));
