use crate::concat::Concat;
use sequence_core::Sequence;
use std::marker::PhantomData;

/// Type-level depth zero: no flattening.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leaf;

/// Type-level depth successor: one more level of flattening.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nested<D>(PhantomData<D>);

pub type Depth1 = Nested<Leaf>;
pub type Depth2 = Nested<Depth1>;
pub type Depth3 = Nested<Depth2>;

/// Statically repeated flattening.
///
/// The depth is a type (`Leaf`, `Nested<Leaf>`, ...) resolved against the
/// element type's nesting; asking for more levels than the element type
/// nests fails to compile.
pub trait FlattenSeq<D>: Sequence + Sized {
    type Output: Sequence;

    fn flatten_seq(self) -> Self::Output;
}

impl<S: Sequence> FlattenSeq<Leaf> for S {
    type Output = S;

    fn flatten_seq(self) -> S {
        self
    }
}

impl<S, D> FlattenSeq<Nested<D>> for S
where
    S: Sequence,
    S::Item: Sequence,
    Concat<S>: FlattenSeq<D>,
{
    type Output = <Concat<S> as FlattenSeq<D>>::Output;

    fn flatten_seq(self) -> Self::Output {
        Concat::new(self).flatten_seq()
    }
}

/// Applies `concat` `D` times: `flatten::<Depth2, _>(seq)` unnests two
/// levels. Each level uses the forward flattening engine.
pub fn flatten<D, S: FlattenSeq<D>>(seq: S) -> S::Output {
    seq.flatten_seq()
}
