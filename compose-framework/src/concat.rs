use sequence_core::{
    DoubleEnded, DoubleEndedTier, ForwardTier, RandomTier, Replay, Sequence, Tiered,
};

/// Forward one-level flattening of a sequence of sequences.
///
/// Walks the outer sequence and drains each inner sequence before pulling
/// the next; empty inners are skipped transparently. Invariant: whenever
/// `front` is `Some`, it has a current element.
#[derive(Debug)]
pub struct Concat<S: Sequence>
where
    S::Item: Sequence,
{
    outer: S,
    front: Option<S::Item>,
}

impl<S> Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    pub fn new(outer: S) -> Self {
        let mut flat = Self { outer, front: None };
        flat.refill_front();
        flat
    }

    fn refill_front(&mut self) {
        loop {
            if let Some(inner) = &self.front {
                if !inner.is_done() {
                    return;
                }
            }
            match self.outer.advance() {
                Some(inner) => self.front = Some(inner),
                None => {
                    self.front = None;
                    return;
                }
            }
        }
    }
}

impl<S> Sequence for Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn is_done(&self) -> bool {
        self.front.is_none()
    }

    fn peek(&self) -> Option<Self::Item> {
        self.front.as_ref().and_then(|inner| inner.peek())
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let inner = self.front.as_mut()?;
        let value = inner.advance();
        self.refill_front();
        value
    }
}

impl<S> Clone for Concat<S>
where
    S: Sequence + Clone,
    S::Item: Sequence + Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            front: self.front.clone(),
        }
    }
}

impl<S> Replay for Concat<S>
where
    S: Replay,
    S::Item: Replay,
{
}

impl<S> Tiered for Concat<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Tier = ForwardTier;
}

/// Double-ended one-level flattening.
///
/// Keeps a normalized inner sequence at each end; the outer sequence is
/// consumed from either side exactly once, so the last inner pulled is
/// owned by exactly one end and the middle is handed off cleanly when the
/// two ends converge. Invariant: an end's inner is `Some` only while it
/// has a current element on that end's side.
#[derive(Debug)]
pub struct DeConcat<S: Sequence>
where
    S::Item: Sequence,
{
    outer: S,
    front: Option<S::Item>,
    back: Option<S::Item>,
}

impl<S> DeConcat<S>
where
    S: DoubleEnded,
    S::Item: Sequence,
{
    pub fn new(outer: S) -> Self {
        let mut flat = Self {
            outer,
            front: None,
            back: None,
        };
        flat.refill_front();
        flat.refill_back();
        flat
    }

    fn refill_front(&mut self) {
        loop {
            if let Some(inner) = &self.front {
                if !inner.is_done() {
                    return;
                }
            }
            match self.outer.advance() {
                Some(inner) => self.front = Some(inner),
                None => {
                    self.front = None;
                    return;
                }
            }
        }
    }

    fn refill_back(&mut self) {
        loop {
            if let Some(inner) = &self.back {
                if !inner.is_done() {
                    return;
                }
            }
            match self.outer.advance_back() {
                Some(inner) => self.back = Some(inner),
                None => {
                    self.back = None;
                    return;
                }
            }
        }
    }
}

impl<S> Sequence for DeConcat<S>
where
    S: DoubleEnded,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;

    fn is_done(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    fn peek(&self) -> Option<Self::Item> {
        if let Some(inner) = &self.front {
            if let Some(value) = inner.peek() {
                return Some(value);
            }
        }
        self.back.as_ref().and_then(|inner| inner.peek())
    }

    fn advance(&mut self) -> Option<Self::Item> {
        if self.front.is_some() {
            let value = match self.front.as_mut() {
                Some(inner) => inner.advance(),
                None => None,
            };
            self.refill_front();
            return value;
        }
        // Outer exhausted; the back inner holds the remaining elements.
        let inner = self.back.as_mut()?;
        let value = inner.advance();
        if inner.is_done() {
            self.back = None;
        }
        value
    }
}

impl<S> DoubleEnded for DeConcat<S>
where
    S: DoubleEnded,
    S::Item: DoubleEnded,
{
    fn peek_back(&self) -> Option<Self::Item> {
        if let Some(inner) = &self.back {
            if let Some(value) = inner.peek_back() {
                return Some(value);
            }
        }
        self.front.as_ref().and_then(|inner| inner.peek_back())
    }

    fn advance_back(&mut self) -> Option<Self::Item> {
        if self.back.is_some() {
            let value = match self.back.as_mut() {
                Some(inner) => inner.advance_back(),
                None => None,
            };
            self.refill_back();
            return value;
        }
        let inner = self.front.as_mut()?;
        let value = inner.advance_back();
        if inner.is_done() {
            self.front = None;
        }
        value
    }
}

impl<S> Clone for DeConcat<S>
where
    S: Sequence + Clone,
    S::Item: Sequence + Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<S> Replay for DeConcat<S>
where
    S: DoubleEnded + Replay,
    S::Item: Replay,
{
}

impl<S> Tiered for DeConcat<S>
where
    S: DoubleEnded,
    S::Item: Sequence,
{
    // Flattening discards length knowledge, so onward segmentation can
    // only use the forward engine.
    type Tier = ForwardTier;
}

/// Maps a capability tier to the flattening engine it can support.
pub trait ConcatStrategy<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Engine: Sequence<Item = <S::Item as Sequence>::Item>;

    fn build(seq: S) -> Self::Engine;
}

impl<S> ConcatStrategy<S> for ForwardTier
where
    S: Sequence,
    S::Item: Sequence,
{
    type Engine = Concat<S>;

    fn build(seq: S) -> Self::Engine {
        Concat::new(seq)
    }
}

impl<S> ConcatStrategy<S> for RandomTier
where
    S: DoubleEnded,
    S::Item: DoubleEnded,
{
    type Engine = DeConcat<S>;

    fn build(seq: S) -> Self::Engine {
        DeConcat::new(seq)
    }
}

impl<S> ConcatStrategy<S> for DoubleEndedTier
where
    S: DoubleEnded,
    S::Item: DoubleEnded,
{
    type Engine = DeConcat<S>;

    fn build(seq: S) -> Self::Engine {
        DeConcat::new(seq)
    }
}

/// Flattens a sequence of sequences by one level, skipping empty inner
/// sequences, with the engine selected by the outer sequence's tier.
pub fn concat<S>(seq: S) -> <S::Tier as ConcatStrategy<S>>::Engine
where
    S: Tiered,
    S::Item: Sequence,
    S::Tier: ConcatStrategy<S>,
{
    <S::Tier as ConcatStrategy<S>>::build(seq)
}
