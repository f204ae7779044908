use crate::store::RingStore;
use sequence_core::{ForwardTier, Replay, Sequence, Tiered};
use std::cell::RefCell;
use std::rc::Rc;

/// Buffer lifecycle events, delivered to an injected observer.
#[cfg(feature = "trace")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferEvent {
    /// One element was pulled from the underlying source.
    Fetch { offset: u64 },
    /// The physical store doubled to `capacity` cells.
    Grow { capacity: usize },
    /// Elements below `retained_from` were evicted.
    Compact { retained_from: u64 },
}

struct Shared<S: Sequence> {
    source: S,
    source_done: bool,
    store: RingStore<S::Item>,
    /// Live cursor offsets; `None` marks a retired slot awaiting reuse.
    slots: Vec<Option<u64>>,
    free: Vec<usize>,
    #[cfg(feature = "trace")]
    observer: Option<Box<dyn FnMut(BufferEvent)>>,
}

impl<S: Sequence> Shared<S> {
    #[cfg(feature = "trace")]
    fn emit(&mut self, event: BufferEvent) {
        if let Some(observer) = &mut self.observer {
            observer(event);
        }
    }

    /// Smallest offset any live cursor still needs; nothing below it is
    /// retained.
    fn min_live(&self) -> u64 {
        self.slots
            .iter()
            .flatten()
            .copied()
            .min()
            .unwrap_or(self.store.end())
    }

    /// Pulls from the source until `target` is produced or the source
    /// ends. Each offset is fetched at most once, ever.
    fn produce_to(&mut self, target: u64) {
        while !self.source_done && self.store.end() <= target {
            match self.source.advance() {
                Some(value) => {
                    #[cfg(feature = "trace")]
                    self.emit(BufferEvent::Fetch {
                        offset: self.store.end(),
                    });
                    let grew = self.store.push(value);
                    #[cfg(feature = "trace")]
                    if grew {
                        self.emit(BufferEvent::Grow {
                            capacity: self.store.capacity(),
                        });
                    }
                    #[cfg(not(feature = "trace"))]
                    let _ = grew;
                }
                None => self.source_done = true,
            }
        }
    }

    fn compact(&mut self) {
        let min = self.min_live();
        if min > self.store.start() {
            self.store.evict_below(min);
            #[cfg(feature = "trace")]
            self.emit(BufferEvent::Compact { retained_from: min });
        }
    }

    fn alloc_slot(&mut self, offset: u64) -> usize {
        if let Some(slot) = self.free.pop() {
            self.slots[slot] = Some(offset);
            slot
        } else {
            self.slots.push(Some(offset));
            self.slots.len() - 1
        }
    }
}

/// A replayable view over a single-pass sequence.
///
/// All views created from one `memoize` call share a single store; each
/// view is an independent cursor identified by a slot in the shared
/// table. Cloning a view registers a new cursor at the same position, and
/// dropping one retires its slot deterministically, which is what allows
/// the retained span to shrink.
pub struct Memoized<S: Sequence> {
    shared: Rc<RefCell<Shared<S>>>,
    slot: usize,
}

/// Wraps `seq` so it can be replayed through any number of saved cursors.
pub fn memoize<S: Sequence>(seq: S) -> Memoized<S> {
    Memoized {
        shared: Rc::new(RefCell::new(Shared {
            source: seq,
            source_done: false,
            store: RingStore::new(),
            slots: vec![Some(0)],
            free: Vec::new(),
            #[cfg(feature = "trace")]
            observer: None,
        })),
        slot: 0,
    }
}

/// Like [`memoize`], with an observer receiving buffer lifecycle events.
#[cfg(feature = "trace")]
pub fn memoize_with_observer<S, F>(seq: S, observer: F) -> Memoized<S>
where
    S: Sequence,
    F: FnMut(BufferEvent) + 'static,
{
    Memoized {
        shared: Rc::new(RefCell::new(Shared {
            source: seq,
            source_done: false,
            store: RingStore::new(),
            slots: vec![Some(0)],
            free: Vec::new(),
            observer: Some(Box::new(observer)),
        })),
        slot: 0,
    }
}

impl<S> Sequence for Memoized<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn is_done(&self) -> bool {
        let mut shared = self.shared.borrow_mut();
        let offset = match shared.slots[self.slot] {
            Some(offset) => offset,
            None => return true,
        };
        shared.produce_to(offset);
        offset >= shared.store.end()
    }

    fn peek(&self) -> Option<S::Item> {
        let mut shared = self.shared.borrow_mut();
        let offset = shared.slots[self.slot]?;
        shared.produce_to(offset);
        shared.store.get(offset).cloned()
    }

    fn advance(&mut self) -> Option<S::Item> {
        let mut shared = self.shared.borrow_mut();
        let offset = shared.slots[self.slot]?;
        shared.produce_to(offset);
        let value = shared.store.get(offset).cloned()?;
        let was_min = offset == shared.min_live();
        shared.slots[self.slot] = Some(offset + 1);
        if was_min {
            shared.compact();
        }
        Some(value)
    }
}

impl<S: Sequence> Clone for Memoized<S> {
    fn clone(&self) -> Self {
        let slot = {
            let mut shared = self.shared.borrow_mut();
            let offset = match shared.slots[self.slot] {
                Some(offset) => offset,
                None => unreachable!("live cursor has a retired slot"),
            };
            shared.alloc_slot(offset)
        };
        Self {
            shared: Rc::clone(&self.shared),
            slot,
        }
    }
}

impl<S> Replay for Memoized<S>
where
    S: Sequence,
    S::Item: Clone,
{
}

impl<S: Sequence> Drop for Memoized<S> {
    fn drop(&mut self) {
        let mut shared = self.shared.borrow_mut();
        shared.slots[self.slot] = None;
        shared.free.push(self.slot);
        shared.compact();
    }
}

impl<S> Tiered for Memoized<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Tier = ForwardTier;
}

impl<S: Sequence> std::fmt::Debug for Memoized<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memoized")
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}
