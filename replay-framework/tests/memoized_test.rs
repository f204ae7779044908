use replay_framework::memoize;
use sequence_core::{from_iterator, Replay, Sequence};
use std::cell::Cell;
use std::rc::Rc;

/// A single-pass source that counts how many elements it has yielded.
struct Counting {
    next: i32,
    end: i32,
    pulls: Rc<Cell<usize>>,
}

fn counting(range: std::ops::Range<i32>) -> (Counting, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let source = Counting {
        next: range.start,
        end: range.end,
        pulls: Rc::clone(&pulls),
    };
    (source, pulls)
}

impl Sequence for Counting {
    type Item = i32;

    fn is_done(&self) -> bool {
        self.next >= self.end
    }

    fn peek(&self) -> Option<i32> {
        if self.is_done() {
            None
        } else {
            Some(self.next)
        }
    }

    fn advance(&mut self) -> Option<i32> {
        if self.is_done() {
            return None;
        }
        let value = self.next;
        self.next += 1;
        self.pulls.set(self.pulls.get() + 1);
        Some(value)
    }
}

#[test]
fn test_two_cursors_see_the_same_values() {
    let mut a = memoize(from_iterator(0..4));
    let mut b = a.save();
    let from_a: Vec<i32> = std::iter::from_fn(|| a.advance()).collect();
    let from_b: Vec<i32> = std::iter::from_fn(|| b.advance()).collect();
    assert_eq!(from_a, vec![0, 1, 2, 3]);
    assert_eq!(from_b, from_a);
}

#[test]
fn test_source_pulled_once_per_offset() {
    let (source, pulls) = counting(0..5);
    let mut a = memoize(source);
    let b = a.save();
    while a.advance().is_some() {}
    assert_eq!(pulls.get(), 5);
    let replayed: Vec<i32> = b.into_iter().collect();
    assert_eq!(replayed, vec![0, 1, 2, 3, 4]);
    assert_eq!(pulls.get(), 5);
}

#[test]
fn test_peek_does_not_consume() {
    let (source, pulls) = counting(0..3);
    let mut view = memoize(source);
    assert_eq!(view.peek(), Some(0));
    assert_eq!(view.peek(), Some(0));
    assert_eq!(pulls.get(), 1);
    assert_eq!(view.advance(), Some(0));
    assert_eq!(pulls.get(), 1);
}

#[test]
fn test_lagging_cursor_catches_up() {
    let mut lead = memoize(from_iterator(10..15));
    let mut lag = lead.save();
    lead.advance();
    lead.advance();
    lead.advance();
    assert_eq!(lag.peek(), Some(10));
    let rest: Vec<i32> = std::iter::from_fn(|| lag.advance()).collect();
    assert_eq!(rest, vec![10, 11, 12, 13, 14]);
}

#[test]
fn test_exhaustion_is_quiet() {
    let mut view = memoize(from_iterator(0..2));
    assert_eq!(view.advance(), Some(0));
    assert_eq!(view.advance(), Some(1));
    assert!(view.is_done());
    assert_eq!(view.advance(), None);
    assert_eq!(view.peek(), None);
}

#[test]
fn test_drop_releases_the_retained_span() {
    let (source, pulls) = counting(0..100);
    let mut lead = memoize(source);
    let lag = lead.save();
    for _ in 0..50 {
        lead.advance();
    }
    // `lag` pins offset 0 until dropped; afterwards only `lead`'s
    // position matters and the buffer no longer holds the prefix.
    drop(lag);
    let rest: Vec<i32> = std::iter::from_fn(|| lead.advance()).collect();
    assert_eq!(rest, (50..100).collect::<Vec<i32>>());
    assert_eq!(pulls.get(), 100);
}

#[test]
fn test_cursor_saved_mid_stream_starts_there() {
    let mut lead = memoize(from_iterator(0..6));
    lead.advance();
    lead.advance();
    let mid = lead.save();
    lead.advance();
    let from_mid: Vec<i32> = mid.into_iter().collect();
    assert_eq!(from_mid, vec![2, 3, 4, 5]);
}

#[test]
fn test_slot_reuse_after_drop() {
    let mut lead = memoize(from_iterator(0..4));
    let first = lead.save();
    drop(first);
    let second = lead.save();
    lead.advance();
    assert_eq!(second.peek(), Some(0));
    let replayed: Vec<i32> = second.into_iter().collect();
    assert_eq!(replayed, vec![0, 1, 2, 3]);
}

#[cfg(feature = "trace")]
mod trace {
    use replay_framework::{memoize_with_observer, BufferEvent};
    use sequence_core::{from_iterator, Replay, Sequence};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observer_sees_one_fetch_per_offset() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut lead = memoize_with_observer(from_iterator(0..3), move |event| {
            sink.borrow_mut().push(event);
        });
        let lag = lead.save();
        while lead.advance().is_some() {}
        let _: Vec<i32> = lag.into_iter().collect();
        let fetches: Vec<_> = events
            .borrow()
            .iter()
            .filter(|e| matches!(e, BufferEvent::Fetch { .. }))
            .copied()
            .collect();
        assert_eq!(
            fetches,
            vec![
                BufferEvent::Fetch { offset: 0 },
                BufferEvent::Fetch { offset: 1 },
                BufferEvent::Fetch { offset: 2 },
            ]
        );
    }

    #[test]
    fn test_observer_sees_compaction() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut view = memoize_with_observer(from_iterator(0..4), move |event| {
            sink.borrow_mut().push(event);
        });
        view.advance();
        view.advance();
        assert!(events
            .borrow()
            .iter()
            .any(|e| matches!(e, BufferEvent::Compact { .. })));
    }
}
