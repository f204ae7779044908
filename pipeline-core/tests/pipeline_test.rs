use pipeline_core::prelude::*;
use pipeline_core::{SliceSeq, Window};

#[test]
fn test_memoize_then_segment() {
    // A single-pass source becomes replayable, then windows of three
    // roll over the replayed stream.
    let source = memoize(from_iterator(0..6));
    let preview = source.save();
    let windows: Vec<_> = segment::<3, _>(source)
        .into_iter()
        .map(Window::into_inner)
        .collect();
    assert_eq!(windows, vec![[0, 1, 2], [1, 2, 3], [2, 3, 4], [3, 4, 5]]);
    let replayed: Vec<i32> = preview.into_iter().collect();
    assert_eq!(replayed, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_knit_of_segmented_streams() {
    let data = [1, 2, 3, 4, 5];
    let windows = segment::<2, _>(from_slice(&data));
    let indices = ascending(0);
    let mut numbered = knit((indices, windows));
    assert_eq!(numbered.advance(), Some((0, Window::from([1, 2]))));
    assert_eq!(numbered.advance(), Some((1, Window::from([2, 3]))));
    assert_eq!(numbered.advance(), Some((2, Window::from([3, 4]))));
    assert_eq!(numbered.advance(), Some((3, Window::from([4, 5]))));
    assert!(numbered.is_done());
}

#[test]
fn test_knit_is_endless_only_when_all_parts_are() {
    let mut finite = knit((ascending(0), from_slice(&[1, 2])));
    finite.advance();
    finite.advance();
    assert!(finite.is_done());

    let mut endless = knit((ascending(0), repeat('x')));
    for _ in 0..1000 {
        endless.advance();
    }
    assert!(!endless.is_done());
}

#[test]
fn test_flatten_round_trip() {
    // Flattening fixed-width rows and regrouping by the same width
    // reproduces the original element order.
    let rows = [vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]];
    let outer: Vec<SliceSeq<'_, i32>> = rows.iter().map(|r| from_slice(r.as_slice())).collect();
    let flat: Vec<i32> = concat(from_slice(&outer)).into_iter().collect();
    let regrouped: Vec<Vec<i32>> = flat.chunks(3).map(|chunk| chunk.to_vec()).collect();
    assert_eq!(regrouped, rows.to_vec());
}

#[test]
fn test_delay_over_memoized_stream() {
    let source = memoize(from_iterator(0..8));
    let pairs: Vec<_> = delay::<4, 2, _>([0, 3], source)
        .into_iter()
        .map(Window::into_inner)
        .collect();
    assert_eq!(pairs, vec![[0, 3], [1, 4], [2, 5], [3, 6], [4, 7]]);
}

#[test]
fn test_segment_write_through() {
    let mut data = [0, 1, 2, 3, 4, 5];
    {
        let mut windows = segment::<2, _>(from_mut_slice(&mut data));
        windows.put_at(3, Window::from([0, 0]));
    }
    assert_eq!(data, [0, 1, 2, 0, 0, 5]);
}

#[test]
fn test_parallel_then_knit() {
    let data = [1, 2, 3];
    let doubled = parallel::<2, _>(from_slice(&data));
    let mut paired = knit((from_slice(&data), doubled));
    assert_eq!(paired.advance(), Some((1, Window::from([1, 1]))));
    assert_eq!(paired.advance(), Some((2, Window::from([2, 2]))));
}

#[test]
fn test_concat_of_slices_traverses_both_ways() {
    let rows = [vec![1, 2], vec![3], vec![4, 5]];
    let outer: Vec<SliceSeq<'_, i32>> = rows.iter().map(|r| from_slice(r.as_slice())).collect();
    let forward: Vec<i32> = concat(from_slice(&outer)).into_iter().collect();
    let backward: Vec<i32> = concat(from_slice(&outer)).into_iter().rev().collect();
    assert_eq!(forward, vec![1, 2, 3, 4, 5]);
    assert_eq!(backward, vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_memoize_construction_pulls_nothing() {
    let pulls = std::rc::Rc::new(std::cell::Cell::new(0usize));
    let counter = std::rc::Rc::clone(&pulls);
    let probe = std::iter::from_fn(move || {
        counter.set(counter.get() + 1);
        Some(1)
    })
    .take(5);
    let view = memoize(from_iterator(probe));
    // `from_iterator` primes one element; memoize itself adds no pulls.
    assert!(pulls.get() <= 1);
    drop(view);
    assert!(pulls.get() <= 1);
}
