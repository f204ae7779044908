use compose_framework::knit;
use sequence_core::{
    ascending, from_iterator, from_mut_slice, from_slice, repeat, Bounded, Indexed, Replay,
    Sequence, Sliceable, WriteBack,
};

#[test]
fn test_knit_pairs() {
    let left = [1, 2, 3];
    let right = ["a", "b", "c"];
    let zipped = knit((from_slice(&left), from_slice(&right)));
    let collected: Vec<_> = zipped.into_iter().collect();
    assert_eq!(collected, vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn test_knit_stops_at_shortest() {
    let left = [1, 2, 3, 4, 5];
    let right = [10, 20];
    let mut zipped = knit((from_slice(&left), from_slice(&right)));
    assert_eq!(zipped.len(), 2);
    assert_eq!(zipped.advance(), Some((1, 10)));
    assert_eq!(zipped.advance(), Some((2, 20)));
    assert!(zipped.is_done());
    assert_eq!(zipped.advance(), None);
}

#[test]
fn test_knit_three_heterogeneous() {
    let a = [1u8, 2];
    let b = ['x', 'y'];
    let zipped = knit((from_slice(&a), from_slice(&b), ascending(0)));
    let collected: Vec<_> = zipped.into_iter().collect();
    assert_eq!(collected, vec![(1, 'x', 0), (2, 'y', 1)]);
}

#[test]
fn test_knit_with_finite_and_endless() {
    let finite = [7, 8, 9];
    let mut zipped = knit((from_slice(&finite), repeat(0)));
    assert_eq!(zipped.advance(), Some((7, 0)));
    assert_eq!(zipped.advance(), Some((8, 0)));
    assert_eq!(zipped.advance(), Some((9, 0)));
    assert!(zipped.is_done());
}

#[test]
fn test_knit_indexing_when_all_indexed() {
    let a = [1, 2, 3];
    let b = [4, 5, 6, 7];
    let zipped = knit((from_slice(&a), from_slice(&b)));
    assert_eq!(zipped.get(1), Some((2, 5)));
    assert_eq!(zipped.get(3), None);
}

#[test]
fn test_knit_slice() {
    let a = [0, 1, 2, 3];
    let b = [9, 8, 7, 6];
    let zipped = knit((from_slice(&a), from_slice(&b)));
    let middle = zipped.slice(1, 3);
    let collected: Vec<_> = middle.into_iter().collect();
    assert_eq!(collected, vec![(1, 8), (2, 7)]);
}

#[test]
fn test_knit_save_is_independent() {
    let a = [1, 2, 3];
    let b = [4, 5, 6];
    let mut zipped = knit((from_slice(&a), from_slice(&b)));
    zipped.advance();
    let saved = zipped.save();
    zipped.advance();
    assert_eq!(saved.peek(), Some((2, 5)));
    assert_eq!(zipped.peek(), Some((3, 6)));
}

#[test]
fn test_knit_write_through() {
    let mut a = [1, 2, 3];
    let mut b = [4, 5, 6];
    {
        let mut zipped = knit((from_mut_slice(&mut a), from_mut_slice(&mut b)));
        zipped.put_at(1, (20, 50));
    }
    assert_eq!(a, [1, 20, 3]);
    assert_eq!(b, [4, 50, 6]);
}

#[test]
fn test_knit_over_single_pass_inputs() {
    let zipped = knit((from_iterator(0..3), from_iterator(10..12)));
    let collected: Vec<_> = zipped.into_iter().collect();
    assert_eq!(collected, vec![(0, 10), (1, 11)]);
}
