//! Lagged pair extraction through a memoized single-pass source.
//!
//! The source here is a plain iterator (single pass); `memoize` makes it
//! replayable so two independent readers can traverse it, and `delay`
//! pairs each element with the one three steps ahead.

use pipeline_core::prelude::*;

fn main() {
    let source = from_iterator((0..12).map(|n| n * n));
    let replayable = memoize(source);

    // An independent reader; consuming it does not affect the pipeline.
    let mut preview = replayable.save();
    print!("first values:");
    for _ in 0..4 {
        if let Some(value) = preview.advance() {
            print!(" {value}");
        }
    }
    println!();

    let pairs = delay::<4, 2, _>([0, 3], replayable);
    for pair in pairs.into_iter() {
        println!("x={} x_plus_3={}", pair[0], pair[1]);
    }
}
