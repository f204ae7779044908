//! Moving average over a borrowed slice.
//!
//! Demonstrates the fully capable windowing tier: the engine keeps its
//! length, supports reverse traversal, and materializes windows on
//! demand without copying the input.

use pipeline_core::prelude::*;

const WIDTH: usize = 4;

fn main() {
    let samples = [3.0, 5.0, 4.0, 6.0, 8.0, 7.0, 9.0, 12.0, 10.0, 11.0];

    let windows = segment::<WIDTH, _>(from_slice(&samples));
    println!("{} windows of width {WIDTH}", windows.len());

    for (i, window) in windows.into_iter().enumerate() {
        let mean: f64 = window.iter().sum::<f64>() / WIDTH as f64;
        println!("t={i}  window={:?}  mean={mean:.2}", window.into_inner());
    }
}
