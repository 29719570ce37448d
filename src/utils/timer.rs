//! Wall-clock timing for single algorithm calls.
//!
//! Every trial times exactly one call, so the measurement is a plain
//! `Instant` pair around the closure with the result kept alive through
//! `black_box` to stop the optimizer from discarding the work.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Measure the wall-clock duration of a closure.
#[inline(always)]
pub fn measure<F, R>(f: F) -> (Duration, R)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = black_box(f());
    (start.elapsed(), result)
}

/// Measure a closure and report the elapsed time in seconds.
#[inline(always)]
pub fn measure_seconds<F, R>(f: F) -> (f64, R)
where
    F: FnOnce() -> R,
{
    let (elapsed, result) = measure(f);
    (elapsed.as_secs_f64(), result)
}
