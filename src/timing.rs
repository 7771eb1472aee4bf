//! Single-shot wall-clock timing.
//!
//! The harness times each operation exactly once. That keeps scenario logic
//! decoupled from instrumentation: scenarios hand a closure to [`time_ms`]
//! and get milliseconds back, nothing else.

use std::time::Instant;

/// Run `f` exactly once, synchronously, and return the elapsed wall-clock
/// time in milliseconds.
///
/// Sub-millisecond precision via the monotonic [`Instant`] clock. No warm-up,
/// no repetition: a single run's duration is accepted as-is.
pub fn time_ms<F: FnOnce()>(f: F) -> f64 {
    let start = Instant::now();
    f();
    start.elapsed().as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::time_ms;

    #[test]
    fn runs_the_closure_exactly_once() {
        let mut calls = 0;
        let _ = time_ms(|| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn elapsed_is_non_negative_and_finite() {
        let ms = time_ms(|| {});
        assert!(ms >= 0.0);
        assert!(ms.is_finite());
    }

    #[test]
    fn side_effects_of_the_work_are_visible() {
        let mut v = Vec::new();
        let _ = time_ms(|| v.extend(0..100));
        assert_eq!(v.len(), 100);
    }
}
