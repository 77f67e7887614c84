// src/timing.rs

use std::time::Instant;

use log::info;

/// Runs `f` and logs its wall-clock duration as `"<label> total result.. <ms> ms"`.
pub fn timed<T, F>(label: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!("{} total result..  {:.3} ms", label, elapsed_ms);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn returns_the_closure_result() {
        assert_eq!(timed("test", || 6 * 7), 42);
    }
}
