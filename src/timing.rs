use std::time::{Duration, Instant};

/// A value together with the time it took to compute it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

pub fn timed<T, F: FnOnce() -> T>(f: F) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Renders a duration with a unit matching its magnitude, e.g. `12.5µs`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < 1_000 {
        format!("{}ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.1}µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.1}ms", nanos as f64 / 1e6)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units() {
        assert_eq!(format_elapsed(Duration::from_nanos(850)), "850ns");
        assert_eq!(format_elapsed(Duration::from_nanos(12_500)), "12.5µs");
        assert_eq!(format_elapsed(Duration::from_micros(3_400)), "3.4ms");
        assert_eq!(format_elapsed(Duration::from_millis(1_500)), "1.50s");
    }

    #[test]
    fn timed_keeps_value() {
        let t = timed(|| 6 * 7);
        assert_eq!(t.value, 42);
    }
}
