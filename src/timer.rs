/// Wall-clock stopwatch for the check and timing output.
///
/// Tracks both the time since the last `tick()`, for per-stage timings,
/// and the time since creation, for the whole run.
#[derive(Copy, Clone)]
pub struct Timer {
    start_ns: u64,
    last_ns: u64,
}

impl Timer {
    pub fn new() -> Timer {
        let now = time::precise_time_ns();
        Timer {
            start_ns: now,
            last_ns: now,
        }
    }

    /// Seconds since the last call to `tick()` (or since creation), and
    /// starts a new stage.
    pub fn tick(&mut self) -> f64 {
        let now = time::precise_time_ns();
        let secs = ns_to_secs(now - self.last_ns);
        self.last_ns = now;
        secs
    }

    /// Seconds since creation.  Doesn't start a new stage.
    pub fn total(&self) -> f64 {
        ns_to_secs(time::precise_time_ns() - self.start_ns)
    }
}

fn ns_to_secs(ns: u64) -> f64 {
    ns as f64 / 1_000_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_add_up_to_total() {
        let mut t = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let a = t.tick();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let b = t.tick();
        let total = t.total();

        assert!(a >= 0.004 && b >= 0.004);
        assert!(total >= a + b - 1.0e-9);
    }

    #[test]
    fn ns_conversion() {
        assert_eq!(ns_to_secs(0), 0.0);
        assert_eq!(ns_to_secs(1_500_000_000), 1.5);
    }
}
