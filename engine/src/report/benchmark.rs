use chrono::Duration;
use std::time::Instant;

/// Stopwatch started on construction.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Timer {
        Timer { start: Instant::now() }
    }

    pub fn restart(&mut self) {
        self.start = Instant::now();
    }

    pub fn get_passed(&self) -> Duration {
        Duration::from_std(self.start.elapsed()).unwrap_or_else(|_| Duration::max_value())
    }

    pub fn get_passed_ms(&self) -> f64 {
        duration_ms(self.get_passed())
    }

    pub fn report_passed_ms(&self) {
        report!("running_time_ms", self.get_passed_ms());
    }
}

/// Run `f` and return its result together with the elapsed wall clock time.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    let timer = Timer::new();
    let res = f();
    (res, timer.get_passed())
}

/// Milliseconds with sub-millisecond precision.
pub fn duration_ms(duration: Duration) -> f64 {
    match duration.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1_000_000.0,
        None => duration.num_milliseconds() as f64,
    }
}

/// Run `f`, print how long it took and report the time as `running_time_ms`.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    report_time_with_key(name, "running_time_ms", f)
}

/// Like [`report_time`] but reports under a custom key.
pub fn report_time_with_key<Out, F: FnOnce() -> Out>(name: &str, key: &'static str, f: F) -> Out {
    let (res, time) = measure(f);
    let time_ms = duration_ms(time);
    println!("{} done - took: {}ms", name, time_ms);
    report!(key, time_ms);
    res
}
