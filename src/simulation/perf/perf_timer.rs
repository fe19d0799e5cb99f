//! Wall-clock timing for perf stats.
//!
//! `Instant` panics on wasm32-unknown-unknown, so the browser build reads
//! `Date.now()` instead. That clock ticks in whole milliseconds: inside the
//! frame loop a fast step reports 0 and only the per-frame trend is useful.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Stopwatch for one `step`: `lap_ms` splits phases, `elapsed_ms` the total.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    start_ms: f64,
    last_lap_ms: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        PerfTimer {
            start_ms: now,
            last_lap_ms: now,
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        now_ms() - self.start_ms
    }

    /// Time since the previous lap (or `start`).
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let now = now_ms();
        let lap = now - self.last_lap_ms;
        self.last_lap_ms = now;
        lap
    }
}
