//! Performance instrumentation for the drag hot path.
//!
//! Placement and insertion run on every pointer move, so they must stay
//! well inside a frame. This module provides:
//!
//! - **Scoped timers**: RAII-style timing for code blocks
//! - **Frame statistics**: rolling average, p95 and worst case per drag
//! - **Conditional compilation**: zero-cost when profiling is disabled
//!
//! Enable profiling with the `profiling` feature flag:
//! ```toml
//! [dependencies]
//! brickgrid = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! use brickgrid::profile_scope;
//!
//! fn resolve() {
//!     profile_scope!("resolve_insertion");
//!     // ... work ...
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{trace, warn};

// ============================================================================
// Constants
// ============================================================================

/// Frame time at 60 FPS; one pointer move must fit well inside it
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Frames kept for the rolling statistics
pub const FRAME_WINDOW: usize = 100;

/// Global flag to enable/disable profiling at runtime
static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

// ============================================================================
// Runtime Profiling Control
// ============================================================================

/// Enable or disable profiling at runtime.
/// Only affects code compiled with the `profiling` feature.
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

// ============================================================================
// Frame Statistics
// ============================================================================

/// Timings of the last [`FRAME_WINDOW`] drag frames, plus all-time count
/// and worst case.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: VecDeque<f64>,
    total_frames: u64,
    worst_ms: f64,
    window_sum_ms: f64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            window: VecDeque::with_capacity(FRAME_WINDOW),
            total_frames: 0,
            worst_ms: 0.0,
            window_sum_ms: 0.0,
        }
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ms: f64) {
        if self.window.len() == FRAME_WINDOW {
            if let Some(evicted) = self.window.pop_front() {
                self.window_sum_ms -= evicted;
            }
        }
        self.window.push_back(ms);
        self.window_sum_ms += ms;
        self.total_frames += 1;
        self.worst_ms = self.worst_ms.max(ms);
    }

    /// Mean over the window
    pub fn average(&self) -> f64 {
        match self.window.len() {
            0 => 0.0,
            n => self.window_sum_ms / n as f64,
        }
    }

    /// 95th percentile over the window
    pub fn p95(&self) -> f64 {
        let mut samples: Vec<f64> = self.window.iter().copied().collect();
        if samples.is_empty() {
            return 0.0;
        }
        let rank = (samples.len() * 95 / 100).min(samples.len() - 1);
        let (_, value, _) = samples.select_nth_unstable_by(rank, f64::total_cmp);
        *value
    }

    /// Slowest frame since the session started
    pub fn max(&self) -> f64 {
        self.worst_ms
    }

    pub fn count(&self) -> u64 {
        self.total_frames
    }

    /// Log a warning when the window average exceeds `budget_ms`
    pub fn warn_if_over_budget(&self, operation: &str, budget_ms: f64) {
        let avg_ms = self.average();
        if avg_ms <= budget_ms {
            return;
        }
        warn!(
            operation,
            avg_ms = format!("{avg_ms:.2}"),
            p95_ms = format!("{:.2}", self.p95()),
            budget_ms = format!("{budget_ms:.2}"),
            frames = self.total_frames,
            "drag frames over budget"
        );
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that logs its duration on drop when over threshold.
///
/// Timers with a sub-millisecond threshold trace every sample; others warn
/// when a budget is blown. Nothing is logged while profiling is disabled at
/// runtime.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    /// Create a new scoped timer with a warning threshold.
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer that traces every sample, for fine-grained profiling
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.0)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms || !is_profiling_enabled() {
            return;
        }
        if self.threshold_ms < 1.0 {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        } else {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                threshold_ms = format!("{:.2}", self.threshold_ms),
                "slow placement step"
            );
        }
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Run a closure and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
