//! fcd::core::windows — sliding-window configuration and resolved grids.
//!
//! Purpose
//! -------
//! Represent the two scalar parameters of the FCD analysis — window length
//! `sw` and spanning step `sp`, both in physical time units — and resolve
//! them against a series' sampling period into a concrete grid of sample
//! ranges. All admission checks on the window arithmetic live here, so the
//! engine and the estimator share one validated source of truth for the
//! window count.
//!
//! Key behaviors
//! -------------
//! - [`SlidingWindowConfig`] validates `sw`/`sp` at construction (finite,
//!   strictly positive) and carries them unchanged.
//! - [`SlidingWindowConfig::resolve`] converts to sample counts with
//!   round-to-nearest, enforces that the window fits the series and covers
//!   at least 2 samples, and computes the window count
//!   `W = (T − window_len) / step + 1`, requiring `W ≥ 2`.
//! - [`WindowGrid`] exposes per-window half-open sample ranges
//!   `[w·step, w·step + window_len)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sw`, `sp`, and the sampling period share one physical unit; no unit
//!   conversion is performed here (see
//!   [`TimeUnit`](crate::fcd::core::units::TimeUnit)).
//! - A successfully resolved grid satisfies `window_len ≥ 2`, `step ≥ 1`,
//!   `window_len ≤ time_points`, and `n_windows ≥ 2`; every window range it
//!   yields is in bounds for a series of `time_points` samples.
//! - Trailing samples that do not fill a complete window are dropped.
//!
//! Conventions
//! -----------
//! - Windows are indexed 0-based; window `w` starts at sample `w · step`.
//! - Resolution uses round-to-nearest on `sw / sample_period` and
//!   `sp / sample_period`, matching the reference behavior of the original
//!   analyzer.
//!
//! Downstream usage
//! ----------------
//! - The engine ([`FcdOutcome::evaluate`](crate::fcd::calculator::FcdOutcome::evaluate))
//!   resolves the grid before touching any data, so configuration errors
//!   surface before computation starts.
//! - The estimator ([`fcd::estimator`](crate::fcd::estimator)) resolves the
//!   same grid from shape alone, guaranteeing that sizing and execution
//!   agree on `W`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the window-count formula (including the documented
//!   T = 100, sw = 20, sp = 10 → W = 9 case), monotone shrinkage of `W` in
//!   `sp`, rejection of oversized/degenerate windows, and the range
//!   arithmetic of [`WindowGrid`].

use crate::fcd::{
    core::validation::{validate_sample_period, validate_window_params},
    errors::{FcdError, FcdResult},
};
use std::ops::Range;

/// `SlidingWindowConfig` — validated sliding-window parameters.
///
/// Purpose
/// -------
/// Carry the analysis configuration: window length `sw` and spanning step
/// `sp`, in the same physical time unit as the series' sampling period.
///
/// Fields
/// ------
/// - `sw`: `f64`
///   Window length. Finite and strictly positive.
/// - `sp`: `f64`
///   Step between consecutive window starts. Finite and strictly positive.
///
/// Invariants
/// ----------
/// - Both fields are finite and > 0 for any successfully constructed value.
///
/// Notes
/// -----
/// - Whether windows overlap is determined by the ratio of `sp` to `sw`:
///   `sp < sw` yields overlapping windows, `sp ≥ sw` disjoint ones. Both
///   are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingWindowConfig {
    sw: f64,
    sp: f64,
}

impl SlidingWindowConfig {
    /// Construct a validated [`SlidingWindowConfig`].
    ///
    /// Parameters
    /// ----------
    /// - `sw`: `f64`
    ///   Window length in physical time units. Must be finite and > 0.
    /// - `sp`: `f64`
    ///   Spanning step in the same units. Must be finite and > 0.
    ///
    /// Returns
    /// -------
    /// `FcdResult<SlidingWindowConfig>`
    ///   - `Ok(config)` when both scalars pass validation.
    ///   - `Err(FcdError::InvalidWindowLength)` / `Err(FcdError::InvalidSpanningStep)`
    ///     otherwise.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via `FcdError`.
    pub fn new(sw: f64, sp: f64) -> FcdResult<Self> {
        validate_window_params(sw, sp)?;
        Ok(SlidingWindowConfig { sw, sp })
    }

    /// Window length in physical time units.
    pub fn sw(&self) -> f64 {
        self.sw
    }

    /// Spanning step in physical time units.
    pub fn sp(&self) -> f64 {
        self.sp
    }

    /// Resolve this configuration against a sampling period and series
    /// length into a concrete [`WindowGrid`].
    ///
    /// Parameters
    /// ----------
    /// - `sample_period`: `f64`
    ///   Time between consecutive samples, in the same unit as `sw`/`sp`.
    ///   Must be finite and > 0.
    /// - `time_points`: `usize`
    ///   Number of samples along the series' time axis.
    ///
    /// Returns
    /// -------
    /// `FcdResult<WindowGrid>`
    ///   - `Ok(grid)` with `window_len = round(sw / sample_period)`,
    ///     `step = round(sp / sample_period)`, and
    ///     `n_windows = (time_points − window_len) / step + 1`.
    ///   - `Err(FcdError)` when the resolved grid cannot support the
    ///     analysis.
    ///
    /// Errors
    /// ------
    /// - `FcdError::InvalidSamplePeriod`
    ///   Returned when `sample_period` is non-finite or ≤ 0.
    /// - `FcdError::InvalidWindowLength`
    ///   Returned when the window resolves to fewer than 2 samples, so no
    ///   within-window correlation exists.
    /// - `FcdError::InvalidSpanningStep`
    ///   Returned when the step resolves to 0 samples, which would repeat
    ///   the same window forever.
    /// - `FcdError::WindowExceedsSeries`
    ///   Returned when the resolved window is longer than the series.
    /// - `FcdError::TooFewWindows`
    ///   Returned when fewer than 2 windows fit, so no second-order matrix
    ///   can be formed.
    ///
    /// Panics
    /// ------
    /// - Never panics; all failures are reported via `FcdError`.
    ///
    /// Notes
    /// -----
    /// - Resolution is a pure function of `(sw, sp, sample_period,
    ///   time_points)`; it never inspects series data, which is what lets
    ///   the estimator share it.
    pub fn resolve(&self, sample_period: f64, time_points: usize) -> FcdResult<WindowGrid> {
        validate_sample_period(sample_period)?;

        let window_len = (self.sw / sample_period).round() as usize;
        if window_len < 2 {
            return Err(FcdError::InvalidWindowLength {
                sw: self.sw,
                reason: "must cover at least two samples at this sampling period",
            });
        }

        let step = (self.sp / sample_period).round() as usize;
        if step == 0 {
            return Err(FcdError::InvalidSpanningStep {
                sp: self.sp,
                reason: "must cover at least one sample at this sampling period",
            });
        }

        if window_len > time_points {
            return Err(FcdError::WindowExceedsSeries { window_len, time_points });
        }

        let n_windows = (time_points - window_len) / step + 1;
        if n_windows < 2 {
            return Err(FcdError::TooFewWindows { n_windows });
        }

        Ok(WindowGrid { window_len, step, n_windows })
    }
}

/// `WindowGrid` — a resolved partition of the time axis into windows.
///
/// Purpose
/// -------
/// Hold the sample-count view of a [`SlidingWindowConfig`] after resolution
/// against a concrete series: window length, step, and window count, plus
/// the per-window sample ranges derived from them.
///
/// Fields
/// ------
/// - `window_len`: `usize`
///   Samples per window (≥ 2).
/// - `step`: `usize`
///   Samples between consecutive window starts (≥ 1).
/// - `n_windows`: `usize`
///   Number of complete windows (≥ 2).
///
/// Invariants
/// ----------
/// - For every `w < n_windows`, `window_range(w)` lies within
///   `0..time_points` of the series the grid was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGrid {
    pub window_len: usize,
    pub step: usize,
    pub n_windows: usize,
}

impl WindowGrid {
    /// First sample index of window `w`.
    ///
    /// # Panics
    /// Debug-asserts `w < n_windows`; release builds return the arithmetic
    /// result regardless.
    #[inline]
    pub fn window_start(&self, w: usize) -> usize {
        debug_assert!(w < self.n_windows, "window index {w} out of range");
        w * self.step
    }

    /// Half-open sample range `[start, start + window_len)` of window `w`.
    #[inline]
    pub fn window_range(&self, w: usize) -> Range<usize> {
        let start = self.window_start(w);
        start..start + self.window_len
    }
}
