//! fcd::core::validation — shared scalar guards for FCD configuration.
//!
//! Purpose
//! -------
//! Centralize basic validation of the sliding-window parameters and the
//! sampling period. This avoids duplicating finiteness/positivity checks
//! across the configuration, estimator, and engine layers.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on `sw`, `sp`, and `sample_period` before
//!   any window arithmetic is performed.
//! - Map invalid values into structured [`FcdError`] variants for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - `sw` (window length) and `sp` (spanning step) must be finite and
//!   strictly positive, expressed in the same physical unit as the series'
//!   sampling period.
//! - `sample_period` must be finite and strictly positive.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what error construction requires.
//! - Grid-level constraints (window vs. series length, minimum window
//!   count) live with the resolution logic in
//!   [`windows`](crate::fcd::core::windows), since they need the resolved
//!   sample counts.
//!
//! Downstream usage
//! ----------------
//! - [`SlidingWindowConfig::new`](crate::fcd::core::windows::SlidingWindowConfig::new)
//!   calls [`validate_window_params`] before accepting a configuration.
//! - [`TimeSeries4D::new`](crate::fcd::core::data::TimeSeries4D::new) calls
//!   [`validate_sample_period`] on its sampling period.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every error branch of both guards and a simple
//!   success path.

use crate::fcd::errors::{FcdError, FcdResult};

/// Validate the sliding-window scalars `sw` and `sp`.
///
/// Parameters
/// ----------
/// - `sw`: `f64`
///   Window length in physical time units. Must be finite and > 0.
/// - `sp`: `f64`
///   Spanning step between consecutive window starts, in the same units.
///   Must be finite and > 0.
///
/// Returns
/// -------
/// `FcdResult<()>`
///   - `Ok(())` if both scalars are finite and strictly positive.
///   - `Err(FcdError)` with a variant naming the offending parameter.
///
/// Errors
/// ------
/// - `FcdError::InvalidWindowLength`
///   Returned when `sw` is non-finite or `sw <= 0`.
/// - `FcdError::InvalidSpanningStep`
///   Returned when `sp` is non-finite or `sp <= 0`.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `FcdError`.
///
/// Notes
/// -----
/// - Resolution-dependent constraints (window ≥ 2 samples, step ≥ 1 sample,
///   window within the series, ≥ 2 windows) are checked in
///   [`SlidingWindowConfig::resolve`](crate::fcd::core::windows::SlidingWindowConfig::resolve),
///   where the sample counts are known.
pub fn validate_window_params(sw: f64, sp: f64) -> FcdResult<()> {
    if !sw.is_finite() || sw <= 0.0 {
        return Err(FcdError::InvalidWindowLength { sw, reason: "must be finite and positive" });
    }
    if !sp.is_finite() || sp <= 0.0 {
        return Err(FcdError::InvalidSpanningStep { sp, reason: "must be finite and positive" });
    }
    Ok(())
}

/// Validate a series' sampling period.
///
/// Parameters
/// ----------
/// - `sample_period`: `f64`
///   Time between consecutive samples. Must be finite and > 0.
///
/// Returns
/// -------
/// `FcdResult<()>`
///   - `Ok(())` if the period is finite and strictly positive.
///   - `Err(FcdError::InvalidSamplePeriod)` otherwise.
pub fn validate_sample_period(sample_period: f64) -> FcdResult<()> {
    if !sample_period.is_finite() || sample_period <= 0.0 {
        return Err(FcdError::InvalidSamplePeriod(sample_period));
    }
    Ok(())
}
