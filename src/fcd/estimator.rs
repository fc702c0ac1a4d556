//! fcd::estimator — pre-flight memory and disk sizing for FCD runs.
//!
//! Purpose
//! -------
//! Predict the peak working-set size and output size of an FCD computation
//! from the series **shape** and window configuration alone, without
//! executing the engine or reading any sample. Hosts call these functions
//! before launching the engine and may refuse or queue a job whose estimate
//! exceeds a configured ceiling (admission control).
//!
//! Key behaviors
//! -------------
//! - [`result_size_bytes`]: size of the W×W output matrix (8 bytes per
//!   element).
//! - [`estimate_memory_bytes`]: analysis-slice bytes (T × 1 × R × 1 × 8)
//!   plus the output — a deliberately loose upper bound suited to
//!   admission control, not a precise profile.
//! - [`estimate_disk_kb`]: the output expressed in whole kilobytes for
//!   downstream quota checks (ceiling division).
//! - [`estimate`]: both figures bundled in a [`SizeEstimate`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every function here is a pure function of
//!   `(SeriesShape, SlidingWindowConfig, sample_period)`: O(1), no data
//!   access, identical results on identical inputs.
//! - The window count used for sizing comes from the same
//!   [`SlidingWindowConfig::resolve`] the engine uses, so sizing and
//!   execution can never disagree on `W`.
//!
//! Conventions
//! -----------
//! - Byte counts are `u64`; elements are `f64` (8 bytes).
//! - The memory figure accounts for the effective analysis slice (first
//!   state variable, first mode), not the full 4-D input, matching the
//!   engine's documented reduction.
//!
//! Downstream usage
//! ----------------
//! - Call the estimator **before**
//!   [`FcdOutcome::evaluate`](crate::fcd::calculator::FcdOutcome::evaluate);
//!   pair it with
//!   [`FcdOutcome::evaluate_checked`](crate::fcd::calculator::FcdOutcome::evaluate_checked)
//!   to fail fast if the realized series shape differs from the shape that
//!   was sized.
//!
//! Testing notes
//! -------------
//! - Unit tests pin exact byte values for documented shapes, verify purity
//!   (identical inputs → identical outputs, no data involved anywhere in
//!   the signatures), and check that configuration errors surface instead
//!   of producing a size.

use crate::fcd::{
    core::{shape::SeriesShape, windows::SlidingWindowConfig},
    errors::FcdResult,
};

/// Bytes per matrix element (double precision).
pub const BYTES_PER_ELEMENT: u64 = 8;

/// `SizeEstimate` — predicted resource footprint of one FCD run.
///
/// Fields
/// ------
/// - `peak_memory_bytes`: `u64`
///   Loose upper bound on the working set: analysis slice plus output.
/// - `output_bytes`: `u64`
///   Exact size of the W×W result matrix.
///
/// Notes
/// -----
/// - Recomputable at any time from `(shape, config, sample_period)`; carries
///   no reference to any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEstimate {
    pub peak_memory_bytes: u64,
    pub output_bytes: u64,
}

/// Size in bytes of the FCD result matrix for the given shape and
/// configuration: W² elements of 8 bytes.
///
/// Parameters
/// ----------
/// - `shape`: `&SeriesShape`
///   Declared series shape; only `time_points` participates.
/// - `config`: `&SlidingWindowConfig`
///   Window length and spanning step.
/// - `sample_period`: `f64`
///   Sampling period, same unit as the configuration.
///
/// Returns
/// -------
/// `FcdResult<u64>`
///   - `Ok(bytes)` when the configuration resolves to a valid grid.
///   - `Err(FcdError)` when the grid cannot support the analysis (the same
///     errors the engine would raise before computing).
pub fn result_size_bytes(
    shape: &SeriesShape, config: &SlidingWindowConfig, sample_period: f64,
) -> FcdResult<u64> {
    let grid = config.resolve(sample_period, shape.time_points)?;
    Ok((grid.n_windows as u64).pow(2) * BYTES_PER_ELEMENT)
}

/// Loose upper bound on the peak working set of one FCD run, in bytes.
///
/// The bound is the effective analysis slice (T × 1 × R × 1 elements of 8
/// bytes) plus the projected output. It is intentionally approximate: its
/// purpose is admission control before allocation, not exact accounting.
///
/// Parameters
/// ----------
/// - `shape`, `config`, `sample_period`: as in [`result_size_bytes`].
///
/// Returns
/// -------
/// `FcdResult<u64>` — bytes, or a configuration error.
pub fn estimate_memory_bytes(
    shape: &SeriesShape, config: &SlidingWindowConfig, sample_period: f64,
) -> FcdResult<u64> {
    let slice_bytes = (shape.time_points as u64) * (shape.regions as u64) * BYTES_PER_ELEMENT;
    Ok(slice_bytes + result_size_bytes(shape, config, sample_period)?)
}

/// Required disk space for the FCD result, in whole kilobytes.
///
/// This is [`result_size_bytes`] rounded up to the next kilobyte, matching
/// the quota granularity hosts typically check against.
///
/// Parameters
/// ----------
/// - `shape`, `config`, `sample_period`: as in [`result_size_bytes`].
///
/// Returns
/// -------
/// `FcdResult<u64>` — kilobytes, or a configuration error.
pub fn estimate_disk_kb(
    shape: &SeriesShape, config: &SlidingWindowConfig, sample_period: f64,
) -> FcdResult<u64> {
    let bytes = result_size_bytes(shape, config, sample_period)?;
    Ok(bytes.div_ceil(1024))
}

/// Both sizing figures in one call.
///
/// Returns
/// -------
/// `FcdResult<SizeEstimate>` — peak memory and output bytes, or a
/// configuration error.
pub fn estimate(
    shape: &SeriesShape, config: &SlidingWindowConfig, sample_period: f64,
) -> FcdResult<SizeEstimate> {
    let output_bytes = result_size_bytes(shape, config, sample_period)?;
    let slice_bytes = (shape.time_points as u64) * (shape.regions as u64) * BYTES_PER_ELEMENT;
    Ok(SizeEstimate { peak_memory_bytes: slice_bytes + output_bytes, output_bytes })
}
