//! fcd::errors — shared error types and Python bridges for the FCD stack.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias used across the Functional
//! Connectivity Dynamics (FCD) stack: series validation, sliding-window
//! configuration, pre-flight sizing, and the correlation engine itself.
//! A feature-gated conversion layer maps these errors to Python exceptions
//! for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`FcdResult`] and [`FcdError`] as the canonical result and error
//!   types for every fallible operation in the `fcd` subtree.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<FcdError> for PyErr` (behind `python-bindings`) so the
//!   binding layer can rely on `?`-propagation into `PyValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Modules in this subtree validate their inputs up front and return
//!   [`FcdResult<T>`] instead of panicking; panics indicate programming
//!   errors, not bad user input.
//! - `FcdError` values are small, cloneable, and comparable, which keeps them
//!   convenient in unit tests and host orchestration code.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints ("sw must be
//!   positive", "at least 2 windows") rather than implementation details.
//! - Degenerate windows (zero-variance correlation vectors) are deliberately
//!   NOT represented here: they are non-fatal and are reported on the
//!   computed outcome instead of failing the run.
//!
//! Downstream usage
//! ----------------
//! - Constructors ([`TimeSeries4D::new`](crate::fcd::core::data::TimeSeries4D::new),
//!   [`SlidingWindowConfig::new`](crate::fcd::core::windows::SlidingWindowConfig::new))
//!   and the engine entry points return [`FcdResult<T>`].
//! - Python bindings raise `ValueError` with the Rust `Display` message
//!   preserved verbatim.
//!
//! Testing notes
//! -------------
//! - Unit tests here verify that each variant's `Display` message embeds its
//!   payload (offending value, index, or shape) so failures are actionable.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FcdResult<T> = Result<T, FcdError>;

/// FcdError — error conditions for FCD input validation and execution.
///
/// Purpose
/// -------
/// Represent every fail-fast condition in the FCD stack: malformed series,
/// invalid sliding-window configuration, window grids that cannot support a
/// second-order matrix, and realized shapes that disagree with the shape a
/// caller sized against.
///
/// Variants
/// --------
/// - `EmptySeries`
///   The 4-D series has a zero-length axis.
/// - `NonFiniteData { index, value }`
///   A data element is NaN or ±∞; `index` is the (time, state-variable,
///   region, mode) position of the first offending element.
/// - `InvalidShape { axis, len }`
///   An axis violates a structural constraint (e.g., fewer than 2 regions,
///   which makes inter-region correlation meaningless).
/// - `InvalidSamplePeriod(f64)`
///   The sampling period is non-positive or non-finite.
/// - `InvalidWindowLength { sw, reason }`
///   The window length `sw` is non-positive, non-finite, or resolves to
///   fewer than 2 samples.
/// - `InvalidSpanningStep { sp, reason }`
///   The spanning step `sp` is non-positive, non-finite, or resolves to
///   zero samples.
/// - `WindowExceedsSeries { window_len, time_points }`
///   The resolved window covers more samples than the series holds.
/// - `TooFewWindows { n_windows }`
///   The grid yields fewer than 2 windows, so no second-order matrix exists.
/// - `ShapeMismatch { expected, actual }`
///   The realized array shape disagrees with the shape used for resource
///   estimation; the engine refuses to silently truncate or pad.
///
/// Invariants
/// ----------
/// - Each variant carries just enough payload (offending value, index, or
///   shape pair) for logging and debugging without dragging large data along.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for idiomatic
///   `?`-based propagation.
/// - Behind `python-bindings`, all variants map to `PyValueError`.
#[derive(Debug, Clone, PartialEq)]
pub enum FcdError {
    //------ Series validation errors ------
    EmptySeries,
    NonFiniteData { index: [usize; 4], value: f64 },
    InvalidShape { axis: &'static str, len: usize },
    InvalidSamplePeriod(f64),
    //------ Window configuration errors ------
    InvalidWindowLength { sw: f64, reason: &'static str },
    InvalidSpanningStep { sp: f64, reason: &'static str },
    WindowExceedsSeries { window_len: usize, time_points: usize },
    TooFewWindows { n_windows: usize },
    //------ Execution guards ------
    ShapeMismatch { expected: [usize; 4], actual: [usize; 4] },
}

impl std::error::Error for FcdError {}

impl std::fmt::Display for FcdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FcdError::EmptySeries => {
                write!(f, "Time series must be non-empty on every axis.")
            }
            FcdError::NonFiniteData { index, value } => {
                write!(
                    f,
                    "Non-finite value {value} at (time, svar, region, mode) = \
                     ({}, {}, {}, {}). All samples must be finite.",
                    index[0], index[1], index[2], index[3]
                )
            }
            FcdError::InvalidShape { axis, len } => {
                write!(f, "Invalid length {len} for axis '{axis}'.")
            }
            FcdError::InvalidSamplePeriod(period) => {
                write!(f, "Invalid sample period: {period}. Must be finite and positive.")
            }
            FcdError::InvalidWindowLength { sw, reason } => {
                write!(f, "Invalid window length sw = {sw}: {reason}")
            }
            FcdError::InvalidSpanningStep { sp, reason } => {
                write!(f, "Invalid spanning step sp = {sp}: {reason}")
            }
            FcdError::WindowExceedsSeries { window_len, time_points } => {
                write!(
                    f,
                    "Window of {window_len} samples exceeds the series length of \
                     {time_points} time points."
                )
            }
            FcdError::TooFewWindows { n_windows } => {
                write!(
                    f,
                    "Configuration yields {n_windows} window(s); at least 2 are \
                     required for a second-order correlation matrix."
                )
            }
            FcdError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Realized series shape {actual:?} disagrees with the shape \
                     {expected:?} used for estimation."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<FcdError> for PyErr {
    fn from(err: FcdError) -> PyErr {
        PyValueError::new_err(format!("FcdError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for FcdError variants.
    // - Embedding of payload values (indices, sw/sp, shapes) into messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<FcdError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled by
    //   Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `FcdError::NonFiniteData` embeds both the offending value
    // and its 4-D index in the `Display` representation.
    //
    // Given
    // -----
    // - A NaN at index (3, 0, 2, 0).
    //
    // Expect
    // ------
    // - The message contains "NaN" and the index components.
    fn fcd_error_non_finite_data_includes_index_and_value() {
        // Arrange
        let err = FcdError::NonFiniteData { index: [3, 0, 2, 0], value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("NaN"), "Display should include the offending value.\nGot: {msg}");
        assert!(msg.contains('3') && msg.contains('2'), "Display should include the index.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that window-configuration variants embed the offending scalar
    // and the reason string.
    //
    // Given
    // -----
    // - `InvalidWindowLength` with sw = -5.0 and a reason.
    //
    // Expect
    // ------
    // - The message contains "-5" and the reason text.
    fn fcd_error_invalid_window_length_includes_payload() {
        // Arrange
        let err = FcdError::InvalidWindowLength { sw: -5.0, reason: "must be positive" };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-5"), "Display should include offending sw.\nGot: {msg}");
        assert!(msg.contains("must be positive"), "Display should include reason.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FcdError::TooFewWindows` reports the computed window
    // count so callers can see how far the configuration falls short.
    //
    // Given
    // -----
    // - A `TooFewWindows` error with n_windows = 1.
    //
    // Expect
    // ------
    // - The message contains "1" and mentions the minimum of 2.
    fn fcd_error_too_few_windows_reports_count() {
        // Arrange
        let err = FcdError::TooFewWindows { n_windows: 1 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('1'), "Display should include the window count.\nGot: {msg}");
        assert!(msg.contains('2'), "Display should mention the minimum window count.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FcdError::ShapeMismatch` shows both the expected and the
    // realized shape.
    //
    // Given
    // -----
    // - expected = [100, 1, 10, 1], actual = [80, 1, 10, 1].
    //
    // Expect
    // ------
    // - The message contains both "100" and "80".
    fn fcd_error_shape_mismatch_shows_both_shapes() {
        // Arrange
        let err = FcdError::ShapeMismatch { expected: [100, 1, 10, 1], actual: [80, 1, 10, 1] };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("100") && msg.contains("80"),
            "Display should include expected and actual shapes.\nGot: {msg}"
        );
    }
}
