//! 4-D time-series containers for FCD analysis.
//!
//! Purpose
//! -------
//! Provide a small, validated container for 4-D simulated brain time series
//! and their metadata. This module centralizes input validation for raw
//! series data and standardizes how sampling periods and units are
//! represented, so downstream analysis code can assume clean input.
//!
//! Key behaviors
//! -------------
//! - [`TimeSeries4D`] enforces basic data invariants (non-empty axes, at
//!   least 2 regions, finite samples, positive sampling period).
//! - [`SeriesMeta`] describes how to interpret the series (time unit,
//!   optional source label used to tag results) without mutating raw values.
//! - [`TimeSeries4D::analysis_slice`] exposes the documented reduction of
//!   the 4-axis input to an effective (time × region) matrix by fixing the
//!   first state variable and first mode.
//!
//! Invariants & assumptions
//! ------------------------
//! - Samples must be **finite** (no NaN, no ±∞).
//! - Every axis must be non-empty and the region axis must have length ≥ 2.
//! - `sample_period` is finite and strictly positive, in the unit declared
//!   by [`SeriesMeta::unit`].
//! - The container is read-only after construction; the engine never
//!   mutates it and holds no reference to it after returning a result.
//!
//! Conventions
//! -----------
//! - Axis order is (time, state-variable, region, mode), 0-based.
//! - The state-variable/mode reduction in [`analysis_slice`] is a
//!   deliberate, documented simplification of the analyzer, not an
//!   implementation shortcut; it is kept explicit here so tests can target
//!   it directly.
//!
//! [`analysis_slice`]: TimeSeries4D::analysis_slice
//!
//! Downstream usage
//! ----------------
//! - Construct [`TimeSeries4D`] at the boundary where raw simulation output
//!   enters the analysis stack; consumers may rely on its invariants.
//! - The calculator reads only [`analysis_slice`]; the estimator reads only
//!   [`TimeSeries4D::shape`].
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction (happy path, empty axes, non-finite
//!   samples, bad sampling period) and the slice reduction.
use crate::fcd::{
    core::{shape::SeriesShape, units::TimeUnit, validation::validate_sample_period},
    errors::{FcdError, FcdResult},
};
use ndarray::{Array4, ArrayView2, s};

/// `TimeSeries4D` — validated 4-D series plus sampling period and metadata.
///
/// Purpose
/// -------
/// Represent a single, validated 4-D time series indexed as
/// (time, state-variable, region, mode), together with its sampling period
/// and interpretation metadata. This type centralizes input checks so the
/// calculator and estimator can assume clean, finite data with a usable
/// region axis.
///
/// Fields
/// ------
/// - `data`: `Array4<f64>`
///   Raw samples; finite, axis order (time, state-variable, region, mode).
/// - `sample_period`: `f64`
///   Time between consecutive samples, finite and > 0, in `meta.unit`.
/// - `meta`: [`SeriesMeta`]
///   Interpretation details (time unit, optional source label).
///
/// Invariants
/// ----------
/// - Every axis is non-empty and the region axis has length ≥ 2.
/// - All samples are finite.
/// - `sample_period > 0` and finite.
///
/// Performance
/// -----------
/// - Validation is O(n) in the number of samples due to a single scan.
/// - After construction, this type is a plain container; `analysis_slice`
///   is a zero-copy view.
///
/// Notes
/// -----
/// - No rescaling or detrending is performed; the container only validates.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries4D {
    /// Raw samples, indexed (time, state-variable, region, mode).
    data: Array4<f64>,
    /// Time between consecutive samples (must be finite and > 0).
    sample_period: f64,
    /// Cached, validated shape of `data`.
    shape: SeriesShape,
    /// Interpretation details (time unit, source label).
    pub meta: SeriesMeta,
}

impl TimeSeries4D {
    /// Construct a validated [`TimeSeries4D`] from raw samples.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `Array4<f64>`
    ///   Raw series in (time, state-variable, region, mode) order. Every
    ///   axis must be non-empty, the region axis must have length ≥ 2, and
    ///   all values must be finite.
    /// - `sample_period`: `f64`
    ///   Time between consecutive samples, in the unit declared by `meta`.
    ///   Must be finite and strictly positive.
    /// - `meta`: [`SeriesMeta`]
    ///   Metadata describing how to interpret the series.
    ///
    /// Returns
    /// -------
    /// `FcdResult<TimeSeries4D>`
    ///   - `Ok(series)` if all invariants are satisfied.
    ///   - `Err(FcdError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `FcdError::EmptySeries`
    ///   Returned when any axis has length 0.
    /// - `FcdError::InvalidShape`
    ///   Returned when the region axis has length < 2.
    /// - `FcdError::InvalidSamplePeriod`
    ///   Returned when `sample_period` is non-finite or ≤ 0.
    /// - `FcdError::NonFiniteData { index, value }`
    ///   Returned when any sample is NaN or ±∞; `index` points to the first
    ///   offending element.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `FcdError`.
    ///
    /// Notes
    /// -----
    /// - Validation scans `data` once and stops at the first invalid sample.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::Array4;
    /// # use fcd_dynamics::fcd::core::data::{SeriesMeta, TimeSeries4D};
    /// # use fcd_dynamics::fcd::core::units::TimeUnit;
    /// #
    /// let data = Array4::<f64>::zeros((50, 1, 3, 1));
    /// let meta = SeriesMeta::new(TimeUnit::Milliseconds, None);
    /// let series = TimeSeries4D::new(data, 1.0, meta).unwrap();
    /// assert_eq!(series.shape().regions, 3);
    /// ```
    pub fn new(data: Array4<f64>, sample_period: f64, meta: SeriesMeta) -> FcdResult<Self> {
        let dims = data.dim();
        let shape = SeriesShape::from_dims([dims.0, dims.1, dims.2, dims.3])?;

        validate_sample_period(sample_period)?;

        for (index, &value) in data.indexed_iter() {
            if !value.is_finite() {
                return Err(FcdError::NonFiniteData {
                    index: [index.0, index.1, index.2, index.3],
                    value,
                });
            }
        }

        Ok(TimeSeries4D { data, sample_period, shape, meta })
    }

    /// The validated shape of the series.
    pub fn shape(&self) -> SeriesShape {
        self.shape
    }

    /// Time between consecutive samples, in `meta.unit`.
    pub fn sample_period(&self) -> f64 {
        self.sample_period
    }

    /// Read-only view of the raw 4-D samples.
    pub fn data(&self) -> &Array4<f64> {
        &self.data
    }

    /// The effective (time × region) analysis matrix.
    ///
    /// By design, the analysis uses only the **first state variable** and
    /// the **first mode** of the 4-D input; this named accessor keeps that
    /// reduction explicit rather than burying it in slicing code.
    ///
    /// Returns
    /// -------
    /// `ArrayView2<f64>`
    ///   Zero-copy view of shape (time_points, regions).
    pub fn analysis_slice(&self) -> ArrayView2<'_, f64> {
        self.data.slice(s![.., 0, .., 0])
    }
}

/// `SeriesMeta` — interpretation metadata for a 4-D series.
///
/// Purpose
/// -------
/// Describe how a series should be interpreted without altering its numeric
/// values: the physical unit of the sampling period and an optional source
/// label that hosts can use to tag derived results.
///
/// Fields
/// ------
/// - `unit`: [`TimeUnit`]
///   Unit of the sampling period (and thus of `sw`/`sp`).
/// - `source`: `Option<String>`
///   Free-form identifier of the series' origin (e.g., a simulation run
///   id). Propagated onto computed outcomes for result tagging; never
///   interpreted by the analysis itself.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesMeta {
    /// Unit of the sampling period.
    pub unit: TimeUnit,
    /// Optional identifier of the series' origin, for result tagging.
    pub source: Option<String>,
}

impl SeriesMeta {
    /// Construct a [`SeriesMeta`]. Plain constructor; no validation needed.
    pub fn new(unit: TimeUnit, source: Option<String>) -> Self {
        SeriesMeta { unit, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Happy-path construction and shape caching.
    // - Rejection of empty axes, non-finite samples, and bad periods.
    // - The (state-variable 0, mode 0) analysis-slice reduction.
    // -------------------------------------------------------------------------

    fn default_meta() -> SeriesMeta {
        SeriesMeta::new(TimeUnit::Milliseconds, None)
    }

    #[test]
    // Purpose
    // -------
    // Verify that a finite series with a valid period and ≥ 2 regions is
    // accepted and reports its shape.
    //
    // Given
    // -----
    // - A zero-filled (20, 2, 4, 3) array with sample_period = 0.5.
    //
    // Expect
    // ------
    // - Construction succeeds; shape() matches the array dims.
    fn time_series_new_valid_input_succeeds() {
        // Arrange
        let data = Array4::<f64>::zeros((20, 2, 4, 3));

        // Act
        let series = TimeSeries4D::new(data, 0.5, default_meta())
            .expect("valid series should be accepted");

        // Assert
        assert_eq!(series.shape().as_array(), [20, 2, 4, 3]);
        assert_eq!(series.sample_period(), 0.5);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an array with a zero-length axis is rejected.
    //
    // Given
    // -----
    // - A (0, 1, 4, 1) array.
    //
    // Expect
    // ------
    // - `Err(FcdError::EmptySeries)`.
    fn time_series_new_empty_axis_returns_empty_series() {
        // Arrange
        let data = Array4::<f64>::zeros((0, 1, 4, 1));

        // Act
        let result = TimeSeries4D::new(data, 1.0, default_meta());

        // Assert
        match result {
            Err(FcdError::EmptySeries) => (),
            other => panic!("expected EmptySeries error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a NaN sample is rejected with its 4-D index reported.
    //
    // Given
    // -----
    // - A (10, 1, 3, 1) array with NaN at (4, 0, 2, 0).
    //
    // Expect
    // ------
    // - `Err(FcdError::NonFiniteData)` with index [4, 0, 2, 0].
    fn time_series_new_nan_sample_returns_non_finite_data() {
        // Arrange
        let mut data = Array4::<f64>::zeros((10, 1, 3, 1));
        data[[4, 0, 2, 0]] = f64::NAN;

        // Act
        let result = TimeSeries4D::new(data, 1.0, default_meta());

        // Assert
        match result {
            Err(FcdError::NonFiniteData { index, value }) => {
                assert_eq!(index, [4, 0, 2, 0]);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteData error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure a non-positive sampling period is rejected.
    //
    // Given
    // -----
    // - A valid array with sample_period = 0.0.
    //
    // Expect
    // ------
    // - `Err(FcdError::InvalidSamplePeriod)`.
    fn time_series_new_zero_period_returns_invalid_sample_period() {
        // Arrange
        let data = Array4::<f64>::zeros((10, 1, 3, 1));

        // Act
        let result = TimeSeries4D::new(data, 0.0, default_meta());

        // Assert
        match result {
            Err(FcdError::InvalidSamplePeriod(p)) => assert_eq!(p, 0.0),
            other => panic!("expected InvalidSamplePeriod error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `analysis_slice` selects exactly the first state variable
    // and first mode.
    //
    // Given
    // -----
    // - A (5, 2, 3, 2) array where entry (t, s, r, m) = 1000·s + 100·m + 10·r + t,
    //   so slices are distinguishable.
    //
    // Expect
    // ------
    // - The slice has shape (5, 3) and equals the s = 0, m = 0 plane.
    fn time_series_analysis_slice_fixes_first_svar_and_mode() {
        // Arrange
        let data = Array4::from_shape_fn((5, 2, 3, 2), |(t, s, r, m)| {
            1000.0 * s as f64 + 100.0 * m as f64 + 10.0 * r as f64 + t as f64
        });
        let series =
            TimeSeries4D::new(data, 1.0, default_meta()).expect("series should be valid");

        // Act
        let slice = series.analysis_slice();

        // Assert
        assert_eq!(slice.dim(), (5, 3));
        for t in 0..5 {
            for r in 0..3 {
                assert_eq!(slice[[t, r]], 10.0 * r as f64 + t as f64);
            }
        }
    }
}
