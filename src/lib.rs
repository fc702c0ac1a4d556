//! fcd_dynamics — Functional Connectivity Dynamics with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the FCD routines to Python via the `_fcd_dynamics` extension
//! module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing class and sizing functions used by the
//! `fcd_dynamics` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module ([`fcd`]) as the public crate surface.
//! - Define the `#[pyclass]` wrapper [`Fcd`] and the `#[pymodule]`
//!   initializer for the `_fcd_dynamics` Python extension.
//! - Expose the pre-flight sizing API (`estimate_memory`, `estimate_disk`)
//!   as module-level Python functions so hosts can run admission control
//!   before committing to a computation.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner [`fcd`] module;
//!   this file performs only FFI glue, input validation, and error
//!   mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror
//!   the invariants of their Rust counterparts (e.g. the symmetry and unit
//!   diagonal of the computed matrix).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are propagated as
//!   [`FcdError`](fcd::errors::FcdError) values internally and converted
//!   to `ValueError` at the PyO3 boundary.
//! - The sizing functions take the series **shape**, never the data, so
//!   Python callers cannot accidentally couple estimation to array
//!   contents.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`fcd`] (or
//!   [`fcd::prelude`]) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - Python callers size a job with
//!   `estimate_memory(shape, sample_period, sw, sp)`, then construct
//!   `Fcd(data, sample_period, sw, sp)` and read `array_data`.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_fcd_pipeline.rs`; smoke tests for the PyO3
//!   surface belong to the Python packaging layer.

pub mod fcd;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    fcd::{
        calculator::FcdOutcome,
        core::{shape::SeriesShape, windows::SlidingWindowConfig},
        estimator,
    },
    utils::build_time_series,
};

/// Fcd — Python-facing wrapper for the FCD computation.
///
/// Purpose
/// -------
/// Represent the result of one Functional Connectivity Dynamics run when
/// called from Python, forwarding all computation to [`FcdOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert the Python 4-D array into a
///   [`TimeSeries4D`](crate::fcd::core::data::TimeSeries4D).
/// - Run the analysis via [`FcdOutcome::evaluate`] and store the outcome
///   internally.
/// - Expose the matrix and run metadata (`array_data`, `sw`, `sp`,
///   `n_windows`, `degenerate_windows`, `source`) as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `Fcd(data, sample_period, sw, sp, source=None)`:
/// - `data`: 4-D `numpy.ndarray` of `float64`, axes
///   (time, state-variable, region, mode), finite values, ≥ 2 regions.
/// - `sample_period`: `float`
///   Positive sampling period; `sw`/`sp` share its unit.
/// - `sw`, `sp`: `float`
///   Window length and spanning step, both > 0.
/// - `source`: `Optional[str]`
///   Label propagated onto the result for host-side tagging.
///
/// Fields
/// ------
/// - `inner`: [`FcdOutcome`]
///   Rust-side container holding the matrix and metadata used by the
///   accessors.
///
/// Notes
/// -----
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`FcdOutcome::evaluate`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "fcd_dynamics")]
pub struct Fcd {
    /// The computed FCD outcome.
    inner: FcdOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl Fcd {
    /// Compute the FCD matrix of a 4-D time series.
    #[new]
    #[pyo3(
        text_signature = "(data, sample_period, sw, sp, /, source=None)",
        signature = (raw_data, sample_period, sw, sp, source = None)
    )]
    pub fn compute<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, sample_period: f64, sw: f64, sp: f64,
        source: Option<String>,
    ) -> PyResult<Fcd> {
        let series = build_time_series(py, raw_data, sample_period, source)?;
        let config = SlidingWindowConfig::new(sw, sp)?;
        let outcome = FcdOutcome::evaluate(&series, &config)?;
        Ok(Fcd { inner: outcome })
    }

    /// The W×W FCD matrix as a `numpy.ndarray`.
    #[getter]
    pub fn array_data<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.matrix().clone().into_pyarray(py)
    }

    /// The configured window length, in physical time units.
    #[getter]
    pub fn sw(&self) -> f64 {
        self.inner.sw()
    }

    /// The configured spanning step, in physical time units.
    #[getter]
    pub fn sp(&self) -> f64 {
        self.inner.sp()
    }

    /// Number of windows W (the matrix side length).
    #[getter]
    pub fn n_windows(&self) -> usize {
        self.inner.n_windows()
    }

    /// Ascending indices of zero-variance (degenerate) windows.
    #[getter]
    pub fn degenerate_windows(&self) -> Vec<usize> {
        self.inner.degenerate_windows().to_vec()
    }

    /// The source label of the input series, if one was set.
    #[getter]
    pub fn source(&self) -> Option<String> {
        self.inner.source().map(str::to_owned)
    }
}

/// Pre-flight memory estimate, in bytes, from shape and configuration only.
///
/// Mirrors [`estimator::estimate_memory_bytes`]: analysis-slice bytes plus
/// the projected W×W output. Never inspects any data array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(shape, sample_period, sw, sp, /)")]
pub fn estimate_memory(
    shape: (usize, usize, usize, usize), sample_period: f64, sw: f64, sp: f64,
) -> PyResult<u64> {
    let shape = SeriesShape::new(shape.0, shape.1, shape.2, shape.3)?;
    let config = SlidingWindowConfig::new(sw, sp)?;
    Ok(estimator::estimate_memory_bytes(&shape, &config, sample_period)?)
}

/// Pre-flight disk estimate, in whole kilobytes, from shape and
/// configuration only.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(shape, sample_period, sw, sp, /)")]
pub fn estimate_disk(
    shape: (usize, usize, usize, usize), sample_period: f64, sw: f64, sp: f64,
) -> PyResult<u64> {
    let shape = SeriesShape::new(shape.0, shape.1, shape.2, shape.3)?;
    let config = SlidingWindowConfig::new(sw, sp)?;
    Ok(estimator::estimate_disk_kb(&shape, &config, sample_period)?)
}

/// Initialize the `_fcd_dynamics` Python extension module.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_fcd_dynamics`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _fcd_dynamics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<Fcd>()?;
    m.add_function(wrap_pyfunction!(estimate_memory, m)?)?;
    m.add_function(wrap_pyfunction!(estimate_disk, m)?)?;
    Ok(())
}
