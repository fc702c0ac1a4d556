//! utils — Python→Rust conversion helpers for the binding layer.
//!
//! Purpose
//! -------
//! Keep the PyO3 glue out of the numerical modules: extract 4-D `float64`
//! arrays from Python objects and assemble validated
//! [`TimeSeries4D`](crate::fcd::core::data::TimeSeries4D) values for the
//! binding surface in `lib.rs`.
//!
//! Notes
//! -----
//! - Everything here is gated on the `python-bindings` feature; native
//!   Rust callers construct [`TimeSeries4D`](crate::fcd::core::data::TimeSeries4D)
//!   directly.
//! - Validation of the extracted data (finiteness, shape, sampling
//!   period) is delegated to the core constructors; this module only
//!   handles the FFI conversion.

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray4;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::fcd::core::{
    data::{SeriesMeta, TimeSeries4D},
    units::TimeUnit,
};

/// Extract a read-only 4-D `float64` array from a Python object.
///
/// Accepts a `numpy.ndarray` of dtype `float64` with 4 axes, or any object
/// whose `to_numpy()` yields one (e.g. a framework time-series wrapper).
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_series_array<'py>(
    _py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray4<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray4<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method0("to_numpy") {
        if let Ok(arr_ro) = obj.extract::<PyReadonlyArray4<f64>>() {
            return Ok(arr_ro);
        }
    }

    Err(PyTypeError::new_err(
        "expected a 4-D numpy.ndarray of float64 with axes \
         (time, state-variable, region, mode)",
    ))
}

/// Assemble a validated [`TimeSeries4D`] from Python inputs.
///
/// Copies the extracted array into an owned `ndarray::Array4` and runs the
/// core constructor, so every invariant enforced on the Rust side applies
/// unchanged to Python callers. The unit is recorded as milliseconds, the
/// convention of the simulator output this analyzer consumes.
#[cfg(feature = "python-bindings")]
pub fn build_time_series<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, sample_period: f64, source: Option<String>,
) -> PyResult<TimeSeries4D> {
    let arr = extract_series_array(py, raw_data)?;
    let data = arr.as_array().to_owned();
    let meta = SeriesMeta::new(TimeUnit::Milliseconds, source);
    Ok(TimeSeries4D::new(data, sample_period, meta)?)
}
