//! fcd — Functional Connectivity Dynamics: engine, estimator, and errors.
//!
//! Purpose
//! -------
//! Provide the complete FCD stack under a single namespace: validated
//! inputs and window configuration in [`core`], the sliding-window
//! correlation-of-correlations engine in [`calculator`], pre-flight
//! memory/disk sizing in [`estimator`], and shared error types in
//! [`errors`]. This is the surface most consumers (including Python
//! bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect structural building blocks in [`core`]: the 4-D series
//!   container, shapes, units, sliding-window configuration, and shared
//!   validation.
//! - Expose the analysis entry points [`FcdOutcome::evaluate`] and
//!   [`FcdOutcome::evaluate_checked`] in [`calculator`], producing a
//!   symmetric W×W matrix with unit diagonal and recorded degenerate
//!   windows.
//! - Expose O(1), data-free sizing functions in [`estimator`]
//!   ([`estimate_memory_bytes`], [`estimate_disk_kb`], [`estimate`]) for
//!   host-side admission control.
//! - Centralize error types in [`errors`] ([`FcdError`], [`FcdResult`]) so
//!   callers see one uniform error surface across the stack.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are carried in validated [`TimeSeries4D`] instances: finite
//!   samples, ≥ 2 regions, positive sampling period.
//! - The estimator and the engine resolve the window grid through the same
//!   code path, so sizing and execution always agree on the window count.
//! - The engine is stateless and deterministic; concurrent evaluations of
//!   distinct inputs need no coordination.
//!
//! Conventions
//! -----------
//! - Axis order is (time, state-variable, region, mode); only the first
//!   state variable and first mode are analyzed (documented
//!   simplification, kept explicit in
//!   [`TimeSeries4D::analysis_slice`](core::data::TimeSeries4D::analysis_slice)).
//! - The stack performs no I/O; the only side channel is one non-fatal
//!   `log::warn!` when degenerate windows are substituted with 0.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct a [`TimeSeries4D`] (data, sampling period, metadata).
//!   2. Construct a [`SlidingWindowConfig`] with `sw`/`sp`.
//!   3. Call the estimator with the series **shape** and refuse or queue
//!      the job if it exceeds the host's ceiling.
//!   4. Execute via [`FcdOutcome::evaluate_checked`] with the sized shape.
//!   5. Persist/tag the result from the outcome's matrix and metadata.
//! - Python bindings import from this module and rely on the
//!   `FcdError → PyErr` conversion defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live with each submodule; the estimate-then-execute
//!   pipeline and the synchronized-vs-noise smoke behavior are exercised
//!   in `tests/integration_fcd_pipeline.rs`.

pub mod calculator;
pub mod core;
pub mod errors;
pub mod estimator;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the "everyday" types most users need. More specialized items
// (scalar validation helpers, the raw window grid) remain under their
// respective submodules.

pub use self::calculator::FcdOutcome;
pub use self::core::{
    SeriesMeta, SeriesShape, SlidingWindowConfig, TimeSeries4D, TimeUnit, WindowGrid,
};
pub use self::errors::{FcdError, FcdResult};
pub use self::estimator::{
    SizeEstimate, estimate, estimate_disk_kb, estimate_memory_bytes, result_size_bytes,
};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use fcd_dynamics::fcd::prelude::*;
//
// to import the main FCD surface in a single line.

pub mod prelude {
    pub use super::calculator::FcdOutcome;
    pub use super::core::{SeriesMeta, SeriesShape, SlidingWindowConfig, TimeSeries4D, TimeUnit};
    pub use super::errors::{FcdError, FcdResult};
    pub use super::estimator::{SizeEstimate, estimate, estimate_disk_kb, estimate_memory_bytes};
}
