//! core — validated data, shapes, and window grids for FCD analysis.
//!
//! Purpose
//! -------
//! Collect the structural building blocks the FCD stack rests on: the 4-D
//! time-series container with its metadata, the shape value type, the
//! sliding-window configuration and its resolved grid, time units, and
//! shared scalar validation. The calculator and estimator build on top of
//! these primitives and assume their invariants.
//!
//! Key behaviors
//! -------------
//! - Define the validated input container ([`TimeSeries4D`], [`SeriesMeta`])
//!   and its axis bookkeeping ([`SeriesShape`], [`TimeUnit`]).
//! - Define the window configuration ([`SlidingWindowConfig`]) and its
//!   resolution into sample-count grids ([`WindowGrid`]), where all
//!   window-arithmetic admission checks live.
//! - Centralize scalar guards in [`validation`] so configuration and data
//!   layers share one set of error semantics.
//!
//! Invariants & assumptions
//! ------------------------
//! - A constructed [`TimeSeries4D`] has finite samples, non-empty axes,
//!   ≥ 2 regions, and a positive sampling period.
//! - A resolved [`WindowGrid`] has `window_len ≥ 2`, `step ≥ 1`, and
//!   `n_windows ≥ 2`, and every window range it yields is in bounds.
//! - `sw`, `sp`, and the sampling period share one physical unit; nothing
//!   in this subtree rescales values.
//!
//! Conventions
//! -----------
//! - Axis order is (time, state-variable, region, mode), 0-based
//!   throughout; windows are half-open sample ranges.
//! - This subtree performs no I/O and no logging; it operates purely on
//!   `ndarray` containers and scalars, reporting failures via
//!   [`FcdResult`](crate::fcd::errors::FcdResult).
//!
//! Downstream usage
//! ----------------
//! - Hosts construct [`TimeSeries4D`] and [`SlidingWindowConfig`] at the
//!   boundary, size the job via [`estimator`](crate::fcd::estimator) using
//!   [`SeriesShape`] alone, then execute via
//!   [`calculator`](crate::fcd::calculator).
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules cover constructor validation, the
//!   window-count formula and its rejection paths, range arithmetic, and
//!   the analysis-slice reduction.

pub mod data;
pub mod shape;
pub mod units;
pub mod validation;
pub mod windows;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{SeriesMeta, TimeSeries4D};
pub use self::shape::SeriesShape;
pub use self::units::TimeUnit;
pub use self::validation::{validate_sample_period, validate_window_params};
pub use self::windows::{SlidingWindowConfig, WindowGrid};
