//! Units for time-series sampling periods.
//!
//! - [`TimeUnit`] declares the physical granularity of the sampling period
//!   (milliseconds/seconds).
//!
//! Notes
//! -----
//! - `TimeUnit` is metadata only; it does not rescale values by itself.
//!   Callers must supply `sw` / `sp` in the same unit as the series'
//!   sampling period.

/// Units of measurement for a series' sampling period.
///
/// This sets the assumed time scale for the data and for any
/// reporting/interpretation downstream. It does **not** rescale values
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    /// Milliseconds (1e-3 s), the common unit for simulated BOLD/EEG output.
    Milliseconds,
    /// Seconds.
    Seconds,
}
