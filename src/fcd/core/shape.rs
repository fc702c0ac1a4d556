//! 4-D series shape (time, state-variable, region, mode).
//!
//! Axis semantics follow the simulator convention:
//! - axis 0: time points,
//! - axis 1: state variables,
//! - axis 2: regions (network nodes),
//! - axis 3: modes.
//!
//! The FCD analysis correlates regions, so at least 2 regions are required.
use crate::fcd::errors::{FcdError, FcdResult};

/// Shape of a 4-D time series, validated for FCD analysis.
///
/// - `time_points`: number of samples along the time axis.
/// - `state_variables`: number of state variables (only the first is analyzed).
/// - `regions`: number of regions; pairwise correlations need ≥ 2.
/// - `modes`: number of modes (only the first is analyzed).
///
/// Invariant: every axis has length ≥ 1 and `regions ≥ 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesShape {
    pub time_points: usize,
    pub state_variables: usize,
    pub regions: usize,
    pub modes: usize,
}

impl SeriesShape {
    /// Construct a validated [`SeriesShape`].
    ///
    /// # Invariants
    /// - No axis may be empty: a zero-length axis means there is no data to
    ///   analyze.
    /// - `regions >= 2`: inter-region correlation is undefined for a single
    ///   region.
    ///
    /// # Arguments
    /// - `time_points`: length of the time axis.
    /// - `state_variables`: length of the state-variable axis.
    /// - `regions`: length of the region axis.
    /// - `modes`: length of the mode axis.
    ///
    /// # Errors
    /// - [`FcdError::EmptySeries`] if any axis has length 0.
    /// - [`FcdError::InvalidShape`] if `regions < 2`.
    ///
    /// # Rationale
    /// The engine reduces the 4-D input to a (time × region) slice and then
    /// correlates region pairs. Guarding here fails fast on shapes the
    /// analysis cannot support, so downstream code can assume a usable
    /// region axis.
    pub fn new(
        time_points: usize, state_variables: usize, regions: usize, modes: usize,
    ) -> FcdResult<Self> {
        if time_points == 0 || state_variables == 0 || regions == 0 || modes == 0 {
            return Err(FcdError::EmptySeries);
        }
        if regions < 2 {
            return Err(FcdError::InvalidShape { axis: "region", len: regions });
        }
        Ok(SeriesShape { time_points, state_variables, regions, modes })
    }

    /// Construct a validated [`SeriesShape`] from raw array dimensions in
    /// (time, state-variable, region, mode) order.
    ///
    /// # Errors
    /// Same as [`SeriesShape::new`].
    pub fn from_dims(dims: [usize; 4]) -> FcdResult<Self> {
        SeriesShape::new(dims[0], dims[1], dims[2], dims[3])
    }

    /// The shape as a `[time, state_variables, regions, modes]` array, for
    /// comparison against realized `ndarray` dimensions.
    pub fn as_array(&self) -> [usize; 4] {
        [self.time_points, self.state_variables, self.regions, self.modes]
    }

    /// Number of distinct region pairs, R·(R−1)/2.
    ///
    /// This is the length of each window's flattened strict-upper-triangle
    /// correlation vector.
    pub fn pair_count(&self) -> usize {
        self.regions * (self.regions - 1) / 2
    }
}
