//! fcd::calculator — sliding-window Functional Connectivity Dynamics.
//!
//! Purpose
//! -------
//! Implement the FCD algorithm: partition a (time × region) slice of a 4-D
//! brain time series into sliding windows, compute each window's R×R
//! Pearson correlation matrix across regions, and correlate the vectorized
//! correlation patterns of every window pair into a W×W second-order
//! matrix describing how the inter-region correlation structure drifts
//! over time.
//!
//! Key behaviors
//! -------------
//! - Resolve the window grid first, so every configuration error surfaces
//!   before any computation starts.
//! - Use only the first state variable and first mode of the 4-D input via
//!   [`TimeSeries4D::analysis_slice`] — a documented simplification of the
//!   analyzer, preserved deliberately.
//! - Flatten each window's correlation matrix to its strict upper triangle
//!   (the diagonal is identically 1 and carries no information).
//! - Produce a symmetric W×W matrix with unit diagonal by construction.
//! - Substitute `0` for second-order entries involving a zero-variance
//!   (degenerate) window instead of propagating NaN; record the affected
//!   window indices on the outcome and emit one non-fatal `log::warn!`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated [`TimeSeries4D`] values: finite samples, ≥ 2
//!   regions, positive sampling period.
//! - The computation is deterministic and stateless: identical inputs give
//!   identical outputs, the engine holds no state across calls and no
//!   reference to the input after returning.
//! - No I/O happens inside the computation; all data is memory-resident.
//! - The per-window first-order loop and the per-pair second-order loop
//!   are independent across iterations (no shared mutable state), so both
//!   are safe parallelization points; the implementation is a single
//!   synchronous pass.
//!
//! Conventions
//! -----------
//! - Windows are half-open sample ranges `[w·step, w·step + window_len)`
//!   per [`WindowGrid`]; trailing samples that do not fill a window are
//!   dropped.
//! - A region that is constant within a window contributes 0 to its
//!   off-diagonal first-order entries (rather than NaN), so non-finite
//!   values never enter the second-order stage.
//!
//! Downstream usage
//! ----------------
//! - Hosts size the job with [`fcd::estimator`](crate::fcd::estimator)
//!   first, then call [`FcdOutcome::evaluate`] (or
//!   [`FcdOutcome::evaluate_checked`] to also enforce that the realized
//!   shape matches the shape that was sized).
//! - The returned [`FcdOutcome`] carries the matrix plus `sw`, `sp`, the
//!   window grid, and the source label — enough metadata to persist and
//!   tag the result; persistence itself is a host concern.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the first-order correlation helper (perfect and
//!   anti-correlation, constant columns), the upper-triangle flattening,
//!   symmetry and unit diagonal of the output, determinism, the
//!   zero-variance substitution policy, and the shape-mismatch guard.
//! - The end-to-end synchronized-vs-noise smoke behavior lives in the
//!   integration tests.
use crate::fcd::{
    core::{
        data::TimeSeries4D,
        shape::SeriesShape,
        windows::{SlidingWindowConfig, WindowGrid},
    },
    errors::{FcdError, FcdResult},
};
use log::warn;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, s};

/// FcdOutcome — the FCD matrix of one analysis run, with its metadata.
///
/// Purpose
/// -------
/// Hold the W×W second-order correlation matrix computed by
/// [`FcdOutcome::evaluate`], together with the resolved window grid, the
/// configuration that produced it, the source label of the input series,
/// and the indices of any degenerate windows.
///
/// Key behaviors
/// -------------
/// - The matrix is symmetric with unit diagonal by construction.
/// - Degenerate windows (zero-variance correlation vectors) are recorded,
///   not raised: their off-diagonal entries are 0 and the run succeeds.
/// - Accessors expose everything a host needs to persist and tag the
///   result; the outcome owns its data and holds no reference to the
///   input series.
///
/// Fields
/// ------
/// - `matrix`: `Array2<f64>`
///   The W×W FCD matrix.
/// - `grid`: [`WindowGrid`]
///   Resolved window length, step, and count.
/// - `sw`, `sp`: `f64`
///   The physical-time configuration the run was executed with.
/// - `source`: `Option<String>`
///   Source label cloned from the input series' metadata.
/// - `degenerate_windows`: `Vec<usize>`
///   Ascending indices of windows whose flattened correlation vector had
///   zero variance.
///
/// Invariants
/// ----------
/// - `matrix` is square with side `grid.n_windows ≥ 2`.
/// - `matrix[[i, j]] == matrix[[j, i]]` and `matrix[[i, i]] == 1.0`.
/// - Every entry is finite; entries involving a degenerate window are 0.
#[derive(Debug, Clone, PartialEq)]
pub struct FcdOutcome {
    matrix: Array2<f64>,
    grid: WindowGrid,
    sw: f64,
    sp: f64,
    source: Option<String>,
    degenerate_windows: Vec<usize>,
}

impl FcdOutcome {
    /// Compute the FCD matrix for a series under a window configuration.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&TimeSeries4D`
    ///   Validated 4-D input. Only the first state variable and first mode
    ///   are analyzed (documented simplification).
    /// - `config`: `&SlidingWindowConfig`
    ///   Window length `sw` and spanning step `sp`, in the same physical
    ///   unit as the series' sampling period.
    ///
    /// Returns
    /// -------
    /// `FcdResult<FcdOutcome>`
    ///   - `Ok(outcome)` holding the W×W matrix and run metadata.
    ///   - `Err(FcdError)` when the configuration cannot be resolved
    ///     against this series (window too long/short, step degenerate,
    ///     fewer than 2 windows). No partial result is ever returned.
    ///
    /// Errors
    /// ------
    /// - All variants of [`SlidingWindowConfig::resolve`]; they surface
    ///   before any window is computed.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; invalid user input is
    ///   surfaced as `FcdError`.
    ///
    /// Notes
    /// -----
    /// - Internally, this method:
    ///   - resolves the window grid,
    ///   - computes one R×R Pearson matrix per window over the analysis
    ///     slice and flattens its strict upper triangle,
    ///   - detects zero-variance window vectors and records them,
    ///   - fills the symmetric second-order matrix pairwise, substituting
    ///     0 where a degenerate window makes the correlation undefined.
    /// - Cost is O(W · window_len · R²) for the first-order pass plus
    ///   O(W² · R²) for the second-order pass, all CPU-bound.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use fcd_dynamics::fcd::prelude::*;
    /// use ndarray::Array4;
    ///
    /// let data = Array4::from_shape_fn((100, 1, 4, 1), |(t, _, r, _)| {
    ///     ((t as f64) * 0.3 + r as f64).sin()
    /// });
    /// let meta = SeriesMeta::new(TimeUnit::Milliseconds, None);
    /// let series = TimeSeries4D::new(data, 1.0, meta).unwrap();
    /// let config = SlidingWindowConfig::new(20.0, 10.0).unwrap();
    ///
    /// let outcome = FcdOutcome::evaluate(&series, &config).unwrap();
    /// assert_eq!(outcome.n_windows(), 9);
    /// assert_eq!(outcome.matrix()[[0, 0]], 1.0);
    /// ```
    pub fn evaluate(series: &TimeSeries4D, config: &SlidingWindowConfig) -> FcdResult<Self> {
        let shape = series.shape();
        let grid = config.resolve(series.sample_period(), shape.time_points)?;
        let slice = series.analysis_slice();

        // One flattened upper-triangle vector per window, stacked row-wise.
        let mut vectors = Array2::<f64>::zeros((grid.n_windows, shape.pair_count()));
        for w in 0..grid.n_windows {
            let window = slice.slice(s![grid.window_range(w), ..]);
            let corr = calc_window_correlation(&window);
            fill_upper_triangle(&corr, vectors.row_mut(w));
        }

        let degenerate_windows: Vec<usize> =
            (0..grid.n_windows).filter(|&w| is_constant_vector(vectors.row(w))).collect();
        if !degenerate_windows.is_empty() {
            warn!(
                "FCD: {} of {} windows have zero-variance correlation vectors; \
                 their off-diagonal entries are set to 0",
                degenerate_windows.len(),
                grid.n_windows
            );
        }

        let mut matrix = Array2::<f64>::zeros((grid.n_windows, grid.n_windows));
        for i in 0..grid.n_windows {
            matrix[[i, i]] = 1.0;
            for j in (i + 1)..grid.n_windows {
                let value = calc_pearson(vectors.row(i), vectors.row(j)).unwrap_or(0.0);
                matrix[[i, j]] = value;
                matrix[[j, i]] = value;
            }
        }

        Ok(FcdOutcome {
            matrix,
            grid,
            sw: config.sw(),
            sp: config.sp(),
            source: series.meta.source.clone(),
            degenerate_windows,
        })
    }

    /// Compute the FCD matrix, first checking the realized series shape
    /// against the shape the caller sized resources with.
    ///
    /// Parameters
    /// ----------
    /// - `series`, `config`: as in [`FcdOutcome::evaluate`].
    /// - `expected`: `&SeriesShape`
    ///   The shape previously passed to the estimator.
    ///
    /// Returns
    /// -------
    /// `FcdResult<FcdOutcome>`
    ///   - `Err(FcdError::ShapeMismatch)` if the realized shape disagrees
    ///     with `expected`; the engine fails fast rather than silently
    ///     truncating or padding.
    ///   - Otherwise identical to [`FcdOutcome::evaluate`].
    pub fn evaluate_checked(
        series: &TimeSeries4D, config: &SlidingWindowConfig, expected: &SeriesShape,
    ) -> FcdResult<Self> {
        let actual = series.shape();
        if actual != *expected {
            return Err(FcdError::ShapeMismatch {
                expected: expected.as_array(),
                actual: actual.as_array(),
            });
        }
        Self::evaluate(series, config)
    }

    /// The W×W FCD matrix.
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Consume the outcome, yielding the matrix.
    pub fn into_matrix(self) -> Array2<f64> {
        self.matrix
    }

    /// Number of windows W (the matrix side length).
    pub fn n_windows(&self) -> usize {
        self.grid.n_windows
    }

    /// The resolved window grid the run was executed with.
    pub fn grid(&self) -> WindowGrid {
        self.grid
    }

    /// Window length in physical time units, as configured.
    pub fn sw(&self) -> f64 {
        self.sw
    }

    /// Spanning step in physical time units, as configured.
    pub fn sp(&self) -> f64 {
        self.sp
    }

    /// Source label of the input series, if one was set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Ascending indices of degenerate (zero-variance) windows.
    pub fn degenerate_windows(&self) -> &[usize] {
        &self.degenerate_windows
    }

    /// Whether window `w` was degenerate.
    pub fn is_degenerate(&self, w: usize) -> bool {
        self.degenerate_windows.binary_search(&w).is_ok()
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Compute the R×R Pearson correlation matrix of one window.
///
/// Parameters
/// ----------
/// - `window`: `&ArrayView2<f64>`
///   (samples × regions) view with ≥ 2 samples and ≥ 2 regions, finite
///   values. Guaranteed by the validated callers.
///
/// Returns
/// -------
/// `Array2<f64>`
///   Symmetric matrix with unit diagonal. A region whose samples are
///   constant within the window has zero variance; its off-diagonal
///   entries are defined as 0 so no NaN is produced.
///
/// Notes
/// -----
/// - Columns are centered once, then pairwise correlations are formed from
///   dot products and per-column inverse norms (0 for constant columns).
#[inline]
fn calc_window_correlation(window: &ArrayView2<f64>) -> Array2<f64> {
    let (n, regions) = window.dim();

    let mut centered = window.to_owned();
    let mut inv_norm = vec![0.0_f64; regions];
    for a in 0..regions {
        let mut col = centered.column_mut(a);
        let mean = col.sum() / n as f64;
        col.mapv_inplace(|v| v - mean);
        let sum_sq: f64 = col.iter().map(|v| v * v).sum();
        inv_norm[a] = if sum_sq > 0.0 { 1.0 / sum_sq.sqrt() } else { 0.0 };
    }

    let mut corr = Array2::<f64>::eye(regions);
    for a in 0..regions {
        for b in (a + 1)..regions {
            let dot: f64 = centered
                .column(a)
                .iter()
                .zip(centered.column(b).iter())
                .map(|(x, y)| x * y)
                .sum();
            // inv_norm is 0 for constant columns, so the entry collapses to 0.
            let value = dot * inv_norm[a] * inv_norm[b];
            corr[[a, b]] = value;
            corr[[b, a]] = value;
        }
    }
    corr
}

/// Copy the strict upper triangle of `corr` (entries with a < b, row-major)
/// into `out`.
///
/// Parameters
/// ----------
/// - `corr`: `&Array2<f64>`
///   Square R×R matrix.
/// - `out`: `ArrayViewMut1<f64>`
///   Destination of length R·(R−1)/2.
///
/// Panics
/// ------
/// - Panics if `out` is shorter than the triangle; callers size it from
///   [`SeriesShape::pair_count`](crate::fcd::core::shape::SeriesShape::pair_count).
#[inline]
fn fill_upper_triangle(corr: &Array2<f64>, mut out: ArrayViewMut1<'_, f64>) {
    let regions = corr.nrows();
    let mut k = 0;
    for a in 0..regions {
        for b in (a + 1)..regions {
            out[k] = corr[[a, b]];
            k += 1;
        }
    }
    debug_assert_eq!(k, out.len(), "triangle length mismatch");
}

/// Pearson correlation between two equally sized vectors.
///
/// Parameters
/// ----------
/// - `x`, `y`: `ArrayView1<f64>`
///   Vectors of the same length ≥ 1, finite values.
///
/// Returns
/// -------
/// `Option<f64>`
///   - `Some(r)` with the sample correlation coefficient.
///   - `None` when either vector has zero variance, making the
///     correlation undefined; callers decide the substitution policy.
#[inline]
fn calc_pearson(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.sum() / n;
    let mean_y = y.sum() / n;

    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    let mut sum_xy = 0.0;
    for (&a, &b) in x.iter().zip(y.iter()) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sum_xx += dx * dx;
        sum_yy += dy * dy;
        sum_xy += dx * dy;
    }

    if sum_xx == 0.0 || sum_yy == 0.0 {
        return None;
    }
    Some(sum_xy / (sum_xx.sqrt() * sum_yy.sqrt()))
}

/// Whether every element of `row` equals its first element (zero variance).
#[inline]
fn is_constant_vector(row: ArrayView1<'_, f64>) -> bool {
    let first = row[0];
    row.iter().all(|&v| v == first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fcd::core::{data::SeriesMeta, units::TimeUnit};
    use approx::assert_abs_diff_eq;
    use ndarray::{Array1, Array4, array};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Correctness of the first-order helpers (calc_window_correlation,
    //   fill_upper_triangle, calc_pearson) on small synthetic inputs.
    // - Symmetry, unit diagonal, and determinism of `evaluate`.
    // - The zero-variance substitution policy and degenerate-window
    //   bookkeeping.
    // - The fail-fast shape guard of `evaluate_checked`.
    //
    // They intentionally DO NOT cover:
    // - The synchronized-vs-noise smoke behavior on larger series; that
    //   lives in the integration tests.
    // - Configuration rejection paths, which are exercised in the windows
    //   and validation modules.
    // -------------------------------------------------------------------------

    fn make_series(data: Array4<f64>, sample_period: f64) -> TimeSeries4D {
        let meta = SeriesMeta::new(TimeUnit::Milliseconds, Some("test-series".to_string()));
        TimeSeries4D::new(data, sample_period, meta)
            .expect("TimeSeries4D::new should succeed for finite synthetic data")
    }

    /// Deterministic, non-constant 4-D series: region r carries a sinusoid
    /// with an r-dependent frequency and phase, identical across state
    /// variables and modes.
    fn sine_series(time_points: usize, regions: usize) -> TimeSeries4D {
        let data = Array4::from_shape_fn((time_points, 1, regions, 1), |(t, _, r, _)| {
            ((t as f64) * 0.37 * (r as f64 + 1.0) + r as f64).sin()
        });
        make_series(data, 1.0)
    }

    #[test]
    // Purpose
    // -------
    // Verify that `calc_pearson` returns 1 for identical vectors, −1 for
    // negated vectors, and None for a constant vector.
    //
    // Given
    // -----
    // - x = [1, 2, 3, 4], y = −x, and a constant vector c = [5, 5, 5, 5].
    //
    // Expect
    // ------
    // - pearson(x, x) ≈ 1, pearson(x, y) ≈ −1, pearson(x, c) = None.
    fn calc_pearson_handles_perfect_and_degenerate_cases() {
        // Arrange
        let x = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let y = x.mapv(|v| -v);
        let c = Array1::from_elem(4, 5.0);

        // Act & Assert
        let r_self = calc_pearson(x.view(), x.view()).expect("non-degenerate");
        assert_abs_diff_eq!(r_self, 1.0, epsilon = 1e-12);

        let r_anti = calc_pearson(x.view(), y.view()).expect("non-degenerate");
        assert_abs_diff_eq!(r_anti, -1.0, epsilon = 1e-12);

        assert_eq!(calc_pearson(x.view(), c.view()), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify that `calc_window_correlation` produces a symmetric matrix
    // with unit diagonal and the exact correlation for a known pair.
    //
    // Given
    // -----
    // - A 4-sample window with region 1 = 2 × region 0 (perfectly
    //   correlated) and region 2 decreasing (perfectly anti-correlated
    //   with region 0).
    //
    // Expect
    // ------
    // - diag = 1, corr(0, 1) ≈ 1, corr(0, 2) ≈ −1, matrix symmetric.
    fn calc_window_correlation_exact_values_on_linear_signals() {
        // Arrange
        let window = array![
            [1.0, 2.0, 4.0],
            [2.0, 4.0, 3.0],
            [3.0, 6.0, 2.0],
            [4.0, 8.0, 1.0],
        ];

        // Act
        let corr = calc_window_correlation(&window.view());

        // Assert
        for a in 0..3 {
            assert_abs_diff_eq!(corr[[a, a]], 1.0, epsilon = 1e-12);
            for b in 0..3 {
                assert_eq!(corr[[a, b]], corr[[b, a]], "correlation matrix must be symmetric");
            }
        }
        assert_abs_diff_eq!(corr[[0, 1]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(corr[[0, 2]], -1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a region that is constant within the window yields 0 (not
    // NaN) in its off-diagonal first-order entries.
    //
    // Given
    // -----
    // - A 4-sample window whose region 1 is constant.
    //
    // Expect
    // ------
    // - corr(0, 1) = 0, corr(1, 2) = 0, diagonal still 1, all finite.
    fn calc_window_correlation_constant_region_yields_zero_entries() {
        // Arrange
        let window = array![
            [1.0, 5.0, 4.0],
            [2.0, 5.0, 3.0],
            [3.0, 5.0, 2.0],
            [4.0, 5.0, 1.0],
        ];

        // Act
        let corr = calc_window_correlation(&window.view());

        // Assert
        assert_eq!(corr[[0, 1]], 0.0);
        assert_eq!(corr[[1, 2]], 0.0);
        assert_eq!(corr[[1, 1]], 1.0);
        assert!(corr.iter().all(|v| v.is_finite()), "no NaN may leave the first-order stage");
    }

    #[test]
    // Purpose
    // -------
    // Verify the row-major strict-upper-triangle flattening order.
    //
    // Given
    // -----
    // - A 3×3 matrix with distinct off-diagonal entries.
    //
    // Expect
    // ------
    // - The output vector is [m01, m02, m12].
    fn fill_upper_triangle_uses_row_major_pair_order() {
        // Arrange
        let corr = array![[1.0, 0.5, 0.2], [0.5, 1.0, 0.8], [0.2, 0.8, 1.0]];
        let mut out = Array1::<f64>::zeros(3);

        // Act
        fill_upper_triangle(&corr, out.view_mut());

        // Assert
        assert_eq!(out, array![0.5, 0.2, 0.8]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the FCD matrix is symmetric with unit diagonal and finite
    // entries on a generic non-degenerate series.
    //
    // Given
    // -----
    // - A sinusoidal series with T = 80, R = 4; sw = 20, sp = 10 → W = 7.
    //
    // Expect
    // ------
    // - 7×7 matrix; M[i][j] == M[j][i]; M[i][i] == 1; |M[i][j]| ≤ 1 + ε;
    //   no degenerate windows reported.
    fn evaluate_matrix_is_symmetric_with_unit_diagonal() {
        // Arrange
        let series = sine_series(80, 4);
        let config = SlidingWindowConfig::new(20.0, 10.0).expect("valid config");

        // Act
        let outcome = FcdOutcome::evaluate(&series, &config).expect("evaluate should succeed");

        // Assert
        let m = outcome.matrix();
        assert_eq!(outcome.n_windows(), 7);
        assert_eq!(m.dim(), (7, 7));
        for i in 0..7 {
            assert_eq!(m[[i, i]], 1.0, "diagonal must be exactly 1");
            for j in 0..7 {
                assert_eq!(m[[i, j]], m[[j, i]], "FCD matrix must be symmetric");
                assert!(m[[i, j]].is_finite());
                assert!(m[[i, j]].abs() <= 1.0 + 1e-12, "entries are correlations");
            }
        }
        assert!(outcome.degenerate_windows().is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify determinism: two calls on identical inputs produce
    // bit-identical matrices and metadata.
    //
    // Given
    // -----
    // - The same sinusoidal series and configuration, evaluated twice.
    //
    // Expect
    // ------
    // - The two outcomes compare equal.
    fn evaluate_is_deterministic_across_calls() {
        // Arrange
        let series = sine_series(60, 3);
        let config = SlidingWindowConfig::new(15.0, 5.0).expect("valid config");

        // Act
        let first = FcdOutcome::evaluate(&series, &config).expect("evaluate should succeed");
        let second = FcdOutcome::evaluate(&series, &config).expect("evaluate should succeed");

        // Assert
        assert_eq!(first, second, "identical inputs must give bit-identical outcomes");
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-variance policy: a window in which every region is
    // constant yields 0 at its second-order entries with all other
    // windows, is recorded as degenerate, and does not fail the run.
    //
    // Given
    // -----
    // - T = 30, R = 3, sw = sp = 10 → W = 3; samples in window 0
    //   (t < 10) are the constant 1.0 for every region, later samples are
    //   region-distinct sinusoids.
    //
    // Expect
    // ------
    // - `evaluate` succeeds; degenerate_windows == [0];
    //   M[0][j] == M[j][0] == 0 for j ≠ 0; M[0][0] == 1; windows 1 and 2
    //   correlate normally; every entry is finite.
    fn evaluate_constant_window_substitutes_zero_and_records_index() {
        // Arrange
        let data = Array4::from_shape_fn((30, 1, 3, 1), |(t, _, r, _)| {
            if t < 10 {
                1.0
            } else {
                ((t as f64) * 0.41 * (r as f64 + 1.0) + 2.0 * r as f64).sin()
            }
        });
        let series = make_series(data, 1.0);
        let config = SlidingWindowConfig::new(10.0, 10.0).expect("valid config");

        // Act
        let outcome = FcdOutcome::evaluate(&series, &config).expect("run must not fail");

        // Assert
        assert_eq!(outcome.n_windows(), 3);
        assert_eq!(outcome.degenerate_windows(), &[0]);
        assert!(outcome.is_degenerate(0));
        assert!(!outcome.is_degenerate(1));

        let m = outcome.matrix();
        assert_eq!(m[[0, 0]], 1.0);
        for j in 1..3 {
            assert_eq!(m[[0, j]], 0.0, "degenerate entries must be 0, not NaN");
            assert_eq!(m[[j, 0]], 0.0);
        }
        assert!(m.iter().all(|v| v.is_finite()));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `evaluate_checked` fails fast when the realized shape
    // disagrees with the shape used for estimation, and succeeds when it
    // matches.
    //
    // Given
    // -----
    // - A (60, 1, 3, 1) series; an expected shape of (80, 1, 3, 1) and the
    //   true shape.
    //
    // Expect
    // ------
    // - Mismatch → `Err(FcdError::ShapeMismatch)` carrying both shapes;
    //   match → `Ok`.
    fn evaluate_checked_guards_against_shape_mismatch() {
        // Arrange
        let series = sine_series(60, 3);
        let config = SlidingWindowConfig::new(15.0, 5.0).expect("valid config");
        let wrong = SeriesShape::new(80, 1, 3, 1).expect("shape should be valid");

        // Act
        let mismatch = FcdOutcome::evaluate_checked(&series, &config, &wrong);
        let matching = FcdOutcome::evaluate_checked(&series, &config, &series.shape());

        // Assert
        match mismatch {
            Err(FcdError::ShapeMismatch { expected, actual }) => {
                assert_eq!(expected, [80, 1, 3, 1]);
                assert_eq!(actual, [60, 1, 3, 1]);
            }
            other => panic!("expected ShapeMismatch error, got {other:?}"),
        }
        assert!(matching.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that the outcome carries the run metadata a host needs for
    // tagging: sw, sp, window grid, and the source label.
    //
    // Given
    // -----
    // - A series labeled "test-series", sw = 20, sp = 10.
    //
    // Expect
    // ------
    // - Accessors echo the configuration and the label.
    fn evaluate_outcome_carries_run_metadata() {
        // Arrange
        let series = sine_series(80, 3);
        let config = SlidingWindowConfig::new(20.0, 10.0).expect("valid config");

        // Act
        let outcome = FcdOutcome::evaluate(&series, &config).expect("evaluate should succeed");

        // Assert
        assert_eq!(outcome.sw(), 20.0);
        assert_eq!(outcome.sp(), 10.0);
        assert_eq!(outcome.grid().window_len, 20);
        assert_eq!(outcome.source(), Some("test-series"));
    }
}
