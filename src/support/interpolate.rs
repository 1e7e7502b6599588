//! One-dimensional interpolation of tabulated property data.
//!
//! [`CubicSpline`] builds a piecewise-cubic interpolant through a fixed,
//! strictly increasing tabulation. The interpolant passes exactly through
//! every tabulated point, is C² continuous, and uses not-a-knot end
//! conditions (the third derivative is continuous across the second and
//! second-to-last knots).
//!
//! Queries outside the tabulated domain are clamped to the nearest bound
//! before evaluation, so a spline never extrapolates past validated data.
//!
//! # Example
//!
//! ```
//! use hybrid_motor_models::support::interpolate::CubicSpline;
//!
//! let spline = CubicSpline::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0],
//!     vec![0.0, 1.0, 8.0, 27.0, 64.0],
//! )
//! .unwrap();
//!
//! // A cubic is reproduced exactly.
//! assert!((spline.eval(2.5) - 15.625).abs() < 1e-9);
//!
//! // Queries are clamped to the table.
//! assert_eq!(spline.eval(-1.0), spline.eval(0.0));
//! assert_eq!(spline.eval(10.0), spline.eval(4.0));
//! ```

mod error;

pub use error::TableError;

/// Minimum number of tabulated points for a not-a-knot cubic spline.
pub const MIN_POINTS: usize = 4;

/// A not-a-knot cubic spline with clamped queries.
///
/// Construction validates the tabulation and solves for the second
/// derivatives at each knot once; evaluation is a binary search plus a
/// cubic polynomial, and never mutates the spline.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Second derivative of the interpolant at each knot.
    m: Vec<f64>,
}

impl CubicSpline {
    /// Builds a spline through the points `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the tables differ in length, hold fewer than
    /// [`MIN_POINTS`] points, contain non-finite values, or if `x` is not
    /// strictly increasing.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, TableError> {
        if x.len() != y.len() {
            return Err(TableError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }

        if x.len() < MIN_POINTS {
            return Err(TableError::TooFewPoints {
                len: x.len(),
                min: MIN_POINTS,
            });
        }

        if let Some(index) = x.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFiniteAbscissa { index });
        }

        if let Some(index) = y.iter().position(|v| !v.is_finite()) {
            return Err(TableError::NonFiniteOrdinate { index });
        }

        if let Some(index) = x.windows(2).position(|w| w[1] <= w[0]) {
            return Err(TableError::NotIncreasing { index: index + 1 });
        }

        let m = not_a_knot_second_derivatives(&x, &y)?;

        Ok(Self { x, y, m })
    }

    /// Returns the tabulated domain as `(min, max)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Evaluates the spline at `x`, clamping `x` to the tabulated domain.
    ///
    /// A `NaN` query evaluates to `NaN`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let (lo, hi) = self.domain();
        let x = x.clamp(lo, hi);

        // Index of the segment [x_i, x_{i+1}] containing x.
        let i = self
            .x
            .partition_point(|&knot| knot <= x)
            .saturating_sub(1)
            .min(self.x.len() - 2);

        let h = self.x[i + 1] - self.x[i];
        let a = self.x[i + 1] - x;
        let b = x - self.x[i];

        self.m[i] * a.powi(3) / (6.0 * h)
            + self.m[i + 1] * b.powi(3) / (6.0 * h)
            + (self.y[i] / h - self.m[i] * h / 6.0) * a
            + (self.y[i + 1] / h - self.m[i + 1] * h / 6.0) * b
    }
}

/// Solves for the knot second derivatives under not-a-knot end conditions.
///
/// The system is small (one row per tabulated point), so it is assembled
/// densely and solved by Gaussian elimination with partial pivoting.
fn not_a_knot_second_derivatives(x: &[f64], y: &[f64]) -> Result<Vec<f64>, TableError> {
    let n = x.len();
    let h: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();

    let mut a = vec![vec![0.0; n]; n];
    let mut rhs = vec![0.0; n];

    // Third derivative continuous across x[1].
    a[0][0] = h[1];
    a[0][1] = -(h[0] + h[1]);
    a[0][2] = h[0];

    // First derivative continuous at each interior knot.
    for i in 1..n - 1 {
        a[i][i - 1] = h[i - 1];
        a[i][i] = 2.0 * (h[i - 1] + h[i]);
        a[i][i + 1] = h[i];
        rhs[i] = 6.0 * ((y[i + 1] - y[i]) / h[i] - (y[i] - y[i - 1]) / h[i - 1]);
    }

    // Third derivative continuous across x[n - 2].
    a[n - 1][n - 3] = h[n - 2];
    a[n - 1][n - 2] = -(h[n - 3] + h[n - 2]);
    a[n - 1][n - 1] = h[n - 3];

    solve_dense(a, rhs).ok_or(TableError::Singular)
}

/// Solves `a · x = b` in place, returning `None` if `a` is singular.
fn solve_dense(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < f64::EPSILON * scale(&a[pivot]) {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }

    x.iter().all(|v| v.is_finite()).then_some(x)
}

fn scale(row: &[f64]) -> f64 {
    row.iter().fold(0.0_f64, |acc, v| acc.max(v.abs())).max(1.0)
}
