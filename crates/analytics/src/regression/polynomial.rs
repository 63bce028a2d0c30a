//! Polynomial regression of salary on year
//!
//! OLS on a power basis x^1..x^degree, solved through the normal equations.
//! Years are centered on their mean before expansion; raw calendar years
//! raised to higher powers would otherwise dwarf the linear terms and make
//! the system ill-conditioned.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::metrics::r_squared;
use crate::regression::{check_observations, Regressor};

/// Polynomial least-squares regressor
///
/// The requested degree is capped at `n_points - 1` during fitting so the
/// normal equations stay solvable. With 2 training points a quadratic
/// therefore degenerates to an exact line with R² = 1 — a known limitation
/// of fitting flexible models to tiny series, not an error.
///
/// # Example
///
/// ```rust
/// use analytics::regression::{PolynomialRegression, Regressor};
///
/// let x = vec![0.0, 1.0, 2.0, 3.0];
/// let y: Vec<f64> = x.iter().map(|v| 2.0 + 3.0 * v + v * v).collect();
///
/// let mut model = PolynomialRegression::new(2).unwrap();
/// model.fit(&x, &y).unwrap();
/// assert!(model.r_squared() > 0.999);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialRegression {
    /// Requested degree
    degree: usize,
    /// Coefficients in ascending power of (x - x_mean)
    coefficients: Vec<f64>,
    /// Centering offset applied to x before expansion
    x_mean: f64,
    /// R-squared on training data
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl PolynomialRegression {
    /// Create a new polynomial regression model
    ///
    /// # Arguments
    ///
    /// * `degree` - Highest power of the expanded basis, at least 1
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 1 {
            return Err(AnalyticsError::InvalidParameter {
                name: "degree".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            degree,
            coefficients: Vec::new(),
            x_mean: 0.0,
            r_squared: 0.0,
            fitted: false,
        })
    }

    /// Requested degree
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Fitted coefficients, ascending power of the centered variable
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    fn eval(&self, x: f64) -> f64 {
        let centered = x - self.x_mean;
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, &coeff)| coeff * centered.powi(power as i32))
            .sum()
    }
}

impl Regressor for PolynomialRegression {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_observations(x, y)?;

        let n = x.len();
        // Cap so the normal equations stay square-solvable
        let degree = self.degree.min(n - 1);

        self.x_mean = x.iter().sum::<f64>() / n as f64;
        let centered: Vec<f64> = x.iter().map(|&v| v - self.x_mean).collect();

        if degree == 0 {
            self.coefficients = vec![y.iter().sum::<f64>() / n as f64];
        } else {
            // Normal equations A^T A beta = A^T y over the power basis
            let cols = degree + 1;
            let mut ata = vec![vec![0.0; cols]; cols];
            let mut aty = vec![0.0; cols];

            for (i, &xi) in centered.iter().enumerate() {
                let mut powers = Vec::with_capacity(cols);
                let mut p = 1.0;
                for _ in 0..cols {
                    powers.push(p);
                    p *= xi;
                }

                for r in 0..cols {
                    aty[r] += powers[r] * y[i];
                    for c in 0..cols {
                        ata[r][c] += powers[r] * powers[c];
                    }
                }
            }

            self.coefficients = solve(ata, aty)?;
        }

        let predicted: Vec<f64> = x.iter().map(|&v| self.eval(v)).collect();
        self.r_squared = r_squared(y, &predicted);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, xs: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(xs.iter().map(|&x| self.eval(x)).collect())
    }

    fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

/// Gaussian elimination with partial pivoting
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&r1, &r2| {
                a[r1][col]
                    .abs()
                    .partial_cmp(&a[r2][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);

        if a[pivot][col].abs() < 1e-12 {
            return Err(AnalyticsError::Numerical(
                "singular normal equations in polynomial fit".to_string(),
            ));
        }

        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut solution = vec![0.0; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for col in (row + 1)..n {
            sum -= a[row][col] * solution[col];
        }
        solution[row] = sum / a[row][row];
    }

    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_parabola_recovery() {
        let x: Vec<f64> = (0..8).map(|v| v as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 5.0 - 2.0 * v + 0.5 * v * v).collect();

        let mut model = PolynomialRegression::new(2).unwrap();
        model.fit(&x, &y).unwrap();

        assert!(model.r_squared() > 0.999_999);

        let forecast = model.predict(&[10.0]).unwrap();
        assert!((forecast[0] - (5.0 - 20.0 + 50.0)).abs() < 1e-6);
    }

    #[test]
    fn test_degree_one_matches_linear_trend() {
        let x = vec![2020.0, 2021.0, 2022.0];
        let y = vec![100_000.0, 110_000.0, 120_000.0];

        let mut model = PolynomialRegression::new(1).unwrap();
        model.fit(&x, &y).unwrap();

        let forecast = model.predict(&[2023.0]).unwrap();
        assert!((forecast[0] - 130_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_two_points_degenerate_but_fit() {
        // Quadratic on 2 points caps to an exact line: the documented
        // near-perfect-but-meaningless case
        let mut model = PolynomialRegression::new(2).unwrap();
        model.fit(&[2020.0, 2021.0], &[100.0, 120.0]).unwrap();

        assert!((model.r_squared() - 1.0).abs() < 1e-9);
        let forecast = model.predict(&[2022.0]).unwrap();
        assert!((forecast[0] - 140.0).abs() < 1e-6);
    }

    #[test]
    fn test_large_calendar_years_stay_conditioned() {
        let x = vec![2018.0, 2019.0, 2020.0, 2021.0, 2022.0, 2023.0];
        let y = vec![80.0, 85.0, 93.0, 104.0, 118.0, 135.0];

        let mut model = PolynomialRegression::new(3).unwrap();
        model.fit(&x, &y).unwrap();

        assert!(model.r_squared() > 0.99);
        assert!(model.predict(&[2024.0]).unwrap()[0].is_finite());
    }

    #[test]
    fn test_zero_degree_rejected() {
        let err = PolynomialRegression::new(0).unwrap_err();
        assert!(matches!(err, AnalyticsError::InvalidParameter { .. }));
    }

    #[test]
    fn test_duplicate_x_is_singular() {
        let mut model = PolynomialRegression::new(2).unwrap();
        let result = model.fit(&[2020.0, 2020.0, 2020.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(AnalyticsError::Numerical(_))));
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = PolynomialRegression::new(2).unwrap();
        assert_eq!(model.predict(&[1.0]).unwrap_err(), AnalyticsError::NotFitted);
    }
}
