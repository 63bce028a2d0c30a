//! Linear regression of salary on year
//!
//! Ordinary least squares fit of y = intercept + slope * x.
//!
//! ## When to Use
//!
//! - Salaries follow a steady year-on-year trend
//! - Quick, interpretable baseline

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::metrics::r_squared;
use crate::regression::{check_observations, Regressor};
use crate::AnalyticsError;

/// Ordinary least squares regressor
///
/// Fits y = intercept + slope * x on explicit (x, y) pairs.
///
/// # Example
///
/// ```rust
/// use analytics::regression::{LinearRegression, Regressor};
///
/// let years = vec![2020.0, 2021.0, 2022.0];
/// let salaries = vec![100_000.0, 110_000.0, 120_000.0];
///
/// let mut model = LinearRegression::new();
/// model.fit(&years, &salaries).unwrap();
///
/// let forecast = model.predict(&[2023.0]).unwrap();
/// assert!((forecast[0] - 130_000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (salary change per year)
    slope: f64,
    /// R-squared on training data
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the slope (salary change per year)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predict at a single point
    pub fn predict_at(&self, x: f64) -> Result<f64> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(self.intercept + self.slope * x)
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        check_observations(x, y)?;

        let n = x.len() as f64;
        let sum_x: f64 = x.iter().sum();
        let sum_y: f64 = y.iter().sum();
        let sum_x2: f64 = x.iter().map(|v| v * v).sum();
        let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();

        // OLS formulas; a single point or identical x values degenerate to
        // a constant model at the mean
        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            self.slope = 0.0;
            self.intercept = sum_y / n;
        } else {
            self.slope = (n * sum_xy - sum_x * sum_y) / denominator;
            self.intercept = (sum_y - self.slope * sum_x) / n;
        }

        let predicted: Vec<f64> = x.iter().map(|&v| self.intercept + self.slope * v).collect();
        self.r_squared = r_squared(y, &predicted);
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, xs: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(xs.iter().map(|&x| self.intercept + self.slope * x).collect())
    }

    fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
