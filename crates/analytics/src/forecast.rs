//! Salary forecasting pipeline
//!
//! Validates a prediction request, fits the configured regression model on
//! the historical (year, salary) pairs, and evaluates it at the requested
//! future years.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::regression::{LinearRegression, PolynomialRegression, RegressionTree, Regressor};
use crate::validation::validate_prediction_input;

/// Default polynomial degree when none is configured
pub const DEFAULT_POLYNOMIAL_DEGREE: usize = 2;

/// Fixed depth bound for the decision-tree model, to avoid overfitting the
/// short series this service sees
pub const DEFAULT_TREE_MAX_DEPTH: usize = 5;

/// Which regression model the forecaster runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    Linear,
    Polynomial,
    DecisionTree,
}

impl ModelKind {
    /// Serialized / configuration name
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Polynomial => "polynomial",
            ModelKind::DecisionTree => "decision_tree",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(ModelKind::Linear),
            "polynomial" => Ok(ModelKind::Polynomial),
            "decision_tree" => Ok(ModelKind::DecisionTree),
            other => Err(AnalyticsError::InvalidParameter {
                name: "model_type".to_string(),
                reason: format!("unknown model '{other}', expected linear, polynomial or decision_tree"),
            }),
        }
    }
}

/// A salary forecasting request
///
/// `years` and `salaries` are the historical observation pairs;
/// `future_years` are the points to forecast. Unknown fields are rejected at
/// the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionRequest {
    pub years: Vec<f64>,
    pub salaries: Vec<f64>,
    pub future_years: Vec<f64>,
}

/// A completed forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Forecast values, aligned with the request's `future_years`
    pub predictions: Vec<f64>,
    /// Which model produced the forecast
    pub model_type: ModelKind,
    /// R² of the model on its training data
    pub confidence_score: f64,
}

/// Configured fit-and-predict engine
///
/// Note on tiny series: with only 2 training points the polynomial and tree
/// models fit the data exactly and report a near-perfect confidence score
/// that carries no information. That is inherent to the models, not a bug.
///
/// # Example
///
/// ```rust
/// use analytics::forecast::{Forecaster, ModelKind, PredictionRequest};
///
/// let request = PredictionRequest {
///     years: vec![2020.0, 2021.0, 2022.0],
///     salaries: vec![100_000.0, 110_000.0, 120_000.0],
///     future_years: vec![2023.0, 2024.0],
/// };
///
/// let forecast = Forecaster::new(ModelKind::Linear).forecast(&request).unwrap();
/// assert_eq!(forecast.model_type, ModelKind::Linear);
/// assert!((forecast.predictions[0] - 130_000.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Forecaster {
    model: ModelKind,
    polynomial_degree: usize,
    tree_max_depth: usize,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ModelKind::Linear)
    }
}

impl Forecaster {
    /// Create a forecaster for the given model with default parameters
    pub fn new(model: ModelKind) -> Self {
        Self {
            model,
            polynomial_degree: DEFAULT_POLYNOMIAL_DEGREE,
            tree_max_depth: DEFAULT_TREE_MAX_DEPTH,
        }
    }

    /// Override the polynomial degree
    pub fn with_polynomial_degree(mut self, degree: usize) -> Self {
        self.polynomial_degree = degree;
        self
    }

    /// Configured model kind
    pub fn model(&self) -> ModelKind {
        self.model
    }

    /// Validate, fit and forecast
    ///
    /// Validation errors propagate unchanged. Predictions come back in the
    /// same order as `future_years`.
    pub fn forecast(&self, request: &PredictionRequest) -> Result<Forecast> {
        validate_prediction_input(request)?;

        let (predictions, confidence_score) = match self.model {
            ModelKind::Linear => {
                let mut model = LinearRegression::new();
                self.run(&mut model, request)?
            }
            ModelKind::Polynomial => {
                let mut model = PolynomialRegression::new(self.polynomial_degree)?;
                self.run(&mut model, request)?
            }
            ModelKind::DecisionTree => {
                let mut model = RegressionTree::new(self.tree_max_depth)?;
                self.run(&mut model, request)?
            }
        };

        tracing::debug!(
            model = %self.model,
            points = request.years.len(),
            horizon = request.future_years.len(),
            confidence = confidence_score,
            "forecast computed"
        );

        Ok(Forecast {
            predictions,
            model_type: self.model,
            confidence_score,
        })
    }

    fn run<R: Regressor>(
        &self,
        model: &mut R,
        request: &PredictionRequest,
    ) -> Result<(Vec<f64>, f64)> {
        model.fit(&request.years, &request.salaries)?;
        let predictions = model.predict(&request.future_years)?;
        Ok((predictions, model.r_squared()))
    }
}
