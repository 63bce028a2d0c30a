//! Job market analytics
//!
//! The computation core of the insights service, organized by concern:
//!
//! - [`validation`]: input checks for job data and prediction payloads
//! - [`stats`]: per-category and market-wide salary aggregates
//! - [`regression`]: linear, polynomial and tree regressors
//! - [`forecast`]: model selection and the fit-and-predict pipeline
//! - [`metrics`]: goodness-of-fit measures
//!
//! ## Example
//!
//! ```rust
//! use analytics::forecast::{Forecaster, ModelKind, PredictionRequest};
//!
//! let request = PredictionRequest {
//!     years: vec![2020.0, 2021.0, 2022.0],
//!     salaries: vec![100_000.0, 110_000.0, 120_000.0],
//!     future_years: vec![2023.0, 2024.0],
//! };
//!
//! let forecaster = Forecaster::new(ModelKind::Linear);
//! let forecast = forecaster.forecast(&request).unwrap();
//! assert_eq!(forecast.predictions.len(), 2);
//! ```

mod error;
pub mod forecast;
pub mod metrics;
pub mod regression;
pub mod stats;
pub mod validation;

pub use error::{AnalyticsError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::forecast::{Forecast, Forecaster, ModelKind, PredictionRequest};
    pub use crate::regression::{LinearRegression, PolynomialRegression, RegressionTree, Regressor};
    pub use crate::stats::{analyze_trends, summarize, CategoryStats, MarketStatistics};
    pub use crate::validation::{validate_job_data, validate_prediction_input};
    pub use crate::{AnalyticsError, Result};
}
