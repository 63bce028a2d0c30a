//! Input validation
//!
//! Pure checks applied at the boundary before any computation runs. Shape and
//! type errors (missing keys, wrong JSON types) are rejected earlier by serde;
//! these functions enforce value-level rules and produce client-facing
//! messages that name the offending index or field.

use jobdata::JobRecord;

use crate::error::{AnalyticsError, Result};
use crate::forecast::PredictionRequest;

/// Validate a batch of job records
///
/// Fails when the batch is empty, a category is blank, or a salary is
/// non-finite or negative.
pub fn validate_job_data(records: &[JobRecord]) -> Result<()> {
    if records.is_empty() {
        return Err(AnalyticsError::validation("job data cannot be empty"));
    }

    for (idx, job) in records.iter().enumerate() {
        if job.category.trim().is_empty() {
            return Err(AnalyticsError::validation(format!(
                "job at index {idx} has an empty 'category' field"
            )));
        }
        if !job.salary.is_finite() {
            return Err(AnalyticsError::validation(format!(
                "salary at index {idx} must be a number"
            )));
        }
        if job.salary < 0.0 {
            return Err(AnalyticsError::validation(format!(
                "salary at index {idx} must be non-negative"
            )));
        }
    }

    tracing::debug!(jobs = records.len(), "job data validation passed");
    Ok(())
}

/// Validate a prediction request
///
/// Fails when any series is empty or contains non-finite values, when a
/// salary is negative, or when `years` and `salaries` differ in length.
pub fn validate_prediction_input(request: &PredictionRequest) -> Result<()> {
    check_series(&request.years, "years")?;
    check_series(&request.salaries, "salaries")?;

    if request.salaries.iter().any(|&s| s < 0.0) {
        return Err(AnalyticsError::validation(
            "all salary values must be non-negative",
        ));
    }

    check_series(&request.future_years, "future_years")?;

    if request.years.len() != request.salaries.len() {
        return Err(AnalyticsError::validation(
            "'years' and 'salaries' must have the same length",
        ));
    }

    tracing::debug!("prediction input validation passed");
    Ok(())
}

fn check_series(values: &[f64], field: &str) -> Result<()> {
    if values.is_empty() {
        return Err(AnalyticsError::validation(format!(
            "'{field}' must be a non-empty list"
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AnalyticsError::validation(format!(
            "all values in '{field}' must be finite numbers"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(years: Vec<f64>, salaries: Vec<f64>, future_years: Vec<f64>) -> PredictionRequest {
        PredictionRequest {
            years,
            salaries,
            future_years,
        }
    }

    // ==================== Job data ====================

    #[test]
    fn test_job_data_valid() {
        let records = vec![
            JobRecord::new("Engineering", 100_000.0),
            JobRecord::new("Marketing", 80_000.0),
        ];
        assert!(validate_job_data(&records).is_ok());
    }

    #[test]
    fn test_job_data_empty() {
        let err = validate_job_data(&[]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_job_data_blank_category() {
        let records = vec![
            JobRecord::new("Engineering", 100_000.0),
            JobRecord::new("  ", 80_000.0),
        ];
        let err = validate_job_data(&records).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_job_data_nan_salary() {
        let records = vec![JobRecord::new("Engineering", f64::NAN)];
        let err = validate_job_data(&records).unwrap_err();
        assert!(err.to_string().contains("index 0"));
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn test_job_data_negative_salary() {
        let records = vec![
            JobRecord::new("Engineering", 100_000.0),
            JobRecord::new("Sales", -50_000.0),
        ];
        let err = validate_job_data(&records).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(err.to_string().contains("non-negative"));
    }

    // ==================== Prediction input ====================

    #[test]
    fn test_prediction_input_valid() {
        let req = request(
            vec![2020.0, 2021.0, 2022.0],
            vec![100_000.0, 110_000.0, 120_000.0],
            vec![2023.0, 2024.0],
        );
        assert!(validate_prediction_input(&req).is_ok());
    }

    #[test]
    fn test_prediction_input_empty_years() {
        let req = request(vec![], vec![100_000.0], vec![2023.0]);
        let err = validate_prediction_input(&req).unwrap_err();
        assert!(err.to_string().contains("'years'"));
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_prediction_input_empty_future_years() {
        let req = request(vec![2020.0], vec![100_000.0], vec![]);
        let err = validate_prediction_input(&req).unwrap_err();
        assert!(err.to_string().contains("'future_years'"));
    }

    #[test]
    fn test_prediction_input_negative_salary() {
        let req = request(vec![2020.0, 2021.0], vec![100_000.0, -50_000.0], vec![2023.0]);
        let err = validate_prediction_input(&req).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn test_prediction_input_non_finite() {
        let req = request(vec![2020.0, f64::INFINITY], vec![1.0, 2.0], vec![2023.0]);
        let err = validate_prediction_input(&req).unwrap_err();
        assert!(err.to_string().contains("finite"));
    }

    #[test]
    fn test_prediction_input_length_mismatch() {
        let req = request(
            vec![2020.0, 2021.0, 2022.0],
            vec![100_000.0, 110_000.0],
            vec![2023.0],
        );
        let err = validate_prediction_input(&req).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }

    #[test]
    fn test_validation_errors_are_validation_variant() {
        let req = request(vec![], vec![], vec![]);
        assert!(validate_prediction_input(&req).unwrap_err().is_validation());
        assert!(validate_job_data(&[]).unwrap_err().is_validation());
    }
}
