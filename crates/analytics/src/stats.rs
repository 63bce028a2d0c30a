//! Salary statistics
//!
//! Groups job records by category and computes descriptive statistics, plus a
//! market-wide aggregate. Output depends only on the multiset of records, not
//! on their order.

use std::collections::BTreeMap;

use jobdata::JobRecord;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::validation::validate_job_data;

/// Descriptive statistics for one job category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Mean salary
    pub average_salary: f64,
    /// Median salary
    pub median_salary: f64,
    /// Lowest salary
    pub min_salary: f64,
    /// Highest salary
    pub max_salary: f64,
    /// Population standard deviation
    pub std_deviation: f64,
    /// Number of records in the category
    pub job_count: usize,
}

/// Inclusive salary bounds across the whole market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Market-wide aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    /// Total number of records
    pub total_jobs: usize,
    /// Number of distinct categories
    pub total_categories: usize,
    /// Distinct category names, sorted
    pub categories: Vec<String>,
    /// Mean salary over all records
    pub overall_average_salary: f64,
    /// Median salary over all records
    pub overall_median_salary: f64,
    /// Salary bounds over all records
    pub salary_range: SalaryRange,
}

/// Group records by category and compute per-category statistics
///
/// Validates input first and propagates its error unchanged. One entry per
/// distinct category; `job_count` over all entries sums to the input length.
pub fn analyze_trends(records: &[JobRecord]) -> Result<BTreeMap<String, CategoryStats>> {
    validate_job_data(records)?;

    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for job in records {
        groups
            .entry(job.category.clone())
            .or_default()
            .push(job.salary);
    }

    let trends = groups
        .into_iter()
        .map(|(category, salaries)| (category, category_stats(salaries)))
        .collect();

    Ok(trends)
}

/// Compute the market-wide aggregate
///
/// Validates input first and propagates its error unchanged.
pub fn summarize(records: &[JobRecord]) -> Result<MarketStatistics> {
    validate_job_data(records)?;

    let mut salaries: Vec<f64> = records.iter().map(|j| j.salary).collect();
    salaries.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mut categories: Vec<String> = records.iter().map(|j| j.category.clone()).collect();
    categories.sort_unstable();
    categories.dedup();

    Ok(MarketStatistics {
        total_jobs: records.len(),
        total_categories: categories.len(),
        overall_average_salary: mean(&salaries),
        overall_median_salary: median_of_sorted(&salaries),
        salary_range: SalaryRange {
            min: salaries[0],
            max: salaries[salaries.len() - 1],
        },
        categories,
    })
}

fn category_stats(mut salaries: Vec<f64>) -> CategoryStats {
    salaries.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let average = mean(&salaries);
    let variance = salaries
        .iter()
        .map(|s| (s - average).powi(2))
        .sum::<f64>()
        / salaries.len() as f64;

    CategoryStats {
        average_salary: average,
        median_salary: median_of_sorted(&salaries),
        min_salary: salaries[0],
        max_salary: salaries[salaries.len() - 1],
        std_deviation: variance.sqrt(),
        job_count: salaries.len(),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Engineering", 100_000.0),
            JobRecord::new("Engineering", 120_000.0),
            JobRecord::new("Marketing", 80_000.0),
        ]
    }

    // ==================== analyze_trends ====================

    #[test]
    fn test_analyze_trends_worked_example() {
        let trends = analyze_trends(&sample_records()).unwrap();

        let engineering = &trends["Engineering"];
        assert_eq!(engineering.average_salary, 110_000.0);
        assert_eq!(engineering.median_salary, 110_000.0);
        assert_eq!(engineering.min_salary, 100_000.0);
        assert_eq!(engineering.max_salary, 120_000.0);
        assert_eq!(engineering.std_deviation, 10_000.0);
        assert_eq!(engineering.job_count, 2);

        let marketing = &trends["Marketing"];
        assert_eq!(marketing.average_salary, 80_000.0);
        assert_eq!(marketing.job_count, 1);
        assert_eq!(marketing.std_deviation, 0.0);
    }

    #[test]
    fn test_analyze_trends_one_entry_per_category() {
        let trends = analyze_trends(&sample_records()).unwrap();
        assert_eq!(trends.len(), 2);
    }

    #[test]
    fn test_analyze_trends_job_count_sums_to_input_length() {
        let records = sample_records();
        let trends = analyze_trends(&records).unwrap();
        let total: usize = trends.values().map(|s| s.job_count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_analyze_trends_order_independent() {
        let mut reversed = sample_records();
        reversed.reverse();

        let forward = analyze_trends(&sample_records()).unwrap();
        let backward = analyze_trends(&reversed).unwrap();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_analyze_trends_propagates_validation_error() {
        let err = analyze_trends(&[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_median_even_group() {
        let records = vec![
            JobRecord::new("Sales", 40_000.0),
            JobRecord::new("Sales", 60_000.0),
            JobRecord::new("Sales", 50_000.0),
            JobRecord::new("Sales", 90_000.0),
        ];
        let trends = analyze_trends(&records).unwrap();
        assert_eq!(trends["Sales"].median_salary, 55_000.0);
    }

    // ==================== summarize ====================

    #[test]
    fn test_summarize() {
        let stats = summarize(&sample_records()).unwrap();

        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.total_categories, 2);
        assert_eq!(stats.categories, vec!["Engineering", "Marketing"]);
        assert_eq!(stats.overall_average_salary, 100_000.0);
        assert_eq!(stats.overall_median_salary, 100_000.0);
        assert_eq!(stats.salary_range.min, 80_000.0);
        assert_eq!(stats.salary_range.max, 120_000.0);
    }

    #[test]
    fn test_summarize_propagates_validation_error() {
        let err = summarize(&[]).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serialized_field_names() {
        let trends = analyze_trends(&sample_records()).unwrap();
        let json = serde_json::to_value(&trends).unwrap();

        let engineering = &json["Engineering"];
        assert!(engineering.get("average_salary").is_some());
        assert!(engineering.get("median_salary").is_some());
        assert!(engineering.get("std_deviation").is_some());
        assert!(engineering.get("job_count").is_some());
    }
}
