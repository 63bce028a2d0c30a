//! Goodness-of-fit metrics
//!
//! Standard measures for evaluating fitted regression models.

/// Coefficient of determination (R²)
///
/// Fraction of variance in `actual` explained by `predicted`. 1.0 is a
/// perfect fit; values can go negative for fits worse than the mean.
/// Returns 1.0 when `actual` has no variance and the fit is exact.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|&y| (y - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(&y, &p)| (y - p).powi(2))
        .sum();

    if ss_tot > 1e-10 {
        1.0 - ss_res / ss_tot
    } else if ss_res < 1e-10 {
        1.0
    } else {
        0.0
    }
}

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences. Lower is better; same scale as the data.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Root Mean Squared Error (RMSE)
///
/// Penalizes large errors more heavily than MAE. Same scale as the data.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mse = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;

    mse.sqrt()
}
