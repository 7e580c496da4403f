//! Descriptive statistics over numeric slices
//!
//! Standard deviation and variance use the sample (n-1 denominator)
//! formulas and need at least two points; the rest only require a
//! non-empty dataset.

use crate::error::{CalcError, Result};

/// Arithmetic mean
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CalcError::empty_input("mean of an empty dataset"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median (average of the two middle values for even-sized input)
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CalcError::empty_input("median of an empty dataset"));
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Sample variance (n-1 denominator)
pub fn variance(values: &[f64]) -> Result<f64> {
    if values.len() < 2 {
        return Err(CalcError::insufficient_data(
            "variance requires at least 2 values",
        ));
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation (n-1 denominator)
pub fn std_dev(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}

/// Largest value
pub fn max(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CalcError::empty_input("maximum of an empty dataset"));
    }
    Ok(values.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
}

/// Smallest value
pub fn min(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(CalcError::empty_input("minimum of an empty dataset"));
    }
    Ok(values.iter().cloned().fold(f64::INFINITY, f64::min))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_median() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(mean(&values).unwrap(), 3.0);
        assert_eq!(median(&values).unwrap(), 3.0);
    }

    #[test]
    fn test_median_even() {
        let values = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&values).unwrap(), 2.5);
    }

    #[test]
    fn test_sample_variance_and_std_dev() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((variance(&values).unwrap() - 2.5).abs() < 1e-9);
        assert!((std_dev(&values).unwrap() - 1.5811).abs() < 1e-4);
    }

    #[test]
    fn test_max_min() {
        let values = vec![3.0, -7.0, 12.0, 0.5];
        assert_eq!(max(&values).unwrap(), 12.0);
        assert_eq!(min(&values).unwrap(), -7.0);
    }

    #[test]
    fn test_empty_dataset() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(mean(&empty), Err(CalcError::EmptyInput(_))));
        assert!(matches!(median(&empty), Err(CalcError::EmptyInput(_))));
        assert!(matches!(max(&empty), Err(CalcError::EmptyInput(_))));
        assert!(matches!(min(&empty), Err(CalcError::EmptyInput(_))));
    }

    #[test]
    fn test_insufficient_data() {
        let single = vec![42.0];
        assert!(matches!(
            variance(&single),
            Err(CalcError::InsufficientData(_))
        ));
        assert!(matches!(
            std_dev(&single),
            Err(CalcError::InsufficientData(_))
        ));
    }
}
