//! Revision-time estimation from average familiarity.
//!
//! Less familiar material earns a larger revision block:
//! - mean <= 2: 30% of total hours
//! - 2 < mean <= 4: 20%
//! - mean > 4: 10%
//!
//! Band edges and percentages come from `PlannerConfig`.

use crate::allocator::AllocationError;
use crate::config::PlannerConfig;

/// Arithmetic mean of the familiarity scores.
pub fn mean_familiarity(familiarity: &[f64]) -> Result<f64, AllocationError> {
    if familiarity.is_empty() {
        return Err(AllocationError::InvalidInput(
            "at least one familiarity score is required".to_string(),
        ));
    }
    if let Some(bad) = familiarity.iter().find(|f| !f.is_finite()) {
        return Err(AllocationError::InvalidInput(format!(
            "familiarity must be a finite number, got {}",
            bad
        )));
    }
    Ok(familiarity.iter().sum::<f64>() / familiarity.len() as f64)
}

/// Share of total hours reserved for revision at the given mean familiarity.
pub fn revision_percentage(mean_familiarity: f64, config: &PlannerConfig) -> f64 {
    if mean_familiarity <= config.low_familiarity_threshold {
        config.low_familiarity_revision
    } else if mean_familiarity <= config.moderate_familiarity_threshold {
        config.moderate_familiarity_revision
    } else {
        config.high_familiarity_revision
    }
}

/// Hours of revision to schedule after all topic sessions.
///
/// # Returns
/// * `Ok(hours)` = `total_hours * revision_percentage(mean(familiarity))`
/// * `Err(AllocationError::InvalidInput)` if `familiarity` is empty or holds a non-finite score
pub fn calculate_revision_time(
    total_hours: f64,
    familiarity: &[f64],
    config: &PlannerConfig,
) -> Result<f64, AllocationError> {
    let mean = mean_familiarity(familiarity)?;
    Ok(total_hours * revision_percentage(mean, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revision(total_hours: f64, familiarity: &[f64]) -> f64 {
        calculate_revision_time(total_hours, familiarity, &PlannerConfig::default()).unwrap()
    }

    #[test]
    fn test_low_familiarity_band() {
        assert!((revision(10.0, &[0.0, 1.0]) - 3.0).abs() < 1e-9);
        // mean exactly 2 stays in the low band
        assert!((revision(10.0, &[2.0, 2.0]) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_moderate_familiarity_band() {
        assert!((revision(10.0, &[1.0, 4.0]) - 2.0).abs() < 1e-9);
        assert!((revision(10.0, &[4.0]) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_familiarity_band() {
        assert!((revision(10.0, &[4.5, 5.0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_familiarity_rejected() {
        let result = calculate_revision_time(10.0, &[], &PlannerConfig::default());
        assert!(matches!(result, Err(AllocationError::InvalidInput(_))));
    }

    #[test]
    fn test_non_finite_familiarity_rejected() {
        let result = calculate_revision_time(10.0, &[1.0, f64::NAN], &PlannerConfig::default());
        assert!(matches!(result, Err(AllocationError::InvalidInput(_))));
    }

    #[test]
    fn test_non_increasing_in_mean() {
        let config = PlannerConfig::default();
        let mut previous = f64::INFINITY;
        for step in 0..=50 {
            let mean = step as f64 * 0.1;
            let hours = calculate_revision_time(8.0, &[mean], &config).unwrap();
            assert!(hours <= previous, "revision grew at mean {}", mean);
            assert!(hours <= 8.0 * 0.3 + 1e-9);
            previous = hours;
        }
    }

    #[test]
    fn test_custom_bands() {
        let config = PlannerConfig {
            low_familiarity_threshold: 1.0,
            low_familiarity_revision: 0.5,
            ..PlannerConfig::default()
        };
        assert_eq!(revision_percentage(1.0, &config), 0.5);
        assert_eq!(revision_percentage(1.5, &config), 0.2);
    }
}
