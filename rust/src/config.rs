//! Configuration types for the study planner.

use pyo3::prelude::*;

/// Fallback policy when every topic weight sums to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZeroWeightPolicy {
    /// Give every topic the same share of the usable hours.
    EqualSplit,
    /// Refuse to allocate.
    Error,
}

impl ZeroWeightPolicy {
    /// Parse a policy name as accepted by `PlannerConfig::zero_weight_policy`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "equal_split" => Some(Self::EqualSplit),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Allocation constants, revision bands and policies.
#[pyclass]
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Longest single study block in hours; longer allocations are split
    #[pyo3(get, set)]
    pub max_session_hours: f64,
    /// Length of one break in minutes
    #[pyo3(get, set)]
    pub break_minutes: f64,
    /// Break count used when the answer is not a non-negative integer
    #[pyo3(get, set)]
    pub default_break_count: u32,
    /// Mean familiarity at or below which the low band applies
    #[pyo3(get, set)]
    pub low_familiarity_threshold: f64,
    /// Mean familiarity at or below which the moderate band applies
    #[pyo3(get, set)]
    pub moderate_familiarity_threshold: f64,
    /// Revision share of total hours for unfamiliar material
    #[pyo3(get, set)]
    pub low_familiarity_revision: f64,
    /// Revision share of total hours for moderately familiar material
    #[pyo3(get, set)]
    pub moderate_familiarity_revision: f64,
    /// Revision share of total hours for familiar material
    #[pyo3(get, set)]
    pub high_familiarity_revision: f64,
    /// Fraction of the largest weight added to the weak topic
    #[pyo3(get, set)]
    pub weak_topic_boost: f64,
    /// Zero weight-sum policy: "equal_split" or "error"
    #[pyo3(get, set)]
    pub zero_weight_policy: String,
    /// Verbosity level: 0=silent, 1=summary, 2=steps, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_session_hours: 2.0,
            break_minutes: 15.0,
            default_break_count: 4,
            low_familiarity_threshold: 2.0,
            moderate_familiarity_threshold: 4.0,
            low_familiarity_revision: 0.3,
            moderate_familiarity_revision: 0.2,
            high_familiarity_revision: 0.1,
            weak_topic_boost: 0.5,
            zero_weight_policy: "equal_split".to_string(),
            verbosity: 0,
        }
    }
}

#[pymethods]
impl PlannerConfig {
    #[new]
    #[pyo3(signature = (
        max_session_hours=None,
        break_minutes=None,
        default_break_count=None,
        low_familiarity_threshold=None,
        moderate_familiarity_threshold=None,
        low_familiarity_revision=None,
        moderate_familiarity_revision=None,
        high_familiarity_revision=None,
        weak_topic_boost=None,
        zero_weight_policy=None,
        verbosity=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        max_session_hours: Option<f64>,
        break_minutes: Option<f64>,
        default_break_count: Option<u32>,
        low_familiarity_threshold: Option<f64>,
        moderate_familiarity_threshold: Option<f64>,
        low_familiarity_revision: Option<f64>,
        moderate_familiarity_revision: Option<f64>,
        high_familiarity_revision: Option<f64>,
        weak_topic_boost: Option<f64>,
        zero_weight_policy: Option<String>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            max_session_hours: max_session_hours.unwrap_or(defaults.max_session_hours),
            break_minutes: break_minutes.unwrap_or(defaults.break_minutes),
            default_break_count: default_break_count.unwrap_or(defaults.default_break_count),
            low_familiarity_threshold: low_familiarity_threshold
                .unwrap_or(defaults.low_familiarity_threshold),
            moderate_familiarity_threshold: moderate_familiarity_threshold
                .unwrap_or(defaults.moderate_familiarity_threshold),
            low_familiarity_revision: low_familiarity_revision
                .unwrap_or(defaults.low_familiarity_revision),
            moderate_familiarity_revision: moderate_familiarity_revision
                .unwrap_or(defaults.moderate_familiarity_revision),
            high_familiarity_revision: high_familiarity_revision
                .unwrap_or(defaults.high_familiarity_revision),
            weak_topic_boost: weak_topic_boost.unwrap_or(defaults.weak_topic_boost),
            zero_weight_policy: zero_weight_policy.unwrap_or(defaults.zero_weight_policy),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "PlannerConfig(max_session_hours={}, break_minutes={}, zero_weight_policy={:?})",
            self.max_session_hours, self.break_minutes, self.zero_weight_policy
        )
    }
}

impl PlannerConfig {
    /// Hours spent on `breaks` breaks.
    pub fn break_hours(&self, breaks: u32) -> f64 {
        self.break_minutes * f64::from(breaks) / 60.0
    }

    /// Resolve the configured zero weight-sum policy, if the name is known.
    pub fn zero_weight_mode(&self) -> Option<ZeroWeightPolicy> {
        ZeroWeightPolicy::from_name(&self.zero_weight_policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.max_session_hours, 2.0);
        assert_eq!(config.break_minutes, 15.0);
        assert_eq!(config.default_break_count, 4);
        assert_eq!(config.zero_weight_mode(), Some(ZeroWeightPolicy::EqualSplit));
    }

    #[test]
    fn test_break_hours() {
        let config = PlannerConfig::default();
        assert_eq!(config.break_hours(0), 0.0);
        assert_eq!(config.break_hours(4), 1.0);
        assert_eq!(config.break_hours(6), 1.5);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(
            ZeroWeightPolicy::from_name("error"),
            Some(ZeroWeightPolicy::Error)
        );
        assert_eq!(ZeroWeightPolicy::from_name("round_robin"), None);
    }
}
