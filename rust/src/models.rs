//! Core data types for the study planner.

use pyo3::prelude::*;

/// Label of the trailing revision entry.
pub const REVISION_LABEL: &str = "Revision";

/// A topic with its self-reported ratings.
#[pyclass(frozen)]
#[derive(Clone, Debug, PartialEq)]
pub struct TopicRating {
    #[pyo3(get)]
    pub name: String,
    /// How well the topic is known (0 = not at all, 5 = expert)
    #[pyo3(get)]
    pub familiarity: f64,
    /// How much the topic matters (0 = irrelevant, 5 = critical)
    #[pyo3(get)]
    pub importance: f64,
}

#[pymethods]
impl TopicRating {
    #[new]
    pub fn new(name: String, familiarity: f64, importance: f64) -> Self {
        Self {
            name,
            familiarity,
            importance,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "TopicRating(name={:?}, familiarity={}, importance={})",
            self.name, self.familiarity, self.importance
        )
    }
}

/// One block of the produced schedule.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleEntry {
    /// Topic name, or `REVISION_LABEL` for the revision block
    #[pyo3(get, set)]
    pub label: String,
    #[pyo3(get, set)]
    pub hours: f64,
}

#[pymethods]
impl ScheduleEntry {
    #[new]
    pub fn new(label: String, hours: f64) -> Self {
        Self { label, hours }
    }

    /// Whole minutes in this entry, ties rounded to even.
    pub fn minutes(&self) -> i64 {
        (self.hours * 60.0).round_ties_even() as i64
    }

    /// Whether this is the trailing revision block.
    pub fn is_revision(&self) -> bool {
        self.label == REVISION_LABEL
    }

    fn __repr__(&self) -> String {
        format!("ScheduleEntry(label={:?}, hours={})", self.label, self.hours)
    }
}

/// Per-run inputs other than the topic ratings.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct AllocationParams {
    #[pyo3(get, set)]
    pub total_hours: f64,
    #[pyo3(get, set)]
    pub breaks: u32,
    /// Topic to boost; matched exactly against topic names
    #[pyo3(get, set)]
    pub weak_topic: Option<String>,
}

#[pymethods]
impl AllocationParams {
    #[new]
    #[pyo3(signature = (total_hours, breaks, weak_topic=None))]
    pub fn new(total_hours: f64, breaks: u32, weak_topic: Option<String>) -> Self {
        Self {
            total_hours,
            breaks,
            weak_topic: normalize_weak_topic(weak_topic.as_deref()),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AllocationParams(total_hours={}, breaks={}, weak_topic={:?})",
            self.total_hours, self.breaks, self.weak_topic
        )
    }
}

/// Map blank and "none" answers to no weak topic.
pub fn normalize_weak_topic(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_rounding() {
        assert_eq!(ScheduleEntry::new("Math".to_string(), 1.25).minutes(), 75);
        assert_eq!(ScheduleEntry::new("Math".to_string(), 0.01).minutes(), 1);
        // 0.0125 h = 0.75 min
        assert_eq!(ScheduleEntry::new("Math".to_string(), 0.0125).minutes(), 1);
        assert_eq!(ScheduleEntry::new("Math".to_string(), -0.5).minutes(), -30);
    }

    #[test]
    fn test_is_revision() {
        assert!(ScheduleEntry::new(REVISION_LABEL.to_string(), 2.0).is_revision());
        assert!(!ScheduleEntry::new("Physics".to_string(), 2.0).is_revision());
    }

    #[test]
    fn test_weak_topic_normalization() {
        assert_eq!(normalize_weak_topic(None), None);
        assert_eq!(normalize_weak_topic(Some("")), None);
        assert_eq!(normalize_weak_topic(Some("  ")), None);
        assert_eq!(normalize_weak_topic(Some("None")), None);
        assert_eq!(
            normalize_weak_topic(Some(" Physics ")),
            Some("Physics".to_string())
        );

        let params = AllocationParams::new(10.0, 4, Some("none".to_string()));
        assert_eq!(params.weak_topic, None);
    }
}
