//! Study-time planner: shares a fixed number of hours across rated topics.
//!
//! The allocator is pure and deterministic; console input and the saved
//! report live in `input` and `report`. Python bindings expose the same
//! operations when built as an extension module.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDateTime;
use pyo3::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

pub mod allocator;
mod config;
pub mod input;
pub mod logging;
mod models;
pub mod report;
pub mod revision;

pub use allocator::{
    allocate_from_parallel, allocate_study_time, split_sessions, topic_weights,
    usable_study_hours, AllocationError,
};
pub use config::{PlannerConfig, ZeroWeightPolicy};
pub use input::{parse_break_count, InputError, PlannerInput, Prompter};
pub use models::{normalize_weak_topic, AllocationParams, ScheduleEntry, TopicRating, REVISION_LABEL};
pub use report::{format_report, report_file_name, write_report, ReportError};
pub use revision::calculate_revision_time;

/// Any failure of one planning run.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Allocation(#[from] AllocationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Hours of revision for the given familiarity scores.
///
/// # Raises
/// * ValueError if `familiarity` is empty
#[pyfunction]
#[pyo3(name = "calculate_revision_time", signature = (total_hours, familiarity, config=None))]
fn py_calculate_revision_time(
    total_hours: f64,
    familiarity: Vec<f64>,
    config: Option<PlannerConfig>,
) -> PyResult<f64> {
    let config = config.unwrap_or_default();
    calculate_revision_time(total_hours, &familiarity, &config)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Build a study schedule from parallel topic, familiarity and importance lists.
///
/// # Arguments
/// * `topics` - Topic names, unique, in schedule order
/// * `familiarity` - One 0-5 familiarity score per topic
/// * `importance` - One 0-5 importance score per topic
/// * `total_hours` - Total hours available
/// * `breaks` - Number of breaks
/// * `weak_topic` - Topic to boost; None, "" or "none" to skip
/// * `config` - Planner configuration (defaults if omitted)
///
/// # Returns
/// * List of ScheduleEntry, topic sessions first and "Revision" last
///
/// # Raises
/// * ValueError on invalid input, zero total weight under the "error" policy, or bad config
#[pyfunction]
#[pyo3(
    name = "allocate_study_time",
    signature = (topics, familiarity, importance, total_hours, breaks, weak_topic=None, config=None)
)]
#[allow(clippy::too_many_arguments)]
fn py_allocate_study_time(
    topics: Vec<String>,
    familiarity: Vec<f64>,
    importance: Vec<f64>,
    total_hours: f64,
    breaks: u32,
    weak_topic: Option<String>,
    config: Option<PlannerConfig>,
) -> PyResult<Vec<ScheduleEntry>> {
    let config = config.unwrap_or_default();
    let params = AllocationParams::new(total_hours, breaks, weak_topic);

    match allocate_from_parallel(&topics, &familiarity, &importance, &params, &config) {
        Ok(schedule) => Ok(schedule),
        Err(e) => Err(pyo3::exceptions::PyValueError::new_err(e.to_string())),
    }
}

/// Render the report text for a schedule.
#[pyfunction]
#[pyo3(name = "format_report", signature = (schedule, total_hours, breaks, config=None))]
fn py_format_report(
    schedule: Vec<ScheduleEntry>,
    total_hours: f64,
    breaks: u32,
    config: Option<PlannerConfig>,
) -> String {
    format_report(&schedule, total_hours, breaks, &config.unwrap_or_default())
}

/// Save report text under a timestamped name in `directory`.
///
/// # Raises
/// * OSError if the file cannot be written
#[pyfunction]
#[pyo3(name = "write_report")]
fn py_write_report(
    directory: PathBuf,
    timestamp: NaiveDateTime,
    report: &str,
) -> PyResult<PathBuf> {
    write_report(&directory, timestamp, report)
        .map_err(|e| pyo3::exceptions::PyOSError::new_err(e.to_string()))
}

/// Parse a break-count answer, using `default` for anything but digits.
#[pyfunction]
#[pyo3(name = "parse_break_count", signature = (raw, default=4))]
fn py_parse_break_count(raw: &str, default: u32) -> u32 {
    parse_break_count(raw, default)
}

/// The study_planner Python module.
#[pymodule]
fn study_planner(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<TopicRating>()?;
    m.add_class::<ScheduleEntry>()?;
    m.add_class::<AllocationParams>()?;
    m.add_class::<PlannerConfig>()?;
    m.add("REVISION_LABEL", REVISION_LABEL)?;

    // Planning
    m.add_function(wrap_pyfunction!(py_calculate_revision_time, m)?)?;
    m.add_function(wrap_pyfunction!(py_allocate_study_time, m)?)?;

    // Report and input helpers
    m.add_function(wrap_pyfunction!(py_format_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_write_report, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_break_count, m)?)?;

    Ok(())
}
