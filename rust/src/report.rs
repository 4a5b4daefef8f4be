//! Plain-text schedule report and its timestamped file.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::PlannerConfig;
use crate::models::ScheduleEntry;

/// File name prefix for saved reports.
pub const REPORT_PREFIX: &str = "study_schedule_";

const RULE_WIDTH: usize = 40;

/// Errors that can occur while saving a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write schedule report: {0}")]
    Io(#[from] io::Error),
}

/// Report file name for a timestamp, with one-second resolution.
pub fn report_file_name(timestamp: NaiveDateTime) -> String {
    format!("{}{}.txt", REPORT_PREFIX, timestamp.format("%Y%m%d_%H%M%S"))
}

/// One schedule line, e.g. `Math: 1.25 hours (75 minutes)`.
pub fn format_entry(entry: &ScheduleEntry) -> String {
    format!(
        "{}: {:.2} hours ({} minutes)",
        entry.label,
        entry.hours,
        entry.minutes()
    )
}

/// Schedule lines between rules, then the study and break totals.
///
/// Shared by the saved report and the console echo.
pub fn format_schedule_body(
    schedule: &[ScheduleEntry],
    total_hours: f64,
    breaks: u32,
    config: &PlannerConfig,
) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::with_capacity(schedule.len() + 4);

    lines.push(rule.clone());
    lines.extend(schedule.iter().map(format_entry));
    lines.push(rule);
    lines.push(format!(
        "Total Study Time (excluding breaks and revision): {:.2} hours",
        total_hours - config.break_hours(breaks)
    ));
    lines.push(format!(
        "Total Break Time: {} minutes",
        config.break_minutes * f64::from(breaks)
    ));

    let mut body = lines.join("\n");
    body.push('\n');
    body
}

/// Full report text as saved to disk.
pub fn format_report(
    schedule: &[ScheduleEntry],
    total_hours: f64,
    breaks: u32,
    config: &PlannerConfig,
) -> String {
    format!(
        "Study Schedule:\n{}",
        format_schedule_body(schedule, total_hours, breaks, config)
    )
}

/// Write `report` to `<dir>/study_schedule_<timestamp>.txt`.
///
/// An existing report with the same timestamp is overwritten.
pub fn write_report(
    dir: &Path,
    timestamp: NaiveDateTime,
    report: &str,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_file_name(timestamp));
    let mut file = File::create(&path)?;
    file.write_all(report.as_bytes())?;
    file.flush()?;
    Ok(path)
}
