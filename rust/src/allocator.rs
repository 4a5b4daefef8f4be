//! Weighted study-time allocation.
//!
//! Turns topic ratings and a study budget into an ordered list of capped
//! sessions followed by a single revision block:
//! 1. Reserve revision time based on mean familiarity
//! 2. Subtract revision and break time from the total to get usable hours
//! 3. Weight each topic by `(5 - familiarity) + importance`, boosting the weak topic
//! 4. Share usable hours in proportion to weight
//! 5. Split any share longer than the session cap into capped sessions

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::config::{PlannerConfig, ZeroWeightPolicy};
use crate::models::{AllocationParams, ScheduleEntry, TopicRating, REVISION_LABEL};
use crate::revision::calculate_revision_time;
use crate::{log_debug, log_steps, log_summary};

/// Highest value on the familiarity scale.
const MAX_FAMILIARITY: f64 = 5.0;

/// Most capped sessions a single plan may contain.
pub const MAX_SESSIONS: f64 = 10_000.0;

/// Errors that can occur during allocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Topic weights sum to zero, cannot share study hours")]
    DivisionUndefined,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Hours left for topic sessions once revision and breaks are taken out.
///
/// Not clamped: an oversubscribed budget comes back negative.
pub fn usable_study_hours(
    total_hours: f64,
    revision_time: f64,
    breaks: u32,
    config: &PlannerConfig,
) -> f64 {
    total_hours - revision_time - config.break_hours(breaks)
}

/// Compute one weight per topic, in input order.
///
/// A weak topic that matches a topic name gets `boost * max(weights)` added,
/// with the maximum taken before boosting.
pub fn topic_weights(topics: &[TopicRating], weak_topic: Option<&str>, boost: f64) -> Vec<f64> {
    let mut weights: Vec<f64> = topics
        .iter()
        .map(|t| (MAX_FAMILIARITY - t.familiarity) + t.importance)
        .collect();

    if let Some(weak) = weak_topic {
        if let Some(idx) = topics.iter().position(|t| t.name == weak) {
            let max_weight = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            weights[idx] += max_weight * boost;
        }
    }

    weights
}

/// Share `usable_hours` across topics in proportion to `weights`.
fn distribute_hours(
    weights: &[f64],
    usable_hours: f64,
    policy: ZeroWeightPolicy,
    verbosity: u8,
) -> Result<Vec<f64>, AllocationError> {
    let total_weight: f64 = weights.iter().sum();

    if total_weight == 0.0 {
        return match policy {
            ZeroWeightPolicy::Error => Err(AllocationError::DivisionUndefined),
            ZeroWeightPolicy::EqualSplit => {
                log_summary!(
                    verbosity,
                    "All topic weights are zero; splitting {:.2}h equally across {} topics",
                    usable_hours,
                    weights.len()
                );
                let share = usable_hours / weights.len() as f64;
                Ok(vec![share; weights.len()])
            }
        };
    }

    Ok(weights
        .iter()
        .map(|w| (w / total_weight) * usable_hours)
        .collect())
}

/// Append `hours` of `label` to `out` as sessions no longer than `cap`.
///
/// Full sessions are exactly `cap`; the remainder is rounded to two decimals
/// and dropped if that leaves nothing positive.
pub fn split_sessions(
    label: &str,
    hours: f64,
    cap: f64,
    out: &mut Vec<ScheduleEntry>,
    verbosity: u8,
) {
    // remainder lands in (0, cap] for any hours > cap
    let full_sessions = if hours > cap {
        ((hours / cap).ceil() - 1.0).max(0.0)
    } else {
        0.0
    };
    let remaining = hours - full_sessions * cap;
    log_debug!(
        verbosity,
        "{}: {} full {:.2}h sessions, {:.2}h left",
        label,
        full_sessions,
        cap,
        remaining
    );

    out.extend(
        std::iter::repeat_with(|| ScheduleEntry::new(label.to_string(), cap))
            .take(full_sessions as usize),
    );

    let remainder = round2(remaining);
    if remainder > 0.0 {
        out.push(ScheduleEntry::new(label.to_string(), remainder));
    }
}

fn validate_config(config: &PlannerConfig) -> Result<ZeroWeightPolicy, AllocationError> {
    if !(config.max_session_hours.is_finite() && config.max_session_hours > 0.0) {
        return Err(AllocationError::InvalidConfig(format!(
            "max_session_hours must be positive, got {}",
            config.max_session_hours
        )));
    }
    config.zero_weight_mode().ok_or_else(|| {
        AllocationError::InvalidConfig(format!(
            "unknown zero weight policy: {}",
            config.zero_weight_policy
        ))
    })
}

fn validate_inputs(topics: &[TopicRating], params: &AllocationParams) -> Result<(), AllocationError> {
    if topics.is_empty() {
        return Err(AllocationError::InvalidInput(
            "at least one topic is required".to_string(),
        ));
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for topic in topics {
        if topic.name.trim().is_empty() {
            return Err(AllocationError::InvalidInput(
                "topic names must not be empty".to_string(),
            ));
        }
        if !seen.insert(topic.name.as_str()) {
            return Err(AllocationError::InvalidInput(format!(
                "duplicate topic: {}",
                topic.name
            )));
        }
        if !topic.familiarity.is_finite() || !topic.importance.is_finite() {
            return Err(AllocationError::InvalidInput(format!(
                "ratings for '{}' must be finite numbers",
                topic.name
            )));
        }
    }

    if !(params.total_hours.is_finite() && params.total_hours > 0.0) {
        return Err(AllocationError::InvalidInput(format!(
            "total hours must be a positive number, got {}",
            params.total_hours
        )));
    }

    Ok(())
}

fn validate_session_count(
    params: &AllocationParams,
    config: &PlannerConfig,
) -> Result<(), AllocationError> {
    let sessions = params.total_hours / config.max_session_hours;
    if sessions > MAX_SESSIONS {
        return Err(AllocationError::InvalidInput(format!(
            "{} hours would need about {:.0} sessions of {}h, the limit is {}",
            params.total_hours, sessions, config.max_session_hours, MAX_SESSIONS
        )));
    }
    Ok(())
}

/// Build a study schedule from topic ratings.
///
/// # Arguments
/// * `topics` - Topics in the order they should appear in the schedule
/// * `params` - Total hours, break count and optional weak topic
/// * `config` - Session cap, break length, revision bands and policies
///
/// # Returns
/// * Topic sessions in input order followed by one `"Revision"` entry
///
/// # Errors
/// * `InvalidInput` for empty, duplicate or non-finite topics, a non-positive total,
///   or a total needing more than `MAX_SESSIONS` sessions
/// * `DivisionUndefined` if weights sum to zero under the `"error"` policy
/// * `InvalidConfig` for a non-positive session cap or unknown policy name
pub fn allocate_study_time(
    topics: &[TopicRating],
    params: &AllocationParams,
    config: &PlannerConfig,
) -> Result<Vec<ScheduleEntry>, AllocationError> {
    let policy = validate_config(config)?;
    validate_inputs(topics, params)?;
    validate_session_count(params, config)?;
    let verbosity = config.verbosity;

    let familiarity: Vec<f64> = topics.iter().map(|t| t.familiarity).collect();
    let revision_time = calculate_revision_time(params.total_hours, &familiarity, config)?;
    let study_hours = usable_study_hours(params.total_hours, revision_time, params.breaks, config);

    log_summary!(
        verbosity,
        "Revision {:.2}h of {:.2}h total; {:.2}h left for {} topics after {} breaks",
        revision_time,
        params.total_hours,
        study_hours,
        topics.len(),
        params.breaks
    );
    if study_hours < 0.0 {
        log_summary!(
            verbosity,
            "Warning: revision and breaks exceed the total by {:.2}h; no topic sessions fit",
            -study_hours
        );
    }

    let weights = topic_weights(topics, params.weak_topic.as_deref(), config.weak_topic_boost);
    let hours = distribute_hours(&weights, study_hours, policy, verbosity)?;

    let mut schedule: Vec<ScheduleEntry> = Vec::with_capacity(topics.len() + 1);
    for ((topic, weight), topic_hours) in topics.iter().zip(&weights).zip(hours) {
        log_steps!(
            verbosity,
            "{}: weight {:.2} -> {:.2}h",
            topic.name,
            weight,
            topic_hours
        );
        split_sessions(
            &topic.name,
            topic_hours,
            config.max_session_hours,
            &mut schedule,
            verbosity,
        );
    }

    schedule.push(ScheduleEntry::new(
        REVISION_LABEL.to_string(),
        round2(revision_time),
    ));
    Ok(schedule)
}

/// Build a study schedule from parallel name/familiarity/importance slices.
///
/// Fails with `InvalidInput` if the slices differ in length.
pub fn allocate_from_parallel(
    names: &[String],
    familiarity: &[f64],
    importance: &[f64],
    params: &AllocationParams,
    config: &PlannerConfig,
) -> Result<Vec<ScheduleEntry>, AllocationError> {
    if names.len() != familiarity.len() || names.len() != importance.len() {
        return Err(AllocationError::InvalidInput(format!(
            "got {} topics, {} familiarity scores and {} importance scores",
            names.len(),
            familiarity.len(),
            importance.len()
        )));
    }

    let topics: Vec<TopicRating> = names
        .iter()
        .zip(familiarity)
        .zip(importance)
        .map(|((name, &fam), &imp)| TopicRating::new(name.clone(), fam, imp))
        .collect();

    allocate_study_time(&topics, params, config)
}
