//! Console input: answer parsing and the interactive question sequence.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::config::PlannerConfig;
use crate::models::{AllocationParams, TopicRating};

/// Errors raised while reading or parsing answers.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input: no topics entered")]
    NoTopics,
    #[error("Invalid input: empty topic name in {0:?}")]
    EmptyTopic(String),
    #[error("Invalid input: expected a number for {field}, got {value:?}")]
    NotANumber { field: String, value: String },
    #[error("Invalid input: input ended before {0} was answered")]
    UnexpectedEof(String),
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Everything the allocator needs from one interactive session.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannerInput {
    pub topics: Vec<TopicRating>,
    pub params: AllocationParams,
}

/// Split a comma-separated topic list, trimming each name.
pub fn parse_topics(line: &str) -> Result<Vec<String>, InputError> {
    if line.trim().is_empty() {
        return Err(InputError::NoTopics);
    }
    line.split(',')
        .map(|name| {
            let name = name.trim();
            if name.is_empty() {
                Err(InputError::EmptyTopic(line.trim().to_string()))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

/// Parse a real-valued answer such as a rating or an hour count.
pub fn parse_number(field: &str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber {
            field: field.to_string(),
            value: raw.trim().to_string(),
        })
}

/// Parse a break count, falling back to `default` unless the answer is all ASCII digits.
///
/// Surrounding whitespace counts as not-a-literal, so `" 3"` gives the default.
/// Digit strings too large for `u32` saturate at `u32::MAX`.
pub fn parse_break_count(raw: &str, default: u32) -> u32 {
    let answer = raw.trim_end_matches(['\r', '\n']);
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return default;
    }
    answer.parse().unwrap_or(u32::MAX)
}

/// Asks the planner's questions over any line reader and writer.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one line, without its line ending.
    fn ask(&mut self, prompt: &str, what: &str) -> Result<String, InputError> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof(what.to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Run the full question sequence.
    pub fn collect(&mut self, config: &PlannerConfig) -> Result<PlannerInput, InputError> {
        let names = parse_topics(&self.ask("Enter your topics (comma-separated): ", "the topic list")?)?;

        let mut topics = Vec::with_capacity(names.len());
        for name in names {
            let familiarity_field = format!("familiarity of '{}'", name);
            let familiarity = parse_number(
                &familiarity_field,
                &self.ask(
                    &format!("How well do you know '{}'? (0 = None, 5 = Expert): ", name),
                    &familiarity_field,
                )?,
            )?;

            let importance_field = format!("importance of '{}'", name);
            let importance = parse_number(
                &importance_field,
                &self.ask(
                    &format!(
                        "How important is '{}'? (0 = Not at all, 5 = Very important): ",
                        name
                    ),
                    &importance_field,
                )?,
            )?;

            topics.push(TopicRating::new(name, familiarity, importance));
        }

        let weak_topic = self.ask(
            "Enter the topic you're least confident about (or press Enter to skip): ",
            "the weak topic",
        )?;
        let total_hours = parse_number(
            "total study hours",
            &self.ask("How many total study hours do you have? ", "total study hours")?,
        )?;
        let breaks = parse_break_count(
            &self.ask(
                &format!("How many breaks? (Default = {}): ", config.default_break_count),
                "the break count",
            )?,
            config.default_break_count,
        );

        Ok(PlannerInput {
            topics,
            params: AllocationParams::new(total_hours, breaks, Some(weak_topic)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(answers: &str) -> (Result<PlannerInput, InputError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(answers.as_bytes()), &mut output);
            prompter.collect(&PlannerConfig::default())
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_topics() {
        assert_eq!(
            parse_topics(" Math , Physics,Chemistry ").unwrap(),
            vec!["Math", "Physics", "Chemistry"]
        );
        assert!(matches!(parse_topics("   "), Err(InputError::NoTopics)));
        assert!(matches!(
            parse_topics("Math,,Physics"),
            Err(InputError::EmptyTopic(_))
        ));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("hours", " 7.5 ").unwrap(), 7.5);
        assert_eq!(parse_number("hours", "3").unwrap(), 3.0);
        assert!(matches!(
            parse_number("hours", "three"),
            Err(InputError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_parse_break_count() {
        assert_eq!(parse_break_count("6", 4), 6);
        assert_eq!(parse_break_count("0\n", 4), 0);
        assert_eq!(parse_break_count("", 4), 4);
        assert_eq!(parse_break_count("-2", 4), 4);
        assert_eq!(parse_break_count("2.5", 4), 4);
        assert_eq!(parse_break_count(" 3", 4), 4);
        assert_eq!(parse_break_count("lots", 4), 4);
    }

    #[test]
    fn test_parse_break_count_saturates() {
        assert_eq!(parse_break_count("99999999999999999999", 4), u32::MAX);
        assert_eq!(parse_break_count("4294967295", 4), u32::MAX);
        assert_eq!(parse_break_count("000012", 4), 12);
    }

    #[test]
    fn test_full_session() {
        let (result, output) = run_session("Math, Physics\n1\n5\n4\n2\nPhysics\n10\n\n");
        let input = result.unwrap();

        assert_eq!(
            input.topics,
            vec![
                TopicRating::new("Math".to_string(), 1.0, 5.0),
                TopicRating::new("Physics".to_string(), 4.0, 2.0),
            ]
        );
        assert_eq!(input.params.total_hours, 10.0);
        assert_eq!(input.params.breaks, 4);
        assert_eq!(input.params.weak_topic, Some("Physics".to_string()));

        assert!(output.contains("How well do you know 'Math'?"));
        assert!(output.contains("How important is 'Physics'?"));
        assert!(output.contains("How many breaks? (Default = 4): "));
    }

    #[test]
    fn test_skipped_weak_topic() {
        let (result, _) = run_session("Math\n2\n3\n\n5\n2\n");
        let input = result.unwrap();
        assert_eq!(input.params.weak_topic, None);
        assert_eq!(input.params.breaks, 2);
    }

    #[test]
    fn test_non_numeric_rating_aborts() {
        let (result, _) = run_session("Math\nvery well\n");
        assert!(matches!(result, Err(InputError::NotANumber { .. })));
    }

    #[test]
    fn test_truncated_input() {
        let (result, _) = run_session("Math\n2\n");
        assert!(matches!(result, Err(InputError::UnexpectedEof(_))));
    }
}
