//! Interactive console front end for the study planner.

use std::io;
use std::path::Path;

use chrono::Local;
use study_planner::report::format_schedule_body;
use study_planner::{
    allocate_study_time, format_report, write_report, PlannerConfig, PlannerError, Prompter,
};

const BANNER_WIDTH: usize = 50;

const WELCOME: &str = "\
Plan a study session in one go: rate your topics, say how long you have,
and get a schedule of study blocks, breaks and a closing revision block.

The suggested blocks are a starting point. Adjust them as you go; the goal
is time spent studying, not time spent planning.";

const RATING_GUIDE: &str = "\
Familiarity:
  - 0: completely new to you
  - 1: heard of it, no clarity yet
  - 2: basic understanding, needs detailed study
  - 3: partly understood, needs practice
  - 4: comfortable, a quick review will do
  - 5: expert, skim only

Importance:
  - 0: irrelevant to your exam or goal
  - 1: mildly relevant
  - 2: moderately important, could come up
  - 3: fairly important
  - 4: key topic
  - 5: critical, cannot be skipped

Accurate ratings give a better plan.";

const REVISION_NOTE: &str = "Note: spaced revision pays off. \
Review material at increasing intervals for better retention.";

fn print_welcome() {
    let banner = "=".repeat(BANNER_WIDTH);
    println!("{}", banner);
    println!("Welcome to the Study Planner!");
    println!("{}", banner);
    println!("{}", WELCOME);
    println!("{}", banner);
    println!("{}", RATING_GUIDE);
    println!("{}", banner);
}

fn run() -> Result<(), PlannerError> {
    let config = PlannerConfig::default();
    print_welcome();

    let input = {
        let stdin = io::stdin();
        let mut prompter = Prompter::new(stdin.lock(), io::stdout());
        prompter.collect(&config)?
    };
    let total_hours = input.params.total_hours;
    let breaks = input.params.breaks;

    let schedule = allocate_study_time(&input.topics, &input.params, &config)?;

    let report = format_report(&schedule, total_hours, breaks, &config);
    let path = write_report(Path::new("."), Local::now().naive_local(), &report)?;

    let rule = "-".repeat(BANNER_WIDTH);
    println!("\nYour Study Schedule:");
    print!(
        "{}",
        format_schedule_body(&schedule, total_hours, breaks, &config)
    );
    println!("{}", rule);
    println!(
        "Schedule saved as: {}",
        path.file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy())
    );
    println!("{}", rule);
    println!("{}", REVISION_NOTE);
    println!("{}", rule);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
