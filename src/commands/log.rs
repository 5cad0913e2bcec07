//! Time entry logging command.
//!
//! Interprets the issue, time and activity arguments, shows the resulting
//! entry and submits it once the user confirms. The duration and issue are
//! checked before the tracker client is created, so a typo in the duration
//! never reaches the tracker or the API key prompt.

use crate::api::{redmine::Redmine, Tracker};
use crate::libs::activity::match_activity;
use crate::libs::branch::IssueRef;
use crate::libs::config::Config;
use crate::libs::duration::parse_hours;
use crate::libs::messages::Message;
use crate::libs::time_entry::TimeEntry;
use crate::{msg_debug, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveDateTime};
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::env;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LogArgs {
    pub issue: IssueRef,
    pub time: String,
    pub activity: String,
    pub comment: Option<String>,
    pub yes: bool,
}

pub async fn cmd(args: LogArgs) -> Result<()> {
    let now = Local::now().naive_local();
    msg_debug!(format!("Logging {:?} as of {}", args, now));

    // Input mistakes surface before the API key is looked up or asked for
    let input = parse_input(&args, now, &env::current_dir()?)?;

    let config = Config::read()?;
    let redmine = Redmine::new(config.redmine()?)?;
    let entry = build_time_entry(&redmine, &args, input, now.date()).await?;

    msg_print!(Message::TimeEntryHeader);
    for line in entry.describe() {
        msg_print!(line);
    }

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmTimeEntry.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::TimeEntryCancelled);
            return Ok(());
        }
    }

    redmine.submit_time_entry(&entry).await?;
    msg_success!(Message::TimeEntryAdded(entry.issue.id));
    Ok(())
}

/// The parts of a time entry that need no tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalInput {
    pub issue_id: u32,
    pub hours: f64,
}

/// Parses the duration as of `now` and resolves the issue ID.
///
/// `directory` is where the branch is read from when the issue is given as `.`.
pub fn parse_input(args: &LogArgs, now: NaiveDateTime, directory: &Path) -> Result<LocalInput> {
    let hours = parse_hours(&args.time, now)?;

    let issue_id = args.issue.resolve(directory)?;
    if args.issue == IssueRef::CurrentBranch {
        msg_info!(Message::IssueFromBranch(issue_id));
    }

    Ok(LocalInput { issue_id, hours })
}

/// Completes `input` with the activity and issue details from the tracker.
pub async fn build_time_entry<T: Tracker>(tracker: &T, args: &LogArgs, input: LocalInput, date: NaiveDate) -> Result<TimeEntry> {
    let activities = tracker.activities().await?;
    let activity = match_activity(&args.activity, &activities)?;
    let issue = tracker.issue(input.issue_id).await?;

    tracing::debug!(issue = issue.id, activity = activity.id, hours = input.hours, "time entry assembled");
    Ok(TimeEntry::new(issue, date, input.hours, activity, args.comment.clone()))
}
