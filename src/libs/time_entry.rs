use super::activity::Activity;
use super::formatter::format_hours;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Issue {
    pub id: u32,
    pub title: String,
    pub project: String,
}

/// One unit of work, ready to be submitted to the tracker.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeEntry {
    pub issue: Issue,
    pub date: NaiveDate,
    pub hours: f64,
    pub activity: Activity,
    pub comment: Option<String>,
}

impl TimeEntry {
    pub fn new(issue: Issue, date: NaiveDate, hours: f64, activity: Activity, comment: Option<String>) -> Self {
        Self {
            issue,
            date,
            hours,
            activity,
            // An empty comment is the same as none
            comment: comment.filter(|comment| !comment.trim().is_empty()),
        }
    }

    /// Aligned `label: value` lines shown before asking for confirmation.
    pub fn describe(&self) -> Vec<String> {
        let mut labels_and_values = vec![
            ("issue ID", format!("#{}", self.issue.id)),
            ("issue title", self.issue.title.clone()),
            ("project", self.issue.project.clone()),
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("time spent", format_hours(self.hours)),
            ("activity", self.activity.name.clone()),
        ];
        if let Some(comment) = &self.comment {
            labels_and_values.push(("comment", comment.clone()));
        }

        labels_and_values.into_iter().map(|(label, value)| format!("{:<11}: {}", label, value)).collect()
    }
}
