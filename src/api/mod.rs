//! Issue tracker clients.
//!
//! The log command talks to the tracker only through the [`Tracker`] trait:
//! look up an issue, list the time entry activities, submit a time entry.
//! [`redmine::Redmine`] implements it over the Redmine REST API.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rlw::api::{redmine::Redmine, Tracker};
//! use rlw::libs::config::Config;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! let redmine = Redmine::new(config.redmine()?)?;
//! let issue = redmine.issue(123).await?;
//! println!("{} ({})", issue.title, issue.project);
//! # Ok(())
//! # }
//! ```

use crate::libs::activity::Activity;
use crate::libs::time_entry::{Issue, TimeEntry};
use anyhow::Result;

pub mod redmine;

pub use redmine::RedmineConfig;

/// Maximum number of attempts for a time entry submission.
pub const MAX_RETRY_COUNT: u32 = 3;

#[allow(async_fn_in_trait)]
pub trait Tracker {
    /// Fetches an issue by ID.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::libs::error::Error::NotFound`] if the tracker does
    /// not know the issue, or with a transport error.
    async fn issue(&self, id: u32) -> Result<Issue>;

    /// Lists the activities a time entry may be tagged with.
    async fn activities(&self) -> Result<Vec<Activity>>;

    /// Records a time entry.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::libs::error::Error::Submission`] unless the
    /// tracker reports the entry as created.
    async fn submit_time_entry(&self, entry: &TimeEntry) -> Result<()>;
}
