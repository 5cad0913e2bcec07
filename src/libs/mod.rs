//! Core library modules for rlw.
//!
//! - **Input interpretation**: [`duration`], [`activity`] and [`branch`] turn
//!   free text into hours, an activity and an issue ID. They are pure and
//!   deterministic apart from the git probe in [`branch`].
//! - **Domain values**: [`time_entry`] holds issues and time entries.
//! - **Infrastructure**: configuration, data storage, the encrypted API key
//!   cache, messages and console rendering.
//!
//! ## Usage
//!
//! ```rust
//! use rlw::libs::activity::{match_activity, Activity};
//! use rlw::libs::branch::issue_id_from_branch_name;
//!
//! let activities = vec![Activity::new(2, "development"), Activity::new(3, "code review")];
//! assert_eq!(match_activity("cr", &activities).unwrap().id, 3);
//! assert_eq!(issue_id_from_branch_name("feature/123-foo-bar").unwrap(), 123);
//! ```

pub mod activity;
pub mod branch;
pub mod config;
pub mod data_storage;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod secret;
pub mod time_entry;
pub mod view;
