//! # rlw - Redmine Log Work
//!
//! A command-line helper that logs time spent on a Redmine issue.
//!
//! ## Features
//!
//! - **Free-text durations**: `1:30`, `:45`, `30`, `8:30-9:50`, `8:30-now`, `~8:30`
//! - **Fuzzy activities**: by ID, name, part of a word, or acronym (`cr` for "code review")
//! - **Issue from branch**: `.` takes the issue ID from the current git branch
//! - **Confirmation**: the entry is shown and confirmed before it is submitted
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rlw::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
