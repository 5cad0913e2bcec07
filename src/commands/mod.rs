pub mod activities;
pub mod init;
pub mod log;

use crate::libs::branch::IssueRef;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "List the activities a time entry can be tagged with")]
    Activities,
}

/// Log time spent on a Redmine issue.
///
/// `rlw <issue> <time> <activity> [comment]` logs a time entry; the
/// subcommands manage configuration and list activities.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Issue ID, or `.` to take it from the current git branch
    #[arg(required = true)]
    pub issue: Option<IssueRef>,

    /// Time spent: `1:30`, `:45`, `30` (minutes), `8:30-9:50`, `8:30-now`, `8:30-` or `~8:30`
    #[arg(required = true)]
    pub time: Option<String>,

    /// Activity: its ID, full name, part of a word of the name, or acronym
    #[arg(required = true)]
    pub activity: Option<String>,

    /// Optional comment
    pub comment: Option<String>,

    /// Submit without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Activities) => activities::cmd().await,
            None => match (self.issue, self.time, self.activity) {
                (Some(issue), Some(time), Some(activity)) => {
                    log::cmd(log::LogArgs {
                        issue,
                        time,
                        activity,
                        comment: self.comment,
                        yes: self.yes,
                    })
                    .await
                }
                _ => Ok(Self::command().print_help()?),
            },
        }
    }
}
