#[cfg(test)]
mod tests {
    use clap::Parser;
    use rlw::commands::{Cli, Commands};
    use rlw::libs::branch::IssueRef;

    #[test]
    fn test_log_arguments() {
        let cli = Cli::try_parse_from(["rlw", "123", "1:30", "dev"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.issue, Some(IssueRef::Id(123)));
        assert_eq!(cli.time.as_deref(), Some("1:30"));
        assert_eq!(cli.activity.as_deref(), Some("dev"));
        assert_eq!(cli.comment, None);
        assert!(!cli.yes);
    }

    #[test]
    fn test_log_from_branch_with_comment() {
        let cli = Cli::try_parse_from(["rlw", ".", "~9:00", "cr", "reviewed the fix", "--yes"]).unwrap();

        assert_eq!(cli.issue, Some(IssueRef::CurrentBranch));
        assert_eq!(cli.time.as_deref(), Some("~9:00"));
        assert_eq!(cli.comment.as_deref(), Some("reviewed the fix"));
        assert!(cli.yes);
    }

    #[test]
    fn test_open_range_argument() {
        let cli = Cli::try_parse_from(["rlw", "#77", "8:30-", "2"]).unwrap();

        assert_eq!(cli.issue, Some(IssueRef::Id(77)));
        assert_eq!(cli.time.as_deref(), Some("8:30-"));
    }

    #[test]
    fn test_missing_activity() {
        assert!(Cli::try_parse_from(["rlw", "123", "1:30"]).is_err());
    }

    #[test]
    fn test_invalid_issue() {
        assert!(Cli::try_parse_from(["rlw", "abc", "1:30", "dev"]).is_err());
    }

    #[test]
    fn test_no_arguments_shows_help() {
        assert!(Cli::try_parse_from(["rlw"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["rlw", "init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Init(_))));

        let cli = Cli::try_parse_from(["rlw", "activities"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Activities)));
        assert_eq!(cli.issue, None);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
