#[cfg(test)]
mod tests {
    use rlw::libs::activity::{match_activity, Activity};
    use rlw::libs::error::Error;
    use test_context::{test_context, TestContext};

    struct ActivityTestContext {
        activities: Vec<Activity>,
    }

    impl TestContext for ActivityTestContext {
        fn setup() -> Self {
            ActivityTestContext {
                activities: vec![
                    Activity::new(1, "business analysis"),
                    Activity::new(2, "development"),
                    Activity::new(3, "code review"),
                ],
            }
        }
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_id(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("2", &ctx.activities).unwrap(), ctx.activities[1]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_name(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("code review", &ctx.activities).unwrap(), ctx.activities[2]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_partial(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("dev", &ctx.activities).unwrap(), ctx.activities[1]);
        assert_eq!(match_activity("analy", &ctx.activities).unwrap(), ctx.activities[0]);
        assert_eq!(match_activity("view", &ctx.activities).unwrap(), ctx.activities[2]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_acronym(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("cr", &ctx.activities).unwrap(), ctx.activities[2]);
        assert_eq!(match_activity("ba", &ctx.activities).unwrap(), ctx.activities[0]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_ignores_case(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("CR", &ctx.activities).unwrap(), ctx.activities[2]);
        assert_eq!(match_activity("Code Review", &ctx.activities).unwrap(), ctx.activities[2]);
        assert_eq!(match_activity("DEV", &ctx.activities).unwrap(), ctx.activities[1]);
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_is_idempotent(ctx: &mut ActivityTestContext) {
        for query in ["2", "cr", "dev", "de", "foo"] {
            assert_eq!(match_activity(query, &ctx.activities), match_activity(query, &ctx.activities));
        }
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_ambiguous(ctx: &mut ActivityTestContext) {
        // "de" is part of both "development" and "code"
        match match_activity("de", &ctx.activities) {
            Err(Error::AmbiguousMatch { query, candidates }) => {
                assert_eq!(query, "de");
                assert_eq!(candidates, vec!["development".to_string(), "code review".to_string()]);
            }
            other => panic!("expected an ambiguous match, got {:?}", other),
        }
    }

    #[test_context(ActivityTestContext)]
    #[test]
    fn test_match_not_found(ctx: &mut ActivityTestContext) {
        assert_eq!(match_activity("foo", &ctx.activities), Err(Error::NoMatch("foo".to_string())));
        assert_eq!(match_activity("4", &ctx.activities), Err(Error::NoMatch("4".to_string())));
        assert_eq!(match_activity("", &ctx.activities), Err(Error::NoMatch("".to_string())));
    }

    #[test]
    fn test_match_against_empty_list() {
        assert_eq!(match_activity("dev", &[]), Err(Error::NoMatch("dev".to_string())));
    }

    #[test]
    fn test_id_wins_only_when_unique() {
        // "1" is the id of "design" and also a word of the second name
        let activities = vec![Activity::new(1, "design"), Activity::new(2, "level 1 support")];
        assert!(matches!(match_activity("1", &activities), Err(Error::AmbiguousMatch { .. })));
    }

    #[test]
    fn test_acronym() {
        assert_eq!(Activity::new(3, "Code Review").acronym(), "cr");
        assert_eq!(Activity::new(2, "development").acronym(), "d");
        assert_eq!(Activity::new(9, "").acronym(), "");
    }
}
