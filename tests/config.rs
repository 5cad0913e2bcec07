#[cfg(test)]
mod tests {
    use rlw::api::RedmineConfig;
    use rlw::libs::config::{Config, CONFIG_FILE_NAME};
    use rlw::libs::error::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Gives every test its own config file location.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
        api_url: String,
        api_key: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("rlw").join(CONFIG_FILE_NAME);
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
                api_url: "https://redmine.example.com".to_string(),
                api_key: "0123456789abcdef".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.redmine.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            redmine: Some(RedmineConfig {
                api_url: ctx.api_url.clone(),
                api_key: Some(ctx.api_key.clone()),
            }),
        };

        config.save_to(&ctx.config_path).unwrap();
        let loaded = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_key_is_optional(ctx: &mut ConfigTestContext) {
        let config = Config {
            redmine: Some(RedmineConfig {
                api_url: ctx.api_url.clone(),
                api_key: None,
            }),
        };

        config.save_to(&ctx.config_path).unwrap();
        let saved = fs::read_to_string(&ctx.config_path).unwrap();

        assert!(saved.contains(&ctx.api_url));
        assert!(!saved.contains("api_key"));
        assert_eq!(Config::read_from(&ctx.config_path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_handwritten_config(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        fs::write(&ctx.config_path, format!(r#"{{"redmine": {{"api_url": "{}"}}}}"#, ctx.api_url)).unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();

        assert_eq!(config.redmine().unwrap().api_url, ctx.api_url);
        assert_eq!(config.redmine().unwrap().api_key, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config(ctx: &mut ConfigTestContext) {
        fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        fs::write(&ctx.config_path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test]
    fn test_missing_redmine_section() {
        assert_eq!(Config::default().redmine(), Err(Error::NotConfigured));
    }
}
