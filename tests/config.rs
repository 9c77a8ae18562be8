#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use timetrace::libs::config::{expand_env, Config, ProjectConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Isolated directory holding the configuration file under test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join(".timetrace").join("config.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.use_12_hours);
        assert!(config.store.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config {
            store: Some("/data/timetrace".to_string()),
            use_12_hours: true,
            editor: Some("nano".to_string()),
            report_path: None,
            ..Default::default()
        };
        config.projects.insert("acme".to_string(), ProjectConfig { billable: true });
        config.save_to(&ctx.config_path).unwrap();

        let content = std::fs::read_to_string(&ctx.config_path).unwrap();
        assert!(content.contains("\"use12hours\": true"));
        assert!(!content.contains("report-path"));

        let loaded = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.is_billable("acme"), Some(true));
        assert_eq!(loaded.is_billable("globex"), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reads_hand_written_file(ctx: &mut ConfigTestContext) {
        std::fs::create_dir_all(ctx.config_path.parent().unwrap()).unwrap();
        std::fs::write(
            &ctx.config_path,
            r#"{"store": "/srv/tt", "use12hours": false, "report-path": "/tmp/report.json", "projects": {"acme": {"billable": true}}}"#,
        )
        .unwrap();

        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config.root_dir(), PathBuf::from("/srv/tt"));
        assert_eq!(config.report_path.as_deref(), Some("/tmp/report.json"));
        assert_eq!(config.is_billable("acme"), Some(true));
    }

    #[test]
    fn test_get_and_set() {
        let mut config = Config::default();

        config.set("use12hours", "yes").unwrap();
        assert!(config.use_12_hours);
        assert_eq!(config.get("use12hours").unwrap(), "true");

        config.set("editor", "code --wait").unwrap();
        assert_eq!(config.editor(), "code --wait");
        config.set("editor", "").unwrap();
        assert!(config.editor.is_none());

        config.set("report-path", "/tmp/r.json").unwrap();
        assert_eq!(config.get("REPORT-PATH").unwrap(), "/tmp/r.json");

        assert!(config.set("use12hours", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_expand_env() {
        std::env::set_var("TIMETRACE_TEST_ROOT", "/srv/data");
        assert_eq!(expand_env("$TIMETRACE_TEST_ROOT/tt"), "/srv/data/tt");
        assert_eq!(expand_env("${TIMETRACE_TEST_ROOT}-x"), "/srv/data-x");
        assert_eq!(expand_env("plain/path"), "plain/path");
        assert_eq!(expand_env("cost$"), "cost$");
        assert_eq!(expand_env("$TIMETRACE_TEST_UNSET_VARIABLE/x"), "/x");
    }
}
