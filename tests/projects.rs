#[cfg(test)]
mod tests {
    use timetrace::db::db::Db;
    use timetrace::db::projects::Projects;
    use timetrace::libs::config::Config;
    use timetrace::libs::error::Error;
    use timetrace::libs::project::Project;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ProjectTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ProjectTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                store: Some(temp_dir.path().to_string_lossy().into_owned()),
                ..Default::default()
            };
            let db = Db::open(&config).unwrap();
            ProjectTestContext { temp_dir, db }
        }
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_project_crud(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        projects.save(&Project::new("acme"), false).unwrap();
        assert!(ctx.temp_dir.path().join("projects").join("acme.json").exists());

        let loaded = projects.load("acme").unwrap();
        assert_eq!(loaded.key, "acme");

        projects.save(&Project::new("globex"), false).unwrap();
        let keys: Vec<String> = projects.list().unwrap().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["acme", "globex"]);

        projects.delete(&Project::new("globex")).unwrap();
        assert!(projects.load("globex").unwrap_err().is_not_found());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_save_without_force_never_overwrites(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.save(&Project::new("acme"), false).unwrap();

        let err = projects.save(&Project::new("acme"), false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));

        projects.save(&Project::new("acme"), true).unwrap();
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_module_requires_parent(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);

        let err = projects.save(&Project::new("design@acme"), false).unwrap_err();
        assert!(matches!(err, Error::ParentlessModule(key) if key == "design@acme"));

        projects.save(&Project::new("acme"), false).unwrap();
        projects.save(&Project::new("design@acme"), false).unwrap();
        projects.save(&Project::new("review@acme"), false).unwrap();
        projects.save(&Project::new("globex"), false).unwrap();

        let modules: Vec<String> = projects.list_modules("acme").unwrap().into_iter().map(|p| p.key).collect();
        assert_eq!(modules, vec!["design@acme", "review@acme"]);
        assert_eq!(projects.module_names("acme").unwrap(), "design,review");
        assert_eq!(projects.module_names("globex").unwrap(), "-");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_empty_key_is_rejected(ctx: &mut ProjectTestContext) {
        let err = Projects::new(&ctx.db).save(&Project::new(""), false).unwrap_err();
        assert!(matches!(err, Error::EmptyProjectKey));
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_cascades_to_modules(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.save(&Project::new("acme"), false).unwrap();
        projects.save(&Project::new("design@acme"), false).unwrap();
        projects.save(&Project::new("globex"), false).unwrap();

        projects.delete(&Project::new("acme")).unwrap();

        let keys: Vec<String> = projects.list().unwrap().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["globex"]);
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_delete_missing_project(ctx: &mut ProjectTestContext) {
        let err = Projects::new(&ctx.db).delete(&Project::new("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_keys_are_sanitized_on_disk(ctx: &mut ProjectTestContext) {
        let projects = Projects::new(&ctx.db);
        projects.save(&Project::new("clients/acme"), false).unwrap();

        assert!(ctx.temp_dir.path().join("projects").join("clients-acme.json").exists());
        assert_eq!(projects.load("clients/acme").unwrap().key, "clients/acme");
    }

    #[test_context(ProjectTestContext)]
    #[test]
    fn test_stored_json_layout(ctx: &mut ProjectTestContext) {
        Projects::new(&ctx.db).save(&Project::new("acme"), false).unwrap();

        let content = std::fs::read_to_string(ctx.temp_dir.path().join("projects").join("acme.json")).unwrap();
        assert_eq!(content, "{\n\t\"key\": \"acme\"\n}");
    }
}
