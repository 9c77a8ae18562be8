#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use timetrace::db::backups::Backups;
    use timetrace::db::db::Db;
    use timetrace::db::memory::MemoryStorage;
    use timetrace::db::projects::Projects;
    use timetrace::db::records::Records;
    use timetrace::libs::config::Config;
    use timetrace::libs::error::Error;
    use timetrace::libs::project::Project;
    use timetrace::libs::record::Record;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct BackupTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for BackupTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                store: Some(temp_dir.path().to_string_lossy().into_owned()),
                ..Default::default()
            };
            let db = Db::open(&config).unwrap();
            Projects::new(&db).save(&Project::new("acme"), false).unwrap();
            Projects::new(&db).save(&Project::new("design@acme"), false).unwrap();
            BackupTestContext { temp_dir, db }
        }
    }

    impl BackupTestContext {
        fn read(&self, relative: &str) -> Vec<u8> {
            std::fs::read(self.temp_dir.path().join(relative)).unwrap()
        }
    }

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 5, 1, hour, min, 0).unwrap()
    }

    fn closed(from: u32, to: u32, key: &str) -> Record {
        Record::closed(at(from, 0), at(to, 0), Some(Project::new(key)), false).unwrap()
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_record_revert_is_byte_identical(ctx: &mut BackupTestContext) {
        let records = Records::new(&ctx.db);
        let backups = Backups::new(&ctx.db);
        let record = closed(9, 10, "acme");
        records.save(&record, false).unwrap();
        let before = ctx.read("records/2021-05-01/09-00.json");

        backups.backup_record(&record.start).unwrap();

        let mut changed = record.clone();
        changed.shift_end(Duration::minutes(45)).unwrap();
        changed.is_billable = true;
        records.save(&changed, true).unwrap();
        assert_ne!(ctx.read("records/2021-05-01/09-00.json"), before);

        backups.revert_record(&record.start).unwrap();
        assert_eq!(ctx.read("records/2021-05-01/09-00.json"), before);

        // The backup survives and can be applied again.
        records.save(&changed, true).unwrap();
        backups.revert_record(&record.start).unwrap();
        assert_eq!(records.load(&record.start).unwrap(), record);
        assert_eq!(backups.load_backup_record(&record.start).unwrap(), record);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_second_backup_overwrites_first(ctx: &mut BackupTestContext) {
        let records = Records::new(&ctx.db);
        let backups = Backups::new(&ctx.db);
        let record = closed(9, 10, "acme");
        records.save(&record, false).unwrap();
        backups.backup_record(&record.start).unwrap();

        let mut changed = record.clone();
        changed.is_billable = true;
        records.save(&changed, true).unwrap();
        backups.backup_record(&record.start).unwrap();

        assert!(backups.load_backup_record(&record.start).unwrap().is_billable);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_missing_backups(ctx: &mut BackupTestContext) {
        let backups = Backups::new(&ctx.db);

        let err = backups.revert_record(&at(9, 0)).unwrap_err();
        assert!(matches!(err, Error::BackupNotFound { .. }));

        let err = backups.revert_project("acme").unwrap_err();
        assert!(matches!(err, Error::BackupNotFound { .. }));

        let err = backups.backup_record(&at(9, 0)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_deleted_project_and_modules_come_back(ctx: &mut BackupTestContext) {
        let projects = Projects::new(&ctx.db);
        let backups = Backups::new(&ctx.db);
        let before = ctx.read("projects/acme.json");

        backups.backup_project("design@acme").unwrap();
        backups.backup_project("acme").unwrap();
        projects.delete(&Project::new("acme")).unwrap();
        assert!(projects.list().unwrap().is_empty());

        backups.revert_project("acme").unwrap();

        let keys: Vec<String> = projects.list().unwrap().into_iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["acme", "design@acme"]);
        assert_eq!(ctx.read("projects/acme.json"), before);
        assert_eq!(backups.load_backup_project("acme").unwrap().key, "acme");
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_revert_records_by_project(ctx: &mut BackupTestContext) {
        let records = Records::new(&ctx.db);
        let backups = Backups::new(&ctx.db);
        Projects::new(&ctx.db).save(&Project::new("globex"), false).unwrap();

        records.save(&closed(9, 10, "acme"), false).unwrap();
        records.save(&closed(10, 11, "design@acme"), false).unwrap();
        records.save(&closed(11, 12, "globex"), false).unwrap();
        backups.backup_record(&at(11, 0)).unwrap();
        records.delete(&closed(11, 12, "globex")).unwrap();

        assert_eq!(records.delete_by_project("acme").unwrap(), 2);
        assert!(records.list_all().unwrap().is_empty());

        assert_eq!(backups.revert_records_by_project("acme").unwrap(), 2);

        let keys: Vec<_> = records.list_all().unwrap().into_iter().map(|r| r.project_key().map(str::to_string)).collect();
        assert_eq!(keys, vec![Some("acme".to_string()), Some("design@acme".to_string())]);
    }

    #[test_context(BackupTestContext)]
    #[test]
    fn test_revert_records_by_project_stops_at_first_failure(ctx: &mut BackupTestContext) {
        let records = Records::new(&ctx.db);
        let backups = Backups::new(&ctx.db);

        records.save(&closed(9, 10, "acme"), false).unwrap();
        records.save(&closed(11, 12, "acme"), false).unwrap();
        records.save(&closed(13, 14, "acme"), false).unwrap();
        assert_eq!(records.delete_by_project("acme").unwrap(), 3);

        std::fs::write(ctx.temp_dir.path().join("records/2021-05-01/11-00.json.bak"), b"not json").unwrap();

        let err = backups.revert_records_by_project("acme").unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        // Reverts applied before the failure are kept, nothing after it runs.
        assert_eq!(records.load(&at(9, 0)).unwrap(), closed(9, 10, "acme"));
        assert!(records.load(&at(11, 0)).unwrap_err().is_not_found());
        assert!(records.load(&at(13, 0)).unwrap_err().is_not_found());
    }

    #[test]
    fn test_memory_backend() {
        let db = Db::with_storage(MemoryStorage::new(), &Config::default());
        let projects = Projects::new(&db);
        let records = Records::new(&db);
        let backups = Backups::new(&db);

        projects.save(&Project::new("acme"), false).unwrap();
        let record = closed(9, 10, "acme");
        records.save(&record, false).unwrap();
        backups.backup_record(&record.start).unwrap();
        records.delete(&record).unwrap();
        assert!(records.list_all().unwrap().is_empty());

        backups.revert_record(&record.start).unwrap();
        assert_eq!(records.load(&record.start).unwrap(), record);
        assert_eq!(records.load_latest().unwrap().unwrap(), record);
    }
}
