//! Single-generation backups of projects and records.
//!
//! A backup is the live file's bytes copied to a `.json.bak` sibling. Taking
//! a backup overwrites the previous one, reverting copies it back and keeps
//! the backup so the same snapshot can be restored again. Callers back up
//! before they mutate.

use super::db::{Db, BACKUP_EXT, JSON_EXT, PROJECTS_DIR};
use super::projects::Projects;
use super::records::Records;
use super::storage::join;
use crate::libs::error::{Entity, Error, Result};
use crate::libs::formatter::Formatter;
use crate::libs::project::{Project, MODULE_SEPARATOR};
use crate::libs::record::Record;
use chrono::{DateTime, Local};

pub struct Backups<'a> {
    db: &'a Db,
}

impl<'a> Backups<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    fn copy(&self, from: &str, to: &str) -> Result<bool> {
        match self.db.storage().load(from)? {
            Some(data) => {
                self.db.storage().save(to, &data)?;
                tracing::debug!(from = %from, to = %to, "copied");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn record_key_string(&self, start: &DateTime<Local>) -> String {
        Formatter::new(self.db.use_12_hours()).record_key(start)
    }

    /// Snapshots the live project file.
    pub fn backup_project(&self, project_key: &str) -> Result<()> {
        if !self.copy(&Projects::key(project_key), &Projects::backup_key(project_key))? {
            return Err(Error::not_found(Entity::Project, project_key));
        }
        Ok(())
    }

    fn revert_one_project(&self, project_key: &str) -> Result<()> {
        if !self.copy(&Projects::backup_key(project_key), &Projects::key(project_key))? {
            return Err(Error::backup_not_found(Entity::Project, project_key));
        }
        Ok(())
    }

    /// Restores `project_key` and every module that has a backup.
    ///
    /// Modules are found by their backup file names, so modules that were
    /// deleted together with the parent come back as well.
    pub fn revert_project(&self, project_key: &str) -> Result<()> {
        if !self.db.storage().exists(&Projects::backup_key(project_key))? {
            return Err(Error::backup_not_found(Entity::Project, project_key));
        }

        let suffix = format!("{}{}{}", MODULE_SEPARATOR, Projects::sanitize(project_key), BACKUP_EXT);
        for entry in self.db.storage().list(PROJECTS_DIR)? {
            if entry.is_namespace || !entry.name.ends_with(&suffix) {
                continue;
            }
            if let Some(module_key) = entry.name.strip_suffix(BACKUP_EXT) {
                self.revert_one_project(module_key)?;
            }
        }

        self.revert_one_project(project_key)
    }

    pub fn load_backup_project(&self, project_key: &str) -> Result<Project> {
        match self.db.storage().load(&Projects::backup_key(project_key))? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Err(Error::backup_not_found(Entity::Project, project_key)),
        }
    }

    /// Snapshots the live record started at `start`.
    pub fn backup_record(&self, start: &DateTime<Local>) -> Result<()> {
        let records = Records::new(self.db);
        if !self.copy(&records.key(start), &records.backup_key(start))? {
            return Err(Error::not_found(Entity::Record, self.record_key_string(start)));
        }
        Ok(())
    }

    pub fn revert_record(&self, start: &DateTime<Local>) -> Result<()> {
        let records = Records::new(self.db);
        if !self.copy(&records.backup_key(start), &records.key(start))? {
            return Err(Error::backup_not_found(Entity::Record, self.record_key_string(start)));
        }
        Ok(())
    }

    pub fn load_backup_record(&self, start: &DateTime<Local>) -> Result<Record> {
        let records = Records::new(self.db);
        match self.db.storage().load(&records.backup_key(start))? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Err(Error::backup_not_found(Entity::Record, self.record_key_string(start))),
        }
    }

    /// Restores every backed-up record tracked against `project_key` or one of
    /// its modules. Stops at the first failure; records restored before it
    /// stay restored.
    pub fn revert_records_by_project(&self, project_key: &str) -> Result<usize> {
        let records = Records::new(self.db);
        let mut reverted = 0;

        for date in records.dates()? {
            let dir = Records::dir_key(date);
            for entry in self.db.storage().list(&dir)? {
                if entry.is_namespace || !entry.name.ends_with(BACKUP_EXT) {
                    continue;
                }

                let backup_key = join(&dir, &entry.name);
                let Some(data) = self.db.storage().load(&backup_key)? else {
                    continue;
                };
                let record: Record = serde_json::from_slice(&data)?;
                if !record.belongs_to(project_key) {
                    continue;
                }

                let live_name = entry.name.trim_end_matches(BACKUP_EXT).to_string() + JSON_EXT;
                self.db.storage().save(&join(&dir, &live_name), &data)?;
                tracing::debug!(key = %backup_key, "record reverted");
                reverted += 1;
            }
        }

        Ok(reverted)
    }
}
