//! Project store: one JSON file per project below `projects/`.
//!
//! File names are the project key with path separators replaced, so
//! `design@acme` lives at `projects/design@acme.json`. Modules are ordinary
//! projects whose key names a parent; the store enforces that the parent
//! exists before a module is saved and removes modules along with their
//! parent.

use super::db::{to_json, Db, BACKUP_EXT, JSON_EXT, PROJECTS_DIR};
use super::storage::join;
use crate::libs::error::{Entity, Error, Result};
use crate::libs::project::Project;
use std::path::PathBuf;

pub struct Projects<'a> {
    db: &'a Db,
}

impl<'a> Projects<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Replaces characters that would escape the projects directory.
    pub fn sanitize(key: &str) -> String {
        key.replace(['/', '\\'], "-")
    }

    pub fn key(project_key: &str) -> String {
        join(PROJECTS_DIR, &format!("{}{}", Self::sanitize(project_key), JSON_EXT))
    }

    pub fn backup_key(project_key: &str) -> String {
        join(PROJECTS_DIR, &format!("{}{}", Self::sanitize(project_key), BACKUP_EXT))
    }

    /// Filesystem location of the project file, for the editor.
    pub fn path(&self, project_key: &str) -> Option<PathBuf> {
        self.db.storage().path(&Self::key(project_key))
    }

    pub fn exists(&self, project_key: &str) -> Result<bool> {
        self.db.storage().exists(&Self::key(project_key))
    }

    /// Persists `project`.
    ///
    /// Modules require their parent to be stored already. Without `force` an
    /// existing project is never overwritten.
    pub fn save(&self, project: &Project, force: bool) -> Result<()> {
        if project.key.is_empty() {
            return Err(Error::EmptyProjectKey);
        }

        if let Some(parent) = project.parent() {
            if !self.exists(parent)? {
                return Err(Error::ParentlessModule(project.key.clone()));
            }
        }

        let key = Self::key(&project.key);
        if !force && self.db.storage().exists(&key)? {
            return Err(Error::already_exists(Entity::Project, &project.key));
        }

        self.db.storage().save(&key, &to_json(project)?)?;
        tracing::debug!(key = %key, force, "project saved");
        Ok(())
    }

    pub fn load(&self, project_key: &str) -> Result<Project> {
        match self.db.storage().load(&Self::key(project_key))? {
            Some(data) => Ok(serde_json::from_slice(&data)?),
            None => Err(Error::not_found(Entity::Project, project_key)),
        }
    }

    /// All stored projects sorted by file name. Backups are skipped.
    pub fn list(&self) -> Result<Vec<Project>> {
        let entries = self.db.storage().list(PROJECTS_DIR)?;
        let mut projects = vec![];

        for entry in entries {
            if entry.is_namespace || !entry.name.ends_with(JSON_EXT) {
                continue;
            }
            if let Some(data) = self.db.storage().load(&join(PROJECTS_DIR, &entry.name))? {
                projects.push(serde_json::from_slice(&data)?);
            }
        }

        Ok(projects)
    }

    /// Modules whose parent is `parent_key`.
    pub fn list_modules(&self, parent_key: &str) -> Result<Vec<Project>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|project| project.parent() == Some(parent_key))
            .collect())
    }

    /// Comma separated module names of `parent_key`, `-` if it has none.
    pub fn module_names(&self, parent_key: &str) -> Result<String> {
        let modules = self.list_modules(parent_key)?;
        if modules.is_empty() {
            return Ok("-".to_string());
        }
        Ok(modules.iter().map(Project::module_name).collect::<Vec<_>>().join(","))
    }

    fn delete_key(&self, project_key: &str) -> Result<()> {
        let key = Self::key(project_key);
        if !self.db.storage().delete(&key)? {
            return Err(Error::not_found(Entity::Project, project_key));
        }
        tracing::debug!(key = %key, "project deleted");
        Ok(())
    }

    /// Deletes `project` and its modules, modules first. Stops at the first
    /// failure without restoring what was already removed.
    pub fn delete(&self, project: &Project) -> Result<()> {
        if !self.exists(&project.key)? {
            return Err(Error::not_found(Entity::Project, &project.key));
        }

        for module in self.list_modules(&project.key)? {
            self.delete_key(&module.key)?;
        }

        self.delete_key(&project.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(Projects::sanitize("a/b\\c"), "a-b-c");
        assert_eq!(Projects::key("design@acme"), "projects/design@acme.json");
        assert_eq!(Projects::backup_key("../x"), "projects/..-x.json.bak");
    }
}
