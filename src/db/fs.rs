//! Flat-file storage backend.
//!
//! Every key maps to a file below the root directory. No locking is done;
//! the backend assumes a single process works on the tree at a time.

use super::storage::{Entry, Storage};
use crate::libs::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> PathBuf {
        key.split('/').filter(|segment| !segment.is_empty()).fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.resolve(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.resolve(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&path)?;
        std::io::Write::write_all(&mut file, data)?;
        Ok(())
    }

    fn list(&self, namespace: &str) -> Result<Vec<Entry>> {
        let dir = self.resolve(namespace);
        let items = match fs::read_dir(&dir) {
            Ok(items) => items,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut entries = vec![];
        for item in items {
            let item = item?;
            let name = item.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            entries.push(Entry {
                name,
                is_namespace: item.file_type()?.is_dir(),
            });
        }
        entries.sort();

        Ok(entries)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        match fs::remove_file(self.resolve(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.resolve(key).try_exists()?)
    }

    fn ensure(&self, namespace: &str) -> Result<()> {
        fs::create_dir_all(self.resolve(namespace))?;
        Ok(())
    }

    fn path(&self, key: &str) -> Option<PathBuf> {
        Some(self.resolve(key))
    }
}
