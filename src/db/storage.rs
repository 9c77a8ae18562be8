//! Key-value storage seam.
//!
//! Stores address their data through slash-separated keys such as
//! `projects/acme.json` or `records/2021-05-01/09-00.json`. The first segments
//! act as namespaces that can be listed. [`FileStorage`](super::fs::FileStorage)
//! maps keys onto a directory tree; [`MemoryStorage`](super::memory::MemoryStorage)
//! keeps them in a map.

use crate::libs::error::Result;
use std::path::PathBuf;

/// Direct child of a namespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    pub name: String,
    /// True if the entry is itself a namespace (a directory on disk).
    pub is_namespace: bool,
}

pub trait Storage {
    /// Reads the value stored at `key`, `None` if it does not exist.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Writes `data` to `key`, creating missing namespaces and replacing any
    /// previous value.
    fn save(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Lists the direct children of `namespace` sorted by name. A namespace
    /// that does not exist lists as empty. Hidden entries are skipped.
    fn list(&self, namespace: &str) -> Result<Vec<Entry>>;

    /// Removes `key`. Returns false if there was nothing to remove.
    fn delete(&self, key: &str) -> Result<bool>;

    fn exists(&self, key: &str) -> Result<bool>;

    /// Makes sure `namespace` exists even while empty.
    fn ensure(&self, _namespace: &str) -> Result<()> {
        Ok(())
    }

    /// Filesystem location of `key` for backends that have one.
    fn path(&self, _key: &str) -> Option<PathBuf> {
        None
    }
}

/// Joins key segments with `/`.
pub fn join(namespace: &str, name: &str) -> String {
    format!("{}/{}", namespace, name)
}
