//! In-memory storage backend.
//!
//! Holds every key in a sorted map. Namespaces exist implicitly as long as a
//! key below them exists, so an emptied namespace disappears.

use super::storage::{Entry, Storage};
use crate::libs::error::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, data: &[u8]) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn list(&self, namespace: &str) -> Result<Vec<Entry>> {
        let prefix = format!("{}/", namespace.trim_end_matches('/'));
        let mut entries: Vec<Entry> = vec![];

        for key in self.entries.borrow().keys() {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            let (name, is_namespace) = match rest.split_once('/') {
                Some((name, _)) => (name, true),
                None => (rest, false),
            };
            if name.starts_with('.') || entries.iter().any(|entry| entry.name == name) {
                continue;
            }
            entries.push(Entry {
                name: name.to_string(),
                is_namespace,
            });
        }
        entries.sort();

        Ok(entries)
    }

    fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.borrow().contains_key(key))
    }
}
