//! Record store: one JSON file per record, sharded by calendar date.
//!
//! ## Layout
//!
//! ```text
//! <root>/records/2021-05-01/09-00.json       live record started 09:00
//! <root>/records/2021-05-01/09-00.json.bak   its backup generation
//! <root>/records/2021-05-01/02-30PM.json     12-hour layout
//! ```
//!
//! The directory is the start date, the file name the start time of day in
//! the configured 12/24-hour layout. Path derivation is part of the storage
//! contract: a record can only be found again under the layout it was saved
//! with, so the same layout is used for saving and for parsing keys.

use super::backups::Backups;
use super::db::{to_json, Db, BACKUP_EXT, JSON_EXT, RECORDS_DIR};
use super::storage::join;
use crate::libs::error::{Entity, Error, Result};
use crate::libs::formatter::{Formatter, DATE_LAYOUT};
use crate::libs::record::Record;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use std::cmp::Ordering;
use std::path::PathBuf;

const RECORD_FILE_LAYOUT: &str = "%H-%M";
const RECORD_FILE_LAYOUT_12: &str = "%I-%M%p";

pub struct Records<'a> {
    db: &'a Db,
}

impl<'a> Records<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    fn file_layout(&self) -> &'static str {
        if self.db.use_12_hours() {
            RECORD_FILE_LAYOUT_12
        } else {
            RECORD_FILE_LAYOUT
        }
    }

    /// Storage namespace holding all records of `date`.
    pub fn dir_key(date: NaiveDate) -> String {
        join(RECORDS_DIR, &date.format(DATE_LAYOUT).to_string())
    }

    /// Storage key of the live record started at `start`.
    pub fn key(&self, start: &DateTime<Local>) -> String {
        let name = format!("{}{}", start.format(self.file_layout()), JSON_EXT);
        join(&Self::dir_key(start.date_naive()), &name)
    }

    /// Storage key of the backup of the record started at `start`.
    pub fn backup_key(&self, start: &DateTime<Local>) -> String {
        let name = format!("{}{}", start.format(self.file_layout()), BACKUP_EXT);
        join(&Self::dir_key(start.date_naive()), &name)
    }

    /// Filesystem location of the live record, for the editor.
    pub fn path(&self, start: &DateTime<Local>) -> Option<PathBuf> {
        self.db.storage().path(&self.key(start))
    }

    fn display_key(&self, start: &DateTime<Local>) -> String {
        Formatter::new(self.db.use_12_hours()).record_key(start)
    }

    /// Persists `record`. Fails with `AlreadyExists` if a record with the same
    /// start key is stored and `force` is false.
    pub fn save(&self, record: &Record, force: bool) -> Result<()> {
        let key = self.key(&record.start);

        if !force && self.db.storage().exists(&key)? {
            return Err(Error::already_exists(Entity::Record, self.display_key(&record.start)));
        }

        self.db.storage().save(&key, &to_json(record)?)?;
        tracing::debug!(key = %key, force, "record saved");
        Ok(())
    }

    pub fn load(&self, start: &DateTime<Local>) -> Result<Record> {
        self.load_key(&self.key(start))?
            .ok_or_else(|| Error::not_found(Entity::Record, self.display_key(start)))
    }

    pub(crate) fn load_key(&self, key: &str) -> Result<Option<Record>> {
        match self.db.storage().load(key)? {
            Some(data) => Ok(Some(serde_json::from_slice(&data)?)),
            None => Ok(None),
        }
    }

    /// Storage keys of all live records of `date`, in storage order.
    fn record_keys(&self, date: NaiveDate) -> Result<Vec<String>> {
        let dir = Self::dir_key(date);
        let entries = self.db.storage().list(&dir)?;

        Ok(entries
            .into_iter()
            .filter(|entry| !entry.is_namespace && entry.name.ends_with(JSON_EXT))
            .map(|entry| join(&dir, &entry.name))
            .collect())
    }

    fn load_keys(&self, keys: &[String]) -> Result<Vec<Record>> {
        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(record) = self.load_key(key)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// All live records of `date`. Backups are skipped; order is unspecified.
    pub fn list(&self, date: NaiveDate) -> Result<Vec<Record>> {
        self.load_keys(&self.record_keys(date)?)
    }

    fn sorted_keys(&self, date: NaiveDate) -> Result<Vec<String>> {
        let mut keys = self.record_keys(date)?;
        keys.sort_by(|a, b| compare_file_times(a, b));
        Ok(keys)
    }

    /// Records of `date` ordered by the time of day encoded in the file name.
    pub fn list_sorted_ascending(&self, date: NaiveDate) -> Result<Vec<Record>> {
        self.load_keys(&self.sorted_keys(date)?)
    }

    pub fn list_sorted_descending(&self, date: NaiveDate) -> Result<Vec<Record>> {
        let mut keys = self.sorted_keys(date)?;
        keys.reverse();
        self.load_keys(&keys)
    }

    /// Dates that have a record directory, oldest first.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = self.db.storage().list(RECORDS_DIR)?;
        let mut dates: Vec<NaiveDate> = entries
            .into_iter()
            .filter(|entry| entry.is_namespace)
            .filter_map(|entry| NaiveDate::parse_from_str(&entry.name, DATE_LAYOUT).ok())
            .collect();
        dates.sort();
        Ok(dates)
    }

    /// Every live record in the store, day by day.
    pub fn list_all(&self) -> Result<Vec<Record>> {
        let mut records = vec![];
        for date in self.dates()? {
            records.extend(self.list_sorted_ascending(date)?);
        }
        Ok(records)
    }

    pub fn delete(&self, record: &Record) -> Result<()> {
        let key = self.key(&record.start);
        if !self.db.storage().delete(&key)? {
            return Err(Error::not_found(Entity::Record, self.display_key(&record.start)));
        }
        tracing::debug!(key = %key, "record deleted");
        Ok(())
    }

    /// Backs up and deletes every record tracked against `project_key` or one
    /// of its modules. Stops at the first failure; records already deleted
    /// stay deleted and keep their backups.
    pub fn delete_by_project(&self, project_key: &str) -> Result<usize> {
        let backups = Backups::new(self.db);
        let mut deleted = 0;

        for record in self.list_all()?.into_iter().filter(|record| record.belongs_to(project_key)) {
            backups.backup_record(&record.start)?;
            self.delete(&record)?;
            deleted += 1;
        }

        Ok(deleted)
    }

    /// The chronologically last record, which may belong to an earlier day.
    ///
    /// Date directories are scanned from the newest to the oldest, skipping
    /// directories without live records. Returns `None` if there are no record
    /// directories at all and `AllDirectoriesEmpty` if none holds a record.
    pub fn load_latest(&self) -> Result<Option<Record>> {
        let dates = self.dates()?;
        if dates.is_empty() {
            return Ok(None);
        }

        for date in dates.into_iter().rev() {
            let keys = self.sorted_keys(date)?;
            if let Some(key) = keys.last() {
                return self.load_key(key);
            }
        }

        Err(Error::AllDirectoriesEmpty)
    }

    /// The first record of `date`, `None` if nothing was tracked that day.
    pub fn load_oldest(&self, date: NaiveDate) -> Result<Option<Record>> {
        match self.sorted_keys(date)?.first() {
            Some(key) => self.load_key(key),
            None => Ok(None),
        }
    }

    /// The `id`-th record of `date`, counting from 1 in ascending order.
    pub fn load_by_id(&self, date: NaiveDate, id: usize) -> Result<Option<Record>> {
        if id == 0 {
            return Ok(None);
        }
        match self.sorted_keys(date)?.get(id - 1) {
            Some(key) => self.load_key(key),
            None => Ok(None),
        }
    }
}

/// Decodes the time of day from a record key's file name. Both layouts are
/// tried so a directory written before a layout switch still sorts.
fn file_time(key: &str) -> Option<NaiveTime> {
    let name = key.rsplit('/').next()?;
    let stem = name.strip_suffix(JSON_EXT)?;
    NaiveTime::parse_from_str(stem, RECORD_FILE_LAYOUT)
        .or_else(|_| NaiveTime::parse_from_str(stem, RECORD_FILE_LAYOUT_12))
        .ok()
}

fn compare_file_times(a: &str, b: &str) -> Ordering {
    match (file_time(a), file_time(b)) {
        (Some(time_a), Some(time_b)) => time_a.cmp(&time_b).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_time_both_layouts() {
        assert_eq!(file_time("records/2021-05-01/15-04.json"), NaiveTime::from_hms_opt(15, 4, 0));
        assert_eq!(file_time("records/2021-05-01/03-04PM.json"), NaiveTime::from_hms_opt(15, 4, 0));
        assert_eq!(file_time("records/2021-05-01/notes.json"), None);
    }

    #[test]
    fn test_compare_file_times_orders_by_decoded_time() {
        let mut keys = vec!["d/01-00PM.json", "d/09-00.json", "d/10-30.json"];
        keys.sort_by(|a, b| compare_file_times(a, b));
        assert_eq!(keys, vec!["d/09-00.json", "d/10-30.json", "d/01-00PM.json"]);
    }
}
