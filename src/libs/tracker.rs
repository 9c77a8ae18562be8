//! Time tracking workflow on top of the stores.
//!
//! Only one record may run at a time: starting while the latest record is
//! still open fails with [`Error::NoEndTime`], stopping without a running
//! record fails with [`Error::TrackingNotStarted`].

use super::error::{Entity, Error, Result};
use super::formatter::Formatter;
use super::record::{Record, MAX_TAGS};
use crate::db::backups::Backups;
use crate::db::db::Db;
use crate::db::projects::Projects;
use crate::db::records::Records;
use chrono::{DateTime, Duration, Local};

/// Selector accepted wherever a single record is addressed on the command line.
pub const LATEST_SELECTOR: &str = "latest";
pub const ID_PREFIX: char = '@';

/// Tracking summary for today.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    /// The running record, if any.
    pub current: Option<Record>,
    pub tracked_current: Option<Duration>,
    pub tracked_today: Duration,
    /// Sum of the gaps between consecutive records of today.
    pub break_today: Duration,
}

pub struct Tracker<'a> {
    db: &'a Db,
}

impl<'a> Tracker<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    fn records(&self) -> Records<'a> {
        Records::new(self.db)
    }

    /// Latest record, treating a tree with only empty days as empty.
    fn latest(&self) -> Result<Option<Record>> {
        match self.records().load_latest() {
            Err(Error::AllDirectoriesEmpty) => Ok(None),
            other => other,
        }
    }

    pub fn start(&self, project_key: Option<&str>, is_billable: bool, tags: Vec<String>) -> Result<Record> {
        self.start_at(project_key, is_billable, tags, Local::now())
    }

    /// Opens a new record at `now`.
    pub fn start_at(&self, project_key: Option<&str>, is_billable: bool, tags: Vec<String>, now: DateTime<Local>) -> Result<Record> {
        if let Some(latest) = self.latest()? {
            if latest.is_running() {
                return Err(Error::NoEndTime);
            }
        }

        if tags.len() > MAX_TAGS {
            return Err(Error::TooManyTags(tags.len()));
        }

        let project = match project_key {
            Some(key) => Some(Projects::new(self.db).load(key)?),
            None => None,
        };

        let record = Record::start(now, project, is_billable, tags);
        self.records().save(&record, false)?;
        tracing::debug!(start = %record.start, project = ?record.project_key(), "tracking started");
        Ok(record)
    }

    pub fn stop(&self) -> Result<Record> {
        self.stop_at(Local::now())
    }

    /// Closes the running record at `now`.
    pub fn stop_at(&self, now: DateTime<Local>) -> Result<Record> {
        let mut record = match self.latest()? {
            Some(record) if record.is_running() => record,
            _ => return Err(Error::TrackingNotStarted),
        };

        record.stop(now)?;
        self.records().save(&record, true)?;
        tracing::debug!(start = %record.start, "tracking stopped");
        Ok(record)
    }

    pub fn status(&self) -> Result<Status> {
        self.status_at(Local::now())
    }

    pub fn status_at(&self, now: DateTime<Local>) -> Result<Status> {
        let today = now.date_naive();
        let records = self.records();

        if records.load_oldest(today)?.is_none() {
            return Err(Error::TrackingNotStarted);
        }

        let todays = records.list_sorted_ascending(today)?;
        let tracked_today = todays.iter().fold(Duration::zero(), |sum, record| sum + record.duration_at(now));

        let break_today = todays.windows(2).fold(Duration::zero(), |sum, pair| match pair[0].end.time() {
            Some(end) if pair[1].start > end => sum + (pair[1].start - end),
            _ => sum,
        });

        let current = self.latest()?.filter(Record::is_running);
        let tracked_current = current.as_ref().map(|record| record.duration_at(now));

        Ok(Status {
            current,
            tracked_current,
            tracked_today,
            break_today,
        })
    }

    /// Stores a closed record. The project, if any, must exist.
    pub fn create(&self, record: &Record) -> Result<()> {
        if let Some(end) = record.end.time() {
            if end < record.start {
                return Err(Error::EndBeforeStart);
            }
        }
        if let Some(key) = record.project_key() {
            Projects::new(self.db).load(key)?;
        }
        self.records().save(record, false)
    }

    /// Moves the end of the record started at `start` by `delta`, after
    /// backing it up.
    pub fn edit_delta(&self, start: &DateTime<Local>, delta: Duration) -> Result<Record> {
        let records = self.records();
        let mut record = records.load(start)?;

        record.shift_end(delta)?;
        Backups::new(self.db).backup_record(start)?;
        records.save(&record, true)?;
        tracing::debug!(start = %start, delta = %delta, "record end shifted");
        Ok(record)
    }

    /// The `id`-th record of `now`'s day, counting from 1.
    pub fn load_by_id_at(&self, id: usize, now: DateTime<Local>) -> Result<Record> {
        self.records()
            .load_by_id(now.date_naive(), id)?
            .ok_or_else(|| Error::not_found(Entity::Record, format!("{}{}", ID_PREFIX, id)))
    }

    pub fn load_by_id(&self, id: usize) -> Result<Record> {
        self.load_by_id_at(id, Local::now())
    }

    /// Resolves `latest`, `@ID` or a record key to a stored record.
    pub fn resolve(&self, selector: &str, formatter: &Formatter) -> Result<Record> {
        if selector.eq_ignore_ascii_case(LATEST_SELECTOR) {
            return self
                .latest()?
                .ok_or_else(|| Error::not_found(Entity::Record, LATEST_SELECTOR));
        }

        if let Some(id) = selector.strip_prefix(ID_PREFIX) {
            let id = id.parse().map_err(|_| Error::InvalidRecordKey(selector.to_string()))?;
            return self.load_by_id(id);
        }

        let start = formatter.parse_record_key(selector)?;
        self.records().load(&start)
    }
}
