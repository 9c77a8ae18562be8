//! Record entity: one tracked span of work.
//!
//! A record is keyed by its start time. The end is modelled as [`End`] so that
//! "is this timer running" is a match on the type rather than a null check.
//! On disk the end is still written as a timestamp or `null`.

use super::error::{Error, Result};
use super::project::{parent_of, Project};
use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// Maximum number of tags a record may carry.
pub const MAX_TAGS: usize = 3;

/// End state of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<DateTime<Local>>", into = "Option<DateTime<Local>>")]
pub enum End {
    /// The timer is still running.
    Running,
    /// The timer was stopped at the given time.
    Stopped(DateTime<Local>),
}

impl End {
    pub fn is_running(&self) -> bool {
        matches!(self, End::Running)
    }

    pub fn time(&self) -> Option<DateTime<Local>> {
        match self {
            End::Running => None,
            End::Stopped(end) => Some(*end),
        }
    }
}

impl From<Option<DateTime<Local>>> for End {
    fn from(end: Option<DateTime<Local>>) -> Self {
        match end {
            Some(end) => End::Stopped(end),
            None => End::Running,
        }
    }
}

impl From<End> for Option<DateTime<Local>> {
    fn from(end: End) -> Self {
        end.time()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub start: DateTime<Local>,
    pub end: End,
    pub project: Option<Project>,
    pub is_billable: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record {
    /// Creates a running record.
    pub fn start(start: DateTime<Local>, project: Option<Project>, is_billable: bool, tags: Vec<String>) -> Self {
        Record {
            start,
            end: End::Running,
            project,
            is_billable,
            tags,
        }
    }

    /// Creates a stopped record spanning `start..end`.
    pub fn closed(start: DateTime<Local>, end: DateTime<Local>, project: Option<Project>, is_billable: bool) -> Result<Self> {
        if end < start {
            return Err(Error::EndBeforeStart);
        }
        Ok(Record {
            start,
            end: End::Stopped(end),
            project,
            is_billable,
            tags: vec![],
        })
    }

    pub fn is_running(&self) -> bool {
        self.end.is_running()
    }

    /// Key of the owning project, if any.
    pub fn project_key(&self) -> Option<&str> {
        self.project.as_ref().map(|project| project.key.as_str())
    }

    /// Whether the record is tracked against `key`.
    ///
    /// A module key (`design@acme`) matches exactly. A plain key also matches
    /// every module whose parent it is.
    pub fn belongs_to(&self, key: &str) -> bool {
        let Some(record_key) = self.project_key() else {
            return false;
        };
        if record_key == key {
            return true;
        }
        parent_of(key).is_none() && parent_of(record_key) == Some(key)
    }

    /// Tracked duration up to `now` for running records.
    pub fn duration_at(&self, now: DateTime<Local>) -> Duration {
        match self.end {
            End::Stopped(end) => end - self.start,
            End::Running => now - self.start,
        }
    }

    /// Tracked duration; a running record counts up to the current time.
    pub fn duration(&self) -> Duration {
        self.duration_at(Local::now())
    }

    /// Stops the record at `at`.
    pub fn stop(&mut self, at: DateTime<Local>) -> Result<()> {
        if at < self.start {
            return Err(Error::EndBeforeStart);
        }
        self.end = End::Stopped(at);
        Ok(())
    }

    /// Moves the end time by `delta`. Running records cannot be shifted.
    pub fn shift_end(&mut self, delta: Duration) -> Result<()> {
        let end = match self.end {
            End::Running => return Err(Error::RecordInProgress),
            End::Stopped(end) => end,
        };
        let new_end = end
            .checked_add_signed(delta)
            .ok_or_else(|| Error::InvalidDuration(delta.to_string()))?;
        if new_end < self.start {
            return Err(Error::EndBeforeStart);
        }
        self.end = End::Stopped(new_end);
        Ok(())
    }
}

/// Turns `+tag` command line arguments into tag names.
pub fn extract_tag_names(tags_with_prefix: &[String]) -> Result<Vec<String>> {
    if tags_with_prefix.len() > MAX_TAGS {
        return Err(Error::TooManyTags(tags_with_prefix.len()));
    }

    tags_with_prefix
        .iter()
        .map(|tag| match tag.strip_prefix('+') {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(Error::InvalidTag(tag.clone())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 5, 1, hour, min, 0).unwrap()
    }

    #[test]
    fn test_end_serializes_as_nullable_timestamp() {
        let record = Record::start(at(9, 0), Some(Project::new("acme")), false, vec![]);
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["end"].is_null());
        assert_eq!(value["project"]["key"], "acme");

        let stopped = Record::closed(at(9, 0), at(10, 0), None, true).unwrap();
        let json = serde_json::to_string(&stopped).unwrap();
        let decoded: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.end, End::Stopped(at(10, 0)));
        assert!(decoded.project.is_none());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let json = r#"{"start":"2021-05-01T09:00:00+00:00","end":null,"project":null,"is_billable":false}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(record.tags.is_empty());
        assert!(record.is_running());
    }

    #[test]
    fn test_duration() {
        let record = Record::closed(at(9, 0), at(12, 0), None, false).unwrap();
        assert_eq!(record.duration(), Duration::hours(3));

        let running = Record::start(at(9, 0), None, false, vec![]);
        assert_eq!(running.duration_at(at(9, 45)), Duration::minutes(45));
        assert!(running.duration_at(at(10, 0)) >= running.duration_at(at(9, 45)));
    }

    #[test]
    fn test_belongs_to() {
        let module = Record::start(at(9, 0), Some(Project::new("design@acme")), false, vec![]);
        assert!(module.belongs_to("acme"));
        assert!(module.belongs_to("design@acme"));
        assert!(!module.belongs_to("review@acme"));
        assert!(!module.belongs_to("design"));

        let plain = Record::start(at(9, 0), Some(Project::new("acme")), false, vec![]);
        assert!(plain.belongs_to("acme"));
        assert!(!plain.belongs_to("design@acme"));

        let unassigned = Record::start(at(9, 0), None, false, vec![]);
        assert!(!unassigned.belongs_to("acme"));
    }

    #[test]
    fn test_closed_rejects_end_before_start() {
        assert!(matches!(Record::closed(at(10, 0), at(9, 0), None, false), Err(Error::EndBeforeStart)));
    }

    #[test]
    fn test_shift_end() {
        let mut record = Record::closed(at(9, 0), at(10, 0), None, false).unwrap();
        record.shift_end(Duration::minutes(30)).unwrap();
        assert_eq!(record.end.time(), Some(at(10, 30)));

        assert!(matches!(record.shift_end(Duration::hours(-2)), Err(Error::EndBeforeStart)));

        let mut running = Record::start(at(9, 0), None, false, vec![]);
        assert!(matches!(running.shift_end(Duration::minutes(5)), Err(Error::RecordInProgress)));
    }

    #[test]
    fn test_shift_end_out_of_range() {
        let mut record = Record::closed(at(9, 0), at(10, 0), None, false).unwrap();
        assert!(matches!(record.shift_end(Duration::MAX), Err(Error::InvalidDuration(_))));
        assert_eq!(record.end.time(), Some(at(10, 0)));
    }

    #[test]
    fn test_extract_tag_names() {
        let tags = vec!["+coffee".to_string(), "+espresso".to_string()];
        assert_eq!(extract_tag_names(&tags).unwrap(), vec!["coffee", "espresso"]);

        let invalid = vec!["coffee".to_string()];
        assert!(matches!(extract_tag_names(&invalid), Err(Error::InvalidTag(_))));

        let too_many: Vec<String> = (0..4).map(|i| format!("+t{}", i)).collect();
        assert!(matches!(extract_tag_names(&too_many), Err(Error::TooManyTags(4))));
    }
}
