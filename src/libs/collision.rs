//! Overlap detection between a candidate record and the stored ones.
//!
//! Intervals are half-open, `[start, end)`: a record ending at 10:00 does not
//! collide with one starting at 10:00. A running record has no end and
//! extends indefinitely.

use super::error::{Error, Result};
use super::record::{End, Record};
use crate::db::records::Records;
use chrono::{DateTime, Duration, Local};

/// Whether the half-open intervals of `a` and `b` intersect.
pub fn overlaps(a: &Record, b: &Record) -> bool {
    starts_before_end(&a.start, &b.end) && starts_before_end(&b.start, &a.end)
}

fn starts_before_end(start: &DateTime<Local>, end: &End) -> bool {
    match end {
        End::Running => true,
        End::Stopped(end) => start < end,
    }
}

/// Returns every stored record that overlaps `candidate`, ordered by start.
///
/// Records of the day before the candidate's start are included so spans
/// running over midnight are caught, as is the latest record while it is
/// still running, whatever day it was started.
pub fn collisions(records: &Records, candidate: &Record) -> Result<Vec<Record>> {
    collisions_at(records, candidate, Local::now())
}

/// Same as [`collisions`] with an explicit notion of "now", which bounds the
/// scan for running candidates.
pub fn collisions_at(records: &Records, candidate: &Record, now: DateTime<Local>) -> Result<Vec<Record>> {
    let first = (candidate.start - Duration::days(1)).date_naive();
    let last = match candidate.end {
        End::Stopped(end) => end.date_naive(),
        End::Running => now.date_naive().max(candidate.start.date_naive()),
    };

    let mut stored = vec![];
    for date in records.dates()?.into_iter().filter(|date| (first..=last).contains(date)) {
        stored.extend(records.list(date)?);
    }

    match records.load_latest() {
        Ok(Some(latest)) if latest.is_running() => stored.push(latest),
        Ok(_) | Err(Error::AllDirectoriesEmpty) => {}
        Err(err) => return Err(err),
    }

    stored.sort_by_key(|record| record.start);
    stored.dedup_by_key(|record| record.start);

    let found: Vec<Record> = stored.into_iter().filter(|record| overlaps(record, candidate)).collect();
    tracing::debug!(start = %candidate.start, count = found.len(), "collision check");
    Ok(found)
}
