//! Report aggregation: filter, group by project, total.
//!
//! Records pass through an ordered list of [`Filter`]s combined with logical
//! AND, are grouped under their project key normalized to the parent (module
//! time rolls up into the parent) and summed. The table and JSON projections
//! both read the same [`Report`], so their totals cannot diverge.

use super::formatter::{Formatter, DEFAULT_STRING};
use super::record::{End, Record};
use crate::db::db::to_json;
use crate::db::records::Records;
use crate::libs::error::Result;
use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Group key of records without a project.
pub const NO_PROJECT_KEY: &str = "-";
const TOTAL_SYMBOL: &str = "∑";

/// Predicate over a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Excludes the running record.
    HasEndTime,
    /// Start date within `start..=end`; a missing bound is open.
    TimeRange { start: Option<NaiveDate>, end: Option<NaiveDate> },
    /// Exact key, or for a plain key also any of its modules.
    ByProject(String),
    ByBillable(bool),
}

impl Filter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Filter::HasEndTime => !record.is_running(),
            Filter::TimeRange { start, end } => {
                let date = record.start.date_naive();
                start.map_or(true, |start| date >= start) && end.map_or(true, |end| date <= end)
            }
            Filter::ByProject(key) => record.belongs_to(key),
            Filter::ByBillable(billable) => record.is_billable == *billable,
        }
    }
}

/// Whether `record` passes every filter.
pub fn matches_all(filters: &[Filter], record: &Record) -> bool {
    filters.iter().all(|filter| filter.matches(record))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub records: Vec<Record>,
    pub total: Duration,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    groups: BTreeMap<String, Group>,
    total: Duration,
}

#[derive(Serialize)]
struct JsonGroup<'a> {
    records: &'a [Record],
    /// Nanoseconds.
    total: i64,
}

impl Report {
    /// Aggregates `records` that pass `filters`. Running records count up to
    /// `now`.
    pub fn build(records: impl IntoIterator<Item = Record>, filters: &[Filter], now: DateTime<Local>) -> Report {
        let mut report = Report::default();

        for record in records.into_iter().filter(|record| matches_all(filters, record)) {
            let key = record
                .project
                .as_ref()
                .map(|project| project.group_key().to_string())
                .unwrap_or_else(|| NO_PROJECT_KEY.to_string());

            let duration = record.duration_at(now);
            let group = report.groups.entry(key).or_default();
            group.total = group.total + duration;
            group.records.push(record);
            report.total = report.total + duration;
        }

        report
    }

    /// Aggregates every stored record.
    pub fn load(records: &Records, filters: &[Filter]) -> Result<Report> {
        Ok(Self::build(records.list_all()?, filters, Local::now()))
    }

    pub fn groups(&self) -> &BTreeMap<String, Group> {
        &self.groups
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Table rows `[project, module, date, start, end, billable, total]`, one
    /// per record plus a total row per group, and the formatted grand total.
    pub fn table(&self, formatter: &Formatter) -> (Vec<Vec<String>>, String) {
        let mut rows = vec![];

        for (key, group) in &self.groups {
            for record in &group.records {
                let module = record
                    .project
                    .as_ref()
                    .filter(|project| project.is_module())
                    .map(|project| project.module_name().to_string())
                    .unwrap_or_default();
                let end = match record.end {
                    End::Stopped(end) => formatter.time_string(&end),
                    End::Running => DEFAULT_STRING.to_string(),
                };

                rows.push(vec![
                    key.clone(),
                    module,
                    formatter.pretty_date_string(&record.start),
                    formatter.time_string(&record.start),
                    end,
                    if record.is_billable { "yes" } else { "no" }.to_string(),
                    String::new(),
                ]);
            }

            let mut total_row = vec![String::new(); 5];
            total_row.push(TOTAL_SYMBOL.to_string());
            total_row.push(formatter.format_duration(&group.total));
            rows.push(total_row);
        }

        (rows, formatter.format_duration(&self.total))
    }

    /// `{ "<project>": { "records": [...], "total": <nanoseconds> } }`,
    /// tab indented like the stored entities.
    pub fn json(&self) -> Result<Vec<u8>> {
        let groups: BTreeMap<&str, JsonGroup> = self
            .groups
            .iter()
            .map(|(key, group)| {
                let total = group.total.num_nanoseconds().unwrap_or(i64::MAX);
                (key.as_str(), JsonGroup { records: &group.records, total })
            })
            .collect();
        to_json(&groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::project::Project;
    use chrono::TimeZone;

    fn record(day: u32, from: u32, to: u32, key: Option<&str>, billable: bool) -> Record {
        let start = Local.with_ymd_and_hms(2021, 5, day, from, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2021, 5, day, to, 0, 0).unwrap();
        Record::closed(start, end, key.map(Project::new), billable).unwrap()
    }

    #[test]
    fn test_time_range_is_inclusive_of_whole_end_day() {
        let day = NaiveDate::from_ymd_opt(2021, 5, 2).unwrap();
        let filter = Filter::TimeRange { start: Some(day), end: Some(day) };
        assert!(!filter.matches(&record(1, 22, 23, None, false)));
        assert!(filter.matches(&record(2, 0, 1, None, false)));
        assert!(filter.matches(&record(2, 22, 23, None, false)));
        assert!(!filter.matches(&record(3, 0, 1, None, false)));

        let open = Filter::TimeRange { start: None, end: None };
        assert!(open.matches(&record(1, 9, 10, None, false)));
    }

    #[test]
    fn test_no_project_groups_under_dash() {
        let now = Local::now();
        let report = Report::build(vec![record(1, 9, 10, None, false)], &[], now);
        assert!(report.groups().contains_key(NO_PROJECT_KEY));
    }

    #[test]
    fn test_table_rows() {
        let records = vec![record(1, 9, 12, Some("design@acme"), true), record(1, 13, 14, Some("acme"), false)];
        let report = Report::build(records, &[], Local::now());
        let (rows, total) = report.table(&Formatter::new(false));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["acme", "design", "2021-05-01", "09:00", "12:00", "yes", ""]);
        assert_eq!(rows[1][1], "");
        assert_eq!(rows[2][5], "∑");
        assert_eq!(rows[2][6], "4h 0min");
        assert_eq!(total, "4h 0min");
    }
}
