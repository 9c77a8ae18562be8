use super::config::{Config, CONFIG_KEYS};
use super::formatter::{Formatter, DEFAULT_STRING};
use super::messages::Message;
use super::project::Project;
use super::record::{End, Record};
use super::report::Report;
use super::tracker::Status;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Projects with their module names. `modules` is parallel to `projects`.
    pub fn projects(projects: &[Project], modules: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "KEY", "MODULES"]);
        for (index, (project, module_names)) in projects.iter().zip(modules).enumerate() {
            table.add_row(row![index + 1, project.key, module_names]);
        }
        table.printstd();

        Ok(())
    }

    pub fn project(project: &Project, modules: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "MODULES"]);
        table.add_row(row![project.key, modules]);
        table.printstd();

        Ok(())
    }

    pub fn records(records: &[Record], formatter: &Formatter) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "KEY", "PROJECT", "START", "END", "BILLABLE", "TAGS"]);
        for (index, record) in records.iter().enumerate() {
            table.add_row(row![
                index + 1,
                formatter.record_key(&record.start),
                record.project_key().unwrap_or(DEFAULT_STRING),
                formatter.time_string(&record.start),
                end_string(&record.end, formatter),
                if record.is_billable { "yes" } else { "no" },
                formatter.format_tags(&record.tags)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn record(record: &Record, formatter: &Formatter) -> Result<()> {
        Self::records(std::slice::from_ref(record), formatter)
    }

    pub fn report(report: &Report, formatter: &Formatter) -> Result<()> {
        let (rows, total) = report.table(formatter);
        let mut table = Table::new();

        table.add_row(row!["PROJECT", "MODULE", "DATE", "START", "END", "BILLABLE", "TOTAL"]);
        for cells in rows {
            table.add_row(Row::new(cells.iter().map(|cell| Cell::new(cell)).collect()));
        }
        table.printstd();
        msg_print!(Message::ReportTotal(total));

        Ok(())
    }

    pub fn status(status: &Status, formatter: &Formatter) -> Result<()> {
        let project = status
            .current
            .as_ref()
            .and_then(Record::project_key)
            .unwrap_or(DEFAULT_STRING);
        let current = status
            .tracked_current
            .map(|duration| formatter.format_duration(&duration))
            .unwrap_or_else(|| DEFAULT_STRING.to_string());

        let mut table = Table::new();
        table.add_row(row!["CURRENT PROJECT", "WORKED SINCE START", "WORKED TODAY", "BREAKS"]);
        table.add_row(row![
            project,
            current,
            formatter.format_duration(&status.tracked_today),
            formatter.format_duration(&status.break_today)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn config(config: &Config) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["KEY", "VALUE"]);
        for key in CONFIG_KEYS {
            table.add_row(row![key, config.get(key)?]);
        }
        for (key, project) in &config.projects {
            table.add_row(row![format!("projects.{}.billable", key), project.billable]);
        }
        table.printstd();

        Ok(())
    }
}

fn end_string(end: &End, formatter: &Formatter) -> String {
    match end {
        End::Stopped(end) => formatter.time_string(end),
        End::Running => "still running".to_string(),
    }
}
