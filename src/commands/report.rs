use super::formatter;
use crate::{
    db::{db::Db, records::Records},
    libs::{
        config::Config,
        messages::Message,
        report::{Filter, Report},
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// First day of the report: `today`, `yesterday` or YYYY-MM-DD
    #[arg(short, long)]
    start: Option<String>,
    /// Last day of the report, inclusive
    #[arg(short, long)]
    end: Option<String>,
    /// Only records of this project or its modules
    #[arg(short, long)]
    project: Option<String>,
    /// Only billable records
    #[arg(short, long, conflicts_with = "non_billable")]
    billable: bool,
    /// Only non-billable records
    #[arg(long)]
    non_billable: bool,
    /// Output format, available: json
    #[arg(short, long)]
    output: Option<String>,
    /// File to write the JSON report to
    #[arg(short, long)]
    file: Option<PathBuf>,
}

pub fn cmd(args: ReportArgs, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);

    let start = args.start.as_deref().map(|date| formatter.parse_date(date)).transpose()?;
    let end = args.end.as_deref().map(|date| formatter.parse_date(date)).transpose()?;

    let mut filters = vec![Filter::HasEndTime, Filter::TimeRange { start, end }];
    if let Some(project) = args.project {
        filters.push(Filter::ByProject(project));
    }
    if args.billable {
        filters.push(Filter::ByBillable(true));
    } else if args.non_billable {
        filters.push(Filter::ByBillable(false));
    }

    let report = Report::load(&Records::new(db), &filters)?;

    match args.output.as_deref() {
        Some("json") => {
            let path = db.write_report(args.file.as_deref(), &report.json()?)?;
            msg_success!(Message::ReportWritten(path));
            Ok(())
        }
        Some(other) => msg_bail_anyhow!(Message::UnknownOutputFormat(other.to_string())),
        None if report.is_empty() => {
            msg_info!(Message::ReportEmpty);
            Ok(())
        }
        None => View::report(&report, &formatter),
    }
}
