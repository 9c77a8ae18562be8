use super::formatter;
use crate::{
    db::db::Db,
    libs::{
        config::Config,
        error::Error,
        formatter::{Formatter, DEFAULT_STRING},
        messages::Message,
        record::Record,
        tracker::{Status, Tracker},
        view::View,
    },
    msg_bail_anyhow, msg_info,
};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Format string, available: {project}, {trackedTimeCurrent},
    /// {trackedTimeToday}, {breakTimeToday}
    #[arg(short, long)]
    format: Option<String>,
    /// Output format, available: json
    #[arg(short, long)]
    output: Option<String>,
}

/// Status as printed by `--format` and `--output json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    project: String,
    tracked_time_current: String,
    tracked_time_today: String,
    break_time_today: String,
}

impl StatusReport {
    fn new(status: &Status, formatter: &Formatter) -> Self {
        StatusReport {
            project: status
                .current
                .as_ref()
                .and_then(Record::project_key)
                .unwrap_or(DEFAULT_STRING)
                .to_string(),
            tracked_time_current: status
                .tracked_current
                .map(|duration| formatter.format_duration(&duration))
                .unwrap_or_else(|| DEFAULT_STRING.to_string()),
            tracked_time_today: formatter.format_duration(&status.tracked_today),
            break_time_today: formatter.format_duration(&status.break_today),
        }
    }

    fn apply(&self, format: &str) -> String {
        format
            .replace("{project}", &self.project)
            .replace("{trackedTimeCurrent}", &self.tracked_time_current)
            .replace("{trackedTimeToday}", &self.tracked_time_today)
            .replace("{breakTimeToday}", &self.break_time_today)
            .replace("\\n", "\n")
    }
}

pub fn cmd(args: StatusArgs, config: &Config, db: &Db) -> Result<()> {
    let status = match Tracker::new(db).status() {
        Ok(status) => status,
        Err(Error::TrackingNotStarted) => {
            msg_info!(Message::TrackingNotStartedToday);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let formatter = formatter(config);
    let report = StatusReport::new(&status, &formatter);

    if let Some(format) = args.format {
        print!("{}", report.apply(&format));
        return Ok(());
    }

    match args.output.as_deref() {
        Some("json") => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Some(other) => msg_bail_anyhow!(Message::UnknownOutputFormat(other.to_string())),
        None => {
            if status.current.is_none() {
                msg_info!(Message::TrackingNotActive);
            }
            View::status(&status, &formatter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_placeholders() {
        let status = Status {
            current: None,
            tracked_current: None,
            tracked_today: Duration::minutes(90),
            break_today: Duration::minutes(15),
        };
        let report = StatusReport::new(&status, &Formatter::default());
        assert_eq!(report.apply("{project} {trackedTimeToday}\\n{breakTimeToday}"), "--- 1h 30min\n0h 15min");
        assert_eq!(report.tracked_time_current, "---");
    }
}
