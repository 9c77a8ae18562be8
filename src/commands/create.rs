use super::{confirm, formatter};
use crate::{
    db::{db::Db, projects::Projects, records::Records},
    libs::{
        collision::collisions, config::Config, messages::Message, project::Project, record::Record, tracker::Tracker,
        view::View,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[command(subcommand)]
    command: CreateCommand,
}

#[derive(Debug, Subcommand)]
enum CreateCommand {
    /// Create a project; `module@project` creates a module of an existing project
    Project {
        key: String,
    },
    /// Create a finished record for a project
    Record {
        /// Project key
        project: String,
        /// `today`, `yesterday` or YYYY-MM-DD
        date: String,
        /// Start time, HH:MM or hh:mmPM
        start: String,
        /// End time, HH:MM or hh:mmPM
        end: String,
        /// Mark the record as billable
        #[arg(short, long)]
        billable: bool,
        /// Create the record even if it overlaps existing ones
        #[arg(long)]
        yes: bool,
    },
}

pub fn cmd(args: CreateArgs, config: &Config, db: &Db) -> Result<()> {
    match args.command {
        CreateCommand::Project { key } => handle_project(key, db),
        CreateCommand::Record {
            project,
            date,
            start,
            end,
            billable,
            yes,
        } => handle_record(project, &date, &start, &end, billable, yes, config, db),
    }
}

fn handle_project(key: String, db: &Db) -> Result<()> {
    Projects::new(db).save(&Project::new(&key), false)?;
    msg_success!(Message::ProjectCreated(key));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_record(project: String, date: &str, start: &str, end: &str, billable: bool, yes: bool, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);

    let date = formatter.parse_date(date)?;
    let start = formatter.combine(date, formatter.parse_time(start)?)?;
    let end = formatter.combine(date, formatter.parse_time(end)?)?;

    let project = Projects::new(db).load(&project)?;
    let is_billable = billable || config.is_billable(&project.key).unwrap_or(false);
    let record = Record::closed(start, end, Some(project), is_billable)?;

    let overlapping = collisions(&Records::new(db), &record)?;
    if !overlapping.is_empty() {
        msg_warning!(Message::CollisionsFound(overlapping.len()));
        View::records(&overlapping, &formatter)?;

        if !yes && !confirm(Message::ConfirmCreateWithCollisions)? {
            msg_info!(Message::RecordNotCreated);
            return Ok(());
        }
    }

    Tracker::new(db).create(&record)?;
    msg_success!(Message::RecordCreated(formatter.record_key(&record.start)));
    Ok(())
}
