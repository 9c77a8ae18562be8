use super::{confirm, formatter};
use crate::{
    db::{backups::Backups, db::Db, projects::Projects, records::Records},
    libs::{config::Config, messages::Message, tracker::Tracker, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[command(subcommand)]
    command: DeleteCommand,
    /// Do not ask for confirmation
    #[arg(long, global = true)]
    yes: bool,
}

#[derive(Debug, Subcommand)]
enum DeleteCommand {
    /// Delete a project together with its modules and their records
    Project {
        key: String,
        /// Undo the last delete from the backups instead
        #[arg(short, long)]
        revert: bool,
        /// Leave the records of the project untouched
        #[arg(short, long)]
        exclude_records: bool,
    },
    /// Delete a record by key (YYYY-MM-DD-HH-MM), `latest` or `@ID`
    Record {
        key: String,
        /// Undo the last delete from the backup instead; needs the full record
        /// key (YYYY-MM-DD-HH-MM), `latest` and `@ID` only address live records
        #[arg(short, long)]
        revert: bool,
    },
}

pub fn cmd(args: DeleteArgs, config: &Config, db: &Db) -> Result<()> {
    match args.command {
        DeleteCommand::Project {
            key,
            revert: true,
            exclude_records,
        } => revert_project(key, exclude_records, db),
        DeleteCommand::Project { key, exclude_records, .. } => delete_project(key, exclude_records, args.yes, db),
        DeleteCommand::Record { key, revert: true } => revert_record(&key, config, db),
        DeleteCommand::Record { key, .. } => delete_record(&key, args.yes, config, db),
    }
}

fn delete_project(key: String, exclude_records: bool, yes: bool, db: &Db) -> Result<()> {
    let projects = Projects::new(db);
    let project = projects.load(&key)?;

    if !yes && !confirm(Message::ConfirmDeleteProject(key.clone()))? {
        msg_info!(Message::ProjectNotDeleted);
        return Ok(());
    }

    let backups = Backups::new(db);
    for module in projects.list_modules(&key)? {
        backups.backup_project(&module.key)?;
    }
    backups.backup_project(&key)?;

    if !exclude_records {
        let deleted = Records::new(db).delete_by_project(&key)?;
        msg_info!(Message::RecordsDeletedCount(deleted));
    }

    projects.delete(&project)?;
    msg_success!(Message::ProjectDeleted(key));
    Ok(())
}

fn revert_project(key: String, exclude_records: bool, db: &Db) -> Result<()> {
    let backups = Backups::new(db);
    backups.revert_project(&key)?;

    if !exclude_records {
        let reverted = backups.revert_records_by_project(&key)?;
        msg_info!(Message::RecordsRevertedCount(reverted));
    }

    msg_success!(Message::ProjectReverted(key));
    Ok(())
}

fn delete_record(key: &str, yes: bool, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);
    let record = Tracker::new(db).resolve(key, &formatter)?;

    View::record(&record, &formatter)?;
    if !yes && !confirm(Message::ConfirmDeleteRecord)? {
        msg_info!(Message::RecordNotDeleted);
        return Ok(());
    }

    Backups::new(db).backup_record(&record.start)?;
    Records::new(db).delete(&record)?;

    msg_success!(Message::RecordDeleted(formatter.record_key(&record.start)));
    Ok(())
}

fn revert_record(key: &str, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);
    let start = formatter.parse_record_key(key)?;

    Backups::new(db).revert_record(&start)?;
    msg_success!(Message::RecordReverted(formatter.record_key(&start)));
    Ok(())
}
