use super::formatter;
use crate::{
    db::{backups::Backups, db::Db, projects::Projects, records::Records},
    libs::{config::Config, editor, formatter::parse_duration, messages::Message, tracker::Tracker, view::View},
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    #[command(subcommand)]
    command: EditCommand,
}

#[derive(Debug, Subcommand)]
enum EditCommand {
    /// Open a project in the editor
    Project {
        key: String,
        /// Restore the project and its modules from their backups
        #[arg(short, long)]
        revert: bool,
    },
    /// Edit a record by key (YYYY-MM-DD-HH-MM), `latest` or `@ID`
    Record {
        key: String,
        /// Extend the end time, e.g. 15m or 1h30m
        #[arg(short, long, conflicts_with_all = ["minus", "revert"])]
        plus: Option<String>,
        /// Shorten the end time, e.g. 15m or 1h30m
        #[arg(short, long, conflicts_with = "revert")]
        minus: Option<String>,
        /// Restore the record from its backup
        #[arg(short, long)]
        revert: bool,
    },
}

pub fn cmd(args: EditArgs, config: &Config, db: &Db) -> Result<()> {
    match args.command {
        EditCommand::Project { key, revert } => handle_project(key, revert, config, db),
        EditCommand::Record { key, plus, minus, revert } => handle_record(&key, plus, minus, revert, config, db),
    }
}

fn handle_project(key: String, revert: bool, config: &Config, db: &Db) -> Result<()> {
    if revert {
        Backups::new(db).revert_project(&key)?;
        msg_success!(Message::ProjectReverted(key));
        return Ok(());
    }

    let projects = Projects::new(db);
    projects.load(&key)?;
    Backups::new(db).backup_project(&key)?;

    open_in_editor(projects.path(&key), config)?;

    if !projects.exists(&key)? {
        msg_info!(Message::ProjectNotFoundAfterEdit(key));
    }
    Ok(())
}

fn handle_record(key: &str, plus: Option<String>, minus: Option<String>, revert: bool, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);
    let tracker = Tracker::new(db);
    let record = tracker.resolve(key, &formatter)?;
    let record_key = formatter.record_key(&record.start);

    if revert {
        Backups::new(db).revert_record(&record.start)?;
        msg_success!(Message::RecordReverted(record_key));
        return Ok(());
    }

    let delta = match (plus, minus) {
        (Some(plus), _) => Some(parse_duration(&plus)?),
        (None, Some(minus)) => Some(-parse_duration(&minus)?),
        (None, None) => None,
    };

    match delta {
        Some(delta) => {
            let updated = tracker.edit_delta(&record.start, delta)?;
            msg_success!(Message::RecordUpdated(record_key));
            View::record(&updated, &formatter)
        }
        None => {
            Backups::new(db).backup_record(&record.start)?;
            open_in_editor(Records::new(db).path(&record.start), config)
        }
    }
}

fn open_in_editor(path: Option<PathBuf>, config: &Config) -> Result<()> {
    let Some(path) = path else {
        msg_bail_anyhow!(Message::NoFilePath);
    };

    let editor = config.editor();
    msg_info!(Message::OpeningEditor(editor.clone(), path.display().to_string()));
    editor::open(&editor, &path)
}
