use super::formatter;
use crate::{
    db::{db::Db, projects::Projects},
    libs::{config::Config, tracker::Tracker, view::View},
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct GetArgs {
    #[command(subcommand)]
    command: GetCommand,
}

#[derive(Debug, Subcommand)]
enum GetCommand {
    /// Display a project and its modules
    Project { key: String },
    /// Display a record by key (YYYY-MM-DD-HH-MM), `latest` or `@ID`
    Record { key: String },
}

pub fn cmd(args: GetArgs, config: &Config, db: &Db) -> Result<()> {
    match args.command {
        GetCommand::Project { key } => {
            let projects = Projects::new(db);
            let project = projects.load(&key)?;
            View::project(&project, &projects.module_names(&project.key)?)
        }
        GetCommand::Record { key } => {
            let formatter = formatter(config);
            let record = Tracker::new(db).resolve(&key, &formatter)?;
            View::record(&record, &formatter)
        }
    }
}
