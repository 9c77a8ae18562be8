use super::formatter;
use crate::{
    db::{db::Db, projects::Projects, records::Records},
    libs::{
        config::Config,
        messages::Message,
        report::{matches_all, Filter},
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(subcommand)]
    command: ListCommand,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    /// List all projects
    Projects,
    /// List the records of a day
    Records {
        /// `today`, `yesterday` or YYYY-MM-DD
        #[arg(default_value = "today")]
        date: String,
        /// Only records of this project or its modules
        #[arg(short, long)]
        project: Option<String>,
        /// Only billable records
        #[arg(short, long)]
        billable: bool,
    },
}

pub fn cmd(args: ListArgs, config: &Config, db: &Db) -> Result<()> {
    match args.command {
        ListCommand::Projects => handle_projects(db),
        ListCommand::Records { date, project, billable } => handle_records(&date, project, billable, config, db),
    }
}

fn handle_projects(db: &Db) -> Result<()> {
    let projects_db = Projects::new(db);
    let projects: Vec<_> = projects_db.list()?.into_iter().filter(|project| !project.is_module()).collect();

    if projects.is_empty() {
        msg_info!(Message::ProjectsNotFound);
        return Ok(());
    }

    let modules = projects
        .iter()
        .map(|project| projects_db.module_names(&project.key))
        .collect::<Result<Vec<_>, _>>()?;

    View::projects(&projects, &modules)
}

fn handle_records(date: &str, project: Option<String>, billable: bool, config: &Config, db: &Db) -> Result<()> {
    let formatter = formatter(config);
    let date = formatter.parse_date(date)?;

    let mut filters = vec![];
    if let Some(project) = project {
        filters.push(Filter::ByProject(project));
    }
    if billable {
        filters.push(Filter::ByBillable(true));
    }

    let records: Vec<_> = Records::new(db)
        .list_sorted_ascending(date)?
        .into_iter()
        .filter(|record| matches_all(&filters, record))
        .collect();

    if records.is_empty() {
        msg_info!(Message::RecordsNotFound(date.to_string()));
        return Ok(());
    }

    View::records(&records, &formatter)
}
