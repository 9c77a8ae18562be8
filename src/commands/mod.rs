//! Command line surface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a `cmd`
//! function. The configuration is read once here and handed down together
//! with the opened [`Db`].

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;
pub mod report;
pub mod start;
pub mod status;
pub mod stop;
pub mod version;

use crate::db::db::Db;
use crate::libs::{config::Config, formatter::Formatter, logger, messages::Message};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start tracking time")]
    Start(start::StartArgs),
    #[command(about = "Stop tracking your time")]
    Stop,
    #[command(about = "Display the current tracking status")]
    Status(status::StatusArgs),
    #[command(about = "Create a new resource", arg_required_else_help = true)]
    Create(create::CreateArgs),
    #[command(about = "Display a resource", arg_required_else_help = true)]
    Get(get::GetArgs),
    #[command(about = "List resources", arg_required_else_help = true)]
    List(list::ListArgs),
    #[command(about = "Edit a resource", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a resource", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Report tracked time")]
    Report(report::ReportArgs),
    #[command(about = "Show or change the configuration", arg_required_else_help = true)]
    Config(config::ConfigArgs),
    #[command(about = "Print version information")]
    Version,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        logger::init();

        let config = Config::read()?;
        let command = match cli.command {
            Commands::Config(args) => return config::cmd(args, config),
            Commands::Version => return version::cmd(),
            command => command,
        };

        let db = Db::open(&config)?;
        match command {
            Commands::Start(args) => start::cmd(args, &config, &db),
            Commands::Stop => stop::cmd(&config, &db),
            Commands::Status(args) => status::cmd(args, &config, &db),
            Commands::Create(args) => create::cmd(args, &config, &db),
            Commands::Get(args) => get::cmd(args, &config, &db),
            Commands::List(args) => list::cmd(args, &config, &db),
            Commands::Edit(args) => edit::cmd(args, &config, &db),
            Commands::Delete(args) => delete::cmd(args, &config, &db),
            Commands::Report(args) => report::cmd(args, &config, &db),
            Commands::Config(_) | Commands::Version => Ok(()),
        }
    }
}

/// Formatter following the configured clock.
pub(crate) fn formatter(config: &Config) -> Formatter {
    Formatter::new(config.use_12_hours)
}

/// Asks a yes/no question, `false` by default.
pub(crate) fn confirm(prompt: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?)
}
