//! `config init`, `config get` and `config set`.

use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Interactive setup wizard
    Init,
    /// Print one setting, or all of them
    Get { key: Option<String> },
    /// Change a setting; an empty value unsets it
    Set { key: String, value: String },
}

pub fn cmd(args: ConfigArgs, config: Config) -> Result<()> {
    match args.command {
        ConfigCommand::Init => {
            Config::init()?.save()?;
            msg_success!(Message::ConfigSaved);
            Ok(())
        }
        ConfigCommand::Get { key: Some(key) } => {
            msg_print!(config.get(&key)?);
            Ok(())
        }
        ConfigCommand::Get { key: None } => View::config(&config),
        ConfigCommand::Set { key, value } => {
            let mut config = config;
            config.set(&key, &value)?;
            config.save()?;
            msg_success!(Message::ConfigSaved);
            Ok(())
        }
    }
}
