use super::formatter;
use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message, record::extract_tag_names, tracker::Tracker, view::View},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Project key, e.g. `acme` or `design@acme`
    project: String,
    /// Up to three tags, each prefixed with `+`
    tags: Vec<String>,
    /// Mark the record as billable
    #[arg(short, long, conflicts_with = "non_billable")]
    billable: bool,
    /// Mark the record as non-billable, overriding the project default
    #[arg(long)]
    non_billable: bool,
}

pub fn cmd(args: StartArgs, config: &Config, db: &Db) -> Result<()> {
    let tags = extract_tag_names(&args.tags)?;

    let is_billable = if args.billable {
        true
    } else if args.non_billable {
        false
    } else {
        config.is_billable(&args.project).unwrap_or(false)
    };

    let record = Tracker::new(db).start(Some(&args.project), is_billable, tags)?;

    msg_success!(Message::TrackingStarted(args.project));
    View::record(&record, &formatter(config))
}
