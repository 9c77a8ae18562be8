use super::formatter;
use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message, tracker::Tracker},
    msg_success,
};
use anyhow::Result;

pub fn cmd(config: &Config, db: &Db) -> Result<()> {
    let record = Tracker::new(db).stop()?;
    let duration = formatter(config).format_duration(&record.duration());

    msg_success!(Message::TrackingStopped(duration));
    Ok(())
}
