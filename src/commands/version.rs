use crate::{libs::messages::Message, msg_print};
use anyhow::Result;

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub fn cmd() -> Result<()> {
    msg_print!(Message::VersionInfo(APP_METADATA_NAME.to_string(), APP_METADATA_VERSION.to_string()));
    Ok(())
}
