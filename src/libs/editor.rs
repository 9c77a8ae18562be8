//! Launches the configured editor on a stored file.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Opens `path` in `editor` and waits for it to exit.
///
/// The editor setting may carry arguments, e.g. `code --wait`.
pub fn open(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let Some(program) = parts.next() else {
        msg_bail_anyhow!(Message::EditorFailed("no editor configured".to_string()));
    };

    msg_debug!("running {} on {}", editor, path.display());

    let status = Command::new(program).args(parts).arg(path).status()?;
    if !status.success() {
        msg_bail_anyhow!(Message::EditorFailed(status.to_string()));
    }

    Ok(())
}
