//! Display implementation for timetrace messages.
//!
//! All wording shown to the user is defined here, grouped the same way as the
//! variants in `types.rs`.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === PROJECT MESSAGES ===
            Message::ProjectCreated(key) => format!("Created project {}", key),
            Message::ProjectDeleted(key) => format!("Deleted project {}", key),
            Message::ProjectReverted(key) => format!("Project backup for {} applied successfully", key),
            Message::ProjectsNotFound => "No projects found".to_string(),
            Message::ProjectNotFoundAfterEdit(key) => format!("Project {} no longer exists after editing", key),
            Message::ConfirmDeleteProject(key) => format!("Delete project {} and all of its modules?", key),
            Message::ProjectNotDeleted => "Project NOT deleted.".to_string(),

            // === RECORD MESSAGES ===
            Message::RecordCreated(key) => format!("Created record {}", key),
            Message::RecordDeleted(key) => format!("Deleted record {}", key),
            Message::RecordReverted(key) => format!("Record backup for {} applied successfully", key),
            Message::RecordUpdated(key) => format!("Updated record {}", key),
            Message::RecordsNotFound(date) => format!("No records found for {}", date),
            Message::RecordsDeletedCount(count) => format!("Deleted {} record(s)", count),
            Message::RecordsRevertedCount(count) => format!("Reverted {} record(s)", count),
            Message::ConfirmDeleteRecord => "Delete this record?".to_string(),
            Message::RecordNotDeleted => "Record NOT deleted.".to_string(),
            Message::RecordNotCreated => "Record NOT created.".to_string(),
            Message::CollisionsFound(count) => format!("The new record overlaps with {} existing record(s):", count),
            Message::ConfirmCreateWithCollisions => "Create the record anyway?".to_string(),

            // === TRACKING MESSAGES ===
            Message::TrackingStarted(key) => format!("Started tracking time for {}", key),
            Message::TrackingStopped(duration) => format!("Stopped tracking time after {}", duration),
            Message::TrackingNotStartedToday => "You haven't started tracking time today".to_string(),
            Message::TrackingNotActive => "You're not tracking time at the moment".to_string(),
            Message::UnknownOutputFormat(format) => format!("Unknown output format: {}", format),

            // === REPORT MESSAGES ===
            Message::ReportEmpty => "No records match the given filters".to_string(),
            Message::ReportWritten(path) => format!("Report written to {}", path),
            Message::ReportTotal(total) => format!("Total: {}", total),

            // === EDITOR MESSAGES ===
            Message::OpeningEditor(editor, path) => format!("Opening {} with {}", path, editor),
            Message::EditorFailed(error) => format!("Editor exited with an error: {}", error),
            Message::NoFilePath => "This store has no file that could be edited".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigUnknownKey(key) => format!("Unknown configuration key: {} (known: store, use12hours, editor, report-path)", key),
            Message::ConfigInvalidValue(key, value) => format!("Invalid value '{}' for {}", value, key),
            Message::ConfigWizardHeader => "timetrace configuration".to_string(),
            Message::PromptStore => "Data directory".to_string(),
            Message::PromptUse12Hours => "Use 12-hour clock?".to_string(),
            Message::PromptEditor => "Editor (empty for $EDITOR)".to_string(),
            Message::PromptReportPath => "Default report file (empty for the reports directory)".to_string(),

            // === APPLICATION MESSAGES ===
            Message::VersionInfo(name, version) => format!("{} version {}", name, version),
            Message::CommandFailed(error) => error.clone(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_render() {
        assert_eq!(Message::TrackingStarted("acme".to_string()).to_string(), "Started tracking time for acme");
        assert_eq!(Message::ConfigInvalidValue("use12hours".to_string(), "maybe".to_string()).to_string(), "Invalid value 'maybe' for use12hours");
        assert_eq!(Message::CommandFailed("project acme not found".to_string()).to_string(), "project acme not found");
    }
}
