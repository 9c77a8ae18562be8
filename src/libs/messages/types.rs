/// Every user-facing text of the command line surface.
///
/// The wording lives in the [`Display`](std::fmt::Display) implementation in
/// `display.rs`; call sites only pick a variant.
#[derive(Debug, Clone)]
pub enum Message {
    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectDeleted(String),
    ProjectReverted(String),
    ProjectsNotFound,
    ProjectNotFoundAfterEdit(String),
    ConfirmDeleteProject(String),
    ProjectNotDeleted,

    // === RECORD MESSAGES ===
    RecordCreated(String),
    RecordDeleted(String),
    RecordReverted(String),
    RecordUpdated(String),
    RecordsNotFound(String), // date
    RecordsDeletedCount(usize),
    RecordsRevertedCount(usize),
    ConfirmDeleteRecord,
    RecordNotDeleted,
    RecordNotCreated,
    CollisionsFound(usize),
    ConfirmCreateWithCollisions,

    // === TRACKING MESSAGES ===
    TrackingStarted(String),
    TrackingStopped(String),       // duration
    TrackingNotStartedToday,
    TrackingNotActive,
    UnknownOutputFormat(String),

    // === REPORT MESSAGES ===
    ReportEmpty,
    ReportWritten(String),
    ReportTotal(String),

    // === EDITOR MESSAGES ===
    OpeningEditor(String, String), // editor, path
    EditorFailed(String),
    NoFilePath,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigUnknownKey(String),
    ConfigInvalidValue(String, String),
    ConfigWizardHeader,
    PromptStore,
    PromptUse12Hours,
    PromptEditor,
    PromptReportPath,

    // === APPLICATION MESSAGES ===
    VersionInfo(String, String),
    CommandFailed(String),
}
