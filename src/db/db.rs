use super::fs::FileStorage;
use super::storage::{join, Storage};
use crate::libs::config::Config;
use crate::libs::error::Result;
use chrono::Local;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECTS_DIR: &str = "projects";
pub const RECORDS_DIR: &str = "records";
pub const REPORTS_DIR: &str = "reports";

/// Suffix of live entity files.
pub const JSON_EXT: &str = ".json";
/// Suffix of the single retained backup generation.
pub const BACKUP_EXT: &str = ".json.bak";

/// Handle on the data tree shared by all stores.
pub struct Db {
    storage: Box<dyn Storage>,
    use_12_hours: bool,
    report_path: Option<String>,
}

impl Db {
    /// Opens the flat-file tree below the configured root and creates the
    /// top-level directories.
    pub fn open(config: &Config) -> Result<Db> {
        let storage = FileStorage::new(config.root_dir());
        for dir in [PROJECTS_DIR, RECORDS_DIR, REPORTS_DIR] {
            storage.ensure(dir)?;
        }
        Ok(Self::with_storage(storage, config))
    }

    /// Uses an arbitrary backend, e.g. [`MemoryStorage`](super::memory::MemoryStorage).
    pub fn with_storage(storage: impl Storage + 'static, config: &Config) -> Db {
        Db {
            storage: Box::new(storage),
            use_12_hours: config.use_12_hours,
            report_path: config.report_path.clone(),
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Whether record file names use the 12-hour layout.
    pub fn use_12_hours(&self) -> bool {
        self.use_12_hours
    }

    /// Writes a rendered report.
    ///
    /// An explicit `target` wins over the configured `report-path`; without
    /// either the report goes to `reports/report-<unix-timestamp>`.
    pub fn write_report(&self, target: Option<&Path>, data: &[u8]) -> Result<String> {
        let explicit = target.map(Path::to_path_buf).or_else(|| self.report_path.as_ref().map(PathBuf::from));

        if let Some(path) = explicit {
            fs::write(&path, data)?;
            return Ok(path.to_string_lossy().into_owned());
        }

        let key = join(REPORTS_DIR, &format!("report-{}", Local::now().timestamp()));
        self.storage.save(&key, data)?;
        tracing::debug!(key = %key, "report written");

        Ok(self
            .storage
            .path(&key)
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or(key))
    }
}

/// Serializes an entity the way it is stored on disk: pretty JSON, tab indented.
pub fn to_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    Ok(buf)
}
