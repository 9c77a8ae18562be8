use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};
use std::{fs, io};

pub const ROOT_DIR_NAME: &str = ".timetrace";

/// Per-user application directory, `~/.timetrace`.
///
/// Holds the configuration file and, unless `store` is configured, the
/// projects, records and reports trees.
#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let home = match OS {
            "windows" => var("USERPROFILE").unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };
        let base_path = Path::new(&home).join(ROOT_DIR_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
