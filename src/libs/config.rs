//! Configuration management for timetrace.
//!
//! The configuration lives in `~/.timetrace/config.json`. A missing file is
//! not an error: every setting has a usable default. The value read here is
//! passed down explicitly to the stores and commands, nothing caches it
//! globally.
//!
//! ## Settings
//!
//! - **store**: root directory of the projects/records/reports trees.
//!   Environment variables (`$HOME`, `${HOME}`) and a leading `~` are expanded.
//! - **use12hours**: use `03-04PM` style times for record file names, record
//!   keys and display instead of `15-04`.
//! - **editor**: editor used by `edit`, falling back to `$EDITOR` and `vi`.
//! - **report-path**: default output file for JSON reports.
//! - **projects**: per-project defaults, currently the billable flag.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrace::libs::config::Config;
//!
//! let config = Config::read()?;
//! let root = config.root_dir();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: [&str; 4] = ["store", "use12hours", "editor", "report-path"];

/// Defaults applied when tracking time for a specific project.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub billable: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Root of the data tree. Defaults to `~/.timetrace`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,

    /// Use 12-hour clock for file names and display.
    #[serde(default, rename = "use12hours")]
    pub use_12_hours: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Default destination for JSON reports.
    #[serde(default, rename = "report-path", skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl Config {
    /// Reads the configuration from `~/.timetrace/config.json`.
    ///
    /// Returns the default configuration if the file doesn't exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Root directory of the data tree.
    pub fn root_dir(&self) -> PathBuf {
        match &self.store {
            Some(store) if !store.is_empty() => PathBuf::from(expand_env(store)),
            _ => DataStorage::new().base_path().to_path_buf(),
        }
    }

    /// Configured default billable flag for a project key.
    pub fn is_billable(&self, project_key: &str) -> Option<bool> {
        self.projects.get(project_key).map(|project| project.billable)
    }

    /// Editor from the configuration, then `$EDITOR`, then `vi`.
    pub fn editor(&self) -> String {
        if let Some(editor) = self.editor.as_ref().filter(|editor| !editor.is_empty()) {
            return editor.clone();
        }
        match env::var("EDITOR") {
            Ok(editor) if !editor.is_empty() => editor,
            _ => "vi".to_string(),
        }
    }

    /// Returns the displayed value of a setting.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key.to_lowercase().as_str() {
            "store" => self.store.clone().unwrap_or_default(),
            "use12hours" => self.use_12_hours.to_string(),
            "editor" => self.editor.clone().unwrap_or_default(),
            "report-path" => self.report_path.clone().unwrap_or_default(),
            _ => msg_bail_anyhow!(Message::ConfigUnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Sets a setting from its string form. Empty values unset optional settings.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let optional = |value: &str| if value.is_empty() { None } else { Some(value.to_string()) };

        match key.to_lowercase().as_str() {
            "store" => self.store = optional(value),
            "use12hours" => {
                self.use_12_hours = match value.to_lowercase().as_str() {
                    "true" | "yes" | "1" => true,
                    "false" | "no" | "0" => false,
                    _ => msg_bail_anyhow!(Message::ConfigInvalidValue(key.to_string(), value.to_string())),
                }
            }
            "editor" => self.editor = optional(value),
            "report-path" => self.report_path = optional(value),
            _ => msg_bail_anyhow!(Message::ConfigUnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Runs an interactive setup wizard seeded with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigWizardHeader, true);

        let default_store = config.store.clone().unwrap_or_else(|| config.root_dir().to_string_lossy().into_owned());
        let store: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptStore.to_string())
            .default(default_store)
            .interact_text()?;
        config.store = Some(store);

        config.use_12_hours = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptUse12Hours.to_string())
            .default(config.use_12_hours)
            .interact()?;

        let editor: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptEditor.to_string())
            .default(config.editor.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        config.editor = if editor.is_empty() { None } else { Some(editor) };

        let report_path: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptReportPath.to_string())
            .default(config.report_path.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;
        config.report_path = if report_path.is_empty() { None } else { Some(report_path) };

        Ok(config)
    }
}

/// Expands `$VAR`, `${VAR}` and a leading `~`. Unset variables expand to "".
pub fn expand_env(input: &str) -> String {
    let input = match input.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => {
            format!("{}{}", env::var("HOME").unwrap_or_default(), rest)
        }
        _ => input.to_string(),
    };

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }

        let mut name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                name.push(c);
            }
        } else {
            while let Some(&c) = chars.peek() {
                if !(c.is_ascii_alphanumeric() || c == '_') {
                    break;
                }
                name.push(c);
                chars.next();
            }
        }

        if name.is_empty() {
            output.push('$');
        } else {
            output.push_str(&env::var(&name).unwrap_or_default());
        }
    }

    output
}
