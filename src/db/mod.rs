//! Persistence layer for timetrace.
//!
//! Projects and records are stored as individual JSON files under a
//! configurable root. All stores talk to a [`storage::Storage`] backend by
//! key, so the flat-file tree can be swapped for another backend without
//! touching store, collision or report logic.
//!
//! ## Layout
//!
//! ```text
//! <root>/projects/<key>.json              project
//! <root>/projects/<key>.json.bak          its backup
//! <root>/records/<YYYY-MM-DD>/<HH-MM>.json
//! <root>/records/<YYYY-MM-DD>/<HH-MM>.json.bak
//! <root>/reports/report-<unix-timestamp>
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrace::db::{db::Db, projects::Projects};
//! use timetrace::libs::{config::Config, project::Project};
//!
//! let config = Config::read()?;
//! let db = Db::open(&config)?;
//! Projects::new(&db).save(&Project::new("acme"), false)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod backups;
pub mod db;
pub mod fs;
pub mod memory;
pub mod projects;
pub mod records;
pub mod storage;
