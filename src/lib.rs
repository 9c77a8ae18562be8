//! # timetrace
//!
//! A command line time tracker that keeps every project and record as a
//! single JSON file.
//!
//! ## Features
//!
//! - **Tracking**: start and stop timers against projects and their modules
//! - **Records**: create finished records, shift their end, edit them by hand
//! - **Backups**: one level of undo for every edit and delete
//! - **Collisions**: overlapping records are reported before they are created
//! - **Reports**: filter, group by project and total, as a table or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetrace::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
