//! Domain types and supporting services.
//!
//! - **Entities**: [`project`], [`record`]
//! - **Tracking logic**: [`tracker`], [`collision`], [`report`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`error`], [`logger`],
//!   [`messages`]
//! - **Presentation**: [`formatter`], [`view`], [`editor`]

pub mod collision;
pub mod config;
pub mod data_storage;
pub mod editor;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod messages;
pub mod project;
pub mod record;
pub mod report;
pub mod tracker;
pub mod view;
