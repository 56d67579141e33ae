pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::AppConfig;

pub use crate::adapters::{LocalValidator, RemoteValidator};
pub use crate::core::{ConflictChecker, ConflictGroup, CourseAssignment, CourseId, ValidationReport};
pub use crate::domain::ports::ScheduleValidator;
pub use crate::utils::error::{Result, ScheduleError};
