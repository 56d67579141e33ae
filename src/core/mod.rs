pub mod conflict;
pub mod intake;

pub use crate::domain::model::{
    ConflictGroup, CourseAssignment, CourseId, ScheduleRequest, ValidationReport,
};
pub use crate::domain::ports::ScheduleValidator;
pub use crate::utils::error::Result;
pub use conflict::ConflictChecker;
