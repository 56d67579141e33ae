use crate::core::{ConflictChecker, CourseAssignment, Result, ScheduleValidator, ValidationReport};
use async_trait::async_trait;

/// Runs the conflict check in the current process.
#[derive(Debug, Clone, Default)]
pub struct LocalValidator {
    checker: ConflictChecker,
}

impl LocalValidator {
    pub fn new() -> Self {
        Self {
            checker: ConflictChecker::new(),
        }
    }
}

#[async_trait]
impl ScheduleValidator for LocalValidator {
    fn name(&self) -> &str {
        "local"
    }

    async fn validate(&self, courses: &[CourseAssignment]) -> Result<ValidationReport> {
        let report = self.checker.validate(courses);
        tracing::info!(
            courses = courses.len(),
            conflicts = report.conflicts.len(),
            "schedule checked locally"
        );
        Ok(report)
    }
}
