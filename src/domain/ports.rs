use crate::domain::model::{CourseAssignment, ValidationReport};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Something that can judge a schedule, in-process or over the network.
#[async_trait]
pub trait ScheduleValidator: Send + Sync {
    fn name(&self) -> &str;

    async fn validate(&self, courses: &[CourseAssignment]) -> Result<ValidationReport>;
}
