use crate::core::{
    CourseAssignment, Result, ScheduleRequest, ScheduleValidator, ValidationReport,
};
use crate::utils::error::ScheduleError;
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sends schedules to a running server's `/validate` endpoint.
#[derive(Debug, Clone)]
pub struct RemoteValidator {
    base_url: String,
    client: Client,
}

impl RemoteValidator {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        validate_url("server", &base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/validate", self.base_url)
    }
}

#[async_trait]
impl ScheduleValidator for RemoteValidator {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn validate(&self, courses: &[CourseAssignment]) -> Result<ValidationReport> {
        let endpoint = self.endpoint();
        tracing::debug!("Posting {} courses to {}", courses.len(), endpoint);

        let request = ScheduleRequest {
            courses: courses.to_vec(),
        };
        let response = self.client.post(&endpoint).json(&request).send().await?;
        let status = response.status();
        tracing::debug!("Remote validator response status: {}", status);

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            // 伺服器錯誤通常是 {"error": "..."}，否則直接回傳原文
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error)
                .unwrap_or(text);
            return Err(ScheduleError::RemoteRejected {
                status: status.as_u16(),
                message,
            });
        }

        let report: ValidationReport = response.json().await?;
        tracing::info!(
            conflicts = report.conflicts.len(),
            "schedule checked by {}",
            self.base_url
        );
        Ok(report)
    }
}
