use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid input")]
    MalformedRequest,

    #[error("Course at index {index}{} is invalid: field '{field}' {reason}", display_id(.id))]
    MalformedRecord {
        index: usize,
        id: Option<String>,
        field: String,
        reason: String,
    },

    #[error("Remote validator rejected the schedule ({status}): {message}")]
    RemoteRejected { status: u16, message: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn display_id(id: &Option<String>) -> String {
    match id {
        Some(id) => format!(" (id {})", id),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failed command.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            // 網路錯誤可重試，與輸入錯誤區分
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScheduleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScheduleError::MalformedRequest
            | ScheduleError::MalformedRecord { .. }
            | ScheduleError::CsvError(_)
            | ScheduleError::SerializationError(_) => ErrorCategory::Input,
            ScheduleError::RemoteRejected { .. } | ScheduleError::HttpError(_) => {
                ErrorCategory::Network
            }
            ScheduleError::IoError(_) => ErrorCategory::Io,
            ScheduleError::TomlError(_)
            | ScheduleError::ConfigError { .. }
            | ScheduleError::MissingConfigError { .. }
            | ScheduleError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Whether the error came from the caller's payload rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ScheduleError::MalformedRequest | ScheduleError::MalformedRecord { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScheduleError::MalformedRequest => {
                "The schedule payload is missing or has no 'courses' list".to_string()
            }
            ScheduleError::MalformedRecord { .. } => format!("Schedule rejected: {}", self),
            ScheduleError::RemoteRejected { message, .. } => {
                format!("The validation server refused the schedule: {}", message)
            }
            ScheduleError::HttpError(_) => "Could not reach the validation server".to_string(),
            ScheduleError::CsvError(_) => "The schedule CSV file could not be read".to_string(),
            ScheduleError::IoError(e) => format!("File access failed: {}", e),
            ScheduleError::SerializationError(_) => "The schedule is not valid JSON".to_string(),
            ScheduleError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ScheduleError::ConfigError { message } => message.clone(),
            ScheduleError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            ScheduleError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Every course needs id, professor, day and time fields; check the schedule file"
            }
            ErrorCategory::Network => "Check the --server URL and that the server is running",
            ErrorCategory::Io => "Check that the file exists and is readable",
            ErrorCategory::Configuration => "Review the configuration file and command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
