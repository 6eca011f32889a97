use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ValidationError { .. } => {
                ErrorCategory::Data
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::CsvError(_) | Self::SerializationError(_) | Self::ValidationError { .. } => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
            Self::ProcessingError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the course snapshot file exists and the path is correct".to_string()
            }
            Self::IoError(_) => "Check file permissions and available disk space".to_string(),
            Self::CsvError(_) => {
                "Check the course ids and titles for characters the CSV report cannot encode"
                    .to_string()
            }
            Self::SerializationError(_) => {
                "Input must be a JSON array of courses (id, maxStudents >= 0, enrolledStudents)"
                    .to_string()
            }
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Review the configuration file for syntax errors".to_string()
            }
            Self::MissingConfigError { field } => format!("Provide a value for '{}'", field),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            Self::ProcessingError { .. } => "Re-run with --verbose for details".to_string(),
            Self::ValidationError { .. } => "Fix the course snapshot data and retry".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not access a file: {}", self),
            ErrorCategory::Data => format!("Course data could not be processed: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Report generation failed: {}", self),
        }
    }

    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
