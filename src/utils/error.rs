use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unsupported input format: {path}")]
    UnsupportedFormatError { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DigestError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DigestError::IoError(_) => ErrorCategory::Io,
            DigestError::SerializationError(_)
            | DigestError::CsvError(_)
            | DigestError::UnsupportedFormatError { .. } => ErrorCategory::Parsing,
            DigestError::ConfigValidationError { .. }
            | DigestError::InvalidConfigValueError { .. }
            | DigestError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Parsing => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DigestError::IoError(e) => format!("Could not access a file: {}", e),
            DigestError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            DigestError::CsvError(e) => format!("Input is not valid CSV: {}", e),
            DigestError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            DigestError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            DigestError::MissingConfigError { field } => {
                format!("'{}' is required but was not provided", field)
            }
            DigestError::UnsupportedFormatError { path } => {
                format!("Don't know how to read '{}'", path)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DigestError::IoError(_) => "Check that the path exists and is readable/writable",
            DigestError::SerializationError(_) => {
                "Provide a JSON array of objects with 'name' and 'value' fields"
            }
            DigestError::CsvError(_) => "Provide a CSV file with a 'name,value' header",
            DigestError::ConfigValidationError { .. } => "Fix the configuration file and retry",
            DigestError::InvalidConfigValueError { .. } => "Correct the offending value and retry",
            DigestError::MissingConfigError { .. } => "Supply the missing option",
            DigestError::UnsupportedFormatError { .. } => "Use a .json, .csv or .toml input file",
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
