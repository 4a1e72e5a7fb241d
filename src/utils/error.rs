use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Directory error for '{path}': {message}")]
    DirectoryError { path: String, message: String },

    #[error("Required tool not found on PATH: {tool}")]
    ToolNotFound { tool: String },

    #[error("Failed to start '{program}': {source}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interrupted by user")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    ExternalTool,
    User,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvertError::IoError(_) | ConvertError::DirectoryError { .. } => {
                ErrorCategory::FileSystem
            }
            ConvertError::ToolNotFound { .. } | ConvertError::ToolSpawn { .. } => {
                ErrorCategory::ExternalTool
            }
            ConvertError::Interrupted => ErrorCategory::User,
            ConvertError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::Interrupted => ErrorSeverity::Low,
            ConvertError::SerializationError(_) => ErrorSeverity::Medium,
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::DirectoryError { .. } => ErrorSeverity::High,
            ConvertError::IoError(_)
            | ConvertError::ToolNotFound { .. }
            | ConvertError::ToolSpawn { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::ToolNotFound { tool } | ConvertError::ToolSpawn { program: tool, .. } => {
                format!(
                    "Install '{}' and make sure it is on your PATH, or point --pandoc at the binary",
                    tool
                )
            }
            ConvertError::DirectoryError { .. } => {
                "Check that the directory exists and is readable".to_string()
            }
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again".to_string()
            }
            ConvertError::Interrupted => "Run the command again to restart".to_string(),
            ConvertError::IoError(_) => "Check file permissions and terminal access".to_string(),
            ConvertError::SerializationError(_) => {
                "Run again without --json to see the plain summary".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::ToolNotFound { tool } => format!("'{}' is not installed", tool),
            ConvertError::ToolSpawn { program, .. } => format!("Could not run '{}'", program),
            ConvertError::Interrupted => "Conversion interrupted".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_errors_are_critical() {
        let err = ConvertError::ToolNotFound {
            tool: "pandoc".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::ExternalTool);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.recovery_suggestion().contains("pandoc"));
        assert_eq!(err.user_friendly_message(), "'pandoc' is not installed");
    }

    #[test]
    fn test_config_errors_message() {
        let err = ConvertError::InvalidConfigValueError {
            field: "files.source_extension".to_string(),
            value: ".md".to_string(),
            reason: "Extension must not contain dots".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(
            err.to_string(),
            "Invalid value '.md' for 'files.source_extension': Extension must not contain dots"
        );
    }

    #[test]
    fn test_interrupt_is_low_severity() {
        assert_eq!(ConvertError::Interrupted.severity(), ErrorSeverity::Low);
    }
}
