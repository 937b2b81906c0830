use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectError {
    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Bundle '{path}' is not a JSON object at the top level")]
    NotAnObject { path: String },

    #[error("Section '{section}' in '{path}' exists but is not a JSON object")]
    SectionNotObject { path: String, section: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl InjectError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. }
            | Self::SerializationError(_)
            | Self::NotAnObject { .. }
            | Self::SectionNotObject { .. } => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => {
                format!("Could not access '{}': {}", path, source)
            }
            Self::ParseError { path, source } => format!(
                "'{}' is not valid JSON (line {}, column {})",
                path,
                source.line(),
                source.column()
            ),
            Self::SerializationError(e) => format!("Could not serialize bundle: {}", e),
            Self::NotAnObject { path } => {
                format!("'{}' must contain a JSON object at the top level", path)
            }
            Self::SectionNotObject { path, section } => format!(
                "'{}' already has a '{}' entry that is not an object",
                path, section
            ),
            Self::ConfigError { message } => message.clone(),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}", field, value, reason),
            Self::MissingConfigError { field } => format!("Missing required setting: {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { .. } => "Check that the file exists and that you have read/write permission",
            Self::ParseError { .. } => "Fix the JSON syntax in the bundle; nothing was written to it",
            Self::SerializationError(_) => "Report this as a bug together with the input bundle",
            Self::NotAnObject { .. } => "Localization bundles must be JSON objects like {\"key\": \"value\"}",
            Self::SectionNotObject { .. } => {
                "Rename or remove the conflicting entry, or choose another --section"
            }
            Self::ConfigError { .. } => "Check the plan file syntax and command line flags",
            Self::InvalidConfigValueError { .. } => "Correct the value and run again",
            Self::MissingConfigError { .. } => "Add the missing setting to the plan file",
        }
    }
}

pub type Result<T> = std::result::Result<T, InjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_category() {
        let io = InjectError::io(
            "en.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.exit_code(), 3);

        let data = InjectError::NotAnObject {
            path: "en.json".to_string(),
        };
        assert_eq!(data.category(), ErrorCategory::Data);
        assert_eq!(data.exit_code(), 2);

        let config = InjectError::config("bad plan");
        assert_eq!(config.category(), ErrorCategory::Configuration);
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            InjectError::io("en.json", std::io::Error::other("denied")),
            InjectError::NotAnObject {
                path: "en.json".to_string(),
            },
            InjectError::SectionNotObject {
                path: "en.json".to_string(),
                section: "services".to_string(),
            },
            InjectError::config("bad plan"),
            InjectError::MissingConfigError {
                field: "locales".to_string(),
            },
        ];

        for err in errors {
            assert_ne!(err.exit_code(), 0, "{err} exited with success");
        }
    }

    #[test]
    fn test_parse_error_message_has_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = InjectError::ParseError {
            path: "es.json".to_string(),
            source,
        };
        let message = err.user_friendly_message();
        assert!(message.contains("es.json"));
        assert!(message.contains("line 2"));
    }
}
