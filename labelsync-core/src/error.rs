use std::fmt;

/// Custom error type for labelsync operations
#[derive(Debug)]
pub enum LabelSyncError {
    /// GitHub API responded with a non-success status
    GitHub(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(std::io::Error),
    /// YAML parsing errors
    Yaml(serde_yaml::Error),
    /// HTTP transport errors
    Http(reqwest::Error),
    /// Generic errors with message
    Generic(String),
}

impl fmt::Display for LabelSyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSyncError::GitHub(msg) => write!(f, "GitHub API error: {}", msg),
            LabelSyncError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LabelSyncError::Io(err) => write!(f, "I/O error: {}", err),
            LabelSyncError::Yaml(err) => write!(f, "YAML error: {}", err),
            LabelSyncError::Http(err) => write!(f, "HTTP error: {}", err),
            LabelSyncError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for LabelSyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LabelSyncError::Io(err) => Some(err),
            LabelSyncError::Yaml(err) => Some(err),
            LabelSyncError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LabelSyncError {
    fn from(err: std::io::Error) -> Self {
        LabelSyncError::Io(err)
    }
}

impl From<serde_yaml::Error> for LabelSyncError {
    fn from(err: serde_yaml::Error) -> Self {
        LabelSyncError::Yaml(err)
    }
}

impl From<reqwest::Error> for LabelSyncError {
    fn from(err: reqwest::Error) -> Self {
        LabelSyncError::Http(err)
    }
}

impl From<reqwest::header::InvalidHeaderValue> for LabelSyncError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        LabelSyncError::Config(err.to_string())
    }
}

impl From<url::ParseError> for LabelSyncError {
    fn from(err: url::ParseError) -> Self {
        LabelSyncError::Config(err.to_string())
    }
}

impl From<String> for LabelSyncError {
    fn from(err: String) -> Self {
        LabelSyncError::Generic(err)
    }
}

impl From<anyhow::Error> for LabelSyncError {
    fn from(err: anyhow::Error) -> Self {
        LabelSyncError::Generic(err.to_string())
    }
}

/// Result type alias for labelsync operations
pub type Result<T> = std::result::Result<T, LabelSyncError>;
