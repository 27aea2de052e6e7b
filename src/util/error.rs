// PortalNav - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all PortalNav operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum PortalNavError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Local session store could not be read or written.
    Session(SessionError),

    /// Remote session termination failed.
    Logout(LogoutError),
}

impl fmt::Display for PortalNavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
            Self::Logout(e) => write!(f, "Logout error: {e}"),
        }
    }
}

impl std::error::Error for PortalNavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::Logout(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to the persisted local session store.
#[derive(Debug)]
pub enum SessionError {
    /// I/O error reading or writing the session file.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },

    /// The session file could not be (de)serialised.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Session file '{}' is malformed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

impl From<SessionError> for PortalNavError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

// ---------------------------------------------------------------------------
// Logout errors
// ---------------------------------------------------------------------------

/// Errors returned by the session-termination request.
///
/// These are diagnostic only: the local logout proceeds regardless.
#[derive(Debug)]
pub enum LogoutError {
    /// The HTTP client could not be constructed.
    Client { source: reqwest::Error },

    /// The request could not be sent or no response was received.
    Request { url: String, source: reqwest::Error },

    /// The backend answered with a non-success status.
    Status { url: String, status: u16 },
}

impl fmt::Display for LogoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { source } => write!(f, "Cannot build HTTP client: {source}"),
            Self::Request { url, source } => write!(f, "POST {url} failed: {source}"),
            Self::Status { url, status } => {
                write!(f, "POST {url} returned HTTP {status}")
            }
        }
    }
}

impl std::error::Error for LogoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::Request { source, .. } => Some(source),
            Self::Status { .. } => None,
        }
    }
}

impl From<LogoutError> for PortalNavError {
    fn from(e: LogoutError) -> Self {
        Self::Logout(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for PortalNavError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for PortalNav results.
pub type Result<T> = std::result::Result<T, PortalNavError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display() {
        let e = LogoutError::Status {
            url: "http://localhost:9090/api/v1/logout".to_string(),
            status: 503,
        };
        assert_eq!(
            e.to_string(),
            "POST http://localhost:9090/api/v1/logout returned HTTP 503"
        );
        assert!(e.source().is_none());
    }

    #[test]
    fn test_session_error_preserves_source() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let e: PortalNavError = SessionError::Io {
            path: PathBuf::from("session.json"),
            operation: "write",
            source: inner,
        }
        .into();
        assert!(e.to_string().starts_with("Session error: I/O error during write"));
        let source = e.source().expect("session error source");
        assert!(source.source().is_some(), "io error should be chained");
    }

    #[test]
    fn test_config_range_error_has_no_source() {
        let e = ConfigError::ValueOutOfRange {
            field: "[ui] font_size".to_string(),
            value: "99".to_string(),
            expected: "10-24".to_string(),
        };
        assert!(e.source().is_none());
        assert!(e.to_string().contains("font_size"));
    }
}
