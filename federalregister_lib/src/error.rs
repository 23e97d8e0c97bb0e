//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation, configuration and I/O failures.
#[derive(Debug)]
pub enum FederalRegisterError {
    /// An error from the underlying API client.
    Api(federalregister_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// An environment setting could not be parsed.
    Config(crate::config::SettingsError),
    /// Writing a report failed.
    Io(std::io::Error),
}

impl fmt::Display for FederalRegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Config(e) => write!(f, "Configuration error: {}", e),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FederalRegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl FederalRegisterError {
    /// True for upstream failures that may succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_retryable())
    }
}

impl From<federalregister_api::Error> for FederalRegisterError {
    fn from(e: federalregister_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<crate::config::SettingsError> for FederalRegisterError {
    fn from(e: crate::config::SettingsError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for FederalRegisterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_and_source_per_variant() {
        let api = FederalRegisterError::from(federalregister_api::Error::NotFound("x".into()));
        assert!(api.to_string().starts_with("API error: "));
        assert!(api.source().is_some());

        let io = FederalRegisterError::from(std::io::Error::other("disk full"));
        assert_eq!(io.to_string(), "I/O error: disk full");
        assert!(io.source().is_some());

        let input = FederalRegisterError::InvalidInput("bad slug".into());
        assert_eq!(input.to_string(), "Invalid input: bad slug");
        assert!(input.source().is_none());
    }

    #[test]
    fn retryable_only_for_transient_api_errors() {
        assert!(FederalRegisterError::from(federalregister_api::Error::Transient("503".into()))
            .is_retryable());
        assert!(!FederalRegisterError::from(federalregister_api::Error::Fatal {
            status: 404,
            body: String::new(),
        })
        .is_retryable());
        assert!(!FederalRegisterError::InvalidInput("x".into()).is_retryable());
    }
}
