//! Error types for the API client.

/// Errors that can occur when building or sending API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request was rejected before any network call was made.
    #[error("Invalid request: {0}")]
    Validation(String),
    /// The API does not know the requested document (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),
    /// Network failure, timeout, rate limiting or a 5xx response. Safe to retry.
    #[error("Transient failure: {0}")]
    Transient(String),
    /// A non-success status that retrying with the same input will not fix.
    #[error("Request failed with status {status}")]
    Fatal { status: u16, body: String },
    /// The response body could not be interpreted.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl Error {
    /// Returns true when the same request may succeed if sent again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transient(_))
    }

    pub(crate) fn from_status(status: reqwest::StatusCode, what: &str, body: String) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            Error::NotFound(what.to_string())
        } else if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            Error::Transient(format!("HTTP {} for {}", status.as_u16(), what))
        } else {
            Error::Fatal {
                status: status.as_u16(),
                body,
            }
        }
    }

    /// Like [`Error::from_status`], but a missing raw-text file is not an
    /// unknown document: 404 is reported as `Fatal`.
    pub(crate) fn from_raw_text_status(
        status: reqwest::StatusCode,
        what: &str,
        body: String,
    ) -> Self {
        if status == reqwest::StatusCode::NOT_FOUND {
            Error::Fatal {
                status: status.as_u16(),
                body,
            }
        } else {
            Error::from_status(status, what, body)
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Error::Validation(e.to_string())
        } else if e.is_decode() {
            Error::Parse(e.to_string())
        } else {
            Error::Transient(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::Error;

    #[test]
    fn status_classification() {
        assert!(matches!(
            Error::from_status(StatusCode::NOT_FOUND, "2025-01234", String::new()),
            Error::NotFound(ref n) if n == "2025-01234"
        ));
        assert!(Error::from_status(StatusCode::BAD_GATEWAY, "x", String::new()).is_retryable());
        assert!(
            Error::from_status(StatusCode::TOO_MANY_REQUESTS, "x", String::new()).is_retryable()
        );
        assert!(matches!(
            Error::from_status(StatusCode::BAD_REQUEST, "x", "bad".to_string()),
            Error::Fatal { status: 400, ref body } if body == "bad"
        ));
    }

    #[test]
    fn raw_text_status_never_not_found() {
        assert!(matches!(
            Error::from_raw_text_status(StatusCode::NOT_FOUND, "x.txt", "gone".to_string()),
            Error::Fatal { status: 404, ref body } if body == "gone"
        ));
        assert!(matches!(
            Error::from_raw_text_status(StatusCode::FORBIDDEN, "x.txt", String::new()),
            Error::Fatal { status: 403, .. }
        ));
        assert!(
            Error::from_raw_text_status(StatusCode::SERVICE_UNAVAILABLE, "x.txt", String::new())
                .is_retryable()
        );
    }

    #[test]
    fn only_transient_is_retryable() {
        assert!(Error::Transient("timeout".into()).is_retryable());
        assert!(!Error::Validation("per_page".into()).is_retryable());
        assert!(!Error::NotFound("x".into()).is_retryable());
        assert!(!Error::Parse("eof".into()).is_retryable());
        assert!(!Error::Fatal {
            status: 422,
            body: String::new()
        }
        .is_retryable());
    }
}
