//! Error types for the API client.

use crate::types::ErrorBody;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL and path did not form a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The request never produced a response (connect failure, timeout, TLS).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status. `body` is kept verbatim.
    #[error("Request failed with status code {status}")]
    HttpStatus { status: u16, body: String },
    /// The response arrived but its body could not be read to the end.
    #[error("Failed to read response body: {source}")]
    Body {
        status: u16,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Status code attached to the failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::Body { status, .. } => Some(*status),
            Self::InvalidUrl(_) | Self::Network(_) => None,
        }
    }

    /// Best-effort human readable message.
    ///
    /// Prefers the `message` field of a structured error body returned by the
    /// server and falls back to this error's own description.
    pub fn message(&self) -> String {
        self.remote_message().unwrap_or_else(|| self.to_string())
    }

    fn remote_message(&self) -> Option<String> {
        let Self::HttpStatus { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_remote_body() {
        let err = Error::HttpStatus {
            status: 401,
            body: r#"{"message":"invalid credentials"}"#.to_string(),
        };
        assert_eq!(err.message(), "invalid credentials");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn message_falls_back_on_plain_body() {
        let err = Error::HttpStatus {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.message(), "Request failed with status code 500");
    }

    #[test]
    fn message_falls_back_when_body_has_no_message() {
        let err = Error::HttpStatus {
            status: 409,
            body: r#"{"error":"conflict"}"#.to_string(),
        };
        assert_eq!(err.message(), "Request failed with status code 409");

        let err = Error::HttpStatus {
            status: 400,
            body: r#"{"message":""}"#.to_string(),
        };
        assert_eq!(err.message(), "Request failed with status code 400");
    }

    #[test]
    fn invalid_url_has_no_status() {
        let err = Error::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.message(), "Invalid URL: relative URL without a base");
    }

    #[test]
    fn message_renders_non_string_remote_message() {
        let err = Error::HttpStatus {
            status: 422,
            body: r#"{"message":42}"#.to_string(),
        };
        assert_eq!(err.message(), "42");

        let err = Error::HttpStatus {
            status: 400,
            body: r#"{"message":{"field":"email","reason":"taken"}}"#.to_string(),
        };
        assert_eq!(err.message(), r#"{"field":"email","reason":"taken"}"#);

        let err = Error::HttpStatus {
            status: 400,
            body: r#"{"message":null}"#.to_string(),
        };
        assert_eq!(err.message(), "Request failed with status code 400");
    }
}
