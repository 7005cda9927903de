use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure category reported back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    ValidationError,
    HttpError,
    TransportError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("{0}")]
    Validation(String),

    #[error("Error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("{}: {message}", transport_prefix(.tls))]
    Transport { message: String, tls: bool },
}

impl TranslateError {
    pub fn empty_input() -> Self {
        TranslateError::Validation("Please enter some text.".to_string())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TranslateError::Validation(_) => FailureKind::ValidationError,
            TranslateError::Http { .. } => FailureKind::HttpError,
            TranslateError::Transport { .. } => FailureKind::TransportError,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            TranslateError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build a transport error from a reqwest failure, keeping the whole source chain.
    /// The request URL is dropped so query values never reach the message.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let err = err.without_url();
        let tls = is_tls_failure(&err);
        let message = error_chain(&err);
        TranslateError::Transport { message, tls }
    }
}

fn transport_prefix(tls: &bool) -> &'static str {
    if *tls {
        "SSL error"
    } else {
        "Request failed"
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// rustls failures surface as `io::Error` with `InvalidData` somewhere in the
/// source chain; the outer error is skipped since its text may carry user input.
fn is_tls_failure(err: &dyn std::error::Error) -> bool {
    const MARKERS: [&str; 3] = ["certificate", "handshake", "corrupt message"];

    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io) = cause.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::InvalidData {
                return true;
            }
        }
        let text = cause.to_string().to_lowercase();
        if MARKERS.iter().any(|m| text.contains(m)) {
            return true;
        }
        source = cause.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_status_codes() {
        assert_eq!(TranslateError::empty_input().kind(), FailureKind::ValidationError);
        assert_eq!(TranslateError::empty_input().status_code(), None);

        let http = TranslateError::Http { status: 401, body: "denied".into() };
        assert_eq!(http.kind(), FailureKind::HttpError);
        assert_eq!(http.status_code(), Some(401));
        assert_eq!(http.to_string(), "Error 401: denied");
    }

    #[test]
    fn transport_display_marks_tls() {
        let tls = TranslateError::Transport { message: "bad cert".into(), tls: true };
        assert_eq!(tls.to_string(), "SSL error: bad cert");
        let other = TranslateError::Transport { message: "refused".into(), tls: false };
        assert_eq!(other.to_string(), "Request failed: refused");
    }

    #[derive(Debug)]
    struct Wrapped {
        text: &'static str,
        cause: Option<std::io::Error>,
    }

    impl std::fmt::Display for Wrapped {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.text)
        }
    }

    impl std::error::Error for Wrapped {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.cause.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn tls_detection_follows_source_chain() {
        let invalid_data = Wrapped {
            text: "error sending request",
            cause: Some(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "invalid peer certificate: UnknownIssuer",
            )),
        };
        assert!(is_tls_failure(&invalid_data));

        let refused = Wrapped {
            text: "error sending request for url (https://tls.example/?category=ssl)",
            cause: Some(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Connection refused",
            )),
        };
        assert!(!is_tls_failure(&refused));
        assert_eq!(
            error_chain(&refused),
            "error sending request for url (https://tls.example/?category=ssl): Connection refused"
        );
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::TransportError).unwrap();
        assert_eq!(json, "\"transport_error\"");
    }
}
