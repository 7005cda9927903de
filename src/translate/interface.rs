use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::error::{FailureKind, TranslateError};

/// A single text to translate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(direction: Direction, text: impl Into<String>) -> Self {
        let (source, target) = direction.languages();
        Self {
            source_language: source.to_string(),
            target_language: target.to_string(),
            text: text.into(),
        }
    }

    /// Rejects empty or whitespace-only text before anything goes on the wire
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.text.trim().is_empty() {
            return Err(TranslateError::empty_input());
        }
        Ok(())
    }
}

/// Outcome of one translate call, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    Success {
        translated_text: String,
    },
    Failure {
        kind: FailureKind,
        status_code: Option<u16>,
        message: String,
    },
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }
}

impl From<TranslateError> for TranslationResult {
    fn from(err: TranslateError) -> Self {
        let kind = err.kind();
        let status_code = err.status_code();
        let message = match &err {
            TranslateError::Validation(message) => message.clone(),
            TranslateError::Http { body, .. } => body.clone(),
            TranslateError::Transport { .. } => err.to_string(),
        };
        TranslationResult::Failure {
            kind,
            status_code,
            message,
        }
    }
}

impl From<Result<String, TranslateError>> for TranslationResult {
    fn from(result: Result<String, TranslateError>) -> Self {
        match result {
            Ok(translated_text) => TranslationResult::Success { translated_text },
            Err(err) => err.into(),
        }
    }
}

/// Translator interface
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate one text, performing at most one outbound call
    ///
    /// # Returns
    /// The translated text, or the classified failure
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_rejected() {
        for text in ["", "   ", "\n\t "] {
            let request = TranslationRequest::new(Direction::EnToVi, text);
            let err = request.validate().unwrap_err();
            assert_eq!(err.kind(), FailureKind::ValidationError);
        }
        assert!(TranslationRequest::new(Direction::EnToVi, " hi ").validate().is_ok());
    }

    #[test]
    fn request_follows_direction() {
        let request = TranslationRequest::new(Direction::ViToEn, "Xin chào");
        assert_eq!(request.source_language, "vi");
        assert_eq!(request.target_language, "en");
    }

    #[test]
    fn http_failure_keeps_raw_body() {
        let result: TranslationResult = TranslateError::Http {
            status: 401,
            body: "{\"error\":{\"code\":401000}}".into(),
        }
        .into();
        assert_eq!(
            result,
            TranslationResult::Failure {
                kind: FailureKind::HttpError,
                status_code: Some(401),
                message: "{\"error\":{\"code\":401000}}".into(),
            }
        );
    }

    #[test]
    fn transport_failure_message_is_prefixed() {
        let result: TranslationResult = TranslateError::Transport {
            message: "invalid peer certificate".into(),
            tls: true,
        }
        .into();
        match result {
            TranslationResult::Failure { kind, message, .. } => {
                assert_eq!(kind, FailureKind::TransportError);
                assert_eq!(message, "SSL error: invalid peer certificate");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn result_json_shape() {
        let success = TranslationResult::Success {
            translated_text: "Hello".into(),
        };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            serde_json::json!({"status": "success", "translated_text": "Hello"})
        );

        let failure: TranslationResult = TranslateError::empty_input().into();
        assert_eq!(
            serde_json::to_value(&failure).unwrap(),
            serde_json::json!({
                "status": "failure",
                "kind": "validation_error",
                "status_code": null,
                "message": "Please enter some text."
            })
        );
    }
}
