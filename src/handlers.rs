use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::translate::{
    Direction, FailureKind, TranslationRequest, TranslationResult, TranslatorInterface,
};

/// "Translate" action submitted from the form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateCommand {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub text: String,
}

/// Everything the page needs to render after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub direction: Direction,
    pub text: String,
    pub outcome: Option<TranslationResult>,
}

impl PageView {
    /// Fresh form with no outcome box
    pub fn empty(direction: Direction) -> Self {
        Self {
            direction,
            text: String::new(),
            outcome: None,
        }
    }

    pub fn input_label(&self) -> &'static str {
        self.direction.input_label()
    }
}

/// Run one translation for a UI action and build the resulting view
pub async fn handle_translate(
    translator: &dyn TranslatorInterface,
    command: TranslateCommand,
) -> PageView {
    let outcome = run_translation(translator, command.direction, &command.text).await;
    PageView {
        direction: command.direction,
        text: command.text,
        outcome: Some(outcome),
    }
}

pub async fn run_translation(
    translator: &dyn TranslatorInterface,
    direction: Direction,
    text: &str,
) -> TranslationResult {
    let request = TranslationRequest::new(direction, text);
    let result: TranslationResult = translator.translate(&request).await.into();

    if result.is_success() {
        info!("Translated {} text ({})", direction.code(), direction.display_name());
    } else if let TranslationResult::Failure { kind, status_code, .. } = &result {
        match kind {
            FailureKind::ValidationError => {
                debug!("Translation {} rejected: empty input", direction.code())
            }
            _ => warn!(
                "Translation {} failed: {:?} (status {:?})",
                direction.code(),
                kind,
                status_code
            ),
        }
    }

    result
}
