pub mod azure;
pub mod direction;
pub mod error;
pub mod interface;

pub use azure::AzureTranslator;
pub use direction::Direction;
pub use error::{FailureKind, TranslateError};
pub use interface::{TranslationRequest, TranslationResult, TranslatorInterface};
