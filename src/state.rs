use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::translate::{AzureTranslator, TranslatorInterface};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn TranslatorInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let translator = Arc::new(AzureTranslator::new(config.translator.clone())?);
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslatorInterface>) -> Self {
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
