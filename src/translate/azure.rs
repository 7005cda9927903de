use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::error::TranslateError;
use super::interface::{TranslationRequest, TranslatorInterface};
use crate::config::{ConfigError, TranslatorConfig};

pub const API_VERSION: &str = "3.0";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";
const TRACE_ID_HEADER: &str = "X-ClientTraceId";

#[derive(Debug, Serialize)]
struct TextItem<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseItem {
    translations: Vec<TranslationItem>,
}

#[derive(Debug, Deserialize)]
struct TranslationItem {
    text: String,
}

/// Client for the Azure Translator v3 REST API
pub struct AzureTranslator {
    client: Client,
    config: TranslatorConfig,
}

impl AzureTranslator {
    /// Build the client. Certificates are verified against the bundled
    /// webpki roots plus the configured CA bundle, if any.
    pub fn new(config: TranslatorConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder()
            .use_rustls_tls()
            .default_headers(Self::credential_headers(&config)?);

        if let Some(path) = &config.ca_bundle {
            let pem = std::fs::read(path).map_err(|e| ConfigError::CaBundle {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let cert = reqwest::Certificate::from_pem(&pem).map_err(|e| ConfigError::CaBundle {
                path: path.clone(),
                message: e.to_string(),
            })?;
            builder = builder.add_root_certificate(cert);
        }

        info!(
            "Initialized AzureTranslator: endpoint={}, region={}, category={:?}",
            config.endpoint, config.region, config.category
        );

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    fn credential_headers(config: &TranslatorConfig) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.subscription_key).map_err(|e| {
            ConfigError::InvalidHeader {
                name: SUBSCRIPTION_KEY_HEADER,
                message: e.to_string(),
            }
        })?;
        key.set_sensitive(true);
        headers.insert(SUBSCRIPTION_KEY_HEADER, key);
        headers.insert(
            SUBSCRIPTION_REGION_HEADER,
            HeaderValue::from_str(&config.region).map_err(|e| ConfigError::InvalidHeader {
                name: SUBSCRIPTION_REGION_HEADER,
                message: e.to_string(),
            })?,
        );
        Ok(headers)
    }

    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.endpoint.trim_end_matches('/'))
    }

    /// Query parameters for one request; `category` is omitted when unset
    fn query(&self, request: &TranslationRequest) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("api-version", API_VERSION.to_string()),
            ("from", request.source_language.clone()),
            ("to", request.target_language.clone()),
        ];
        if let Some(category) = &self.config.category {
            query.push(("category", category.clone()));
        }
        query
    }

    fn parse_translation(body: &str) -> Result<String, TranslateError> {
        let unexpected = |detail: String| TranslateError::Http {
            status: StatusCode::OK.as_u16(),
            body: format!("unexpected response body ({}): {}", detail, body),
        };

        let items: Vec<TranslateResponseItem> =
            serde_json::from_str(body).map_err(|e| unexpected(e.to_string()))?;

        items
            .into_iter()
            .next()
            .and_then(|item| item.translations.into_iter().next())
            .map(|t| t.text)
            .ok_or_else(|| unexpected("no translations".to_string()))
    }
}

#[async_trait]
impl TranslatorInterface for AzureTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        if let Err(e) = request.validate() {
            debug!("Rejected translation input before sending: {}", e);
            return Err(e);
        }

        let trace_id = Uuid::new_v4();
        debug!(
            "Sending translation request {}: {} -> {}, {} chars",
            trace_id,
            request.source_language,
            request.target_language,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(self.translate_url())
            .query(&self.query(request))
            .header(CONTENT_TYPE, "application/json")
            .header(TRACE_ID_HEADER, trace_id.to_string())
            .json(&[TextItem { text: &request.text }])
            .send()
            .await
            .map_err(|e| {
                let err = TranslateError::from_transport(e);
                warn!("Translation request {} failed: {}", trace_id, err);
                err
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(TranslateError::from_transport)?;

        if status != StatusCode::OK {
            warn!("Translation request {} returned {}: {}", trace_id, status, body);
            return Err(TranslateError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let translated = Self::parse_translation(&body)?;
        debug!("Translation request {} succeeded", trace_id);
        Ok(translated)
    }
}
