use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_KEY: &str = "AZURE_TRANSLATOR_KEY";
pub const ENV_REGION: &str = "AZURE_TRANSLATOR_REGION";
pub const ENV_ENDPOINT: &str = "AZURE_TRANSLATOR_ENDPOINT";
pub const ENV_CATEGORY: &str = "AZURE_TRANSLATOR_CATEGORY";
pub const ENV_CA_BUNDLE: &str = "AZURE_TRANSLATOR_CA_BUNDLE";
pub const ENV_HOST: &str = "ENVI_HOST";
pub const ENV_PORT: &str = "ENVI_PORT";

pub const DEFAULT_CONFIG_PATH: &str = "conf.yaml";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: i64 = 8501;

/// Environment variables that override keys from the config file
const ENV_OVERRIDES: [(&str, &str); 7] = [
    ("translator.key", ENV_KEY),
    ("translator.region", ENV_REGION),
    ("translator.endpoint", ENV_ENDPOINT),
    ("translator.category", ENV_CATEGORY),
    ("translator.ca_bundle", ENV_CA_BUNDLE),
    ("server.host", ENV_HOST),
    ("server.port", ENV_PORT),
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid translator endpoint {0:?}: expected an http(s) URL")]
    InvalidEndpoint(String),

    #[error("invalid {name} value: {message}")]
    InvalidHeader { name: &'static str, message: String },

    #[error("failed to load CA bundle {}: {message}", .path.display())]
    CaBundle { path: PathBuf, message: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub translator: TranslatorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Credentials and endpoint for the translation provider
#[derive(Clone)]
pub struct TranslatorConfig {
    pub subscription_key: String,
    pub region: String,
    pub endpoint: String,
    pub category: Option<String>,
    /// Extra PEM roots trusted on top of the bundled Mozilla store
    pub ca_bundle: Option<PathBuf>,
}

// Keep the subscription key out of logs.
impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("subscription_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("category", &self.category)
            .field("ca_bundle", &self.ca_bundle)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    server: ServerConfig,
    #[serde(default)]
    translator: RawTranslatorConfig,
}

#[derive(Debug, Default, Deserialize)]
struct RawTranslatorConfig {
    key: Option<String>,
    region: Option<String>,
    endpoint: Option<String>,
    category: Option<String>,
    ca_bundle: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the optional file plus the process environment
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] with an explicit environment lookup
    pub fn load_with<F>(path: Option<&str>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.port", DEFAULT_PORT)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        for (key, var) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, non_empty(lookup(var)))?;
        }

        let raw: RawConfig = builder.build()?.try_deserialize()?;
        Ok(Self {
            server: raw.server,
            translator: raw.translator.validate()?,
        })
    }
}

impl RawTranslatorConfig {
    fn validate(self) -> Result<TranslatorConfig, ConfigError> {
        let key = non_empty(self.key);
        let region = non_empty(self.region);
        let endpoint = non_empty(self.endpoint);

        let missing: Vec<&'static str> = [
            (ENV_KEY, key.is_none()),
            (ENV_REGION, region.is_none()),
            (ENV_ENDPOINT, endpoint.is_none()),
        ]
        .into_iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| name)
        .collect();

        let (Some(subscription_key), Some(region), Some(endpoint)) = (key, region, endpoint) else {
            return Err(ConfigError::Missing(missing));
        };

        let endpoint = endpoint.trim().to_string();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidEndpoint(endpoint));
        }

        Ok(TranslatorConfig {
            subscription_key,
            region,
            endpoint,
            category: non_empty(self.category),
            ca_bundle: self.ca_bundle.filter(|p| !p.as_os_str().is_empty()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
