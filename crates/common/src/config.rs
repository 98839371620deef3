use crate::errors::{ApiResult, ClientError};
use crate::request::RequestOptions;
use crate::types::Network;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

const ENV_API_KEY: &str = "CARDANO_API_KEY";
const ENV_NETWORK: &str = "CARDANO_API_NETWORK";
const ENV_BASE_URL: &str = "CARDANO_API_BASE_URL";
const ENV_TIMEOUT: &str = "CARDANO_API_TIMEOUT_SECS";

/// Connection settings shared by every request builder.
///
/// Immutable once built; the client holds it behind an `Arc`.
#[derive(Clone)]
pub struct Configuration {
    base_url: String,
    api_key: String,
    base_options: RequestOptions,
}

/// On-disk representation read by [`Configuration::from_toml_file`].
#[derive(Deserialize, Debug, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub api_key: String,
    pub network: Option<Network>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ApiResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("Failed to read config file '{}': {e}", path.display()))
        })?;

        Ok(toml::from_str(&contents)?)
    }
}

impl Configuration {
    pub fn new(network: Network, api_key: impl Into<String>) -> Self {
        Self {
            base_url: network.base_url(),
            api_key: api_key.into(),
            base_options: RequestOptions::default(),
        }
    }

    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> ApiResult<Self> {
        // Only validated here; requests are joined by string concatenation.
        Url::parse(base_url)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            base_options: RequestOptions::default(),
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> ApiResult<Self> {
        self.base_options = self.base_options.with_header(name, value)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.base_options.timeout = Some(timeout);
        self
    }

    /// Reads the configuration from the environment (and a `.env` file, if any).
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| ClientError::Config(format!("{ENV_API_KEY} must be set")))?;

        let network = match std::env::var(ENV_NETWORK) {
            Ok(network) => network.parse().map_err(ClientError::Config)?,
            Err(_) => Network::default(),
        };

        let mut config = match std::env::var(ENV_BASE_URL) {
            Ok(base_url) => Self::with_base_url(&base_url, api_key)?,
            Err(_) => Self::new(network, api_key),
        };

        if let Ok(timeout) = std::env::var(ENV_TIMEOUT) {
            let secs = timeout
                .parse::<u64>()
                .map_err(|e| ClientError::Config(format!("{ENV_TIMEOUT}: {e}")))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ApiResult<Self> {
        FileConfig::from_toml_file(path)?.try_into()
    }

    pub fn from_toml_str(contents: &str) -> ApiResult<Self> {
        let file: FileConfig = toml::from_str(contents)?;

        file.try_into()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_options(&self) -> &RequestOptions {
        &self.base_options
    }
}

impl TryFrom<FileConfig> for Configuration {
    type Error = ClientError;

    fn try_from(file: FileConfig) -> Result<Self, Self::Error> {
        if file.api_key.is_empty() {
            return Err(ClientError::Config("api_key must be set".into()));
        }

        let mut config = match file.base_url {
            Some(base_url) => Self::with_base_url(&base_url, file.api_key)?,
            None => Self::new(file.network.unwrap_or_default(), file.api_key),
        };

        for (name, value) in &file.headers {
            config = config.with_header(name, value)?;
        }

        if let Some(secs) = file.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

// The API key stays out of logs.
impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("base_options", &self.base_options)
            .finish()
    }
}
