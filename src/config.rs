use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
/// Recipes per list page, as the web frontend requests them.
const DEFAULT_PAGE_SIZE: u32 = 6;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Base URL of the Foodgram API (e.g. "https://foodgram.example.com/api")
    pub api_url: ConfigValue<String>,
    /// Auth token sent as `Authorization: Token <token>`
    #[serde(skip_serializing)]
    pub token: ConfigValue<Option<String>>,
    /// Recipes per page
    pub page_size: ConfigValue<u32>,
    /// HTTP request timeout
    pub request_timeout_secs: ConfigValue<u64>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    token: Option<String>,
    page_size: Option<u32>,
    request_timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut api_url = ConfigValue::new(DEFAULT_API_URL.to_string(), ConfigSource::Default);
        let mut token = ConfigValue::new(None, ConfigSource::Default);
        let mut page_size = ConfigValue::new(DEFAULT_PAGE_SIZE, ConfigSource::Default);
        let mut request_timeout_secs =
            ConfigValue::new(DEFAULT_TIMEOUT_SECS, ConfigSource::Default);
        let mut config_file = None;

        // Try to load from config file
        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(url) = file_config.api_url {
                api_url = ConfigValue::new(url, ConfigSource::File);
            }
            if let Some(t) = file_config.token {
                token = ConfigValue::new(Some(t), ConfigSource::File);
            }
            if let Some(size) = file_config.page_size {
                page_size = ConfigValue::new(size, ConfigSource::File);
            }
            if let Some(secs) = file_config.request_timeout_secs {
                request_timeout_secs = ConfigValue::new(secs, ConfigSource::File);
            }
        }

        // Apply environment variable overrides
        if let Ok(url) = std::env::var("FOODGRAM_API_URL") {
            api_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(t) = std::env::var("FOODGRAM_TOKEN") {
            token = ConfigValue::new(Some(t), ConfigSource::Environment);
        }
        if let Ok(size) = std::env::var("FOODGRAM_PAGE_SIZE") {
            let size = size
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FOODGRAM_PAGE_SIZE", size.clone()))?;
            page_size = ConfigValue::new(size, ConfigSource::Environment);
        }
        if let Ok(secs) = std::env::var("FOODGRAM_TIMEOUT_SECS") {
            let secs = secs
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FOODGRAM_TIMEOUT_SECS", secs.clone()))?;
            request_timeout_secs = ConfigValue::new(secs, ConfigSource::Environment);
        }

        if page_size.value == 0 {
            return Err(ConfigError::InvalidValue("page_size", "0".to_string()));
        }

        Ok(Self {
            api_url,
            token,
            page_size,
            request_timeout_secs,
            config_file,
        })
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/foodgram/
    /// - macOS: ~/Library/Application Support/foodgram/
    /// - Windows: %APPDATA%/foodgram/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("foodgram")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
            ConfigError::InvalidValue(key, value) => {
                write!(f, "Invalid value '{}' for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
