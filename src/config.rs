use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub recognition: RecognitionConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub detail: DetailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where recognition requests go.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionMode {
    /// Random catalog ingredients after a fixed delay, no network.
    #[default]
    Simulated,
    Remote,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecognitionConfig {
    #[serde(default)]
    pub mode: RecognitionMode,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_recognize_path")]
    pub recognize_path: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_max_image_size")]
    pub max_image_size: usize,
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            mode: RecognitionMode::default(),
            base_url: default_base_url(),
            recognize_path: default_recognize_path(),
            api_key: String::new(),
            max_image_size: default_max_image_size(),
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl RecognitionConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

fn default_base_url() -> String {
    lazykitchen_recognition::client::DEFAULT_BASE_URL.to_string()
}

fn default_recognize_path() -> String {
    lazykitchen_recognition::client::RECOGNIZE_PATH.to_string()
}

fn default_max_image_size() -> usize {
    lazykitchen_recognition::MAX_IMAGE_SIZE
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

/// Where the user profile is kept.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// JSON key-value file at `profile_path`.
    #[default]
    File,
    /// Lost on restart.
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_profile_path")]
    pub profile_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            profile_path: default_profile_path(),
        }
    }
}

fn default_profile_path() -> PathBuf {
    PathBuf::from("data/storage.json")
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DetailConfig {
    /// Artificial wait before a recipe detail is returned.
    #[serde(default)]
    pub loading_delay_ms: u64,
}

impl DetailConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy `FOOD_API_KEY`
    /// 2. Environment variables (LAZYKITCHEN__RECOGNITION__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional; a missing file keeps the defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LAZYKITCHEN")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("FOOD_API_KEY") {
            builder = builder.set_override("recognition.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.recognition.max_image_size == 0 {
            return Err("Recognition max_image_size must be greater than 0".to_string());
        }
        if self.recognition.mode == RecognitionMode::Remote
            && self.recognition.api_key.trim().is_empty()
        {
            return Err("Remote recognition requires an API key (FOOD_API_KEY)".to_string());
        }
        if self.recognition.mode == RecognitionMode::Remote
            && url::Url::parse(&self.recognition.base_url).is_err()
        {
            return Err(format!(
                "Recognition base_url is not a valid URL: {}",
                self.recognition.base_url
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::config::FileFormat;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            recognition: RecognitionConfig::default(),
            storage: StorageConfig::default(),
            detail: DetailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_image_size() {
        let mut config = config();
        config.recognition.max_image_size = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_remote_needs_key() {
        let mut config = config();
        config.recognition.mode = RecognitionMode::Remote;
        assert!(config.validate().is_err());

        config.recognition.api_key = "secret".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_remote_needs_valid_url() {
        let mut config = config();
        config.recognition.mode = RecognitionMode::Remote;
        config.recognition.api_key = "secret".to_string();
        config.recognition.base_url = "not a url".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_backend_from_toml() {
        let storage: StorageConfig = ConfigBuilder::builder()
            .add_source(File::from_str("backend = \"memory\"", FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(storage.backend, StorageBackend::Memory);
        assert_eq!(storage.profile_path, PathBuf::from("data/storage.json"));
        assert_eq!(StorageConfig::default().backend, StorageBackend::File);
    }

    #[test]
    fn test_recognition_defaults() {
        let recognition = RecognitionConfig::default();
        assert_eq!(recognition.mode, RecognitionMode::Simulated);
        assert_eq!(recognition.base_url, "https://api.example.com");
        assert_eq!(recognition.recognize_path, "/food-recognition");
        assert_eq!(recognition.max_image_size, 5 * 1024 * 1024);
        assert_eq!(recognition.simulated_delay(), Duration::from_millis(1500));
    }
}
