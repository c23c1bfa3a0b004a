//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `TRIAGE_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CACHE_MAX_HISTORY, DEFAULT_CACHE_MAX_SIZE, DEFAULT_CACHE_TTL_SECS,
    DEFAULT_GENERATION_MODEL, DEFAULT_GENERATION_TIMEOUT_SECS, MIN_MATCH_THRESHOLD,
};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `TRIAGE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// HTTP server port. Default: `5000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Knowledge base JSON file; seeded with the default FAQ set when missing.
    pub knowledge_base_path: PathBuf,

    /// Sentence embedding model directory. Unset disables semantic matching.
    pub embedding_model_path: Option<PathBuf>,

    pub cache_enabled: bool,
    pub cache_ttl_secs: u64,
    pub cache_max_size: usize,

    /// Whether model-generated replies are cached alongside FAQ answers.
    pub cache_generated: bool,

    /// Requests with more history messages than this bypass the cache.
    pub cache_max_history: usize,

    /// Matches below this confidence go to the generator as context instead of
    /// being returned directly. Default: `0.3`.
    pub faq_answer_threshold: f32,

    pub generation_model: String,
    pub generation_timeout_secs: u64,

    /// Answer from intent templates instead of calling the model provider.
    pub mock_provider: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            knowledge_base_path: PathBuf::from("./data/knowledge_base.json"),
            embedding_model_path: None,
            cache_enabled: true,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            cache_max_size: DEFAULT_CACHE_MAX_SIZE,
            cache_generated: true,
            cache_max_history: DEFAULT_CACHE_MAX_HISTORY,
            faq_answer_threshold: MIN_MATCH_THRESHOLD,
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            generation_timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
            mock_provider: false,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "TRIAGE_PORT";
    const ENV_BIND_ADDR: &'static str = "TRIAGE_BIND_ADDR";
    const ENV_KNOWLEDGE_BASE_PATH: &'static str = "TRIAGE_KNOWLEDGE_BASE_PATH";
    const ENV_EMBEDDING_MODEL_PATH: &'static str = "TRIAGE_EMBEDDING_MODEL_PATH";
    const ENV_CACHE_ENABLED: &'static str = "TRIAGE_CACHE_ENABLED";
    const ENV_CACHE_TTL_SECS: &'static str = "TRIAGE_CACHE_TTL_SECS";
    const ENV_CACHE_MAX_SIZE: &'static str = "TRIAGE_CACHE_MAX_SIZE";
    const ENV_CACHE_GENERATED: &'static str = "TRIAGE_CACHE_GENERATED";
    const ENV_CACHE_MAX_HISTORY: &'static str = "TRIAGE_CACHE_MAX_HISTORY";
    const ENV_FAQ_ANSWER_THRESHOLD: &'static str = "TRIAGE_FAQ_ANSWER_THRESHOLD";
    const ENV_GENERATION_MODEL: &'static str = "TRIAGE_GENERATION_MODEL";
    const ENV_GENERATION_TIMEOUT_SECS: &'static str = "TRIAGE_GENERATION_TIMEOUT_SECS";
    const ENV_MOCK_PROVIDER: &'static str = "TRIAGE_MOCK_PROVIDER";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            port: Self::parse_port_from_env(defaults.port)?,
            bind_addr: Self::parse_bind_addr_from_env(defaults.bind_addr)?,
            knowledge_base_path: Self::parse_path_from_env(
                Self::ENV_KNOWLEDGE_BASE_PATH,
                defaults.knowledge_base_path,
            ),
            embedding_model_path: Self::parse_optional_path_from_env(
                Self::ENV_EMBEDDING_MODEL_PATH,
            ),
            cache_enabled: Self::parse_bool_from_env(
                Self::ENV_CACHE_ENABLED,
                defaults.cache_enabled,
            )?,
            cache_ttl_secs: Self::parse_from_env(Self::ENV_CACHE_TTL_SECS, defaults.cache_ttl_secs)?,
            cache_max_size: Self::parse_from_env(Self::ENV_CACHE_MAX_SIZE, defaults.cache_max_size)?,
            cache_generated: Self::parse_bool_from_env(
                Self::ENV_CACHE_GENERATED,
                defaults.cache_generated,
            )?,
            cache_max_history: Self::parse_from_env(
                Self::ENV_CACHE_MAX_HISTORY,
                defaults.cache_max_history,
            )?,
            faq_answer_threshold: Self::parse_from_env(
                Self::ENV_FAQ_ANSWER_THRESHOLD,
                defaults.faq_answer_threshold,
            )?,
            generation_model: Self::parse_string_from_env(
                Self::ENV_GENERATION_MODEL,
                defaults.generation_model,
            ),
            generation_timeout_secs: Self::parse_from_env(
                Self::ENV_GENERATION_TIMEOUT_SECS,
                defaults.generation_timeout_secs,
            )?,
            mock_provider: Self::parse_bool_from_env(
                Self::ENV_MOCK_PROVIDER,
                defaults.mock_provider,
            )?,
        })
    }

    /// Checks ranges and paths (does not create files).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.knowledge_base_path.is_dir() {
            return Err(ConfigError::NotAFile {
                path: self.knowledge_base_path.clone(),
            });
        }

        if !(0.0..=1.0).contains(&self.faq_answer_threshold) {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FAQ_ANSWER_THRESHOLD,
                reason: format!("{} is not within [0, 1]", self.faq_answer_threshold),
            });
        }

        if self.generation_timeout_secs == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_GENERATION_TIMEOUT_SECS,
                reason: "must be at least 1 second".to_string(),
            });
        }

        if self.cache_enabled && self.cache_ttl_secs == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_CACHE_TTL_SECS,
                reason: "must be at least 1 second while caching is enabled".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_from_env<T>(var_name: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                name: var_name,
                reason: e.to_string(),
                value,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                name: var_name,
                value,
                reason: "expected one of 1/0, true/false, yes/no, on/off".to_string(),
            }),
            Err(_) => Ok(default),
        }
    }
}

/// Parses common boolean spellings, case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
