use crate::error::{Result, StudioError};
use crate::models::{AspectRatio, Resolution};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_ACCESS_CODE: &str = "150113";
pub const DEFAULT_DATA_DIR: &str = ".fashionai";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Explicit key. When unset the key is looked up in `api_key_vars` on every call.
    pub api_key: Option<String>,
    pub api_key_vars: Vec<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub access_code: String,
    pub data_dir: PathBuf,
    pub aspect_ratio: AspectRatio,
    pub resolution: Resolution,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            api_key_vars: vec!["API_KEY".to_string(), "GEMINI_API_KEY".to_string()],
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        let model = env::var("GEMINI_MODEL").unwrap_or(defaults.model);
        let endpoint = env::var("GEMINI_ENDPOINT").unwrap_or(defaults.endpoint);
        let timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs);

        GeminiConfig {
            api_key: None,
            api_key_vars: defaults.api_key_vars,
            model,
            endpoint,
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_key_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.api_key_vars = vars.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves the credential for a single call.
    pub fn resolve_api_key(&self) -> Result<String> {
        let from_env = || {
            self.api_key_vars
                .iter()
                .filter_map(|var| env::var(var).ok())
                .find(|value| !value.trim().is_empty())
        };

        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(from_env)
            .ok_or_else(|| {
                StudioError::ConfigError(format!(
                    "API key not found in environment variables ({})",
                    self.api_key_vars.join(", ")
                ))
            })
    }

    pub fn generate_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            gemini: GeminiConfig::default(),
            access_code: DEFAULT_ACCESS_CODE.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            aspect_ratio: AspectRatio::default(),
            resolution: Resolution::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let access_code = env::var("ACCESS_CODE")
            .ok()
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_ACCESS_CODE.to_string());
        let data_dir = env::var("FASHIONAI_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Config {
            gemini: GeminiConfig::from_env(),
            access_code,
            data_dir,
            ..Default::default()
        }
    }

    pub fn with_gemini(mut self, config: GeminiConfig) -> Self {
        self.gemini = config;
        self
    }

    pub fn with_access_code(mut self, code: impl Into<String>) -> Self {
        self.access_code = code.into();
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        let config = GeminiConfig::new()
            .with_api_key("abc")
            .with_api_key_vars(["FASHIONAI_TEST_NEVER_SET"]);
        assert_eq!(config.resolve_api_key().unwrap(), "abc");
    }

    #[test]
    fn missing_key_is_config_error() {
        let config = GeminiConfig::new().with_api_key_vars(["FASHIONAI_TEST_NEVER_SET"]);
        match config.resolve_api_key() {
            Err(StudioError::ConfigError(msg)) => assert!(msg.contains("FASHIONAI_TEST_NEVER_SET")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn blank_explicit_key_is_ignored() {
        let config = GeminiConfig::new()
            .with_api_key("   ")
            .with_api_key_vars(["FASHIONAI_TEST_NEVER_SET"]);
        assert!(config.resolve_api_key().is_err());
    }

    #[test]
    fn generate_url_trims_trailing_slash() {
        let config = GeminiConfig::new()
            .with_endpoint("http://localhost:8080/models/")
            .with_model("m1");
        assert_eq!(config.generate_url(), "http://localhost:8080/models/m1:generateContent");
    }
}
