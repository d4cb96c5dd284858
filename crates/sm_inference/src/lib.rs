use std::env;
use std::fmt;
use std::time::Duration;

use sm_core::{Error, Result};
use url::Url;

pub mod models;
pub mod prompt;
pub mod summarizer;

pub const DEFAULT_BACKEND: &str = "openai";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Low on purpose: accuracy matters more than variety for summaries.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Backend selection and credentials, built once at startup and then
/// only read.
#[derive(Clone)]
pub struct Config {
    pub backend: String,
    pub api_key: Option<String>,
    pub model_name: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("backend", &self.backend)
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model_name", &self.model_name)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: DEFAULT_BACKEND.to_string(),
            api_key: None,
            model_name: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: None,
        }
    }
}

impl Config {
    /// Reads `SM_BACKEND`, `OPENAI_API_KEY`, `OPENAI_MODEL`,
    /// `OPENAI_BASE_URL` and `SM_TEMPERATURE`, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(backend) = env::var("SM_BACKEND") {
            config.backend = backend;
        }
        config.api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        if let Ok(model) = env::var("OPENAI_MODEL") {
            config.model_name = model;
        }
        if let Ok(base_url) = env::var("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(temperature) = env::var("SM_TEMPERATURE") {
            config.temperature = temperature
                .parse()
                .map_err(|e| Error::Config(format!("SM_TEMPERATURE: {}", e)))?;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == "openai" && self.api_key.is_none() {
            return Err(Error::Config(
                "OPENAI_API_KEY is required for the openai backend".to_string(),
            ));
        }
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base url '{}': {}", self.base_url, e)))?;
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "temperature must be between 0 and 2 (got {})",
                self.temperature
            )));
        }
        if self.model_name.trim().is_empty() {
            return Err(Error::Config("model name must not be empty".to_string()));
        }
        Ok(())
    }
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::create_model;
    pub use super::summarizer::{GenerationSettings, Summarizer};
    pub use sm_core::{Error, Result, SummarizationRequest, SummarizationResult};
}

pub use models::create_model;
pub use summarizer::{GenerationSettings, Summarizer};
