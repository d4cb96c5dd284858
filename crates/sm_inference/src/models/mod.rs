use std::sync::Arc;

use sm_core::{Error, InferenceModel, Result};

use crate::Config;

pub mod dummy;
pub mod openai;

pub use dummy::DummyModel;
pub use openai::OpenAiModel;

/// Builds the backend named by `config.backend`.
pub fn create_model(config: &Config) -> Result<Arc<dyn InferenceModel>> {
    let model: Arc<dyn InferenceModel> = match config.backend.as_str() {
        "openai" => Arc::new(OpenAiModel::new(config)?),
        "dummy" => Arc::new(DummyModel::new()),
        other => {
            return Err(Error::Config(format!(
                "unknown backend '{}', available backends: openai, dummy",
                other
            )))
        }
    };
    tracing::debug!("Created inference backend {}", model.name());
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_model_by_name() {
        let config = Config {
            backend: "dummy".to_string(),
            ..Config::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "Dummy");

        let config = Config {
            api_key: Some("sk-test".to_string()),
            ..Config::default()
        };
        assert_eq!(create_model(&config).unwrap().name(), "OpenAI");
    }

    #[test]
    fn test_unknown_backend() {
        let config = Config {
            backend: "ollama".to_string(),
            ..Config::default()
        };
        let err = create_model(&config).unwrap_err();
        assert!(err.to_string().contains("unknown backend 'ollama'"));
    }
}
