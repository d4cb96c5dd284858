use std::fmt;
use std::sync::Arc;

use sm_core::types::MIN_CONTENT_CHARS;
use sm_core::{
    validate, CompletionRequest, Error, GenerationParameters, InferenceModel, RawSummaryRequest,
    Result, SummarizationRequest, SummarizationResult,
};
use tracing::{debug, info, warn};

use crate::models::create_model;
use crate::prompt::build_prompt;
use crate::{Config, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// Fixed decoding settings applied to every completion.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Turns validated requests into a single backend call and a normalized
/// result. Holds no mutable state, so one instance can be shared across
/// concurrent requests behind an `Arc`.
pub struct Summarizer {
    model: Arc<dyn InferenceModel>,
    settings: GenerationSettings,
}

impl fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Summarizer")
            .field("model", &self.model.name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl Summarizer {
    pub fn new(model: Arc<dyn InferenceModel>, settings: GenerationSettings) -> Self {
        Self { model, settings }
    }

    /// Validates the configuration and builds the backend it names.
    /// Fails with [`Error::Config`] when credentials are missing.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let model = create_model(config)?;
        Ok(Self::new(
            model,
            GenerationSettings {
                model: config.model_name.clone(),
                temperature: config.temperature,
            },
        ))
    }

    pub fn backend_name(&self) -> &str {
        self.model.name()
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Validates raw transport input and summarizes it. Validation failures
    /// come back as [`Error::Validation`] and never reach the backend.
    pub async fn create_summary(&self, raw: &RawSummaryRequest) -> Result<SummarizationResult> {
        let request = validate(raw)?;
        self.summarize(&request).await
    }

    pub async fn summarize(&self, request: &SummarizationRequest) -> Result<SummarizationResult> {
        if request.content().trim().chars().count() < MIN_CONTENT_CHARS {
            return Err(Error::Backend(format!(
                "Content too short to summarize effectively (min {} characters)",
                MIN_CONTENT_CHARS
            )));
        }

        let completion = CompletionRequest {
            prompt: build_prompt(request),
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
        };

        debug!(
            backend = self.model.name(),
            model = %completion.model,
            content_type = %request.content_type(),
            "Requesting summary"
        );

        match self.model.complete(&completion).await {
            Ok(text) => {
                let result = normalize(&text, request.parameters());
                info!(
                    backend = self.model.name(),
                    word_count = result.word_count,
                    char_count = result.char_count,
                    "Summary generated"
                );
                Ok(result)
            }
            Err(e) => {
                warn!(backend = self.model.name(), "Summary generation failed: {}", e);
                Err(Error::Backend(format!("Error generating summary: {}", e)))
            }
        }
    }
}

/// Trims the completion and computes its word and char counts.
pub fn normalize(text: &str, parameters: GenerationParameters) -> SummarizationResult {
    let summary = text.trim().to_string();
    SummarizationResult {
        word_count: summary.split_whitespace().count(),
        char_count: summary.chars().count(),
        summary,
        parameters_used: parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::{ContentType, Style};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Debug)]
    struct StubModel {
        reply: std::result::Result<String, String>,
        calls: AtomicUsize,
        last: Mutex<Option<CompletionRequest>>,
    }

    impl StubModel {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl InferenceModel for StubModel {
        fn name(&self) -> &str {
            "Stub"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            self.reply.clone().map_err(Error::Inference)
        }
    }

    fn request() -> SummarizationRequest {
        SummarizationRequest::new(
            "A".repeat(100),
            ContentType::General,
            50,
            Style::Professional,
            "main ideas",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_successful_summary() {
        let stub = StubModel::replying("This is a short test summary.");
        let summarizer = Summarizer::new(stub.clone(), GenerationSettings::default());

        let result = summarizer.summarize(&request()).await.unwrap();
        assert_eq!(result.summary, "This is a short test summary.");
        assert_eq!(result.word_count, 6);
        assert_eq!(result.char_count, 29);
        assert_eq!(result.parameters_used.summary_length, 50);
        assert_eq!(result.parameters_used.content_type, ContentType::General);
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_backend_receives_prompt_and_settings() {
        let stub = StubModel::replying("ok");
        let settings = GenerationSettings {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.1,
        };
        let summarizer = Summarizer::new(stub.clone(), settings);
        summarizer.summarize(&request()).await.unwrap();

        let sent = stub.last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.model, "gpt-4o-mini");
        assert_eq!(sent.temperature, 0.1);
        assert_eq!(sent.prompt, build_prompt(&request()));
    }

    #[tokio::test]
    async fn test_backend_failure_is_classified() {
        let stub = StubModel::failing("connection reset by peer");
        let summarizer = Summarizer::new(stub, GenerationSettings::default());

        let err = summarizer.summarize(&request()).await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("Error generating summary:"));
        assert!(err.to_string().contains("connection reset by peer"));
    }

    #[tokio::test]
    async fn test_summary_starting_with_error_is_success() {
        let stub = StubModel::replying("Error handling is the main theme of this document.");
        let summarizer = Summarizer::new(stub, GenerationSettings::default());

        let result = summarizer.summarize(&request()).await.unwrap();
        assert!(result.summary.starts_with("Error"));
    }

    #[tokio::test]
    async fn test_short_content_never_reaches_backend() {
        let stub = StubModel::replying("unused");
        let summarizer = Summarizer::new(stub.clone(), GenerationSettings::default());
        let request = SummarizationRequest::new_unchecked(
            format!("   {}   ", "A".repeat(10)),
            ContentType::General,
            100,
            Style::Professional,
            "main ideas",
        );

        let err = summarizer.summarize(&request).await.unwrap_err();
        assert!(matches!(err, Error::Backend(_)));
        assert!(err.to_string().contains("min 50 characters"));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_create_summary_validates_first() {
        let stub = StubModel::replying("unused");
        let summarizer = Summarizer::new(stub.clone(), GenerationSettings::default());

        let err = summarizer
            .create_summary(&RawSummaryRequest::with_content("short"))
            .await
            .unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_normalize_counts() {
        let params = request().parameters();
        let result = normalize("\n  one  two\tthree\n\nfour  \n", params.clone());
        assert_eq!(result.summary, "one  two\tthree\n\nfour");
        assert_eq!(result.word_count, 4);
        assert_eq!(result.char_count, 20);

        let empty = normalize("   ", params);
        assert_eq!(empty.summary, "");
        assert_eq!(empty.word_count, 0);
        assert_eq!(empty.char_count, 0);
    }

    #[test]
    fn test_from_config_requires_credentials() {
        let err = Summarizer::from_config(&Config::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let summarizer = Summarizer::from_config(&Config {
            backend: "dummy".to_string(),
            ..Config::default()
        })
        .unwrap();
        assert_eq!(summarizer.backend_name(), "Dummy");
        assert_eq!(summarizer.settings(), &GenerationSettings::default());
    }
}
