use std::fmt;
use sm_core::{CompletionRequest, Result};
use super::InferenceModel;

const CONTENT_MARKER: &str = "Content to summarize:\n";
const REQUIREMENTS_MARKER: &str = "\n\nRequirements:";

/// Offline backend that answers with the opening words of the content.
/// Useful for local runs and demos without credentials.
pub struct DummyModel {
    max_words: usize,
}

impl fmt::Debug for DummyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DummyModel")
            .field("max_words", &self.max_words)
            .finish()
    }
}

impl Default for DummyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyModel {
    pub fn new() -> Self {
        Self { max_words: 20 }
    }

    pub fn with_max_words(max_words: usize) -> Self {
        Self { max_words }
    }
}

#[async_trait::async_trait]
impl InferenceModel for DummyModel {
    fn name(&self) -> &str {
        "Dummy"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let user = request.prompt.user.as_str();
        let content = user
            .find(CONTENT_MARKER)
            .map(|start| &user[start + CONTENT_MARKER.len()..])
            .map(|rest| rest.rfind(REQUIREMENTS_MARKER).map_or(rest, |end| &rest[..end]))
            .unwrap_or(user);

        let words: Vec<&str> = content.split_whitespace().take(self.max_words).collect();
        Ok(words.join(" "))
    }
}
