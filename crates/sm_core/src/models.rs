use async_trait::async_trait;
use std::fmt;
use crate::types::CompletionRequest;
use crate::Result;

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    /// Human readable backend name, used in logs
    fn name(&self) -> &str;

    /// Run a single completion and return the raw generated text
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
