pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::{Error, Result, ValidationError};
pub use models::InferenceModel;
pub use types::{
    CompletionRequest, ContentType, GenerationParameters, Prompt, RawSummaryRequest, Style,
    SummarizationRequest, SummarizationResult,
};
pub use validation::validate;
