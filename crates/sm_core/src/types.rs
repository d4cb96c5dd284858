use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

pub const MIN_CONTENT_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 50_000;
pub const MIN_SUMMARY_LENGTH: u32 = 20;
pub const MAX_SUMMARY_LENGTH: u32 = 500;
pub const DEFAULT_SUMMARY_LENGTH: u32 = 100;
pub const DEFAULT_FOCUS_POINTS: &str = "main ideas";

/// Kind of document being summarized, used to steer tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    General,
    Article,
    Email,
    Report,
    Technical,
    Research,
}

impl ContentType {
    pub const ALL: [ContentType; 6] = [
        ContentType::General,
        ContentType::Article,
        ContentType::Email,
        ContentType::Report,
        ContentType::Technical,
        ContentType::Research,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::General => "general",
            ContentType::Article => "article",
            ContentType::Email => "email",
            ContentType::Report => "report",
            ContentType::Technical => "technical",
            ContentType::Research => "research",
        }
    }

    /// Comma separated list of accepted values, in declaration order.
    pub fn allowed() -> String {
        Self::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new(
                    "content_type",
                    format!("content_type must be one of: {}", Self::allowed()),
                )
            })
    }
}

/// Writing style requested for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Professional,
    Casual,
    Technical,
    Academic,
}

impl Style {
    pub const ALL: [Style; 4] = [
        Style::Professional,
        Style::Casual,
        Style::Technical,
        Style::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Technical => "technical",
            Style::Academic => "academic",
        }
    }

    pub fn allowed() -> String {
        Self::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                ValidationError::new("style", format!("style must be one of: {}", Self::allowed()))
            })
    }
}

/// Request fields exactly as received from the transport, before any
/// type or range checking. Absent and `null` fields are both `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSummaryRequest {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub content_type: Option<Value>,
    #[serde(default)]
    pub summary_length: Option<Value>,
    #[serde(default)]
    pub style: Option<Value>,
    #[serde(default)]
    pub focus_points: Option<Value>,
}

impl RawSummaryRequest {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(Value::String(content.into())),
            ..Default::default()
        }
    }
}

/// A request that passed every field guard. Only constructed through
/// [`crate::validation::validate`] or [`SummarizationRequest::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct SummarizationRequest {
    pub(crate) content: String,
    pub(crate) content_type: ContentType,
    pub(crate) summary_length: u32,
    pub(crate) style: Style,
    pub(crate) focus_points: String,
}

impl SummarizationRequest {
    /// Builds a request without running any guard. The summarizer still
    /// refuses content that is too short before calling a backend.
    pub fn new_unchecked(
        content: impl Into<String>,
        content_type: ContentType,
        summary_length: u32,
        style: Style,
        focus_points: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            content_type,
            summary_length,
            style,
            focus_points: focus_points.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn summary_length(&self) -> u32 {
        self.summary_length
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn focus_points(&self) -> &str {
        &self.focus_points
    }

    pub fn parameters(&self) -> GenerationParameters {
        GenerationParameters {
            content_type: self.content_type,
            summary_length: self.summary_length,
            style: self.style,
            focus_points: self.focus_points.clone(),
        }
    }
}

/// Echo of the generation inputs, returned for client-side display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub content_type: ContentType,
    pub summary_length: u32,
    pub style: Style,
    pub focus_points: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizationResult {
    pub summary: String,
    pub word_count: usize,
    pub char_count: usize,
    pub parameters_used: GenerationParameters,
}

/// Two-part instruction sent to a model backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Everything a backend needs for one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: Prompt,
    pub model: String,
    pub temperature: f32,
}
