//! Field guards for incoming summarization requests.
//!
//! Guards run in a fixed order (content, content_type, summary_length,
//! style, focus_points) and the first failure is reported.

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::{
    ContentType, RawSummaryRequest, Style, SummarizationRequest, DEFAULT_FOCUS_POINTS,
    DEFAULT_SUMMARY_LENGTH, MAX_CONTENT_CHARS, MAX_SUMMARY_LENGTH, MIN_CONTENT_CHARS,
    MIN_SUMMARY_LENGTH,
};

pub fn validate(raw: &RawSummaryRequest) -> Result<SummarizationRequest, ValidationError> {
    let content = content_field(raw.content.as_ref())?;
    let content_type = content_type_field(raw.content_type.as_ref())?;
    let summary_length = summary_length_field(raw.summary_length.as_ref())?;
    let style = style_field(raw.style.as_ref())?;
    let focus_points = focus_points_field(raw.focus_points.as_ref())?;

    Ok(SummarizationRequest {
        content,
        content_type,
        summary_length,
        style,
        focus_points,
    })
}

impl SummarizationRequest {
    /// Typed constructor for callers that already hold parsed values.
    /// Applies the same content and length guards as [`validate`].
    pub fn new(
        content: impl Into<String>,
        content_type: ContentType,
        summary_length: u32,
        style: Style,
        focus_points: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content = content.into();
        check_content(&content)?;
        check_summary_length(i64::from(summary_length))?;
        Ok(Self {
            content,
            content_type,
            summary_length,
            style,
            focus_points: focus_points.into(),
        })
    }
}

/// The lower bound applies to the trimmed text and the upper bound to the
/// text as stored, both counted in chars.
pub fn check_content(content: &str) -> Result<(), ValidationError> {
    let len = content.trim().chars().count();
    if len < MIN_CONTENT_CHARS {
        return Err(ValidationError::new(
            "content",
            format!(
                "content must be at least {} characters after trimming whitespace (got {})",
                MIN_CONTENT_CHARS, len
            ),
        ));
    }
    let raw_len = content.chars().count();
    if raw_len > MAX_CONTENT_CHARS {
        return Err(ValidationError::new(
            "content",
            format!(
                "content must be at most {} characters (got {})",
                MAX_CONTENT_CHARS, raw_len
            ),
        ));
    }
    Ok(())
}

pub fn check_summary_length(value: i64) -> Result<u32, ValidationError> {
    if value < i64::from(MIN_SUMMARY_LENGTH) || value > i64::from(MAX_SUMMARY_LENGTH) {
        return Err(ValidationError::new(
            "summary_length",
            format!(
                "summary_length must be between {} and {} (got {})",
                MIN_SUMMARY_LENGTH, MAX_SUMMARY_LENGTH, value
            ),
        ));
    }
    Ok(value as u32)
}

fn content_field(value: Option<&Value>) -> Result<String, ValidationError> {
    let content = match value {
        None => return Err(ValidationError::new("content", "content is required")),
        Some(Value::String(s)) => s,
        Some(other) => return Err(type_error("content", "a string", other)),
    };
    check_content(content)?;
    Ok(content.clone())
}

fn content_type_field(value: Option<&Value>) -> Result<ContentType, ValidationError> {
    match value {
        None => Ok(ContentType::default()),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err(ValidationError::new(
            "content_type",
            format!("content_type must be one of: {}", ContentType::allowed()),
        )),
    }
}

fn summary_length_field(value: Option<&Value>) -> Result<u32, ValidationError> {
    let number = match value {
        None => return Ok(DEFAULT_SUMMARY_LENGTH),
        Some(Value::Number(n)) => n,
        Some(other) => return Err(type_error("summary_length", "an integer", other)),
    };

    if let Some(n) = number.as_i64() {
        return check_summary_length(n);
    }
    if number.as_u64().is_some() {
        // Larger than i64::MAX, so certainly out of range.
        return Err(ValidationError::new(
            "summary_length",
            format!(
                "summary_length must be between {} and {} (got {})",
                MIN_SUMMARY_LENGTH, MAX_SUMMARY_LENGTH, number
            ),
        ));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => check_summary_length(f as i64),
        _ => Err(ValidationError::new(
            "summary_length",
            format!("summary_length must be an integer (got {})", number),
        )),
    }
}

fn style_field(value: Option<&Value>) -> Result<Style, ValidationError> {
    match value {
        None => Ok(Style::default()),
        Some(Value::String(s)) => s.parse(),
        Some(_) => Err(ValidationError::new(
            "style",
            format!("style must be one of: {}", Style::allowed()),
        )),
    }
}

fn focus_points_field(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        None => Ok(DEFAULT_FOCUS_POINTS.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(type_error("focus_points", "a string", other)),
    }
}

fn type_error(field: &'static str, expected: &str, got: &Value) -> ValidationError {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    ValidationError::new(field, format!("{} must be {} (got {})", field, expected, kind))
}
