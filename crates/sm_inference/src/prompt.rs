use sm_core::{Prompt, SummarizationRequest};

pub const SYSTEM_INSTRUCTION: &str = "You are an expert content summarizer.
Create concise, accurate summaries that preserve key information.
Adapt your style based on the content type.
Always maintain factual accuracy and clarity.";

/// Builds the two-part instruction for a request. Output depends only on
/// the request, so identical requests produce identical prompts.
pub fn build_prompt(request: &SummarizationRequest) -> Prompt {
    let user = format!(
        "Content Type: {content_type}

Content to summarize:
{content}

Requirements:
- Target length: {summary_length} words
- Writing style: {style}
- Focus areas: {focus_points}

Generate a summary that meets these exact requirements.",
        content_type = request.content_type(),
        content = request.content(),
        summary_length = request.summary_length(),
        style = request.style(),
        focus_points = request.focus_points(),
    );

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_core::{ContentType, Style};

    fn request() -> SummarizationRequest {
        SummarizationRequest::new(
            "The quarterly report shows revenue growth across all three regions.",
            ContentType::Report,
            75,
            Style::Academic,
            "revenue trends",
        )
        .unwrap()
    }

    #[test]
    fn test_system_instruction_sets_role() {
        let prompt = build_prompt(&request());
        assert!(prompt.system.starts_with("You are an expert content summarizer."));
        assert!(prompt.system.contains("factual accuracy"));
        assert!(prompt.system.contains("content type"));
    }

    #[test]
    fn test_user_instruction_layout() {
        let prompt = build_prompt(&request());
        assert_eq!(
            prompt.user,
            "Content Type: report\n\
             \n\
             Content to summarize:\n\
             The quarterly report shows revenue growth across all three regions.\n\
             \n\
             Requirements:\n\
             - Target length: 75 words\n\
             - Writing style: academic\n\
             - Focus areas: revenue trends\n\
             \n\
             Generate a summary that meets these exact requirements."
        );
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&request()), build_prompt(&request()));
    }

    #[test]
    fn test_content_embedded_verbatim() {
        let content = "  Line one.\n\n  Line two with {braces} and trailing space.   ";
        let request = SummarizationRequest::new_unchecked(
            content,
            ContentType::General,
            100,
            Style::Professional,
            "main ideas",
        );
        let prompt = build_prompt(&request);
        assert!(prompt.user.contains(content));
    }
}
