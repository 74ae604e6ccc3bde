//! Prompt templates for analysis generation
//!
//! Provides one template per [`FeatureKind`] and the rendering utilities
//! that interpolate caller input into them.
//!
//! Each template embeds its own response-shape contract: the JSON features
//! spell out the exact schema the model should return, and `summary` asks
//! for a letter-style paragraph instead. The model is not guaranteed to
//! comply, which is why [`crate::analysis::normalize`] never trusts the
//! shape.

use crate::domain::models::FeatureKind;

/// Product catalog used for recommendations when the caller supplies none.
const DEFAULT_PRODUCTS: &str = "Standard financial products including mutual funds, ETFs, bonds, retirement accounts (401k, IRA), education savings (529 plans), insurance products, and advisory services.";

/// Client context used for presentations when the caller supplies none.
const DEFAULT_CLIENT_CONTEXT: &str = "General client meeting";

const MEETING: &str = r#"You are a warm, conversational financial advisor who writes WhatsApp messages to clients after meetings. Your style is:
- Warm and friendly, using the client's first name
- Illustrative - you love using stories and analogies about other clients (anonymized) to make points relatable
- You use power phrases like "Let's make this happen together", "Your future is worth investing in", "We're building something meaningful here"
- You focus on next steps with collaborative urgency - "Let's agree on a time for decision making"
- You NEVER sound pushy or salesy
- You avoid technical jargon - keep it human and relatable
- You keep it high-level, not detailed

Analyze this meeting transcript and write a WhatsApp-style message (2 paragraphs max) that:
1. Addresses the client by their first name (extract from transcript)
2. Warmly recaps what you discussed using an analogy or story reference if appropriate
3. Highlights the key next steps with collaborative urgency
4. Ends casually suggesting to schedule a catch-up soon

TRANSCRIPT:
{transcript}

Return ONLY valid JSON in this format:
{
  "clientName": "First name extracted from transcript",
  "whatsappMessage": "The full WhatsApp message you would send (2 paragraphs, warm, conversational, with power phrases)",
  "keyTakeaways": ["2-3 bullet points of main discussion points for your records"],
  "nextSteps": ["Specific action items to follow up on"],
  "suggestedFollowUpDate": "Suggested timeframe for next meeting"
}"#;

const SUMMARY: &str = r#"You are a financial advisor assistant. Create a client-friendly summary from these meeting notes that can be shared with the client.

MEETING NOTES:
{notes}

Write a professional, warm, and clear summary that:
1. Recaps the key discussion points
2. Confirms the client's goals and priorities
3. Outlines next steps
4. Uses simple language (avoid jargon)
5. Is 2-3 paragraphs maximum

Format as a letter-style summary starting with "Dear Client,""#;

const SCENARIO: &str = r#"You are a financial planning expert. Based on the client profile below, create three distinct financial scenarios.

CLIENT PROFILE:
{profile}

Provide three scenarios in this JSON format (return ONLY valid JSON, no markdown):
{
  "scenarios": [
    {
      "name": "Base Case",
      "description": "Most likely outcome based on current trajectory",
      "assumptions": ["list of key assumptions"],
      "projectedOutcomes": {
        "retirement": "description",
        "investments": "description",
        "lifestyle": "description"
      },
      "risks": ["potential risks"],
      "tradeoffs": ["key tradeoffs"]
    },
    {
      "name": "Conservative",
      "description": "Lower risk, more cautious approach",
      "assumptions": ["list of key assumptions"],
      "projectedOutcomes": {
        "retirement": "description",
        "investments": "description",
        "lifestyle": "description"
      },
      "risks": ["potential risks"],
      "tradeoffs": ["key tradeoffs"]
    },
    {
      "name": "Growth-Oriented",
      "description": "Higher risk, higher potential returns",
      "assumptions": ["list of key assumptions"],
      "projectedOutcomes": {
        "retirement": "description",
        "investments": "description",
        "lifestyle": "description"
      },
      "risks": ["potential risks"],
      "tradeoffs": ["key tradeoffs"]
    }
  ]
}"#;

const RECOMMENDATIONS: &str = r#"You are a financial product specialist. Based on the client's needs and the available products, provide personalized recommendations.

CLIENT NEEDS:
{needs}

AVAILABLE PRODUCTS/SERVICES:
{products}

Provide recommendations in this JSON format (return ONLY valid JSON, no markdown):
{
  "recommendations": [
    {
      "product": "Product name",
      "fitExplanation": "Why this product fits the client's needs",
      "benefits": ["list of key benefits"],
      "risks": ["potential risks or downsides"],
      "suitabilityScore": 8,
      "considerations": "Any special considerations"
    }
  ],
  "notRecommended": [
    {
      "product": "Product name",
      "reason": "Why this product is not suitable"
    }
  ]
}"#;

const PRESENTATION: &str = r#"You are a presentation expert for financial advisors. Create a structured presentation outline.

TOPIC: {topic}
CLIENT CONTEXT: {context}

Provide a presentation outline in this JSON format (return ONLY valid JSON, no markdown):
{
  "title": "Presentation title",
  "duration": "Estimated duration (e.g., 30 minutes)",
  "slides": [
    {
      "slideNumber": 1,
      "title": "Slide title",
      "keyPoints": ["bullet point 1", "bullet point 2"],
      "speakerNotes": "Notes for the presenter",
      "visualSuggestion": "Suggested visual or chart"
    }
  ],
  "handoutSuggestions": ["Items to include in client handout"]
}"#;

const FEEDBACK: &str = r#"You are a financial advisor training coach. Evaluate the advisor's performance in this client interaction.

TRANSCRIPT:
{transcript}

Provide feedback in this JSON format (return ONLY valid JSON, no markdown):
{
  "overallScore": 4,
  "categories": [
    {
      "name": "Client Rapport",
      "score": 4,
      "feedback": "Specific feedback",
      "coachingTip": "Actionable improvement tip"
    },
    {
      "name": "Needs Discovery",
      "score": 4,
      "feedback": "Specific feedback",
      "coachingTip": "Actionable improvement tip"
    },
    {
      "name": "Product Knowledge",
      "score": 4,
      "feedback": "Specific feedback",
      "coachingTip": "Actionable improvement tip"
    },
    {
      "name": "Compliance Adherence",
      "score": 4,
      "feedback": "Specific feedback",
      "coachingTip": "Actionable improvement tip"
    },
    {
      "name": "Communication Clarity",
      "score": 4,
      "feedback": "Specific feedback",
      "coachingTip": "Actionable improvement tip"
    }
  ],
  "strengths": ["List of observed strengths"],
  "areasForImprovement": ["Priority areas to work on"],
  "overallFeedback": "2-3 sentence summary of performance"
}"#;

/// Prompt templates for each analysis feature
pub struct PromptTemplates;

impl PromptTemplates {
    /// Post-meeting WhatsApp message from a meeting transcript
    pub fn meeting() -> &'static str {
        MEETING
    }

    /// Client-friendly letter-style summary from meeting notes (prose, not JSON)
    pub fn summary() -> &'static str {
        SUMMARY
    }

    /// Three financial scenarios from a client profile
    pub fn scenario() -> &'static str {
        SCENARIO
    }

    /// Product recommendations from client needs and an optional product list
    pub fn recommendations() -> &'static str {
        RECOMMENDATIONS
    }

    /// Presentation outline from a topic and optional client context
    pub fn presentation() -> &'static str {
        PRESENTATION
    }

    /// Coaching feedback on advisor performance from a transcript
    pub fn feedback() -> &'static str {
        FEEDBACK
    }

    /// Get the template for a specific feature
    pub fn for_feature(feature: FeatureKind) -> &'static str {
        match feature {
            FeatureKind::Meeting => Self::meeting(),
            FeatureKind::Summary => Self::summary(),
            FeatureKind::Scenario => Self::scenario(),
            FeatureKind::Recommendations => Self::recommendations(),
            FeatureKind::Presentation => Self::presentation(),
            FeatureKind::Feedback => Self::feedback(),
        }
    }

    /// Get all templates
    pub fn all() -> Vec<(FeatureKind, &'static str)> {
        FeatureKind::ALL
            .iter()
            .map(|&feature| (feature, Self::for_feature(feature)))
            .collect()
    }

    /// Render the prompt for a feature, interpolating the caller's input.
    ///
    /// The primary input is embedded verbatim so the rendered prompt is an
    /// exact audit trail of what was sent. Templates without a secondary
    /// placeholder ignore `secondary`; the two that have one fall back to a
    /// default when it is absent or empty.
    ///
    /// Secondary placeholders are filled before the primary one so that
    /// placeholder-like text inside the primary input survives untouched.
    pub fn render(feature: FeatureKind, input: &str, secondary: Option<&str>) -> String {
        let secondary = secondary.filter(|s| !s.is_empty());
        match feature {
            FeatureKind::Meeting => MEETING.replace("{transcript}", input),
            FeatureKind::Summary => SUMMARY.replace("{notes}", input),
            FeatureKind::Scenario => SCENARIO.replace("{profile}", input),
            FeatureKind::Recommendations => RECOMMENDATIONS
                .replace("{products}", secondary.unwrap_or(DEFAULT_PRODUCTS))
                .replace("{needs}", input),
            FeatureKind::Presentation => PRESENTATION
                .replace("{context}", secondary.unwrap_or(DEFAULT_CLIENT_CONTEXT))
                .replace("{topic}", input),
            FeatureKind::Feedback => FEEDBACK.replace("{transcript}", input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_exist() {
        let templates = PromptTemplates::all();
        assert_eq!(templates.len(), FeatureKind::ALL.len());
        for (feature, template) in templates {
            assert!(!template.is_empty(), "empty template for {}", feature);
        }
    }

    #[test]
    fn test_render_embeds_input_verbatim() {
        for feature in FeatureKind::ALL {
            let prompt = PromptTemplates::render(feature, "UNIQUE_MARKER_123", None);
            assert!(
                prompt.contains("UNIQUE_MARKER_123"),
                "input missing from {} prompt",
                feature
            );
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for feature in FeatureKind::ALL {
            let a = PromptTemplates::render(feature, "same input", Some("same secondary"));
            let b = PromptTemplates::render(feature, "same input", Some("same secondary"));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_render_leaves_no_placeholders() {
        for feature in FeatureKind::ALL {
            let prompt = PromptTemplates::render(feature, "input", None);
            for placeholder in ["{transcript}", "{notes}", "{profile}", "{needs}", "{products}", "{topic}", "{context}"] {
                assert!(
                    !prompt.contains(placeholder),
                    "{} left in {} prompt",
                    placeholder,
                    feature
                );
            }
        }
    }

    #[test]
    fn test_summary_declares_prose_contract() {
        let prompt = PromptTemplates::render(FeatureKind::Summary, "notes", None);
        assert!(prompt.contains("Dear Client,"));
        assert!(!prompt.contains("JSON"));
    }

    #[test]
    fn test_recommendations_default_products() {
        let prompt = PromptTemplates::render(FeatureKind::Recommendations, "needs", None);
        assert!(prompt.contains("Standard financial products"));

        let custom = PromptTemplates::render(
            FeatureKind::Recommendations,
            "needs",
            Some("In-house index funds only"),
        );
        assert!(custom.contains("In-house index funds only"));
        assert!(!custom.contains("Standard financial products"));
    }

    #[test]
    fn test_empty_secondary_falls_back_to_default() {
        let prompt = PromptTemplates::render(FeatureKind::Recommendations, "needs", Some(""));
        assert!(prompt.contains("Standard financial products"));

        let prompt = PromptTemplates::render(FeatureKind::Presentation, "topic", Some(""));
        assert!(prompt.contains("CLIENT CONTEXT: General client meeting"));
    }

    #[test]
    fn test_presentation_default_context() {
        let prompt = PromptTemplates::render(FeatureKind::Presentation, "Retirement 101", None);
        assert!(prompt.contains("TOPIC: Retirement 101"));
        assert!(prompt.contains("CLIENT CONTEXT: General client meeting"));
    }

    #[test]
    fn test_placeholder_like_input_survives() {
        let prompt =
            PromptTemplates::render(FeatureKind::Recommendations, "needs with {products}", None);
        assert!(prompt.contains("needs with {products}"));
    }
}
