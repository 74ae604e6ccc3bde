/// Domain models for the advisor insights service
///
/// These models are transport-agnostic and represent core business entities.
use serde::{Deserialize, Serialize};

/// The analysis features offered by the advisor dashboard
///
/// Closed enumeration; each variant has exactly one prompt template in
/// [`crate::domain::PromptTemplates`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Meeting,
    Summary,
    Scenario,
    Recommendations,
    Presentation,
    Feedback,
}

impl FeatureKind {
    /// All features, in dashboard order.
    pub const ALL: [FeatureKind; 6] = [
        FeatureKind::Meeting,
        FeatureKind::Summary,
        FeatureKind::Scenario,
        FeatureKind::Recommendations,
        FeatureKind::Presentation,
        FeatureKind::Feedback,
    ];

    /// Resolve a wire-format feature identifier.
    ///
    /// Lookup is exact-match; no trimming or case folding.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "meeting" => Some(FeatureKind::Meeting),
            "summary" => Some(FeatureKind::Summary),
            "scenario" => Some(FeatureKind::Scenario),
            "recommendations" => Some(FeatureKind::Recommendations),
            "presentation" => Some(FeatureKind::Presentation),
            "feedback" => Some(FeatureKind::Feedback),
            _ => None,
        }
    }

    /// Whether the feature's prompt asks the model for JSON.
    ///
    /// `summary` asks for a letter-style paragraph instead; the normalizer
    /// treats every response the same way regardless, so this is advisory.
    pub fn expects_json(&self) -> bool {
        !matches!(self, FeatureKind::Summary)
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureKind::Meeting => write!(f, "meeting"),
            FeatureKind::Summary => write!(f, "summary"),
            FeatureKind::Scenario => write!(f, "scenario"),
            FeatureKind::Recommendations => write!(f, "recommendations"),
            FeatureKind::Presentation => write!(f, "presentation"),
            FeatureKind::Feedback => write!(f, "feedback"),
        }
    }
}

/// Outcome of one analysis call
///
/// Callers distinguish structured from free-text results purely by the JSON
/// type of the serialized value; there is no separate discriminator on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    /// The model returned syntactically valid JSON (object, array, or scalar).
    Structured(serde_json::Value),
    /// The model returned free text; kept exactly as received.
    Text(String),
}
