use super::domain::PropertyValue;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Qualitative strength tier used for both entity quality and rich-result
/// eligibility confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Numeric strength, for comparisons: low 0, medium 1, high 2.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A required property is absent. Always severity `error`.
    Missing,
    /// A recommended property or relationship is absent.
    Weak,
    /// The same primary type appears on more than one top-level entity.
    Conflict,
    /// Reserved for the page-framework pipeline; never emitted here.
    Framework,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl IssueSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    /// Set when the issue names a concrete property gap; conflict and
    /// structural issues leave it empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// One entity in the derived graph: its own scalar-ish properties plus the
/// nested entities discovered inside it, in property-scan order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityNode {
    pub id: String,
    pub entity_type: String,
    pub properties: BTreeMap<String, PropertyValue>,
    pub children: Vec<EntityNode>,
    pub issues: Vec<Issue>,
    pub confidence: ConfidenceTier,
}

/// Verdict for one rule from the catalog. Rules with no matching entity in
/// the input produce no entry at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichResultEligibility {
    pub key: &'static str,
    pub name: &'static str,
    pub eligible: bool,
    pub confidence: ConfidenceTier,
    /// Missing required properties first, then missing recommended.
    pub missing_properties: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub entity_clarity: u8,
    pub relationship_depth: u8,
    pub rich_result_alignment: u8,
    pub business_intent_match: u8,
    pub content_consistency: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub impact: &'static str,
}

/// Complete diagnostic report for one page snapshot. Built once per analysis
/// call and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
    pub entities: Vec<EntityNode>,
    pub eligible_rich_results: Vec<RichResultEligibility>,
    pub opportunity_score: u8,
    pub score_breakdown: ScoreBreakdown,
    /// Every node's issues depth-first, then the cross-entity issues.
    pub issues: Vec<Issue>,
    pub recommendations: Vec<Recommendation>,
}
