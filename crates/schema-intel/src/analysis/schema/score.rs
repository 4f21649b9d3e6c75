use super::domain::{AnalysisConfig, BusinessType, SchemaEntity};
use super::views::{
    ConfidenceTier, EntityNode, IssueSeverity, RichResultEligibility, ScoreBreakdown,
};

/// Sub-score weights in percent. They must sum to exactly 100.
pub(crate) const ENTITY_CLARITY_WEIGHT: u32 = 25;
pub(crate) const RELATIONSHIP_DEPTH_WEIGHT: u32 = 20;
pub(crate) const RICH_RESULT_ALIGNMENT_WEIGHT: u32 = 25;
pub(crate) const BUSINESS_INTENT_WEIGHT: u32 = 15;
pub(crate) const CONTENT_CONSISTENCY_WEIGHT: u32 = 15;

/// Penalty per missing required property when scoring entity clarity.
const CLARITY_PENALTY_PER_ERROR: i64 = 15;

/// Types that satisfy a declared `saas` business context.
const SAAS_SIGNAL_TYPES: &[&str] = &["SoftwareApplication", "WebApplication"];

pub(crate) fn score_breakdown(
    entities: &[SchemaEntity],
    nodes: &[EntityNode],
    eligibility: &[RichResultEligibility],
    config: Option<&AnalysisConfig>,
) -> ScoreBreakdown {
    ScoreBreakdown {
        entity_clarity: entity_clarity(nodes),
        relationship_depth: relationship_depth(entities, nodes),
        rich_result_alignment: rich_result_alignment(eligibility),
        business_intent_match: business_intent_match(entities, config),
        content_consistency: content_consistency(entities),
    }
}

pub(crate) fn opportunity_score(breakdown: &ScoreBreakdown) -> u8 {
    let weighted = u32::from(breakdown.entity_clarity) * ENTITY_CLARITY_WEIGHT
        + u32::from(breakdown.relationship_depth) * RELATIONSHIP_DEPTH_WEIGHT
        + u32::from(breakdown.rich_result_alignment) * RICH_RESULT_ALIGNMENT_WEIGHT
        + u32::from(breakdown.business_intent_match) * BUSINESS_INTENT_WEIGHT
        + u32::from(breakdown.content_consistency) * CONTENT_CONSISTENCY_WEIGHT;

    (f64::from(weighted) / 100.0).round() as u8
}

/// How well-defined the entities are: full marks minus a fixed penalty per
/// error-severity issue anywhere in the graph. Cross-entity issues do not
/// count against clarity.
fn entity_clarity(nodes: &[EntityNode]) -> u8 {
    let errors = count_errors(nodes);
    clamp_score(100 - CLARITY_PENALTY_PER_ERROR * errors)
}

fn count_errors(nodes: &[EntityNode]) -> i64 {
    nodes
        .iter()
        .map(|node| {
            let own = node
                .issues
                .iter()
                .filter(|issue| issue.severity == IssueSeverity::Error)
                .count() as i64;
            own + count_errors(&node.children)
        })
        .sum()
}

/// Base 50, plus 25 when any entity nests another, plus 25 when any entity
/// carries an explicit identifier.
fn relationship_depth(entities: &[SchemaEntity], nodes: &[EntityNode]) -> u8 {
    let mut score: i64 = 50;
    if nodes.iter().any(|node| !node.children.is_empty()) {
        score += 25;
    }
    if entities.iter().any(|entity| entity.id.is_some()) {
        score += 25;
    }
    clamp_score(score)
}

/// Share of catalog matches that are eligible (60%) and at high confidence
/// (40%), over the verdicts that exist. No matches at all scores zero.
fn rich_result_alignment(eligibility: &[RichResultEligibility]) -> u8 {
    if eligibility.is_empty() {
        return 0;
    }

    let total = eligibility.len() as f64;
    let eligible = eligibility.iter().filter(|entry| entry.eligible).count() as f64;
    let high_confidence = eligibility
        .iter()
        .filter(|entry| entry.confidence == ConfidenceTier::High)
        .count() as f64;

    let raw = (eligible / total) * 60.0 + (high_confidence / total) * 40.0;
    clamp_score(raw.round() as i64)
}

/// Default 70. A declared `saas` context swings the score on whether an
/// application entity is present; other declared business types do not
/// currently move it.
fn business_intent_match(entities: &[SchemaEntity], config: Option<&AnalysisConfig>) -> u8 {
    match config {
        Some(config) if config.business_type == BusinessType::Saas => {
            let has_application = entities
                .iter()
                .any(|entity| entity.matches_any(SAAS_SIGNAL_TYPES));
            if has_application {
                100
            } else {
                30
            }
        }
        _ => 70,
    }
}

/// Base 60, plus 20 each for a `name` and a `description` appearing anywhere
/// in the input.
fn content_consistency(entities: &[SchemaEntity]) -> u8 {
    let mut score: i64 = 60;
    if entities.iter().any(|entity| entity.has_property("name")) {
        score += 20;
    }
    if entities
        .iter()
        .any(|entity| entity.has_property("description"))
    {
        score += 20;
    }
    clamp_score(score)
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}
