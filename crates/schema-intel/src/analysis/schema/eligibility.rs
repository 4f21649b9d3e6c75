use super::catalog::RuleCatalog;
use super::domain::SchemaEntity;
use super::views::{ConfidenceTier, RichResultEligibility};

/// Produces one verdict per catalog rule with at least one matching entity.
///
/// Only the first matching entity in input order is examined per rule; a more
/// complete entity later in the list does not improve the verdict. That keeps
/// the check cheap and predictable rather than an aggregate-best search.
pub(crate) fn check_eligibility(
    entities: &[SchemaEntity],
    catalog: &RuleCatalog,
) -> Vec<RichResultEligibility> {
    catalog
        .rules()
        .iter()
        .filter_map(|rule| {
            let entity = entities
                .iter()
                .find(|entity| entity.matches_any(rule.trigger_types))?;

            let missing_required = entity.missing_properties(rule.required);
            let missing_recommended = entity.missing_properties(rule.recommended);

            let (eligible, confidence) =
                match (missing_required.len(), missing_recommended.len()) {
                    (0, 0) => (true, ConfidenceTier::High),
                    (0, 1..=2) => (true, ConfidenceTier::Medium),
                    (0, _) => (true, ConfidenceTier::Low),
                    _ => (false, ConfidenceTier::Low),
                };

            let reason = if !eligible {
                format!("Missing required: {}", missing_required.join(", "))
            } else if missing_recommended.is_empty() {
                "All required and recommended properties present".to_string()
            } else {
                format!(
                    "Eligible, but add {} to increase confidence",
                    missing_recommended.join(", ")
                )
            };

            Some(RichResultEligibility {
                key: rule.key,
                name: rule.name,
                eligible,
                confidence,
                missing_properties: missing_required
                    .into_iter()
                    .chain(missing_recommended)
                    .map(str::to_owned)
                    .collect(),
                reason,
            })
        })
        .collect()
}
