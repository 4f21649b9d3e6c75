use super::catalog::RuleCatalog;
use super::domain::{SchemaEntity, UNKNOWN_TYPE};
use super::views::{Issue, IssueKind, IssueSeverity};
use std::collections::BTreeMap;

/// Application types expected to link back to a publisher Organization.
const SOFTWARE_APP_TYPES: &[&str] = &[
    "SoftwareApplication",
    "WebApplication",
    "MobileApplication",
];

/// Evaluates one entity against every catalog rule whose trigger types it
/// matches. An entity with several types can match several rules and is
/// evaluated independently against each.
pub(crate) fn entity_issues(entity: &SchemaEntity, catalog: &RuleCatalog) -> Vec<Issue> {
    let mut issues = Vec::new();

    for rule in catalog.rules() {
        if !entity.matches_any(rule.trigger_types) {
            continue;
        }

        for property in entity.missing_properties(rule.required) {
            issues.push(Issue {
                kind: IssueKind::Missing,
                severity: IssueSeverity::Error,
                property: Some(property.to_string()),
                message: format!("Missing required property: {property}"),
                recommendation: Some(format!(
                    "Add the \"{property}\" property to enable {} rich results",
                    rule.name
                )),
            });
        }

        for property in entity.missing_properties(rule.recommended) {
            issues.push(Issue {
                kind: IssueKind::Weak,
                severity: IssueSeverity::Warning,
                property: Some(property.to_string()),
                message: format!("Missing recommended property: {property}"),
                recommendation: Some(format!(
                    "Adding \"{property}\" increases eligibility confidence for {}",
                    rule.name
                )),
            });
        }
    }

    issues
}

/// Structural checks over the flat top-level list: duplicate primary types,
/// and application entities with no publisher Organization on the page.
pub(crate) fn cross_entity_issues(entities: &[SchemaEntity]) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut type_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entity in entities {
        let primary = entity.primary_type();
        // Untyped entities degrade silently; they never manufacture conflicts.
        if primary != UNKNOWN_TYPE {
            *type_counts.entry(primary).or_default() += 1;
        }
    }

    for (entity_type, count) in type_counts {
        if count > 1 {
            issues.push(Issue {
                kind: IssueKind::Conflict,
                severity: IssueSeverity::Warning,
                property: None,
                message: format!("Multiple {entity_type} entities detected ({count})"),
                recommendation: Some(
                    "Consider consolidating into a single entity or using @id references"
                        .to_string(),
                ),
            });
        }
    }

    let has_software_app = entities
        .iter()
        .any(|entity| entity.matches_any(SOFTWARE_APP_TYPES));
    let has_organization = entities
        .iter()
        .any(|entity| entity.primary_type() == "Organization");

    if has_software_app && !has_organization {
        issues.push(Issue {
            kind: IssueKind::Weak,
            severity: IssueSeverity::Info,
            property: None,
            message: "SoftwareApplication without linked Organization".to_string(),
            recommendation: Some(
                "Add an Organization entity with publisher relationship".to_string(),
            ),
        });
    }

    issues
}
