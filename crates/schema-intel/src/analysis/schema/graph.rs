use super::catalog::RuleCatalog;
use super::domain::{PropertyValue, SchemaEntity};
use super::issues;
use super::views::{ConfidenceTier, EntityNode, Issue, IssueSeverity};
use std::collections::BTreeMap;

/// Source nesting is tree-shaped by construction (entities embedded by value),
/// but the input contract is not enforced upstream; entities nested deeper
/// than this produce no nodes.
pub(crate) const MAX_NESTING_DEPTH: usize = 32;

/// Turns the flat entity list into a tree, one node per top-level entity in
/// input order, with nested entities attached as children.
pub(crate) fn build_entity_graph(
    entities: &[SchemaEntity],
    catalog: &RuleCatalog,
) -> Vec<EntityNode> {
    entities
        .iter()
        .enumerate()
        .map(|(index, entity)| {
            let issues = issues::entity_issues(entity, catalog);
            EntityNode {
                id: entity
                    .id
                    .clone()
                    .unwrap_or_else(|| format!("entity-{index}")),
                entity_type: entity.primary_type().to_string(),
                properties: displayable_properties(entity),
                children: child_nodes(entity, catalog, 1),
                confidence: top_level_confidence(&issues),
                issues,
            }
        })
        .collect()
}

/// Properties that stay on the node itself: everything that neither is a
/// nested entity nor is a list carrying one. A property feeds the graph or
/// the property map, never both.
fn displayable_properties(entity: &SchemaEntity) -> BTreeMap<String, PropertyValue> {
    entity
        .properties
        .iter()
        .filter(|(_, value)| !value.carries_entities())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Scans properties in declaration order; a single nested entity yields one
/// child, a list yields one child per entity element in list order.
fn child_nodes(entity: &SchemaEntity, catalog: &RuleCatalog, depth: usize) -> Vec<EntityNode> {
    if depth > MAX_NESTING_DEPTH {
        return Vec::new();
    }

    let mut children = Vec::new();
    for (name, value) in &entity.properties {
        match value {
            PropertyValue::Entity(nested) => {
                children.push(nested_node(nested, format!("nested-{name}"), catalog, depth));
            }
            PropertyValue::List(items) => {
                for item in items {
                    if let PropertyValue::Entity(nested) = item {
                        children.push(nested_node(
                            nested,
                            format!("nested-array-{name}"),
                            catalog,
                            depth,
                        ));
                    }
                }
            }
            PropertyValue::Scalar(_) => {}
        }
    }
    children
}

fn nested_node(
    entity: &SchemaEntity,
    fallback_id: String,
    catalog: &RuleCatalog,
    depth: usize,
) -> EntityNode {
    EntityNode {
        id: entity.id.clone().unwrap_or(fallback_id),
        entity_type: entity.primary_type().to_string(),
        properties: displayable_properties(entity),
        children: child_nodes(entity, catalog, depth + 1),
        issues: issues::entity_issues(entity, catalog),
        // Nested entities are not independently re-scored.
        confidence: ConfidenceTier::Medium,
    }
}

fn top_level_confidence(issues: &[Issue]) -> ConfidenceTier {
    let errors = issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .count();
    let warnings = issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Warning)
        .count();

    if errors > 0 || warnings > 2 {
        ConfidenceTier::Low
    } else if warnings > 0 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::High
    }
}
