use chrono::{TimeZone, Utc};
use schema_intel::analysis::schema::{
    AnalysisConfig, BusinessType, ConfidenceTier, IssueKind, IssueSeverity, RuleCatalog,
    SchemaAnalysisEngine, SchemaEntity,
};
use serde_json::{json, Map, Value};

fn engine() -> SchemaAnalysisEngine {
    SchemaAnalysisEngine::new(RuleCatalog::standard())
}

fn entities(values: &[Value]) -> Vec<SchemaEntity> {
    SchemaEntity::from_values(values)
}

fn saas_config() -> AnalysisConfig {
    AnalysisConfig {
        business_type: BusinessType::Saas,
        intent: None,
    }
}

#[test]
fn sparse_product_is_eligible_at_low_confidence() {
    let input = entities(&[json!({
        "@type": "Product",
        "name": "Widget",
        "image": "x.jpg",
    })]);

    let result = engine().analyze(&input, "https://shop.test/widget", None);

    assert_eq!(result.eligible_rich_results.len(), 1);
    let product = &result.eligible_rich_results[0];
    assert_eq!(product.key, "Product");
    assert!(product.eligible);
    assert_eq!(product.confidence, ConfidenceTier::Low);
    assert_eq!(
        product.missing_properties,
        ["offers", "aggregateRating", "review", "brand"]
    );
}

#[test]
fn article_with_required_gaps_is_ineligible() {
    let input = entities(&[json!({
        "@type": "Article",
        "headline": "Structured data, structured results",
        "datePublished": "2026-04-12",
        "dateModified": "2026-04-13",
        "publisher": "Example Press",
    })]);

    let result = engine().analyze(&input, "https://press.test/post", None);

    let errors: Vec<_> = result
        .issues
        .iter()
        .filter(|issue| issue.severity == IssueSeverity::Error)
        .collect();
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|issue| issue.kind == IssueKind::Missing));
    assert_eq!(errors[0].property.as_deref(), Some("image"));
    assert_eq!(errors[1].property.as_deref(), Some("author"));

    let article = &result.eligible_rich_results[0];
    assert!(!article.eligible);
    assert_eq!(article.confidence, ConfidenceTier::Low);
    assert!(article.reason.contains("image"));
    assert!(article.reason.contains("author"));
}

#[test]
fn duplicate_organizations_raise_a_single_conflict() {
    let input = entities(&[
        json!({"@type": "Organization", "name": "Acme"}),
        json!({"@type": "Organization", "name": "Acme Holdings"}),
    ]);

    let result = engine().analyze(&input, "https://acme.test", None);

    let conflicts: Vec<_> = result
        .issues
        .iter()
        .filter(|issue| issue.kind == IssueKind::Conflict)
        .collect();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, IssueSeverity::Warning);
    assert!(conflicts[0].message.contains("(2)"));
}

#[test]
fn software_app_without_publisher_is_flagged_and_matches_saas_intent() {
    let input = entities(&[json!({"@type": "SoftwareApplication", "name": "Notely"})]);

    let result = engine().analyze(&input, "https://notely.test", Some(&saas_config()));

    let flag = result
        .issues
        .iter()
        .find(|issue| issue.severity == IssueSeverity::Info)
        .expect("publisher gap flagged");
    assert_eq!(flag.kind, IssueKind::Weak);
    assert!(flag.message.contains("Organization"));

    assert_eq!(result.score_breakdown.business_intent_match, 100);
}

#[test]
fn empty_input_produces_a_well_formed_baseline_report() {
    let result = engine().analyze(&[], "https://blank.test", None);

    assert!(result.entities.is_empty());
    assert!(result.issues.is_empty());
    assert!(result.eligible_rich_results.is_empty());
    assert_eq!(result.score_breakdown.entity_clarity, 100);
    assert_eq!(result.score_breakdown.relationship_depth, 50);
    assert_eq!(result.score_breakdown.rich_result_alignment, 0);
    assert_eq!(result.score_breakdown.business_intent_match, 70);
    assert_eq!(result.score_breakdown.content_consistency, 60);
    assert_eq!(result.opportunity_score, 55);
}

#[test]
fn repeated_analysis_over_fixed_input_is_byte_identical() {
    let input = entities(&[
        json!({
            "@type": "Product",
            "@id": "#widget",
            "name": "Widget",
            "image": "w.jpg",
            "offers": {"@type": "Offer", "price": "19.99"},
        }),
        json!({"@type": "Organization", "name": "Widgetry"}),
    ]);
    let stamp = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();

    let first = engine().analyze_at(&input, "https://shop.test", Some(&saas_config()), stamp);
    let second = engine().analyze_at(&input, "https://shop.test", Some(&saas_config()), stamp);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes"),
    );
}

#[test]
fn adding_a_required_property_never_worsens_the_verdict() {
    let before = engine().analyze(
        &entities(&[json!({
            "@type": "Product",
            "image": "w.jpg",
            "offers": "in stock",
            "aggregateRating": "4.8",
            "review": "praised",
            "brand": "Widgetry",
        })]),
        "https://shop.test",
        None,
    );
    let after = engine().analyze(
        &entities(&[json!({
            "@type": "Product",
            "name": "Widget",
            "image": "w.jpg",
            "offers": "in stock",
            "aggregateRating": "4.8",
            "review": "praised",
            "brand": "Widgetry",
        })]),
        "https://shop.test",
        None,
    );

    let verdict_before = &before.eligible_rich_results[0];
    let verdict_after = &after.eligible_rich_results[0];

    assert!(!verdict_before.eligible);
    assert!(verdict_after.eligible);
    assert!(verdict_after.confidence.rank() >= verdict_before.confidence.rank());
    assert_eq!(verdict_after.confidence, ConfidenceTier::High);
}

#[test]
fn reanalyzing_the_flat_graph_reproduces_verdicts_for_flat_entities() {
    let input = entities(&[
        json!({
            "@type": "Product",
            "name": "Widget",
            "image": "w.jpg",
            "offers": "in stock",
            "aggregateRating": "4.8",
            "review": "praised",
            "brand": "Widgetry",
        }),
        json!({"@type": "Organization", "name": "Widgetry"}),
    ]);

    let first = engine().analyze(&input, "https://shop.test", None);

    // Rebuild input entities from the graph's own serialized properties.
    let rebuilt: Vec<Value> = first
        .entities
        .iter()
        .map(|node| {
            let mut object = Map::new();
            object.insert("@type".to_string(), json!(node.entity_type));
            let properties =
                serde_json::to_value(&node.properties).expect("properties serialize");
            if let Value::Object(map) = properties {
                object.extend(map);
            }
            Value::Object(object)
        })
        .collect();

    let second = engine().analyze(&entities(&rebuilt), "https://shop.test", None);

    assert_eq!(first.eligible_rich_results, second.eligible_rich_results);
}

#[test]
fn weighted_opportunity_score_matches_the_fixed_weights() {
    // Sub-scores for a sparse product page: 100, 50, 60, 70, 80.
    let result = engine().analyze(
        &entities(&[json!({"@type": "Product", "name": "Widget", "image": "x.jpg"})]),
        "https://shop.test",
        None,
    );

    assert_eq!(result.score_breakdown.entity_clarity, 100);
    assert_eq!(result.score_breakdown.relationship_depth, 50);
    assert_eq!(result.score_breakdown.rich_result_alignment, 60);
    assert_eq!(result.score_breakdown.business_intent_match, 70);
    assert_eq!(result.score_breakdown.content_consistency, 80);
    // 25 + 10 + 15 + 10.5 + 12, rounded.
    assert_eq!(result.opportunity_score, 73);
}
