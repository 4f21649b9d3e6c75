use super::common::*;
use crate::analysis::schema::eligibility::check_eligibility;
use crate::analysis::schema::{ConfidenceTier, RichResultRule, RuleCatalog};
use serde_json::json;

#[test]
fn complete_entity_is_eligible_at_high_confidence() {
    let input = entities(&[json!({
        "@type": "Product",
        "name": "Widget",
        "image": "w.jpg",
        "offers": {"@type": "Offer", "price": "19.99"},
        "aggregateRating": {"@type": "AggregateRating", "ratingValue": 4.5},
        "review": {"@type": "Review", "reviewBody": "Great"},
        "brand": "Widgetry",
    })]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    assert_eq!(verdicts.len(), 1);
    let product = &verdicts[0];
    assert_eq!(product.key, "Product");
    assert!(product.eligible);
    assert_eq!(product.confidence, ConfidenceTier::High);
    assert!(product.missing_properties.is_empty());
    assert_eq!(
        product.reason,
        "All required and recommended properties present"
    );
}

#[test]
fn one_or_two_missing_recommended_lowers_confidence_to_medium() {
    let input = entities(&[json!({
        "@type": "WebSite",
        "url": "https://acme.test",
        "potentialAction": {"target": "https://acme.test/search?q={query}"},
    })]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    let website = &verdicts[0];
    assert!(website.eligible);
    assert_eq!(website.confidence, ConfidenceTier::Medium);
    assert_eq!(website.missing_properties, ["name"]);
    assert_eq!(
        website.reason,
        "Eligible, but add name to increase confidence"
    );
}

#[test]
fn more_than_two_missing_recommended_lowers_confidence_to_low() {
    let input = entities(&[json!({"@type": "Product", "name": "Widget", "image": "w.jpg"})]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    let product = &verdicts[0];
    assert!(product.eligible);
    assert_eq!(product.confidence, ConfidenceTier::Low);
    assert_eq!(
        product.missing_properties,
        ["offers", "aggregateRating", "review", "brand"]
    );
}

#[test]
fn missing_required_blocks_eligibility() {
    let input = entities(&[json!({
        "@type": "Article",
        "headline": "On markup",
        "datePublished": "2026-05-01",
    })]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    let article = &verdicts[0];
    assert!(!article.eligible);
    assert_eq!(article.confidence, ConfidenceTier::Low);
    assert_eq!(article.reason, "Missing required: image, author");
    // Required gaps lead, recommended gaps follow.
    assert_eq!(
        article.missing_properties,
        ["image", "author", "dateModified", "publisher"]
    );
}

#[test]
fn only_the_first_matching_entity_is_examined() {
    let input = entities(&[
        json!({"@type": "Product", "image": "w.jpg"}),
        json!({
            "@type": "Product",
            "name": "Widget Deluxe",
            "image": "wd.jpg",
            "offers": "in stock",
            "aggregateRating": "4.8",
            "review": "praised",
            "brand": "Widgetry",
        }),
    ]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    assert_eq!(verdicts.len(), 1);
    assert!(!verdicts[0].eligible);
    assert_eq!(verdicts[0].missing_properties[0], "name");
}

#[test]
fn rules_without_matching_entities_produce_no_entry() {
    let input = entities(&[json!({"@type": "Product", "name": "Widget", "image": "w.jpg"})]);

    let verdicts = check_eligibility(&input, &RuleCatalog::standard());

    assert_eq!(verdicts.len(), 1);
    assert!(verdicts.iter().all(|verdict| verdict.key == "Product"));
}

#[test]
fn alternate_catalogs_can_be_injected() {
    let catalog = RuleCatalog::custom(vec![RichResultRule {
        key: "Recipe",
        name: "Recipe",
        trigger_types: &["Recipe"],
        required: &["name"],
        recommended: &["cookTime"],
    }]);
    let input = entities(&[json!({"@type": "Recipe", "name": "Flatbread", "cookTime": "PT20M"})]);

    let verdicts = check_eligibility(&input, &catalog);

    assert_eq!(verdicts.len(), 1);
    assert_eq!(verdicts[0].key, "Recipe");
    assert_eq!(verdicts[0].confidence, ConfidenceTier::High);
}
