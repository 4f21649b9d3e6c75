use crate::infra::{load_entities, parse_business_type};
use clap::Args;
use schema_intel::analysis::schema::{
    AnalysisConfig, AnalysisResult, BusinessType, EntityNode, SchemaAnalysisEngine, SchemaEntity,
};
use schema_intel::error::AppError;
use serde_json::{json, Value};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Path to a JSON array of extracted schema.org entities
    #[arg(long)]
    input: PathBuf,
    /// URL label to attach to the report
    #[arg(long)]
    url: String,
    /// Business type context, e.g. saas (unknown values are treated as custom)
    #[arg(long)]
    business_type: Option<String>,
    /// Emit the full analysis result as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the full analysis result as JSON instead of the console report
    #[arg(long)]
    json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        input,
        url,
        business_type,
        json,
    } = args;

    let entities = load_entities(&input)?;
    let config = business_type.as_deref().map(|raw| AnalysisConfig {
        business_type: parse_business_type(raw),
        intent: None,
    });

    let engine = SchemaAnalysisEngine::default();
    let result = engine.analyze(&entities, &url, config.as_ref());

    emit(&result, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let entities = SchemaEntity::from_values(&sample_page_entities());
    let config = AnalysisConfig {
        business_type: BusinessType::Saas,
        intent: None,
    };

    let engine = SchemaAnalysisEngine::default();
    let result = engine.analyze(&entities, "https://notely.example", Some(&config));

    emit(&result, args.json)
}

fn emit(result: &AnalysisResult, as_json: bool) -> Result<(), AppError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        render_report(result);
    }
    Ok(())
}

/// Markup a typical SaaS landing page would carry: site, publisher, the
/// application itself, and an FAQ block.
fn sample_page_entities() -> Vec<Value> {
    vec![
        json!({
            "@type": "WebSite",
            "url": "https://notely.example",
            "potentialAction": {
                "@type": "SearchAction",
                "target": "https://notely.example/search?q={query}",
            },
        }),
        json!({
            "@type": "Organization",
            "@id": "#publisher",
            "name": "Notely Inc",
            "url": "https://notely.example",
            "logo": "https://notely.example/logo.png",
        }),
        json!({
            "@type": "SoftwareApplication",
            "name": "Notely",
            "description": "Shared notes for distributed teams",
            "applicationCategory": "BusinessApplication",
            "offers": {"@type": "Offer", "price": "0", "priceCurrency": "USD"},
        }),
        json!({
            "@type": "FAQPage",
            "mainEntity": [
                {
                    "@type": "Question",
                    "name": "Is there a free plan?",
                    "acceptedAnswer": {"@type": "Answer", "text": "Yes, up to three users."},
                },
                {
                    "@type": "Question",
                    "name": "Can I export my notes?",
                    "acceptedAnswer": {"@type": "Answer", "text": "Markdown and PDF export are built in."},
                },
            ],
        }),
    ]
}

fn render_report(result: &AnalysisResult) {
    println!("Schema analysis for {}", result.url);
    println!("Fetched at: {}", result.fetched_at.to_rfc3339());
    println!("Opportunity score: {}/100", result.opportunity_score);

    println!("\nScore breakdown");
    let breakdown = &result.score_breakdown;
    println!("- Entity clarity:        {}", breakdown.entity_clarity);
    println!("- Relationship depth:    {}", breakdown.relationship_depth);
    println!("- Rich result alignment: {}", breakdown.rich_result_alignment);
    println!("- Business intent match: {}", breakdown.business_intent_match);
    println!("- Content consistency:   {}", breakdown.content_consistency);

    println!("\nEntities");
    for node in &result.entities {
        render_entity(node, 0);
    }

    if result.eligible_rich_results.is_empty() {
        println!("\nRich results: no supported feature matched");
    } else {
        println!("\nRich results");
        for verdict in &result.eligible_rich_results {
            let status = if verdict.eligible {
                "eligible"
            } else {
                "not eligible"
            };
            println!(
                "- {}: {} ({} confidence) - {}",
                verdict.name,
                status,
                verdict.confidence.label(),
                verdict.reason
            );
        }
    }

    if result.issues.is_empty() {
        println!("\nIssues: none");
    } else {
        println!("\nIssues");
        for issue in &result.issues {
            println!("- [{}] {}", issue.severity.label(), issue.message);
        }
    }

    if result.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &result.recommendations {
            println!(
                "- [{}] {} ({})",
                recommendation.priority.label(),
                recommendation.title,
                recommendation.impact
            );
        }
    }
}

fn render_entity(node: &EntityNode, depth: usize) {
    let indent = "  ".repeat(depth);
    println!(
        "{}- {} ({}, {} confidence, {} issue(s))",
        indent,
        node.entity_type,
        node.id,
        node.confidence.label(),
        node.issues.len()
    );
    for child in &node.children {
        render_entity(child, depth + 1);
    }
}
