use super::domain::SchemaEntity;
use super::views::{Issue, IssueSeverity, Recommendation, RecommendationPriority};

/// At most this many recommendations per priority band.
const BAND_LIMIT: usize = 3;

/// Reduces the combined issue list into a short, priority-ordered action
/// list. The same property may surface in more than one band when different
/// entities gap on it; no cross-band deduplication is attempted.
pub(crate) fn generate_recommendations(
    entities: &[SchemaEntity],
    issues: &[Issue],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let named_issues = |severity: IssueSeverity| {
        issues
            .iter()
            .filter(move |issue| issue.severity == severity && issue.property.is_some())
            .take(BAND_LIMIT)
    };

    for issue in named_issues(IssueSeverity::Error) {
        let property = issue.property.as_deref().unwrap_or_default();
        recommendations.push(Recommendation {
            priority: RecommendationPriority::High,
            title: format!("Add missing \"{property}\""),
            description: issue.message.clone(),
            impact: "Required for rich result eligibility",
        });
    }

    for issue in named_issues(IssueSeverity::Warning) {
        let property = issue.property.as_deref().unwrap_or_default();
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Medium,
            title: format!("Add \"{property}\" property"),
            description: issue
                .recommendation
                .clone()
                .unwrap_or_else(|| issue.message.clone()),
            impact: "Increases confidence for rich results",
        });
    }

    if !entities.iter().any(|entity| entity.has_property("image")) {
        recommendations.push(Recommendation {
            priority: RecommendationPriority::Low,
            title: "Add image property".to_string(),
            description: "Images significantly increase rich result chances".to_string(),
            impact: "Visual enhancement in search results",
        });
    }

    recommendations
}
