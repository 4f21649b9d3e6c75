use metrics_exporter_prometheus::PrometheusHandle;
use schema_intel::analysis::schema::{BusinessType, SchemaEntity};
use schema_intel::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Maps a free-form CLI value onto the business-type enumeration.
/// Unrecognized values fall back to `custom`, which the engine accepts and
/// treats as neutral.
pub(crate) fn parse_business_type(raw: &str) -> BusinessType {
    match raw.trim().to_ascii_lowercase().as_str() {
        "saas" => BusinessType::Saas,
        "local-business" | "local_business" => BusinessType::LocalBusiness,
        "publisher" => BusinessType::Publisher,
        "marketplace" => BusinessType::Marketplace,
        "ecommerce" => BusinessType::Ecommerce,
        _ => BusinessType::Custom,
    }
}

/// Loads a JSON array of extracted entities from disk, leniently: records the
/// extractor could not type still come back as `Unknown` entities.
pub(crate) fn load_entities(path: &Path) -> Result<Vec<SchemaEntity>, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let values: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
    Ok(SchemaEntity::from_values(&values))
}
