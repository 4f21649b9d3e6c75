use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use schema_intel::analysis::schema::{
    AnalysisConfig, AnalysisResult, SchemaAnalysisEngine, SchemaEntity,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub(crate) struct SchemaAnalyzeRequest {
    /// Opaque label attached to the report; never dereferenced here.
    pub(crate) url: String,
    /// Raw JSON-LD objects, already extracted and parsed by the caller.
    pub(crate) entities: Vec<Value>,
    #[serde(default)]
    pub(crate) config: Option<AnalysisConfig>,
    /// Optional fixed timestamp, for reproducible reports.
    #[serde(default)]
    pub(crate) fetched_at: Option<DateTime<Utc>>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/schema/analyze", post(schema_analyze_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn schema_analyze_endpoint(
    Json(payload): Json<SchemaAnalyzeRequest>,
) -> Json<AnalysisResult> {
    let SchemaAnalyzeRequest {
        url,
        entities,
        config,
        fetched_at,
    } = payload;

    let entities = SchemaEntity::from_values(&entities);
    let engine = SchemaAnalysisEngine::default();

    let result = match fetched_at {
        Some(stamp) => engine.analyze_at(&entities, &url, config.as_ref(), stamp),
        None => engine.analyze(&entities, &url, config.as_ref()),
    };

    Json(result)
}
