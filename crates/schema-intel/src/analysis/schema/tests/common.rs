use serde_json::Value;

use crate::analysis::schema::{
    AnalysisConfig, BusinessType, RuleCatalog, SchemaAnalysisEngine, SchemaEntity,
};

pub(super) fn engine() -> SchemaAnalysisEngine {
    SchemaAnalysisEngine::new(RuleCatalog::standard())
}

pub(super) fn entity(value: Value) -> SchemaEntity {
    SchemaEntity::from_value(&value)
}

pub(super) fn entities(values: &[Value]) -> Vec<SchemaEntity> {
    SchemaEntity::from_values(values)
}

pub(super) fn saas_config() -> AnalysisConfig {
    AnalysisConfig {
        business_type: BusinessType::Saas,
        intent: None,
    }
}

pub(super) fn config_for(business_type: BusinessType) -> AnalysisConfig {
    AnalysisConfig {
        business_type,
        intent: None,
    }
}
