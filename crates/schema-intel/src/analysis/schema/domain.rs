use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Primary type reported for entities whose source markup carries no
/// recognizable type field.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// JSON-LD keyword prefix. Keys starting with this sigil (`@type`, `@id`,
/// `@context`, ...) are held out of the open property bag.
const RESERVED_SIGIL: char = '@';

/// One structured-data record extracted from a page, after the extractor has
/// parsed it out of whatever serialization the markup used.
///
/// Properties keep their declaration order; the graph builder's child
/// discovery scan depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntity {
    /// Declared types, in source order. Empty when the record had no usable
    /// type field.
    pub types: Vec<String>,
    /// Explicit `@id`, when present.
    pub id: Option<String>,
    /// Every non-reserved property, nested entities included.
    pub properties: Vec<(String, PropertyValue)>,
}

/// Closed classification of a property value, so nested-entity detection is a
/// pattern match rather than shape sniffing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// An object carrying its own `@type` field.
    Entity(Box<SchemaEntity>),
    List(Vec<PropertyValue>),
    /// Anything else, including objects without a type field.
    Scalar(Value),
}

impl SchemaEntity {
    /// Builds an entity from raw extractor output. Malformed input degrades
    /// instead of failing: a non-object becomes an empty untyped entity, a
    /// non-string `@id` is stringified, unusable type values are dropped.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self {
                types: Vec::new(),
                id: None,
                properties: Vec::new(),
            };
        };

        let types = match object.get("@type") {
            Some(Value::String(single)) => vec![single.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
            _ => Vec::new(),
        };

        let id = match object.get("@id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        let properties = object
            .iter()
            .filter(|(name, _)| !name.starts_with(RESERVED_SIGIL))
            .map(|(name, value)| (name.clone(), PropertyValue::from_value(value)))
            .collect();

        Self {
            types,
            id,
            properties,
        }
    }

    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values.iter().map(Self::from_value).collect()
    }

    /// First declared type, or [`UNKNOWN_TYPE`] when none is usable.
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_TYPE)
    }

    /// Whether any declared type appears in `trigger_types`.
    pub fn matches_any(&self, trigger_types: &[&str]) -> bool {
        self.types
            .iter()
            .any(|declared| trigger_types.contains(&declared.as_str()))
    }

    /// A property counts as present when it exists and is not a null scalar.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|(key, value)| {
            key == name && !matches!(value, PropertyValue::Scalar(Value::Null))
        })
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// The subset of `wanted` not present on this entity, in `wanted` order.
    pub fn missing_properties<'a>(&self, wanted: &[&'a str]) -> Vec<&'a str> {
        wanted
            .iter()
            .copied()
            .filter(|name| !self.has_property(name))
            .collect()
    }
}

impl PropertyValue {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) if map.contains_key("@type") => {
                PropertyValue::Entity(Box::new(SchemaEntity::from_value(value)))
            }
            Value::Array(items) => {
                PropertyValue::List(items.iter().map(Self::from_value).collect())
            }
            other => PropertyValue::Scalar(other.clone()),
        }
    }

    /// Whether this value is a nested entity, or a list holding at least one.
    pub fn carries_entities(&self) -> bool {
        match self {
            PropertyValue::Entity(_) => true,
            PropertyValue::List(items) => items
                .iter()
                .any(|item| matches!(item, PropertyValue::Entity(_))),
            PropertyValue::Scalar(_) => false,
        }
    }
}

impl Serialize for SchemaEntity {
    /// Round-trips back to the JSON-LD object shape the extractor produced.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        match self.types.len() {
            0 => {}
            1 => map.serialize_entry("@type", &self.types[0])?,
            _ => map.serialize_entry("@type", &self.types)?,
        }
        if let Some(id) = &self.id {
            map.serialize_entry("@id", id)?;
        }
        for (name, value) in &self.properties {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Caller-supplied context describing what the analyzed site is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub business_type: BusinessType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<BusinessIntent>,
}

/// Business model of the analyzed site. Only `saas` currently influences
/// scoring; the remaining values are accepted and carried but inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessType {
    Saas,
    LocalBusiness,
    Publisher,
    Marketplace,
    Ecommerce,
    Custom,
}

/// Declared goal for the markup. Carried for callers; read by nothing in the
/// engine today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BusinessIntent {
    LeadGeneration,
    AppInstalls,
    ContentDiscovery,
    Transactions,
}
