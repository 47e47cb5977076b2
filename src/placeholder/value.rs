// ABOUTME: Closed tagged variant for placeholder input values
// ABOUTME: Converts scalars and nested JSON/YAML structures into a uniform shape

use indexmap::IndexMap;

/// A placeholder input value: either a scalar rendered as text, or a keyed
/// collection that the store flattens into dot-path keys.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderValue {
    Scalar(String),
    Nested(IndexMap<String, PlaceholderValue>),
}

impl PlaceholderValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn nested() -> Self {
        Self::Nested(IndexMap::new())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Insert a child entry, turning a scalar into an empty collection first.
    pub fn insert(&mut self, key: impl Into<String>, value: PlaceholderValue) {
        if let Self::Scalar(_) = self {
            *self = Self::nested();
        }
        if let Self::Nested(map) = self {
            map.insert(key.into(), value);
        }
    }
}

impl From<&str> for PlaceholderValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for PlaceholderValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<serde_json::Value> for PlaceholderValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Scalar(String::new()),
            serde_json::Value::Bool(b) => Self::Scalar(b.to_string()),
            serde_json::Value::Number(n) => Self::Scalar(n.to_string()),
            serde_json::Value::String(s) => Self::Scalar(s),
            serde_json::Value::Array(items) => Self::Nested(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Self::from(item)))
                    .collect(),
            ),
            serde_json::Value::Object(map) => Self::Nested(
                map.into_iter()
                    .map(|(key, item)| (key, Self::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_yaml::Value> for PlaceholderValue {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Self::Scalar(String::new()),
            serde_yaml::Value::Bool(b) => Self::Scalar(b.to_string()),
            serde_yaml::Value::Number(n) => Self::Scalar(n.to_string()),
            serde_yaml::Value::String(s) => Self::Scalar(s),
            serde_yaml::Value::Sequence(items) => Self::Nested(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), Self::from(item)))
                    .collect(),
            ),
            serde_yaml::Value::Mapping(map) => Self::Nested(
                map.into_iter()
                    .map(|(key, item)| (yaml_key_to_string(&key), Self::from(item)))
                    .collect(),
            ),
            serde_yaml::Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
