use indexmap::IndexMap;
use serde::Serialize;

/// Variable holding the bearer token injected as `Authorization`
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";

/// Variable holding the API endpoint base
pub const ENDPOINT_VAR: &str = "endpoint";

/// Flat name -> value mapping used to resolve `{{placeholders}}`.
///
/// Insertion order is kept so the literal embedded in generated files
/// follows the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableMapping {
    values: IndexMap<String, String>,
}

impl VariableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object, turning non-string values into text
    pub fn from_json_object(object: IndexMap<String, serde_json::Value>) -> Self {
        object
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name, value)
            })
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Bearer token, if one is set and non-empty
    pub fn access_token(&self) -> Option<&str> {
        self.get(ACCESS_TOKEN_VAR).filter(|token| !token.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariableMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
