//! Request specification produced by the request builder

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::impl_wire_name_conversions;

/// HTTP method of a [`RequestSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl_wire_name_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Patch => "PATCH",
    Delete => "DELETE",
});

impl HttpMethod {
    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::Get | Self::Delete)
    }
}

/// A query parameter value: a scalar or a list serialized as repeated keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Ordered query parameters.
///
/// Insertion order is kept so that identical builder inputs always produce
/// the same serialized query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(Vec<(String, QueryValue)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Flatten into `(key, value)` pairs, repeating the key for each list
    /// element (`exclude_types[]=a&exclude_types[]=b`).
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            match value {
                QueryValue::Integer(number) => pairs.push((key.clone(), number.to_string())),
                QueryValue::Text(text) => pairs.push((key.clone(), text.clone())),
                QueryValue::List(items) => {
                    pairs.extend(items.iter().map(|item| (key.clone(), item.clone())));
                }
            }
        }
        pairs
    }
}

/// Everything needed to issue one HTTP call, relative to an instance URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: HttpMethod,
    /// Path appended to the instance base URL, always starting with `/`
    pub path: String,
    pub query: Query,
    pub body: Map<String, Value>,
}

impl RequestSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Query::new(), body: Map::new() }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = body;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_values_expand_to_repeated_keys() {
        let mut query = Query::new();
        query.insert("limit", 40u32);
        query.insert("exclude_types[]", vec!["follow".to_string(), "poll".to_string()]);

        assert_eq!(
            query.to_pairs(),
            vec![
                ("limit".to_string(), "40".to_string()),
                ("exclude_types[]".to_string(), "follow".to_string()),
                ("exclude_types[]".to_string(), "poll".to_string()),
            ]
        );
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut query = Query::new();
        query.insert("limit", 10u32);
        query.insert("max_id", "99");
        query.insert("limit", 20u32);

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("limit"), Some(&QueryValue::Integer(20)));
        assert_eq!(query.iter().next().map(|(key, _)| key), Some("limit"));
    }

    #[test]
    fn only_write_methods_carry_a_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Patch.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }
}
