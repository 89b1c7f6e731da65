//! JSON-backed parameter resolution
//!
//! Node-level parameters apply to every item; a field of the same name in an
//! item's JSON overrides the node value for that item only.

use serde_json::{Map, Value};
use tootbatch_core::ParameterResolver;
use tootbatch_domain::{Item, Result, TootError};

/// [`ParameterResolver`] over node parameters and the batch's input items
#[derive(Debug, Clone, Default)]
pub struct ItemParameterResolver {
    node: Map<String, Value>,
    items: Vec<Item>,
}

impl ItemParameterResolver {
    pub fn new(node: Map<String, Value>, items: Vec<Item>) -> Self {
        Self { node, items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn lookup(&self, name: &str, index: usize) -> Result<Option<&Value>> {
        let item = self.items.get(index).ok_or_else(|| {
            TootError::Validation(format!(
                "no input item at index {} ({} items)",
                index,
                self.items.len()
            ))
        })?;

        let value = item.field(name).or_else(|| self.node.get(name));
        Ok(value.filter(|value| !value.is_null()))
    }
}

impl ParameterResolver for ItemParameterResolver {
    fn get_string(&self, name: &str, index: usize) -> Result<Option<String>> {
        match self.lookup(name, index)? {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            // Account ids are frequently carried as JSON numbers.
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(other) => Err(type_error(name, "a string", other)),
        }
    }

    fn get_number(&self, name: &str, index: usize) -> Result<Option<f64>> {
        match self.lookup(name, index)? {
            None => Ok(None),
            Some(Value::Number(number)) => number
                .as_f64()
                .map(Some)
                .ok_or_else(|| type_error(name, "a number", &Value::Number(number.clone()))),
            Some(Value::String(text)) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| type_error(name, "a number", &Value::String(text.clone()))),
            Some(other) => Err(type_error(name, "a number", other)),
        }
    }

    fn get_string_list(&self, name: &str, index: usize) -> Result<Option<Vec<String>>> {
        match self.lookup(name, index)? {
            None => Ok(None),
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| match value {
                    Value::String(text) => Ok(text.clone()),
                    other => Err(type_error(name, "a list of strings", other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(Value::String(text)) => Ok(Some(vec![text.clone()])),
            Some(other) => Err(type_error(name, "a list of strings", other)),
        }
    }
}

fn type_error(name: &str, expected: &str, actual: &Value) -> TootError {
    TootError::Validation(format!("Parameter '{}' must be {}, got {}", name, expected, actual))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn resolver(node_params: Value, items: Vec<Value>) -> ItemParameterResolver {
        ItemParameterResolver::new(node(node_params), items.into_iter().map(Item::new).collect())
    }

    #[test]
    fn node_params_apply_to_every_item() {
        let resolver = resolver(json!({"statusText": "Hello"}), vec![json!({}), json!({})]);
        assert_eq!(resolver.get_string("statusText", 0).unwrap().as_deref(), Some("Hello"));
        assert_eq!(resolver.get_string("statusText", 1).unwrap().as_deref(), Some("Hello"));
    }

    #[test]
    fn item_fields_override_node_params() {
        let resolver = resolver(
            json!({"accountId": "1"}),
            vec![json!({"accountId": "42"}), json!({"other": true})],
        );
        assert_eq!(resolver.get_string("accountId", 0).unwrap().as_deref(), Some("42"));
        assert_eq!(resolver.get_string("accountId", 1).unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn missing_and_null_values_resolve_to_none() {
        let resolver = resolver(json!({"limit": null}), vec![json!({})]);
        assert_eq!(resolver.get_number("limit", 0).unwrap(), None);
        assert_eq!(resolver.get_string("statusText", 0).unwrap(), None);
        assert_eq!(resolver.get_string_list("excludeTypes", 0).unwrap(), None);
    }

    #[test]
    fn numeric_ids_are_read_as_strings() {
        let resolver = resolver(json!({}), vec![json!({"accountId": 109_000_123})]);
        assert_eq!(resolver.get_string("accountId", 0).unwrap().as_deref(), Some("109000123"));
    }

    #[test]
    fn numbers_accept_numeric_strings() {
        let resolver = resolver(json!({"limit": "20"}), vec![json!({}), json!({"limit": 5})]);
        assert_eq!(resolver.get_number("limit", 0).unwrap(), Some(20.0));
        assert_eq!(resolver.get_number("limit", 1).unwrap(), Some(5.0));
    }

    #[test]
    fn wrong_types_are_validation_errors() {
        let resolver = resolver(
            json!({"limit": "lots", "statusText": ["a"], "excludeTypes": [1]}),
            vec![json!({})],
        );
        assert!(matches!(resolver.get_number("limit", 0), Err(TootError::Validation(_))));
        assert!(matches!(resolver.get_string("statusText", 0), Err(TootError::Validation(_))));
        assert!(matches!(
            resolver.get_string_list("excludeTypes", 0),
            Err(TootError::Validation(msg)) if msg.contains("excludeTypes")
        ));
    }

    #[test]
    fn lists_accept_single_strings() {
        let resolver = resolver(json!({"excludeTypes": "follow"}), vec![json!({})]);
        assert_eq!(
            resolver.get_string_list("excludeTypes", 0).unwrap(),
            Some(vec!["follow".to_string()])
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let resolver = resolver(json!({"statusText": "x"}), vec![json!({})]);
        assert!(matches!(resolver.get_string("statusText", 3), Err(TootError::Validation(_))));
    }
}
