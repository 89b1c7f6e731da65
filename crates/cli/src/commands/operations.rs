//! `tootbatch operations` - describe what can be run

use serde_json::{json, Value};
use tootbatch_core::{FieldKind, FieldSpec, ParameterSchema};
use tootbatch_domain::{Resource, Route};

/// Every supported resource with its operations and their parameters.
pub fn catalog() -> Value {
    let resources: Vec<Value> = Resource::ALL
        .iter()
        .map(|resource| {
            let operations: Vec<Value> = Route::ALL
                .iter()
                .filter(|route| route.selection().resource == *resource)
                .map(|route| {
                    let selection = route.selection();
                    json!({
                        "name": selection.operation.as_str(),
                        "action": route.action(),
                        "default": selection.operation == resource.default_operation(),
                        "parameters": ParameterSchema::fields(*route)
                            .iter()
                            .map(describe_field)
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();

            json!({ "name": resource.as_str(), "operations": operations })
        })
        .collect();

    json!({ "resources": resources })
}

fn describe_field(field: &FieldSpec) -> Value {
    let mut value = json!({
        "name": field.name,
        "displayName": field.display_name,
        "required": field.required,
    });

    let details = match field.kind {
        FieldKind::Text => json!({ "type": "string" }),
        FieldKind::Number { default, min, max } => {
            json!({ "type": "number", "default": default, "min": min, "max": max })
        }
        FieldKind::Options { allowed, default } => {
            json!({ "type": "options", "options": allowed, "default": default })
        }
        FieldKind::MultiOptions { allowed } => {
            json!({ "type": "multiOptions", "options": allowed, "default": [] })
        }
    };

    if let (Some(target), Some(extra)) = (value.as_object_mut(), details.as_object()) {
        target.extend(extra.clone());
    }
    value
}
