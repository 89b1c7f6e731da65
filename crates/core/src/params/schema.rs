//! Declarative parameter schema
//!
//! Maps every supported (resource, operation) pair to the fields it accepts,
//! with defaults and bounds. Resolution pulls each declared field from a
//! [`ParameterResolver`], applies defaults and rejects anything outside the
//! declared bounds before a request is built.

use std::collections::BTreeMap;

use tootbatch_domain::constants::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
use tootbatch_domain::{ResourceOperation, Result, Route, TootError};

use super::ports::ParameterResolver;

pub const VISIBILITY_OPTIONS: &[&str] = &["public", "unlisted", "private", "direct"];
pub const NOTIFICATION_TYPE_OPTIONS: &[&str] = &["follow", "favourite", "reblog", "mention", "poll"];

/// Shape and constraints of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Whole number within `min..=max`
    Number { default: u32, min: u32, max: u32 },
    /// Exactly one of `allowed`
    Options { allowed: &'static [&'static str], default: &'static str },
    /// Any subset of `allowed`, empty by default
    MultiOptions { allowed: &'static [&'static str] },
}

/// A declared parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const STATUS_TEXT: FieldSpec = FieldSpec {
    name: "status",
    display_name: "Status Text",
    kind: FieldKind::Text,
    required: true,
};

const VISIBILITY: FieldSpec = FieldSpec {
    name: "visibility",
    display_name: "Visibility",
    kind: FieldKind::Options { allowed: VISIBILITY_OPTIONS, default: "public" },
    required: false,
};

const ACCOUNT_ID: FieldSpec = FieldSpec {
    name: "accountId",
    display_name: "Account ID",
    kind: FieldKind::Text,
    required: true,
};

const LIMIT: FieldSpec = FieldSpec {
    name: "limit",
    display_name: "Limit",
    kind: FieldKind::Number { default: DEFAULT_LIMIT, min: MIN_LIMIT, max: MAX_LIMIT },
    required: false,
};

const EXCLUDE_TYPES: FieldSpec = FieldSpec {
    name: "excludeTypes",
    display_name: "Exclude Types",
    kind: FieldKind::MultiOptions { allowed: NOTIFICATION_TYPE_OPTIONS },
    required: false,
};

/// A resolved parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Number(u32),
    List(Vec<String>),
}

/// Parameters for one item, after defaults and validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParams {
    values: BTreeMap<String, ParamValue>,
}

impl ResolvedParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing params directly.
    pub fn with(mut self, name: impl Into<String>, value: ParamValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(ParamValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<u32> {
        match self.values.get(name) {
            Some(ParamValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(ParamValue::List(values)) => Some(values),
            _ => None,
        }
    }

    /// Non-empty text value, or a validation error naming the field.
    pub fn require_text(&self, name: &str) -> Result<&str> {
        match self.text(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(TootError::Validation(format!("Missing required parameter '{name}'"))),
        }
    }
}

/// The schema table
pub struct ParameterSchema;

impl ParameterSchema {
    /// Fields declared for a route, in display order.
    pub fn fields(route: Route) -> &'static [FieldSpec] {
        match route {
            Route::StatusPost => &[STATUS_TEXT, VISIBILITY],
            Route::AccountGetFollowers => &[ACCOUNT_ID, LIMIT],
            Route::AccountBlock | Route::AccountUnblock => &[ACCOUNT_ID],
            Route::NotificationGetAll => &[LIMIT, EXCLUDE_TYPES],
        }
    }

    /// Resolve and validate every declared field for item `index`.
    ///
    /// # Errors
    /// - [`TootError::UnsupportedOperation`] if the selection is not routable
    /// - [`TootError::Validation`] if a field is missing, mistyped or out of
    ///   bounds
    pub fn resolve(
        selection: &ResourceOperation,
        resolver: &dyn ParameterResolver,
        index: usize,
    ) -> Result<ResolvedParams> {
        let route = Route::resolve(selection)?;
        let mut params = ResolvedParams::new();
        for field in Self::fields(route) {
            if let Some(value) = resolve_field(field, resolver, index)? {
                params.insert(field.name, value);
            }
        }
        Ok(params)
    }
}

fn resolve_field(
    field: &FieldSpec,
    resolver: &dyn ParameterResolver,
    index: usize,
) -> Result<Option<ParamValue>> {
    match field.kind {
        FieldKind::Text => {
            let value = resolver.get_string(field.name, index)?;
            match value {
                Some(text) if !text.is_empty() => Ok(Some(ParamValue::Text(text))),
                _ if field.required => Err(missing(field)),
                _ => Ok(None),
            }
        }
        FieldKind::Number { default, min, max } => {
            let Some(raw) = resolver.get_number(field.name, index)? else {
                return Ok(Some(ParamValue::Number(default)));
            };
            let value = whole_number(field, raw)?;
            if value < min || value > max {
                return Err(TootError::Validation(format!(
                    "{} must be between {min} and {max}, got {value}",
                    field.display_name
                )));
            }
            Ok(Some(ParamValue::Number(value)))
        }
        FieldKind::Options { allowed, default } => {
            let value = resolver.get_string(field.name, index)?;
            let value = match value {
                Some(text) if !text.is_empty() => text,
                _ => default.to_string(),
            };
            ensure_allowed(field, allowed, &value)?;
            Ok(Some(ParamValue::Text(value)))
        }
        FieldKind::MultiOptions { allowed } => {
            let values = resolver.get_string_list(field.name, index)?.unwrap_or_default();
            for value in &values {
                ensure_allowed(field, allowed, value)?;
            }
            Ok(Some(ParamValue::List(values)))
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(field: &FieldSpec, raw: f64) -> Result<u32> {
    if !raw.is_finite() || raw.fract() != 0.0 || raw < 0.0 || raw > f64::from(u32::MAX) {
        return Err(TootError::Validation(format!(
            "{} must be a whole number, got {raw}",
            field.display_name
        )));
    }
    Ok(raw as u32)
}

fn ensure_allowed(field: &FieldSpec, allowed: &[&str], value: &str) -> Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(TootError::Validation(format!(
            "{} must be one of [{}], got '{value}'",
            field.display_name,
            allowed.join(", ")
        )))
    }
}

fn missing(field: &FieldSpec) -> TootError {
    TootError::Validation(format!("Missing required parameter '{}'", field.name))
}

#[cfg(test)]
mod tests {
    use tootbatch_domain::{NotificationType, Operation, Resource, Visibility};

    use super::*;
    use crate::test_support::MapResolver;

    fn selection(resource: Resource, operation: Operation) -> ResourceOperation {
        ResourceOperation::new(resource, operation)
    }

    #[test]
    fn option_tables_match_domain_enums() {
        let visibility: Vec<&str> = Visibility::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(visibility, VISIBILITY_OPTIONS);

        let types: Vec<&str> = NotificationType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(types, NOTIFICATION_TYPE_OPTIONS);
    }

    #[test]
    fn status_post_defaults_visibility_to_public() {
        let resolver = MapResolver::new().with_string("status", "hello");
        let params =
            ParameterSchema::resolve(&selection(Resource::Status, Operation::Post), &resolver, 0)
                .unwrap();

        assert_eq!(params.text("status"), Some("hello"));
        assert_eq!(params.text("visibility"), Some("public"));
    }

    #[test]
    fn status_text_is_required() {
        let resolver = MapResolver::new().with_string("status", "");
        let err =
            ParameterSchema::resolve(&selection(Resource::Status, Operation::Post), &resolver, 0)
                .unwrap_err();

        assert_eq!(err, TootError::Validation("Missing required parameter 'status'".into()));
    }

    #[test]
    fn unknown_visibility_is_rejected() {
        let resolver =
            MapResolver::new().with_string("status", "hi").with_string("visibility", "friends");
        let err =
            ParameterSchema::resolve(&selection(Resource::Status, Operation::Post), &resolver, 0)
                .unwrap_err();

        assert!(matches!(err, TootError::Validation(msg) if msg.contains("friends")));
    }

    #[test]
    fn limit_defaults_to_forty() {
        let resolver = MapResolver::new().with_string("accountId", "123");
        let params = ParameterSchema::resolve(
            &selection(Resource::Account, Operation::GetFollowers),
            &resolver,
            0,
        )
        .unwrap();

        assert_eq!(params.number("limit"), Some(40));
    }

    #[test]
    fn limit_outside_bounds_is_rejected() {
        for bad in [0.0, 81.0, 12.5, -1.0, f64::NAN] {
            let resolver =
                MapResolver::new().with_string("accountId", "123").with_number("limit", bad);
            let result = ParameterSchema::resolve(
                &selection(Resource::Account, Operation::GetFollowers),
                &resolver,
                0,
            );
            assert!(matches!(result, Err(TootError::Validation(_))), "limit {bad} accepted");
        }
    }

    #[test]
    fn limit_bounds_are_inclusive() {
        for good in [1.0, 80.0] {
            let resolver = MapResolver::new().with_number("limit", good);
            let params = ParameterSchema::resolve(
                &selection(Resource::Notification, Operation::GetAll),
                &resolver,
                0,
            )
            .unwrap();
            assert_eq!(params.number("limit"), Some(good as u32));
        }
    }

    #[test]
    fn exclude_types_defaults_to_empty_and_checks_members() {
        let params = ParameterSchema::resolve(
            &selection(Resource::Notification, Operation::GetAll),
            &MapResolver::new(),
            0,
        )
        .unwrap();
        assert_eq!(params.list("excludeTypes"), Some(&[][..]));

        let resolver = MapResolver::new().with_list("excludeTypes", &["follow", "boost"]);
        let err = ParameterSchema::resolve(
            &selection(Resource::Notification, Operation::GetAll),
            &resolver,
            0,
        )
        .unwrap_err();
        assert!(matches!(err, TootError::Validation(msg) if msg.contains("boost")));
    }

    #[test]
    fn block_only_declares_account_id() {
        let resolver = MapResolver::new().with_string("accountId", "9").with_number("limit", 5.0);
        let params =
            ParameterSchema::resolve(&selection(Resource::Account, Operation::Block), &resolver, 0)
                .unwrap();

        assert_eq!(params.text("accountId"), Some("9"));
        assert_eq!(params.get("limit"), None);
    }

    #[test]
    fn unroutable_selection_fails_before_resolving() {
        let err = ParameterSchema::resolve(
            &selection(Resource::Notification, Operation::Post),
            &MapResolver::new(),
            0,
        )
        .unwrap_err();

        assert_eq!(err, TootError::unsupported("notification", "post"));
    }

    #[test]
    fn resolver_errors_propagate() {
        let resolver = MapResolver::new().failing_at(1);
        let result = ParameterSchema::resolve(
            &selection(Resource::Notification, Operation::GetAll),
            &resolver,
            1,
        );
        assert!(matches!(result, Err(TootError::Validation(_))));
    }
}
