//! Request builder
//!
//! Pure mapping from a resource/operation selection and resolved parameters
//! to a [`RequestSpec`]. Identical inputs always produce an identical spec.

use serde_json::{Map, Value};
use tootbatch_domain::constants::{
    ACCOUNTS_PATH, DEFAULT_LIMIT, EXCLUDE_TYPES_QUERY_KEY, LIMIT_QUERY_KEY, MAX_LIMIT, MIN_LIMIT,
    NOTIFICATIONS_PATH, STATUSES_PATH,
};
use tootbatch_domain::{
    HttpMethod, NotificationType, Query, RequestSpec, ResourceOperation, Result, Route, TootError,
    Visibility,
};

use crate::params::ResolvedParams;

/// Builds request specifications from the routing table
pub struct RequestBuilder;

impl RequestBuilder {
    /// Build the request for one item.
    ///
    /// # Errors
    /// - [`TootError::UnsupportedOperation`] for a selection outside the
    ///   routing table. No request is produced in that case.
    /// - [`TootError::Validation`] if a required parameter is missing or a
    ///   value is outside its declared domain.
    pub fn build(selection: &ResourceOperation, params: &ResolvedParams) -> Result<RequestSpec> {
        match Route::resolve(selection)? {
            Route::StatusPost => Self::post_status(params),
            Route::AccountGetFollowers => {
                let account_id = account_segment(params)?;
                let mut query = Query::new();
                query.insert(LIMIT_QUERY_KEY, limit(params)?);
                Ok(RequestSpec::new(
                    HttpMethod::Get,
                    format!("{ACCOUNTS_PATH}/{account_id}/followers"),
                )
                .with_query(query))
            }
            Route::AccountBlock => Self::account_action(params, "block"),
            Route::AccountUnblock => Self::account_action(params, "unblock"),
            Route::NotificationGetAll => Self::notifications(params),
        }
    }

    fn post_status(params: &ResolvedParams) -> Result<RequestSpec> {
        let status = params.require_text("status")?;
        let visibility = match params.text("visibility") {
            Some(raw) => raw.parse::<Visibility>().map_err(TootError::Validation)?,
            None => Visibility::default(),
        };

        let mut body = Map::new();
        body.insert("status".into(), Value::String(status.to_string()));
        body.insert("visibility".into(), Value::String(visibility.as_str().to_string()));

        Ok(RequestSpec::new(HttpMethod::Post, STATUSES_PATH).with_body(body))
    }

    fn account_action(params: &ResolvedParams, action: &str) -> Result<RequestSpec> {
        let account_id = account_segment(params)?;
        Ok(RequestSpec::new(HttpMethod::Post, format!("{ACCOUNTS_PATH}/{account_id}/{action}")))
    }

    fn notifications(params: &ResolvedParams) -> Result<RequestSpec> {
        let mut query = Query::new();
        query.insert(LIMIT_QUERY_KEY, limit(params)?);

        let excluded = params
            .list("excludeTypes")
            .unwrap_or_default()
            .iter()
            .map(|raw| {
                raw.parse::<NotificationType>()
                    .map(|kind| kind.as_str().to_string())
                    .map_err(TootError::Validation)
            })
            .collect::<Result<Vec<_>>>()?;
        if !excluded.is_empty() {
            query.insert(EXCLUDE_TYPES_QUERY_KEY, excluded);
        }

        Ok(RequestSpec::new(HttpMethod::Get, NOTIFICATIONS_PATH).with_query(query))
    }
}

/// Account id, percent-encoded for use as a single path segment.
fn account_segment(params: &ResolvedParams) -> Result<String> {
    let account_id = params.require_text("accountId")?;
    Ok(urlencoding::encode(account_id).into_owned())
}

fn limit(params: &ResolvedParams) -> Result<u32> {
    let value = params.number("limit").unwrap_or(DEFAULT_LIMIT);
    if (MIN_LIMIT..=MAX_LIMIT).contains(&value) {
        Ok(value)
    } else {
        Err(TootError::Validation(format!(
            "Limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tootbatch_domain::{Operation, QueryValue, Resource};

    use super::*;
    use crate::params::ParamValue;

    fn text(value: &str) -> ParamValue {
        ParamValue::Text(value.to_string())
    }

    fn list(values: &[&str]) -> ParamValue {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }

    fn build(resource: Resource, operation: Operation, params: &ResolvedParams) -> Result<RequestSpec> {
        RequestBuilder::build(&ResourceOperation::new(resource, operation), params)
    }

    #[test]
    fn status_post_builds_json_body() {
        let params = ResolvedParams::new()
            .with("status", text("hello"))
            .with("visibility", text("public"));

        let spec = build(Resource::Status, Operation::Post, &params).unwrap();

        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.path, "/api/v1/statuses");
        assert!(spec.query.is_empty());
        assert_eq!(
            Value::Object(spec.body),
            json!({ "status": "hello", "visibility": "public" })
        );
    }

    #[test]
    fn status_post_keeps_non_default_visibility() {
        let params = ResolvedParams::new()
            .with("status", text("psst"))
            .with("visibility", text("direct"));

        let spec = build(Resource::Status, Operation::Post, &params).unwrap();
        assert_eq!(spec.body.get("visibility"), Some(&json!("direct")));
    }

    #[test]
    fn status_post_requires_text() {
        let err = build(Resource::Status, Operation::Post, &ResolvedParams::new()).unwrap_err();
        assert!(matches!(err, TootError::Validation(_)));
    }

    #[test]
    fn get_followers_uses_account_path_and_limit() {
        let params = ResolvedParams::new()
            .with("accountId", text("123"))
            .with("limit", ParamValue::Number(10));

        let spec = build(Resource::Account, Operation::GetFollowers, &params).unwrap();

        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.path, "/api/v1/accounts/123/followers");
        assert_eq!(spec.query.to_pairs(), vec![("limit".to_string(), "10".to_string())]);
        assert!(spec.body.is_empty());
    }

    #[test]
    fn get_followers_defaults_limit() {
        let params = ResolvedParams::new().with("accountId", text("123"));
        let spec = build(Resource::Account, Operation::GetFollowers, &params).unwrap();
        assert_eq!(spec.query.get("limit"), Some(&QueryValue::Integer(40)));
    }

    #[test]
    fn limit_outside_bounds_is_rejected() {
        let params = ResolvedParams::new()
            .with("accountId", text("123"))
            .with("limit", ParamValue::Number(81));
        let err = build(Resource::Account, Operation::GetFollowers, &params).unwrap_err();
        assert!(matches!(err, TootError::Validation(_)));
    }

    #[test]
    fn block_and_unblock_post_with_empty_body() {
        let params = ResolvedParams::new().with("accountId", text("77"));

        let block = build(Resource::Account, Operation::Block, &params).unwrap();
        assert_eq!(block.method, HttpMethod::Post);
        assert_eq!(block.path, "/api/v1/accounts/77/block");
        assert!(block.body.is_empty());
        assert!(block.query.is_empty());

        let unblock = build(Resource::Account, Operation::Unblock, &params).unwrap();
        assert_eq!(unblock.method, HttpMethod::Post);
        assert_eq!(unblock.path, "/api/v1/accounts/77/unblock");
    }

    #[test]
    fn account_id_cannot_inject_path_segments() {
        let params = ResolvedParams::new().with("accountId", text("1/../../admin"));
        let spec = build(Resource::Account, Operation::Block, &params).unwrap();
        assert_eq!(spec.path, "/api/v1/accounts/1%2F..%2F..%2Fadmin/block");
    }

    #[test]
    fn notifications_with_exclusions() {
        let params = ResolvedParams::new().with("excludeTypes", list(&["follow", "poll"]));

        let spec = build(Resource::Notification, Operation::GetAll, &params).unwrap();

        assert_eq!(spec.method, HttpMethod::Get);
        assert_eq!(spec.path, "/api/v1/notifications");
        assert_eq!(
            spec.query.to_pairs(),
            vec![
                ("limit".to_string(), "40".to_string()),
                ("exclude_types[]".to_string(), "follow".to_string()),
                ("exclude_types[]".to_string(), "poll".to_string()),
            ]
        );
    }

    #[test]
    fn notifications_omit_empty_exclusions() {
        let params = ResolvedParams::new()
            .with("limit", ParamValue::Number(5))
            .with("excludeTypes", list(&[]));

        let spec = build(Resource::Notification, Operation::GetAll, &params).unwrap();

        assert_eq!(spec.query.len(), 1);
        assert_eq!(spec.query.get("exclude_types[]"), None);
    }

    #[test]
    fn unsupported_pair_fails_instead_of_building_a_request() {
        let params = ResolvedParams::new().with("accountId", text("1"));
        let err = build(Resource::Status, Operation::Block, &params).unwrap_err();
        assert_eq!(err, TootError::unsupported("status", "block"));
    }

    #[test]
    fn build_is_deterministic() {
        let params = ResolvedParams::new()
            .with("limit", ParamValue::Number(20))
            .with("excludeTypes", list(&["mention", "reblog"]));
        let selection = ResourceOperation::new(Resource::Notification, Operation::GetAll);

        let first = RequestBuilder::build(&selection, &params).unwrap();
        let second = RequestBuilder::build(&selection, &params).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
