//! `tootbatch run` - execute a batch

use std::io::Read;
use std::path::Path;

use anyhow::Context as _;
use serde_json::{Map, Value};
use tootbatch_core::{BatchOutcome, BatchRequest};
use tootbatch_domain::{Item, Resource, ResourceOperation, Result, TootError};
use tootbatch_infra::ItemParameterResolver;

use crate::cli::RunArgs;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, args: &RunArgs) -> anyhow::Result<BatchOutcome> {
    let selection = selection(&args.resource, args.operation.as_deref())?;
    let node_params = parse_params(args.params.as_deref())?;
    let items = match &args.input {
        Some(path) => read_items(path)?,
        None => vec![Item::new(Value::Object(Map::new()))],
    };

    let resolver = ItemParameterResolver::new(node_params, items);
    let outcome = ctx
        .executor
        .run(BatchRequest {
            selection,
            items: resolver.items(),
            resolver: &resolver,
            policy: ctx.failure_policy(args.continue_on_fail),
        })
        .await?;

    Ok(outcome)
}

/// Resolve the selected pair, falling back to the resource's default
/// operation.
pub fn selection(resource: &str, operation: Option<&str>) -> Result<ResourceOperation> {
    match operation {
        Some(operation) => ResourceOperation::parse(resource, operation),
        None => resource
            .parse::<Resource>()
            .map(ResourceOperation::with_default_operation)
            .map_err(|_| TootError::unsupported(resource, "(default)")),
    }
}

pub fn parse_params(raw: Option<&str>) -> Result<Map<String, Value>> {
    let Some(raw) = raw else {
        return Ok(Map::new());
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            Err(TootError::Validation(format!("--params must be a JSON object, got {}", other)))
        }
        Err(e) => Err(TootError::Validation(format!("--params is not valid JSON: {}", e))),
    }
}

/// Items from a JSON array (one item per element) or a single JSON value.
pub fn parse_items(raw: &str) -> Result<Vec<Item>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| TootError::Validation(format!("input is not valid JSON: {}", e)))?;

    Ok(match value {
        Value::Array(values) => values.into_iter().map(Item::new).collect(),
        other => vec![Item::new(other)],
    })
}

fn read_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).context("failed to read items from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read items from {}", path.display()))?
    };

    Ok(parse_items(&raw)?)
}
