//! Hand-written fakes shared by the unit tests in this crate

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tootbatch_domain::{ExecutionContext, RequestSpec, Result, TootError};

use crate::credentials::CredentialProvider;
use crate::dispatch::Dispatcher;
use crate::params::ParameterResolver;

/// Resolver backed by node-level values with optional per-item overrides.
#[derive(Default)]
pub struct MapResolver {
    strings: HashMap<String, String>,
    numbers: HashMap<String, f64>,
    lists: HashMap<String, Vec<String>>,
    item_strings: HashMap<(usize, String), String>,
    failing_index: Option<usize>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, name: &str, value: &str) -> Self {
        self.strings.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_number(mut self, name: &str, value: f64) -> Self {
        self.numbers.insert(name.to_string(), value);
        self
    }

    pub fn with_list(mut self, name: &str, values: &[&str]) -> Self {
        self.lists.insert(name.to_string(), values.iter().map(|v| v.to_string()).collect());
        self
    }

    pub fn with_item_string(mut self, index: usize, name: &str, value: &str) -> Self {
        self.item_strings.insert((index, name.to_string()), value.to_string());
        self
    }

    /// Every lookup for `index` fails with a validation error.
    pub fn failing_at(mut self, index: usize) -> Self {
        self.failing_index = Some(index);
        self
    }

    fn check(&self, name: &str, index: usize) -> Result<()> {
        if self.failing_index == Some(index) {
            return Err(TootError::Validation(format!("cannot resolve '{name}' for item {index}")));
        }
        Ok(())
    }
}

impl ParameterResolver for MapResolver {
    fn get_string(&self, name: &str, index: usize) -> Result<Option<String>> {
        self.check(name, index)?;
        if let Some(value) = self.item_strings.get(&(index, name.to_string())) {
            return Ok(Some(value.clone()));
        }
        Ok(self.strings.get(name).cloned())
    }

    fn get_number(&self, name: &str, index: usize) -> Result<Option<f64>> {
        self.check(name, index)?;
        Ok(self.numbers.get(name).copied())
    }

    fn get_string_list(&self, name: &str, index: usize) -> Result<Option<Vec<String>>> {
        self.check(name, index)?;
        Ok(self.lists.get(name).cloned())
    }
}

/// Dispatcher that replays scripted responses and records every request.
#[derive(Default)]
pub struct ScriptedDispatcher {
    responses: Mutex<VecDeque<Result<Value>>>,
    sent: Mutex<Vec<RequestSpec>>,
}

impl ScriptedDispatcher {
    pub fn new(responses: Vec<Result<Value>>) -> Self {
        Self { responses: Mutex::new(responses.into()), sent: Mutex::new(Vec::new()) }
    }

    pub fn sent(&self) -> Vec<RequestSpec> {
        self.sent.lock().expect("sent mutex poisoned").clone()
    }
}

#[async_trait]
impl Dispatcher for ScriptedDispatcher {
    async fn send(&self, _context: &ExecutionContext, spec: &RequestSpec) -> Result<Value> {
        self.sent.lock().expect("sent mutex poisoned").push(spec.clone());
        self.responses
            .lock()
            .expect("responses mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(TootError::Internal("no scripted response left".into())))
    }
}

/// Credential provider returning a fixed context.
pub struct FixedCredentials(pub Result<ExecutionContext>);

impl FixedCredentials {
    pub fn ok() -> Self {
        Self(Ok(ExecutionContext::new("https://mastodon.test", "test-token")))
    }
}

#[async_trait]
impl CredentialProvider for FixedCredentials {
    async fn execution_context(&self) -> Result<ExecutionContext> {
        self.0.clone()
    }
}
