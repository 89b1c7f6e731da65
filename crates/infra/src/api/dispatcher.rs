//! Mastodon REST dispatcher
//!
//! Sends a [`RequestSpec`] to the instance named by the batch's
//! [`ExecutionContext`] and returns the decoded JSON response.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde_json::{json, Value};
use tootbatch_core::Dispatcher;
use tootbatch_domain::{ExecutionContext, HttpMethod, RequestSpec, Result};
use tracing::{debug, instrument, warn};

use super::errors::TransportError;
use crate::http::HttpClient;

/// [`Dispatcher`] backed by reqwest
#[derive(Clone)]
pub struct MastodonDispatcher {
    http: HttpClient,
}

impl MastodonDispatcher {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Dispatcher for MastodonDispatcher {
    #[instrument(skip_all, fields(method = %spec.method, path = %spec.path))]
    async fn send(&self, context: &ExecutionContext, spec: &RequestSpec) -> Result<Value> {
        let url = context.url_for(&spec.path);

        let mut request = self
            .http
            .request(to_reqwest_method(spec.method), &url)
            .header(AUTHORIZATION, context.bearer())
            .header(CONTENT_TYPE, "application/json");

        let pairs = spec.query.to_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        if spec.method.has_body() {
            request = request.json(&spec.body);
        }

        let response = self.http.send(request).await?;
        let value = read_json(response, &url).await?;
        debug!("request dispatched");
        Ok(value)
    }
}

pub(crate) fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Decode a response body, mapping non-success statuses to
/// [`TransportError`]. Empty and 204/205 responses decode to `{}`.
pub(crate) async fn read_json(
    response: Response,
    url: &str,
) -> std::result::Result<Value, TransportError> {
    let status = response.status();
    let body = response.text().await.map_err(TransportError::from)?;

    if !status.is_success() {
        let error = TransportError::from_status(status, url, &body);
        warn!(%status, url, category = ?error.category(), "instance returned error status");
        return Err(error);
    }

    if status == StatusCode::NO_CONTENT
        || status == StatusCode::RESET_CONTENT
        || body.trim().is_empty()
    {
        return Ok(json!({}));
    }

    serde_json::from_str(&body)
        .map_err(|e| TransportError::Decode(format!("{} returned non-JSON body: {}", url, e)))
}
