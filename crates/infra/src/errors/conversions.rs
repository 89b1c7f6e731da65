//! Conversions from external infrastructure errors into transport and domain
//! errors.

use reqwest::Error as HttpError;
use tootbatch_domain::TootError;
use url::ParseError as UrlError;

use crate::api::errors::TransportError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TootError);

impl From<InfraError> for TootError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TootError> for InfraError {
    fn from(value: TootError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TransportError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        if err.is_timeout() {
            return TransportError::Network(format!("HTTP request timed out: {err}"));
        }

        if err.is_connect() {
            return TransportError::Network(format!("HTTP connection failure: {err}"));
        }

        if err.is_builder() {
            return TransportError::Config(err.to_string());
        }

        if err.is_decode() {
            return TransportError::Decode(err.to_string());
        }

        if let Some(status) = err.status() {
            let url = err.url().map(ToString::to_string).unwrap_or_default();
            return TransportError::from_status(status, &url, "");
        }

        TransportError::Network(err.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(TransportError::from(value).into())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → TootError */
/* -------------------------------------------------------------------------- */

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(TootError::Config(format!("invalid instance URL: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
