//! Conversions from external infrastructure errors into domain errors.

use linkedgpt_domain::LinkedGptError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LinkedGptError);

impl From<InfraError> for LinkedGptError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LinkedGptError> for InfraError {
    fn from(value: LinkedGptError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLinkedGptError {
    fn into_linkedgpt(self) -> LinkedGptError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → LinkedGptError */
/* -------------------------------------------------------------------------- */

impl IntoLinkedGptError for HttpError {
    fn into_linkedgpt(self) -> LinkedGptError {
        if self.is_timeout() {
            return LinkedGptError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return LinkedGptError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return LinkedGptError::upstream(
                code,
                status.canonical_reason().unwrap_or("unknown status"),
            );
        }

        if self.is_decode() {
            return LinkedGptError::InvalidResponse(format!("failed to decode body: {self}"));
        }

        if self.is_builder() {
            return LinkedGptError::Internal(format!("invalid HTTP request: {self}"));
        }

        LinkedGptError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_linkedgpt())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → LinkedGptError */
/* -------------------------------------------------------------------------- */

impl IntoLinkedGptError for JsonError {
    fn into_linkedgpt(self) -> LinkedGptError {
        LinkedGptError::InvalidResponse(format!("unexpected JSON: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_linkedgpt())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → LinkedGptError */
/* -------------------------------------------------------------------------- */

impl IntoLinkedGptError for UrlError {
    fn into_linkedgpt(self) -> LinkedGptError {
        LinkedGptError::Configuration(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_linkedgpt())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
