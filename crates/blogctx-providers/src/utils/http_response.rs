//! HTTP Response Utilities
//!
//! Status handling and typed decoding shared by every HTTP adapter.

use std::time::Duration;

use blogctx_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::constants::ERROR_MSG_REQUEST_TIMEOUT;

/// Which domain error a failed call maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKind {
    Embedding,
    Generation,
    Source,
}

impl ApiKind {
    fn error(self, provider: &str, context: &str, details: &str) -> Error {
        let message = format!("{provider} {context}: {details}");
        match self {
            Self::Embedding => Error::embedding(message),
            Self::Generation => Error::generation(message),
            Self::Source => Error::source(message),
        }
    }

    /// Error for a request that never produced a response
    pub fn request_error(self, provider: &str, error: &reqwest::Error, timeout: Duration) -> Error {
        if error.is_timeout() {
            self.error(provider, ERROR_MSG_REQUEST_TIMEOUT, &format!("{timeout:?}"))
        } else {
            self.error(provider, "HTTP request failed", &error.to_string())
        }
    }
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and decode the JSON body into `T`
    ///
    /// 401, 429 and 5xx get their own messages; a body that does not match
    /// `T` is a parse error of the same kind.
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        kind: ApiKind,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 => kind.error(provider_name, "authentication failed", &error_text),
                429 => kind.error(provider_name, "rate limit exceeded", &error_text),
                500..=599 => kind.error(
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => kind.error(
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| kind.error(provider_name, "response read failed", &e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| kind.error(provider_name, "response parse failed", &e.to_string()))
    }
}
