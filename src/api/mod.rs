// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed client for the student-management REST API.
//!
//! The API itself is a black box: this module only shapes requests, sends
//! the bearer token, and decodes JSON responses. Its results feed the
//! session actions; it never mutates session state directly.

pub mod auth;
pub mod flow;
pub mod students;
pub mod users;

pub use flow::Authenticator;

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Shared HTTP client for all endpoint groups.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or map an error status to [`ApiError`].
    async fn handle<T>(response: Response) -> ApiResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::error_for(status, response).await)
    }

    async fn error_for(status: StatusCode, response: Response) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            _ => {
                // The API reports failures as {"message": "..."}
                let message = response
                    .json::<ErrorBody>()
                    .await
                    .map(|body| body.message)
                    .unwrap_or_else(|_| {
                        status
                            .canonical_reason()
                            .unwrap_or("request failed")
                            .to_string()
                    });
                ApiError::Api {
                    status: status.as_u16(),
                    message,
                }
            }
        }
    }
}

/// Error body shape used by the API for failed requests.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
