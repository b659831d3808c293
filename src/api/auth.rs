// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication endpoints.
//!
//! Login and registration return only a token; the profile comes from a
//! follow-up `GET /auth/me`. The two-step wiring lives in [`super::flow`].

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::UserProfile;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`, validated before it leaves the
/// client.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "full name is required"))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 7, max = 15, message = "phone must be 7-15 digits"))]
    pub phone: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

/// Response of login/register: a human-readable message and the session
/// token.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

impl ApiClient {
    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&body)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        request
            .validate()
            .map_err(|err| ApiError::Validation(err.to_string()))?;
        let response = self
            .http
            .post(self.url("/auth/register"))
            .json(request)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// `GET /auth/me`
    pub async fn me(&self, token: &str) -> ApiResult<UserProfile> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::handle(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegisterRequest {
        RegisterRequest {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "5551234567".to_string(),
            password: "correct-horse".to_string(),
        }
    }

    #[test]
    fn test_register_request_validates() {
        assert!(valid_request().validate().is_ok());

        let mut bad_email = valid_request();
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        let mut short_password = valid_request();
        short_password.password = "short".to_string();
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_register_request_wire_format() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["email"], "ada@example.com");
    }
}
