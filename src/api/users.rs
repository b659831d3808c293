// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile and admin user endpoints.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{DashboardStats, UserProfile};

/// Partial profile patch; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// `/user/*` responses wrap the profile in a `user` envelope.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: UserProfile,
}

impl ApiClient {
    /// `PATCH /user/me` — the response drives `SessionStore::update_user`.
    pub async fn update_me(&self, token: &str, patch: &UserPatch) -> ApiResult<UserProfile> {
        let response = self
            .http
            .patch(self.url("/user/me"))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        let envelope: UserEnvelope = Self::handle(response).await?;
        Ok(envelope.user)
    }

    /// `PATCH /user/me/profile-pic` — binary image upload.
    pub async fn upload_profile_picture(
        &self,
        token: &str,
        image: Vec<u8>,
        mime: &str,
    ) -> ApiResult<UserProfile> {
        let part = reqwest::multipart::Part::bytes(image)
            .file_name("profile-pic")
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("profilePicture", part);

        let response = self
            .http
            .patch(self.url("/user/me/profile-pic"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        let envelope: UserEnvelope = Self::handle(response).await?;
        Ok(envelope.user)
    }

    /// `GET /user/admin/dashboard-stats`
    pub async fn dashboard_stats(&self, token: &str) -> ApiResult<DashboardStats> {
        let response = self
            .http
            .get(self.url("/user/admin/dashboard-stats"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::handle(response).await
    }
}
