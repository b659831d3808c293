// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! High-level authentication flows binding the API client to the session
//! store.
//!
//! Login and registration are two-step: the server returns only a token,
//! so the store holds `is_loading = true` between `set_token` and the
//! profile fetch landing in `set_user`. Both steps apply their results
//! synchronously; the awaits happen between mutations, never inside one.

use std::sync::Arc;

use super::auth::RegisterRequest;
use super::students::StudentPatch;
use super::users::UserPatch;
use super::ApiClient;
use crate::error::{ApiError, AuthFlowError};
use crate::models::{StudentData, UserProfile};
use crate::session::SessionStore;

/// Binds an [`ApiClient`] to the [`SessionStore`] it feeds.
pub struct Authenticator {
    api: ApiClient,
    store: Arc<SessionStore>,
}

impl Authenticator {
    pub fn new(api: ApiClient, store: Arc<SessionStore>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Log in: token first, then profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthFlowError> {
        let auth = self.api.login(email, password).await?;
        self.store.set_token(auth.token.clone())?;

        let user = self.api.me(&auth.token).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "Login completed");
        self.store.set_user(user.clone());
        Ok(user)
    }

    /// Register a new account; same two-step shape as login.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, AuthFlowError> {
        let auth = self.api.register(request).await?;
        self.store.set_token(auth.token.clone())?;

        let user = self.api.me(&auth.token).await?;
        tracing::info!(user_id = %user.id, "Registration completed");
        self.store.set_user(user.clone());
        Ok(user)
    }

    /// Re-fetch the profile for the stored token.
    pub async fn refresh_profile(&self) -> Result<UserProfile, AuthFlowError> {
        let token = self.current_token()?;
        let user = self.api.me(&token).await?;
        self.store.set_user(user.clone());
        Ok(user)
    }

    /// Apply a profile update through the API and mirror the response into
    /// the store.
    pub async fn update_profile(&self, patch: &UserPatch) -> Result<UserProfile, AuthFlowError> {
        let token = self.current_token()?;
        let user = self.api.update_me(&token, patch).await?;
        self.store.update_user(user.clone());
        Ok(user)
    }

    /// Upload a new profile picture and mirror the updated profile.
    pub async fn update_profile_picture(
        &self,
        image: Vec<u8>,
        mime: &str,
    ) -> Result<UserProfile, AuthFlowError> {
        let token = self.current_token()?;
        let user = self.api.upload_profile_picture(&token, image, mime).await?;
        self.store.update_user(user.clone());
        Ok(user)
    }

    /// Update the caller's student record and mirror the sub-record.
    pub async fn update_student_data(
        &self,
        patch: &StudentPatch,
    ) -> Result<StudentData, AuthFlowError> {
        let token = self.current_token()?;
        let student = self.api.update_my_student_data(&token, patch).await?;

        let data = StudentData {
            course: student.course,
            enrollment_year: student.enrollment_year,
            status: student.status,
        };
        self.store.update_student_data(data.clone());
        Ok(data)
    }

    pub fn logout(&self) {
        self.store.logout();
    }

    fn current_token(&self) -> Result<String, AuthFlowError> {
        self.store
            .snapshot()
            .token
            .ok_or(AuthFlowError::Api(ApiError::Unauthorized))
    }
}
