// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-wide session state and its enumerated write path.
//!
//! There is exactly one mutable piece of session state per running
//! application, owned by a [`SessionStore`]. Everything else reads it via
//! [`SessionStore::snapshot`] or a [`SessionStore::subscribe`] receiver.
//! Each mutation is applied atomically: a reader never observes a
//! partially-applied state.

use tokio::sync::watch;

use crate::error::{RejectReason, SessionError};
use crate::models::{StudentData, UserProfile};
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};
use crate::token;

/// The session state visible to readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    /// True only if `token` was present, decodable and unexpired at the
    /// moment it was set. May go stale as the clock advances; the route
    /// guard re-checks expiry on every evaluation.
    pub is_authenticated: bool,
    /// True while rehydration or a profile fetch is pending.
    pub is_loading: bool,
}

/// Holder of the session state and its only write path.
///
/// Constructed with a storage backend for interactive contexts, or
/// [`SessionStore::detached`] where no durable storage exists (e.g.
/// server-side rendering); a detached store never persists anything and
/// rehydrates to signed-out.
pub struct SessionStore {
    state: watch::Sender<SessionState>,
    storage: Option<Box<dyn SessionStorage>>,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self::build(Some(storage))
    }

    pub fn detached() -> Self {
        Self::build(None)
    }

    fn build(storage: Option<Box<dyn SessionStorage>>) -> Self {
        // Loading until initialize() resolves, so guards render a pending
        // state instead of redirecting during rehydration.
        let (state, _) = watch::channel(SessionState {
            is_loading: true,
            ..SessionState::default()
        });
        Self { state, storage }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every mutation, for reactive consumers.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Rehydrate from durable storage.
    ///
    /// With both entries present, a current token and a parseable profile,
    /// the session resumes authenticated. A profile that fails to parse
    /// purges both entries (self-healing against corruption). Always ends
    /// with `is_loading = false`.
    pub fn initialize(&self) {
        if let Some(storage) = &self.storage {
            let token = storage.get(TOKEN_KEY);
            let user_json = storage.get(USER_KEY);

            if let (Some(token), Some(user_json)) = (token, user_json) {
                if !token::is_expired(&token) {
                    match serde_json::from_str::<UserProfile>(&user_json) {
                        Ok(user) => {
                            tracing::debug!(user_id = %user.id, "Session rehydrated from storage");
                            self.state.send_modify(|s| {
                                s.user = Some(user);
                                s.token = Some(token);
                                s.is_authenticated = true;
                                s.is_loading = false;
                            });
                            return;
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Persisted profile is corrupted, clearing session storage");
                            self.purge_storage();
                        }
                    }
                }
            }
        }

        self.state.send_modify(|s| s.is_loading = false);
    }

    /// Set token and profile together (single-step login).
    ///
    /// Rejects a malformed or expired token without touching state or
    /// storage.
    pub fn set_credentials(
        &self,
        user: UserProfile,
        token: String,
    ) -> Result<(), SessionError> {
        self.validate(&token)?;

        self.persist_token(&token);
        self.persist_user(&user);
        self.state.send_modify(|s| {
            s.user = Some(user);
            s.token = Some(token);
            s.is_authenticated = true;
            s.is_loading = false;
        });
        Ok(())
    }

    /// Set the token alone, leaving the session loading until the profile
    /// fetch completes via [`set_user`](Self::set_user).
    pub fn set_token(&self, token: String) -> Result<(), SessionError> {
        self.validate(&token)?;

        self.persist_token(&token);
        self.state.send_modify(|s| {
            s.token = Some(token);
            s.is_authenticated = true;
            s.is_loading = true;
        });
        Ok(())
    }

    /// Attach the fetched profile, completing the two-step login flow.
    pub fn set_user(&self, user: UserProfile) {
        self.persist_user(&user);
        self.state.send_modify(|s| {
            s.user = Some(user);
            s.is_loading = false;
        });
    }

    /// Mirror a successful server-side profile update. The server response
    /// is trusted as-is.
    pub fn update_user(&self, user: UserProfile) {
        self.persist_user(&user);
        self.state.send_modify(|s| s.user = Some(user));
    }

    /// Mirror a successful server-side student-record update. A no-op when
    /// no profile is attached.
    pub fn update_student_data(&self, data: StudentData) {
        let mut updated = None;
        self.state.send_modify(|s| {
            if let Some(user) = s.user.as_mut() {
                user.student_data = Some(data);
                updated = Some(user.clone());
            }
        });
        if let Some(user) = updated {
            self.persist_user(&user);
        }
    }

    /// Clear all session state and both storage entries. Idempotent.
    pub fn logout(&self) {
        self.state.send_modify(|s| *s = SessionState::default());
        self.purge_storage();
    }

    fn validate(&self, token: &str) -> Result<(), SessionError> {
        if token::decode(token).is_none() {
            return Err(SessionError::TokenRejected(RejectReason::Malformed));
        }
        // Expiry goes through the codec, the single authority for `exp`
        if token::is_expired(token) {
            return Err(SessionError::TokenRejected(RejectReason::Expired));
        }
        Ok(())
    }

    fn persist_token(&self, token: &str) {
        self.persist(TOKEN_KEY, token);
    }

    fn persist_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.persist(USER_KEY, &json),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize profile for persistence")
            }
        }
    }

    // Storage failures are logged, never raised: a session that can't
    // persist still works until the process exits.
    fn persist(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set(key, value) {
                tracing::warn!(key, error = %err, "Failed to persist session entry");
            }
        }
    }

    fn purge_storage(&self) {
        if let Some(storage) = &self.storage {
            for key in [TOKEN_KEY, USER_KEY] {
                if let Err(err) = storage.remove(key) {
                    tracing::warn!(key, error = %err, "Failed to remove session entry");
                }
            }
        }
    }
}
