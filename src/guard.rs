// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Role-based route gating over the session state.
//!
//! A [`RouteGuard`] is a pure state machine: the embedding UI calls
//! [`evaluate`](RouteGuard::evaluate) before rendering a protected view and
//! acts on the verdict. Verdicts are never cached — expiry is
//! time-dependent, so every navigation re-evaluates against the clock.

use std::collections::HashSet;

use crate::models::Role;
use crate::session::SessionState;
use crate::token;

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Session still rehydrating or mid profile fetch; render a pending
    /// state, decide nothing yet
    Pending,
    /// No usable token; send the user to the login view
    RedirectToLogin,
    /// Valid session but the role isn't allowed here
    RedirectToUnauthorized,
    /// Render the protected content
    Allow,
}

impl GuardVerdict {
    /// Destination for redirect verdicts, `None` otherwise.
    pub fn redirect_destination(&self) -> Option<&'static str> {
        match self {
            GuardVerdict::RedirectToLogin => Some(RouteGuard::LOGIN_DESTINATION),
            GuardVerdict::RedirectToUnauthorized => Some(RouteGuard::UNAUTHORIZED_DESTINATION),
            GuardVerdict::Pending | GuardVerdict::Allow => None,
        }
    }
}

/// Gate for a protected view or route subtree.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    allowed_roles: Option<HashSet<Role>>,
    require_auth: bool,
}

impl RouteGuard {
    pub const LOGIN_DESTINATION: &'static str = "/auth/login";
    pub const UNAUTHORIZED_DESTINATION: &'static str = "/unauthorized";

    /// Require authentication, any role.
    pub fn new() -> Self {
        Self {
            allowed_roles: None,
            require_auth: true,
        }
    }

    /// No authentication required; always allows once loading settles.
    pub fn public() -> Self {
        Self {
            allowed_roles: None,
            require_auth: false,
        }
    }

    /// Require authentication and one of the given roles.
    pub fn allow_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: Some(roles.into_iter().collect()),
            require_auth: true,
        }
    }

    /// Evaluate against the current wall clock.
    pub fn evaluate(&self, state: &SessionState) -> GuardVerdict {
        self.evaluate_at(state, token::now_epoch())
    }

    /// Evaluate at a fixed epoch-seconds instant.
    pub fn evaluate_at(&self, state: &SessionState, now: u64) -> GuardVerdict {
        if state.is_loading {
            return GuardVerdict::Pending;
        }
        if !self.require_auth {
            return GuardVerdict::Allow;
        }

        let Some(token) = state.token.as_deref() else {
            return GuardVerdict::RedirectToLogin;
        };
        if token::is_expired_at(token, now) {
            return GuardVerdict::RedirectToLogin;
        }
        // is_expired_at already proved the token decodes
        let Some(claims) = token::decode(token) else {
            return GuardVerdict::RedirectToLogin;
        };

        if let Some(allowed) = &self.allowed_roles {
            if !allowed.contains(&claims.role) {
                return GuardVerdict::RedirectToUnauthorized;
            }
        }

        GuardVerdict::Allow
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}
