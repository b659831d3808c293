// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! CampusDesk client core
//!
//! Client-side session handling for the CampusDesk student-management
//! application: signature-less session token decoding, a persisted session
//! store with an enumerated write path, and role-based route gating. The
//! REST API is consumed through a typed client; token issuance and
//! signature verification stay server-side.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod session;
pub mod storage;
pub mod token;
