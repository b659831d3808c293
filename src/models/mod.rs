// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod stats;
pub mod student;
pub mod user;

pub use stats::{DashboardStats, StudentTotals, UserTotals};
pub use student::{Student, StudentsResponse};
pub use user::{Role, StudentData, StudentStatus, UserProfile};
