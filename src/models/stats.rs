//! Pre-aggregated counts for the admin dashboard.
//!
//! The server computes these; the client only decodes and displays them.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Response of `GET /user/admin/dashboard-stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DashboardStats {
    pub users: UserTotals,
    pub students: StudentTotals,
}

/// Account totals by role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserTotals {
    pub total_users: u64,
    pub total_students: u64,
    pub total_admins: u64,
}

/// Student record totals by enrollment status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct StudentTotals {
    pub total_student_records: u64,
    pub active_students: u64,
    pub graduated_students: u64,
    pub dropped_students: u64,
}
