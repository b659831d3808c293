// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Student record endpoints: self-service update plus the admin CRUD
//! behind the students table.

use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Student, StudentStatus, StudentsResponse};

/// Partial student-record patch; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrollment_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StudentStatus>,
}

/// Payload for creating a student record against an existing user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    /// ID of the user the record belongs to
    pub user: String,
    pub course: String,
    pub enrollment_year: u32,
    pub status: StudentStatus,
}

/// `/students/me` wraps the record in a `student` envelope.
#[derive(Debug, Deserialize)]
struct StudentEnvelope {
    student: Student,
}

impl ApiClient {
    /// `PATCH /students/me` — the response drives
    /// `SessionStore::update_student_data`.
    pub async fn update_my_student_data(
        &self,
        token: &str,
        patch: &StudentPatch,
    ) -> ApiResult<Student> {
        let response = self
            .http
            .patch(self.url("/students/me"))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        let envelope: StudentEnvelope = Self::handle(response).await?;
        Ok(envelope.student)
    }

    /// `GET /students` — admin listing.
    pub async fn list_students(&self, token: &str) -> ApiResult<StudentsResponse> {
        let response = self
            .http
            .get(self.url("/students"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// `POST /students` — admin create.
    pub async fn create_student(&self, token: &str, student: &NewStudent) -> ApiResult<Student> {
        let response = self
            .http
            .post(self.url("/students"))
            .bearer_auth(token)
            .json(student)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// `PUT /students/{id}` — admin update.
    pub async fn update_student(
        &self,
        token: &str,
        id: &str,
        patch: &StudentPatch,
    ) -> ApiResult<Student> {
        let response = self
            .http
            .put(self.url(&format!("/students/{id}")))
            .bearer_auth(token)
            .json(patch)
            .send()
            .await?;
        Self::handle(response).await
    }

    /// `DELETE /students/{id}` — admin delete.
    pub async fn delete_student(&self, token: &str, id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/students/{id}")))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_for(status, response).await)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_patch_wire_format() {
        let patch = StudentPatch {
            course: Some("Physics".to_string()),
            enrollment_year: None,
            status: Some(StudentStatus::Graduated),
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["course"], "Physics");
        assert_eq!(json["status"], "Graduated");
        assert!(json.get("enrollmentYear").is_none());
    }
}
