// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use campus_desk::models::{Role, StudentData, StudentStatus, UserProfile};
use chrono::{TimeZone, Utc};

/// Build a session token with the given claims. The signature segment is
/// junk: the client never verifies it, only the server does.
#[allow(dead_code)]
pub fn make_token(id: &str, role: &str, iat: u64, exp: u64) -> String {
    let payload = format!(r#"{{"id":"{id}","role":"{role}","iat":{iat},"exp":{exp}}}"#);
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.as_bytes()),
        URL_SAFE_NO_PAD.encode(b"test-signature")
    )
}

/// A token valid for the next hour.
#[allow(dead_code)]
pub fn current_token(id: &str, role: &str) -> String {
    let now = campus_desk::token::now_epoch();
    make_token(id, role, now, now + 3600)
}

/// A token that expired a minute ago.
#[allow(dead_code)]
pub fn expired_token(id: &str, role: &str) -> String {
    let now = campus_desk::token::now_epoch();
    make_token(id, role, now - 3600, now - 60)
}

#[allow(dead_code)]
pub fn student_profile(id: &str) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        full_name: "Test Student".to_string(),
        email: format!("{id}@example.com"),
        phone: "5551234567".to_string(),
        role: Role::Student,
        profile_picture: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 20, 10, 0, 0).unwrap(),
        student_data: Some(StudentData {
            course: "Mathematics".to_string(),
            enrollment_year: 2024,
            status: StudentStatus::Active,
        }),
    }
}

#[allow(dead_code)]
pub fn admin_profile(id: &str) -> UserProfile {
    UserProfile {
        role: Role::Admin,
        full_name: "Test Admin".to_string(),
        student_data: None,
        ..student_profile(id)
    }
}
