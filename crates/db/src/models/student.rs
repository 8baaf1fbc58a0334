//! Student entity model and DTOs.
//!
//! A student is a `people` identity row joined with its `students` subtype
//! row, so every query here spans both tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use registrar_core::types::DbId;

use crate::models::enrollment::EnrollmentWithCourse;

/// One student as listed in the directory (identity + enrollment date).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentRow {
    pub id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

/// Detail view of a single student, including enrollments with resolved
/// course titles.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetail {
    pub id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
    pub enrollments: Vec<EnrollmentWithCourse>,
}

/// DTO for creating a student (identity row plus subtype row, one
/// transaction).
#[derive(Debug)]
pub struct CreateStudent {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    pub enrollment_date: NaiveDate,
}

/// DTO for updating a student. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub enrollment_date: Option<NaiveDate>,
}
