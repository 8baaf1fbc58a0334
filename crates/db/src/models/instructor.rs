//! Instructor entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::DbId;

/// One instructor (identity + hire date).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstructorRow {
    pub id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub hire_date: NaiveDate,
}

/// DTO for creating an instructor (identity row plus subtype row, one
/// transaction).
#[derive(Debug)]
pub struct CreateInstructor {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    pub hire_date: NaiveDate,
}
