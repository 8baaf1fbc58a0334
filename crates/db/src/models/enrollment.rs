//! Enrollment entity model.

use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::DbId;

/// An enrollment joined with its course title, as shown on the student
/// detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EnrollmentWithCourse {
    pub id: DbId,
    pub course_id: DbId,
    pub course_title: String,
    pub grade: Option<String>,
}
