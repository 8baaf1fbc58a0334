//! Repository for the `courses` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::course::Course;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, credits, department_id";

/// Provides CRUD operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        credits: i32,
        department_id: Option<DbId>,
    ) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (title, credits, department_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(title)
            .bind(credits)
            .bind(department_id)
            .fetch_one(pool)
            .await
    }
}
