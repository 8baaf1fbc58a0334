//! Repository for the `enrollments` table.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::enrollment::EnrollmentWithCourse;

/// Provides enrollment rows for the student detail view.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Enroll a student in a course.
    pub async fn create(
        pool: &PgPool,
        student_id: DbId,
        course_id: DbId,
        grade: Option<&str>,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO enrollments (student_id, course_id, grade)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(student_id)
        .bind(course_id)
        .bind(grade)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// All enrollments for a student, with course titles resolved.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<EnrollmentWithCourse>, sqlx::Error> {
        sqlx::query_as::<_, EnrollmentWithCourse>(
            "SELECT e.id, e.course_id, c.title AS course_title, e.grade
             FROM enrollments e
             JOIN courses c ON c.id = e.course_id
             WHERE e.student_id = $1
             ORDER BY c.title ASC",
        )
        .bind(student_id)
        .fetch_all(pool)
        .await
    }
}
