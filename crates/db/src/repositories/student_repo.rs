//! Repository for the `students` table (joined with `people`).

use sqlx::PgPool;

use registrar_core::directory::StudentSort;
use registrar_core::pagination::{offset, Page};
use registrar_core::types::DbId;

use crate::models::student::{CreateStudent, StudentRow, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.last_name, p.first_name, p.email, s.enrollment_date";

/// The FROM clause every student query starts from.
const FROM: &str = "FROM students s JOIN people p ON p.id = s.person_id";

/// Provides CRUD and directory queries for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a student: identity row plus subtype row, one transaction.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<StudentRow, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO people (last_name, first_name, email, password_hash, email_confirmed)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.last_name)
        .bind(&input.first_name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(input.email_confirmed)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO students (person_id, enrollment_date) VALUES ($1, $2)")
            .bind(id)
            .bind(input.enrollment_date)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(StudentRow {
            id,
            last_name: input.last_name.clone(),
            first_name: input.first_name.clone(),
            email: input.email.clone(),
            enrollment_date: input.enrollment_date,
        })
    }

    /// Find a student by person ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudentRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.id = $1");
        sqlx::query_as::<_, StudentRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any student rows exist at all. The seed pipeline's stage
    /// guard: set-level, not per-record.
    pub async fn any_exist(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM students)")
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Fetch one directory page: exactly one COUNT and one bounded fetch.
    ///
    /// `filter` is a case-insensitive substring matched against last name OR
    /// first/middle name. The full result set is never materialized.
    pub async fn search_page(
        pool: &PgPool,
        filter: Option<&str>,
        sort: StudentSort,
        page_number: i64,
        page_size: i64,
    ) -> Result<Page<StudentRow>, sqlx::Error> {
        let pattern = filter.map(like_pattern);

        let count_query = format!(
            "SELECT COUNT(*) {FROM}
             WHERE $1::text IS NULL OR p.last_name ILIKE $1 OR p.first_name ILIKE $1"
        );
        let (total_items,): (i64,) = sqlx::query_as(&count_query)
            .bind(pattern.as_deref())
            .fetch_one(pool)
            .await?;

        let fetch_query = format!(
            "SELECT {COLUMNS} {FROM}
             WHERE $1::text IS NULL OR p.last_name ILIKE $1 OR p.first_name ILIKE $1
             ORDER BY {}
             LIMIT $2 OFFSET $3",
            order_clause(sort)
        );
        let items = sqlx::query_as::<_, StudentRow>(&fetch_query)
            .bind(pattern.as_deref())
            .bind(page_size)
            .bind(offset(page_number, page_size))
            .fetch_all(pool)
            .await?;

        Ok(Page::assemble(items, page_number, page_size, total_items))
    }

    /// Apply a partial update. Returns `None` when the row no longer exists
    /// (e.g. deleted concurrently), so the caller can report not-found.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<StudentRow>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE people p SET
                 last_name = COALESCE($2, p.last_name),
                 first_name = COALESCE($3, p.first_name),
                 updated_at = now()
             FROM students s
             WHERE s.person_id = p.id AND p.id = $1",
        )
        .bind(id)
        .bind(input.last_name.as_deref())
        .bind(input.first_name.as_deref())
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(
            "UPDATE students SET enrollment_date = COALESCE($2, enrollment_date)
             WHERE person_id = $1",
        )
        .bind(id)
        .bind(input.enrollment_date)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::find_by_id(pool, id).await
    }

    /// Delete a student's identity row. Enrollments and the subtype row go
    /// with it via FK cascade. Returns `false` if no such student existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM people p
             USING students s
             WHERE s.person_id = p.id AND p.id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape LIKE metacharacters and wrap in `%…%` for substring matching.
fn like_pattern(filter: &str) -> String {
    let escaped = filter.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
    format!("%{escaped}%")
}

/// ORDER BY clause for each directory sort key.
fn order_clause(sort: StudentSort) -> &'static str {
    match sort {
        StudentSort::NameAsc => "p.last_name ASC",
        StudentSort::NameDesc => "p.last_name DESC",
        StudentSort::DateAsc => "s.enrollment_date ASC",
        StudentSort::DateDesc => "s.enrollment_date DESC",
    }
}
