//! Repository for the `instructors` table (joined with `people`).

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::instructor::{CreateInstructor, InstructorRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id, p.last_name, p.first_name, p.email, i.hire_date";

const FROM: &str = "FROM instructors i JOIN people p ON p.id = i.person_id";

/// Provides CRUD operations for instructors.
pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert an instructor: identity row plus subtype row, one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructor,
    ) -> Result<InstructorRow, sqlx::Error> {
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

        sqlx::query("INSERT INTO instructors (person_id, hire_date) VALUES ($1, $2)")
            .bind(id)
            .bind(input.hire_date)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(InstructorRow {
            id,
            last_name: input.last_name.clone(),
            first_name: input.first_name.clone(),
            email: input.email.clone(),
            hire_date: input.hire_date,
        })
    }

    /// List all instructors ordered by last name.
    pub async fn list(pool: &PgPool) -> Result<Vec<InstructorRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} ORDER BY p.last_name ASC");
        sqlx::query_as::<_, InstructorRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Whether any instructor rows exist at all (seed stage guard).
    pub async fn any_exist(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM instructors)")
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }
}
