//! Repository for the `people` table.

use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, last_name, first_name, email, password_hash, \
                       email_confirmed, created_at, updated_at";

/// Provides operations over identity rows that have no subtype (e.g. the
/// admin account) plus lookups shared by all identities.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a bare identity row, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO people (last_name, first_name, email, password_hash, email_confirmed)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.last_name)
            .bind(&input.first_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(input.email_confirmed)
            .fetch_one(pool)
            .await
    }

    /// Find a person by email, the identity natural key (case-insensitive,
    /// matching how the seed pipeline checks existence).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, Person>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}
