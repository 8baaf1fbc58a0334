//! Repository for the `roles` and `person_roles` tables.

use sqlx::PgPool;

use registrar_core::types::DbId;

use crate::models::role::RoleRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides role rows and role-membership operations.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by name, its natural key.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<RoleRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE name = $1");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new role, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<RoleRow, sqlx::Error> {
        let query = format!("INSERT INTO roles (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, RoleRow>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Whether the person holds the named role.
    pub async fn is_in_role(
        pool: &PgPool,
        person_id: DbId,
        role_name: &str,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM person_roles pr
                 JOIN roles r ON r.id = pr.role_id
                 WHERE pr.person_id = $1 AND r.name = $2
             )",
        )
        .bind(person_id)
        .bind(role_name)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Add the person to the role. A no-op if the membership already exists.
    pub async fn assign(pool: &PgPool, person_id: DbId, role_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO person_roles (person_id, role_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(person_id)
        .bind(role_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Names of every role the person holds, ordered by role ID.
    pub async fn names_for(pool: &PgPool, person_id: DbId) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT r.name FROM person_roles pr
             JOIN roles r ON r.id = pr.role_id
             WHERE pr.person_id = $1
             ORDER BY r.id ASC",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
