//! Repository for the `departments` table.

use sqlx::PgPool;

use crate::models::department::{Department, NewDepartment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, budget, start_date";

/// Provides read and seed operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List all departments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name ASC");
        sqlx::query_as::<_, Department>(&query).fetch_all(pool).await
    }

    /// Whether any department rows exist at all (seed stage guard).
    pub async fn any_exist(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM departments)")
            .fetch_one(pool)
            .await?;
        Ok(exists)
    }

    /// Bulk-insert departments in a single transaction (single commit).
    pub async fn insert_many(
        pool: &PgPool,
        departments: &[NewDepartment],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        for dept in departments {
            sqlx::query("INSERT INTO departments (name, budget, start_date) VALUES ($1, $2, $3)")
                .bind(&dept.name)
                .bind(dept.budget)
                .bind(dept.start_date)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
