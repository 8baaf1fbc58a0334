//! Course entity model.

use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::DbId;

/// A course row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub title: String,
    pub credits: i32,
    pub department_id: Option<DbId>,
}
