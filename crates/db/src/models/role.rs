//! Role entity model.

use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

/// A role row from the `roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoleRow {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
