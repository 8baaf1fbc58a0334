//! Department entity model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use registrar_core::types::DbId;

/// A department row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub name: String,
    pub budget: i64,
    pub start_date: NaiveDate,
}

/// DTO for the bulk department seed.
#[derive(Debug)]
pub struct NewDepartment {
    pub name: String,
    pub budget: i64,
    pub start_date: NaiveDate,
}
