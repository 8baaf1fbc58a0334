//! Person entity model and DTOs.

use sqlx::FromRow;

use registrar_core::types::{DbId, Timestamp};

/// Full person row from the `people` table.
///
/// Contains the password hash -- never serialize this to API responses.
/// The api crate builds its own response types from the fields it needs.
#[derive(Debug, Clone, FromRow)]
pub struct Person {
    pub id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new identity row.
#[derive(Debug)]
pub struct CreatePerson {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password_hash: String,
    pub email_confirmed: bool,
}
