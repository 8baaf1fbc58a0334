//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use registrar_core::error::CoreError;
use registrar_core::roles::Role;
use registrar_core::types::DbId;
use registrar_db::repositories::{PersonRepo, RoleRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/auth/login
///
/// The login flow's landing point. Out-of-scope directory requests are
/// redirected here; a JSON client answers by POSTing credentials.
pub async fn login_prompt() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Authentication required. POST email and password to this URL."
    }))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    // 1. Find the person by email, the identity natural key.
    let person = PersonRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    // 2. Verify the password.
    let password_valid = verify_password(&input.password, &person.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    // 3. Resolve the principal's primary role for the token claims.
    let role_names = RoleRepo::names_for(&state.pool, person.id).await?;
    let role = primary_role(&role_names).ok_or_else(|| {
        AppError::Core(CoreError::Forbidden("Account holds no role".into()))
    })?;

    // 4. Issue the access token.
    let access_token = generate_access_token(person.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: person.id,
            last_name: person.last_name,
            first_name: person.first_name,
            email: person.email,
            role,
        },
    }))
}

/// Pick the most privileged role a person holds: Admin over Instructor over
/// Student. Unknown role names are ignored.
fn primary_role(names: &[String]) -> Option<Role> {
    let mut best: Option<Role> = None;
    for name in names {
        let Ok(role) = name.parse::<Role>() else {
            continue;
        };
        best = Some(match (best, role) {
            (_, Role::Admin) | (Some(Role::Admin), _) => Role::Admin,
            (Some(Role::Instructor), _) | (_, Role::Instructor) => Role::Instructor,
            _ => Role::Student,
        });
    }
    best
}
