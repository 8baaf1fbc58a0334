//! Handlers for the `/students` resource.
//!
//! The listing and detail views are scoped by [`crate::access`] before any
//! query runs; everything mutating requires the admin capability.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use registrar_core::directory::{DirectoryRequest, StudentSort};
use registrar_core::error::CoreError;
use registrar_core::identity::{validate_name, validate_profile};
use registrar_core::pagination::Page;
use registrar_core::types::DbId;
use registrar_db::models::student::{CreateStudent, StudentDetail, StudentRow, UpdateStudent};
use registrar_db::repositories::{EnrollmentRepo, RoleRepo, StudentRepo};

use crate::access::{self, DetailScope, ListingScope, LOGIN_PATH};
use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum password length for admin-created students.
const MIN_PASSWORD_LENGTH: usize = 4;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One directory page plus the sort/filter state needed to re-display the
/// search controls.
#[derive(Debug, Serialize)]
pub struct DirectoryPage {
    pub current_sort: StudentSort,
    pub current_filter: Option<String>,
    #[serde(flatten)]
    pub page: Page<StudentRow>,
}

/// Request body for `POST /students`.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub enrollment_date: NaiveDate,
}

// ---------------------------------------------------------------------------
// Listing and detail (role-scoped)
// ---------------------------------------------------------------------------

/// GET /api/v1/students
///
/// Role-scoped, searchable, sortable, paginated directory. Students are
/// redirected to their own detail view; callers without directory access go
/// to the login flow.
pub async fn list_students(
    State(state): State<AppState>,
    MaybeAuthUser(principal): MaybeAuthUser,
    Query(request): Query<DirectoryRequest>,
) -> AppResult<Response> {
    match access::scope_listing(principal.as_ref()) {
        ListingScope::FullDirectory => {
            let query = request.resolve();
            let page = StudentRepo::search_page(
                &state.pool,
                query.filter.as_deref(),
                query.sort,
                query.page_number,
                state.config.directory_page_size,
            )
            .await?;

            Ok(Json(DataResponse {
                data: DirectoryPage {
                    current_sort: query.sort,
                    current_filter: query.filter,
                    page,
                },
            })
            .into_response())
        }
        ListingScope::OwnRecord(id) => Ok(Redirect::to(&access::detail_path(id)).into_response()),
        ListingScope::Login => Ok(Redirect::to(LOGIN_PATH).into_response()),
    }
}

/// GET /api/v1/students/{id}
///
/// Single-record detail view with enrollments and course titles. A student
/// asking for a record other than their own is silently redirected to their
/// own detail URL.
pub async fn get_student(
    State(state): State<AppState>,
    MaybeAuthUser(principal): MaybeAuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    match access::scope_detail(principal.as_ref(), id) {
        DetailScope::Allowed => {
            let student = StudentRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "student",
                    id,
                }))?;
            let enrollments = EnrollmentRepo::list_for_student(&state.pool, id).await?;

            let detail = StudentDetail {
                id: student.id,
                last_name: student.last_name,
                first_name: student.first_name,
                email: student.email,
                enrollment_date: student.enrollment_date,
                enrollments,
            };
            Ok(Json(DataResponse { data: detail }).into_response())
        }
        DetailScope::RedirectTo(own_id) => {
            Ok(Redirect::to(&access::detail_path(own_id)).into_response())
        }
        DetailScope::Login => Ok(Redirect::to(LOGIN_PATH).into_response()),
    }
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/students
///
/// Create a student with an identity record and the Student role. Validation
/// failures return 400 with every message; nothing is persisted.
pub async fn create_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateStudentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<StudentRow>>)> {
    validate_profile(&input.last_name, &input.first_name, &input.email)
        .map_err(|errors| AppError::Core(CoreError::Validation(errors.join(", "))))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateStudent {
        last_name: input.last_name,
        first_name: input.first_name,
        email: input.email,
        password_hash,
        email_confirmed: false,
        enrollment_date: input.enrollment_date,
    };

    let student = StudentRepo::create(&state.pool, &create_dto).await?;

    // Grant the Student role; the seed pipeline guarantees the role exists.
    if let Some(role) = RoleRepo::find_by_name(&state.pool, "Student").await? {
        RoleRepo::assign(&state.pool, student.id, role.id).await?;
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// PUT /api/v1/students/{id}
///
/// Partial update. A row deleted since the caller loaded it reports 404
/// rather than a conflict; other store conflicts surface as-is.
pub async fn update_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<Json<DataResponse<StudentRow>>> {
    let mut errors = Vec::new();
    if let Some(last) = &input.last_name {
        if let Err(msg) = validate_name("Last name", last) {
            errors.push(msg);
        }
    }
    if let Some(first) = &input.first_name {
        if let Err(msg) = validate_name("First name", first) {
            errors.push(msg);
        }
    }
    if !errors.is_empty() {
        return Err(AppError::Core(CoreError::Validation(errors.join(", "))));
    }

    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }))?;

    Ok(Json(DataResponse { data: student }))
}

/// DELETE /api/v1/students/{id}
///
/// Delete a student; enrollments go with it via FK cascade.
pub async fn delete_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = StudentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "student",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
