//! Handlers for the `/departments` resource (read-only; rows come from the
//! seed pipeline).

use axum::extract::State;
use axum::Json;

use registrar_db::models::department::Department;
use registrar_db::repositories::DepartmentRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/departments
///
/// List all departments. Any authenticated caller.
pub async fn list_departments(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: departments }))
}
