//! Handlers for the `/instructors` resource.

use axum::extract::State;
use axum::Json;

use registrar_db::models::instructor::InstructorRow;
use registrar_db::repositories::InstructorRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/instructors
///
/// List all instructors. Admin only.
pub async fn list_instructors(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<InstructorRow>>>> {
    let instructors = InstructorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: instructors }))
}
