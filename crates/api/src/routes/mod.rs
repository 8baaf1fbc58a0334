pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login            GET login prompt (redirect target), POST login
///
/// /students              GET role-scoped directory, POST create (admin)
/// /students/{id}         GET detail (scope-corrected), PUT update, DELETE
///
/// /instructors           GET list (admin)
///
/// /departments           GET list (any authenticated caller)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/login",
            get(handlers::auth::login_prompt).post(handlers::auth::login),
        )
        .route(
            "/students",
            get(handlers::students::list_students).post(handlers::students::create_student),
        )
        .route(
            "/students/{id}",
            get(handlers::students::get_student)
                .put(handlers::students::update_student)
                .delete(handlers::students::delete_student),
        )
        .route("/instructors", get(handlers::instructors::list_instructors))
        .route("/departments", get(handlers::departments::list_departments))
}
