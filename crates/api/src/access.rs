//! Access scoping for the student directory.
//!
//! Decides, from the caller's role and identity, which records a request may
//! even be built over -- before any query executes. Students are narrowed to
//! their own record by redirect rather than rejected outright: a student
//! asking for the list, or for someone else's detail view, is silently sent
//! to their own detail URL. This scope-correcting redirect masks attempted
//! cross-account access instead of reporting it; it is deliberate, inherited
//! behavior, kept as-is.

use registrar_core::roles::{Capability, Role};
use registrar_core::types::DbId;

use crate::middleware::auth::AuthUser;

/// Where unauthenticated or out-of-scope callers are sent.
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

/// The detail URL for a given student.
pub fn detail_path(id: DbId) -> String {
    format!("/api/v1/students/{id}")
}

/// Outcome of scoping a directory listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingScope {
    /// Admin-class caller: the full directory query may run.
    FullDirectory,
    /// Student: never shown the list; sent to their own detail view.
    OwnRecord(DbId),
    /// No access at all: sent to the login flow.
    Login,
}

/// Scope a listing request. Runs before any query is built.
pub fn scope_listing(principal: Option<&AuthUser>) -> ListingScope {
    match principal {
        Some(user) if user.role.has_capability(Capability::ViewAllStudents) => {
            ListingScope::FullDirectory
        }
        Some(user) if user.role.has_capability(Capability::ViewOwnRecord) => {
            ListingScope::OwnRecord(user.person_id)
        }
        _ => ListingScope::Login,
    }
}

/// Outcome of scoping a single-record detail request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailScope {
    /// The requested record may be fetched.
    Allowed,
    /// Student asking for someone else's record: silently corrected to
    /// their own detail view.
    RedirectTo(DbId),
    /// No access at all: sent to the login flow.
    Login,
}

/// Scope a detail request for `requested_id`.
pub fn scope_detail(principal: Option<&AuthUser>, requested_id: DbId) -> DetailScope {
    match principal {
        Some(user) if user.role.has_capability(Capability::ViewAllStudents) => DetailScope::Allowed,
        Some(user) if user.role.has_capability(Capability::ViewOwnRecord) => {
            if user.person_id == requested_id {
                DetailScope::Allowed
            } else {
                DetailScope::RedirectTo(user.person_id)
            }
        }
        _ => DetailScope::Login,
    }
}
