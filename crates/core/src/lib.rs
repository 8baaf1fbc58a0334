//! Domain logic for the registrar service, free of I/O.
//!
//! - [`roles`] -- closed role set and capability checks.
//! - [`identity`] -- person-profile validation with aggregated messages.
//! - [`pagination`] -- page metadata and offset math for limit/offset paging.
//! - [`directory`] -- normalization of student-directory query parameters.
//! - [`error`] -- the shared domain error taxonomy.

pub mod directory;
pub mod error;
pub mod identity;
pub mod pagination;
pub mod roles;
pub mod types;
