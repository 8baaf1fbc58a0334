//! Closed role set and capability checks.
//!
//! Role names are the natural keys used for existence checks during seeding,
//! so they must match the rows the seed pipeline creates. Authorization
//! decisions go through [`Role::has_capability`] rather than comparing role
//! name strings at call sites.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A capability a principal may hold. Handlers ask for capabilities, not
/// role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Browse the full student directory (search, sort, paginate).
    ViewAllStudents,
    /// Create, edit, and delete student records.
    ManageStudents,
    /// View the single record belonging to the principal.
    ViewOwnRecord,
}

/// The three roles the system knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

/// Every role the seed pipeline must guarantee exists, in seeding order.
pub const REQUIRED_ROLES: [Role; 3] = [Role::Admin, Role::Instructor, Role::Student];

impl Role {
    /// The role's natural key as stored in the `roles` table.
    pub fn name(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
        }
    }

    /// Whether this role grants the given capability.
    pub fn has_capability(self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Student, Capability::ViewOwnRecord) => true,
            (Role::Student, _) => false,
            (Role::Instructor, _) => false,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a role name does not match any known role.
#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Instructor" => Ok(Role::Instructor),
            "Student" => Ok(Role::Student),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_holds_every_capability() {
        for cap in [
            Capability::ViewAllStudents,
            Capability::ManageStudents,
            Capability::ViewOwnRecord,
        ] {
            assert!(Role::Admin.has_capability(cap), "admin should hold {cap:?}");
        }
    }

    #[test]
    fn test_student_sees_only_own_record() {
        assert!(Role::Student.has_capability(Capability::ViewOwnRecord));
        assert!(!Role::Student.has_capability(Capability::ViewAllStudents));
        assert!(!Role::Student.has_capability(Capability::ManageStudents));
    }

    #[test]
    fn test_instructor_is_denied_directory_access() {
        assert!(!Role::Instructor.has_capability(Capability::ViewAllStudents));
        assert!(!Role::Instructor.has_capability(Capability::ViewOwnRecord));
    }

    #[test]
    fn test_role_names_round_trip() {
        for role in REQUIRED_ROLES {
            assert_eq!(role.name().parse::<Role>().unwrap(), role);
        }
        assert!("superuser".parse::<Role>().is_err());
    }
}
