//! Startup seeding: roles, the admin user, sample people, and departments.
//!
//! [`initialize`] runs once at process startup, before the listener binds,
//! as an ordered pipeline of idempotent stages. Every stage checks for
//! existing data by natural key (role name, email, "any rows of type T")
//! before inserting, so re-running the pipeline after a partial failure
//! resumes from whatever already succeeded; there is no cross-stage
//! transaction to roll back. Stage order is significant: roles must exist
//! before anything is added to them.
//!
//! Concurrent seeding from multiple process instances is not supported;
//! single-instance startup is assumed. The `uq_people_email` and
//! `uq_roles_name` constraints make a racing second instance fail fast
//! instead of writing duplicates.

use chrono::NaiveDate;

use registrar_core::identity::validate_profile;
use registrar_core::roles::Role;
use registrar_db::models::department::NewDepartment;
use registrar_db::models::instructor::CreateInstructor;
use registrar_db::models::person::CreatePerson;
use registrar_db::models::role::RoleRow;
use registrar_db::models::student::CreateStudent;
use registrar_db::repositories::{
    DepartmentRepo, InstructorRepo, PersonRepo, RoleRepo, StudentRepo,
};
use registrar_db::DbPool;

use crate::auth::password::hash_password;

/// The admin account's natural key.
pub const ADMIN_EMAIL: &str = "kim.abercrombie@contoso.com";
const ADMIN_PASSWORD: &str = "Admin123!";
const STUDENT_PASSWORD: &str = "Student123@";
const INSTRUCTOR_PASSWORD: &str = "Instructor123!";

/// Fixed sample people. Email is derived from the name, so the lists are
/// also the natural keys the pipeline would check against.
const SEED_STUDENTS: &[(&str, &str, &str)] = &[
    // (first, last, enrollment date)
    ("Carson", "Alexander", "2019-09-01"),
    ("Meredith", "Alonso", "2017-09-01"),
];

const SEED_INSTRUCTORS: &[(&str, &str, &str)] = &[
    // (first, last, hire date)
    ("Kim", "Abercrombie", "1995-03-11"),
    ("Fadi", "Fakhouri", "2002-07-06"),
];

const SEED_DEPARTMENTS: &[(&str, i64, &str)] = &[
    // (name, budget, start date)
    ("English", 350_000, "2007-09-01"),
    ("Mathematics", 100_000, "2007-09-01"),
];

/// A seeding failure. `Validation` is fatal by design: the service must not
/// start with an inconsistent seed.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Identity creation rejected a profile; carries every message, joined.
    #[error("Seed validation failed: {0}")]
    Validation(String),

    #[error("Seed database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Seed password hashing error: {0}")]
    Hash(String),
}

/// Run the full seed pipeline against a migrated database.
pub async fn initialize(pool: &DbPool) -> Result<(), SeedError> {
    // Stage 1: the Admin role, required before the admin user can hold it.
    let admin_role = ensure_role(pool, Role::Admin).await?;

    // Stage 2: the admin user itself.
    ensure_admin_user(pool, &admin_role).await?;

    // Stage 3: the remaining roles, required before sample people get them.
    let instructor_role = ensure_role(pool, Role::Instructor).await?;
    let student_role = ensure_role(pool, Role::Student).await?;

    // Stage 4: sample students, only when the student set is entirely empty.
    if !StudentRepo::any_exist(pool).await? {
        seed_students(pool, &student_role).await?;
    } else {
        tracing::debug!("Students already present, skipping sample students");
    }

    // Stage 5: sample instructors, same set-level guard.
    if !InstructorRepo::any_exist(pool).await? {
        seed_instructors(pool, &instructor_role).await?;
    } else {
        tracing::debug!("Instructors already present, skipping sample instructors");
    }

    // Stage 6: departments, bulk insert in a single commit.
    if !DepartmentRepo::any_exist(pool).await? {
        let departments: Vec<NewDepartment> = SEED_DEPARTMENTS
            .iter()
            .map(|&(name, budget, start)| NewDepartment {
                name: name.to_string(),
                budget,
                start_date: seed_date(start),
            })
            .collect();
        DepartmentRepo::insert_many(pool, &departments).await?;
        tracing::info!(count = departments.len(), "Seeded departments");
    } else {
        tracing::debug!("Departments already present, skipping seed");
    }

    tracing::info!("Database seeding completed");
    Ok(())
}

/// Create the role unless a row with that name already exists.
async fn ensure_role(pool: &DbPool, role: Role) -> Result<RoleRow, SeedError> {
    if let Some(existing) = RoleRepo::find_by_name(pool, role.name()).await? {
        return Ok(existing);
    }
    let created = RoleRepo::create(pool, role.name()).await?;
    tracing::info!(role = %role, "Created role");
    Ok(created)
}

/// Look up the admin user by email; create it if absent. Either way, make
/// sure it actually holds the Admin role.
async fn ensure_admin_user(pool: &DbPool, admin_role: &RoleRow) -> Result<(), SeedError> {
    let admin = match PersonRepo::find_by_email(pool, ADMIN_EMAIL).await? {
        Some(existing) => existing.id,
        None => {
            checked_profile("Kim", "Abercrombie", ADMIN_EMAIL)?;
            let created = PersonRepo::create(
                pool,
                &CreatePerson {
                    last_name: "Abercrombie".to_string(),
                    first_name: "Kim".to_string(),
                    email: ADMIN_EMAIL.to_string(),
                    password_hash: seed_hash(ADMIN_PASSWORD)?,
                    email_confirmed: true,
                },
            )
            .await?;
            tracing::info!(email = ADMIN_EMAIL, "Created admin user");
            created.id
        }
    };

    if !RoleRepo::is_in_role(pool, admin, Role::Admin.name()).await? {
        RoleRepo::assign(pool, admin, admin_role.id).await?;
        tracing::info!(email = ADMIN_EMAIL, "Granted Admin role");
    }
    Ok(())
}

async fn seed_students(pool: &DbPool, student_role: &RoleRow) -> Result<(), SeedError> {
    for &(first, last, date) in SEED_STUDENTS {
        let email = derived_email(first, last);
        checked_profile(first, last, &email)?;

        let student = StudentRepo::create(
            pool,
            &CreateStudent {
                last_name: last.to_string(),
                first_name: first.to_string(),
                email,
                password_hash: seed_hash(STUDENT_PASSWORD)?,
                email_confirmed: true,
                enrollment_date: seed_date(date),
            },
        )
        .await?;

        RoleRepo::assign(pool, student.id, student_role.id).await?;
    }
    tracing::info!(count = SEED_STUDENTS.len(), "Seeded sample students");
    Ok(())
}

async fn seed_instructors(pool: &DbPool, instructor_role: &RoleRow) -> Result<(), SeedError> {
    for &(first, last, date) in SEED_INSTRUCTORS {
        let email = derived_email(first, last);
        checked_profile(first, last, &email)?;

        let instructor = InstructorRepo::create(
            pool,
            &CreateInstructor {
                last_name: last.to_string(),
                first_name: first.to_string(),
                email,
                password_hash: seed_hash(INSTRUCTOR_PASSWORD)?,
                email_confirmed: true,
                hire_date: seed_date(date),
            },
        )
        .await?;

        RoleRepo::assign(pool, instructor.id, instructor_role.id).await?;
    }
    tracing::info!(count = SEED_INSTRUCTORS.len(), "Seeded sample instructors");
    Ok(())
}

/// Username/email derived deterministically from the name.
fn derived_email(first: &str, last: &str) -> String {
    format!("{}.{}@school.com", first.to_lowercase(), last.to_lowercase())
}

/// Validate a seed profile, aggregating every message into one fatal error.
fn checked_profile(first: &str, last: &str, email: &str) -> Result<(), SeedError> {
    validate_profile(last, first, email).map_err(|errors| SeedError::Validation(errors.join(", ")))
}

fn seed_hash(password: &str) -> Result<String, SeedError> {
    hash_password(password).map_err(|e| SeedError::Hash(e.to_string()))
}

/// Parse one of the fixed seed-date literals.
fn seed_date(s: &str) -> NaiveDate {
    s.parse().expect("seed date literals are valid ISO dates")
}
