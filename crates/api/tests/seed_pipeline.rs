//! End-to-end checks for the startup seed pipeline: it populates an empty
//! database completely and is a no-op on every run after that.

use sqlx::PgPool;

use registrar_api::seed;

async fn count(pool: &PgPool, table: &str) -> i64 {
    // Table names are compile-time constants from the tests below.
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar(&sql).fetch_one(pool).await.unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_populates_empty_database(pool: PgPool) {
    seed::initialize(&pool).await.unwrap();

    assert_eq!(count(&pool, "roles").await, 3);
    // Admin + 2 students + 2 instructors.
    assert_eq!(count(&pool, "people").await, 5);
    assert_eq!(count(&pool, "students").await, 2);
    assert_eq!(count(&pool, "instructors").await, 2);
    assert_eq!(count(&pool, "departments").await, 2);

    let admin_memberships: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM person_roles pr
         JOIN people p ON p.id = pr.person_id
         JOIN roles r ON r.id = pr.role_id
         WHERE p.email = $1 AND r.name = 'Admin'",
    )
    .bind(seed::ADMIN_EMAIL)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(admin_memberships, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_is_idempotent(pool: PgPool) {
    seed::initialize(&pool).await.unwrap();
    seed::initialize(&pool).await.unwrap();

    assert_eq!(count(&pool, "roles").await, 3);
    assert_eq!(count(&pool, "people").await, 5);
    assert_eq!(count(&pool, "students").await, 2);
    assert_eq!(count(&pool, "instructors").await, 2);
    assert_eq!(count(&pool, "departments").await, 2);
    assert_eq!(count(&pool, "person_roles").await, 5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_resumes_after_partial_state(pool: PgPool) {
    // Simulate a run that got as far as creating the roles, then stopped.
    for name in ["Admin", "Instructor", "Student"] {
        sqlx::query("INSERT INTO roles (name) VALUES ($1)")
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    seed::initialize(&pool).await.unwrap();

    // Existing roles are reused, everything downstream is filled in.
    assert_eq!(count(&pool, "roles").await, 3);
    assert_eq!(count(&pool, "people").await, 5);
    assert_eq!(count(&pool, "departments").await, 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_seed_skips_students_when_any_exist(pool: PgPool) {
    seed::initialize(&pool).await.unwrap();

    // Remove one sample student; the stage guard is "any rows", so a
    // second run must NOT recreate it.
    sqlx::query(
        "DELETE FROM people WHERE email = 'meredith.alonso@school.com'",
    )
    .execute(&pool)
    .await
    .unwrap();

    seed::initialize(&pool).await.unwrap();
    assert_eq!(count(&pool, "students").await, 1);
}
