//! Repository-level tests for the student directory query: filtering,
//! sorting, and the one-count-one-fetch pagination contract.

use chrono::NaiveDate;
use sqlx::PgPool;

use registrar_core::directory::StudentSort;
use registrar_db::models::student::{CreateStudent, UpdateStudent};
use registrar_db::repositories::{CourseRepo, EnrollmentRepo, StudentRepo};

fn student(last: &str, first: &str, date: &str) -> CreateStudent {
    CreateStudent {
        last_name: last.to_string(),
        first_name: first.to_string(),
        email: format!("{}.{}@school.com", first.to_lowercase(), last.to_lowercase()),
        password_hash: "not-a-real-hash".to_string(),
        email_confirmed: true,
        enrollment_date: date.parse::<NaiveDate>().unwrap(),
    }
}

async fn seed_three(pool: &PgPool) {
    for s in [
        student("Alexander", "Carson", "2019-09-01"),
        student("Alonso", "Meredith", "2017-09-01"),
        student("Fakhouri", "Wadi", "2021-09-01"),
    ] {
        StudentRepo::create(pool, &s).await.unwrap();
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_matches_last_name_substring_only(pool: PgPool) {
    seed_three(&pool).await;

    let page = StudentRepo::search_page(&pool, Some("Alex"), StudentSort::NameAsc, 1, 3)
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].last_name, "Alexander");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_search_is_case_insensitive_and_checks_first_name(pool: PgPool) {
    seed_three(&pool).await;

    let page = StudentRepo::search_page(&pool, Some("meredith"), StudentSort::NameAsc, 1, 3)
        .await
        .unwrap();

    assert_eq!(page.total_items, 1);
    assert_eq!(page.items[0].last_name, "Alonso");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sort_orders(pool: PgPool) {
    seed_three(&pool).await;

    // Every sort key, against the known names/dates of the three rows.
    let cases = [
        (StudentSort::NameAsc, ["Alexander", "Alonso", "Fakhouri"]),
        (StudentSort::NameDesc, ["Fakhouri", "Alonso", "Alexander"]),
        (StudentSort::DateAsc, ["Alonso", "Alexander", "Fakhouri"]),
        (StudentSort::DateDesc, ["Fakhouri", "Alexander", "Alonso"]),
    ];

    for (sort, expected) in cases {
        let page = StudentRepo::search_page(&pool, None, sort, 1, 10)
            .await
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|s| s.last_name.as_str()).collect();
        assert_eq!(names, expected, "sort {sort:?}");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pagination_partitions_and_clamps(pool: PgPool) {
    seed_three(&pool).await;

    // Page size 2 over 3 rows: pages of 2 and 1, correct metadata.
    let first = StudentRepo::search_page(&pool, None, StudentSort::NameAsc, 1, 2)
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_items, 3);
    assert_eq!(first.total_pages, 2);
    assert!(!first.has_previous);
    assert!(first.has_next);

    let second = StudentRepo::search_page(&pool, None, StudentSort::NameAsc, 2, 2)
        .await
        .unwrap();
    assert_eq!(second.items.len(), 1);
    assert!(second.has_previous);
    assert!(!second.has_next);

    // Page 0 behaves exactly like page 1.
    let clamped = StudentRepo::search_page(&pool, None, StudentSort::NameAsc, 0, 2)
        .await
        .unwrap();
    assert_eq!(clamped.page_number, 1);
    assert_eq!(clamped.items.len(), 2);

    // A page past the end is empty but keeps valid metadata.
    let past = StudentRepo::search_page(&pool, None, StudentSort::NameAsc, 9, 2)
        .await
        .unwrap();
    assert!(past.items.is_empty());
    assert_eq!(past.total_items, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_of_missing_row_reports_none(pool: PgPool) {
    let input = UpdateStudent {
        last_name: Some("Renamed".into()),
        first_name: None,
        enrollment_date: None,
    };
    let updated = StudentRepo::update(&pool, 4242, &input).await.unwrap();
    assert!(updated.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_cascades_to_enrollments(pool: PgPool) {
    seed_three(&pool).await;
    let alex = StudentRepo::search_page(&pool, Some("Alexander"), StudentSort::NameAsc, 1, 1)
        .await
        .unwrap()
        .items
        .remove(0);

    let course = CourseRepo::create(&pool, "Chemistry", 3, None).await.unwrap();
    EnrollmentRepo::create(&pool, alex.id, course.id, Some("A"))
        .await
        .unwrap();

    assert!(StudentRepo::delete(&pool, alex.id).await.unwrap());
    assert!(StudentRepo::find_by_id(&pool, alex.id).await.unwrap().is_none());

    let orphans: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM enrollments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphans.0, 0, "enrollments should be cascade-deleted");

    // Deleting again reports false, not an error.
    assert!(!StudentRepo::delete(&pool, alex.id).await.unwrap());
}
