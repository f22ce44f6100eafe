use lms_backend::db;
use lms_backend::error::AppError;
use lms_backend::models::{Category, Course, EnrollmentStatus, Level, NewCourse};
use lms_backend::services::EnrollmentService;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

const STUDENT: &str = "dummyStudent123";

async fn setup_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");

    pool
}

async fn insert_course(pool: &SqlitePool, title: &str) -> Course {
    db::courses::insert(
        pool,
        NewCourse {
            title: title.to_string(),
            description: "A course used in tests.".to_string(),
            instructor: "Prof. Test".to_string(),
            duration: "4 weeks".to_string(),
            category: Category::Programming,
            level: Level::Beginner,
        },
    )
    .await
    .expect("failed to insert course")
}

#[tokio::test]
async fn enroll_creates_active_record_with_course_summary() {
    let pool = setup_db().await;
    let course = insert_course(&pool, "Rust for Web Developers").await;
    let service = EnrollmentService::new(pool.clone());

    let enrollment = service
        .enroll(&course.id, STUDENT)
        .await
        .expect("enroll failed");

    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.student_id, STUDENT);
    assert_eq!(enrollment.status, EnrollmentStatus::Active);
    assert_eq!(enrollment.progress, 0);
    assert_eq!(enrollment.course.id, course.id);
    assert_eq!(enrollment.course.title, "Rust for Web Developers");

    assert!(
        db::enrollments::exists(&pool, &course.id, STUDENT)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn second_enroll_for_same_pair_is_conflict() {
    let pool = setup_db().await;
    let course = insert_course(&pool, "Duplicate Check").await;
    let service = EnrollmentService::new(pool.clone());

    service.enroll(&course.id, STUDENT).await.unwrap();
    let err = service.enroll(&course.id, STUDENT).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
}

#[tokio::test]
async fn empty_course_id_is_rejected_as_validation() {
    let pool = setup_db().await;
    let service = EnrollmentService::new(pool);

    let err = service.enroll("", STUDENT).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
}

#[tokio::test]
async fn unknown_course_id_is_not_found() {
    let pool = setup_db().await;
    let service = EnrollmentService::new(pool);

    let err = service
        .enroll("no-such-course-id", STUDENT)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn unenroll_without_record_is_not_found() {
    let pool = setup_db().await;
    let course = insert_course(&pool, "Never Enrolled").await;
    let service = EnrollmentService::new(pool);

    let err = service.unenroll(&course.id, STUDENT).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn reenroll_after_unenroll_leaves_exactly_one_record() {
    let pool = setup_db().await;
    let course = insert_course(&pool, "Re-enrollable").await;
    let service = EnrollmentService::new(pool.clone());

    service.enroll(&course.id, STUDENT).await.unwrap();
    service.unenroll(&course.id, STUDENT).await.unwrap();
    service.enroll(&course.id, STUDENT).await.unwrap();

    let count = db::enrollments::count_for_student(&pool, STUDENT)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let mine = service.list_mine(STUDENT).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].status, EnrollmentStatus::Active);
}

#[tokio::test]
async fn concurrent_double_enroll_yields_one_success_one_conflict() {
    let pool = setup_db().await;
    let course = insert_course(&pool, "Contended Course").await;
    let service = EnrollmentService::new(pool.clone());

    let (a, b) = tokio::join!(
        service.enroll(&course.id, STUDENT),
        service.enroll(&course.id, STUDENT)
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1, "exactly one enroll must win: {a:?} / {b:?}");

    let loser = if a.is_err() { a } else { b };
    assert!(
        matches!(loser, Err(AppError::Conflict(_))),
        "loser must see a conflict, not a fault: {loser:?}"
    );

    let count = db::enrollments::count_for_student(&pool, STUDENT)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn inactive_course_is_hidden_from_catalog_but_still_enrollable() {
    let pool = setup_db().await;
    let active = insert_course(&pool, "Visible Course").await;
    let inactive = insert_course(&pool, "Hidden Course").await;

    sqlx::query("UPDATE courses SET is_active = 0 WHERE id = ?")
        .bind(&inactive.id)
        .execute(&pool)
        .await
        .unwrap();

    let listed = db::courses::list_active(&pool).await.unwrap();
    assert!(listed.iter().any(|c| c.id == active.id));
    assert!(listed.iter().all(|c| c.id != inactive.id));

    // Enroll checks existence only, not the active flag.
    let service = EnrollmentService::new(pool);
    service.enroll(&inactive.id, STUDENT).await.unwrap();
}

#[tokio::test]
async fn list_mine_is_empty_for_unknown_student() {
    let pool = setup_db().await;
    insert_course(&pool, "Unrelated Course").await;
    let service = EnrollmentService::new(pool);

    let mine = service.list_mine("nobody").await.unwrap();
    assert!(mine.is_empty());
}

#[tokio::test]
async fn list_mine_orders_most_recent_enrollment_first() {
    let pool = setup_db().await;
    let first = insert_course(&pool, "Enrolled First").await;
    let second = insert_course(&pool, "Enrolled Second").await;
    let service = EnrollmentService::new(pool);

    service.enroll(&first.id, STUDENT).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service.enroll(&second.id, STUDENT).await.unwrap();

    let mine = service.list_mine(STUDENT).await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0].course.title, "Enrolled Second");
    assert_eq!(mine[1].course.title, "Enrolled First");
}
