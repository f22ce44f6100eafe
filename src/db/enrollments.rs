//! Enrollment store. The UNIQUE (course_id, student_id) constraint is the
//! authoritative guard against duplicate enrollment; reads always resolve the
//! course reference to an embedded summary.

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::models::{
    Category, CourseSummary, Enrollment, EnrollmentStatus, EnrollmentWithCourse, Level,
};

#[derive(Debug, FromRow)]
struct EnrollmentCourseRow {
    id: String,
    course_id: String,
    student_id: String,
    enrolled_at: String,
    status: EnrollmentStatus,
    progress: i32,
    title: String,
    description: String,
    instructor: String,
    duration: String,
    category: Category,
    level: Level,
}

impl From<EnrollmentCourseRow> for EnrollmentWithCourse {
    fn from(row: EnrollmentCourseRow) -> Self {
        EnrollmentWithCourse {
            id: row.id,
            course_id: row.course_id.clone(),
            student_id: row.student_id,
            enrolled_at: row.enrolled_at,
            status: row.status,
            progress: row.progress,
            course: CourseSummary {
                id: row.course_id,
                title: row.title,
                description: row.description,
                instructor: row.instructor,
                duration: row.duration,
                category: row.category,
                level: row.level,
            },
        }
    }
}

const JOINED_SELECT: &str = "SELECT e.id, e.course_id, e.student_id, e.enrolled_at, e.status, e.progress,
        c.title, c.description, c.instructor, c.duration, c.category, c.level
 FROM enrollments e
 JOIN courses c ON c.id = e.course_id";

pub async fn find_by_student(
    db: &SqlitePool,
    student_id: &str,
) -> Result<Vec<EnrollmentWithCourse>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EnrollmentCourseRow>(&format!(
        "{JOINED_SELECT}
         WHERE e.student_id = ?
         ORDER BY e.enrolled_at DESC, e.rowid DESC"
    ))
    .bind(student_id)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_with_course(
    db: &SqlitePool,
    course_id: &str,
    student_id: &str,
) -> Result<Option<EnrollmentWithCourse>, sqlx::Error> {
    let row = sqlx::query_as::<_, EnrollmentCourseRow>(&format!(
        "{JOINED_SELECT}
         WHERE e.course_id = ? AND e.student_id = ?"
    ))
    .bind(course_id)
    .bind(student_id)
    .fetch_optional(db)
    .await?;

    Ok(row.map(Into::into))
}

pub async fn exists(
    db: &SqlitePool,
    course_id: &str,
    student_id: &str,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM enrollments WHERE course_id = ? AND student_id = ?)",
    )
    .bind(course_id)
    .bind(student_id)
    .fetch_one(db)
    .await
}

pub async fn count_for_student(db: &SqlitePool, student_id: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM enrollments WHERE student_id = ?")
        .bind(student_id)
        .fetch_one(db)
        .await
}

/// Optimistic insert: callers translate a unique-violation error into the
/// domain's already-enrolled outcome.
pub async fn insert(
    db: &SqlitePool,
    course_id: &str,
    student_id: &str,
) -> Result<Enrollment, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();
    let status = EnrollmentStatus::Active;

    sqlx::query(
        "INSERT INTO enrollments
            (id, course_id, student_id, enrolled_at, status, progress, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, 0, ?, ?)",
    )
    .bind(&id)
    .bind(course_id)
    .bind(student_id)
    .bind(&now)
    .bind(status)
    .bind(&now)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Enrollment {
        id,
        course_id: course_id.to_string(),
        student_id: student_id.to_string(),
        enrolled_at: now.clone(),
        status,
        progress: 0,
        created_at: now.clone(),
        updated_at: now,
    })
}

pub async fn delete_one(
    db: &SqlitePool,
    course_id: &str,
    student_id: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM enrollments WHERE course_id = ? AND student_id = ?")
        .bind(course_id)
        .bind(student_id)
        .execute(db)
        .await?
        .rows_affected();

    Ok(result > 0)
}
