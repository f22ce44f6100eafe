//! Course catalog store. Read-mostly; writes happen only through seeding.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Course, CourseSummary, NewCourse};

pub async fn list_active(db: &SqlitePool) -> Result<Vec<CourseSummary>, sqlx::Error> {
    sqlx::query_as::<_, CourseSummary>(
        "SELECT id, title, description, instructor, duration, category, level
         FROM courses
         WHERE is_active = 1
         ORDER BY created_at DESC, rowid DESC",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &SqlitePool, id: &str) -> Result<Option<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, title, description, instructor, duration, category, level,
                is_active, created_at, updated_at
         FROM courses
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

/// Oldest courses first; used by seeding to pick the initial enrollments.
pub async fn first_created(db: &SqlitePool, limit: i64) -> Result<Vec<Course>, sqlx::Error> {
    sqlx::query_as::<_, Course>(
        "SELECT id, title, description, instructor, duration, category, level,
                is_active, created_at, updated_at
         FROM courses
         ORDER BY created_at ASC, rowid ASC
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(db)
    .await
}

pub async fn count(db: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
        .fetch_one(db)
        .await
}

pub async fn insert(db: &SqlitePool, req: NewCourse) -> Result<Course, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT INTO courses
            (id, title, description, instructor, duration, category, level,
             is_active, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(&id)
    .bind(&req.title)
    .bind(&req.description)
    .bind(&req.instructor)
    .bind(&req.duration)
    .bind(req.category)
    .bind(req.level)
    .bind(&now)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Course {
        id,
        title: req.title,
        description: req.description,
        instructor: req.instructor,
        duration: req.duration,
        category: req.category,
        level: req.level,
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
    })
}
