//! The enrollment rule layer: validates the course exists, prevents duplicate
//! enrollment, and allows unenrollment only of an existing record.

use sqlx::SqlitePool;
use tracing::info;

use crate::db::{courses, enrollments};
use crate::error::AppError;
use crate::models::EnrollmentWithCourse;

pub struct EnrollmentService {
    db: SqlitePool,
}

impl EnrollmentService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Enroll `student_id` in `course_id`.
    ///
    /// The `exists` pre-check is advisory; the store's uniqueness constraint
    /// is the serialization point for concurrent double-submits, and a losing
    /// insert surfaces as the same `Conflict` as the pre-check.
    pub async fn enroll(
        &self,
        course_id: &str,
        student_id: &str,
    ) -> Result<EnrollmentWithCourse, AppError> {
        if course_id.is_empty() {
            return Err(AppError::Validation("Course ID is required".to_string()));
        }

        // Existence only; an inactive course is hidden from the catalog list
        // but still enrollable by id.
        if courses::find_by_id(&self.db, course_id).await?.is_none() {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        if enrollments::exists(&self.db, course_id, student_id).await? {
            return Err(AppError::Conflict(
                "Already enrolled in this course".to_string(),
            ));
        }

        if let Err(err) = enrollments::insert(&self.db, course_id, student_id).await {
            if AppError::is_unique_violation(&err) {
                return Err(AppError::Conflict(
                    "Already enrolled in this course".to_string(),
                ));
            }
            return Err(err.into());
        }

        info!(course_id, student_id, "enrolled");

        let enrolled = enrollments::find_with_course(&self.db, course_id, student_id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        Ok(enrolled)
    }

    pub async fn unenroll(&self, course_id: &str, student_id: &str) -> Result<(), AppError> {
        let deleted = enrollments::delete_one(&self.db, course_id, student_id).await?;
        if !deleted {
            return Err(AppError::NotFound("Enrollment not found".to_string()));
        }

        info!(course_id, student_id, "unenrolled");
        Ok(())
    }

    /// All of the student's enrollments with embedded course summaries; an
    /// empty list is a valid result.
    pub async fn list_mine(
        &self,
        student_id: &str,
    ) -> Result<Vec<EnrollmentWithCourse>, AppError> {
        let enrollments = enrollments::find_by_student(&self.db, student_id).await?;
        Ok(enrollments)
    }
}
