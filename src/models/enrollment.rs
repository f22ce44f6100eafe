use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::CourseSummary;

/// `completed` and `dropped` exist in the schema but no exposed operation
/// transitions into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    pub student_id: String,
    pub enrolled_at: String,
    pub status: EnrollmentStatus,
    pub progress: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Enrollment read model: the course reference is always resolved to a
/// consistently shaped summary, never a bare identifier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentWithCourse {
    pub id: String,
    pub course_id: String,
    pub student_id: String,
    pub enrolled_at: String,
    pub status: EnrollmentStatus,
    pub progress: i32,
    pub course: CourseSummary,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    #[serde(default)]
    pub course_id: String,
}
