use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Category {
    Programming,
    #[serde(rename = "Data Science")]
    #[sqlx(rename = "Data Science")]
    DataScience,
    Business,
    Security,
    Design,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub category: Category,
    pub level: Level,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Projection returned by catalog listings and embedded in enrollment reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub category: Category,
    pub level: Level,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub category: Category,
    pub level: Level,
}

impl NewCourse {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Course title is required".to_string());
        }
        if self.title.len() > MAX_TITLE_LEN {
            return Err(format!(
                "Course title cannot exceed {} characters",
                MAX_TITLE_LEN
            ));
        }
        if self.description.trim().is_empty() {
            return Err("Course description is required".to_string());
        }
        if self.description.len() > MAX_DESCRIPTION_LEN {
            return Err(format!(
                "Course description cannot exceed {} characters",
                MAX_DESCRIPTION_LEN
            ));
        }
        if self.instructor.trim().is_empty() {
            return Err("Instructor name is required".to_string());
        }
        if self.duration.trim().is_empty() {
            return Err("Course duration is required".to_string());
        }
        Ok(())
    }
}
