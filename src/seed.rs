//! One-time sample data: runs at startup and only fills stores that are empty.

use sqlx::SqlitePool;
use tracing::info;

use crate::db::{courses, enrollments};
use crate::error::AppError;
use crate::models::{Category, Level, NewCourse};

pub fn sample_courses() -> Vec<NewCourse> {
    vec![
        NewCourse {
            title: "Introduction to Web Development".to_string(),
            description: "Learn the fundamentals of HTML, CSS, and JavaScript to build modern websites.".to_string(),
            instructor: "Dr. Sarah Johnson".to_string(),
            duration: "8 weeks".to_string(),
            category: Category::Programming,
            level: Level::Beginner,
        },
        NewCourse {
            title: "Advanced React.js".to_string(),
            description: "Master React hooks, context API, and advanced state management techniques.".to_string(),
            instructor: "Prof. Michael Chen".to_string(),
            duration: "10 weeks".to_string(),
            category: Category::Programming,
            level: Level::Advanced,
        },
        NewCourse {
            title: "Data Science Fundamentals".to_string(),
            description: "Introduction to data analysis, statistics, and machine learning concepts.".to_string(),
            instructor: "Dr. Emily Rodriguez".to_string(),
            duration: "12 weeks".to_string(),
            category: Category::DataScience,
            level: Level::Intermediate,
        },
        NewCourse {
            title: "Digital Marketing Strategy".to_string(),
            description: "Learn modern digital marketing techniques including SEO, social media, and analytics.".to_string(),
            instructor: "Prof. David Kim".to_string(),
            duration: "6 weeks".to_string(),
            category: Category::Business,
            level: Level::Beginner,
        },
        NewCourse {
            title: "Mobile App Development".to_string(),
            description: "Build native and cross-platform mobile applications using React Native.".to_string(),
            instructor: "Dr. Lisa Wang".to_string(),
            duration: "14 weeks".to_string(),
            category: Category::Programming,
            level: Level::Intermediate,
        },
        NewCourse {
            title: "Cybersecurity Essentials".to_string(),
            description: "Understand security principles, threats, and protection strategies.".to_string(),
            instructor: "Prof. James Thompson".to_string(),
            duration: "8 weeks".to_string(),
            category: Category::Security,
            level: Level::Intermediate,
        },
    ]
}

/// Insert the fixed sample courses if the catalog is empty, then enroll the
/// default student in the first two courses by creation order if they have no
/// enrollments yet.
pub async fn run(db: &SqlitePool, student_id: &str) -> Result<(), AppError> {
    if courses::count(db).await? == 0 {
        for course in sample_courses() {
            course.validate().map_err(AppError::Validation)?;
            courses::insert(db, course).await?;
        }
        info!("sample courses initialized");
    }

    if enrollments::count_for_student(db, student_id).await? == 0 {
        let first_two = courses::first_created(db, 2).await?;
        for course in &first_two {
            enrollments::insert(db, &course.id, student_id).await?;
        }
        info!(student_id, count = first_two.len(), "sample enrollments initialized");
    }

    Ok(())
}
