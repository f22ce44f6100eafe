//! HTTP boundary: request/response translation only, no business rules.

use axum::extract::Path;
use axum::routing::{delete, post};
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use chrono::Utc;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::db;
use crate::error::AppError;
use crate::models::{Course, CourseSummary, EnrollRequest, EnrollmentWithCourse};
use crate::services::EnrollmentService;
use crate::state::AppState;

#[derive(Serialize)]
struct ListResponse<T> {
    success: bool,
    count: usize,
    data: Vec<T>,
}

#[derive(Serialize)]
struct ItemResponse<T> {
    success: bool,
    data: T,
}

#[derive(Serialize)]
struct CreatedResponse<T> {
    success: bool,
    message: String,
    data: T,
}

#[derive(Serialize)]
struct StatusResponse {
    success: bool,
    message: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/courses", get(list_courses))
        .route("/api/courses/{id}", get(get_course))
        .route("/api/enrollments/me", get(list_my_enrollments))
        .route("/api/enrollments", post(create_enrollment))
        .route("/api/enrollments/{course_id}", delete(delete_enrollment))
        .fallback(route_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "LMS API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<CourseSummary>>, AppError> {
    let courses = db::courses::list_active(&state.db).await?;
    Ok(Json(ListResponse {
        success: true,
        count: courses.len(),
        data: courses,
    }))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse<Course>>, AppError> {
    let course = db::courses::find_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    Ok(Json(ItemResponse {
        success: true,
        data: course,
    }))
}

async fn list_my_enrollments(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EnrollmentWithCourse>>, AppError> {
    let service = EnrollmentService::new(state.db.clone());
    let enrollments = service.list_mine(&state.student_id).await?;

    Ok(Json(ListResponse {
        success: true,
        count: enrollments.len(),
        data: enrollments,
    }))
}

async fn create_enrollment(
    State(state): State<AppState>,
    Json(req): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<CreatedResponse<EnrollmentWithCourse>>), AppError> {
    let service = EnrollmentService::new(state.db.clone());
    let enrollment = service.enroll(&req.course_id, &state.student_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            message: "Successfully enrolled in course".to_string(),
            data: enrollment,
        }),
    ))
}

async fn delete_enrollment(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<StatusResponse>, AppError> {
    let service = EnrollmentService::new(state.db.clone());
    service.unenroll(&course_id, &state.student_id).await?;

    Ok(Json(StatusResponse {
        success: true,
        message: "Successfully unenrolled from course".to_string(),
    }))
}

async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Route not found" })),
    )
}
