use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Stand-in for a logged-in user until authentication exists. Only the
    /// API handlers read this; every service call takes an explicit student id.
    pub student_id: String,
}
