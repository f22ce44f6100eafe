use std::env;

pub const DEFAULT_STUDENT_ID: &str = "dummyStudent123";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub student_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://lms.db?mode=rwc".to_string());
        let student_id =
            env::var("DEFAULT_STUDENT_ID").unwrap_or_else(|_| DEFAULT_STUDENT_ID.to_string());

        Self {
            port,
            database_url,
            student_id,
        }
    }
}
