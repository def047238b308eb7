use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            smtp_host: std::env::var("SMTP_HOST")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_HOST".to_string()))?,
            smtp_username: std::env::var("SMTP_USERNAME")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_USERNAME".to_string()))?,
            smtp_password: std::env::var("SMTP_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_PASSWORD".to_string()))?,
            mail_from: std::env::var("MAIL_FROM")
                .map_err(|_| ConfigError::MissingEnvVar("MAIL_FROM".to_string()))?,
        })
    }
}
