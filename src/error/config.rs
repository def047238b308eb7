use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Startup fails fast on the first missing variable. `DATABASE_URL` and
    /// the SMTP settings are loaded from the environment or a `.env` file.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
