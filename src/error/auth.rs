use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the current session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user id that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the permission for this operation.
    ///
    /// Results in a 403 Forbidden response. The message is logged server-side
    /// only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Email or password did not match a stored account.
    ///
    /// Results in a 401 Unauthorized response with a deliberately vague
    /// message so login attempts cannot probe which emails exist.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that is already in use.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email address already registered")]
    EmailTaken,

    /// Password reset code is missing, wrong, or expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired reset code")]
    InvalidResetCode,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// messages. Server-side details (user ids, denial reasons) are logged at debug
/// level and never exposed to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} not found in database", user_id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "An account with this email already exists.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidResetCode => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid or expired reset code.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
