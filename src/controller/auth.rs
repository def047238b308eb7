use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{
        api::MessageDto,
        user::{
            LoginDto, RegisterDto, RequestPasswordResetDto, ResetPasswordDto, UserDto,
            VerifyResetCodeDto,
        },
    },
    service::user::UserService,
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::register(&state.db, &state.mailer, payload).await?;

    // Registration logs the new account straight in.
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::login(&state.db, payload).await?;

    let auth_session = AuthSession::new(&session);
    // Session fixation guard: drop any prior session state before binding
    // the authenticated user id.
    auth_session.clear().await;
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<RequestPasswordResetDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::request_password_reset(&state.db, &state.reset_codes, &state.mailer, &payload.email)
        .await?;

    // Same response whether or not the account exists.
    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "If the email is registered, a reset code has been sent.".to_string(),
        }),
    ))
}

pub async fn verify_reset_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyResetCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    if !state.reset_codes.verify(&payload.email, &payload.code).await {
        return Err(AuthError::InvalidResetCode.into());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Code is valid".to_string(),
        }),
    ))
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::reset_password(&state.db, &state.reset_codes, payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password has been reset".to_string(),
        }),
    ))
}
