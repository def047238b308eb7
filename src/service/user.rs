//! Account management: registration, login, and the password reset flow.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{LoginDto, RegisterDto, ResetPasswordDto},
    service::{mailer::Mailer, reset_code::ResetCodeService},
};

pub struct UserService;

impl UserService {
    /// Registers a new account and sends a welcome email.
    ///
    /// The duplicate check races with concurrent registrations; the unique
    /// index on email decides the race and maps to the same error.
    pub async fn register(
        db: &DatabaseConnection,
        mailer: &Mailer,
        dto: RegisterDto,
    ) -> Result<entity::user::Model, AppError> {
        let users = UserRepository::new(db);

        if users.find_by_email(&dto.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;

        let user = match users
            .create(dto.first_name, dto.last_name, dto.email, password_hash)
            .await
        {
            Ok(user) => user,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailTaken.into());
            }
            Err(e) => return Err(e.into()),
        };

        mailer.send(
            &user.email,
            "Welcome to Stayboard",
            format!(
                "Hi {},\n\nYour account has been created. Happy travels!\n",
                user.first_name
            ),
        );

        Ok(user)
    }

    /// Verifies credentials, returning the user on success.
    pub async fn login(
        db: &DatabaseConnection,
        dto: LoginDto,
    ) -> Result<entity::user::Model, AppError> {
        let user = UserRepository::new(db)
            .find_by_email(&dto.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !bcrypt::verify(&dto.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Issues a reset code and emails it.
    ///
    /// Unknown addresses succeed silently so the endpoint does not reveal
    /// which emails have accounts.
    pub async fn request_password_reset(
        db: &DatabaseConnection,
        reset_codes: &ResetCodeService,
        mailer: &Mailer,
        email: &str,
    ) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(db).find_by_email(email).await? else {
            return Ok(());
        };

        let code = reset_codes.issue(&user.email).await;

        mailer.send(
            &user.email,
            "Your password reset code",
            format!(
                "Hi {},\n\nYour password reset code is {}. It expires in 15 minutes.\n",
                user.first_name, code
            ),
        );

        Ok(())
    }

    /// Consumes a valid reset code and stores the new password hash.
    pub async fn reset_password(
        db: &DatabaseConnection,
        reset_codes: &ResetCodeService,
        dto: ResetPasswordDto,
    ) -> Result<(), AppError> {
        if !reset_codes.consume(&dto.email, &dto.code).await {
            return Err(AuthError::InvalidResetCode.into());
        }

        let users = UserRepository::new(db);
        let user = users
            .find_by_email(&dto.email)
            .await?
            .ok_or(AuthError::InvalidResetCode)?;

        let password_hash = bcrypt::hash(&dto.new_password, bcrypt::DEFAULT_COST)?;
        users.update_password(user, password_hash).await?;

        Ok(())
    }
}
