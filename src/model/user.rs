//! Account and authentication DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct RegisterDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Public view of a user account. Never carries the password hash.
#[derive(Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub admin: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            admin: user.admin,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct RequestPasswordResetDto {
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct VerifyResetCodeDto {
    pub email: String,
    pub code: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub email: String,
    pub code: String,
    pub new_password: String,
}
