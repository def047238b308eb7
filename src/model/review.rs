//! Review DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateReviewDto {
    pub booking_id: i32,
    pub rating: i32,
    pub text: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewDto {
    pub id: i32,
    pub rating: i32,
    pub text: Option<String>,
    pub user_id: Option<i32>,
    pub booking_id: Option<i32>,
}

impl From<entity::review::Model> for ReviewDto {
    fn from(review: entity::review::Model) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            text: review.text,
            user_id: review.user_id,
            booking_id: review.booking_id,
        }
    }
}
