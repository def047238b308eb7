//! Review factory for creating test review entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    rating: i32,
    text: Option<String>,
    user_id: Option<i32>,
    booking_id: Option<i32>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: `4`
    /// - text: `Some("Test review")`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, booking_id: i32) -> Self {
        Self {
            db,
            rating: 4,
            text: Some("Test review".to_string()),
            user_id: Some(user_id),
            booking_id: Some(booking_id),
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::NotSet,
            rating: ActiveValue::Set(self.rating),
            text: ActiveValue::Set(self.text),
            user_id: ActiveValue::Set(self.user_id),
            booking_id: ActiveValue::Set(self.booking_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given user and booking.
pub async fn create_review(
    db: &DatabaseConnection,
    user_id: i32,
    booking_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, user_id, booking_id).build().await
}
