//! Review creation and hotel review listings.

use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::booking::BookingStatus;

use crate::{
    data::{booking::BookingRepository, hotel::HotelRepository, review::ReviewRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{hotel::HotelReviewsQuery, review::CreateReviewDto},
};

pub struct ReviewService;

impl ReviewService {
    /// Creates a review for a completed booking.
    ///
    /// Only the booking's owner may review it, only after completion, and
    /// only once.
    pub async fn create(
        db: &DatabaseConnection,
        user_id: i32,
        dto: CreateReviewDto,
    ) -> Result<entity::review::Model, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let booking = BookingRepository::new(db)
            .find_by_id(dto.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", dto.booking_id)))?;

        if booking.user_id != Some(user_id) {
            return Err(AuthError::AccessDenied(user_id, "review this booking".to_string()).into());
        }

        if booking.status != BookingStatus::Completed {
            return Err(BookingError::InvalidState {
                status: booking.status.to_value(),
                action: "reviewed".to_string(),
            }
            .into());
        }

        let reviews = ReviewRepository::new(db);
        if !reviews.find_by_booking_id(booking.id).await?.is_empty() {
            return Err(AppError::BadRequest(
                "Booking already has a review".to_string(),
            ));
        }

        Ok(reviews
            .create(user_id, booking.id, dto.rating, dto.text)
            .await?)
    }

    pub async fn list_for_hotel(
        db: &DatabaseConnection,
        hotel_id: i32,
        query: HotelReviewsQuery,
    ) -> Result<Vec<entity::review::Model>, AppError> {
        HotelRepository::new(db)
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {hotel_id} not found")))?;

        Ok(ReviewRepository::new(db)
            .list_for_hotel(hotel_id, query.min_rating, query.only_with_text)
            .await?)
    }
}
