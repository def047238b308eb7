//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Inserts booking rows directly, bypassing the availability ledger. Tests
/// that care about blocked dates should create them through the booking
/// service or the availability repository instead.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use entity::booking::BookingStatus;
///
/// let booking = BookingFactory::new(&db, user.id, room.id)
///     .status(BookingStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    room_id: Option<i32>,
    booking_date: NaiveDate,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    status: BookingStatus,
    additional_info: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - booking_date: today
    /// - check_in_date: 7 days from today
    /// - check_out_date: 9 days from today
    /// - status: `BookingStatus::Pending`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            user_id: Some(user_id),
            room_id: Some(room_id),
            booking_date: today,
            check_in_date: today + Duration::days(7),
            check_out_date: today + Duration::days(9),
            status: BookingStatus::Pending,
            additional_info: None,
        }
    }

    pub fn booking_date(mut self, booking_date: NaiveDate) -> Self {
        self.booking_date = booking_date;
        self
    }

    pub fn check_in_date(mut self, check_in_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self
    }

    pub fn check_out_date(mut self, check_out_date: NaiveDate) -> Self {
        self.check_out_date = check_out_date;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn additional_info(mut self, additional_info: Option<String>) -> Self {
        self.additional_info = additional_info;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            booking_date: ActiveValue::Set(self.booking_date),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            status: ActiveValue::Set(self.status),
            additional_info: ActiveValue::Set(self.additional_info),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default dates for the given user and room.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, room_id).build().await
}
