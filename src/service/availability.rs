//! Availability endpoints over the ledger.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        availability::{AvailabilityRepository, BlockOutcome},
        room::RoomRepository,
    },
    error::{booking::BookingError, AppError},
    model::availability::{AvailabilityRangeQuery, CreateAvailabilityDto},
};

pub struct AvailabilityService;

impl AvailabilityService {
    pub async fn check(
        db: &DatabaseConnection,
        query: AvailabilityRangeQuery,
    ) -> Result<bool, AppError> {
        if query.check_out_date <= query.check_in_date {
            return Err(BookingError::InvalidRange.into());
        }

        RoomRepository::new(db)
            .find_by_id(query.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", query.room_id)))?;

        Ok(AvailabilityRepository::new(db)
            .is_range_available(query.room_id, query.check_in_date, query.check_out_date)
            .await?)
    }

    pub async fn list_unavailable(
        db: &DatabaseConnection,
        query: AvailabilityRangeQuery,
    ) -> Result<Vec<entity::room_availability::Model>, AppError> {
        if query.check_out_date <= query.check_in_date {
            return Err(BookingError::InvalidRange.into());
        }

        Ok(AvailabilityRepository::new(db)
            .list_unavailable(query.room_id, query.check_in_date, query.check_out_date)
            .await?)
    }

    /// Manual ledger entry: blocks a date or explicitly opens it, with an
    /// optional price override.
    pub async fn create_entry(
        db: &DatabaseConnection,
        dto: CreateAvailabilityDto,
    ) -> Result<entity::room_availability::Model, AppError> {
        RoomRepository::new(db)
            .find_by_id(dto.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", dto.room_id)))?;

        let availability = AvailabilityRepository::new(db);

        if dto.is_available {
            return Ok(availability
                .open_date(dto.room_id, dto.date, dto.price_override)
                .await?);
        }

        match availability
            .block_date(dto.room_id, dto.date, dto.price_override)
            .await?
        {
            BlockOutcome::Blocked(entry) => Ok(entry),
            BlockOutcome::AlreadyBlocked => Err(BookingError::DateAlreadyBlocked.into()),
        }
    }
}
