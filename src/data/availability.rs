//! Availability ledger repository.
//!
//! The ledger is open-world: a room/date pair with no row is available. Rows
//! exist only where a date was explicitly blocked by a booking, blocked
//! manually, or explicitly opened with a price override. All range operations
//! treat `[check_in, check_out)` as half-open; the check-out day is never
//! consulted.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

/// Result of attempting to block a single date.
#[derive(Debug)]
pub enum BlockOutcome {
    /// The date was free and is now blocked.
    Blocked(entity::room_availability::Model),
    /// The date was already blocked, either by an existing row or by a
    /// concurrent insert that won the unique constraint race.
    AlreadyBlocked,
}

pub struct AvailabilityRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AvailabilityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether every date in `[check_in, check_out)` is free.
    ///
    /// True iff no row with `is_available = false` exists in the range.
    /// Rows with `is_available = true` (explicit opens) do not count against
    /// availability.
    pub async fn is_range_available(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<bool, DbErr> {
        let blocked = entity::prelude::RoomAvailability::find()
            .filter(entity::room_availability::Column::RoomId.eq(room_id))
            .filter(entity::room_availability::Column::IsAvailable.eq(false))
            .filter(entity::room_availability::Column::Date.gte(check_in))
            .filter(entity::room_availability::Column::Date.lt(check_out))
            .count(self.db)
            .await?;

        Ok(blocked == 0)
    }

    /// Blocks a single date for a room.
    ///
    /// - No row for (room, date): inserts a blocked row. A unique constraint
    ///   violation means a concurrent writer inserted first and maps to
    ///   `AlreadyBlocked` rather than an error.
    /// - Existing row with `is_available = true`: flips it to blocked.
    /// - Existing row already blocked: `AlreadyBlocked`.
    pub async fn block_date(
        &self,
        room_id: i32,
        date: NaiveDate,
        price_override: Option<f64>,
    ) -> Result<BlockOutcome, DbErr> {
        let existing = entity::prelude::RoomAvailability::find()
            .filter(entity::room_availability::Column::RoomId.eq(room_id))
            .filter(entity::room_availability::Column::Date.eq(date))
            .one(self.db)
            .await?;

        if let Some(entry) = existing {
            if !entry.is_available {
                return Ok(BlockOutcome::AlreadyBlocked);
            }

            let mut active: entity::room_availability::ActiveModel = entry.into();
            active.is_available = ActiveValue::Set(false);
            if price_override.is_some() {
                active.price_override = ActiveValue::Set(price_override);
            }

            return Ok(BlockOutcome::Blocked(active.update(self.db).await?));
        }

        let insert = entity::room_availability::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(room_id),
            date: ActiveValue::Set(date),
            is_available: ActiveValue::Set(false),
            price_override: ActiveValue::Set(price_override),
        }
        .insert(self.db)
        .await;

        match insert {
            Ok(entry) => Ok(BlockOutcome::Blocked(entry)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(BlockOutcome::AlreadyBlocked)
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes blocked rows strictly within `[check_in, check_out)`.
    ///
    /// Explicitly opened rows in the range are left untouched. Returns the
    /// number of rows removed.
    pub async fn unblock_range(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::RoomAvailability::delete_many()
            .filter(entity::room_availability::Column::RoomId.eq(room_id))
            .filter(entity::room_availability::Column::IsAvailable.eq(false))
            .filter(entity::room_availability::Column::Date.gte(check_in))
            .filter(entity::room_availability::Column::Date.lt(check_out))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists blocked entries for a room within `[check_in, check_out)`,
    /// ordered by date.
    pub async fn list_unavailable(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<entity::room_availability::Model>, DbErr> {
        entity::prelude::RoomAvailability::find()
            .filter(entity::room_availability::Column::RoomId.eq(room_id))
            .filter(entity::room_availability::Column::IsAvailable.eq(false))
            .filter(entity::room_availability::Column::Date.gte(check_in))
            .filter(entity::room_availability::Column::Date.lt(check_out))
            .order_by_asc(entity::room_availability::Column::Date)
            .all(self.db)
            .await
    }

    /// Upserts an explicitly open row for a date, used for manual unblocks
    /// and per-date price overrides.
    pub async fn open_date(
        &self,
        room_id: i32,
        date: NaiveDate,
        price_override: Option<f64>,
    ) -> Result<entity::room_availability::Model, DbErr> {
        let existing = entity::prelude::RoomAvailability::find()
            .filter(entity::room_availability::Column::RoomId.eq(room_id))
            .filter(entity::room_availability::Column::Date.eq(date))
            .one(self.db)
            .await?;

        if let Some(entry) = existing {
            let mut active: entity::room_availability::ActiveModel = entry.into();
            active.is_available = ActiveValue::Set(true);
            active.price_override = ActiveValue::Set(price_override);
            return active.update(self.db).await;
        }

        entity::room_availability::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(room_id),
            date: ActiveValue::Set(date),
            is_available: ActiveValue::Set(true),
            price_override: ActiveValue::Set(price_override),
        }
        .insert(self.db)
        .await
    }
}
