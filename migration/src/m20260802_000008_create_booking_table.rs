use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;
use super::m20260801_000006_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer_null(Booking::UserId))
                    .col(integer_null(Booking::RoomId))
                    .col(date(Booking::BookingDate))
                    .col(date(Booking::CheckInDate))
                    .col(date(Booking::CheckOutDate))
                    .col(string_len(Booking::Status, 50).default("pending"))
                    .col(string_null(Booking::AdditionalInfo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_room_id")
                            .from(Booking::Table, Booking::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    RoomId,
    BookingDate,
    CheckInDate,
    CheckOutDate,
    Status,
    AdditionalInfo,
}
