use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000006_create_room_table::Room;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAvailability::Table)
                    .if_not_exists()
                    .col(pk_auto(RoomAvailability::Id))
                    .col(integer(RoomAvailability::RoomId))
                    .col(date(RoomAvailability::Date))
                    .col(boolean(RoomAvailability::IsAvailable).default(true))
                    .col(double_null(RoomAvailability::PriceOverride))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_availability_room_id")
                            .from(RoomAvailability::Table, RoomAvailability::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One ledger row per room per calendar day. Concurrent bookings of
        // the same date race on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_room_availability_room_id_date")
                    .table(RoomAvailability::Table)
                    .col(RoomAvailability::RoomId)
                    .col(RoomAvailability::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoomAvailability {
    Table,
    Id,
    RoomId,
    Date,
    IsAvailable,
    PriceOverride,
}
