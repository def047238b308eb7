use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000004_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HotelId))
                    .col(string(Room::Name))
                    .col(string(Room::RoomType))
                    .col(double(Room::PricePerNight))
                    .col(integer(Room::Capacity))
                    .col(text_null(Room::Description))
                    .col(string_null(Room::CancellationPolicy))
                    .col(boolean(Room::HasWifi).default(false))
                    .col(boolean(Room::AllowsPets).default(false))
                    .col(boolean(Room::HasAirConditioning).default(false))
                    .col(boolean(Room::HasTv).default(false))
                    .col(boolean(Room::HasMinibar).default(false))
                    .col(boolean(Room::HasBalcony).default(false))
                    .col(boolean(Room::HasKitchen).default(false))
                    .col(boolean(Room::HasSafe).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel_id")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HotelId,
    Name,
    RoomType,
    PricePerNight,
    Capacity,
    Description,
    CancellationPolicy,
    HasWifi,
    AllowsPets,
    HasAirConditioning,
    HasTv,
    HasMinibar,
    HasBalcony,
    HasKitchen,
    HasSafe,
}
