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
                    .table(HotelPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(HotelPhoto::Id))
                    .col(integer(HotelPhoto::HotelId))
                    .col(string(HotelPhoto::ImageUrl))
                    .col(boolean(HotelPhoto::IsCover).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_photo_hotel_id")
                            .from(HotelPhoto::Table, HotelPhoto::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelPhoto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HotelPhoto {
    Table,
    Id,
    HotelId,
    ImageUrl,
    IsCover,
}
