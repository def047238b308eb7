use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000001_create_user_table::User;
use super::m20260801_000003_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string(Hotel::Name))
                    .col(string(Hotel::Address))
                    .col(integer_null(Hotel::Stars))
                    .col(text_null(Hotel::Description))
                    .col(double_null(Hotel::Latitude))
                    .col(double_null(Hotel::Longitude))
                    .col(integer(Hotel::CityId))
                    .col(integer_null(Hotel::OwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_city_id")
                            .from(Hotel::Table, Hotel::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_owner_id")
                            .from(Hotel::Table, Hotel::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Address,
    Stars,
    Description,
    Latitude,
    Longitude,
    CityId,
    OwnerId,
}
